//! Feedback List Component

use leptos::prelude::*;

use crate::config::LIST_SECTION_ID;
use crate::context::use_feedback;

/// Stored feedback, newest first
#[component]
pub fn FeedbackList() -> impl IntoView {
    let ctx = use_feedback();
    let rendered_html = move || ctx.render();

    view! {
        <div id=LIST_SECTION_ID class="feedbacks-list" inner_html=rendered_html></div>
    }
}
