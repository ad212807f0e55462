//! Notification Area Component
//!
//! Transient success/error notices. Removal is driven by the notifier timer.

use leptos::prelude::*;

use crate::context::use_feedback;
use crate::store::store_notices;

#[component]
pub fn NotificationArea() -> impl IntoView {
    let ctx = use_feedback();

    view! {
        <div class="notifications">
            <For
                each=move || store_notices(&ctx.view)
                key=|notice| notice.id
                children=move |notice| {
                    view! {
                        <div class=notice.kind.class()>{notice.message}</div>
                    }
                }
            />
        </div>
    }
}
