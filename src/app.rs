//! Feedback Board App
//!
//! Single page: intro, feedback form, stored reviews and the query tools.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ExportToolbar, FeedbackForm, FeedbackList, NavBar, NotificationArea, QueryPanel, RecentLog};
use crate::context::FeedbackContext;
use crate::store::FeedbackViewState;

#[component]
pub fn App() -> impl IntoView {
    // State; the collection is loaded once, at mount
    let view_store = Store::new(FeedbackViewState::default());
    provide_context(FeedbackContext::new(view_store));

    view! {
        <NavBar />
        <main class="page">
            <section id="about" class="hero">
                <h1>"Feedback Board"</h1>
                <p>"Tell us how we did. Reviews are kept in this browser only."</p>
            </section>

            <section class="form-section">
                <h2>"Leave your feedback"</h2>
                <FeedbackForm />
            </section>

            <section class="list-section">
                <h2>"What people say"</h2>
                <ExportToolbar />
                <FeedbackList />
            </section>

            <QueryPanel />
            <RecentLog />
        </main>
        <NotificationArea />
    }
}
