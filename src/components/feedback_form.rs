//! Feedback Form Component
//!
//! Collects a new review: name, email, company, star rating and message.

use leptos::prelude::*;
use leptos_star_rating::{clear_rating, create_rating_signals, StarRating};

use crate::config::{LIST_SECTION_ID, SCROLL_DELAY_MS};
use crate::context::use_feedback;
use crate::dom::scroll_to_section_later;
use crate::models::FeedbackInput;

/// Form for submitting feedback
#[component]
pub fn FeedbackForm() -> impl IntoView {
    let ctx = use_feedback();
    let rating = create_rating_signals();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (company, set_company) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = FeedbackInput {
            name: name.get_untracked(),
            email: email.get_untracked(),
            company: company.get_untracked(),
            rating: rating.committed(),
            message: message.get_untracked(),
        };

        // Rejected input stays in the form for correction
        if ctx.submit(input).is_ok() {
            set_name.set(String::new());
            set_email.set(String::new());
            set_company.set(String::new());
            set_message.set(String::new());
            clear_rating(&rating);
            scroll_to_section_later(LIST_SECTION_ID, SCROLL_DELAY_MS);
        }
    };

    view! {
        // Only the store validates; email is free-form and the message may be empty
        <form id="feedback-form" class="feedback-form" novalidate on:submit=submit>
            <div class="form-group">
                <label for="name">"Name *"</label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    type="text"
                    id="email"
                    name="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="company">"Company"</label>
                <input
                    type="text"
                    id="company"
                    name="company"
                    placeholder="Optional"
                    prop:value=move || company.get()
                    on:input=move |ev| set_company.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label>"Rating *"</label>
                <StarRating rating=rating />
            </div>

            <div class="form-group">
                <label for="message">"Message"</label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
            </div>

            <button type="submit" class="submit-btn">"Send feedback"</button>
        </form>
    }
}
