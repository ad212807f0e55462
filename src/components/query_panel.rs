//! Query Panel Component
//!
//! Keyword search, minimum-rating filter and summary stats over the
//! persisted feedback.

use leptos::prelude::*;

use crate::context::use_feedback;
use crate::export::{feedback_stats, query_feedbacks};
use crate::render::{render_feedback_list, star_glyphs};
use crate::store::store_track_records;

#[component]
pub fn QueryPanel() -> impl IntoView {
    let ctx = use_feedback();

    let (keyword, set_keyword) = signal(String::new());
    let (min_rating, set_min_rating) = signal(1u8);

    // Helpers read storage directly; tracking the mirror re-runs them after each change
    let stats = move || {
        store_track_records(&ctx.view);
        feedback_stats(ctx.storage().as_ref())
    };

    let results_html = move || {
        store_track_records(&ctx.view);
        let results = query_feedbacks(ctx.storage().as_ref(), &keyword.get(), min_rating.get());
        render_feedback_list(&results)
    };

    view! {
        <section class="query-panel">
            <div class="stats-summary">
                {move || {
                    let stats = stats();
                    view! {
                        <p class="stats-total">{format!("{} reviews, average {:.2}", stats.total, stats.average)}</p>
                        <ul class="stats-distribution">
                            {stats.distribution.into_iter().rev().map(|(rating, count)| view! {
                                <li>
                                    <span class="stats-stars">{star_glyphs(rating)}</span>
                                    <span class="stats-count">{count}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    }
                }}
            </div>

            <div class="query-controls">
                <input
                    type="search"
                    placeholder="Search name, company or message..."
                    prop:value=move || keyword.get()
                    on:input=move |ev| set_keyword.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || min_rating.get().to_string()
                    on:change=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<u8>() {
                            set_min_rating.set(value);
                        }
                    }
                >
                    {(1..=5u8).map(|value| view! {
                        <option value=value.to_string()>{format!("{}+ stars", value)}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="query-results" inner_html=results_html></div>
        </section>
    }
}
