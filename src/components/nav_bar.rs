//! Navigation Bar Component
//!
//! In-page links that smooth-scroll to their section.

use leptos::prelude::*;

use crate::config::LIST_SECTION_ID;
use crate::dom::scroll_to_section;

const NAV_LINKS: &[(&str, &str)] = &[
    ("about", "About"),
    ("feedback-form", "Leave feedback"),
    (LIST_SECTION_ID, "Reviews"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <ul class="nav-links">
                {NAV_LINKS.iter().map(|(section, label)| {
                    let section = *section;
                    view! {
                        <li>
                            <a
                                href=format!("#{}", section)
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    scroll_to_section(section);
                                }
                            >
                                {*label}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
