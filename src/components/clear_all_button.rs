//! Clear All Button Component
//!
//! Two-step removal of every stored review. The first click arms the
//! button and names how many reviews will go; only the second click
//! deletes.

use leptos::prelude::*;

use crate::context::use_feedback;
use crate::store::store_record_count;

/// Confirmation question for clearing `count` reviews
pub fn clear_prompt(count: usize) -> String {
    match count {
        0 => "There is no feedback to delete.".to_string(),
        1 => "Delete the only review? This cannot be undone.".to_string(),
        n => format!("Delete all {} reviews? This cannot be undone.", n),
    }
}

#[component]
pub fn ClearAllButton(#[prop(into)] on_clear: Callback<()>) -> impl IntoView {
    let ctx = use_feedback();
    let (armed, set_armed) = signal(false);
    let count = move || store_record_count(&ctx.view);

    view! {
        <Show
            when=move || armed.get()
            fallback=move || view! {
                <button
                    class="clear-btn"
                    disabled=move || count() == 0
                    on:click=move |_| set_armed.set(true)
                >
                    "Clear all"
                </button>
            }
        >
            <span class="clear-confirm" role="alertdialog">
                <span class="clear-confirm-text">{move || clear_prompt(count())}</span>
                <button
                    class="clear-confirm-delete"
                    disabled=move || count() == 0
                    on:click=move |_| {
                        set_armed.set(false);
                        on_clear.run(());
                    }
                >
                    "Delete"
                </button>
                <button class="clear-confirm-keep" on:click=move |_| set_armed.set(false)>
                    "Keep"
                </button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_the_count() {
        assert_eq!(clear_prompt(3), "Delete all 3 reviews? This cannot be undone.");
    }

    #[test]
    fn test_prompt_singular_and_empty() {
        assert_eq!(clear_prompt(1), "Delete the only review? This cannot be undone.");
        assert_eq!(clear_prompt(0), "There is no feedback to delete.");
    }
}
