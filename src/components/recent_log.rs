//! Recent Log Component
//!
//! Collapsible view of the lines buffered by the console logger.

use leptos::prelude::*;

/// Last log lines, newest at the bottom. Refreshed on demand.
#[component]
pub fn RecentLog() -> impl IntoView {
    let (lines, set_lines) = signal(console_logger::recent_lines());
    let refresh = move || set_lines.set(console_logger::recent_lines());

    view! {
        <details class="recent-log">
            <summary>"Recent log"</summary>
            <button type="button" class="refresh-btn" on:click=move |_| refresh()>"Refresh"</button>
            <pre class="recent-log-lines">
                {move || {
                    let lines = lines.get();
                    if lines.is_empty() { "Nothing logged yet".to_string() } else { lines.join("\n") }
                }}
            </pre>
        </details>
    }
}
