//! Export Toolbar Component
//!
//! JSON/CSV downloads and the confirmed clear-all.

use leptos::prelude::*;

use crate::components::ClearAllButton;
use crate::context::use_feedback;
use crate::dom::trigger_download;
use crate::error::FeedbackResult;
use crate::export::{clear_all_feedbacks, export_csv, export_json};
use crate::models::{ExportFile, NoticeKind};

#[component]
pub fn ExportToolbar() -> impl IntoView {
    let ctx = use_feedback();

    let offer = move |file: FeedbackResult<ExportFile>| match file {
        Ok(file) => {
            if let Err(err) = trigger_download(&file) {
                log::error!("Download of {} failed: {:?}", file.file_name, err);
                ctx.notify("Download failed", NoticeKind::Error);
            }
        }
        Err(err) => ctx.notify(&err.to_string(), NoticeKind::Error),
    };

    // File names use the UTC date
    let today = || chrono::Utc::now().date_naive();

    let on_clear = move |_: ()| {
        // The button's own Delete step is the confirmation
        match clear_all_feedbacks(ctx.storage().as_ref(), || true) {
            Ok(_) => ctx.reload(),
            Err(err) => ctx.notify(&err.to_string(), NoticeKind::Error),
        }
    };

    view! {
        <div class="export-toolbar">
            <button class="export-btn" on:click=move |_| offer(export_json(ctx.storage().as_ref(), today()))>
                "Export JSON"
            </button>
            <button class="export-btn" on:click=move |_| offer(export_csv(ctx.storage().as_ref(), today()))>
                "Export CSV"
            </button>
            <ClearAllButton on_clear=on_clear />
        </div>
    }
}
