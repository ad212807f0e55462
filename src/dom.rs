//! Browser Helpers
//!
//! Downloads and in-page scrolling. A missing window, document or target
//! element turns the call into a logged no-op.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions, Url};

use crate::config::DOWNLOAD_REVOKE_DELAY_MS;
use crate::models::ExportFile;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|win| win.document())
}

/// Offer a generated file to the user through a temporary object URL.
///
/// The URL is revoked `DOWNLOAD_REVOKE_DELAY_MS` later.
pub fn trigger_download(file: &ExportFile) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(&file.contents));
    let options = BlobPropertyBag::new();
    options.set_type(file.mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let doc = document().ok_or_else(|| JsValue::from_str("no document"))?;
    let link: HtmlAnchorElement = doc.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(&file.file_name);
    link.click();

    // The browser may still be reading the blob when click() returns
    spawn_local(async move {
        TimeoutFuture::new(DOWNLOAD_REVOKE_DELAY_MS).await;
        if let Err(err) = Url::revoke_object_url(&url) {
            log::warn!("Revoking {} failed: {:?}", url, err);
        }
    });
    log::info!("Exported {} ({} bytes)", file.file_name, file.contents.len());
    Ok(())
}

/// Smooth-scroll an element into view by id
pub fn scroll_to_section(section_id: &str) {
    let Some(element) = document().and_then(|doc| doc.get_element_by_id(section_id)) else {
        log::debug!("No section #{} to scroll to", section_id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Scroll after `delay_ms`, once the current render has settled
pub fn scroll_to_section_later(section_id: &'static str, delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        scroll_to_section(section_id);
    });
}
