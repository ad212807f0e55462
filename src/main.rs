//! Feedback Board Frontend Entry Point

mod app;
mod clock;
mod components;
mod config;
mod context;
mod dom;
mod error;
mod export;
mod feedback_store;
mod models;
mod notify;
mod render;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init_logger(config::LOG_LEVEL) {
        web_sys::console::error_1(&format!("Logger init failed: {}", err).into());
    }
    mount_to_body(App);
}
