//! Page View State
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The feedback
//! collection here mirrors the `FeedbackStore`; notices live only here.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::config::NOTICE_LIFETIME_MS;
use crate::models::{FeedbackRecord, Notice, NoticeKind};
use crate::notify::Notifier;

/// Reactive state rendered by the components
#[derive(Clone, Debug, Default, Store)]
pub struct FeedbackViewState {
    /// Mirror of the stored collection, newest first
    pub records: Vec<FeedbackRecord>,
    /// Notices currently on screen
    pub notices: Vec<Notice>,
    pub next_notice_id: u32,
}

/// Type alias for the store
pub type FeedbackViewStore = Store<FeedbackViewState>;

// ========================
// Store Helper Functions
// ========================

/// Subscribe the current reactive scope to collection changes
pub fn store_track_records(store: &FeedbackViewStore) {
    store.records().track();
}

/// Number of stored records (tracked)
pub fn store_record_count(store: &FeedbackViewStore) -> usize {
    store.records().read().len()
}

pub fn store_set_records(store: &FeedbackViewStore, records: Vec<FeedbackRecord>) {
    *store.records().write() = records;
}

/// Notices on screen (tracked)
pub fn store_notices(store: &FeedbackViewStore) -> Vec<Notice> {
    store.notices().get()
}

/// Append a notice and return its id
pub fn store_push_notice(store: &FeedbackViewStore, message: &str, kind: NoticeKind) -> u32 {
    let id = store.next_notice_id().get_untracked();
    *store.next_notice_id().write() = id.wrapping_add(1);
    store.notices().write().push(Notice {
        id,
        message: message.to_string(),
        kind,
    });
    id
}

/// Remove a notice by ID
pub fn store_dismiss_notice(store: &FeedbackViewStore, notice_id: u32) {
    store.notices().write().retain(|notice| notice.id != notice_id);
}

/// Shows notices in the page and drops them after a fixed delay
#[derive(Clone, Copy)]
pub struct StoreNotifier {
    store: FeedbackViewStore,
}

impl StoreNotifier {
    pub fn new(store: FeedbackViewStore) -> Self {
        Self { store }
    }
}

impl Notifier for StoreNotifier {
    fn notify(&self, message: &str, kind: NoticeKind) {
        let store = self.store;
        let id = store_push_notice(&store, message, kind);
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_LIFETIME_MS).await;
            store_dismiss_notice(&store, id);
        });
    }
}
