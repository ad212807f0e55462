//! Feedback Context
//!
//! Shared handle provided via Leptos Context API. Holds the single
//! `FeedbackStore` of the page next to its reactive view state.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::error::{FeedbackError, FeedbackResult};
use crate::feedback_store::FeedbackStore;
use crate::models::{FeedbackInput, FeedbackRecord, NoticeKind};
use crate::notify::Notifier;
use crate::storage::{BrowserStorage, MemoryStorage, PageStorage};
use crate::store::{store_set_records, store_track_records, FeedbackViewStore, StoreNotifier};

/// Page-wide feedback handle
#[derive(Clone, Copy)]
pub struct FeedbackContext {
    store: StoredValue<FeedbackStore<PageStorage>, LocalStorage>,
    /// Reactive mirror read by the components
    pub view: FeedbackViewStore,
}

impl FeedbackContext {
    /// Open local storage, load the collection and publish it to the view.
    ///
    /// Without local storage the page keeps working on an in-memory map.
    pub fn new(view: FeedbackViewStore) -> Self {
        let notifier = StoreNotifier::new(view);
        let storage: PageStorage = match BrowserStorage::local() {
            Ok(storage) => Rc::new(storage),
            Err(err) => {
                log::warn!("Falling back to in-memory storage: {}", err);
                notifier.notify(&err.to_string(), NoticeKind::Error);
                Rc::new(MemoryStorage::new())
            }
        };

        let store = FeedbackStore::open(storage).with_notifier(notifier);
        if let Some(warning) = store.load_warning() {
            store.notify(&warning.to_string(), NoticeKind::Error);
        }
        store_set_records(&view, store.records().to_vec());

        Self {
            store: StoredValue::new_local(store),
            view,
        }
    }

    /// Submit through the store and refresh the mirror on success
    pub fn submit(&self, input: FeedbackInput) -> FeedbackResult<FeedbackRecord> {
        let result = self
            .store
            .try_update_value(|store| store.submit(input))
            .unwrap_or_else(|| Err(FeedbackError::StorageUnavailable("feedback store disposed".to_string())));
        if result.is_ok() {
            self.refresh();
        }
        result
    }

    /// Re-read persisted state (after clear-all) and re-render
    pub fn reload(&self) {
        self.store.update_value(|store| store.reload());
        self.refresh();
    }

    /// List markup from the store (tracked)
    pub fn render(&self) -> String {
        store_track_records(&self.view);
        self.store.with_value(|store| store.render())
    }

    /// Backend shared with the export helpers
    pub fn storage(&self) -> PageStorage {
        self.store.with_value(|store| store.storage().clone())
    }

    pub fn notify(&self, message: &str, kind: NoticeKind) {
        self.store.with_value(|store| store.notify(message, kind));
    }

    fn refresh(&self) {
        let records = self.store.with_value(|store| store.records().to_vec());
        store_set_records(&self.view, records);
    }
}

/// Get the feedback context
pub fn use_feedback() -> FeedbackContext {
    expect_context::<FeedbackContext>()
}
