//! Storage Backends
//!
//! Key/value persistence behind the feedback store. The browser build uses
//! `window.localStorage`; tests use the in-memory map.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{FeedbackError, FeedbackResult};

/// Minimal key/value contract the store needs
pub trait FeedbackStorage {
    /// Read a value, `None` when the key is absent
    fn get(&self, key: &str) -> FeedbackResult<Option<String>>;

    /// Overwrite a value
    fn set(&self, key: &str, value: &str) -> FeedbackResult<()>;

    /// Delete a key (no-op if absent)
    fn remove(&self, key: &str) -> FeedbackResult<()>;
}

impl<S: FeedbackStorage + ?Sized> FeedbackStorage for &S {
    fn get(&self, key: &str) -> FeedbackResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> FeedbackResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> FeedbackResult<()> {
        (**self).remove(key)
    }
}

impl<S: FeedbackStorage + ?Sized> FeedbackStorage for Rc<S> {
    fn get(&self, key: &str) -> FeedbackResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> FeedbackResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> FeedbackResult<()> {
        (**self).remove(key)
    }
}

/// Shared handle used by the page
pub type PageStorage = Rc<dyn FeedbackStorage>;

/// `window.localStorage`
#[derive(Clone)]
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    /// Local storage of the current window
    pub fn local() -> FeedbackResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| FeedbackError::StorageUnavailable("no window".to_string()))?;
        let inner = window
            .local_storage()
            .map_err(|e| FeedbackError::StorageUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| FeedbackError::StorageUnavailable("localStorage disabled".to_string()))?;
        Ok(Self { inner })
    }
}

impl FeedbackStorage for BrowserStorage {
    fn get(&self, key: &str) -> FeedbackResult<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| FeedbackError::StorageUnavailable(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> FeedbackResult<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| FeedbackError::StorageUnavailable(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> FeedbackResult<()> {
        self.inner
            .remove_item(key)
            .map_err(|e| FeedbackError::StorageUnavailable(format!("{:?}", e)))
    }
}

/// In-memory storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects every write, like a full quota
    pub fn read_only() -> Self {
        Self {
            entries: RefCell::default(),
            read_only: true,
        }
    }

    /// Seed a raw value directly
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }
}

impl FeedbackStorage for MemoryStorage {
    fn get(&self, key: &str) -> FeedbackResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> FeedbackResult<()> {
        if self.read_only {
            return Err(FeedbackError::StorageUnavailable("read-only storage".to_string()));
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> FeedbackResult<()> {
        if self.read_only {
            return Err(FeedbackError::StorageUnavailable("read-only storage".to_string()));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
