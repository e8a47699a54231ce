//! Durable key-value slots backing user preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build talks to `window.localStorage`; SSR and tests use an
//! in-process map. Callers only see the `KeyValueStore` trait so preference
//! logic stays testable outside a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every access returns `Result` so callers decide how to degrade. Storage
//! can be disabled by the browser at any time; nothing here panics.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Failure reading or writing a storage slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled).
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),
}

/// A string-keyed slot store.
pub trait KeyValueStore {
    /// Read `key`. `Ok(None)` means the slot was never written.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` to `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, resolved on every call so a late-disabled storage
/// is observed.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn handle() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::handle()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::handle()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

/// In-process store. Clones share the same map, so a clone handed to a new
/// `PreferenceStore` behaves like a reload reading the same durable slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
    failing: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every access, like storage disabled in the browser.
    pub fn failing() -> Self {
        Self { slots: Arc::default(), failing: true }
    }

    /// Seed `key` with a raw value.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.to_owned(), value.to_owned());
        }
        self
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.failing {
            return Err(StorageError::Unavailable);
        }
        let slots = self.slots.lock().map_err(|e| StorageError::Read(e.to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing {
            return Err(StorageError::Unavailable);
        }
        let mut slots = self.slots.lock().map_err(|e| StorageError::Write(e.to_string()))?;
        slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
