//! `localStorage`-backed storage backend.

use wasm_bindgen::JsValue;

use landkit_core::storage::{SlotStorage, StorageError, StorageResult};

use crate::error::IntoJsOption;

/// The browser `localStorage` as a [`SlotStorage`] backend.
///
/// Slot keys map 1:1 to `localStorage` keys, so documents written here are
/// readable by an unmodified JavaScript renderer (and vice versa). Writes
/// to `localStorage` also fire native storage events in *other* tabs,
/// which is half of the publish fallback path for free.
pub struct LocalStorageBackend {
    storage: web_sys::Storage,
}

impl LocalStorageBackend {
    /// Bind to the window's `localStorage`.
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().js_ok_or("no window in this context")?;
        let storage = window
            .local_storage()?
            .js_ok_or("localStorage is unavailable")?;
        Ok(Self { storage })
    }
}

fn backend_err(err: JsValue) -> StorageError {
    StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl SlotStorage for LocalStorageBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage.get_item(key).map_err(backend_err)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        // Fails when the quota is exhausted; surfaced, not swallowed.
        self.storage.set_item(key, value).map_err(backend_err)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.storage.remove_item(key).map_err(backend_err)
    }
}

// SAFETY: web_sys::Storage is not thread-safe, but WASM is single-threaded
// so this is safe. We implement Send + Sync to satisfy the SlotStorage
// trait bounds.
unsafe impl Send for LocalStorageBackend {}
unsafe impl Sync for LocalStorageBackend {}
