//! Pluggable key-value storage backends.
//!
//! The persistence adapter talks to storage through the [`SlotStorage`]
//! trait so the same store logic runs against an in-memory map (tests,
//! previews), a directory of JSON files (native), or browser
//! `localStorage` (the wasm crate's backend).

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod dir;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use dir::DirStorage;

use thiserror::Error;

/// A storage backend failure.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure, described as text.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Result alias for storage operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// String key-value storage.
///
/// Implementations use interior mutability: all methods take `&self` so a
/// backend can be shared behind an `Arc` between the store, the broadcast
/// fallback strategy, and any second reading context.
pub trait SlotStorage: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any prior value.
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key` if present.
    fn remove(&self, key: &str) -> StorageResult<()>;
}
