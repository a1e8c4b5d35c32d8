//! The persistence adapter: named document slots over a storage backend.
//!
//! Two fixed slots hold the serialized [`Document`]: `draft` (rewritten on
//! every edit) and `published` (rewritten only by an explicit publish).
//! The slot keys are part of the external interface — an unmodified
//! renderer reads `publishedLandingPageData` directly — so they must not
//! change.
//!
//! Malformed stored JSON is a recoverable condition here, not an error:
//! a slot that fails to parse reads as absent, with a diagnostic log line.

use std::sync::Arc;

use crate::error::Result;
use crate::schema::{Document, PartialDocument};
use crate::storage::SlotStorage;

/// A named persistent document slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The most recently edited, not-necessarily-live document.
    Draft,
    /// The point-in-time snapshot designated as currently live.
    Published,
}

impl Slot {
    /// The fixed storage key for this slot.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Slot::Draft => "landingPageData",
            Slot::Published => "publishedLandingPageData",
        }
    }
}

/// Read/parse/write operations against the two document slots.
///
/// Owns slot mechanics exclusively: nothing else in the crate writes
/// document keys to the backend directly (the broadcast fallback rewrites
/// the published key, but goes through [`SlotStore::write_slot`] too).
#[derive(Debug)]
pub struct SlotStore<S> {
    storage: Arc<S>,
}

impl<S> Clone for SlotStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S: SlotStorage> SlotStore<S> {
    /// Create an adapter over a shared storage backend.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// The underlying shared backend.
    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    /// Read and parse a slot.
    ///
    /// Returns `None` when the slot is absent — and, identically, when the
    /// stored bytes are not a valid document (the malformed case is logged
    /// for diagnostics, never raised). A parsed document always carries
    /// all five sections: missing ones are backfilled wholesale from
    /// content defaults.
    pub fn read_slot(&self, slot: Slot) -> Option<Document> {
        let key = slot.storage_key();
        let raw = match self.storage.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                log::warn!("failed to read slot {key}: {err}");
                return None;
            }
        };

        match serde_json::from_str::<PartialDocument>(&raw) {
            Ok(partial) => Some(partial.into_document()),
            Err(err) => {
                log::warn!("malformed document in slot {key}, treating as absent: {err}");
                None
            }
        }
    }

    /// Serialize the *entire* document and write it to a slot,
    /// unconditionally replacing prior content. Last writer wins.
    pub fn write_slot(&self, slot: Slot, document: &Document) -> Result<()> {
        let json = serde_json::to_string(document)?;
        self.storage.write(slot.storage_key(), &json)?;
        Ok(())
    }
}
