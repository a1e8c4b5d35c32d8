//! Storage-mutation fallback delivery.

use std::sync::Arc;

use super::{ChannelMessage, DeliveryStrategy};
use crate::error::Result;
use crate::slots::{Slot, SlotStore};
use crate::storage::SlotStorage;

/// Fallback delivery strategy for contexts that cannot listen on the
/// broadcast channel: rewrite the published slot key through the storage
/// backend so storage-mutation watchers get an independent second
/// delivery.
///
/// The store has already written the published slot by the time the
/// broadcaster runs, so this write is idempotent — the mutation itself is
/// the signal, keyed on `publishedLandingPageData` like the browser's
/// storage events. This is a second delivery attempt over a different
/// mechanism, not a retry of the first.
pub struct StorageSignal<S> {
    slots: SlotStore<S>,
}

impl<S: SlotStorage> StorageSignal<S> {
    /// Signal through the given shared backend.
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            slots: SlotStore::new(storage),
        }
    }
}

impl<S: SlotStorage> DeliveryStrategy for StorageSignal<S> {
    fn name(&self) -> &'static str {
        "storage-event"
    }

    fn announce(&self, message: &ChannelMessage) -> Result<()> {
        let ChannelMessage::Publish { data } = message;
        self.slots.write_slot(Slot::Published, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::default_document;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_signal_rewrites_the_published_slot() {
        let storage = Arc::new(MemoryStorage::new());
        let signal = StorageSignal::new(Arc::clone(&storage));

        let mut doc = default_document();
        doc.hero.title = "Signalled".to_string();
        signal
            .announce(&ChannelMessage::Publish { data: doc.clone() })
            .unwrap();

        let slots = SlotStore::new(storage);
        assert_eq!(slots.read_slot(Slot::Published).unwrap(), doc);
    }
}
