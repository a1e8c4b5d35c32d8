//! The publish broadcaster.
//!
//! On publish, other execution contexts (a public renderer tab, a preview
//! window) need to learn that new content landed without polling. Delivery
//! runs over two independent, named strategies behind one interface:
//!
//! - [`ChannelDelivery`] — the primary path, a named broadcast channel
//!   (`landing_page_updates`) carrying the full document snapshot.
//! - [`StorageSignal`] — the broader-compatibility fallback, a mutation of
//!   the published slot key that storage watchers observe.
//!
//! Delivery is fire-and-forget, at-most-once per strategy per call: no
//! acknowledgment, no retry, and a failing strategy is logged rather than
//! surfaced, since the published slot itself is already durably written by
//! the time the broadcaster runs. Receivers should treat the message
//! payload as a fast path and re-read the published slot as the source of
//! truth.

mod channel;
mod message;
mod signal;

pub use channel::{ChannelDelivery, PublishChannel};
pub use message::{CHANNEL_NAME, ChannelMessage};
pub use signal::StorageSignal;

use crate::error::Result;
use crate::schema::Document;

/// One way of telling other contexts that a publish happened.
pub trait DeliveryStrategy: Send + Sync {
    /// Stable name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Deliver one announcement. At-most-once; errors are the caller's to
    /// log, not to retry.
    fn announce(&self, message: &ChannelMessage) -> Result<()>;
}

/// Fans one publish event out to every configured delivery strategy.
#[derive(Default)]
pub struct PublishBroadcaster {
    strategies: Vec<Box<dyn DeliveryStrategy>>,
}

impl PublishBroadcaster {
    /// A broadcaster with no strategies; announcements become no-ops.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a delivery strategy.
    pub fn with_strategy(mut self, strategy: Box<dyn DeliveryStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Number of configured strategies.
    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    /// Announce one published snapshot on every strategy.
    ///
    /// The message carries the full document, not a delta, so no ordering
    /// guarantee is needed beyond "last publish wins". Individual strategy
    /// failures are logged and swallowed.
    pub fn announce_publish(&self, document: &Document) {
        let message = ChannelMessage::Publish {
            data: document.clone(),
        };
        for strategy in &self.strategies {
            if let Err(err) = strategy.announce(&message) {
                log::warn!("publish delivery via {} failed: {err}", strategy.name());
            }
        }
    }
}

impl std::fmt::Debug for PublishBroadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("PublishBroadcaster")
            .field("strategies", &names)
            .finish()
    }
}
