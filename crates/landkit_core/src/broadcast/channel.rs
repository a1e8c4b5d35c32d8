//! In-process broadcast channel delivery.
//!
//! The native counterpart of the browser's `BroadcastChannel`: contexts in
//! the same process subscribe to a shared, named [`PublishChannel`] and
//! receive every announcement posted after they subscribed. The wasm crate
//! provides the real `BroadcastChannel`-backed strategy for tabs.

use std::sync::Mutex;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::Arc;

use super::DeliveryStrategy;
use super::message::{CHANNEL_NAME, ChannelMessage};
use crate::error::Result;

/// A named, shared fan-out point for publish announcements.
///
/// Subscribers get an independent receiver; posting clones the message to
/// every live subscriber and silently drops the ones whose receiver has
/// gone away. Delivery is at-most-once, unacknowledged.
#[derive(Debug)]
pub struct PublishChannel {
    name: String,
    subscribers: Mutex<Vec<Sender<ChannelMessage>>>,
}

impl PublishChannel {
    /// Create a channel with an explicit name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// The well-known channel every landing page context shares.
    pub fn landing_updates() -> Self {
        Self::new(CHANNEL_NAME)
    }

    /// The channel name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subscribe to announcements posted after this call.
    pub fn subscribe(&self) -> Receiver<ChannelMessage> {
        let (tx, rx) = channel();
        self.subscribers
            .lock()
            .expect("subscriber lock poisoned")
            .push(tx);
        rx
    }

    /// Current number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .expect("subscriber lock poisoned")
            .len()
    }

    /// Post one message to every live subscriber, pruning dead ones.
    pub fn post(&self, message: &ChannelMessage) {
        let mut subscribers = self.subscribers.lock().expect("subscriber lock poisoned");
        subscribers.retain(|tx| tx.send(message.clone()).is_ok());
    }
}

/// Primary delivery strategy: post the snapshot on a shared
/// [`PublishChannel`].
pub struct ChannelDelivery {
    channel: Arc<PublishChannel>,
}

impl ChannelDelivery {
    /// Deliver over `channel`.
    pub fn new(channel: Arc<PublishChannel>) -> Self {
        Self { channel }
    }
}

impl DeliveryStrategy for ChannelDelivery {
    fn name(&self) -> &'static str {
        "broadcast-channel"
    }

    fn announce(&self, message: &ChannelMessage) -> Result<()> {
        self.channel.post(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::default_document;

    #[test]
    fn test_subscribers_each_receive_the_message() {
        let channel = PublishChannel::landing_updates();
        assert_eq!(channel.name(), CHANNEL_NAME);

        let rx1 = channel.subscribe();
        let rx2 = channel.subscribe();

        let message = ChannelMessage::Publish {
            data: default_document(),
        };
        channel.post(&message);

        assert_eq!(rx1.try_recv().unwrap(), message);
        assert_eq!(rx2.try_recv().unwrap(), message);
        // At-most-once: nothing further queued.
        assert!(rx1.try_recv().is_err());
    }

    #[test]
    fn test_dead_subscribers_are_pruned() {
        let channel = PublishChannel::landing_updates();
        let rx = channel.subscribe();
        drop(rx);
        let _live = channel.subscribe();
        assert_eq!(channel.subscriber_count(), 2);

        channel.post(&ChannelMessage::Publish {
            data: default_document(),
        });
        assert_eq!(channel.subscriber_count(), 1);
    }

    #[test]
    fn test_late_subscriber_misses_earlier_posts() {
        let channel = PublishChannel::landing_updates();
        channel.post(&ChannelMessage::Publish {
            data: default_document(),
        });

        let rx = channel.subscribe();
        assert!(rx.try_recv().is_err());
    }
}
