//! Browser delivery strategies for publish announcements.
//!
//! The primary path posts the snapshot on a `BroadcastChannel` named
//! [`CHANNEL_NAME`]. The fallback dispatches a synthetic `StorageEvent`
//! keyed on the published slot, for same-tab listeners that predate the
//! channel API — other tabs already get a native storage event from the
//! `localStorage` write itself.

use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{BroadcastChannel, StorageEvent, StorageEventInit};

use landkit_core::broadcast::{CHANNEL_NAME, ChannelMessage, DeliveryStrategy};
use landkit_core::error::{LandkitError, Result};
use landkit_core::slots::Slot;

fn delivery_err(err: JsValue) -> LandkitError {
    LandkitError::Delivery(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Primary delivery: `BroadcastChannel("landing_page_updates")`.
pub struct BroadcastChannelDelivery {
    channel: BroadcastChannel,
}

impl BroadcastChannelDelivery {
    /// Open the shared channel.
    pub fn new() -> Result<Self> {
        let channel = BroadcastChannel::new(CHANNEL_NAME).map_err(delivery_err)?;
        Ok(Self { channel })
    }
}

impl DeliveryStrategy for BroadcastChannelDelivery {
    fn name(&self) -> &'static str {
        "broadcast-channel"
    }

    fn announce(&self, message: &ChannelMessage) -> Result<()> {
        // Plain-object serialization so JS receivers see `{type, data}`,
        // not an ES Map.
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let value = message
            .serialize(&serializer)
            .map_err(|err| LandkitError::Delivery(err.to_string()))?;
        self.channel.post_message(&value).map_err(delivery_err)
    }
}

impl Drop for BroadcastChannelDelivery {
    fn drop(&mut self) {
        self.channel.close();
    }
}

// SAFETY: BroadcastChannel is not thread-safe, but WASM is single-threaded
// so this is safe. We implement Send + Sync to satisfy the
// DeliveryStrategy trait bounds.
unsafe impl Send for BroadcastChannelDelivery {}
unsafe impl Sync for BroadcastChannelDelivery {}

/// Fallback delivery: a synthetic `StorageEvent` on the window, carrying
/// the published slot key and the serialized snapshot.
#[derive(Debug, Default)]
pub struct StorageEventDelivery;

impl StorageEventDelivery {
    /// Create the fallback strategy.
    pub fn new() -> Self {
        Self
    }
}

impl DeliveryStrategy for StorageEventDelivery {
    fn name(&self) -> &'static str {
        "storage-event"
    }

    fn announce(&self, message: &ChannelMessage) -> Result<()> {
        let ChannelMessage::Publish { data } = message;
        let json = serde_json::to_string(data)?;

        let init = StorageEventInit::new();
        init.set_key(Some(Slot::Published.storage_key()));
        init.set_new_value(Some(&json));
        let event =
            StorageEvent::new_with_event_init_dict("storage", &init).map_err(delivery_err)?;

        let window =
            web_sys::window().ok_or_else(|| LandkitError::Delivery("no window".to_string()))?;
        window.dispatch_event(&event).map_err(delivery_err)?;
        Ok(())
    }
}
