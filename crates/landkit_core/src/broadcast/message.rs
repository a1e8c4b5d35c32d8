//! The cross-context publish message.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::schema::Document;

/// Name of the broadcast channel all contexts share. Part of the external
/// interface; receivers subscribe to it by this exact name.
pub const CHANNEL_NAME: &str = "landing_page_updates";

/// A message on the publish channel, serialized as
/// `{"type": "publish", "data": …}`.
///
/// Carries the full document snapshot, never a delta. Receivers may render
/// straight from `data` as a fast path but should re-read the published
/// slot as the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ChannelMessage {
    /// A publish happened; `data` is the complete published document.
    Publish {
        /// The published snapshot.
        data: Document,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::default_document;

    #[test]
    fn test_wire_shape() {
        let message = ChannelMessage::Publish {
            data: default_document(),
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["type"], "publish");
        assert!(value["data"].as_object().unwrap().contains_key("hero"));
    }

    #[test]
    fn test_round_trip() {
        let mut doc = default_document();
        doc.revision = 9;
        let message = ChannelMessage::Publish { data: doc };
        let json = serde_json::to_string(&message).unwrap();
        let back: ChannelMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }
}
