//! # `landkit_core`
//!
//! This is the `landkit_core` library!
//! It contains the shared content pipeline for the Landkit clients.
//!
//! Landkit is a visual editor for a marketing landing page. This crate is
//! the part with real invariants: the typed section schema, the content
//! store with its draft/published slot lifecycle, and the cross-context
//! publish broadcaster. The visual editor itself (forms, palette, color
//! pickers) is a consumer of [`store::ContentStore`], not part of this
//! crate.
//!
//! Data flows one way: the editor surface calls
//! [`store::ContentStore::update_value`], the store validates the edit at
//! the typed boundary, merges it, and persists the whole document to the
//! draft slot; an explicit publish copies the snapshot to the published
//! slot and announces it to other contexts over two delivery strategies.

#![warn(missing_docs)]

/// Cross-context publish announcements.
pub mod broadcast;

/// Brand style profiles.
pub mod brands;

/// The typed edit protocol.
pub mod edit;

/// Error types.
pub mod error;

/// The section schema and document type.
pub mod schema;

/// The named document slots.
pub mod slots;

/// The content store.
pub mod store;

/// Pluggable storage backends.
pub mod storage;

pub use broadcast::{CHANNEL_NAME, ChannelMessage, PublishBroadcaster, PublishChannel};
pub use edit::{EditOutcome, SectionEdit, SectionKey};
pub use error::{LandkitError, Result};
pub use schema::{Document, default_document};
pub use slots::{Slot, SlotStore};
pub use store::{ContentStore, LoadSource};
pub use storage::{MemoryStorage, SlotStorage};
