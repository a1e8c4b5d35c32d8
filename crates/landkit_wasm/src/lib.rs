#![cfg(target_arch = "wasm32")]
//! WebAssembly bindings for Landkit core functionality.
//!
//! This crate binds the content pipeline to the browser: `localStorage`
//! as the storage backend, `BroadcastChannel` plus a synthetic
//! `StorageEvent` as the publish delivery strategies, and a single
//! [`LandkitBackend`] class as the editor frontend's entry point.
//!
//! ## Usage
//!
//! ```javascript
//! import init, { LandkitBackend } from './landkit_wasm.js';
//!
//! await init();
//! const backend = new LandkitBackend();
//! backend.load();
//! backend.updateComponentData('hero', 'title', 'New Title');
//! backend.publish();
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, JsValue>` for JavaScript interop.

mod backend;
mod channel;
mod error;
mod local_storage;

// Re-export the main backend class
pub use backend::LandkitBackend;

// Re-export the delivery strategies for custom broadcaster setups
pub use channel::{BroadcastChannelDelivery, StorageEventDelivery};

// Re-export the storage backend
pub use local_storage::LocalStorageBackend;

use wasm_bindgen::prelude::*;

#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the WASM module. Called automatically on module load.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    // Initialize console logging for Rust log macros
    console_log::init_with_level(log::Level::Info).ok();
}
