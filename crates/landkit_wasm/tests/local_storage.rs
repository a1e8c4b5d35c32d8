//! Browser tests for the `localStorage`-backed pipeline.
//!
//! Run with `wasm-pack test --headless --chrome crates/landkit_wasm`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use landkit_core::storage::SlotStorage;
use landkit_wasm::{LandkitBackend, LocalStorageBackend};

wasm_bindgen_test_configure!(run_in_browser);

fn clear_slots() {
    let storage = LocalStorageBackend::new().unwrap();
    storage.remove("landingPageData").unwrap();
    storage.remove("publishedLandingPageData").unwrap();
    storage.remove("brands").unwrap();
}

#[wasm_bindgen_test]
fn local_storage_round_trips() {
    clear_slots();
    let storage = LocalStorageBackend::new().unwrap();

    assert_eq!(storage.read("landingPageData").unwrap(), None);
    storage.write("landingPageData", "{\"hero\":{}}").unwrap();
    assert_eq!(
        storage.read("landingPageData").unwrap().as_deref(),
        Some("{\"hero\":{}}")
    );
}

#[wasm_bindgen_test]
fn backend_edit_survives_a_reload() {
    clear_slots();

    let mut backend = LandkitBackend::new().unwrap();
    assert!(!backend.load(), "fresh storage should fall back to defaults");
    backend
        .update_component_data(
            "hero",
            "title",
            wasm_bindgen::JsValue::from_str("Browser Title"),
        )
        .unwrap();

    // A second backend over the same localStorage sees the draft.
    let mut reloaded = LandkitBackend::new().unwrap();
    assert!(reloaded.load(), "draft should be present after the edit");
}

#[wasm_bindgen_test]
fn publish_writes_the_published_key() {
    clear_slots();

    let mut backend = LandkitBackend::new().unwrap();
    backend.load();
    backend.publish().unwrap();

    let storage = LocalStorageBackend::new().unwrap();
    let raw = storage.read("publishedLandingPageData").unwrap().unwrap();
    assert!(raw.contains("\"hero\""));
}
