//! The unified backend class exposed to the editor frontend.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use wasm_bindgen::prelude::*;

use landkit_core::brands::{Brand, BrandBook};
use landkit_core::broadcast::PublishBroadcaster;
use landkit_core::edit::SectionKey;
use landkit_core::store::{ContentStore, LoadSource};

use crate::channel::{BroadcastChannelDelivery, StorageEventDelivery};
use crate::error::{IntoJsOption, IntoJsResult};
use crate::local_storage::LocalStorageBackend;

/// Serialize into a plain JS object (not an ES Map).
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).js_err()
}

/// Payload for creating a brand: everything but the generated id and
/// timestamp.
#[derive(Deserialize)]
struct NewBrand {
    name: String,
    description: String,
    logo: String,
    #[serde(default)]
    colors: IndexMap<String, String>,
    #[serde(default)]
    fonts: IndexMap<String, String>,
}

/// The content pipeline, bound to this tab's `localStorage` and the shared
/// publish channel.
///
/// One instance per editor tab. All methods are synchronous; every
/// mutating call persists the draft before returning.
#[wasm_bindgen]
pub struct LandkitBackend {
    store: ContentStore<LocalStorageBackend>,
    brands: BrandBook<LocalStorageBackend>,
}

#[wasm_bindgen]
impl LandkitBackend {
    /// Create a backend over this window's `localStorage`, with the
    /// broadcast channel as primary delivery and the synthetic storage
    /// event as fallback.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<LandkitBackend, JsValue> {
        let storage = Arc::new(LocalStorageBackend::new()?);
        let broadcaster = PublishBroadcaster::new()
            .with_strategy(Box::new(BroadcastChannelDelivery::new().js_err()?))
            .with_strategy(Box::new(StorageEventDelivery::new()));
        let store = ContentStore::with_broadcaster(Arc::clone(&storage), broadcaster);
        let brands = BrandBook::new(storage);
        Ok(Self { store, brands })
    }

    /// Load the draft slot. Returns `true` when stored data was used,
    /// `false` when the store fell back to defaults (missing or malformed
    /// draft).
    pub fn load(&mut self) -> bool {
        matches!(self.store.load(), LoadSource::Stored)
    }

    /// The live document, for rendering.
    #[wasm_bindgen(js_name = componentsData)]
    pub fn components_data(&self) -> Result<JsValue, JsValue> {
        to_js(self.store.document())
    }

    /// Replace one field of one section and persist the draft.
    #[wasm_bindgen(js_name = updateComponentData)]
    pub fn update_component_data(
        &mut self,
        section: &str,
        field: &str,
        value: JsValue,
    ) -> Result<(), JsValue> {
        let value: Value = serde_wasm_bindgen::from_value(value).js_err()?;
        self.store.update_value(section, field, value).js_err()?;
        Ok(())
    }

    /// Apply a whole object of field values to one section (the manual
    /// JSON edit flow). Invalid JSON shape or an unknown field rejects the
    /// whole object; nothing is partially applied.
    #[wasm_bindgen(js_name = updateSectionData)]
    pub fn update_section_data(&mut self, section: &str, values: JsValue) -> Result<(), JsValue> {
        let key: SectionKey = section.parse().js_err()?;
        let values: Value = serde_wasm_bindgen::from_value(values).js_err()?;
        let object = values
            .as_object()
            .js_ok_or("section data must be an object")?;
        self.store.update_section_values(key, object).js_err()?;
        Ok(())
    }

    /// Seed the document from a template's per-section overrides and
    /// persist it as the draft. Returns the seeded document.
    #[wasm_bindgen(js_name = applyTemplate)]
    pub fn apply_template(&mut self, overrides: JsValue) -> Result<JsValue, JsValue> {
        let overrides: Value = serde_wasm_bindgen::from_value(overrides).js_err()?;
        let object = overrides
            .as_object()
            .js_ok_or("template data must be an object")?;
        let document = self.store.initialize_with_overrides(object).js_err()?;
        to_js(document)
    }

    /// Persist the current document to the draft slot only.
    #[wasm_bindgen(js_name = saveDraft)]
    pub fn save_draft(&self) -> Result<(), JsValue> {
        self.store.save_draft().js_err()
    }

    /// Publish: copy the current document to both slots and announce it to
    /// other tabs.
    pub fn publish(&mut self) -> Result<(), JsValue> {
        self.store.publish().js_err()
    }

    /// The published snapshot, or `null` if nothing was published yet.
    /// What the public renderer should consume.
    #[wasm_bindgen(js_name = publishedData)]
    pub fn published_data(&self) -> Result<JsValue, JsValue> {
        match self.store.load_published() {
            Some(document) => to_js(&document),
            None => Ok(JsValue::NULL),
        }
    }

    /// How many edits were skipped because their target was not present.
    #[wasm_bindgen(js_name = skippedEdits)]
    pub fn skipped_edits(&self) -> u32 {
        self.store.skipped_edits() as u32
    }

    /// The brand list, seeding the default brand on first run.
    pub fn brands(&self) -> Result<JsValue, JsValue> {
        to_js(&self.brands.load())
    }

    /// Create a brand from `{name, description, logo, colors, fonts}` and
    /// persist. Returns the updated list.
    #[wasm_bindgen(js_name = addBrand)]
    pub fn add_brand(&self, brand: JsValue) -> Result<JsValue, JsValue> {
        let new: NewBrand = serde_wasm_bindgen::from_value(brand).js_err()?;
        let brand = Brand::new(new.name, new.description, new.logo, new.colors, new.fonts);
        to_js(&self.brands.add(brand).js_err()?)
    }

    /// Replace the stored brand with the same id. Returns the updated
    /// list.
    #[wasm_bindgen(js_name = updateBrand)]
    pub fn update_brand(&self, brand: JsValue) -> Result<JsValue, JsValue> {
        let brand: Brand = serde_wasm_bindgen::from_value(brand).js_err()?;
        to_js(&self.brands.update(&brand).js_err()?)
    }

    /// Remove the brand with the given id. Returns the updated list.
    #[wasm_bindgen(js_name = removeBrand)]
    pub fn remove_brand(&self, id: &str) -> Result<JsValue, JsValue> {
        to_js(&self.brands.remove(id).js_err()?)
    }
}
