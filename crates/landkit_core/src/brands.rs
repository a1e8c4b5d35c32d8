//! Brand style profiles.
//!
//! Brands live in their own storage slot (`brands`, a JSON array) using
//! the same backend as the document slots. The color and font maps are
//! open-ended: a handful of well-known keys (`primary`, `heading`, …)
//! plus whatever extras an operator defines, kept in insertion order.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::Result;
use crate::storage::SlotStorage;

/// Storage key for the brand list.
pub const BRANDS_KEY: &str = "brands";

/// One brand style profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Brand {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Logo asset path or URL.
    pub logo: String,
    /// Named colors (`primary`, `secondary`, `accent`, `background`,
    /// `text`, plus extras), in insertion order.
    pub colors: IndexMap<String, String>,
    /// Named font stacks (`heading`, `body`, plus extras), in insertion
    /// order.
    pub fonts: IndexMap<String, String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl Brand {
    /// Create a brand with a fresh id and creation timestamp.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        logo: impl Into<String>,
        colors: IndexMap<String, String>,
        fonts: IndexMap<String, String>,
    ) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            name: name.into(),
            description: description.into(),
            logo: logo.into(),
            colors,
            fonts,
            created_at: now.to_rfc3339(),
        }
    }

    /// The brand seeded on first run.
    pub fn default_brand() -> Self {
        let mut colors = IndexMap::new();
        colors.insert("primary".to_string(), "#4338ca".to_string());
        colors.insert("secondary".to_string(), "#9b87f5".to_string());
        colors.insert("accent".to_string(), "#ea384c".to_string());
        colors.insert("background".to_string(), "#ffffff".to_string());
        colors.insert("text".to_string(), "#000000".to_string());

        let mut fonts = IndexMap::new();
        fonts.insert("heading".to_string(), "sans-serif".to_string());
        fonts.insert("body".to_string(), "sans-serif".to_string());

        Self {
            id: "1".to_string(),
            name: "IDesign Ads".to_string(),
            description: "The UAE's Most Awarded Signage Team".to_string(),
            logo: "/logo.svg".to_string(),
            colors,
            fonts,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// The persisted brand list.
///
/// Every mutation rewrites the full list, mirroring the document slots'
/// last-writer-wins policy.
#[derive(Debug)]
pub struct BrandBook<S> {
    storage: Arc<S>,
}

impl<S: SlotStorage> BrandBook<S> {
    /// A brand book over a shared storage backend.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Load the brand list.
    ///
    /// An empty slot seeds (and persists) the default brand, matching
    /// first-run behavior. Malformed stored JSON is logged and read as an
    /// empty list — it is not overwritten, so an operator can still
    /// recover the bytes by hand.
    pub fn load(&self) -> Vec<Brand> {
        let raw = match self.storage.read(BRANDS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                let seeded = vec![Brand::default_brand()];
                if let Err(err) = self.save(&seeded) {
                    log::warn!("failed to seed default brand: {err}");
                }
                return seeded;
            }
            Err(err) => {
                log::warn!("failed to read brands: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(brands) => brands,
            Err(err) => {
                log::warn!("malformed brand list, reading as empty: {err}");
                Vec::new()
            }
        }
    }

    /// Persist the full brand list.
    pub fn save(&self, brands: &[Brand]) -> Result<()> {
        let json = serde_json::to_string(brands)?;
        self.storage.write(BRANDS_KEY, &json)?;
        Ok(())
    }

    /// Append a brand and persist. Returns the updated list.
    pub fn add(&self, brand: Brand) -> Result<Vec<Brand>> {
        let mut brands = self.load();
        brands.push(brand);
        self.save(&brands)?;
        Ok(brands)
    }

    /// Replace the brand with the same id and persist. A brand whose id is
    /// not present leaves the list unchanged.
    pub fn update(&self, brand: &Brand) -> Result<Vec<Brand>> {
        let mut brands = self.load();
        for existing in &mut brands {
            if existing.id == brand.id {
                *existing = brand.clone();
            }
        }
        self.save(&brands)?;
        Ok(brands)
    }

    /// Remove the brand with the given id and persist. Returns the
    /// updated list.
    pub fn remove(&self, id: &str) -> Result<Vec<Brand>> {
        let mut brands = self.load();
        brands.retain(|brand| brand.id != id);
        self.save(&brands)?;
        Ok(brands)
    }
}
