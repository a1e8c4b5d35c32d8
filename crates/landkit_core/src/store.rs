//! The content store.
//!
//! [`ContentStore`] exclusively owns the in-memory [`Document`]: the editor
//! surface calls [`ContentStore::update_value`] and reads
//! [`ContentStore::document`], and every mutating operation synchronously
//! persists the whole document to the draft slot. Publishing copies the
//! current document into the published slot and hands the snapshot to the
//! broadcaster.
//!
//! All operations are synchronous and run to completion, so two calls on
//! the same store never interleave. Two stores over shared storage (two
//! tabs) race with last-writer-wins semantics at the slot layer — an
//! accepted limitation, softened by the revision stamp carried in each
//! published snapshot.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::broadcast::{ChannelDelivery, PublishBroadcaster, PublishChannel, StorageSignal};
use crate::edit::{EditOutcome, SectionEdit, SectionKey};
use crate::error::{LandkitError, Result};
use crate::schema::{Document, default_document};
use crate::slots::{Slot, SlotStore};
use crate::storage::SlotStorage;

/// Where [`ContentStore::load`] got its document from.
///
/// Surfaced so callers (and tests) can observe the defaults fallback
/// instead of it being silently absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// The draft slot held a parseable document.
    Stored,
    /// The draft slot was absent or malformed; content defaults were used.
    Defaults,
}

/// Owns the in-memory document and the draft/publish lifecycle.
pub struct ContentStore<S> {
    document: Document,
    slots: SlotStore<S>,
    broadcaster: PublishBroadcaster,
    skipped_edits: u64,
}

impl<S: SlotStorage + 'static> ContentStore<S> {
    /// A store with the storage-signal delivery strategy only.
    ///
    /// Suitable when no broadcast channel hub exists in the process;
    /// publish events still reach storage watchers.
    pub fn new(storage: Arc<S>) -> Self {
        let broadcaster = PublishBroadcaster::new()
            .with_strategy(Box::new(StorageSignal::new(Arc::clone(&storage))));
        Self::with_broadcaster(storage, broadcaster)
    }

    /// A store announcing on `channel` first, with the storage-signal
    /// fallback second — the full two-strategy pipeline.
    pub fn with_channel(storage: Arc<S>, channel: Arc<PublishChannel>) -> Self {
        let broadcaster = PublishBroadcaster::new()
            .with_strategy(Box::new(ChannelDelivery::new(channel)))
            .with_strategy(Box::new(StorageSignal::new(Arc::clone(&storage))));
        Self::with_broadcaster(storage, broadcaster)
    }
}

impl<S: SlotStorage> ContentStore<S> {
    /// A store with an explicit broadcaster configuration.
    pub fn with_broadcaster(storage: Arc<S>, broadcaster: PublishBroadcaster) -> Self {
        Self {
            document: default_document(),
            slots: SlotStore::new(storage),
            broadcaster,
            skipped_edits: 0,
        }
    }

    /// The live document, for rendering. Read-only: all mutation goes
    /// through the update operations.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// How many edits were silently skipped because their target was not
    /// present. A nonzero count usually means a caller is addressing
    /// stale pain-point ids.
    pub fn skipped_edits(&self) -> u64 {
        self.skipped_edits
    }

    /// Load the draft slot into the store.
    ///
    /// Missing or malformed draft data falls back to content defaults
    /// without raising; the returned [`LoadSource`] says which happened.
    /// Either way the document afterwards carries all five sections.
    pub fn load(&mut self) -> LoadSource {
        match self.slots.read_slot(Slot::Draft) {
            Some(document) => {
                self.document = document;
                LoadSource::Stored
            }
            None => {
                self.document = default_document();
                LoadSource::Defaults
            }
        }
    }

    /// Seed the document from per-section overrides (the template-apply
    /// flow).
    ///
    /// For each section present in `overrides`, the override's fields are
    /// shallow-merged on top of the content-default section: override
    /// fields win, unspecified fields keep their defaults. Sections absent
    /// from `overrides` keep full defaults. Unknown section or field names
    /// are rejected and nothing is changed. The seeded document is
    /// persisted as the draft.
    pub fn initialize_with_overrides(&mut self, overrides: &Map<String, Value>) -> Result<&Document> {
        let mut document = default_document();
        for (name, section_value) in overrides {
            let key: SectionKey = name.parse()?;
            let fields = section_value
                .as_object()
                .ok_or_else(|| LandkitError::SectionShape {
                    section: name.clone(),
                })?;
            match key {
                SectionKey::Hero => document.hero = merge_section(key, &document.hero, fields)?,
                SectionKey::Achievements => {
                    document.achievements = merge_section(key, &document.achievements, fields)?;
                }
                SectionKey::Faq => document.faq = merge_section(key, &document.faq, fields)?,
                SectionKey::PainPoints => {
                    document.pain_points = merge_section(key, &document.pain_points, fields)?;
                }
                SectionKey::Footer => {
                    document.footer = merge_section(key, &document.footer, fields)?;
                }
            }
        }

        // Seeding replaces content, not publish history.
        document.revision = self.document.revision;
        self.document = document;
        self.save_draft()?;
        Ok(&self.document)
    }

    /// Apply one typed edit and persist the draft.
    ///
    /// A [`EditOutcome::MissingTarget`] edit leaves both the document and
    /// the draft slot untouched; it is counted rather than raised.
    pub fn update(&mut self, edit: SectionEdit) -> Result<EditOutcome> {
        let section = edit.section();
        match self.document.apply(edit) {
            EditOutcome::Applied => {
                self.save_draft()?;
                Ok(EditOutcome::Applied)
            }
            EditOutcome::MissingTarget => {
                self.skipped_edits += 1;
                log::debug!("skipped edit on `{section}`: target not present");
                Ok(EditOutcome::MissingTarget)
            }
        }
    }

    /// The editor-surface entry point: untyped `(section, field, value)`.
    ///
    /// Validates at the typed-edit boundary, then behaves like
    /// [`ContentStore::update`].
    pub fn update_value(&mut self, section: &str, field: &str, value: Value) -> Result<EditOutcome> {
        let key: SectionKey = section.parse()?;
        let edit = SectionEdit::from_json(key, field, value)?;
        self.update(edit)
    }

    /// Apply a whole object of field values to one section (the manual
    /// JSON edit flow).
    ///
    /// Every entry is validated before the first one is applied, so a bad
    /// field anywhere in the object means nothing lands.
    pub fn update_section_values(
        &mut self,
        section: SectionKey,
        values: &Map<String, Value>,
    ) -> Result<()> {
        let edits: Vec<SectionEdit> = values
            .iter()
            .map(|(field, value)| SectionEdit::from_json(section, field, value.clone()))
            .collect::<Result<_>>()?;
        for edit in edits {
            self.document.apply(edit);
        }
        self.save_draft()
    }

    /// Persist the current document to the draft slot only.
    pub fn save_draft(&self) -> Result<()> {
        self.slots.write_slot(Slot::Draft, &self.document)
    }

    /// Publish the current document.
    ///
    /// Bumps the revision stamp, writes the snapshot to both slots, then
    /// announces it on every delivery strategy. Once this returns, any
    /// reader of the published slot — in this context or another sharing
    /// the backend — observes the new document.
    pub fn publish(&mut self) -> Result<()> {
        self.document.revision += 1;
        self.slots.write_slot(Slot::Draft, &self.document)?;
        self.slots.write_slot(Slot::Published, &self.document)?;
        self.broadcaster.announce_publish(&self.document);
        Ok(())
    }

    /// Read the published slot, with the same malformed-data recovery as
    /// any other slot read. What a live renderer should consume.
    pub fn load_published(&self) -> Option<Document> {
        self.slots.read_slot(Slot::Published)
    }

    /// The persistence adapter, for contexts that need direct slot access
    /// (e.g. sharing the backend with a second reading store).
    pub fn slots(&self) -> &SlotStore<S> {
        &self.slots
    }
}

/// Shallow-merge override fields onto a serialized section and
/// deserialize back. Unknown field names are rejected; a value of the
/// wrong shape surfaces as a JSON error from the final deserialize.
fn merge_section<T: Serialize + DeserializeOwned>(
    key: SectionKey,
    base: &T,
    overrides: &Map<String, Value>,
) -> Result<T> {
    let mut fields = match serde_json::to_value(base)? {
        Value::Object(fields) => fields,
        _ => {
            return Err(LandkitError::SectionShape {
                section: key.to_string(),
            });
        }
    };
    for (field, value) in overrides {
        if !fields.contains_key(field) {
            return Err(LandkitError::UnknownField {
                section: key.to_string(),
                field: field.clone(),
            });
        }
        fields.insert(field.clone(), value.clone());
    }
    Ok(serde_json::from_value(Value::Object(fields))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use serde_json::json;

    fn store() -> ContentStore<MemoryStorage> {
        ContentStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_load_reports_defaults_on_empty_storage() {
        let mut store = store();
        assert_eq!(store.load(), LoadSource::Defaults);
        assert_eq!(store.document(), &default_document());
    }

    #[test]
    fn test_load_reports_defaults_on_malformed_draft() {
        let storage = Arc::new(MemoryStorage::new());
        storage.write(Slot::Draft.storage_key(), "{broken").unwrap();

        let mut store = ContentStore::new(storage);
        assert_eq!(store.load(), LoadSource::Defaults);
        assert_eq!(store.document(), &default_document());
    }

    #[test]
    fn test_update_persists_draft_and_leaves_published_alone() {
        let mut store = store();
        store
            .update_value("hero", "title", json!("New Title"))
            .unwrap();

        let draft = store.slots().read_slot(Slot::Draft).unwrap();
        assert_eq!(draft.hero.title, "New Title");
        assert!(store.load_published().is_none());
    }

    #[test]
    fn test_update_isolation() {
        let mut store = store();
        let before = store.document().clone();

        store
            .update_value("hero", "title", json!("First"))
            .unwrap();
        store
            .update_value("hero", "title", json!("Second"))
            .unwrap();

        let mut expected = before;
        expected.hero.title = "Second".to_string();
        assert_eq!(store.document(), &expected);
    }

    #[test]
    fn test_unknown_field_rejected_and_nothing_persisted() {
        let mut store = store();
        let err = store
            .update_value("hero", "fontSize", json!("12px"))
            .unwrap_err();
        assert!(matches!(err, LandkitError::UnknownField { .. }));
        assert!(store.slots().read_slot(Slot::Draft).is_none());
    }

    #[test]
    fn test_missing_target_is_counted_not_persisted() {
        let mut store = store();
        let outcome = store
            .update(SectionEdit::PainPoints(crate::edit::PainPointsField::Problem {
                id: 42,
                field: crate::edit::ProblemField::Icon("⚠️".to_string()),
            }))
            .unwrap();
        assert_eq!(outcome, EditOutcome::MissingTarget);
        assert_eq!(store.skipped_edits(), 1);
        assert!(store.slots().read_slot(Slot::Draft).is_none());
    }

    #[test]
    fn test_publish_copies_to_both_slots_and_bumps_revision() {
        let mut store = store();
        store
            .update_value("hero", "title", json!("Live"))
            .unwrap();
        store.publish().unwrap();

        let draft = store.slots().read_slot(Slot::Draft).unwrap();
        let published = store.load_published().unwrap();
        assert_eq!(draft, published);
        assert_eq!(published.hero.title, "Live");
        assert_eq!(published.revision, 1);

        store.publish().unwrap();
        assert_eq!(store.load_published().unwrap().revision, 2);
    }

    #[test]
    fn test_save_draft_does_not_touch_published() {
        let mut store = store();
        store.publish().unwrap();
        let published_before = store.load_published().unwrap();

        store
            .update_value("faq", "title", json!("Questions"))
            .unwrap();
        store.save_draft().unwrap();

        assert_eq!(store.load_published().unwrap(), published_before);
    }

    #[test]
    fn test_initialize_with_overrides_shallow_merges() {
        let mut store = store();
        let overrides = json!({
            "hero": {"title": "Template Title", "layout": "split"},
            "faq": {"items": []}
        });

        store
            .initialize_with_overrides(overrides.as_object().unwrap())
            .unwrap();

        let doc = store.document();
        // Override fields win.
        assert_eq!(doc.hero.title, "Template Title");
        assert_eq!(doc.hero.layout, crate::schema::HeroLayout::Split);
        // Unspecified fields keep content defaults.
        assert_eq!(
            doc.hero.subtitle,
            "Get 40% More Foot Traffic or We'll Rebuild It Free!"
        );
        assert!(doc.faq.items.is_empty());
        assert_eq!(doc.faq.title, "Frequently Asked Questions");
        // Sections absent from the overrides keep full defaults.
        assert_eq!(doc.footer, crate::schema::FooterSection::default_content());

        // The seeded document is the new draft.
        let draft = store.slots().read_slot(Slot::Draft).unwrap();
        assert_eq!(&draft, store.document());
    }

    #[test]
    fn test_initialize_with_overrides_rejects_unknown_names() {
        let mut store = store();
        let before = store.document().clone();

        let overrides = json!({"caseStudies": {"title": "Nope"}});
        let err = store
            .initialize_with_overrides(overrides.as_object().unwrap())
            .unwrap_err();
        assert!(matches!(err, LandkitError::UnknownSection(_)));

        let overrides = json!({"hero": {"fontSize": "12px"}});
        let err = store
            .initialize_with_overrides(overrides.as_object().unwrap())
            .unwrap_err();
        assert!(matches!(err, LandkitError::UnknownField { .. }));

        // Nothing changed on either failure.
        assert_eq!(store.document(), &before);
    }

    #[test]
    fn test_update_section_values_is_all_or_nothing() {
        let mut store = store();
        let before = store.document().clone();

        let values = json!({"title": "New", "bogus": 1});
        let err = store
            .update_section_values(SectionKey::Faq, values.as_object().unwrap())
            .unwrap_err();
        assert!(matches!(err, LandkitError::UnknownField { .. }));
        assert_eq!(store.document(), &before);

        let values = json!({"title": "New", "items": [{"question": "Q", "answer": "A"}]});
        store
            .update_section_values(SectionKey::Faq, values.as_object().unwrap())
            .unwrap();
        assert_eq!(store.document().faq.title, "New");
        assert_eq!(store.document().faq.items.len(), 1);
    }

    #[test]
    fn test_faq_append_scenario() {
        let mut store = store();
        store.load();

        let mut items = store.document().faq.items.clone();
        let original = items.clone();
        items.push(crate::schema::FaqItem {
            question: "Q".to_string(),
            answer: "A".to_string(),
        });
        store
            .update_value("faq", "items", serde_json::to_value(&items).unwrap())
            .unwrap();

        let after = &store.document().faq.items;
        assert_eq!(after.len(), original.len() + 1);
        assert_eq!(&after[..original.len()], &original[..]);
    }
}
