//! The landing page section schema.
//!
//! Defines the typed shape of every editable section and the aggregate
//! [`Document`], plus the two default layers the rest of the crate relies on:
//!
//! - *Type defaults* (the `Default` derives): empty values, used by serde to
//!   fill fields absent from stored JSON. A stored section that is present
//!   but partial is taken as-is with empty gaps — it is never deep-merged
//!   with content defaults.
//! - *Content defaults* (the `default_content()` constructors and
//!   [`default_document`]): the seed data for a brand-new document and for
//!   whole-section backfill on load.
//!
//! Field names on the wire are camelCase (`ctaText`, `quickLinks`, …) so
//! that stored documents interoperate with an unmodified TypeScript
//! renderer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The hero banner at the top of the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct HeroSection {
    /// Main headline.
    pub title: String,
    /// Supporting headline under the title.
    pub subtitle: String,
    /// Longer descriptive paragraph.
    pub description: String,
    /// Call-to-action button label.
    pub cta_text: String,
    /// Short feature bullets, rendered in order.
    pub features: Vec<String>,
    /// Background color (CSS hex).
    pub background_color: String,
    /// Text color (CSS hex).
    pub text_color: String,
    /// CTA button background color (CSS hex).
    pub button_color: String,
    /// CTA button text color (CSS hex).
    pub button_text_color: String,
    /// Overall hero layout.
    pub layout: HeroLayout,
    /// Horizontal text alignment.
    pub alignment: Alignment,
    /// Vertical padding preset.
    pub padding: SizePreset,
    /// Inter-element spacing preset.
    pub spacing: SizePreset,
    /// Whether the hero image is shown at all.
    pub show_image: bool,
    /// Where the hero image sits relative to the copy.
    pub image_position: ImagePosition,
    /// Hero image URL, empty for none.
    pub image_url: String,
    /// Full-bleed background image URL, empty for none.
    pub background_image: String,
}

impl HeroSection {
    /// The seeded hero content for a brand-new document.
    pub fn default_content() -> Self {
        Self {
            title: "Dubai's #1 Custom Signage".to_string(),
            subtitle: "Get 40% More Foot Traffic or We'll Rebuild It Free!".to_string(),
            description:
                "Attention Retailers: Our Proven Designs Make Your Business Impossible to Miss"
                    .to_string(),
            cta_text: "👉 GET MY FREE SIGNAGE PROPOSAL".to_string(),
            features: vec![
                "500+ UAE Businesses Trust Us".to_string(),
                "24-Hour Rush Service".to_string(),
                "Free Design Consultation".to_string(),
            ],
            background_color: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
            button_color: "#4338ca".to_string(),
            button_text_color: "#ffffff".to_string(),
            layout: HeroLayout::Centered,
            alignment: Alignment::Left,
            padding: SizePreset::Medium,
            spacing: SizePreset::Medium,
            show_image: true,
            image_position: ImagePosition::Right,
            image_url: String::new(),
            background_image: String::new(),
        }
    }
}

/// Hero layout variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum HeroLayout {
    /// Copy and image stacked around the centerline.
    #[default]
    Centered,
    /// Copy on one side, image on the other.
    Split,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Alignment {
    /// Left-aligned.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right-aligned.
    Right,
}

/// Small/medium/large preset used for padding and spacing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum SizePreset {
    /// Compact.
    Small,
    /// The usual default.
    #[default]
    Medium,
    /// Generous.
    Large,
}

/// Position of the hero image relative to the copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ImagePosition {
    /// Image left of the copy.
    Left,
    /// Image right of the copy.
    #[default]
    Right,
    /// Image below the copy.
    Bottom,
}

/// One achievement counter (e.g. "500+" / "Completed Projects").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct AchievementItem {
    /// The headline figure, kept as a display string ("500+", "12M+").
    pub number: String,
    /// Caption under the figure.
    pub label: String,
}

/// The achievements counter strip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct AchievementsSection {
    /// Section heading.
    pub title: String,
    /// Counters, rendered in order.
    pub items: Vec<AchievementItem>,
}

impl AchievementsSection {
    /// The seeded achievements content for a brand-new document.
    pub fn default_content() -> Self {
        Self {
            title: "Our Achievements".to_string(),
            items: vec![
                AchievementItem {
                    number: "500+".to_string(),
                    label: "Completed Projects".to_string(),
                },
                AchievementItem {
                    number: "350+".to_string(),
                    label: "Satisfied Clients".to_string(),
                },
                AchievementItem {
                    number: "25+".to_string(),
                    label: "Industry Awards".to_string(),
                },
            ],
        }
    }
}

/// One FAQ entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct FaqItem {
    /// The question.
    pub question: String,
    /// The answer.
    pub answer: String,
}

/// The FAQ accordion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct FaqSection {
    /// Section heading.
    pub title: String,
    /// Entries, rendered in order.
    pub items: Vec<FaqItem>,
}

impl FaqSection {
    /// The seeded FAQ content for a brand-new document.
    pub fn default_content() -> Self {
        Self {
            title: "Frequently Asked Questions".to_string(),
            items: vec![
                FaqItem {
                    question: "What if I hate the design?".to_string(),
                    answer: "We'll redesign it free until you're thrilled!".to_string(),
                },
                FaqItem {
                    question: "How long does production take?".to_string(),
                    answer: "Standard production is 7-10 business days, but our rush service \
                             can deliver in as little as 24 hours!"
                        .to_string(),
                },
            ],
        }
    }
}

/// One pain-point card.
///
/// The `id` is a stable identifier independent of array position: edits
/// address cards by id, and removing a card never renumbers the survivors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PainPoint {
    /// Stable identifier, unique within the section.
    pub id: u32,
    /// The provocation headline.
    pub question: String,
    /// Emoji or icon identifier.
    pub icon: String,
    /// Supporting copy.
    pub description: String,
}

/// The pain-points section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PainPointsSection {
    /// Section heading.
    pub title: String,
    /// Cards, rendered in order.
    pub problems: Vec<PainPoint>,
}

impl PainPointsSection {
    /// The seeded pain-points content for a brand-new document.
    pub fn default_content() -> Self {
        Self {
            title: "Is Your Business Suffering From These Signage Problems?".to_string(),
            problems: vec![
                PainPoint {
                    id: 1,
                    question: "Invisible storefronts losing customers?".to_string(),
                    icon: "🔍".to_string(),
                    description: "Studies show 68% of customers have skipped a business \
                                  because they couldn't find or notice it."
                        .to_string(),
                },
                PainPoint {
                    id: 2,
                    question: "Faded signs making your brand look cheap?".to_string(),
                    icon: "🌦️".to_string(),
                    description: "Weather-damaged signage can reduce perceived business value \
                                  by up to 47% according to consumer surveys."
                        .to_string(),
                },
                PainPoint {
                    id: 3,
                    question: "Event booths nobody notices?".to_string(),
                    icon: "📊".to_string(),
                    description: "The average trade show visitor walks past 87% of booths \
                                  without stopping - yours doesn't have to be one of them."
                        .to_string(),
                },
            ],
        }
    }
}

/// One footer link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct FooterLink {
    /// Display label.
    pub label: String,
    /// Target URL or anchor.
    pub url: String,
}

/// Footer contact block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ContactInfo {
    /// Street address line.
    pub address: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
}

/// The page footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct FooterSection {
    /// Copyright line.
    pub copyright: String,
    /// Navigation links, rendered in order.
    pub quick_links: Vec<FooterLink>,
    /// Social profile links, rendered in order.
    pub social_links: Vec<FooterLink>,
    /// Contact details.
    pub contact_info: ContactInfo,
}

impl FooterSection {
    /// The seeded footer content for a brand-new document.
    pub fn default_content() -> Self {
        let year = chrono::Utc::now().format("%Y");
        Self {
            copyright: format!("© {year} IDesign Ads. All rights reserved."),
            quick_links: vec![
                FooterLink {
                    label: "Services".to_string(),
                    url: "#".to_string(),
                },
                FooterLink {
                    label: "Case Studies".to_string(),
                    url: "#testimonials".to_string(),
                },
                FooterLink {
                    label: "FAQ".to_string(),
                    url: "#faq".to_string(),
                },
                FooterLink {
                    label: "Contact".to_string(),
                    url: "#".to_string(),
                },
            ],
            social_links: vec![
                FooterLink {
                    label: "Facebook".to_string(),
                    url: "#".to_string(),
                },
                FooterLink {
                    label: "Instagram".to_string(),
                    url: "#".to_string(),
                },
                FooterLink {
                    label: "LinkedIn".to_string(),
                    url: "#".to_string(),
                },
            ],
            contact_info: ContactInfo {
                address: "Business Bay, Dubai, UAE".to_string(),
                email: "info@idesignads.ae".to_string(),
                phone: "+971 4 123 4567".to_string(),
            },
        }
    }
}

/// The aggregate of all editable sections.
///
/// The five section keys are fixed; a deserialized document always carries
/// all of them (see [`PartialDocument`] for the backfill path). The
/// `revision` stamp increases monotonically with each publish so receivers
/// of publish notifications can discard out-of-order announcements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Document {
    /// Hero banner.
    pub hero: HeroSection,
    /// Achievements strip.
    pub achievements: AchievementsSection,
    /// FAQ accordion.
    pub faq: FaqSection,
    /// Pain-point cards.
    pub pain_points: PainPointsSection,
    /// Page footer.
    pub footer: FooterSection,
    /// Monotonic publish stamp. Absent in pre-stamp payloads, so it
    /// defaults on read.
    #[serde(default)]
    pub revision: u64,
}

/// A stored document as it may actually appear on disk: any section can be
/// missing entirely.
///
/// This is the parse target for slot reads. Missing sections are backfilled
/// *wholesale* from content defaults by [`PartialDocument::into_document`];
/// sections that are present are taken as stored, with serde filling any
/// absent fields with empty type defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialDocument {
    /// Hero banner, if stored.
    pub hero: Option<HeroSection>,
    /// Achievements strip, if stored.
    pub achievements: Option<AchievementsSection>,
    /// FAQ accordion, if stored.
    pub faq: Option<FaqSection>,
    /// Pain-point cards, if stored.
    pub pain_points: Option<PainPointsSection>,
    /// Page footer, if stored.
    pub footer: Option<FooterSection>,
    /// Publish stamp, if stored.
    pub revision: Option<u64>,
}

impl PartialDocument {
    /// Promote to a complete [`Document`], backfilling missing sections
    /// from content defaults.
    pub fn into_document(self) -> Document {
        Document {
            hero: self.hero.unwrap_or_else(HeroSection::default_content),
            achievements: self
                .achievements
                .unwrap_or_else(AchievementsSection::default_content),
            faq: self.faq.unwrap_or_else(FaqSection::default_content),
            pain_points: self
                .pain_points
                .unwrap_or_else(PainPointsSection::default_content),
            footer: self.footer.unwrap_or_else(FooterSection::default_content),
            revision: self.revision.unwrap_or(0),
        }
    }
}

/// The seed [`Document`] for a brand-new page: every section at its content
/// defaults, revision zero.
pub fn default_document() -> Document {
    Document {
        hero: HeroSection::default_content(),
        achievements: AchievementsSection::default_content(),
        faq: FaqSection::default_content(),
        pain_points: PainPointsSection::default_content(),
        footer: FooterSection::default_content(),
        revision: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_complete() {
        let doc = default_document();
        assert!(!doc.hero.title.is_empty());
        assert_eq!(doc.achievements.items.len(), 3);
        assert_eq!(doc.faq.items.len(), 2);
        assert_eq!(doc.pain_points.problems.len(), 3);
        assert_eq!(doc.footer.quick_links.len(), 4);
        assert_eq!(doc.revision, 0);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let doc = default_document();
        let value = serde_json::to_value(&doc).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("painPoints"));
        assert!(obj["hero"].as_object().unwrap().contains_key("ctaText"));
        assert!(
            obj["hero"]
                .as_object()
                .unwrap()
                .contains_key("buttonTextColor")
        );
        assert!(
            obj["footer"]
                .as_object()
                .unwrap()
                .contains_key("quickLinks")
        );
        assert!(
            obj["footer"]["contactInfo"]
                .as_object()
                .unwrap()
                .contains_key("address")
        );
    }

    #[test]
    fn test_enum_wire_spellings() {
        let hero = HeroSection::default_content();
        let value = serde_json::to_value(&hero).unwrap();
        assert_eq!(value["layout"], "centered");
        assert_eq!(value["alignment"], "left");
        assert_eq!(value["padding"], "medium");
        assert_eq!(value["imagePosition"], "right");

        let split: HeroLayout = serde_json::from_str("\"split\"").unwrap();
        assert_eq!(split, HeroLayout::Split);
    }

    #[test]
    fn test_document_round_trip() {
        let doc = default_document();
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn test_partial_document_backfills_missing_sections() {
        let json = r#"{"hero": {"title": "Custom"}}"#;
        let partial: PartialDocument = serde_json::from_str(json).unwrap();
        let doc = partial.into_document();

        // The stored section is taken as-is: present field kept, absent
        // fields at empty type defaults, no content-default deep merge.
        assert_eq!(doc.hero.title, "Custom");
        assert_eq!(doc.hero.subtitle, "");
        assert!(doc.hero.features.is_empty());

        // Missing sections come back wholesale from content defaults.
        assert_eq!(doc.faq, FaqSection::default_content());
        assert_eq!(doc.pain_points, PainPointsSection::default_content());
        assert_eq!(doc.revision, 0);
    }

    #[test]
    fn test_revision_defaults_on_pre_stamp_payloads() {
        let mut value = serde_json::to_value(default_document()).unwrap();
        value.as_object_mut().unwrap().remove("revision");
        let doc: Document = serde_json::from_value(value).unwrap();
        assert_eq!(doc.revision, 0);
    }

    #[test]
    fn test_pain_point_ids_are_stable_data() {
        let mut section = PainPointsSection::default_content();
        section.problems.remove(1);
        let ids: Vec<u32> = section.problems.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
