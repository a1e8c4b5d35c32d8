//! The typed edit protocol.
//!
//! The editor surface speaks `(section, field, value)` with an untyped JSON
//! value. This module is the boundary where that call is admitted into the
//! typed world: [`SectionEdit::from_json`] maps the field name to its
//! declared type and rejects unknown names and wrong shapes, so nothing
//! dynamic reaches the document itself.
//!
//! Pain-point cards are addressed by their stable `id` through
//! [`PainPointsField::Problem`], never by array index, so reordering or
//! removing cards cannot redirect an in-flight edit.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{LandkitError, Result};
use crate::schema::{
    AchievementItem, Alignment, ContactInfo, Document, FaqItem, FooterLink, HeroLayout,
    ImagePosition, PainPoint, SizePreset,
};

/// The fixed set of section names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    /// `hero`
    Hero,
    /// `achievements`
    Achievements,
    /// `faq`
    Faq,
    /// `painPoints`
    PainPoints,
    /// `footer`
    Footer,
}

impl SectionKey {
    /// All section keys, in render order.
    pub const ALL: [SectionKey; 5] = [
        SectionKey::Hero,
        SectionKey::Achievements,
        SectionKey::Faq,
        SectionKey::PainPoints,
        SectionKey::Footer,
    ];

    /// The wire spelling of the key, as used in stored documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Hero => "hero",
            SectionKey::Achievements => "achievements",
            SectionKey::Faq => "faq",
            SectionKey::PainPoints => "painPoints",
            SectionKey::Footer => "footer",
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SectionKey {
    type Err = LandkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hero" => Ok(SectionKey::Hero),
            "achievements" => Ok(SectionKey::Achievements),
            "faq" => Ok(SectionKey::Faq),
            "painPoints" => Ok(SectionKey::PainPoints),
            "footer" => Ok(SectionKey::Footer),
            other => Err(LandkitError::UnknownSection(other.to_string())),
        }
    }
}

/// One field replacement on the hero section.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum HeroField {
    Title(String),
    Subtitle(String),
    Description(String),
    CtaText(String),
    Features(Vec<String>),
    BackgroundColor(String),
    TextColor(String),
    ButtonColor(String),
    ButtonTextColor(String),
    Layout(HeroLayout),
    Alignment(Alignment),
    Padding(SizePreset),
    Spacing(SizePreset),
    ShowImage(bool),
    ImagePosition(ImagePosition),
    ImageUrl(String),
    BackgroundImage(String),
}

/// One field replacement on the achievements section.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum AchievementsField {
    Title(String),
    Items(Vec<AchievementItem>),
}

/// One field replacement on the FAQ section.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum FaqField {
    Title(String),
    Items(Vec<FaqItem>),
}

/// One field replacement on a single pain-point card.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum ProblemField {
    Question(String),
    Icon(String),
    Description(String),
}

/// One field replacement on the pain-points section.
#[derive(Debug, Clone, PartialEq)]
pub enum PainPointsField {
    /// Replace the section heading.
    Title(String),
    /// Replace the whole card list.
    Problems(Vec<PainPoint>),
    /// Edit one card, addressed by its stable id.
    Problem {
        /// The card's stable id.
        id: u32,
        /// The field to replace on that card.
        field: ProblemField,
    },
}

/// One field replacement on the footer section.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum FooterField {
    Copyright(String),
    QuickLinks(Vec<FooterLink>),
    SocialLinks(Vec<FooterLink>),
    ContactInfo(ContactInfo),
}

/// A single validated edit: exactly one field replacement on exactly one
/// section.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum SectionEdit {
    Hero(HeroField),
    Achievements(AchievementsField),
    Faq(FaqField),
    PainPoints(PainPointsField),
    Footer(FooterField),
}

/// What applying an edit did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The field was replaced.
    Applied,
    /// The edit addressed a pain-point id that is not present; the document
    /// is unchanged.
    MissingTarget,
}

fn typed<T: DeserializeOwned>(
    section: SectionKey,
    field: &str,
    expected: &'static str,
    value: Value,
) -> Result<T> {
    serde_json::from_value(value).map_err(|_| LandkitError::FieldType {
        section: section.to_string(),
        field: field.to_string(),
        expected,
    })
}

impl SectionEdit {
    /// The section this edit targets.
    pub fn section(&self) -> SectionKey {
        match self {
            SectionEdit::Hero(_) => SectionKey::Hero,
            SectionEdit::Achievements(_) => SectionKey::Achievements,
            SectionEdit::Faq(_) => SectionKey::Faq,
            SectionEdit::PainPoints(_) => SectionKey::PainPoints,
            SectionEdit::Footer(_) => SectionKey::Footer,
        }
    }

    /// Admit an untyped `(section, field, value)` call from the editor
    /// surface.
    ///
    /// Field names use the wire spelling (`ctaText`, `quickLinks`, …).
    /// Unknown names are rejected with [`LandkitError::UnknownField`];
    /// values that do not deserialize to the field's declared type with
    /// [`LandkitError::FieldType`].
    pub fn from_json(section: SectionKey, field: &str, value: Value) -> Result<Self> {
        use SectionKey::*;

        let edit = match (section, field) {
            (Hero, "title") => Self::Hero(HeroField::Title(typed(section, field, "string", value)?)),
            (Hero, "subtitle") => {
                Self::Hero(HeroField::Subtitle(typed(section, field, "string", value)?))
            }
            (Hero, "description") => Self::Hero(HeroField::Description(typed(
                section, field, "string", value,
            )?)),
            (Hero, "ctaText") => {
                Self::Hero(HeroField::CtaText(typed(section, field, "string", value)?))
            }
            (Hero, "features") => Self::Hero(HeroField::Features(typed(
                section,
                field,
                "array of strings",
                value,
            )?)),
            (Hero, "backgroundColor") => Self::Hero(HeroField::BackgroundColor(typed(
                section, field, "string", value,
            )?)),
            (Hero, "textColor") => {
                Self::Hero(HeroField::TextColor(typed(section, field, "string", value)?))
            }
            (Hero, "buttonColor") => Self::Hero(HeroField::ButtonColor(typed(
                section, field, "string", value,
            )?)),
            (Hero, "buttonTextColor") => Self::Hero(HeroField::ButtonTextColor(typed(
                section, field, "string", value,
            )?)),
            (Hero, "layout") => Self::Hero(HeroField::Layout(typed(
                section,
                field,
                "one of centered|split",
                value,
            )?)),
            (Hero, "alignment") => Self::Hero(HeroField::Alignment(typed(
                section,
                field,
                "one of left|center|right",
                value,
            )?)),
            (Hero, "padding") => Self::Hero(HeroField::Padding(typed(
                section,
                field,
                "one of small|medium|large",
                value,
            )?)),
            (Hero, "spacing") => Self::Hero(HeroField::Spacing(typed(
                section,
                field,
                "one of small|medium|large",
                value,
            )?)),
            (Hero, "showImage") => {
                Self::Hero(HeroField::ShowImage(typed(section, field, "boolean", value)?))
            }
            (Hero, "imagePosition") => Self::Hero(HeroField::ImagePosition(typed(
                section,
                field,
                "one of left|right|bottom",
                value,
            )?)),
            (Hero, "imageUrl") => {
                Self::Hero(HeroField::ImageUrl(typed(section, field, "string", value)?))
            }
            (Hero, "backgroundImage") => Self::Hero(HeroField::BackgroundImage(typed(
                section, field, "string", value,
            )?)),

            (Achievements, "title") => Self::Achievements(AchievementsField::Title(typed(
                section, field, "string", value,
            )?)),
            (Achievements, "items") => Self::Achievements(AchievementsField::Items(typed(
                section,
                field,
                "array of {number, label}",
                value,
            )?)),

            (Faq, "title") => {
                Self::Faq(FaqField::Title(typed(section, field, "string", value)?))
            }
            (Faq, "items") => Self::Faq(FaqField::Items(typed(
                section,
                field,
                "array of {question, answer}",
                value,
            )?)),

            (PainPoints, "title") => Self::PainPoints(PainPointsField::Title(typed(
                section, field, "string", value,
            )?)),
            (PainPoints, "problems") => Self::PainPoints(PainPointsField::Problems(typed(
                section,
                field,
                "array of {id, question, icon, description}",
                value,
            )?)),

            (Footer, "copyright") => Self::Footer(FooterField::Copyright(typed(
                section, field, "string", value,
            )?)),
            (Footer, "quickLinks") => Self::Footer(FooterField::QuickLinks(typed(
                section,
                field,
                "array of {label, url}",
                value,
            )?)),
            (Footer, "socialLinks") => Self::Footer(FooterField::SocialLinks(typed(
                section,
                field,
                "array of {label, url}",
                value,
            )?)),
            (Footer, "contactInfo") => Self::Footer(FooterField::ContactInfo(typed(
                section,
                field,
                "{address, email, phone}",
                value,
            )?)),

            (_, other) => {
                return Err(LandkitError::UnknownField {
                    section: section.to_string(),
                    field: other.to_string(),
                });
            }
        };

        Ok(edit)
    }
}

impl Document {
    /// Apply one edit, replacing exactly the addressed field and leaving
    /// every other field and section untouched.
    pub fn apply(&mut self, edit: SectionEdit) -> EditOutcome {
        match edit {
            SectionEdit::Hero(field) => {
                let hero = &mut self.hero;
                match field {
                    HeroField::Title(v) => hero.title = v,
                    HeroField::Subtitle(v) => hero.subtitle = v,
                    HeroField::Description(v) => hero.description = v,
                    HeroField::CtaText(v) => hero.cta_text = v,
                    HeroField::Features(v) => hero.features = v,
                    HeroField::BackgroundColor(v) => hero.background_color = v,
                    HeroField::TextColor(v) => hero.text_color = v,
                    HeroField::ButtonColor(v) => hero.button_color = v,
                    HeroField::ButtonTextColor(v) => hero.button_text_color = v,
                    HeroField::Layout(v) => hero.layout = v,
                    HeroField::Alignment(v) => hero.alignment = v,
                    HeroField::Padding(v) => hero.padding = v,
                    HeroField::Spacing(v) => hero.spacing = v,
                    HeroField::ShowImage(v) => hero.show_image = v,
                    HeroField::ImagePosition(v) => hero.image_position = v,
                    HeroField::ImageUrl(v) => hero.image_url = v,
                    HeroField::BackgroundImage(v) => hero.background_image = v,
                }
                EditOutcome::Applied
            }
            SectionEdit::Achievements(field) => {
                match field {
                    AchievementsField::Title(v) => self.achievements.title = v,
                    AchievementsField::Items(v) => self.achievements.items = v,
                }
                EditOutcome::Applied
            }
            SectionEdit::Faq(field) => {
                match field {
                    FaqField::Title(v) => self.faq.title = v,
                    FaqField::Items(v) => self.faq.items = v,
                }
                EditOutcome::Applied
            }
            SectionEdit::PainPoints(field) => match field {
                PainPointsField::Title(v) => {
                    self.pain_points.title = v;
                    EditOutcome::Applied
                }
                PainPointsField::Problems(v) => {
                    self.pain_points.problems = v;
                    EditOutcome::Applied
                }
                PainPointsField::Problem { id, field } => {
                    match self.pain_points.problems.iter_mut().find(|p| p.id == id) {
                        Some(problem) => {
                            match field {
                                ProblemField::Question(v) => problem.question = v,
                                ProblemField::Icon(v) => problem.icon = v,
                                ProblemField::Description(v) => problem.description = v,
                            }
                            EditOutcome::Applied
                        }
                        None => EditOutcome::MissingTarget,
                    }
                }
            },
            SectionEdit::Footer(field) => {
                match field {
                    FooterField::Copyright(v) => self.footer.copyright = v,
                    FooterField::QuickLinks(v) => self.footer.quick_links = v,
                    FooterField::SocialLinks(v) => self.footer.social_links = v,
                    FooterField::ContactInfo(v) => self.footer.contact_info = v,
                }
                EditOutcome::Applied
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::default_document;
    use serde_json::json;

    #[test]
    fn test_section_key_round_trip() {
        for key in SectionKey::ALL {
            let parsed: SectionKey = key.as_str().parse().unwrap();
            assert_eq!(parsed, key);
        }
        assert_eq!("painPoints".parse::<SectionKey>().unwrap(), SectionKey::PainPoints);
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let err = "caseStudies".parse::<SectionKey>().unwrap_err();
        assert!(matches!(err, LandkitError::UnknownSection(s) if s == "caseStudies"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err =
            SectionEdit::from_json(SectionKey::Hero, "fontSize", json!("12px")).unwrap_err();
        assert!(
            matches!(err, LandkitError::UnknownField { ref field, .. } if field == "fontSize"),
            "expected UnknownField, got {err:?}"
        );
    }

    #[test]
    fn test_wrong_value_shape_is_rejected() {
        let err = SectionEdit::from_json(SectionKey::Hero, "showImage", json!("yes")).unwrap_err();
        assert!(matches!(err, LandkitError::FieldType { .. }));

        let err = SectionEdit::from_json(SectionKey::Hero, "layout", json!("diagonal")).unwrap_err();
        assert!(matches!(err, LandkitError::FieldType { .. }));
    }

    #[test]
    fn test_from_json_builds_typed_edit() {
        let edit =
            SectionEdit::from_json(SectionKey::Hero, "title", json!("New Title")).unwrap();
        assert_eq!(edit, SectionEdit::Hero(HeroField::Title("New Title".to_string())));
        assert_eq!(edit.section(), SectionKey::Hero);

        let edit = SectionEdit::from_json(
            SectionKey::Faq,
            "items",
            json!([{"question": "Q", "answer": "A"}]),
        )
        .unwrap();
        match edit {
            SectionEdit::Faq(FaqField::Items(items)) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].question, "Q");
            }
            other => panic!("expected FAQ items edit, got {other:?}"),
        }
    }

    #[test]
    fn test_apply_replaces_only_the_addressed_field() {
        let mut doc = default_document();
        let before = doc.clone();

        let outcome = doc.apply(SectionEdit::Hero(HeroField::Title("New Title".to_string())));
        assert_eq!(outcome, EditOutcome::Applied);
        assert_eq!(doc.hero.title, "New Title");

        // Everything except the one field is untouched.
        let mut expected = before;
        expected.hero.title = "New Title".to_string();
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_problem_edit_resolves_by_id_not_index() {
        let mut doc = default_document();
        // Remove the first card so id 2 now sits at index 0.
        doc.pain_points.problems.remove(0);

        let outcome = doc.apply(SectionEdit::PainPoints(PainPointsField::Problem {
            id: 3,
            field: ProblemField::Description("Updated".to_string()),
        }));
        assert_eq!(outcome, EditOutcome::Applied);

        let by_id: Vec<(u32, &str)> = doc
            .pain_points
            .problems
            .iter()
            .map(|p| (p.id, p.description.as_str()))
            .collect();
        assert_eq!(by_id[1].0, 3);
        assert_eq!(by_id[1].1, "Updated");
    }

    #[test]
    fn test_problem_edit_with_missing_id_is_a_no_op() {
        let mut doc = default_document();
        let before = doc.clone();

        let outcome = doc.apply(SectionEdit::PainPoints(PainPointsField::Problem {
            id: 99,
            field: ProblemField::Icon("⚠️".to_string()),
        }));
        assert_eq!(outcome, EditOutcome::MissingTarget);
        assert_eq!(doc, before);
    }
}
