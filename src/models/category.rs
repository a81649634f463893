use log::warn;
use serde::{Deserialize, Serialize};

/// The seven fixed portfolio categories.
///
/// Each category carries its selector token (the filter-control value),
/// style class, display label, and default image as attached constants so
/// the four mappings cannot drift apart. Anything outside this set is an
/// unrecognized category: retained in the catalog, excluded from lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Trainer,
    Researcher,
    Consultant,
    Academic,
    PublicSpeaker,
    Administrator,
    SocialEnthusiast,
}

impl Category {
    /// Canonical iteration order — superset assembly walks this array.
    pub const ALL: [Category; 7] = [
        Category::Trainer,
        Category::Researcher,
        Category::Consultant,
        Category::Academic,
        Category::PublicSpeaker,
        Category::Administrator,
        Category::SocialEnthusiast,
    ];

    /// Fallback target for unrecognized tokens and classes.
    pub const DEFAULT: Category = Category::Trainer;

    /// Category identifier as it appears in project data and directory names.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Trainer => "trainer",
            Category::Researcher => "researcher",
            Category::Consultant => "consultant",
            Category::Academic => "academic",
            Category::PublicSpeaker => "public-speaker",
            Category::Administrator => "administrator",
            Category::SocialEnthusiast => "social-enthusiast",
        }
    }

    /// Selector token used by filter controls (`.trainer` form).
    pub fn token(&self) -> &'static str {
        match self {
            Category::Trainer => ".trainer",
            Category::Researcher => ".researcher",
            Category::Consultant => ".consultant",
            Category::Academic => ".academic",
            Category::PublicSpeaker => ".public-speaker",
            Category::Administrator => ".administrator",
            Category::SocialEnthusiast => ".social-enthusiast",
        }
    }

    /// Style class stamped on rendered cards so the filter widget can
    /// toggle visibility by class membership.
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Trainer => "mix-trainer",
            Category::Researcher => "mix-researcher",
            Category::Consultant => "mix-consultant",
            Category::Academic => "mix-academic",
            Category::PublicSpeaker => "mix-public-speaker",
            Category::Administrator => "mix-administrator",
            Category::SocialEnthusiast => "mix-social-enthusiast",
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Trainer => "Trainer",
            Category::Researcher => "Researcher",
            Category::Consultant => "Consultant",
            Category::Academic => "Academic",
            Category::PublicSpeaker => "Public Speaker",
            Category::Administrator => "Administrator",
            Category::SocialEnthusiast => "Social Enthusiast",
        }
    }

    /// Image used when a project in this category declares none.
    pub fn default_image(&self) -> &'static str {
        match self {
            Category::Trainer => "images/defaults/trainer.jpg",
            Category::Researcher => "images/defaults/researcher.jpg",
            Category::Consultant => "images/defaults/consultant.jpg",
            Category::Academic => "images/defaults/academic.jpg",
            Category::PublicSpeaker => "images/defaults/public-speaker.jpg",
            Category::Administrator => "images/defaults/administrator.jpg",
            Category::SocialEnthusiast => "images/defaults/social-enthusiast.jpg",
        }
    }

    /// Strict identifier lookup — `None` for anything outside the fixed set.
    pub fn resolve(raw: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.id() == raw)
    }

    /// Resolve a filter token (`.trainer` or bare `trainer`) to a category.
    /// Unrecognized tokens fall back to the default category; the fallback
    /// is logged so bad data doesn't hide behind it.
    pub fn from_token(token: &str) -> Category {
        let bare = token.trim().trim_start_matches('.');
        match Category::resolve(bare) {
            Some(cat) => cat,
            None => {
                warn!(
                    "[category] Unrecognized filter token '{}', falling back to '{}'",
                    token,
                    Category::DEFAULT.id()
                );
                Category::DEFAULT
            }
        }
    }

    /// Style class for a raw category identifier, defaulting like `from_token`.
    pub fn class_for(raw: &str) -> &'static str {
        match Category::resolve(raw) {
            Some(cat) => cat.css_class(),
            None => {
                warn!(
                    "[category] Unrecognized category '{}', using '{}' class",
                    raw,
                    Category::DEFAULT.id()
                );
                Category::DEFAULT.css_class()
            }
        }
    }

    /// Display label for a raw category identifier. Unlike the class and
    /// token lookups, an unrecognized identifier comes back unchanged rather
    /// than borrowing the default category's label.
    pub fn display_label(raw: &str) -> String {
        match Category::resolve(raw) {
            Some(cat) => cat.label().to_string(),
            None => raw.to_string(),
        }
    }
}
