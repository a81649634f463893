use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::category::Category;

/// Prefix applied to image paths declared in project data, which are
/// written relative to the data root.
pub const IMAGE_PREFIX: &str = "portfolio-data/";

/// Fallback image when a project declares none and its category is
/// unrecognized.
pub const GENERIC_FALLBACK_IMAGE: &str = "images/defaults/project.jpg";

/// One portfolio project as it appears in a category's `projects.json`.
///
/// Source data is read-only to this crate; `is_latest` is the only field
/// not backed by it — a view annotation stamped on per-query clones by
/// the superset selection, never on the stored catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(skip_deserializing, default)]
    pub is_latest: bool,
}

impl Project {
    /// The project's link, if it actually has one. Empty, missing, and the
    /// literal placeholder `#` are interchangeable signals for "no link".
    pub fn effective_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty() && *l != "#")
    }

    /// The image path a consumer should render.
    ///
    /// A declared non-blank image wins, rewritten under the data-root
    /// prefix (absolute URLs and already-prefixed paths pass through).
    /// Otherwise the category default; for an unrecognized category, the
    /// generic fallback.
    pub fn effective_image(&self) -> String {
        if let Some(img) = self
            .image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            return rewrite_image_path(img);
        }
        match Category::resolve(&self.category) {
            Some(cat) => cat.default_image().to_string(),
            None => GENERIC_FALLBACK_IMAGE.to_string(),
        }
    }

    /// Comparable date value for recency ordering. Unparseable timestamps
    /// compare as the epoch minimum, so they sink to the end of the
    /// newest-first catalog without disturbing stable ordering.
    pub(crate) fn sort_key(&self) -> NaiveDateTime {
        parse_timestamp(&self.timestamp).unwrap_or(NaiveDateTime::MIN)
    }
}

fn rewrite_image_path(img: &str) -> String {
    if img.starts_with("http://")
        || img.starts_with("https://")
        || img.starts_with('/')
        || img.starts_with(IMAGE_PREFIX)
    {
        return img.to_string();
    }
    format!("{}{}", IMAGE_PREFIX, img)
}

/// Lenient timestamp parsing: RFC 3339 first, then the common local
/// datetime shapes, then a bare date.
pub(crate) fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}
