//! Package Models
//!
//! Travel package records shown in the catalog grid and detail modal.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a package within the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(pub u32);

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A travel package as listed on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub id: PackageId,
    /// Display name
    pub title: String,
    /// Free-text duration, e.g. "9 days · 7 nights"
    pub subtitle: String,
    /// Pre-formatted price; never parsed
    pub price: String,
    /// Externally hosted image, loaded by the browser
    pub image_url: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    /// One-paragraph description
    pub summary: String,
}

impl PackageRecord {
    /// Check whether title or summary contains an already lowercased needle.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.summary.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, summary: &str) -> PackageRecord {
        PackageRecord {
            id: PackageId(7),
            title: title.to_string(),
            subtitle: "3 days".to_string(),
            price: "₹10".to_string(),
            image_url: String::new(),
            bullets: vec![],
            summary: summary.to_string(),
        }
    }

    #[test]
    fn test_matches_title_or_summary() {
        let pkg = record("Alpine Escape", "Lakes and trains");
        assert!(pkg.matches_lowercase("alpine"));
        assert!(pkg.matches_lowercase("trains"));
        assert!(!pkg.matches_lowercase("desert"));
    }

    #[test]
    fn test_bullets_default_when_missing() {
        let json = r#"{"id":4,"title":"T","subtitle":"S","price":"P","image_url":"u","summary":"x"}"#;
        let pkg: PackageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(pkg.id, PackageId(4));
        assert!(pkg.bullets.is_empty());
    }

    #[test]
    fn test_package_id_display() {
        assert_eq!(PackageId(12).to_string(), "#12");
    }
}
