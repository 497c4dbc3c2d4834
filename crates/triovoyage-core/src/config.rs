//! Site Configuration
//!
//! Copy and runtime settings bundled with the site as JSON.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::error::{DomainError, DomainResult};

const BUNDLED_SITE: &str = include_str!("../data/site.json");

fn default_log_level() -> String {
    "info".to_string()
}

fn default_notice_timeout_ms() -> u32 {
    4_000
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub headline: String,
    pub blurb: String,
    pub background_url: String,
    #[serde(default)]
    pub badges: Vec<String>,
}

/// A picture card in the "why us" panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub blurb: String,
    pub image_url: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhyUsCopy {
    pub heading: String,
    pub blurb: String,
    #[serde(default)]
    pub points: Vec<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// Label/value pair in the travel info panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
}

/// Everything the page needs besides the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// How long a notice banner stays up
    #[serde(default = "default_notice_timeout_ms")]
    pub notice_timeout_ms: u32,
    /// Shown after an enquiry is handed off
    pub acknowledgment: String,
    pub hero: HeroCopy,
    pub why_us: WhyUsCopy,
    #[serde(default)]
    pub travel_info: Vec<InfoEntry>,
    pub contact: ContactDetails,
    #[serde(default)]
    pub company_links: Vec<String>,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn bundled() -> DomainResult<Self> {
        Self::from_json(BUNDLED_SITE)
    }

    /// Parse `log_level` ("error", "warn", "info", "debug", "trace", "off").
    pub fn log_filter(&self) -> DomainResult<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| DomainError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_site_config() {
        let site = SiteConfig::bundled().unwrap();
        assert_eq!(site.brand, "TrioVoyage");
        assert_eq!(site.contact.email, "hello@triovoyage.com");
        assert_eq!(site.acknowledgment, "Thanks! We received your enquiry.");
        assert_eq!(site.hero.badges.len(), 3);
        assert_eq!(site.why_us.features.len(), 2);
        assert_eq!(site.travel_info.len(), 4);
        assert_eq!(site.log_filter().unwrap(), LevelFilter::INFO);
    }

    #[test]
    fn test_defaults_apply_when_omitted() {
        let json = r#"{
            "brand": "B", "tagline": "T", "acknowledgment": "ok",
            "hero": {"headline": "h", "blurb": "b", "background_url": "u"},
            "why_us": {"heading": "w", "blurb": "b"},
            "contact": {"email": "e", "phone": "p"}
        }"#;
        let site = SiteConfig::from_json(json).unwrap();
        assert_eq!(site.notice_timeout_ms, 4_000);
        assert_eq!(site.log_level, "info");
        assert!(site.company_links.is_empty());
        assert!(site.hero.badges.is_empty());
    }

    #[test]
    fn test_bad_log_level() {
        let mut site = SiteConfig::bundled().unwrap();
        site.log_level = "loud".to_string();
        assert!(matches!(site.log_filter(), Err(DomainError::InvalidLogLevel(level)) if level == "loud"));
        site.log_level = "DEBUG".to_string();
        assert_eq!(site.log_filter().unwrap(), LevelFilter::DEBUG);
    }
}
