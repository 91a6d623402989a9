//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::i18n::Locale;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub url: String,
    pub default_locale: Locale,

    // Directory
    pub content_dir: String,
    pub data_dir: String,

    // Category catalogs (files under data_dir)
    pub recipe_categories: String,
    pub pairing_categories: String,

    // Listing
    pub excerpt_length: usize,
    pub words_per_minute: u32,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Saveur".to_string(),
            description: String::new(),
            author: "Alex Chen".to_string(),
            url: "https://example.com".to_string(),
            default_locale: Locale::En,

            content_dir: "content".to_string(),
            data_dir: "data".to_string(),

            recipe_categories: "recipe-categories.json".to_string(),
            pairing_categories: "pairing-categories.json".to_string(),

            excerpt_length: 160,
            words_per_minute: 200,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Saveur");
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.words_per_minute, 200);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Table & Cellar
author: Min-ji Park
default_locale: ko
excerpt_length: 120
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Table & Cellar");
        assert_eq!(config.author, "Min-ji Park");
        assert_eq!(config.default_locale, Locale::Ko);
        assert_eq!(config.excerpt_length, 120);
        // Unspecified fields keep their defaults
        assert_eq!(config.recipe_categories, "recipe-categories.json");
    }
}
