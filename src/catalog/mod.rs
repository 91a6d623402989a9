//! Category catalogs
//!
//! Categories are a fixed, locale-keyed classification loaded from JSON at
//! startup. The site keeps two catalogs, one for recipe categories and one
//! for food-and-drink pairing categories; listing pages filter posts by
//! membership in the relevant catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::i18n::{Locale, LocalizedString};

/// Which catalog a category set belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Recipe,
    Pairing,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKind::Recipe => f.write_str("recipe"),
            CategoryKind::Pairing => f.write_str("pairing"),
        }
    }
}

/// A single content category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier used in front-matter and URLs
    pub id: String,
    /// Localized display name
    pub name: LocalizedString,
    /// Localized description for category landing pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
}

/// An immutable catalog of categories, loaded once and passed into the
/// pipeline at construction time.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    kind: CategoryKind,
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// Build a catalog from already-loaded categories
    pub fn new(kind: CategoryKind, categories: Vec<Category>) -> Self {
        Self { kind, categories }
    }

    /// Load a catalog from a JSON file.
    ///
    /// A missing or unreadable file yields an empty catalog with a warning;
    /// pages then render without that category set rather than failing.
    pub fn load<P: AsRef<Path>>(path: P, kind: CategoryKind) -> Self {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read {} categories from {:?}: {}", kind, path, e);
                return Self::new(kind, Vec::new());
            }
        };

        match serde_json::from_str::<Vec<Category>>(&text) {
            Ok(categories) => {
                tracing::debug!("Loaded {} {} categories from {:?}", categories.len(), kind, path);
                Self::new(kind, categories)
            }
            Err(e) => {
                tracing::warn!("Failed to parse {} categories from {:?}: {}", kind, path, e);
                Self::new(kind, Vec::new())
            }
        }
    }

    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    /// All categories, in catalog order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id; `None` for unknown ids
    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// All category ids, in catalog order
    pub fn ids(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }

    /// Display name for a category id in the given locale.
    /// Unknown ids fall back to the literal id string.
    pub fn display_name(&self, id: &str, locale: Locale) -> String {
        match self.category_by_id(id) {
            Some(category) => category.name.resolve(locale).to_string(),
            None => id.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
