//! saveur: the content pipeline behind a localized food & pairing site
//!
//! Posts live as markdown files with YAML front-matter under per-locale
//! directories; category catalogs are fixed JSON files. This crate loads,
//! indexes, and renders that content for the page layer.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod i18n;

use anyhow::Result;
use std::path::{Path, PathBuf};

use catalog::{CategoryCatalog, CategoryKind};
use content::{ContentLoader, ContentStore, LoaderOptions, Post, PostMetadata};
use error::ContentError;
use i18n::Locale;

/// The main application: configuration plus the loaded category catalogs.
///
/// Catalogs are loaded once here and owned by the instance; nothing in the
/// pipeline reaches for process-wide state.
pub struct Saveur {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content store root (per-locale subdirectories)
    pub content_dir: PathBuf,
    /// Recipe category catalog
    pub recipe_catalog: CategoryCatalog,
    /// Pairing category catalog
    pub pairing_catalog: CategoryCatalog,

    loader: ContentLoader,
}

impl Saveur {
    /// Create a new instance from a site directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let data_dir = base_dir.join(&config.data_dir);

        let recipe_catalog = CategoryCatalog::load(
            data_dir.join(&config.recipe_categories),
            CategoryKind::Recipe,
        );
        let pairing_catalog = CategoryCatalog::load(
            data_dir.join(&config.pairing_categories),
            CategoryKind::Pairing,
        );

        let loader = ContentLoader::new(
            ContentStore::new(&content_dir),
            LoaderOptions {
                default_author: config.author.clone(),
                excerpt_length: config.excerpt_length,
                words_per_minute: config.words_per_minute,
            },
        );

        Ok(Self {
            config,
            base_dir,
            content_dir,
            recipe_catalog,
            pairing_catalog,
            loader,
        })
    }

    /// List post metadata for a locale, newest first
    pub fn list_posts(&self, locale: Locale) -> Vec<PostMetadata> {
        self.loader.list_posts(locale)
    }

    /// List posts belonging to one catalog's categories
    pub fn list_posts_by_kind(&self, locale: Locale, kind: CategoryKind) -> Vec<PostMetadata> {
        let ids = self.catalog(kind).ids();
        self.loader.list_posts_in_categories(locale, &ids)
    }

    /// Resolve a single post by slug and locale
    pub fn get_post(&self, slug: &str, locale: Locale) -> Result<Post, ContentError> {
        self.loader.get_post(slug, locale)
    }

    /// The catalog for a category kind
    pub fn catalog(&self, kind: CategoryKind) -> &CategoryCatalog {
        match kind {
            CategoryKind::Recipe => &self.recipe_catalog,
            CategoryKind::Pairing => &self.pairing_catalog,
        }
    }

    /// Display name for a category id, searching both catalogs.
    /// Unknown ids fall back to the literal id string.
    pub fn category_name(&self, id: &str, locale: Locale) -> String {
        self.recipe_catalog
            .category_by_id(id)
            .or_else(|| self.pairing_catalog.category_by_id(id))
            .map(|c| c.name.resolve(locale).to_string())
            .unwrap_or_else(|| id.to_string())
    }
}
