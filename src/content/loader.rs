//! Content loader - the post index and slug resolver

use crate::error::ContentError;
use crate::helpers;
use crate::i18n::Locale;

use super::store::{slug_from_path, ContentStore};
use super::{FrontMatter, MarkdownRenderer, Post, PostMetadata};

/// Defaults applied when front-matter omits a field
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Author used when front-matter has none
    pub default_author: String,
    /// Character budget for excerpts derived from the body
    pub excerpt_length: usize,
    /// Reading speed for estimated read times
    pub words_per_minute: u32,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            default_author: "Alex Chen".to_string(),
            excerpt_length: 160,
            words_per_minute: 200,
        }
    }
}

/// Loads posts from the content store.
///
/// Every call reconstructs its result from the store; there is no cache and
/// no shared state between requests.
pub struct ContentLoader {
    store: ContentStore,
    renderer: MarkdownRenderer,
    options: LoaderOptions,
}

impl ContentLoader {
    pub fn new(store: ContentStore, options: LoaderOptions) -> Self {
        Self {
            store,
            renderer: MarkdownRenderer::new(),
            options,
        }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// List all posts for a locale, newest first.
    ///
    /// Unreadable files are skipped with a warning and a missing locale
    /// directory yields an empty listing; one bad file never hides the rest.
    pub fn list_posts(&self, locale: Locale) -> Vec<PostMetadata> {
        let mut posts = Vec::new();

        for path in self.store.enumerate(locale) {
            let Some(slug) = slug_from_path(&path) else {
                continue;
            };
            match std::fs::read_to_string(&path) {
                Ok(text) => {
                    let (fm, body) = FrontMatter::parse(&text);
                    posts.push(self.build_metadata(fm, body, slug, locale));
                }
                Err(e) => {
                    tracing::warn!("Failed to read post {:?}: {}", path, e);
                }
            }
        }

        posts.sort_by(|a, b| a.listing_cmp(b));
        posts
    }

    /// List posts for a locale restricted to the given category ids
    pub fn list_posts_in_categories(&self, locale: Locale, ids: &[&str]) -> Vec<PostMetadata> {
        let mut posts = self.list_posts(locale);
        posts.retain(|p| p.in_any_category(ids));
        posts
    }

    /// Resolve a single post by slug and locale, rendering its body.
    ///
    /// A missing file is `NotFound`; a file with malformed front-matter
    /// still resolves, with default metadata and the whole file as content.
    pub fn get_post(&self, slug: &str, locale: Locale) -> Result<Post, ContentError> {
        let text = self.store.read(slug, locale)?;
        let (fm, body) = FrontMatter::parse(&text);

        let content = self.renderer.render(body);
        let metadata = self.build_metadata(fm, body, slug, locale);

        tracing::debug!("Resolved post {}/{}", locale, slug);
        Ok(Post { metadata, content })
    }

    fn build_metadata(
        &self,
        fm: FrontMatter,
        body: &str,
        slug: &str,
        locale: Locale,
    ) -> PostMetadata {
        let title = fm.title.unwrap_or_else(|| slug.to_string());
        let excerpt = fm
            .excerpt
            .unwrap_or_else(|| helpers::excerpt_from_body(body, self.options.excerpt_length));
        let author = fm
            .author
            .unwrap_or_else(|| self.options.default_author.clone());
        let read_time = fm.read_time.or_else(|| {
            let estimate = helpers::estimate_read_time(body, self.options.words_per_minute);
            (estimate > 0).then_some(estimate)
        });

        PostMetadata {
            slug: slug.to_string(),
            locale,
            title,
            excerpt,
            author,
            date: fm.date.unwrap_or_default(),
            categories: fm.categories,
            tags: fm.tags,
            cover_image: fm.cover_image,
            read_time,
        }
    }
}
