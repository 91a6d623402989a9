//! Post models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::i18n::Locale;

/// Metadata for a single post, as shown on listing pages.
///
/// `slug` + `locale` uniquely identifies a post; the slug is derived from
/// the filename, never from the title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMetadata {
    /// URL-safe identifier, unique within a locale
    pub slug: String,

    /// Content locale
    pub locale: Locale,

    /// Post title (falls back to the slug when front-matter omits it)
    pub title: String,

    /// Short summary for listing pages and meta descriptions
    pub excerpt: String,

    /// Author display name
    pub author: String,

    /// Publication date as written in front-matter (ISO-8601)
    pub date: String,

    /// Category ids, ordered as written
    pub categories: Vec<String>,

    /// Free-form tags
    pub tags: Vec<String>,

    /// Relative path to the cover image
    pub cover_image: Option<String>,

    /// Estimated reading time in minutes
    pub read_time: Option<u32>,
}

impl PostMetadata {
    /// Parsed publication date, used as the sole sort key.
    /// Unparseable dates return `None` and sort after every dated post.
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        super::frontmatter::parse_date(&self.date)
    }

    /// Whether the post belongs to any of the given categories
    pub fn in_any_category(&self, ids: &[&str]) -> bool {
        self.categories.iter().any(|c| ids.contains(&c.as_str()))
    }

    /// Listing order: date descending, slug ascending for equal dates.
    /// Posts without a parseable date sort last.
    pub fn listing_cmp(&self, other: &Self) -> Ordering {
        match (self.parsed_date(), other.parsed_date()) {
            (Some(a), Some(b)) => b.cmp(&a).then_with(|| self.slug.cmp(&other.slug)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.slug.cmp(&other.slug),
        }
    }
}

/// A fully resolved post: metadata plus rendered HTML.
///
/// Only materialized on single-post resolution; listings carry metadata
/// alone so they never pay for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(flatten)]
    pub metadata: PostMetadata,

    /// Sanitized HTML rendered from the markdown body
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(slug: &str, date: &str) -> PostMetadata {
        PostMetadata {
            slug: slug.to_string(),
            locale: Locale::En,
            title: slug.to_string(),
            excerpt: String::new(),
            author: "Alex Chen".to_string(),
            date: date.to_string(),
            categories: vec!["korean-traditional".to_string()],
            tags: Vec::new(),
            cover_image: None,
            read_time: None,
        }
    }

    #[test]
    fn test_listing_order_newest_first() {
        let kimchi = meta("kimchi-stew", "2024-03-01");
        let salad = meta("salad", "2024-05-01");
        assert_eq!(salad.listing_cmp(&kimchi), Ordering::Less);
        assert_eq!(kimchi.listing_cmp(&salad), Ordering::Greater);
    }

    #[test]
    fn test_listing_order_tie_break_by_slug() {
        let a = meta("apple-galette", "2024-03-01");
        let b = meta("bibimbap", "2024-03-01");
        assert_eq!(a.listing_cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_unparseable_date_sorts_last() {
        let dated = meta("salad", "2024-05-01");
        let undated = meta("mystery", "someday");
        assert_eq!(dated.listing_cmp(&undated), Ordering::Less);
        assert_eq!(undated.listing_cmp(&dated), Ordering::Greater);
    }

    #[test]
    fn test_in_any_category() {
        let post = meta("kimchi-stew", "2024-03-01");
        assert!(post.in_any_category(&["korean-traditional", "vegetarian"]));
        assert!(!post.in_any_category(&["wine-pairings"]));
    }
}
