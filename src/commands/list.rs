//! List posts for a locale

use anyhow::Result;

use crate::catalog::CategoryKind;
use crate::i18n::Locale;
use crate::Saveur;

/// List posts for a locale, optionally restricted to one catalog's categories
pub fn run(site: &Saveur, locale: Locale, kind: Option<CategoryKind>) -> Result<()> {
    let posts = match kind {
        Some(kind) => site.list_posts_by_kind(locale, kind),
        None => site.list_posts(locale),
    };

    println!("Posts for {} ({}):", locale, posts.len());
    for post in &posts {
        let date = if post.date.is_empty() {
            "(undated)"
        } else {
            post.date.as_str()
        };
        let categories: Vec<String> = post
            .categories
            .iter()
            .map(|id| site.category_name(id, locale))
            .collect();
        println!(
            "  {} - {} [{}] ({})",
            date,
            post.title,
            post.slug,
            categories.join(", ")
        );
    }

    Ok(())
}
