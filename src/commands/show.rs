//! Show a single resolved post

use anyhow::Result;

use crate::error::ContentError;
use crate::i18n::Locale;
use crate::Saveur;

/// Resolve a post by slug and print its metadata and rendered HTML
pub fn run(site: &Saveur, slug: &str, locale: Locale) -> Result<()> {
    let post = match site.get_post(slug, locale) {
        Ok(post) => post,
        Err(ContentError::NotFound { .. }) => {
            // Distinct from a store failure: this is the CLI's 404
            println!("Not found: {}/{}", locale, slug);
            return Ok(());
        }
        Err(ContentError::Store(e)) => return Err(e.into()),
    };

    let meta = &post.metadata;
    println!("title:    {}", meta.title);
    println!("date:     {}", meta.date);
    println!("author:   {}", meta.author);
    if !meta.categories.is_empty() {
        println!("categories: {}", meta.categories.join(", "));
    }
    if !meta.tags.is_empty() {
        println!("tags:     {}", meta.tags.join(", "));
    }
    if let Some(minutes) = meta.read_time {
        println!("read:     {} min", minutes);
    }
    println!();
    println!("{}", post.content);

    Ok(())
}
