//! Create a new content file

use anyhow::Result;
use std::fs;

use crate::i18n::Locale;
use crate::Saveur;

/// Create a new post file under the locale's content directory.
/// The slug (and therefore the filename) is derived from the title.
pub fn run(site: &Saveur, title: &str, locale: Locale) -> Result<()> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Title {:?} does not produce a usable slug", title);
    }

    let locale_dir = site.content_dir.join(locale.as_str());
    fs::create_dir_all(&locale_dir)?;

    let file_path = locale_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let now = chrono::Local::now();
    let content = format!(
        r#"---
title: {title}
date: {date}
author: {author}
categories: []
tags: []
---
"#,
        title = title,
        date = now.format("%Y-%m-%d"),
        author = site.config.author,
    );

    fs::write(&file_path, content)?;
    println!("Created: {:?}", file_path);

    Ok(())
}
