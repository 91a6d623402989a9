//! Front-matter parsing

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            // Comma-separated scalars are accepted for hand-written files
            Ok(value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect())
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Front-matter data from a content file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    #[serde(rename = "coverImage", alias = "cover_image")]
    pub cover_image: Option<String>,
    #[serde(rename = "readTime", alias = "read_time")]
    pub read_time: Option<u32>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub categories: Vec<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from a content file.
    /// Returns (front_matter, body).
    ///
    /// This boundary never fails: files with a missing, unterminated, or
    /// malformed metadata block come back as default metadata with the full
    /// original text as body, so one bad file can't poison a listing.
    pub fn parse(content: &str) -> (Self, &str) {
        let trimmed = content.trim_start();

        if !trimmed.starts_with("---") {
            return (FrontMatter::default(), trimmed);
        }

        let rest = trimmed[3..].trim_start_matches(['\n', '\r']);
        let Some(end_pos) = rest.find("\n---") else {
            // No closing delimiter, treat as prose
            return (FrontMatter::default(), trimmed);
        };

        let yaml_block = &rest[..end_pos];
        let body = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_block.trim().is_empty() {
            return (FrontMatter::default(), body);
        }

        // Markdown also uses --- as a thematic break, so only treat the block
        // as metadata when at least one line looks like `key: value`
        if !has_yaml_structure(yaml_block) {
            return (FrontMatter::default(), trimmed);
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_block) {
            Ok(fm) => (fm, body),
            Err(e) => {
                tracing::warn!("Failed to parse front-matter, treating as content: {}", e);
                (FrontMatter::default(), trimmed)
            }
        }
    }
}

/// Check whether a delimited block contains at least one `key: value` line.
///
/// Keys must be simple ASCII identifiers; a colon inside a URL
/// (`https://...`) does not count.
fn has_yaml_structure(block: &str) -> bool {
    block.lines().any(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return false;
        }
        let Some(colon_pos) = line.find(':') else {
            return false;
        };
        let key = &line[..colon_pos];
        let valid_key = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && !matches!(key, "http" | "https" | "ftp");
        if !valid_key {
            return false;
        }
        let value = &line[colon_pos + 1..];
        value.is_empty() || value.starts_with(' ')
    })
}

/// Parse a front-matter date string in the formats content authors use.
/// Unparseable dates yield `None` so the index can sort them last.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(d) = chrono::NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 with an explicit offset
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Kimchi Stew
date: 2024-03-01
author: Alex Chen
coverImage: /images/kimchi-stew.jpg
tags:
  - korean
  - stew
categories:
  - korean-traditional
---

A warming classic.
"#;

        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, Some("Kimchi Stew".to_string()));
        assert_eq!(fm.date, Some("2024-03-01".to_string()));
        assert_eq!(fm.author, Some("Alex Chen".to_string()));
        assert_eq!(fm.cover_image, Some("/images/kimchi-stew.jpg".to_string()));
        assert_eq!(fm.tags, vec!["korean", "stew"]);
        assert_eq!(fm.categories, vec!["korean-traditional"]);
        assert!(body.contains("A warming classic."));
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let content =
            "---\ntitle: Salad\ndate: 2024-05-01\ntags:\n- fresh\ncategories:\n- healthy-meals\n---\nBody.";
        let (fm, _) = FrontMatter::parse(content);

        let serialized = serde_yaml::to_string(&fm).unwrap();
        let reparsed: FrontMatter = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(reparsed.title, fm.title);
        assert_eq!(reparsed.date, fm.date);
        assert_eq!(reparsed.tags, fm.tags);
        assert_eq!(reparsed.categories, fm.categories);
    }

    #[test]
    fn test_parse_single_string_categories() {
        let content =
            "---\ntitle: Quick Bibimbap\ncategories: simple-cooking\ntags: rice, easy\n---\nContent.";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.categories, vec!["simple-cooking"]);
        assert_eq!(fm.tags, vec!["rice", "easy"]);
    }

    #[test]
    fn test_missing_delimiter_yields_default() {
        let content = "Just a plain markdown file.\n\nNo metadata at all.";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert!(fm.categories.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unterminated_block_yields_default() {
        let content = "---\ntitle: Broken\nNo closing fence here.";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert_eq!(body, content);
    }

    #[test]
    fn test_markdown_separator_not_yaml() {
        let content = "\n---\n\nSome notes:\n- Item 1\n- Item 2\n\n---\nMore content here.\n";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert!(body.contains("Some notes"));
    }

    #[test]
    fn test_url_colon_not_yaml() {
        let content = "\n---\n\nSee https://example.com/recipes\n\n---\nMore.\n";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert!(body.contains("https://example.com"));
    }

    #[test]
    fn test_parse_date_formats() {
        assert!(parse_date("2024-03-01").is_some());
        assert!(parse_date("2024/03/01").is_some());
        assert!(parse_date("2024-03-01 10:30:00").is_some());
        assert!(parse_date("2024-03-01T10:30:00+09:00").is_some());
        assert!(parse_date("last tuesday").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_extra_fields_preserved() {
        let content = "---\ntitle: Doenjang Jjigae\nservings: 4\n---\nBody.";
        let (fm, _) = FrontMatter::parse(content);
        assert!(fm.extra.contains_key("servings"));
    }
}
