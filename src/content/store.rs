//! Content store - per-locale directories of markdown files

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::ContentError;
use crate::i18n::Locale;

/// Flat-file content store.
///
/// One fixed layout: `<root>/<locale>/<slug>.md`. The slug is the file stem,
/// so `content/en/kimchi-stew.md` is post `kimchi-stew` in locale `en`.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one locale's content files
    pub fn locale_dir(&self, locale: Locale) -> PathBuf {
        self.root.join(locale.as_str())
    }

    /// Path a given (slug, locale) pair would live at
    pub fn post_path(&self, slug: &str, locale: Locale) -> PathBuf {
        self.locale_dir(locale).join(format!("{}.md", slug))
    }

    /// Enumerate content files for a locale, sorted by filename for a
    /// deterministic scan order. A missing locale directory is an empty
    /// store, not an error.
    pub fn enumerate(&self, locale: Locale) -> Vec<PathBuf> {
        let dir = self.locale_dir(locale);
        if !dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", dir);
            return Vec::new();
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&dir)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file() && is_markdown_file(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// Read the raw text for a single post.
    ///
    /// A missing file is `NotFound` (the caller renders a 404); any other
    /// I/O failure is a store error.
    pub fn read(&self, slug: &str, locale: Locale) -> Result<String, ContentError> {
        let path = self.post_path(slug, locale);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ContentError::NotFound {
                slug: slug.to_string(),
                locale,
            }),
            Err(e) => Err(ContentError::Store(e)),
        }
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

/// Derive the slug from a content file path (the file stem)
pub fn slug_from_path(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_files(files: &[(&str, &str)]) -> (tempfile::TempDir, ContentStore) {
        let dir = tempfile::tempdir().unwrap();
        for (rel, text) in files {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, text).unwrap();
        }
        let store = ContentStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_enumerate_sorted_by_filename() {
        let (_dir, store) = store_with_files(&[
            ("en/salad.md", "a"),
            ("en/bibimbap.md", "b"),
            ("en/kimchi-stew.md", "c"),
        ]);

        let slugs: Vec<_> = store
            .enumerate(Locale::En)
            .iter()
            .filter_map(|p| slug_from_path(p).map(str::to_string))
            .collect();
        assert_eq!(slugs, vec!["bibimbap", "kimchi-stew", "salad"]);
    }

    #[test]
    fn test_enumerate_skips_non_markdown() {
        let (_dir, store) = store_with_files(&[
            ("en/salad.md", "a"),
            ("en/notes.txt", "b"),
            ("en/cover.jpg", "c"),
        ]);
        assert_eq!(store.enumerate(Locale::En).len(), 1);
    }

    #[test]
    fn test_enumerate_missing_locale_dir_is_empty() {
        let (_dir, store) = store_with_files(&[("en/salad.md", "a")]);
        assert!(store.enumerate(Locale::Ja).is_empty());
    }

    #[test]
    fn test_locales_are_isolated() {
        let (_dir, store) =
            store_with_files(&[("en/salad.md", "a"), ("ko/salad.md", "b"), ("ko/stew.md", "c")]);
        assert_eq!(store.enumerate(Locale::En).len(), 1);
        assert_eq!(store.enumerate(Locale::Ko).len(), 2);
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let (_dir, store) = store_with_files(&[("en/salad.md", "a")]);
        let err = store.read("no-such-post", Locale::En).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_existing() {
        let (_dir, store) = store_with_files(&[("ko/salad.md", "hello")]);
        assert_eq!(store.read("salad", Locale::Ko).unwrap(), "hello");
    }
}
