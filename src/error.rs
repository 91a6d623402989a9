//! Typed errors for content resolution

use crate::i18n::Locale;

/// Errors surfaced by single-post resolution.
///
/// Bulk listing never returns these: a bad file is skipped with a warning and
/// a missing store yields an empty listing. Only `get_post` distinguishes
/// "no such post" (a 404 for the calling page) from an actual store failure.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("no post {slug:?} for locale {locale}")]
    NotFound { slug: String, locale: Locale },

    #[error("content store error: {0}")]
    Store(#[from] std::io::Error),
}

impl ContentError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound { .. })
    }
}
