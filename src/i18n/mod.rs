//! Locales and localized strings

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A content locale supported by the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ko,
    Zh,
    Ja,
}

impl Locale {
    /// All supported locales, in the order they appear in the site navigation
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Ko, Locale::Zh, Locale::Ja];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
            Locale::Zh => "zh",
            Locale::Ja => "ja",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "ko" => Ok(Locale::Ko),
            "zh" => Ok(Locale::Zh),
            "ja" => Ok(Locale::Ja),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// Error for locale tags outside the supported set
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown locale: {0:?} (expected one of en, ko, zh, ja)")]
pub struct UnknownLocale(pub String);

/// A string with a mandatory English text and optional per-locale overrides.
///
/// Resolution always falls back to `en`, so `resolve` returns a non-empty
/// string whenever the English text is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    pub en: String,
    #[serde(flatten)]
    pub other: HashMap<String, String>,
}

impl LocalizedString {
    /// Create a localized string with only the English text
    pub fn new(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            other: HashMap::new(),
        }
    }

    /// Add a translation for a locale
    pub fn with(mut self, locale: Locale, text: impl Into<String>) -> Self {
        if locale == Locale::En {
            self.en = text.into();
        } else {
            self.other.insert(locale.as_str().to_string(), text.into());
        }
        self
    }

    /// Resolve the text for a locale, falling back to English
    pub fn resolve(&self, locale: Locale) -> &str {
        if locale == Locale::En {
            return &self.en;
        }
        match self.other.get(locale.as_str()) {
            Some(text) if !text.is_empty() => text,
            _ => &self.en,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(locale.as_str().parse::<Locale>().unwrap(), locale);
        }
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_resolve_with_translation() {
        let name = LocalizedString::new("Korean Traditional").with(Locale::Ko, "한국 전통");
        assert_eq!(name.resolve(Locale::Ko), "한국 전통");
        assert_eq!(name.resolve(Locale::En), "Korean Traditional");
    }

    #[test]
    fn test_resolve_falls_back_to_english() {
        let name = LocalizedString::new("Wine Pairings").with(Locale::Ja, "ワインペアリング");
        assert_eq!(name.resolve(Locale::Zh), "Wine Pairings");
        assert_eq!(name.resolve(Locale::Ja), "ワインペアリング");
    }

    #[test]
    fn test_empty_override_falls_back() {
        let name = LocalizedString::new("Healthy Meals").with(Locale::Zh, "");
        assert_eq!(name.resolve(Locale::Zh), "Healthy Meals");
    }

    #[test]
    fn test_deserialize_from_json_map() {
        let json = r#"{"en": "Drink Pairings", "ko": "음료 페어링", "zh": "饮品搭配"}"#;
        let name: LocalizedString = serde_json::from_str(json).unwrap();
        assert_eq!(name.resolve(Locale::Ko), "음료 페어링");
        assert_eq!(name.resolve(Locale::Ja), "Drink Pairings");
    }
}
