#![forbid(unsafe_code)]

//! Key-based string storage with locale fallback.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use thiserror::Error;

use crate::locale::Locale;

/// Well-known message keys used by the demo binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Greeting,
    Farewell,
}

impl MessageKey {
    /// Catalog key string.
    pub const fn as_str(self) -> &'static str {
        match self {
            MessageKey::Greeting => "greeting",
            MessageKey::Farewell => "farewell",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key could not be resolved for a locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no string for key {key:?} in locale {locale:?} (or its fallbacks)")]
pub struct I18nError {
    key: String,
    locale: String,
}

impl I18nError {
    /// The key that failed to resolve.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The locale tag the lookup started from.
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

/// One locale's key → text table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleStrings {
    entries: HashMap<String, String>,
}

impl LocaleStrings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Registry of locale string tables with fallback resolution.
///
/// Lookup walks `lang-REGION` → `lang` → the catalog's default locale.
/// A tag that matches nothing resolves to the empty table rather than
/// panicking, so arbitrary caller input is safe.
#[derive(Debug, Clone)]
pub struct StringCatalog {
    default_tag: String,
    locales: HashMap<String, LocaleStrings>,
}

impl StringCatalog {
    /// An empty catalog with the given default locale tag.
    pub fn new(default_tag: impl Into<String>) -> Self {
        Self {
            default_tag: default_tag.into(),
            locales: HashMap::new(),
        }
    }

    /// The catalog shipped with the demos: `en` (default), `pl`, `fr`.
    pub fn builtin() -> Self {
        let mut catalog = Self::new("en");
        catalog.add_locale(
            "en",
            LocaleStrings::new()
                .with(MessageKey::Greeting.as_str(), "Good morning")
                .with(MessageKey::Farewell.as_str(), "Goodbye"),
        );
        catalog.add_locale(
            "pl",
            LocaleStrings::new()
                .with(MessageKey::Greeting.as_str(), "Dzie\u{144} dobry")
                .with(MessageKey::Farewell.as_str(), "Do widzenia"),
        );
        catalog.add_locale(
            "fr",
            LocaleStrings::new()
                .with(MessageKey::Greeting.as_str(), "Bonjour")
                .with(MessageKey::Farewell.as_str(), "Au revoir"),
        );
        catalog
    }

    /// Register (or replace) the string table for a locale tag.
    pub fn add_locale(&mut self, tag: impl Into<String>, strings: LocaleStrings) {
        self.locales.insert(tag.into(), strings);
    }

    /// The tag lookup falls back to when everything else misses.
    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }

    /// Resolve the string table for a locale tag.
    ///
    /// Never panics: unknown tags fall back to the language subtag,
    /// then the default locale, then the empty table.
    pub fn for_locale(&self, tag: &str) -> &LocaleStrings {
        static EMPTY: OnceLock<LocaleStrings> = OnceLock::new();

        if let Some(strings) = self.locales.get(tag) {
            return strings;
        }
        if let Some(language) = tag.split(['-', '_']).next()
            && let Some(strings) = self.locales.get(language)
        {
            return strings;
        }
        self.locales
            .get(&self.default_tag)
            .unwrap_or_else(|| EMPTY.get_or_init(LocaleStrings::new))
    }

    /// Look up `key` for `locale`, walking the fallback chain.
    pub fn resolve(&self, locale: &Locale, key: MessageKey) -> Result<&str, I18nError> {
        self.for_locale(&locale.tag())
            .get(key.as_str())
            .ok_or_else(|| I18nError {
                key: key.as_str().to_string(),
                locale: locale.tag(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_resolves_greeting_and_farewell() {
        let catalog = StringCatalog::builtin();
        let en = Locale::new("en");
        assert_eq!(catalog.resolve(&en, MessageKey::Greeting).unwrap(), "Good morning");
        assert_eq!(catalog.resolve(&en, MessageKey::Farewell).unwrap(), "Goodbye");

        let pl = Locale::new("pl");
        assert_eq!(
            catalog.resolve(&pl, MessageKey::Greeting).unwrap(),
            "Dzie\u{144} dobry"
        );
    }

    #[test]
    fn region_falls_back_to_language() {
        let catalog = StringCatalog::builtin();
        let fr_ca = Locale::with_region("fr", "CA");
        assert_eq!(catalog.resolve(&fr_ca, MessageKey::Greeting).unwrap(), "Bonjour");
    }

    #[test]
    fn unknown_language_falls_back_to_default() {
        let catalog = StringCatalog::builtin();
        let ja = Locale::new("ja");
        assert_eq!(catalog.resolve(&ja, MessageKey::Greeting).unwrap(), "Good morning");
    }

    #[test]
    fn missing_key_is_an_error() {
        let mut catalog = StringCatalog::new("en");
        catalog.add_locale("en", LocaleStrings::new().with("greeting", "hi"));
        let err = catalog
            .resolve(&Locale::new("en"), MessageKey::Farewell)
            .unwrap_err();
        assert_eq!(err.key(), "farewell");
        assert_eq!(err.locale(), "en");
    }

    #[test]
    fn exact_region_table_wins_over_language() {
        let mut catalog = StringCatalog::builtin();
        catalog.add_locale(
            "en-AU",
            LocaleStrings::new().with(MessageKey::Greeting.as_str(), "G'day"),
        );
        let en_au = Locale::with_region("en", "AU");
        assert_eq!(catalog.resolve(&en_au, MessageKey::Greeting).unwrap(), "G'day");
        // Keys absent from the regional table do not fall through to
        // the language table; the regional table answered the lookup.
        assert!(catalog.resolve(&en_au, MessageKey::Farewell).is_err());
    }

    #[test]
    fn empty_catalog_resolves_to_empty_table() {
        let catalog = StringCatalog::new("en");
        assert!(catalog.for_locale("anything").is_empty());
        assert!(catalog.resolve(&Locale::new("en"), MessageKey::Greeting).is_err());
    }
}
