#![forbid(unsafe_code)]

//! Locale identifiers and their command-line selection.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A locale identifier: a language tag with an optional region.
///
/// Tags are normalized on construction: language lowercase, region
/// uppercase, so `"en-us"`, `"EN_US"` and `"en-US"` are the same
/// locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

/// A locale string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleParseError {
    /// The input was empty or whitespace.
    #[error("empty locale tag")]
    Empty,
    /// More than a language and a region were supplied.
    #[error("malformed locale tag {tag:?}: expected LANGUAGE or LANGUAGE-REGION")]
    Malformed { tag: String },
}

impl Locale {
    /// A language-only locale.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            region: None,
        }
    }

    /// A language + region locale.
    pub fn with_region(language: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            region: Some(region.into().to_uppercase()),
        }
    }

    /// The default locale used when the caller selects nothing.
    pub fn default_locale() -> Self {
        Self::new("en")
    }

    /// Select a locale from positional command-line arguments.
    ///
    /// The first argument is the language, the second (when present)
    /// the region; further arguments are ignored. Returns `None` when
    /// no arguments were given, leaving the default-locale decision to
    /// the caller.
    pub fn from_args(args: &[String]) -> Option<Self> {
        match args {
            [] => None,
            [language] => Some(Self::new(language.as_str())),
            [language, region, ..] => Some(Self::with_region(language.as_str(), region.as_str())),
        }
    }

    /// Language subtag, lowercase.
    #[inline]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Region subtag, uppercase, if any.
    #[inline]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Full tag: `en` or `en-US`.
    pub fn tag(&self) -> String {
        match &self.region {
            Some(region) => format!("{}-{}", self.language, region),
            None => self.language.clone(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    /// Parse `en`, `en-US`, or the underscore spelling `en_US`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LocaleParseError::Empty);
        }
        let mut parts = trimmed.split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        let region = parts.next();
        if language.is_empty() || region.is_some_and(str::is_empty) || parts.next().is_some() {
            return Err(LocaleParseError::Malformed {
                tag: trimmed.to_string(),
            });
        }
        Ok(match region {
            Some(region) => Self::with_region(language, region),
            None => Self::new(language),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_args_mirrors_positional_selection() {
        assert_eq!(Locale::from_args(&[]), None);
        assert_eq!(
            Locale::from_args(&["pl".to_string()]),
            Some(Locale::new("pl"))
        );
        assert_eq!(
            Locale::from_args(&["en".to_string(), "us".to_string()]),
            Some(Locale::with_region("en", "US"))
        );
        // Extra arguments are ignored, not an error.
        assert_eq!(
            Locale::from_args(&["fr".to_string(), "fr".to_string(), "x".to_string()]),
            Some(Locale::with_region("fr", "FR"))
        );
    }

    #[test]
    fn tags_are_normalized() {
        assert_eq!(Locale::with_region("EN", "us").tag(), "en-US");
        assert_eq!(Locale::new("PL").tag(), "pl");
        assert_eq!(Locale::with_region("en", "us").to_string(), "en-US");
    }

    #[test]
    fn parses_both_separator_spellings() {
        assert_eq!("en-US".parse::<Locale>().unwrap().tag(), "en-US");
        assert_eq!("en_us".parse::<Locale>().unwrap().tag(), "en-US");
        assert_eq!("pl".parse::<Locale>().unwrap().tag(), "pl");
    }

    #[test]
    fn rejects_empty_and_malformed_tags() {
        assert_eq!("".parse::<Locale>().unwrap_err(), LocaleParseError::Empty);
        assert_eq!(
            "  ".parse::<Locale>().unwrap_err(),
            LocaleParseError::Empty
        );
        assert!(matches!(
            "en-US-POSIX".parse::<Locale>().unwrap_err(),
            LocaleParseError::Malformed { .. }
        ));
        assert!(matches!(
            "-US".parse::<Locale>().unwrap_err(),
            LocaleParseError::Malformed { .. }
        ));
    }
}
