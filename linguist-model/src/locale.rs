use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The separator between the language and the region of a locale string.
const SEPARATOR: char = '-';

/// A normalized locale consisting of a language and an optional region.
///
/// Locales are created from raw strings (user input, persisted column values or configuration) and
/// normalized on construction: the language is lowercased, the region is uppercased and the
/// canonical form is `language[-REGION]`. Two locales are equal if their canonical forms are equal.
///
/// Locales are (de)serialized as their canonical string. Deserializing an empty string or any
/// non-string value fails, while `null` maps to `None` for optional locales.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    region: String,
    full: String,
}

impl Locale {
    /// Creates a new locale from a raw locale string like `en-us` or ` de `.
    ///
    /// # Errors
    ///
    /// Will return [Error::InvalidInput] if the trimmed input is empty.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput {
                value_type: "locale",
                reason: "locale can't be an empty string",
            });
        }

        // only the first two segments are kept, further subtags are dropped
        let mut parts = trimmed.split(SEPARATOR);
        let language = parts.next().unwrap_or_default().trim().to_lowercase();
        let region = parts.next().unwrap_or_default().trim().to_uppercase();
        let full = if region.is_empty() {
            language.clone()
        } else {
            format!("{language}{SEPARATOR}{region}")
        };

        Ok(Self {
            language,
            region,
            full,
        })
    }

    /// The lowercase language code, e.g. `en`.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The uppercase region code, e.g. `US`. Empty if the locale has no region.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The canonical form, e.g. `en-US`.
    pub fn full(&self) -> &str {
        &self.full
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.full == other.full
    }
}

impl Eq for Locale {}

impl Hash for Locale {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full.hash(state);
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for Locale {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_only() {
        let locale = Locale::new("EN").expect("valid locale");
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.region(), "");
        assert_eq!(locale.full(), "en");
    }

    #[test]
    fn language_and_region() {
        let locale = Locale::new("en-us").expect("valid locale");
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.region(), "US");
        assert_eq!(locale.full(), "en-US");
    }

    #[test]
    fn trims_input() {
        let locale = Locale::new("  en-US  ").expect("valid locale");
        assert_eq!(locale.full(), "en-US");

        let locale = Locale::new(" de - at ").expect("valid locale");
        assert_eq!(locale.full(), "de-AT");
    }

    #[test]
    fn trailing_separator_has_no_region() {
        let locale = Locale::new("fr-").expect("valid locale");
        assert_eq!(locale.region(), "");
        assert_eq!(locale.full(), "fr");
    }

    #[test]
    fn drops_subtags_after_region() {
        let locale = Locale::new("zh-hant-tw").expect("valid locale");
        assert_eq!(locale.language(), "zh");
        assert_eq!(locale.region(), "HANT");
        assert_eq!(locale.full(), "zh-HANT");
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(Locale::new(""), Err(Error::InvalidInput { .. })));
        assert!(matches!(Locale::new("   "), Err(Error::InvalidInput { .. })));
    }

    #[test]
    fn equality_uses_canonical_form() {
        let a = Locale::new("en-us").unwrap();
        let b = Locale::new("EN-US").unwrap();
        let c = Locale::new("en").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_and_parse() {
        let locale: Locale = "pt-br".parse().unwrap();
        assert_eq!(locale.to_string(), "pt-BR");
        assert_eq!(String::from(locale), "pt-BR");
    }

    #[test]
    fn deserialize_from_string() {
        let locale: Locale = serde_json::from_str("\"en-US\"").unwrap();
        assert_eq!(locale.full(), "en-US");
    }

    #[test]
    fn deserialize_null_as_none() {
        let locale: Option<Locale> = serde_json::from_str("null").unwrap();
        assert!(locale.is_none());
    }

    #[test]
    fn deserialize_rejects_non_string() {
        let result: Result<Locale, _> = serde_json::from_str("123456");
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_empty_string() {
        let result: Result<Locale, _> = serde_json::from_str("\"\"");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn serialize_canonical() {
        let locale = Locale::new(" en-us ").unwrap();
        assert_eq!(serde_json::to_string(&locale).unwrap(), "\"en-US\"");
    }
}
