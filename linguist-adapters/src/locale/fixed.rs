use crate::error::{Error, Result};
use crate::locale::LocaleAdapter;
use linguist_model::Locale;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct FixedLocaleAdapter {
    current: Locale,
    default: Locale,
}

impl FixedLocaleAdapter {
    pub fn new(current: Locale, default: Locale) -> Self {
        Self { current, default }
    }

    /// Creates the adapter from raw locale strings (e.g., from the configuration).
    pub fn from_raw(current: &str, default: &str) -> Result<Self> {
        let parse = |raw: &str| {
            Locale::new(raw).map_err(|err| Error::FailedInitialization {
                adapter_type: "fixed_locale",
                cause: Box::new(err),
            })
        };
        Ok(Self::new(parse(current)?, parse(default)?))
    }
}

impl LocaleAdapter for FixedLocaleAdapter {
    #[tracing::instrument(skip_all)]
    async fn current_locale(&self) -> Result<Locale> {
        trace!(locale = %self.current, "passing fixed current locale");
        Ok(self.current.clone())
    }

    #[tracing::instrument(skip_all)]
    async fn default_locale(&self) -> Result<Locale> {
        trace!(locale = %self.default, "passing fixed default locale");
        Ok(self.default.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_normalized_locales() {
        let adapter = FixedLocaleAdapter::from_raw("fr-fr", " EN-us ").unwrap();
        assert_eq!(adapter.current_locale().await.unwrap().full(), "fr-FR");
        assert_eq!(adapter.default_locale().await.unwrap().full(), "en-US");
    }

    #[test]
    fn rejects_empty_locale() {
        let err = FixedLocaleAdapter::from_raw("", "en").unwrap_err();
        assert!(matches!(
            err,
            Error::FailedInitialization {
                adapter_type: "fixed_locale",
                ..
            }
        ));
    }
}
