//! The config module defines the application configuration. It is based on [config], a layered
//! configuration system for Rust applications (with strong support for 12-factor applications).
//!
//! # Layers
//!
//! The configuration consists of multiple layers. Upper layers overwrite lower layer configurations
//! (e.g. environment variables overwrite the default configuration).
//!
//! ## Layer 1 (Environment variables) \[optional\]
//!
//! The environment variables are the top most layer. They can be used to overwrite any previous
//! configuration. Environment variables have the format `[ENV_PREFIX]__[field]__[sub_field]` where
//! `ENV_PREFIX` is an environment variable defaulting to `LINGUIST`. That means, the nested config
//! field `locale.fixed.current` can be overwritten by the environment variable
//! `LINGUIST__LOCALE__FIXED__CURRENT`.
//!
//! ## Layer 2 (Custom configuration) \[optional\]
//!
//! The next layer is an optional configuration file intended to be used by deployments and local
//! testing. The file location can be configured using the `CONFIG_FILE` environment variable,
//! defaulting to `config/config`. It can be of any file type supported by [config] (e.g.
//! `config/config.toml`).
//!
//! ## Layer 3 (Default configuration)
//!
//! The default configuration provides default value for all config fields. It is loaded from
//! `config/default.toml` at compile time.
//!
//! # Usage
//!
//! The application configuration can be created by using [Config::new]. This loads/overrides the
//! configuration fields layer-by-layer.
//!
//! ```rs
//! let config: Config = Config::new()?;
//! ```

use config::{ConfigError, Environment, File, FileFormat};
use linguist_model::TranslationRecord;
use serde::Deserialize;
use std::env;

/// The default configuration, embedded at compile time.
const DEFAULT_CONFIG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/config/default.toml"
));

/// [Relations] hold the entity types that take part in translation resolution.
///
/// Every translatable `Foo` needs a translation `FooTranslation` and vice versa. The pairing is
/// validated on startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Relations {
    /// The names of the translatable types.
    #[serde(default)]
    pub translatables: Vec<String>,

    /// The names of the translation types.
    #[serde(default)]
    pub translations: Vec<String>,

    /// The names of persisted types that take no part in translation resolution.
    #[serde(default)]
    pub plain: Vec<String>,
}

/// [Locale] hold the locale adapter configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Locale {
    /// Adapter to retrieve the locales.
    pub adapter: String,

    /// The config for the fixed locales.
    pub fixed: Option<FixedLocale>,
}

/// [FixedLocale] hold the locales that are reported for every request.
#[derive(Debug, Clone, Deserialize)]
pub struct FixedLocale {
    /// The locale of the running request.
    pub current: String,

    /// The locale to fall back to.
    pub default: String,
}

/// [Store] hold the translation store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Store {
    /// Adapter to retrieve the translations.
    pub adapter: String,

    /// The config for the fixed translations.
    pub fixed: Option<FixedStore>,
}

/// [FixedStore] hold the translation records that are served from memory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixedStore {
    #[serde(default)]
    pub translations: Vec<TranslationRecord>,
}

/// [Config] holds all configuration for the application. I.g. one immutable instance is created
/// on startup and then used to build the translation repository.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// The registered entity types.
    #[serde(default)]
    pub relations: Relations,

    /// The locale adapter configuration.
    pub locale: Locale,

    /// The translation store configuration.
    pub store: Store,
}

impl Config {
    /// Creates a new application configuration as described in the [module documentation](crate::config).
    pub fn new() -> Result<Self, ConfigError> {
        // the environment prefix for all `Config` fields
        let env_prefix = env::var("ENV_PREFIX").unwrap_or("linguist".into());
        // the path of the custom configuration file
        let config_file = env::var("CONFIG_FILE").unwrap_or("config/config".into());

        let s = config::Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::with_name(&config_file).required(false))
            // e.g. `LINGUIST__LOCALE__FIXED__CURRENT=fr-FR` would set the current locale
            .add_source(Environment::with_prefix(&env_prefix).separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Creates a configuration from the defaults and a TOML document on top of them.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        let s = config::Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .expect("expected default configuration to be available");

        s.try_deserialize()
            .expect("expected default configuration to be deserializable")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linguist_model::Translation;

    #[test]
    fn default_configuration() {
        let config = Config::default();
        assert_eq!(config.locale.adapter, "fixed");
        let fixed = config.locale.fixed.unwrap();
        assert_eq!(fixed.current, "en-US");
        assert_eq!(fixed.default, "en-US");
        assert_eq!(config.store.adapter, "fixed");
        assert!(config.relations.translatables.is_empty());
    }

    #[test]
    fn override_with_toml() {
        let config = Config::from_toml(
            r#"
            [relations]
            translatables = ["Article"]
            translations = ["ArticleTranslation"]

            [locale.fixed]
            current = "fr-FR"
            default = "en-US"

            [[store.fixed.translations]]
            type = "ArticleTranslation"
            id = 1
            translatable = { type = "Article", id = 1 }
            locale = "fr-fr"
            fields = { title = "Bonjour" }
            "#,
        )
        .unwrap();

        assert_eq!(config.relations.translatables, vec!["Article"]);
        assert_eq!(config.locale.fixed.unwrap().current, "fr-FR");
        let translations = config.store.fixed.unwrap().translations;
        assert_eq!(translations.len(), 1);
        assert_eq!(translations[0].field("title"), Some("Bonjour"));
        assert_eq!(translations[0].locale().full(), "fr-FR");
    }
}
