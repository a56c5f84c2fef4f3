#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod adapter;
pub mod config;

use crate::adapter::locale::DynLocaleAdapter;
use crate::adapter::store::DynStoreAdapter;
use crate::config::Config;
use linguist_resolver::{RelationRegistry, Role, TranslationRepository};
use tracing::{debug, info};

/// The translation repository with the adapters selected by the configuration.
pub type Repository = TranslationRepository<DynStoreAdapter, DynLocaleAdapter>;

/// Builds the relation registry from the configured entity types.
pub fn relations(config: &config::Relations) -> RelationRegistry {
    let mut relations = RelationRegistry::new();
    for (names, role) in [
        (&config.translatables, Role::Translatable),
        (&config.translations, Role::Translation),
        (&config.plain, Role::Plain),
    ] {
        for name in names {
            relations.register(name.clone(), role);
        }
    }
    relations
}

/// Initializes the adapters and the relation registry and creates the translation repository.
///
/// The pairing of translatable and translation types is validated before the repository is
/// returned, so a broken mapping fails on startup instead of on the first resolution.
///
/// # Errors
///
/// Will return an appropriate error if an adapter cannot be initialized from its configuration or
/// if any registered type has no valid counterpart.
pub async fn build(config: Config) -> Result<Repository, Box<dyn std::error::Error>> {
    debug!("building relations");
    let relations = relations(&config.relations);
    relations.validate()?;

    debug!("building adapters");
    let store = DynStoreAdapter::from_config(config.store).await?;
    let locales = DynLocaleAdapter::from_config(config.locale).await?;
    info!(store = %store, locales = %locales, "built adapters");

    Ok(TranslationRepository::new(store, locales, relations))
}
