pub mod disabled;
pub mod fixed;

use crate::error::Result;
use linguist_model::{EntityRef, EntityType, Translation};
use std::fmt::Debug;
use std::sync::Arc;

/// A query for all translation records of one translation type.
///
/// The query selects the records whose owning translatable is one of `translatables`. If `locales`
/// is not empty, only records whose canonical locale string is one of `locales` are selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationQuery {
    /// The type of the translation records to select.
    pub translation_type: EntityType,
    /// The owning translatables (foreign key values) to select records for.
    pub translatables: Vec<EntityRef>,
    /// The canonical locale strings to select records for. Empty means any locale.
    pub locales: Vec<String>,
}

impl TranslationQuery {
    /// Checks whether a translation record is selected by this query.
    pub fn matches(&self, translation: &dyn Translation) -> bool {
        if translation.entity_type() != self.translation_type {
            return false;
        }
        let Some(owner) = translation.translatable() else {
            return false;
        };
        if !self.translatables.contains(owner) {
            return false;
        }
        self.locales.is_empty()
            || self
                .locales
                .iter()
                .any(|locale| locale == translation.locale().full())
    }
}

pub trait StoreAdapter: Debug + Send + Sync {
    /** Selects all translation records that match the query, in storage order. */
    fn find(
        &self,
        query: &TranslationQuery,
    ) -> impl Future<Output = Result<Vec<Arc<dyn Translation>>>> + Send;
}
