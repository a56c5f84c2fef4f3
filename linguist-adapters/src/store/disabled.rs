use crate::error::{Error, Result};
use crate::store::{StoreAdapter, TranslationQuery};
use linguist_model::Translation;
use std::sync::Arc;
use tracing::trace;

/// A store adapter that refuses every query, for deployments without a translation storage.
#[derive(Debug, Default)]
pub struct DisabledStoreAdapter {}

impl DisabledStoreAdapter {
    pub fn new() -> Self {
        Self {}
    }
}

impl StoreAdapter for DisabledStoreAdapter {
    #[tracing::instrument(skip_all)]
    async fn find(&self, query: &TranslationQuery) -> Result<Vec<Arc<dyn Translation>>> {
        trace!(translation_type = %query.translation_type, "rejecting query on disabled store");
        Err(Error::AdapterUnavailable {
            adapter_type: "disabled_store",
            reason: "the translation store is disabled",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linguist_model::{EntityRef, EntityType};

    #[tokio::test]
    async fn rejects_queries() {
        let store = DisabledStoreAdapter::new();
        let query = TranslationQuery {
            translation_type: EntityType::from_static("ArticleTranslation"),
            translatables: vec![EntityRef::new("Article", 1)],
            locales: vec![],
        };

        let err = store.find(&query).await.unwrap_err();
        assert!(matches!(
            err,
            Error::AdapterUnavailable {
                adapter_type: "disabled_store",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "disabled_store adapter is currently unavailable: the translation store is disabled"
        );
    }
}
