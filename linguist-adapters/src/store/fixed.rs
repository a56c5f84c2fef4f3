use crate::error::Result;
use crate::store::{StoreAdapter, TranslationQuery};
use linguist_model::Translation;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::trace;

/// A store adapter that serves a fixed set of translation records from memory.
#[derive(Debug, Default)]
pub struct FixedStoreAdapter {
    translations: Vec<Arc<dyn Translation>>,
    queries: AtomicUsize,
}

impl FixedStoreAdapter {
    pub fn new(translations: Vec<Arc<dyn Translation>>) -> Self {
        Self {
            translations,
            queries: AtomicUsize::new(0),
        }
    }

    /// The number of queries that were executed against this store.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }
}

impl StoreAdapter for FixedStoreAdapter {
    #[tracing::instrument(skip_all)]
    async fn find(&self, query: &TranslationQuery) -> Result<Vec<Arc<dyn Translation>>> {
        self.queries.fetch_add(1, Ordering::Relaxed);
        let found: Vec<Arc<dyn Translation>> = self
            .translations
            .iter()
            .filter(|translation| query.matches(translation.as_ref()))
            .cloned()
            .collect();
        trace!(
            translation_type = %query.translation_type,
            len = self.translations.len(),
            found = found.len(),
            "passing fixed translations"
        );
        Ok(found)
    }
}
