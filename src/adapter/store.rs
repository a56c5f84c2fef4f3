use crate::config;
use linguist_adapters::store::StoreAdapter;
use linguist_adapters::{DisabledStoreAdapter, FixedStoreAdapter, TranslationQuery};
use linguist_model::Translation;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

#[derive(Debug)]
pub enum DynStoreAdapter {
    Fixed(FixedStoreAdapter),
    Disabled(DisabledStoreAdapter),
}

impl Display for DynStoreAdapter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(_) => write!(f, "fixed"),
            Self::Disabled(_) => write!(f, "disabled"),
        }
    }
}

impl StoreAdapter for DynStoreAdapter {
    async fn find(
        &self,
        query: &TranslationQuery,
    ) -> linguist_adapters::Result<Vec<Arc<dyn Translation>>> {
        match self {
            DynStoreAdapter::Fixed(adapter) => adapter.find(query).await,
            DynStoreAdapter::Disabled(adapter) => adapter.find(query).await,
        }
    }
}

impl DynStoreAdapter {
    pub async fn from_config(config: config::Store) -> Result<Self, Box<dyn std::error::Error>> {
        match config.adapter.as_str() {
            "fixed" => {
                let translations = config
                    .fixed
                    .unwrap_or_default()
                    .translations
                    .into_iter()
                    .map(|translation| Arc::new(translation) as Arc<dyn Translation>)
                    .collect();
                Ok(DynStoreAdapter::Fixed(FixedStoreAdapter::new(translations)))
            }
            "disabled" => Ok(DynStoreAdapter::Disabled(DisabledStoreAdapter::new())),
            _ => Err("unknown store adapter configured".into()),
        }
    }
}
