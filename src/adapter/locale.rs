use crate::config;
use linguist_adapters::FixedLocaleAdapter;
use linguist_adapters::locale::LocaleAdapter;
use linguist_model::Locale;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum DynLocaleAdapter {
    Fixed(FixedLocaleAdapter),
}

impl Display for DynLocaleAdapter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(_) => write!(f, "fixed"),
        }
    }
}

impl LocaleAdapter for DynLocaleAdapter {
    async fn current_locale(&self) -> linguist_adapters::Result<Locale> {
        match self {
            DynLocaleAdapter::Fixed(adapter) => adapter.current_locale().await,
        }
    }

    async fn default_locale(&self) -> linguist_adapters::Result<Locale> {
        match self {
            DynLocaleAdapter::Fixed(adapter) => adapter.default_locale().await,
        }
    }
}

impl DynLocaleAdapter {
    pub async fn from_config(config: config::Locale) -> Result<Self, Box<dyn std::error::Error>> {
        match config.adapter.as_str() {
            "fixed" => {
                let Some(config) = config.fixed else {
                    return Err("fixed locale adapter requires a configuration".into());
                };
                let adapter = FixedLocaleAdapter::from_raw(&config.current, &config.default)?;
                Ok(DynLocaleAdapter::Fixed(adapter))
            }
            _ => Err("unknown locale adapter configured".into()),
        }
    }
}
