pub mod fixed;

use crate::error::Result;
use linguist_model::Locale;
use std::fmt::Debug;

pub trait LocaleAdapter: Debug + Send + Sync {
    /** The locale of the running request. */
    fn current_locale(&self) -> impl Future<Output = Result<Locale>> + Send;

    /** The locale to fall back to if no translation exists for the current locale. */
    fn default_locale(&self) -> impl Future<Output = Result<Locale>> + Send;
}
