//! This module contains the adapter logic and the individual implementations of the adapters with
//! different responsibilities.
//!
//! Adapters are the collaborators that linguist resolves translations with: the store adapter
//! queries persisted translation records and the locale adapter reports the locale of the running
//! request as well as the configured default locale.

pub mod error;
pub mod locale;
pub mod store;

// reexport errors types
pub use error::*;

// reexport adapters
pub use locale::fixed::FixedLocaleAdapter;
pub use store::TranslationQuery;
pub use store::disabled::DisabledStoreAdapter;
pub use store::fixed::FixedStoreAdapter;
