use crate::relation::MappingError;

/// The internal error type for all errors related to the resolution of translations.
///
/// Every error aborts the whole resolution call. No item has its current translation assigned if
/// an error is returned.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The translation mapping of an entity type is invalid.
    #[error("invalid translation mapping: {0}")]
    Mapping(#[from] MappingError),

    /// An adapter (e.g., the store) failed. The error is passed through unchanged.
    #[error(transparent)]
    Adapter(#[from] linguist_adapters::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
