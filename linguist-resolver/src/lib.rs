//! This crate resolves the current translation of translatable entities.
//!
//! The [RelationRegistry] pairs every translatable type with its translation type by naming
//! convention, the [EntityComparator] decides whether two entities denote the same persisted
//! record and the [TranslationRepository] queries and assigns the translations in batches.

pub mod comparator;
pub mod error;
mod metrics;
pub mod relation;
pub mod repository;

pub use comparator::EntityComparator;
pub use error::*;
pub use relation::{MappingError, RelationRegistry, Role, TRANSLATION_SUFFIX};
pub use repository::TranslationRepository;
