//! This crate contains the value types and entity roles shared by all linguist crates.
//!
//! A persisted entity takes part in translation resolution through one of two roles: it is either
//! [Translatable] (it owns localized variants) or a [Translation] (it is one localized variant).
//! Entities are identified by their [EntityType] and persisted [Identifier] only, so any
//! persistence layer can take part by implementing [Entity] for its mapped types.

pub mod entity;
pub mod error;
pub mod locale;
pub mod record;
pub mod role;

// reexport error types
pub use error::*;

// reexport model
pub use entity::{Entity, EntityRef, EntityType, Identifier, IdentifierValue};
pub use locale::Locale;
pub use record::{Record, TranslationRecord};
pub use role::{Translatable, Translation, downcast_translation};
