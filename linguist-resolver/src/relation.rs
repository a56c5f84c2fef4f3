//! The relation module pairs translatable types with their translation types.
//!
//! The pairing is a naming convention: the translation type of a translatable type `Foo` is named
//! `FooTranslation`. All types have to be registered with their [Role] at startup, so that every
//! lookup can be validated eagerly. A broken pairing is reported as [MappingError] and never
//! resolved silently.

use linguist_model::{Entity, EntityType};
use std::collections::BTreeMap;

/// The suffix that is appended to a translatable type name to get its translation type name.
pub const TRANSLATION_SUFFIX: &str = "Translation";

/// The role that a registered entity type takes in translation resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The type owns localized variants.
    Translatable,
    /// The type is a localized variant.
    Translation,
    /// The type is persisted but takes no part in translation resolution.
    Plain,
}

/// The error type for invalid pairings between translatable and translation types.
///
/// Mapping errors are configuration defects. They are not caused by the persisted data and cannot
/// be recovered from within a resolution call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The type is not registered.
    #[error("type '{0}' doesn't exist")]
    UnknownType(EntityType),

    /// The type is registered, but not as a translatable.
    #[error("type '{0}' is not a translatable")]
    NotTranslatable(EntityType),

    /// The derived translation type is not registered.
    #[error("can't find '{candidate}' for translatable '{translatable}'")]
    MissingTranslation {
        translatable: EntityType,
        candidate: String,
    },

    /// The derived translation type is registered, but not as a translation.
    #[error("'{candidate}' for translatable '{translatable}' must be a translation")]
    NotATranslation {
        translatable: EntityType,
        candidate: EntityType,
    },

    /// The translation type name does not end with the translation suffix.
    #[error("type name '{0}' must end with 'Translation' suffix")]
    MissingSuffix(EntityType),

    /// The derived translatable type is not registered.
    #[error("can't find '{candidate}' for translation '{translation}'")]
    MissingTranslatable {
        translation: EntityType,
        candidate: String,
    },

    /// The derived translatable type is registered, but not as a translatable.
    #[error("'{candidate}' for translation '{translation}' must be a translatable")]
    NotATranslatable {
        translation: EntityType,
        candidate: EntityType,
    },
}

/// The registry of all entity types and their roles.
///
/// The registry is built once at startup and is immutable afterward. It answers whether a type
/// exists, which role it has and which types are paired with each other.
#[derive(Debug, Clone, Default)]
pub struct RelationRegistry {
    types: BTreeMap<EntityType, Role>,
}

impl RelationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entity type with its role. A type that was registered before gets its role
    /// replaced.
    pub fn register(&mut self, entity_type: impl Into<EntityType>, role: Role) {
        self.types.insert(entity_type.into(), role);
    }

    pub fn with_translatable(mut self, entity_type: impl Into<EntityType>) -> Self {
        self.register(entity_type, Role::Translatable);
        self
    }

    pub fn with_translation(mut self, entity_type: impl Into<EntityType>) -> Self {
        self.register(entity_type, Role::Translation);
        self
    }

    pub fn with_plain(mut self, entity_type: impl Into<EntityType>) -> Self {
        self.register(entity_type, Role::Plain);
        self
    }

    /// Gets all registered types of a role, in no particular order.
    pub fn types(&self, role: Role) -> impl Iterator<Item = &EntityType> {
        self.types
            .iter()
            .filter(move |(_, r)| **r == role)
            .map(|(entity_type, _)| entity_type)
    }

    pub fn type_exists(&self, entity_type: &EntityType) -> bool {
        self.types.contains_key(entity_type)
    }

    pub fn is_subtype_of(&self, entity_type: &EntityType, role: Role) -> bool {
        self.types.get(entity_type) == Some(&role)
    }

    pub fn is_translatable_type(&self, entity_type: &EntityType) -> bool {
        self.is_subtype_of(entity_type, Role::Translatable)
    }

    pub fn is_translation_type(&self, entity_type: &EntityType) -> bool {
        self.is_subtype_of(entity_type, Role::Translation)
    }

    pub fn is_translatable_entity(&self, entity: &dyn Entity) -> bool {
        self.is_translatable_type(&entity.entity_type())
    }

    pub fn is_translation_entity(&self, entity: &dyn Entity) -> bool {
        self.is_translation_type(&entity.entity_type())
    }

    /// Gets the translation type that is paired with a translatable type.
    ///
    /// # Errors
    ///
    /// Will return an appropriate [MappingError] if the translatable type is not registered as a
    /// translatable or if the derived translation type is not registered as a translation.
    pub fn translation_type_for(
        &self,
        translatable: &EntityType,
    ) -> Result<EntityType, MappingError> {
        match self.types.get(translatable) {
            None => return Err(MappingError::UnknownType(translatable.clone())),
            Some(Role::Translatable) => {}
            Some(_) => return Err(MappingError::NotTranslatable(translatable.clone())),
        }

        let candidate = format!("{translatable}{TRANSLATION_SUFFIX}");
        let Some((candidate, role)) = self.types.get_key_value(candidate.as_str()) else {
            return Err(MappingError::MissingTranslation {
                translatable: translatable.clone(),
                candidate,
            });
        };
        if *role != Role::Translation {
            return Err(MappingError::NotATranslation {
                translatable: translatable.clone(),
                candidate: candidate.clone(),
            });
        }

        Ok(candidate.clone())
    }

    /// Gets the translation type that is paired with the type of a translatable entity.
    pub fn translation_type_for_entity(
        &self,
        translatable: &dyn Entity,
    ) -> Result<EntityType, MappingError> {
        self.translation_type_for(&translatable.entity_type())
    }

    /// Gets the translatable type that is paired with a translation type.
    ///
    /// # Errors
    ///
    /// Will return an appropriate [MappingError] if the translation type is not registered, its
    /// name is missing the translation suffix or if the derived translatable type is not registered
    /// as a translatable.
    pub fn translatable_type_for(
        &self,
        translation: &EntityType,
    ) -> Result<EntityType, MappingError> {
        if !self.type_exists(translation) {
            return Err(MappingError::UnknownType(translation.clone()));
        }

        let candidate = match translation.name().strip_suffix(TRANSLATION_SUFFIX) {
            Some(candidate) if !candidate.is_empty() => candidate,
            _ => return Err(MappingError::MissingSuffix(translation.clone())),
        };
        let Some((candidate, role)) = self.types.get_key_value(candidate) else {
            return Err(MappingError::MissingTranslatable {
                translation: translation.clone(),
                candidate: candidate.to_string(),
            });
        };
        if *role != Role::Translatable {
            return Err(MappingError::NotATranslatable {
                translation: translation.clone(),
                candidate: candidate.clone(),
            });
        }

        Ok(candidate.clone())
    }

    /// Checks whether a translation entity belongs to the type of a translatable entity.
    pub fn are_related(&self, translatable: &dyn Entity, translation: &dyn Entity) -> bool {
        if !self.is_translatable_entity(translatable) || !self.is_translation_entity(translation) {
            return false;
        }
        self.translation_type_for_entity(translatable)
            .is_ok_and(|related| related == translation.entity_type())
    }

    /// Validates that every registered translatable and translation has a valid counterpart.
    ///
    /// # Errors
    ///
    /// Will return the first [MappingError] that is found. Translatables are checked before
    /// translations, each in the order of their type names.
    pub fn validate(&self) -> Result<(), MappingError> {
        for translatable in self.types(Role::Translatable) {
            self.translation_type_for(translatable)?;
        }
        for translation in self.types(Role::Translation) {
            self.translatable_type_for(translation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linguist_model::{EntityRef, Locale, Record, TranslationRecord};

    const ARTICLE: EntityType = EntityType::from_static("Article");
    const ARTICLE_TRANSLATION: EntityType = EntityType::from_static("ArticleTranslation");

    fn registry() -> RelationRegistry {
        RelationRegistry::new()
            .with_translatable(ARTICLE)
            .with_translation(ARTICLE_TRANSLATION)
            .with_translatable("Page")
            .with_translation("PageTranslation")
            .with_plain("User")
            .with_plain("UserTranslation")
            .with_translation("Orphan")
            .with_translation("GhostTranslation")
            .with_translation("Translation")
    }

    #[test]
    fn classifies_types() {
        let registry = registry();
        assert!(registry.is_translatable_type(&ARTICLE));
        assert!(!registry.is_translation_type(&ARTICLE));
        assert!(registry.is_translation_type(&ARTICLE_TRANSLATION));
        assert!(!registry.is_translatable_type(&EntityType::from_static("User")));
        assert!(!registry.type_exists(&EntityType::from_static("Comment")));
    }

    #[test]
    fn classifies_entities() {
        let registry = registry();
        let article = Record::new(ARTICLE, 1);
        let translation =
            TranslationRecord::new(ARTICLE_TRANSLATION, 1, Locale::new("en").unwrap());

        assert!(registry.is_translatable_entity(&article));
        assert!(!registry.is_translation_entity(&article));
        assert!(registry.is_translation_entity(&translation));
        assert!(!registry.is_translatable_entity(&EntityRef::new("Comment", 1)));
    }

    #[test]
    fn pairs_are_inverse() {
        let registry = registry();
        let translation = registry.translation_type_for(&ARTICLE).unwrap();
        assert_eq!(translation, ARTICLE_TRANSLATION);
        assert_eq!(registry.translatable_type_for(&translation).unwrap(), ARTICLE);
    }

    #[test]
    fn translation_for_unknown_type() {
        let err = registry()
            .translation_type_for(&EntityType::from_static("Comment"))
            .unwrap_err();
        assert_eq!(
            err,
            MappingError::UnknownType(EntityType::from_static("Comment"))
        );
    }

    #[test]
    fn translation_for_non_translatable() {
        let err = registry()
            .translation_type_for(&EntityType::from_static("User"))
            .unwrap_err();
        assert!(matches!(err, MappingError::NotTranslatable(_)));
    }

    #[test]
    fn translation_for_missing_translation_type() {
        let registry = RelationRegistry::new().with_translatable("Comment");
        let err = registry
            .translation_type_for(&EntityType::from_static("Comment"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "can't find 'CommentTranslation' for translatable 'Comment'"
        );
    }

    #[test]
    fn translation_for_wrong_role() {
        let registry = RelationRegistry::new()
            .with_translatable("Comment")
            .with_plain("CommentTranslation");
        let err = registry
            .translation_type_for(&EntityType::from_static("Comment"))
            .unwrap_err();
        assert!(matches!(err, MappingError::NotATranslation { .. }));
    }

    #[test]
    fn translatable_for_unknown_type() {
        let err = registry()
            .translatable_type_for(&EntityType::from_static("CommentTranslation"))
            .unwrap_err();
        assert!(matches!(err, MappingError::UnknownType(_)));
    }

    #[test]
    fn translatable_for_missing_suffix() {
        let registry = registry();
        let err = registry
            .translatable_type_for(&EntityType::from_static("Orphan"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "type name 'Orphan' must end with 'Translation' suffix"
        );

        let err = registry
            .translatable_type_for(&EntityType::from_static("Translation"))
            .unwrap_err();
        assert!(matches!(err, MappingError::MissingSuffix(_)));
    }

    #[test]
    fn translatable_for_missing_translatable_type() {
        let err = registry()
            .translatable_type_for(&EntityType::from_static("GhostTranslation"))
            .unwrap_err();
        assert!(matches!(err, MappingError::MissingTranslatable { .. }));
    }

    #[test]
    fn translatable_for_wrong_role() {
        let registry = RelationRegistry::new()
            .with_plain("Comment")
            .with_translation("CommentTranslation");
        let err = registry
            .translatable_type_for(&EntityType::from_static("CommentTranslation"))
            .unwrap_err();
        assert!(matches!(err, MappingError::NotATranslatable { .. }));
    }

    #[test]
    fn related_entities() {
        let registry = registry();
        let article = Record::new(ARTICLE, 1);
        let page = Record::new("Page", 1);
        let translation =
            TranslationRecord::new(ARTICLE_TRANSLATION, 1, Locale::new("en").unwrap());

        assert!(registry.are_related(&article, &translation));
        assert!(!registry.are_related(&page, &translation));
        assert!(!registry.are_related(&translation, &article));
    }

    #[test]
    fn validate_valid_registry() {
        let registry = RelationRegistry::new()
            .with_translatable(ARTICLE)
            .with_translation(ARTICLE_TRANSLATION)
            .with_plain("User");
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn validate_broken_registry() {
        assert_eq!(
            registry().validate(),
            Err(MappingError::MissingTranslatable {
                translation: EntityType::from_static("GhostTranslation"),
                candidate: "Ghost".to_string(),
            })
        );
    }

    #[test]
    fn validate_reports_first_type_by_name() {
        let registry = RelationRegistry::new()
            .with_translatable("Zebra")
            .with_translatable("Beta")
            .with_translatable("Alpha");

        assert_eq!(
            registry.validate(),
            Err(MappingError::MissingTranslation {
                translatable: EntityType::from_static("Alpha"),
                candidate: "AlphaTranslation".to_string(),
            })
        );
    }
}
