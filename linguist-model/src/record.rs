//! Generic records for entity types that are only known at runtime (e.g. from configuration).

use crate::entity::{Entity, EntityRef, EntityType, Identifier};
use crate::locale::Locale;
use crate::role::{Translatable, Translation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A translatable entity of any registered type.
#[derive(Debug, Clone)]
pub struct Record {
    entity_type: EntityType,
    identifier: Identifier,
    current: Option<Arc<dyn Translation>>,
}

impl Record {
    pub fn new(entity_type: impl Into<EntityType>, identifier: impl Into<Identifier>) -> Self {
        Self {
            entity_type: entity_type.into(),
            identifier: identifier.into(),
            current: None,
        }
    }
}

impl Entity for Record {
    fn entity_type(&self) -> EntityType {
        self.entity_type.clone()
    }

    fn identifier(&self) -> Identifier {
        self.identifier.clone()
    }
}

impl Translatable for Record {
    fn current_translation(&self) -> Option<&(dyn Translation + 'static)> {
        self.current.as_deref()
    }

    fn set_current_translation(&mut self, translation: Option<Arc<dyn Translation>>) {
        self.current = translation;
    }
}

/// A translation entity of any registered type, holding its translated values as plain fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    #[serde(rename = "type")]
    entity_type: EntityType,
    #[serde(rename = "id")]
    identifier: Identifier,
    #[serde(default)]
    translatable: Option<EntityRef>,
    locale: Locale,
    #[serde(default)]
    fields: BTreeMap<String, String>,
}

impl TranslationRecord {
    pub fn new(
        entity_type: impl Into<EntityType>,
        identifier: impl Into<Identifier>,
        locale: Locale,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            identifier: identifier.into(),
            translatable: None,
            locale,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_translatable(mut self, translatable: EntityRef) -> Self {
        self.translatable = Some(translatable);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

impl Entity for TranslationRecord {
    fn entity_type(&self) -> EntityType {
        self.entity_type.clone()
    }

    fn identifier(&self) -> Identifier {
        self.identifier.clone()
    }
}

impl Translation for TranslationRecord {
    fn translatable(&self) -> Option<&EntityRef> {
        self.translatable.as_ref()
    }

    fn locale(&self) -> &Locale {
        &self.locale
    }
}
