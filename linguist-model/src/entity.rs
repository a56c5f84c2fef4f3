use serde::{Deserialize, Serialize};
use std::any::Any;
use std::borrow::{Borrow, Cow};
use std::fmt::{Debug, Display, Formatter};
use uuid::Uuid;

/// The stable identifier of a persisted entity type, e.g. `Article`.
///
/// Entity types are the keys of the relation registry. Translation types are derived from their
/// translatable type by appending a fixed suffix to this name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityType(Cow<'static, str>);

impl EntityType {
    /// Creates an entity type from a static name. Usable in `const` context.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for EntityType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for EntityType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for EntityType {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl From<String> for EntityType {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// A single value of a persisted identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdentifierValue {
    Int(i64),
    Uuid(Uuid),
    Str(String),
}

impl IdentifierValue {
    /// Infers the value from its textual form. Integers take precedence over UUIDs, anything else
    /// is kept as a string. This is the same precedence that is used for deserialization.
    pub fn infer(raw: &str) -> Self {
        if let Ok(value) = raw.parse::<i64>() {
            return Self::Int(value);
        }
        if let Ok(value) = Uuid::parse_str(raw) {
            return Self::Uuid(value);
        }
        Self::Str(raw.to_string())
    }
}

impl Display for IdentifierValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Uuid(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
        }
    }
}

impl From<i64> for IdentifierValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for IdentifierValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<Uuid> for IdentifierValue {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<String> for IdentifierValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for IdentifierValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// The ordered identifier values of a persisted entity.
///
/// Most entities have a single identifier value, composite keys are represented by multiple values
/// in the order of the mapped identifier fields. In configuration files, a single value may be given
/// without the surrounding list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "IdentifierRepr")]
pub struct Identifier(Vec<IdentifierValue>);

#[derive(Deserialize)]
#[serde(untagged)]
enum IdentifierRepr {
    Single(IdentifierValue),
    Composite(Vec<IdentifierValue>),
}

impl From<IdentifierRepr> for Identifier {
    fn from(value: IdentifierRepr) -> Self {
        match value {
            IdentifierRepr::Single(value) => Self(vec![value]),
            IdentifierRepr::Composite(values) => Self(values),
        }
    }
}

impl Identifier {
    pub fn new(values: Vec<IdentifierValue>) -> Self {
        Self(values)
    }

    pub fn single(value: impl Into<IdentifierValue>) -> Self {
        Self(vec![value.into()])
    }

    pub fn values(&self) -> &[IdentifierValue] {
        &self.0
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Self::single(value)
    }
}

impl From<i32> for Identifier {
    fn from(value: i32) -> Self {
        Self::single(value)
    }
}

impl From<Uuid> for Identifier {
    fn from(value: Uuid) -> Self {
        Self::single(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::single(value)
    }
}

impl From<Vec<IdentifierValue>> for Identifier {
    fn from(value: Vec<IdentifierValue>) -> Self {
        Self(value)
    }
}

/// A persisted entity that is known to the persistence layer.
///
/// This is the identity capability of the persistence mapping: every mapped type reports its stable
/// [EntityType] and the ordered values of its identifier fields. Both are used to compare entities
/// that are not the same instance in memory.
pub trait Entity: Any + Debug + Send + Sync {
    fn entity_type(&self) -> EntityType;

    fn identifier(&self) -> Identifier;
}

/// A reference to a persisted entity by its type and identifier.
///
/// This is the foreign key value that a translation holds for its owning translatable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    /// The type of the referenced entity.
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    /// The identifier of the referenced entity.
    #[serde(rename = "id")]
    pub identifier: Identifier,
}

impl EntityRef {
    pub fn new(entity_type: impl Into<EntityType>, identifier: impl Into<Identifier>) -> Self {
        Self {
            entity_type: entity_type.into(),
            identifier: identifier.into(),
        }
    }

    /// Creates a reference to an existing entity.
    pub fn of(entity: &dyn Entity) -> Self {
        Self {
            entity_type: entity.entity_type(),
            identifier: entity.identifier(),
        }
    }
}

impl Display for EntityRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.identifier)
    }
}

impl Entity for EntityRef {
    fn entity_type(&self) -> EntityType {
        self.entity_type.clone()
    }

    fn identifier(&self) -> Identifier {
        self.identifier.clone()
    }
}
