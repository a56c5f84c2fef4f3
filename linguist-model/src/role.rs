use crate::entity::{Entity, EntityRef};
use crate::locale::Locale;
use std::any::Any;
use std::sync::Arc;

/// A persisted entity that owns localized variants of itself.
///
/// The current translation is a transient slot that holds the translation that was resolved for
/// the running request. It is not persisted and is recomputed on every resolution.
pub trait Translatable: Entity {
    fn current_translation(&self) -> Option<&(dyn Translation + 'static)>;

    fn set_current_translation(&mut self, translation: Option<Arc<dyn Translation>>);
}

/// A persisted entity that is one localized variant of a [Translatable].
pub trait Translation: Entity {
    /// The owning translatable. Orphaned translations have no owner.
    fn translatable(&self) -> Option<&EntityRef>;

    fn locale(&self) -> &Locale;
}

/// Gets typed access to a resolved translation, if it is of type `T`.
pub fn downcast_translation<'a, T: Translation>(
    translation: &'a (dyn Translation + 'static),
) -> Option<&'a T> {
    let any: &dyn Any = translation;
    any.downcast_ref::<T>()
}
