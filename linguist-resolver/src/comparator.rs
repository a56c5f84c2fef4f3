use linguist_model::Entity;

/// Compares entities by instance and by persisted identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityComparator;

impl EntityComparator {
    /// Checks whether two entities denote the same persisted record.
    ///
    /// The same instance is always equal to itself. Other instances are equal if they have the same
    /// entity type and the same identifier values. Entities of different types are never equal, even
    /// if their identifier values are.
    pub fn is_equal(&self, a: &dyn Entity, b: &dyn Entity) -> bool {
        if std::ptr::addr_eq(a, b) {
            return true;
        }
        if a.entity_type() != b.entity_type() {
            return false;
        }
        a.identifier() == b.identifier()
    }
}
