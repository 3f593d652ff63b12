//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Products are identified by SKU and parties by their party id; two entities
/// with the same id are the same thing even if other attributes differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison (as opposed to attribute equality).
    fn is_same_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
