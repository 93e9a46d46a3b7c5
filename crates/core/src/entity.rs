//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A product keeps its identity while its quantity changes; merges and
/// withdrawals address it through this id.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
