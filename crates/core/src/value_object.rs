//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two stock alerts for the same product and level are the
//! same alert.

/// Marker trait for value objects.
///
/// - **Value Object**: no identity (equal when all attributes are equal)
/// - **Entity**: has identity (see [`crate::Entity`])
///
/// Value objects are immutable. To "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Threshold(u64);
///
/// impl ValueObject for Threshold {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
