//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and never change once built. Targeting
/// metadata, placements and presentation contexts are value objects: to
/// "modify" one, build a copy with the new values.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Targeting {
///     revision: i32,
///     rule_id: String,
/// }
///
/// impl ValueObject for Targeting {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
