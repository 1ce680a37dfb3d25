//! Entity trait: things addressed by a stable identifier.

/// Entity marker + minimal interface.
///
/// Offerings and packages are entities: two offerings with the same
/// identifier are the same offering, and the later one wins when a document
/// lists both.
pub trait Entity {
    /// Identifier type (usually a borrowed `str`).
    type Id: ?Sized + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
