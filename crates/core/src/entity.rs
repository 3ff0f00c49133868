//! Identity for persisted domain objects.

/// A domain object that storage addresses by a stable identifier.
///
/// The identifier is derived from, but not equal to, the human-facing name:
/// two entities whose names normalize to the same id are the same record.
pub trait Entity {
    /// Storage identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the storage identifier.
    fn id(&self) -> &Self::Id;

    /// Name as the user typed it.
    fn display_name(&self) -> &str;
}
