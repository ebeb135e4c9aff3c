//! Aggregate root trait for stateful domain models.

/// Aggregate root marker + minimal interface.
///
/// An aggregate owns every entity inside its consistency boundary; outside code
/// only mutates them through the aggregate's operations.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Bumped once per state-changing operation.
    fn version(&self) -> u64;
}
