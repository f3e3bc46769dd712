//! Aggregate root trait.

/// Aggregate root marker + minimal interface.
///
/// Aggregates are the only entry point for changing the state they own.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing revision of the aggregate's state.
    ///
    /// Every accepted mutation bumps it by one; rejected ones leave it alone.
    fn version(&self) -> u64;
}
