//! Contains the [`TieBreaker`]s which are used to determine which variable wins when several
//! variables attain the same heuristic value in a [`VariableSelector`].
//!
//! [`VariableSelector`]: crate::branching::VariableSelector

mod in_order_tie_breaker;

pub use in_order_tie_breaker::InOrderTieBreaker;

/// Whether the tie-breaker should find the variable with the maximum or minimum heuristic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Minimum,
    Maximum,
}

/// The interface for tie-breakers: candidates are fed one-by-one through
/// [`TieBreaker::consider`] and the winner is taken with [`TieBreaker::select`], which also
/// resets the tie-breaker for the next round.
pub trait TieBreaker<Var, Value> {
    /// Consider the next variable with its heuristic value.
    fn consider(&mut self, variable: Var, value: Value);

    /// Select the winning variable among all considered ones; [`None`] when nothing was
    /// considered. Resets the internal state.
    fn select(&mut self) -> Option<Var>;

    /// The [`Direction`] this tie-breaker optimises towards.
    fn get_direction(&self) -> Direction;
}
