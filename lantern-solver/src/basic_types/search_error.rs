use thiserror::Error;

/// Failures which can be reported by the search agents.
///
/// [`SearchError::FrontierExhausted`] and [`SearchError::Unreachable`] are expected outcomes of
/// search over a problem with no (reachable) solution and must be surfaced to the driving loop
/// rather than swallowed. [`SearchError::EmptyCandidateSet`] is a contract violation by the
/// caller: utility maximisation must never be invoked on a terminal or complete state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier has no more candidates to explore; no solution is reachable.
    #[error("The frontier is exhausted, no solution is reachable")]
    FrontierExhausted,
    /// Utility maximisation was invoked with zero candidates.
    #[error("Cannot maximise utility over an empty candidate set")]
    EmptyCandidateSet,
    /// The shortest-path target is not connected to the origin.
    #[error("The target is not reachable from the origin")]
    Unreachable,
}
