pub use crate::basic_types::ProblemSolution;
pub use crate::basic_types::Solution;
pub use crate::basic_types::SolutionReference;

#[cfg(doc)]
use crate::Solver;

/// The result of a call to [`Solver::satisfy`].
///
/// There is no "unknown" outcome: the search has no cancellation or timeout mechanism, so a
/// solve always runs to a solution or to exhaustion of the finite search space.
#[derive(Debug)]
#[allow(clippy::large_enum_variant)]
pub enum SatisfactionResult {
    /// Indicates that a solution was found and provides the corresponding [`Solution`].
    Satisfiable(Solution),
    /// Indicates that there is no solution to the satisfaction problem.
    Unsatisfiable,
}
