#[cfg(doc)]
use crate::engine::BacktrackingSolver;

/// Configuration of the [`BacktrackingSolver`].
#[derive(Debug, Clone, Copy)]
pub struct SolverOptions {
    /// Whether an arc-consistency propagation pass is run (on the branch's own copy of the
    /// problem) after every consistent trial assignment.
    pub arc_consistency: bool,
    /// Whether a node-consistency pass prunes unary-factor violations from the domains before
    /// the search starts.
    pub node_consistency: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            arc_consistency: true,
            node_consistency: true,
        }
    }
}
