use crate::statistics::log_statistic;

/// Structure responsible for storing several statistics of the solving process of the
/// [`BacktrackingSolver`].
///
/// [`BacktrackingSolver`]: crate::engine::BacktrackingSolver
#[derive(Debug, Default, Clone, Copy)]
pub struct SolverStatistics {
    /// The number of value trials performed by the solver
    pub num_decisions: u64,
    /// The number of times the solver has exhausted a variable's values and backtracked
    pub num_backtracks: u64,
    /// The number of arc-consistency propagation passes performed by the solver
    pub num_propagations: u64,
    /// The number of factor satisfaction checks performed by the solver
    pub num_factor_checks: u64,
}

impl SolverStatistics {
    /// Logs all statistics in this block using [`log_statistic`].
    pub fn log(&self) {
        log_statistic("num_decisions", self.num_decisions);
        log_statistic("num_backtracks", self.num_backtracks);
        log_statistic("num_propagations", self.num_propagations);
        log_statistic("num_factor_checks", self.num_factor_checks);
    }
}
