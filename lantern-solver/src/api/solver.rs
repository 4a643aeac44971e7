use super::outputs::SatisfactionResult;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::DomainViolation;
use crate::branching::variable_selection::InputOrder;
use crate::branching::VariableSelector;
use crate::constraints::Constraint;
use crate::constraints::Factor;
use crate::engine::csp::FactorId;
use crate::engine::variables::VariableId;
use crate::engine::BacktrackingSolver;
use crate::engine::Csp;
use crate::options::SolverOptions;
use crate::statistics::log_statistic_postfix;

/// The main interaction point which allows the creation of variables, the addition of
/// constraints, and solving problems.
///
/// # Creating Variables
/// Variables are integer-valued with a finite domain, created either from bounds or from an
/// explicit list of values.
///
/// ```rust
/// # use lantern_solver::Solver;
/// let mut solver = Solver::default();
///
/// // We can create an integer variable with a domain in the range [0, 10]
/// let integer_between_bounds = solver.new_bounded_integer(0, 10);
///
/// // We can also create such a variable with a name
/// let named_integer_between_bounds = solver.new_named_bounded_integer(0, 10, "x");
///
/// // We can also create an integer variable with a non-continuous domain in the following way
/// let sparse_integer = solver.new_sparse_integer(vec![0, 3, 5]);
///
/// // We can also create such a variable with a name
/// let named_sparse_integer = solver.new_named_sparse_integer(vec![0, 3, 5], "y");
/// ```
///
/// # Using the Solver
/// For examples on how to use the solver, see the [root-level crate documentation](crate).
#[derive(Debug, Default)]
pub struct Solver {
    /// The problem under construction.
    csp: Csp,
    /// The internal [`BacktrackingSolver`] which is used to solve the problems.
    backtracking_solver: BacktrackingSolver,
}

impl Solver {
    /// Creates a solver with the provided [`SolverOptions`].
    pub fn with_options(solver_options: SolverOptions) -> Self {
        Solver {
            csp: Csp::new(),
            backtracking_solver: BacktrackingSolver::with_options(solver_options),
        }
    }

    /// Logs the statistics currently present in the solver.
    pub fn log_statistics(&self) {
        self.backtracking_solver.statistics().log();
        log_statistic_postfix();
    }
}

/// Functions to create and retrieve information about variables.
impl Solver {
    /// Create a new integer variable with the given bounds.
    ///
    /// # Example
    /// ```rust
    /// # use lantern_solver::Solver;
    /// let mut solver = Solver::default();
    ///
    /// // We can create an integer variable with a domain in the range [0, 10]
    /// let integer_between_bounds = solver.new_bounded_integer(0, 10);
    /// ```
    pub fn new_bounded_integer(&mut self, lower_bound: i32, upper_bound: i32) -> VariableId {
        self.csp
            .new_variable((lower_bound..=upper_bound).collect(), None)
    }

    /// Create a new named integer variable with the given bounds.
    pub fn new_named_bounded_integer(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: impl Into<String>,
    ) -> VariableId {
        self.csp
            .new_variable((lower_bound..=upper_bound).collect(), Some(name.into()))
    }

    /// Create a new integer variable which has a domain of predefined values.
    pub fn new_sparse_integer(&mut self, values: impl Into<Vec<i32>>) -> VariableId {
        self.csp.new_variable(values.into(), None)
    }

    /// Create a new named integer variable which has a domain of predefined values.
    pub fn new_named_sparse_integer(
        &mut self,
        values: impl Into<Vec<i32>>,
        name: impl Into<String>,
    ) -> VariableId {
        self.csp.new_variable(values.into(), Some(name.into()))
    }

    /// Seed the variable with a value before solving, e.g. a given cell of a puzzle.
    ///
    /// Fails with [`DomainViolation`] when the value is outside the variable's domain.
    pub fn assign(&mut self, variable: VariableId, value: i32) -> Result<(), DomainViolation> {
        self.csp.assign(variable, value)
    }

    /// Get the current domain of the given variable.
    pub fn domain(&self, variable: VariableId) -> &[i32] {
        self.csp.domain(variable)
    }

    /// Get the display name of the given variable.
    pub fn variable_name(&self, variable: VariableId) -> String {
        self.csp.name(variable)
    }

    /// The problem as constructed so far.
    pub fn problem(&self) -> &Csp {
        &self.csp
    }
}

/// Functions for adding constraints and solving.
impl Solver {
    /// Add a constraint to the solver.
    ///
    /// # Example
    /// ```
    /// # use lantern_solver::Solver;
    /// # use lantern_solver::constraints;
    /// let mut solver = Solver::default();
    ///
    /// let x = solver.new_bounded_integer(1, 3);
    /// let y = solver.new_bounded_integer(1, 3);
    ///
    /// solver
    ///     .add_constraint(constraints::binary_not_equals(x, y))
    ///     .expect("the constraint is well-formed");
    /// ```
    pub fn add_constraint(
        &mut self,
        constraint: impl Constraint,
    ) -> Result<(), ConstraintOperationError> {
        constraint.post(self)
    }

    pub(crate) fn add_factor(
        &mut self,
        factor: Factor,
    ) -> Result<FactorId, ConstraintOperationError> {
        self.csp.add_factor(factor)
    }

    /// The default selector: assign variables in creation order.
    pub fn default_selector(&self) -> InputOrder<VariableId> {
        InputOrder::new(&self.csp.variables().collect::<Vec<_>>())
    }

    /// Search for a complete, consistent assignment of the constructed problem.
    ///
    /// The search operates on a working copy of the problem, so the solver can be re-satisfied
    /// (e.g. with a different selector) afterwards; seeded assignments are part of the problem
    /// and are honoured by every solve.
    pub fn satisfy(
        &mut self,
        selector: &mut impl VariableSelector<VariableId>,
    ) -> SatisfactionResult {
        let mut working = self.csp.clone();
        match self.backtracking_solver.solve(&mut working, selector) {
            Some(solution) => SatisfactionResult::Satisfiable(solution),
            None => SatisfactionResult::Unsatisfiable,
        }
    }
}
