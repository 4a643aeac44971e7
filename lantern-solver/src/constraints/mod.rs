//! Defines the constraints that Lantern provides out of the box which can be added to the
//! [`Solver`].
//!
//! A constraint is a relation over variables. In the solver, constraints are represented by
//! [`Factor`]s, and therefore a constraint can be viewed as a collection of factors.
//!
//! # Example
//! ```
//! # use lantern_solver::constraints;
//! # use lantern_solver::constraints::Constraint;
//! # use lantern_solver::Solver;
//! let mut solver = Solver::default();
//!
//! let a = solver.new_bounded_integer(0, 3);
//! let b = solver.new_bounded_integer(0, 3);
//!
//! solver
//!     .add_constraint(constraints::binary_not_equals(a, b))
//!     .expect("the constraint is well-formed");
//! ```

mod all_different;
mod factor;

pub use all_different::*;
pub use factor::Factor;

use crate::basic_types::ConstraintOperationError;
use crate::engine::variables::VariableId;
use crate::Solver;

/// A [`Constraint`] is a relation over variables. It disqualifies certain partial assignments of
/// making it into a solution of the problem.
///
/// For example, the constraint `a != b` over two variables `a` and `b` rejects any assignment
/// where `a` and `b` coincide.
pub trait Constraint {
    /// Add the [`Constraint`] to the [`Solver`].
    ///
    /// This method returns a [`ConstraintOperationError`] if the constraint is malformed (an
    /// empty scope or a variable which does not belong to the solver).
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError>;
}

impl Constraint for Factor {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        let _ = solver.add_factor(self)?;
        Ok(())
    }
}

impl<C: Constraint> Constraint for Vec<C> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        self.into_iter().try_for_each(|c| c.post(solver))
    }
}

/// Creates the [`Constraint`] `x != y`.
pub fn binary_not_equals(x: VariableId, y: VariableId) -> impl Constraint {
    Factor::binary(x, y, |a, b| a != b)
}

/// Creates the [`Constraint`] `x == value`.
pub fn equals_constant(x: VariableId, value: i32) -> impl Constraint {
    Factor::unary(x, move |a| a == value)
}

/// Creates the [`Constraint`] `x != value`.
pub fn not_equals_constant(x: VariableId, value: i32) -> impl Constraint {
    Factor::unary(x, move |a| a != value)
}

/// Creates a [`Constraint`] from an arbitrary predicate over a single variable.
pub fn unary_predicate(
    x: VariableId,
    predicate: impl Fn(i32) -> bool + 'static,
) -> impl Constraint {
    Factor::unary(x, predicate)
}

/// Creates a [`Constraint`] from an arbitrary predicate over an ordered pair of variables.
pub fn binary_predicate(
    x: VariableId,
    y: VariableId,
    predicate: impl Fn(i32, i32) -> bool + 'static,
) -> impl Constraint {
    Factor::binary(x, y, predicate)
}

/// Creates a [`Constraint`] from an arbitrary predicate over an ordered tuple of variables.
///
/// The predicate is invoked eagerly against the partial assignment; unassigned variables appear
/// as [`None`] and the predicate decides how to treat them (see
/// [`all_different_global`] for an example which ignores them).
pub fn global_predicate(
    scope: impl Into<Vec<VariableId>>,
    predicate: impl Fn(&[Option<i32>]) -> bool + 'static,
) -> impl Constraint {
    Factor::global(scope.into(), predicate)
}
