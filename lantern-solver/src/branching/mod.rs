//! Contains structures and traits to define the variable ordering of the backtracking search.
//!
//! In general, it provides:
//! - The [`VariableSelector`] which defines the method required of a variable selector; the main
//!   method of this trait is the [`VariableSelector::select_variable`] method. An example
//!   implementation of this trait is the [`FirstFail`] strategy.
//! - The [`TieBreaker`] which defines how to break ties between variables whose heuristic
//!   values coincide. An example implementation of this trait is the [`InOrderTieBreaker`].
//!
//! A [`VariableSelector`] is expected to be passed to [`Solver::satisfy`].
//!
//! [`FirstFail`]: variable_selection::FirstFail
//! [`TieBreaker`]: tie_breaking::TieBreaker
//! [`InOrderTieBreaker`]: tie_breaking::InOrderTieBreaker
//! [`Solver::satisfy`]: crate::Solver::satisfy

mod selection_context;
pub mod tie_breaking;
pub mod variable_selection;

pub use selection_context::SelectionContext;
pub use variable_selection::VariableSelector;
