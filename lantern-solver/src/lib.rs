//! # Lantern
//! Lantern is a small state-space problem solving library used to teach classical AI search and
//! constraint reasoning.
//!
//! Our goal is to keep the solver easy to follow, honest about its contracts, and
//! well-documented. The library is written in pure Rust and follows Rust best practices.
//!
//! It provides two halves behind a common utility/action contract:
//! * A family of search agents: uninformed frontier search (breadth-first / depth-first),
//!   informed search ([greedy / A*][crate::search::InformedSearchAgent]), a
//!   [uniform-cost shortest-path agent][crate::search::ShortestPathAgent], two-player
//!   [minimax][crate::search::MinimaxAgent], and stochastic local search
//!   ([hill climbing][crate::search::HillClimber] /
//!   [simulated annealing][crate::search::SimulatedAnnealing]).
//! * A constraint-satisfaction engine: typed variables with finite domains, n-ary
//!   [factors][crate::constraints::Factor], arc-consistency propagation, and backtracking with
//!   pluggable [variable-ordering heuristics][crate::branching::variable_selection].
//!
//! # Using Lantern
//! The first step to solving a constraint problem is **adding variables**:
//! ```rust
//! # use lantern_solver::Solver;
//! // We create the solver with default options
//! let mut solver = Solver::default();
//!
//! // We create 3 variables
//! let x = solver.new_bounded_integer(1, 3);
//! let y = solver.new_bounded_integer(1, 3);
//! let z = solver.new_bounded_integer(1, 3);
//! ```
//!
//! Then we can **add constraints** supported by the [`Solver`]:
//! ```rust
//! # use lantern_solver::Solver;
//! # use lantern_solver::constraints;
//! # let mut solver = Solver::default();
//! # let x = solver.new_bounded_integer(1, 3);
//! # let y = solver.new_bounded_integer(1, 3);
//! # let z = solver.new_bounded_integer(1, 3);
//! // We create the constraint that x, y and z take pairwise distinct values
//! solver
//!     .add_constraint(constraints::all_different(vec![x, y, z]))
//!     .expect("the constraint is well-formed");
//! ```
//!
//! For finding a solution, a [`branching::VariableSelector`] should be specified, which
//! determines the variable ordering of the backtracking search:
//! ```rust
//! # use lantern_solver::Solver;
//! # let mut solver = Solver::default();
//! // We create a search strategy (in this case, simply the default)
//! let mut selector = solver.default_selector();
//! ```
//!
//! **Finding a solution** to the problem can then be done by using [`Solver::satisfy`]:
//! ```rust
//! # use lantern_solver::Solver;
//! # use lantern_solver::constraints;
//! # use lantern_solver::results::ProblemSolution;
//! # use lantern_solver::results::SatisfactionResult;
//! # let mut solver = Solver::default();
//! # let x = solver.new_bounded_integer(1, 3);
//! # let y = solver.new_bounded_integer(1, 3);
//! # let z = solver.new_bounded_integer(1, 3);
//! # solver
//! #     .add_constraint(constraints::all_different(vec![x, y, z]))
//! #     .expect("the constraint is well-formed");
//! # let mut selector = solver.default_selector();
//! // Then we find a solution to the problem
//! let result = solver.satisfy(&mut selector);
//!
//! if let SatisfactionResult::Satisfiable(solution) = result {
//!     let value_x = solution.get_integer_value(x);
//!     let value_y = solution.get_integer_value(y);
//!     let value_z = solution.get_integer_value(z);
//!
//!     // The constraint should hold for this solution
//!     assert!(value_x != value_y && value_y != value_z && value_x != value_z);
//! } else {
//!     panic!("This problem should have a solution")
//! }
//! ```
//!
//! The search agents live in [`crate::search`]; they are driven by an external environment
//! which feeds them percepts and executes the [`Action`][crate::search::Action]s they emit.

#[doc(hidden)]
pub mod asserts;
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub mod math;

pub mod branching;
pub mod constraints;
pub mod options;
pub mod search;
pub mod statistics;

pub use rand;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use lantern_solver::Solver;`
// vs.
// `use lantern_solver::api::solver::Solver;`
mod api;

pub use crate::api::outputs as results;
pub use crate::api::solver::Solver;

pub use crate::basic_types::ConstraintOperationError;
pub use crate::basic_types::DomainViolation;
pub use crate::basic_types::Random;
pub use crate::basic_types::SearchError;
pub use crate::engine::csp::Arc;
pub use crate::engine::csp::FactorId;
pub use crate::engine::propagation;
pub use crate::engine::variables::VariableId;
pub use crate::engine::BacktrackingSolver;
pub use crate::engine::Csp;
pub use crate::engine::SolverStatistics;
