//! The agent-based search strategies: frontier search (breadth-first / depth-first), informed
//! search (greedy / A*), uniform-cost shortest path, two-player minimax, and stochastic local
//! search (hill climbing / simulated annealing).
//!
//! Every agent follows the same narrow contract with its (external) environment: the
//! environment supplies a percept each step (neighbouring [`Tile`]s, weighted neighbour pairs,
//! a game-state snapshot, or a `(state, neighbours)` pair depending on the strategy) and the
//! agent answers with an [`Action`]. The environment alone interprets the action and mutates
//! world state; the agents never touch it.
//!
//! Failure to find anything to explore is an ordinary outcome of search, reported through
//! [`SearchError`] values such as [`SearchError::FrontierExhausted`], never silently swallowed.
//!
//! [`SearchError`]: crate::basic_types::SearchError
//! [`SearchError::FrontierExhausted`]: crate::basic_types::SearchError::FrontierExhausted

mod action;
mod adversarial;
mod frontier;
mod informed;
mod local;
mod percept;
mod policy;
mod shortest_path;
mod uninformed;

pub use action::Action;
pub use adversarial::Game;
pub use adversarial::MinimaxAgent;
pub use adversarial::Ply;
pub use frontier::Discipline;
pub use frontier::Frontier;
pub use informed::InformedMode;
pub use informed::InformedSearchAgent;
pub use local::HillClimber;
pub use local::SimulatedAnnealing;
pub use percept::Tile;
pub use policy::maximise_utility;
pub use policy::UtilityMaximiser;
pub use shortest_path::ShortestPathAgent;
pub use uninformed::UninformedSearchAgent;
