//! Provides the [`VariableSelector`]s which decide which variable the backtracking search
//! assigns next.
//!
//! - [`InputOrder`]: the first unassigned variable in construction order.
//! - [`FirstFail`]: the unassigned variable with the smallest current domain
//!   (minimum-remaining-values).
//! - [`Occurrence`]: the unassigned variable referenced by the largest number of constraints
//!   (maximum-degree).

mod first_fail;
mod input_order;
mod occurrence;
mod variable_selector;

pub use first_fail::FirstFail;
pub use input_order::InputOrder;
pub use occurrence::Occurrence;
pub use variable_selector::VariableSelector;
