mod constraint_operation_error;
mod domain_violation;
mod random;
mod search_error;
mod solution;

pub use constraint_operation_error::ConstraintOperationError;
pub use domain_violation::DomainViolation;
pub use random::Random;
pub use search_error::SearchError;
pub use solution::*;

#[cfg(test)]
pub(crate) use random::tests;
