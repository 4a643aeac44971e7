use thiserror::Error;

#[cfg(doc)]
use crate::Solver;

/// Errors related to adding constraints to the [`Solver`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    /// Error which indicates that a factor was created without any variables in its scope.
    #[error("Adding the constraint failed because its scope is empty")]
    EmptyScope,
    /// Error which indicates that a factor references a variable which does not belong to the
    /// problem it is posted to.
    #[error("Adding the constraint failed because {0} is not a variable of this problem")]
    UnknownVariable(String),
}
