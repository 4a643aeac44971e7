use thiserror::Error;

/// Error raised when a variable is assigned a value outside of its declared domain.
///
/// Always fatal to the assignment attempt that raised it; callers recover by undoing the
/// attempt and trying another value. Assigning the "unassigned" marker never raises it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{variable}: {value} not in domain {domain:?}")]
pub struct DomainViolation {
    /// Display name of the offending variable.
    pub variable: String,
    /// The value which was attempted to be assigned.
    pub value: i32,
    /// The domain of the variable at the time of the attempt.
    pub domain: Vec<i32>,
}
