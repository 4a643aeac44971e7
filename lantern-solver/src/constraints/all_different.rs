use itertools::Itertools;

use super::binary_not_equals;
use super::Constraint;
use crate::constraints::Factor;
use crate::engine::variables::VariableId;

/// Creates the [`Constraint`] that enforces that all the given `variables` are distinct.
///
/// The constraint is decomposed into the pairwise clique of [`binary_not_equals`] factors; the
/// decomposition participates in arc-consistency propagation, which only looks at binary
/// factors.
pub fn all_different(variables: impl Into<Vec<VariableId>>) -> impl Constraint {
    let variables: Vec<VariableId> = variables.into();

    variables
        .iter()
        .tuple_combinations::<(_, _)>()
        .map(|(&x, &y)| binary_not_equals(x, y))
        .collect::<Vec<_>>()
}

/// Creates the all-different [`Constraint`] as a single global factor.
///
/// Unlike [`all_different`] this form is evaluated eagerly over partial assignments: it is
/// violated as soon as two assigned variables share a value, and ignores unassigned slots. It
/// contributes no binary factors, so it is invisible to arc-consistency propagation.
pub fn all_different_global(variables: impl Into<Vec<VariableId>>) -> impl Constraint {
    let variables: Vec<VariableId> = variables.into();

    Factor::global(variables, |values| {
        let assigned: Vec<i32> = values.iter().flatten().copied().collect();
        let mut deduplicated = assigned.clone();
        deduplicated.sort_unstable();
        deduplicated.dedup();
        deduplicated.len() == assigned.len()
    })
}
