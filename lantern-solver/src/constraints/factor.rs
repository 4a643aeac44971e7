use std::rc::Rc;

use crate::engine::variables::VariableId;

/// A relation over an ordered tuple of variables: a boolean predicate over their current values.
///
/// Arity 1 is a unary factor, arity 2 a binary factor, and anything larger a global factor.
/// Factors are evaluated under the open-world reading: a unary or binary factor is never
/// considered violated while one of its variables is unassigned, while a global factor evaluates
/// its predicate eagerly over the partial assignment (predicates such as all-different are
/// written to ignore unassigned slots).
///
/// The predicate is shared behind an [`Rc`]: it is immutable, so the copy-on-branch clone of a
/// problem shares it rather than duplicating it.
#[derive(Clone)]
pub struct Factor {
    scope: Vec<VariableId>,
    predicate: Rc<dyn Fn(&[Option<i32>]) -> bool>,
}

impl std::fmt::Debug for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Factor").field("scope", &self.scope).finish()
    }
}

impl Factor {
    /// A factor over a single variable.
    pub fn unary(x: VariableId, predicate: impl Fn(i32) -> bool + 'static) -> Self {
        Factor {
            scope: vec![x],
            predicate: Rc::new(move |values| match values[0] {
                Some(a) => predicate(a),
                None => true,
            }),
        }
    }

    /// A factor over an ordered pair of variables.
    pub fn binary(x: VariableId, y: VariableId, predicate: impl Fn(i32, i32) -> bool + 'static) -> Self {
        Factor {
            scope: vec![x, y],
            predicate: Rc::new(move |values| match (values[0], values[1]) {
                (Some(a), Some(b)) => predicate(a, b),
                _ => true,
            }),
        }
    }

    /// A factor over three or more variables whose predicate is invoked directly against the
    /// partial assignment; unassigned variables appear as [`None`].
    pub fn global(
        scope: Vec<VariableId>,
        predicate: impl Fn(&[Option<i32>]) -> bool + 'static,
    ) -> Self {
        Factor {
            scope,
            predicate: Rc::new(predicate),
        }
    }

    /// The ordered tuple of variables this factor ranges over.
    pub fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    pub fn arity(&self) -> usize {
        self.scope.len()
    }

    pub fn is_unary(&self) -> bool {
        self.arity() == 1
    }

    pub fn is_binary(&self) -> bool {
        self.arity() == 2
    }

    /// Whether the factor references the given variable.
    pub fn references(&self, variable: VariableId) -> bool {
        self.scope.contains(&variable)
    }

    /// Evaluate the factor against the values reported by `value_of` for its scope.
    ///
    /// This is the open-world evaluation described on the type: a unary or binary factor with an
    /// unassigned variable reports satisfied without consulting the predicate.
    pub fn is_satisfied_given(&self, value_of: impl Fn(VariableId) -> Option<i32>) -> bool {
        let values: Vec<Option<i32>> = self.scope.iter().map(|&variable| value_of(variable)).collect();
        if self.arity() <= 2 && values.iter().any(Option::is_none) {
            return true;
        }
        (self.predicate)(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unary_and_binary_factors_are_open_world() {
        let x = VariableId::new(0);
        let y = VariableId::new(1);

        let unary = Factor::unary(x, |value| value > 0);
        assert!(unary.is_satisfied_given(|_| None));
        assert!(unary.is_satisfied_given(|_| Some(1)));
        assert!(!unary.is_satisfied_given(|_| Some(-1)));

        let binary = Factor::binary(x, y, |a, b| a != b);
        assert!(binary.is_satisfied_given(|_| None));
        assert!(binary.is_satisfied_given(|variable| (variable == x).then_some(3)));
        assert!(!binary.is_satisfied_given(|_| Some(3)));
    }

    #[test]
    fn global_factors_evaluate_eagerly_over_partial_assignments() {
        let scope: Vec<_> = (0..3).map(VariableId::new).collect();
        let all_different = Factor::global(scope.clone(), |values| {
            let assigned: Vec<i32> = values.iter().flatten().copied().collect();
            let mut deduplicated = assigned.clone();
            deduplicated.sort_unstable();
            deduplicated.dedup();
            deduplicated.len() == assigned.len()
        });

        // Two of three variables assigned: the predicate already runs.
        assert!(!all_different
            .is_satisfied_given(|variable| (variable.id < 2).then_some(5)));
        assert!(all_different
            .is_satisfied_given(|variable| (variable.id < 2).then_some(variable.id as i32)));
    }

    #[test]
    fn scope_order_is_preserved() {
        let x = VariableId::new(4);
        let y = VariableId::new(2);
        let factor = Factor::binary(x, y, |a, b| a < b);
        assert_eq!(factor.scope(), &[x, y]);
    }
}
