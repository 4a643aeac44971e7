//! Domain-pruning propagation over a [`Csp`].
//!
//! [`arc_consistency`] implements AC-3 over the binary factors of the problem;
//! [`node_consistency`] prunes against unary factors. Both only ever shrink domains, and a
//! domain wipe-out is reported as an ordinary `false` return: an infeasible branch is an
//! expected outcome of search, not an error.

use std::collections::VecDeque;

use log::trace;

use crate::engine::csp::Arc;
use crate::engine::csp::Csp;
use crate::engine::csp::FactorId;
use crate::engine::variables::VariableId;

/// Revise the domain of `arc.a` against `arc.b` under the factor owning the arc.
///
/// A value `v` of `a` survives iff some value `w` of `b` satisfies the factor under the
/// hypothetical assignment `{a = v, b = w}`; unsupported values are removed permanently for
/// this propagation pass. The stored assignments are never touched: the hypothetical pair is
/// evaluated by substitution. An already-assigned `a` is never revised.
///
/// Returns `true` when at least one value was removed.
pub(crate) fn revise(csp: &mut Csp, arc: Arc) -> bool {
    if csp.is_assigned(arc.a) {
        return false;
    }

    // Clone the factor handle (scope + shared predicate) so the domain can be edited while
    // evaluating candidate pairs.
    let factor = csp.factor(arc.factor).clone();
    let mut is_revised = false;

    for value in csp.domain(arc.a).to_vec() {
        let is_supported = csp.domain(arc.b).iter().any(|&support| {
            factor.is_satisfied_given(|variable| {
                if variable == arc.a {
                    Some(value)
                } else if variable == arc.b {
                    Some(support)
                } else {
                    csp.value(variable)
                }
            })
        });

        if !is_supported {
            trace!(
                "revise: removing {value} from {} (no support in {})",
                csp.name(arc.a),
                csp.name(arc.b)
            );
            csp.remove_from_domain(arc.a, value);
            is_revised = true;
        }
    }

    is_revised
}

/// Establish arc-consistency over the binary factors of the problem (AC-3).
///
/// The work-queue starts with every directed arc of the problem and is drained FIFO. A revision
/// which empties a domain aborts the whole propagation with `false`: the assignment branch
/// which triggered it is infeasible. A revision which leaves the domain non-empty re-enqueues
/// every arc `c -> a` contributed by the other binary factors touching `a` (factors which also
/// touch `b` are excluded), since `a`'s domain just changed and its neighbours must be
/// re-checked.
///
/// Returns `true` when the problem is arc-consistent (with possibly smaller domains).
pub fn arc_consistency(csp: &mut Csp) -> bool {
    let mut queue: VecDeque<Arc> = csp.arcs().into();

    while let Some(arc) = queue.pop_front() {
        if !revise(csp, arc) {
            continue;
        }

        if csp.domain(arc.a).is_empty() {
            trace!("ac-3: domain of {} wiped out", csp.name(arc.a));
            return false;
        }

        for factor in csp.factors().collect::<Vec<_>>() {
            if factor == arc.factor {
                continue;
            }
            let scope = csp.factor(factor).scope();
            if scope.len() != 2 || !scope.contains(&arc.a) || scope.contains(&arc.b) {
                continue;
            }
            let c = if scope[0] == arc.a { scope[1] } else { scope[0] };
            queue.push_back(Arc {
                factor,
                a: c,
                b: arc.a,
            });
        }
    }

    true
}

/// Establish node-consistency: remove every domain value which violates a unary factor on its
/// variable. Assigned variables are left untouched.
///
/// Returns `false` when a domain is emptied by the pruning.
pub fn node_consistency(csp: &mut Csp) -> bool {
    for variable in csp.variables().collect::<Vec<_>>() {
        if csp.is_assigned(variable) {
            continue;
        }

        for value in csp.domain(variable).to_vec() {
            let violates = unary_factors_on(csp, variable).any(|factor| {
                !csp.factor(factor)
                    .is_satisfied_given(|_| Some(value))
            });
            if violates {
                trace!(
                    "node consistency: removing {value} from {}",
                    csp.name(variable)
                );
                csp.remove_from_domain(variable, value);
            }
        }

        if csp.domain(variable).is_empty() {
            return false;
        }
    }

    true
}

fn unary_factors_on(csp: &Csp, variable: VariableId) -> impl Iterator<Item = FactorId> + '_ {
    csp.factors_on(variable)
        .filter(move |factor| csp.factor(*factor).is_unary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::Factor;

    #[test]
    fn revise_removes_unsupported_values() {
        let mut csp = Csp::new();
        let x = csp.new_variable(vec![1, 2, 3], Some("x".to_owned()));
        let y = csp.new_variable(vec![2], Some("y".to_owned()));
        let factor = csp
            .add_factor(Factor::binary(x, y, |a, b| a < b))
            .expect("valid factor");

        let revised = revise(&mut csp, Arc { factor, a: x, b: y });
        assert!(revised);
        assert_eq!(csp.domain(x), &[1], "only 1 < 2 has support");
        assert!(!revise(&mut csp, Arc { factor, a: x, b: y }));
    }

    #[test]
    fn revise_skips_assigned_variables() {
        let mut csp = Csp::new();
        let x = csp.new_variable(vec![1, 2], None);
        let y = csp.new_variable(vec![1], None);
        let factor = csp
            .add_factor(Factor::binary(x, y, |a, b| a != b))
            .expect("valid factor");

        csp.assign(x, 1).expect("in domain");
        assert!(!revise(&mut csp, Arc { factor, a: x, b: y }));
        assert_eq!(csp.domain(x), &[1, 2]);
        assert_eq!(csp.value(x), Some(1), "assignment untouched by revision");
    }

    #[test]
    fn arc_consistency_prunes_and_reports_success() {
        // x < y < z over {1, 2, 3} forces x in {1}, y in {2}, z in {3}.
        let mut csp = Csp::new();
        let x = csp.new_variable(vec![1, 2, 3], Some("x".to_owned()));
        let y = csp.new_variable(vec![1, 2, 3], Some("y".to_owned()));
        let z = csp.new_variable(vec![1, 2, 3], Some("z".to_owned()));
        let _ = csp
            .add_factor(Factor::binary(x, y, |a, b| a < b))
            .expect("valid factor");
        let _ = csp
            .add_factor(Factor::binary(y, z, |a, b| a < b))
            .expect("valid factor");

        assert!(arc_consistency(&mut csp));
        assert_eq!(csp.domain(x), &[1]);
        assert_eq!(csp.domain(y), &[2]);
        assert_eq!(csp.domain(z), &[3]);
    }

    #[test]
    fn arc_consistency_reports_wipe_out() {
        let mut csp = Csp::new();
        let x = csp.new_variable(vec![1], None);
        let y = csp.new_variable(vec![1], None);
        let _ = csp
            .add_factor(Factor::binary(x, y, |a, b| a != b))
            .expect("valid factor");

        assert!(!arc_consistency(&mut csp));
    }

    #[test]
    fn node_consistency_prunes_unary_violations() {
        let mut csp = Csp::new();
        let x = csp.new_variable(vec![1, 2, 3, 4], None);
        let _ = csp
            .add_factor(Factor::unary(x, |value| value % 2 == 0))
            .expect("valid factor");

        assert!(node_consistency(&mut csp));
        assert_eq!(csp.domain(x), &[2, 4]);
    }
}
