use log::debug;

use crate::basic_types::Solution;
use crate::branching::SelectionContext;
use crate::branching::VariableSelector;
use crate::engine::propagation::arc_consistency;
use crate::engine::propagation::node_consistency;
use crate::engine::solver_statistics::SolverStatistics;
use crate::engine::variables::VariableId;
use crate::engine::Csp;
use crate::lantern_assert_simple;
use crate::options::SolverOptions;

/// Recursive depth-first assignment search over a [`Csp`].
///
/// A variable to assign next is chosen through a pluggable [`VariableSelector`]; candidate
/// values are tried in domain-iteration order. Every trial assignment is checked against the
/// factors referencing the variable, and (when enabled) followed by an arc-consistency
/// propagation pass which operates on an independently owned copy of the problem so that
/// sibling branches never observe each other's domain prunings.
///
/// An unsatisfiable problem terminates because the search space is finite: every branch either
/// wipes out a domain or exhausts its candidate values.
#[derive(Debug)]
pub struct BacktrackingSolver {
    options: SolverOptions,
    statistics: SolverStatistics,
}

impl Default for BacktrackingSolver {
    fn default() -> Self {
        Self::with_options(SolverOptions::default())
    }
}

impl BacktrackingSolver {
    pub fn with_options(options: SolverOptions) -> Self {
        BacktrackingSolver {
            options,
            statistics: SolverStatistics::default(),
        }
    }

    /// The statistics gathered over all [`BacktrackingSolver::solve`] calls on this solver.
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Search for a complete, consistent assignment of `csp`.
    ///
    /// Returns [`None`] when no such assignment exists. Pre-seeded assignments are honoured;
    /// a seeding which is already inconsistent reports failure immediately rather than a
    /// partial result.
    pub fn solve(
        &mut self,
        csp: &mut Csp,
        selector: &mut impl VariableSelector<VariableId>,
    ) -> Option<Solution> {
        if !csp.is_consistent() {
            debug!("the seeded assignment is inconsistent");
            return None;
        }

        if self.options.node_consistency && !node_consistency(csp) {
            debug!("node consistency wiped out a domain");
            return None;
        }

        self.backtrack(csp, selector)
    }

    fn backtrack(
        &mut self,
        csp: &mut Csp,
        selector: &mut impl VariableSelector<VariableId>,
    ) -> Option<Solution> {
        if csp.unassigned_variables().next().is_none() {
            return Some(Solution::new(csp.snapshot_values()));
        }

        let Some(variable) = selector.select_variable(&mut SelectionContext::new(csp)) else {
            // Selector contract: None is only returned once every variable is assigned.
            lantern_assert_simple!(
                false,
                "the selector returned no variable while unassigned variables remain"
            );
            return None;
        };

        for value in csp.domain(variable).to_vec() {
            self.statistics.num_decisions += 1;
            csp.assign(variable, value)
                .expect("the value is drawn from the variable's domain");

            if self.check_factors_on(csp, variable) {
                // The branch owns an independent copy of all domains; prunings made below this
                // trial assignment must not leak into the sibling branches.
                let mut branch = csp.clone();

                let feasible = if self.options.arc_consistency {
                    self.statistics.num_propagations += 1;
                    arc_consistency(&mut branch)
                } else {
                    true
                };

                if feasible {
                    if let Some(solution) = self.backtrack(&mut branch, selector) {
                        return Some(solution);
                    }
                }
            }

            csp.unassign(variable);
        }

        self.statistics.num_backtracks += 1;
        debug!("backtracking on {}", csp.name(variable));
        None
    }

    fn check_factors_on(&mut self, csp: &Csp, variable: VariableId) -> bool {
        let mut satisfied = true;
        for factor in csp.factors_on(variable).collect::<Vec<_>>() {
            self.statistics.num_factor_checks += 1;
            if !csp.is_factor_satisfied(factor) {
                satisfied = false;
                break;
            }
        }
        satisfied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::variable_selection::InputOrder;
    use crate::constraints::Factor;

    fn not_equals(csp: &mut Csp, x: VariableId, y: VariableId) {
        let _ = csp
            .add_factor(Factor::binary(x, y, |a, b| a != b))
            .expect("valid factor");
    }

    #[test]
    fn solves_a_small_colouring_problem() {
        let mut csp = Csp::new();
        let variables: Vec<_> = (0..3)
            .map(|i| csp.new_variable(vec![0, 1], Some(format!("v{i}"))))
            .collect();
        not_equals(&mut csp, variables[0], variables[1]);
        not_equals(&mut csp, variables[1], variables[2]);

        let mut selector = InputOrder::new(&variables);
        let solution = BacktrackingSolver::default()
            .solve(&mut csp, &mut selector)
            .expect("a 2-colouring of a path exists");

        use crate::basic_types::ProblemSolution;
        assert_ne!(
            solution.get_integer_value(variables[0]),
            solution.get_integer_value(variables[1])
        );
        assert_ne!(
            solution.get_integer_value(variables[1]),
            solution.get_integer_value(variables[2])
        );
    }

    #[test]
    fn reports_failure_on_an_unsatisfiable_problem() {
        // A triangle cannot be 2-coloured.
        let mut csp = Csp::new();
        let variables: Vec<_> = (0..3).map(|_| csp.new_variable(vec![0, 1], None)).collect();
        not_equals(&mut csp, variables[0], variables[1]);
        not_equals(&mut csp, variables[1], variables[2]);
        not_equals(&mut csp, variables[0], variables[2]);

        let mut selector = InputOrder::new(&variables);
        assert!(BacktrackingSolver::default()
            .solve(&mut csp, &mut selector)
            .is_none());
    }

    #[test]
    fn inconsistent_seeding_fails_before_searching() {
        let mut csp = Csp::new();
        let x = csp.new_variable(vec![1, 2], None);
        let y = csp.new_variable(vec![1, 2], None);
        not_equals(&mut csp, x, y);
        csp.assign(x, 1).expect("in domain");
        csp.assign(y, 1).expect("in domain");

        let mut selector = InputOrder::new(&[x, y]);
        let mut solver = BacktrackingSolver::default();
        assert!(solver.solve(&mut csp, &mut selector).is_none());
        assert_eq!(solver.statistics().num_decisions, 0);
    }

    #[test]
    fn honours_seeded_assignments() {
        let mut csp = Csp::new();
        let x = csp.new_variable(vec![1, 2], None);
        let y = csp.new_variable(vec![1, 2], None);
        not_equals(&mut csp, x, y);
        csp.assign(x, 2).expect("in domain");

        let mut selector = InputOrder::new(&[x, y]);
        let solution = BacktrackingSolver::default()
            .solve(&mut csp, &mut selector)
            .expect("satisfiable");

        use crate::basic_types::ProblemSolution;
        assert_eq!(solution.get_integer_value(x), 2);
        assert_eq!(solution.get_integer_value(y), 1);
    }

    #[test]
    fn works_without_arc_consistency() {
        let mut csp = Csp::new();
        let variables: Vec<_> = (0..4).map(|_| csp.new_variable(vec![0, 1, 2], None)).collect();
        for i in 0..4 {
            for j in (i + 1)..4 {
                if i != 0 || j != 3 {
                    not_equals(&mut csp, variables[i], variables[j]);
                }
            }
        }

        let mut selector = InputOrder::new(&variables);
        let mut solver = BacktrackingSolver::with_options(SolverOptions {
            arc_consistency: false,
            ..SolverOptions::default()
        });
        let solution = solver.solve(&mut csp, &mut selector);
        assert!(solution.is_some());
        assert_eq!(solver.statistics().num_propagations, 0);
    }
}
