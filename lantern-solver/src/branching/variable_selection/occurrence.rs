use log::warn;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::VariableId;
use crate::engine::Csp;
use crate::lantern_assert_eq_simple;

/// A [`VariableSelector`] which selects the variable with the largest number of attached
/// constraints (the maximum-degree heuristic), where the provided `num_occurrences` stores the
/// number of attached constraints per variable.
///
/// The counts are taken once, at construction: degree is computed against the static original
/// constraint graph and does not follow prunings made on branch copies during the search.
pub struct Occurrence<Var, TieBreaking> {
    variables: Vec<Var>,
    tie_breaker: TieBreaking,
    num_occurrences: Vec<u32>,
}

impl<Var, TieBreaking> std::fmt::Debug for Occurrence<Var, TieBreaking> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Occurrence").finish()
    }
}

impl<Var: Copy> Occurrence<Var, InOrderTieBreaker<Var, u32>> {
    pub fn new(variables: &[Var], num_occurrences: &[u32]) -> Self {
        lantern_assert_eq_simple!(
            variables.len(), num_occurrences.len(),
            "The number of variables and the number of elements in num_occurrences for the Occurrence variable selector should be the same"
        );
        if variables.is_empty() {
            warn!("The Occurrence variable selector was not provided with any variables");
        }
        Occurrence {
            variables: variables.to_vec(),
            tie_breaker: InOrderTieBreaker::new(Direction::Maximum),
            num_occurrences: num_occurrences.to_vec(),
        }
    }
}

impl Occurrence<VariableId, InOrderTieBreaker<VariableId, u32>> {
    /// Constructs the selector over all variables of the problem, counting for each variable the
    /// number of factors referencing it.
    pub fn from_problem(csp: &Csp) -> Self {
        let variables = csp.variables().collect::<Vec<_>>();
        let num_occurrences = variables
            .iter()
            .map(|variable| csp.factors_on(*variable).count() as u32)
            .collect::<Vec<_>>();
        Self::new(&variables, &num_occurrences)
    }
}

impl<TieBreaking> VariableSelector<VariableId> for Occurrence<VariableId, TieBreaking>
where
    TieBreaking: TieBreaker<VariableId, u32>,
{
    fn select_variable(&mut self, context: &mut SelectionContext<'_>) -> Option<VariableId> {
        self.variables
            .iter()
            .enumerate()
            .filter(|(_, variable)| !context.is_assigned(**variable))
            .for_each(|(index, variable)| {
                self.tie_breaker
                    .consider(*variable, self.num_occurrences[index])
            });
        self.tie_breaker.select()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::Factor;

    #[test]
    fn test_correctly_selected() {
        let csp = SelectionContext::create_for_testing(vec![vec![0, 1], vec![10, 11]]);
        let variables = csp.variables().collect::<Vec<_>>();
        let mut context = SelectionContext::new(&csp);

        let mut strategy = Occurrence::new(&variables, &[2, 1]);
        let selected = strategy.select_variable(&mut context);
        assert!(selected.is_some());
        assert_eq!(selected.unwrap(), variables[0])
    }

    #[test]
    fn from_problem_counts_referencing_factors() {
        let mut csp = Csp::new();
        let x = csp.new_variable(vec![0, 1], None);
        let y = csp.new_variable(vec![0, 1], None);
        let z = csp.new_variable(vec![0, 1], None);
        let _ = csp
            .add_factor(Factor::binary(x, y, |a, b| a != b))
            .expect("valid factor");
        let _ = csp
            .add_factor(Factor::binary(y, z, |a, b| a != b))
            .expect("valid factor");

        let mut strategy = Occurrence::from_problem(&csp);
        let mut context = SelectionContext::new(&csp);
        let selected = strategy.select_variable(&mut context);
        assert_eq!(selected, Some(y), "y is referenced by two factors");
    }

    #[test]
    fn assigned_variables_are_not_selected() {
        let mut csp = SelectionContext::create_for_testing(vec![vec![10], vec![20]]);
        let variables = csp.variables().collect::<Vec<_>>();
        csp.assign(variables[0], 10).expect("in domain");
        csp.assign(variables[1], 20).expect("in domain");
        let mut context = SelectionContext::new(&csp);

        let mut strategy = Occurrence::new(&variables, &[1, 2]);
        let selected = strategy.select_variable(&mut context);
        assert!(selected.is_none());
    }
}
