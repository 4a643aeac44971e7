use log::warn;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::VariableId;
use crate::lantern_assert_eq_simple;

/// A [`VariableSelector`] which selects the variable with the smallest current domain (the
/// minimum-remaining-values heuristic).
///
/// Uses a [`TieBreaker`] to break ties, the default is the [`InOrderTieBreaker`] but it is
/// possible to construct the variable selector with a custom [`TieBreaker`] by using
/// the method [`FirstFail::with_tie_breaker`].
pub struct FirstFail<Var, TieBreaking> {
    variables: Vec<Var>,
    tie_breaker: TieBreaking,
}

impl<Var, TieBreaking> std::fmt::Debug for FirstFail<Var, TieBreaking> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirstFail").finish()
    }
}

impl<Var: Clone> FirstFail<Var, InOrderTieBreaker<Var, usize>> {
    pub fn new(variables: &[Var]) -> Self {
        if variables.is_empty() {
            warn!("The FirstFail variable selector was not provided with any variables");
        }
        Self {
            variables: variables.to_vec(),
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl<Var: Clone + 'static, TieBreaking: TieBreaker<Var, usize>> FirstFail<Var, TieBreaking> {
    pub fn with_tie_breaker(variables: &[Var], tie_breaker: TieBreaking) -> Self {
        lantern_assert_eq_simple!(
            tie_breaker.get_direction(),
            Direction::Minimum,
            "The provided tie-breaker to FirstFail attempts to find the Maximum value
             instead of the Minimum value, please ensure that you have passed the correct tie-breaker");
        if variables.is_empty() {
            warn!("The FirstFail variable selector was not provided with any variables");
            return FirstFail {
                variables: vec![],
                tie_breaker,
            };
        }

        Self {
            variables: variables.to_vec(),
            tie_breaker,
        }
    }
}

impl<TieBreaking> VariableSelector<VariableId> for FirstFail<VariableId, TieBreaking>
where
    TieBreaking: TieBreaker<VariableId, usize>,
{
    fn select_variable(&mut self, context: &mut SelectionContext<'_>) -> Option<VariableId> {
        self.variables
            .iter()
            .filter(|variable| !context.is_assigned(**variable))
            .for_each(|variable| {
                self.tie_breaker
                    .consider(*variable, context.domain_size(*variable));
            });
        self.tie_breaker.select()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correctly_selected() {
        let mut csp =
            SelectionContext::create_for_testing(vec![vec![0, 1, 2], vec![5, 6]]);
        let variables = csp.variables().collect::<Vec<_>>();
        let mut strategy = FirstFail::new(&variables);

        {
            let mut context = SelectionContext::new(&csp);

            let selected = strategy.select_variable(&mut context);
            assert!(selected.is_some());
            assert_eq!(selected.unwrap(), variables[1]);
        }

        csp.assign(variables[1], 5).expect("in domain");
        let mut context = SelectionContext::new(&csp);

        let selected = strategy.select_variable(&mut context);
        assert!(selected.is_some());
        assert_eq!(selected.unwrap(), variables[0]);
    }

    #[test]
    fn ties_are_broken_in_order() {
        let csp = SelectionContext::create_for_testing(vec![vec![1, 2], vec![3, 4]]);
        let variables = csp.variables().collect::<Vec<_>>();
        let mut context = SelectionContext::new(&csp);

        let mut strategy = FirstFail::new(&variables);
        let selected = strategy.select_variable(&mut context);
        assert_eq!(selected, Some(variables[0]));
    }

    #[test]
    fn assigned_variables_are_not_selected() {
        let mut csp = SelectionContext::create_for_testing(vec![vec![10], vec![20]]);
        let variables = csp.variables().collect::<Vec<_>>();
        csp.assign(variables[0], 10).expect("in domain");
        csp.assign(variables[1], 20).expect("in domain");
        let mut context = SelectionContext::new(&csp);

        let mut strategy = FirstFail::new(&variables);
        let selected = strategy.select_variable(&mut context);
        assert!(selected.is_none());
    }
}
