use log::warn;

use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::VariableId;

/// A [`VariableSelector`] which selects the first variable which is not assigned given the order
/// in the provided list.
#[derive(Debug)]
pub struct InputOrder<Var> {
    variables: Vec<Var>,
}

impl<Var: Copy> InputOrder<Var> {
    pub fn new(variables: &[Var]) -> Self {
        if variables.is_empty() {
            warn!("The InputOrder variable selector was not provided with any variables");
        }
        InputOrder {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector<VariableId> for InputOrder<VariableId> {
    fn select_variable(&mut self, context: &mut SelectionContext<'_>) -> Option<VariableId> {
        self.variables
            .iter()
            .find(|&&variable| !context.is_assigned(variable))
            .copied()
    }
}
