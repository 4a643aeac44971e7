use crate::engine::variables::VariableId;
use crate::engine::Csp;

/// The context provided to the [`VariableSelector`], it allows the retrieval of the assignment
/// status and domain sizes of the variables of the problem.
///
/// [`VariableSelector`]: crate::branching::VariableSelector
#[derive(Debug)]
pub struct SelectionContext<'a> {
    csp: &'a Csp,
}

impl<'a> SelectionContext<'a> {
    pub fn new(csp: &'a Csp) -> Self {
        SelectionContext { csp }
    }

    /// Determines whether the provided variable currently carries a value.
    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.csp.is_assigned(variable)
    }

    /// Returns the number of values in the current domain of the provided variable.
    pub fn domain_size(&self, variable: VariableId) -> usize {
        self.csp.domain(variable).len()
    }

    /// Returns all variables of the problem.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> {
        self.csp.variables()
    }

    #[cfg(test)]
    /// A method for creating a [`Csp`] with one variable per provided domain, for testing
    /// selectors against a [`SelectionContext`].
    pub(crate) fn create_for_testing(domains: Vec<Vec<i32>>) -> Csp {
        let mut csp = Csp::new();
        for domain in domains {
            let _ = csp.new_variable(domain, None);
        }
        csp
    }
}
