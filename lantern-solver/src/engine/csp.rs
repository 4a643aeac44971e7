use crate::basic_types::ConstraintOperationError;
use crate::basic_types::DomainViolation;
use crate::constraints::Factor;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::variables::Variable;
use crate::engine::variables::VariableId;

/// The id of a [`Factor`] within the problem it was posted to.
#[derive(Clone, PartialEq, Eq, Copy, Hash)]
pub struct FactorId {
    pub id: u32,
}

impl StorageKey for FactorId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        FactorId { id: index as u32 }
    }
}

impl std::fmt::Display for FactorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "f{}", self.id)
    }
}

impl std::fmt::Debug for FactorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "f{}", self.id)
    }
}

/// A directed arc between two variables, owned by a binary factor. Arcs are only materialised
/// for arc-consistency propagation; they are not persisted beyond it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    /// The binary factor which owns this arc.
    pub factor: FactorId,
    /// The variable whose domain is revised against `b`.
    pub a: VariableId,
    /// The variable providing support for values of `a`.
    pub b: VariableId,
}

/// A constraint satisfaction problem: a collection of typed variables with finite domains paired
/// with a collection of [`Factor`]s over them.
///
/// The pairing is immutable for the lifetime of a solve: solving never adds or removes variables
/// or factors, it only mutates assignments and shrinks domains. [`Csp::clone`] performs the
/// copy-on-branch deep copy of all domains and assignments (factor predicates are shared, they
/// are immutable).
#[derive(Debug, Clone, Default)]
pub struct Csp {
    variables: KeyedVec<VariableId, Variable>,
    factors: KeyedVec<FactorId, Factor>,
}

impl Csp {
    pub fn new() -> Self {
        Self {
            variables: KeyedVec::new(),
            factors: KeyedVec::new(),
        }
    }

    /// Create a new variable with the given (finite) domain.
    pub fn new_variable(&mut self, domain: Vec<i32>, name: Option<String>) -> VariableId {
        self.variables.push(Variable::new(domain, name))
    }

    /// Post a factor to the problem.
    ///
    /// Fails if the factor's scope is empty or references a variable which does not belong to
    /// this problem.
    pub fn add_factor(&mut self, factor: Factor) -> Result<FactorId, ConstraintOperationError> {
        if factor.scope().is_empty() {
            return Err(ConstraintOperationError::EmptyScope);
        }
        if let Some(unknown) = factor
            .scope()
            .iter()
            .find(|variable| !self.variables.contains_key(**variable))
        {
            return Err(ConstraintOperationError::UnknownVariable(
                unknown.to_string(),
            ));
        }
        Ok(self.factors.push(factor))
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Iterate over all variables of the problem.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> {
        self.variables.keys()
    }

    /// Iterate over the variables which do not currently carry a value.
    pub fn unassigned_variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.variables
            .keys()
            .filter(|variable| !self.variables[*variable].is_assigned())
    }

    /// The display name of the variable: its given name, or `x{id}` when unnamed.
    pub fn name(&self, variable: VariableId) -> String {
        self.variables[variable]
            .name
            .clone()
            .unwrap_or_else(|| variable.to_string())
    }

    /// The current domain of the variable.
    pub fn domain(&self, variable: VariableId) -> &[i32] {
        &self.variables[variable].domain
    }

    /// The current assignment of the variable, if any.
    pub fn value(&self, variable: VariableId) -> Option<i32> {
        self.variables[variable].value
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.variables[variable].is_assigned()
    }

    /// Assign `value` to the variable.
    ///
    /// Fails with [`DomainViolation`] when `value` is not in the variable's current domain; the
    /// stored assignment is untouched in that case.
    pub fn assign(&mut self, variable: VariableId, value: i32) -> Result<(), DomainViolation> {
        if !self.variables[variable].domain.contains(&value) {
            return Err(DomainViolation {
                variable: self.name(variable),
                value,
                domain: self.variables[variable].domain.clone(),
            });
        }
        self.variables[variable].value = Some(value);
        Ok(())
    }

    /// Clear the assignment of the variable. Clearing always succeeds, also on an unassigned
    /// variable.
    pub fn unassign(&mut self, variable: VariableId) {
        self.variables[variable].value = None;
    }

    /// Remove `value` from the domain of the variable. Domains only ever shrink; there is no
    /// inverse operation.
    pub(crate) fn remove_from_domain(&mut self, variable: VariableId, value: i32) {
        self.variables[variable].domain.retain(|&v| v != value);
    }

    /// Iterate over all factors of the problem.
    pub fn factors(&self) -> impl Iterator<Item = FactorId> {
        self.factors.keys()
    }

    pub fn factor(&self, factor: FactorId) -> &Factor {
        &self.factors[factor]
    }

    /// Iterate over the factors which reference the given variable.
    pub fn factors_on(&self, variable: VariableId) -> impl Iterator<Item = FactorId> + '_ {
        self.factors
            .keys()
            .filter(move |factor| self.factors[*factor].references(variable))
    }

    /// Whether the factor is satisfied under the current (possibly partial) assignment.
    ///
    /// Unary and binary factors report satisfied while any of their variables is unassigned;
    /// global factors evaluate their predicate eagerly over the partial assignment.
    pub fn is_factor_satisfied(&self, factor: FactorId) -> bool {
        self.factors[factor].is_satisfied_given(|variable| self.value(variable))
    }

    /// Whether every factor is satisfied under the current assignment.
    pub fn is_consistent(&self) -> bool {
        self.factors()
            .all(|factor| self.is_factor_satisfied(factor))
    }

    /// Whether every variable is assigned *and* the assignment is consistent.
    pub fn is_complete(&self) -> bool {
        self.unassigned_variables().next().is_none() && self.is_consistent()
    }

    /// The directed arcs of the problem: every binary factor over `(x, y)` contributes the arcs
    /// `x -> y` and `y -> x`.
    pub fn arcs(&self) -> Vec<Arc> {
        self.factors
            .keys()
            .filter(|factor| self.factors[*factor].is_binary())
            .flat_map(|factor| {
                let scope = self.factors[factor].scope();
                let (x, y) = (scope[0], scope[1]);
                [
                    Arc { factor, a: x, b: y },
                    Arc { factor, a: y, b: x },
                ]
            })
            .collect()
    }

    /// Snapshot the current (complete) assignment.
    ///
    /// Callers must guarantee completeness; this is only invoked by the backtracking solver once
    /// every variable carries a value.
    pub(crate) fn snapshot_values(&self) -> KeyedVec<VariableId, i32> {
        let mut values = KeyedVec::default();
        for variable in self.variables.keys() {
            let _ = values.push(
                self.variables[variable]
                    .value
                    .expect("snapshot of an incomplete assignment"),
            );
        }
        values
    }
}
