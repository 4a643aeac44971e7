use crate::containers::KeyedVec;
use crate::engine::variables::VariableId;

/// A trait which specifies the common behaviours of [`Solution`] and [`SolutionReference`].
pub trait ProblemSolution {
    /// Returns the number of defined [`VariableId`]s.
    fn num_variables(&self) -> usize;

    /// Returns the value assigned to `variable` in this solution.
    fn get_integer_value(&self, variable: VariableId) -> i32;
}

/// A solution which keeps a reference to its inner structures.
#[derive(Debug, Copy, Clone)]
pub struct SolutionReference<'a> {
    values: &'a KeyedVec<VariableId, i32>,
}

impl<'a> SolutionReference<'a> {
    pub(crate) fn new(values: &'a KeyedVec<VariableId, i32>) -> SolutionReference<'a> {
        SolutionReference { values }
    }
}

impl ProblemSolution for SolutionReference<'_> {
    fn num_variables(&self) -> usize {
        self.values.len()
    }

    fn get_integer_value(&self, variable: VariableId) -> i32 {
        self.values[variable]
    }
}

/// A solution which takes ownership of its inner structures.
///
/// The assignment is complete by construction: every variable of the problem it was produced
/// from carries a value.
#[derive(Clone, Debug, Default)]
pub struct Solution {
    values: KeyedVec<VariableId, i32>,
}

impl Solution {
    pub(crate) fn new(values: KeyedVec<VariableId, i32>) -> Self {
        Self { values }
    }

    pub fn as_reference(&self) -> SolutionReference<'_> {
        SolutionReference::new(&self.values)
    }

    pub fn contains_variable(&self, variable: VariableId) -> bool {
        self.values.contains_key(variable)
    }

    /// Iterate over the variables of this solution.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> {
        self.values.keys()
    }
}

impl ProblemSolution for Solution {
    fn num_variables(&self) -> usize {
        self.values.len()
    }

    fn get_integer_value(&self, variable: VariableId) -> i32 {
        self.values[variable]
    }
}

impl From<SolutionReference<'_>> for Solution {
    fn from(value: SolutionReference) -> Self {
        Self {
            values: value.values.clone(),
        }
    }
}
