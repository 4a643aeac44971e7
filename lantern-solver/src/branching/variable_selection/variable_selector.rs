use crate::branching::SelectionContext;

/// A trait containing the interface for [`VariableSelector`]s, specifying the method required
/// for selecting variables during the backtracking search.
pub trait VariableSelector<Var> {
    /// Determines which variable to select next if there are any left to branch on.
    /// Should only return [`None`] when all variables which have been passed to the
    /// [`VariableSelector`] have been assigned. Otherwise it should return the variable to
    /// branch on next.
    fn select_variable(&mut self, context: &mut SelectionContext<'_>) -> Option<Var>;
}
