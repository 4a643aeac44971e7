/// The closed set of commands an agent can hand back to its environment, tagged with the payload
/// the environment needs to execute them.
///
/// The environment resolves an action by exhaustive pattern matching; the set is deliberately
/// closed so that an unhandled command is a compile error rather than a silently ignored string.
/// A payload of [`None`] means "nothing to do" for that tag (e.g. a rejected local-search
/// candidate, or reaching a local optimum with nothing left to report).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<S> {
    /// Move to the given state handle.
    Move(S),
    /// Adopt the given candidate state ([`None`]: stay where we are).
    Explore(Option<S>),
    /// Consume the given thing.
    Eat(S),
    /// Drink the given thing.
    Drink(S),
    /// Deliver along the reconstructed path with its total cost.
    Deliver { path: Vec<S>, cost: i64 },
    /// Stop; the payload (if any) is the final state to report.
    Done(Option<S>),
}
