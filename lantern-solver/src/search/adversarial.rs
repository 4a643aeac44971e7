use log::trace;

use crate::basic_types::SearchError;
use crate::lantern_assert_simple;
use crate::search::maximise_utility;
use crate::search::Action;

/// Whose turn it is in a [`Game`] state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ply {
    /// The maximising player moves next.
    Maximising,
    /// The minimising player moves next.
    Minimising,
    /// Nobody moves: the state is terminal and can be scored.
    Terminal,
}

/// The contract a two-player zero-sum game must fulfil for minimax evaluation.
///
/// `to_move` must be a total, side-effect-free function over all reachable states (typically
/// derived by counting each side's moves made so far rather than by storing turn state), and
/// successors must be independent copies which share no mutable state.
pub trait Game {
    type State: Clone;

    /// Whose turn it is in the given state.
    fn to_move(&self, state: &Self::State) -> Ply;

    /// The legal successor states. Must be non-empty for any non-terminal state.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;

    /// The score of a terminal state, from the maximising player's perspective.
    fn score(&self, state: &Self::State) -> i64;
}

/// Pure recursive minimax evaluation over a [`Game`], without pruning or transposition caching:
/// the contract is correctness over a small finite game tree, not performance.
#[derive(Debug)]
pub struct MinimaxAgent<G> {
    game: G,
}

impl<G: Game> MinimaxAgent<G> {
    pub fn new(game: G) -> Self {
        MinimaxAgent { game }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// The minimax value of a state: the score both players can force with optimal play.
    pub fn value(&self, state: &G::State) -> i64 {
        match self.game.to_move(state) {
            Ply::Terminal => self.game.score(state),
            Ply::Maximising => self
                .successor_values(state)
                .into_iter()
                .max()
                .unwrap_or(i64::MIN),
            Ply::Minimising => self
                .successor_values(state)
                .into_iter()
                .min()
                .unwrap_or(i64::MAX),
        }
    }

    fn successor_values(&self, state: &G::State) -> Vec<i64> {
        let successors = self.game.successors(state);
        lantern_assert_simple!(
            !successors.is_empty(),
            "a non-terminal state must have at least one successor"
        );
        successors
            .iter()
            .map(|successor| self.value(successor))
            .collect()
    }

    /// Choose the successor with the greatest minimax value; a terminal state short-circuits to
    /// [`Action::Done`] before any utility maximisation.
    pub fn step(&self, state: &G::State) -> Result<Action<G::State>, SearchError> {
        if self.game.to_move(state) == Ply::Terminal {
            return Ok(Action::Done(Some(state.clone())));
        }

        trace!("thinking ...");
        let chosen = maximise_utility(self.game.successors(state), |successor| {
            self.value(successor)
        })?;
        Ok(Action::Move(chosen))
    }
}
