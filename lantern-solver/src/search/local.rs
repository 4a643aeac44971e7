use std::marker::PhantomData;

use log::debug;
use log::trace;

use crate::basic_types::Random;
use crate::basic_types::SearchError;
use crate::search::maximise_utility;
use crate::search::Action;

/// A local search agent which repeatedly moves to the best neighbour of its current state, and
/// stops as soon as no neighbour strictly improves on it.
///
/// The agent keeps no history: it operates on whatever `(state, neighbours)` pair the
/// environment percepts each step. The stopping state is a local optimum, not necessarily a
/// global one.
pub struct HillClimber<S, F> {
    utility: F,
    state: PhantomData<S>,
}

impl<S, F> std::fmt::Debug for HillClimber<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HillClimber").finish()
    }
}

impl<S: Clone, F: Fn(&S) -> f64> HillClimber<S, F> {
    pub fn new(utility: F) -> Self {
        HillClimber {
            utility,
            state: PhantomData,
        }
    }

    /// Pick the best neighbour; move to it when it strictly improves on the current state,
    /// report [`Action::Done`] otherwise.
    pub fn step(&self, state: &S, neighbours: &[S]) -> Result<Action<S>, SearchError> {
        let choice = maximise_utility(neighbours.iter(), |neighbour| (self.utility)(neighbour))?;

        if (self.utility)(choice) > (self.utility)(state) {
            Ok(Action::Explore(Some(choice.clone())))
        } else {
            Ok(Action::Done(None))
        }
    }
}

/// Stochastic local search with a linearly cooling acceptance schedule.
///
/// Parameterised by a total step budget `t_max`; the temperature at step `t` is
/// `T(t) = 1 - t/t_max`, cooling from 1 towards 0. Each step one neighbour is drawn uniformly
/// at random: an uphill candidate is always accepted, a downhill candidate with probability
/// `exp(Δ/T)`. The best-ever state is tracked throughout and is what the agent reports once the
/// budget is spent, not necessarily the state it happens to stand on.
pub struct SimulatedAnnealing<S, F> {
    utility: F,
    step: u64,
    budget: u64,
    best: Option<S>,
}

impl<S, F> std::fmt::Debug for SimulatedAnnealing<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedAnnealing")
            .field("step", &self.step)
            .field("budget", &self.budget)
            .finish()
    }
}

/// The probability of accepting a candidate whose utility differs by `delta` (`delta <= 0` in
/// the branch where this is consulted) at the given temperature. Defined as 0 at temperature 0
/// so a fully cooled schedule never accepts a downhill move.
fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if temperature > 0.0 {
        (delta / temperature).exp()
    } else {
        0.0
    }
}

impl<S: Clone, F: Fn(&S) -> f64> SimulatedAnnealing<S, F> {
    pub fn new(budget: u64, utility: F) -> Self {
        SimulatedAnnealing {
            utility,
            step: 0,
            budget,
            best: None,
        }
    }

    /// The temperature of the schedule at step `t`.
    fn temperature(&self, t: u64) -> f64 {
        1.0 - t as f64 / self.budget as f64
    }

    /// Consider one uniformly drawn neighbour; see the type documentation for the acceptance
    /// rule. Once the budget is spent, reports [`Action::Done`] with the best-ever state.
    pub fn step(
        &mut self,
        state: &S,
        neighbours: &[S],
        random: &mut dyn Random,
    ) -> Result<Action<S>, SearchError> {
        if self.step == self.budget {
            let best = self.best.take().unwrap_or_else(|| state.clone());
            return Ok(Action::Done(Some(best)));
        }

        let temperature = self.temperature(self.step);
        self.step += 1;

        if neighbours.is_empty() {
            return Err(SearchError::EmptyCandidateSet);
        }
        let candidate = &neighbours[random.generate_usize_in_range(0..neighbours.len())];
        let value = (self.utility)(candidate);
        let delta = value - (self.utility)(state);

        if self.best.is_none() {
            self.best = Some(state.clone());
        }

        trace!("(t{}) considering candidate with Δ={delta}", self.step);

        if delta > 0.0 {
            let best = self.best.as_ref().expect("initialised above");
            if value > (self.utility)(best) {
                self.best = Some(candidate.clone());
            }
            return Ok(Action::Explore(Some(candidate.clone())));
        }

        let probability = acceptance_probability(delta, temperature);
        if random.generate_f64() < probability {
            debug!("accepted downhill candidate with probability {probability}");
            Ok(Action::Explore(Some(candidate.clone())))
        } else {
            trace!("rejected candidate (P={probability})");
            Ok(Action::Explore(None))
        }
    }
}
