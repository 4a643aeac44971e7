use crate::basic_types::SearchError;

/// A stable argmax over scored candidates: candidates are fed one-by-one through
/// [`UtilityMaximiser::consider`] and the winner is taken with [`UtilityMaximiser::select`].
///
/// Only a strictly greater utility displaces the current winner, so on ties the first candidate
/// encountered keeps priority (stable scan, never random).
#[derive(Debug)]
pub struct UtilityMaximiser<Candidate, Value> {
    selected: Option<(Candidate, Value)>,
}

impl<Candidate, Value: PartialOrd> UtilityMaximiser<Candidate, Value> {
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Consider the next candidate with its utility.
    pub fn consider(&mut self, candidate: Candidate, utility: Value) {
        match &self.selected {
            Some((_, best)) if utility <= *best => {}
            _ => self.selected = Some((candidate, utility)),
        }
    }

    /// Select the winning candidate among all considered ones; [`None`] when nothing was
    /// considered. Resets the internal state.
    pub fn select(&mut self) -> Option<Candidate> {
        self.selected.take().map(|(candidate, _)| candidate)
    }
}

impl<Candidate, Value: PartialOrd> Default for UtilityMaximiser<Candidate, Value> {
    fn default() -> Self {
        Self::new()
    }
}

/// Selects the candidate with the strictly greatest utility; on ties the first candidate
/// encountered keeps priority.
///
/// Fails with [`SearchError::EmptyCandidateSet`] when given no candidates: callers must
/// guarantee non-emptiness (a complete or terminal state must short-circuit before utility
/// maximisation is invoked).
pub fn maximise_utility<Candidate, Value: PartialOrd>(
    candidates: impl IntoIterator<Item = Candidate>,
    mut utility: impl FnMut(&Candidate) -> Value,
) -> Result<Candidate, SearchError> {
    let mut maximiser = UtilityMaximiser::new();
    for candidate in candidates {
        let value = utility(&candidate);
        maximiser.consider(candidate, value);
    }
    maximiser.select().ok_or(SearchError::EmptyCandidateSet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_strictly_greatest_utility() {
        let chosen = maximise_utility(vec![("a", 1), ("b", 5), ("c", 3)], |(_, u)| *u)
            .expect("candidates are non-empty");
        assert_eq!(chosen.0, "b");
    }

    #[test]
    fn ties_keep_the_first_candidate() {
        let chosen = maximise_utility(vec![("a", 5), ("b", 5), ("c", 5)], |(_, u)| *u)
            .expect("candidates are non-empty");
        assert_eq!(chosen.0, "a");
    }

    #[test]
    fn an_empty_candidate_set_is_a_contract_violation() {
        let result = maximise_utility(Vec::<i32>::new(), |value| *value);
        assert_eq!(result.unwrap_err(), SearchError::EmptyCandidateSet);
    }

    #[test]
    fn works_with_real_valued_utilities() {
        let chosen = maximise_utility(vec![1.0_f64, -0.5, 2.5], |value| *value)
            .expect("candidates are non-empty");
        assert_eq!(chosen, 2.5);
    }
}
