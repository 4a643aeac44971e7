use std::hash::Hash;

use log::trace;

use crate::basic_types::SearchError;
use crate::containers::HashMap;
use crate::containers::HashSet;
use crate::math::manhattan_distance;
use crate::search::maximise_utility;
use crate::search::Action;
use crate::search::Tile;

/// Whether the agent scores candidates by heuristic alone (greedy best-first) or by heuristic
/// plus accumulated path cost (A*).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InformedMode {
    Greedy,
    AStar,
}

/// An agent exploring a grid towards a known goal position, ranking its frontier by a Manhattan
/// distance heuristic.
///
/// The frontier is an unordered candidate set (no duplicates, insertion order retained for
/// stable tie-breaking) rather than a queue: each step every frontiered node competes on
/// utility. Greedy scores a node as `-h(n)`; A* as `-(g(n) + h(n))` where `g(n)` is recorded on
/// first insertion as one more than the cost of the node it was discovered from.
#[derive(Debug)]
pub struct InformedSearchAgent<S> {
    mode: InformedMode,
    frontier: Vec<S>,
    members: HashSet<S>,
    visited: HashSet<S>,
    positions: HashMap<S, (i32, i32)>,
    goal_position: (i32, i32),
    cost_so_far: HashMap<S, i64>,
    moved: i64,
    location: S,
    at_goal: bool,
}

impl<S: Copy + Eq + Hash + std::fmt::Debug> InformedSearchAgent<S> {
    pub fn new(start: S, goal_position: (i32, i32), mode: InformedMode) -> Self {
        InformedSearchAgent {
            mode,
            frontier: Vec::new(),
            members: HashSet::default(),
            visited: HashSet::default(),
            positions: HashMap::default(),
            goal_position,
            cost_so_far: HashMap::default(),
            moved: 0,
            location: start,
            at_goal: false,
        }
    }

    /// A greedy best-first agent: candidates are ranked by the heuristic alone.
    pub fn greedy(start: S, goal_position: (i32, i32)) -> Self {
        Self::new(start, goal_position, InformedMode::Greedy)
    }

    /// An A* agent: candidates are ranked by accumulated path cost plus the heuristic.
    pub fn a_star(start: S, goal_position: (i32, i32)) -> Self {
        Self::new(start, goal_position, InformedMode::AStar)
    }

    pub fn at_goal(&self) -> bool {
        self.at_goal
    }

    pub fn location(&self) -> S {
        self.location
    }

    /// The accumulated path cost of the current location (A* only; 0 for greedy).
    pub fn cost(&self) -> i64 {
        self.moved
    }

    fn heuristic(&self, node: S) -> i64 {
        manhattan_distance(self.positions[&node], self.goal_position)
    }

    fn utility(&self, node: S) -> i64 {
        // Maximising utility means minimising the (estimated) distance.
        match self.mode {
            InformedMode::Greedy => -self.heuristic(node),
            InformedMode::AStar => -(self.cost_so_far[&node] + self.heuristic(node)),
        }
    }

    fn update_frontier(&mut self, percept: &[Tile<S>]) {
        for tile in percept {
            if !tile.passable {
                continue;
            }
            if self.visited.contains(&tile.handle) {
                continue;
            }
            if self.members.contains(&tile.handle) {
                continue;
            }
            if tile.handle == self.location {
                continue;
            }
            let _ = self.members.insert(tile.handle);
            self.frontier.push(tile.handle);
            let _ = self.positions.insert(tile.handle, tile.position);
            if self.mode == InformedMode::AStar {
                let _ = self.cost_so_far.insert(tile.handle, self.moved + 1);
            }
            trace!("adding {:?} to frontier", tile.handle);
        }
    }

    /// Fold the percepted neighbours into the frontier and move to the best-utility candidate.
    pub fn step(&mut self, percept: &[Tile<S>]) -> Result<Action<S>, SearchError> {
        self.update_frontier(percept);

        if self.frontier.is_empty() {
            return Err(SearchError::FrontierExhausted);
        }

        let candidates = self.frontier.clone();
        let chosen = maximise_utility(candidates, |node| self.utility(*node))?;

        self.frontier.retain(|node| *node != chosen);
        let _ = self.members.remove(&chosen);
        Ok(Action::Move(chosen))
    }

    /// Commit a move executed by the environment; for A* the running cost becomes the chosen
    /// node's recorded cost.
    ///
    /// Returns whether the agent is now at a goal location.
    pub fn move_to(&mut self, tile: &Tile<S>) -> bool {
        if tile.passable {
            let _ = self.visited.insert(self.location);
            if self.mode == InformedMode::AStar {
                self.moved = *self
                    .cost_so_far
                    .get(&tile.handle)
                    .expect("moved to a node which was never frontiered");
            }
            self.location = tile.handle;
            self.at_goal = tile.goal;
            trace!("visiting {:?}", tile.handle);
        }
        self.at_goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(handle: u32, position: (i32, i32)) -> Tile<u32> {
        Tile {
            handle,
            position,
            passable: true,
            goal: false,
        }
    }

    #[test]
    fn greedy_moves_towards_the_goal() {
        let mut agent = InformedSearchAgent::greedy(0, (5, 0));
        let action = agent
            .step(&[tile(1, (1, 0)), tile(2, (-1, 0))])
            .expect("the frontier is non-empty");
        assert_eq!(action, Action::Move(1), "h=4 beats h=6");
    }

    #[test]
    fn a_star_accounts_for_accumulated_cost() {
        let mut agent = InformedSearchAgent::a_star(0, (2, 0));

        let _ = agent.step(&[tile(1, (1, 0))]).expect("non-empty");
        agent.move_to(&tile(1, (1, 0)));
        assert_eq!(agent.cost(), 1);

        let action = agent.step(&[tile(2, (2, 0))]).expect("non-empty");
        assert_eq!(action, Action::Move(2), "g=2, h=0 is the best f");
    }

    #[test]
    fn an_empty_frontier_is_search_failure() {
        let mut agent: InformedSearchAgent<u32> = InformedSearchAgent::greedy(0, (1, 1));
        assert_eq!(agent.step(&[]), Err(SearchError::FrontierExhausted));
    }

    #[test]
    fn the_chosen_node_leaves_the_frontier() {
        let mut agent = InformedSearchAgent::greedy(0, (0, 0));
        let first = agent
            .step(&[tile(1, (1, 0)), tile(2, (2, 0))])
            .expect("non-empty");
        assert_eq!(first, Action::Move(1));

        let second = agent.step(&[]).expect("node 2 is still frontiered");
        assert_eq!(second, Action::Move(2));
    }
}
