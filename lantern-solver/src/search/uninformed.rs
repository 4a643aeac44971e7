use std::hash::Hash;

use log::trace;

use crate::basic_types::SearchError;
use crate::containers::HashSet;
use crate::search::frontier::Discipline;
use crate::search::frontier::Frontier;
use crate::search::Action;
use crate::search::Tile;

/// An agent exploring a state graph without any cost information, breadth-first
/// ([`Discipline::Fifo`]) or depth-first ([`Discipline::Lifo`]).
///
/// Each step the agent folds the percepted neighbours into its frontier (first-seen wins,
/// revisits are dropped) and moves to the next frontier entry. The visited set gains the
/// *departed* location on arrival, never shrinks, and is owned exclusively by this agent.
/// There is no path reconstruction: the contract is goal detection and frontier exhaustion.
#[derive(Debug)]
pub struct UninformedSearchAgent<S> {
    frontier: Frontier<S>,
    visited: HashSet<S>,
    location: S,
    at_goal: bool,
}

impl<S: Copy + Eq + Hash + std::fmt::Debug> UninformedSearchAgent<S> {
    pub fn new(start: S, discipline: Discipline) -> Self {
        UninformedSearchAgent {
            frontier: Frontier::new(discipline),
            visited: HashSet::default(),
            location: start,
            at_goal: false,
        }
    }

    /// A breadth-first agent: the frontier is a FIFO queue.
    pub fn breadth_first(start: S) -> Self {
        Self::new(start, Discipline::Fifo)
    }

    /// A depth-first agent: the frontier is a LIFO stack.
    pub fn depth_first(start: S) -> Self {
        Self::new(start, Discipline::Lifo)
    }

    /// Whether the current location is marked as a goal location.
    pub fn at_goal(&self) -> bool {
        self.at_goal
    }

    pub fn location(&self) -> S {
        self.location
    }

    /// The number of locations committed to so far.
    pub fn num_visited(&self) -> usize {
        self.visited.len()
    }

    /// Fold the percepted neighbours into the frontier and move to the next frontier entry.
    pub fn step(&mut self, percept: &[Tile<S>]) -> Result<Action<S>, SearchError> {
        for tile in percept {
            if !tile.passable {
                continue;
            }
            if self.visited.contains(&tile.handle) {
                continue;
            }
            if self.frontier.contains(tile.handle) {
                continue;
            }
            if tile.handle == self.location {
                continue;
            }
            let _ = self.frontier.push(tile.handle);
            trace!("adding {:?} to frontier", tile.handle);
        }

        let next = self.frontier.pop()?;
        Ok(Action::Move(next))
    }

    /// Commit a move executed by the environment: the departed location joins the visited set.
    ///
    /// Returns whether the agent is now at a goal location.
    pub fn move_to(&mut self, tile: &Tile<S>) -> bool {
        if tile.passable {
            let _ = self.visited.insert(self.location);
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

    fn tile(handle: u32) -> Tile<u32> {
        Tile {
            handle,
            position: (handle as i32, 0),
            passable: true,
            goal: false,
        }
    }

    #[test]
    fn neighbours_are_frontiered_and_popped_fifo() {
        let mut agent = UninformedSearchAgent::breadth_first(0);
        let action = agent
            .step(&[tile(1), tile(2)])
            .expect("the frontier is non-empty");
        assert_eq!(action, Action::Move(1));

        agent.move_to(&tile(1));
        let action = agent.step(&[tile(3)]).expect("the frontier is non-empty");
        assert_eq!(action, Action::Move(2), "FIFO pops the oldest discovery");
    }

    #[test]
    fn depth_first_pops_the_newest_discovery() {
        let mut agent = UninformedSearchAgent::depth_first(0);
        let _ = agent.step(&[tile(1), tile(2)]).expect("non-empty");
        // 2 was pushed last and popped first.
        agent.move_to(&tile(2));
        let action = agent.step(&[tile(3)]).expect("non-empty");
        assert_eq!(action, Action::Move(3));
    }

    #[test]
    fn impassable_visited_and_current_tiles_are_skipped() {
        let mut agent = UninformedSearchAgent::breadth_first(0);
        agent.move_to(&tile(1)); // visited: {0}

        let wall = Tile {
            passable: false,
            ..tile(9)
        };
        let action = agent
            .step(&[wall, tile(0), tile(1), tile(2)])
            .expect("the frontier is non-empty");
        // 9 impassable, 0 visited, 1 is the current location: only 2 is frontiered.
        assert_eq!(action, Action::Move(2));
        assert!(agent.step(&[]).is_err(), "nothing left to explore");
    }

    #[test]
    fn exhaustion_is_surfaced() {
        let mut agent = UninformedSearchAgent::breadth_first(0);
        assert_eq!(agent.step(&[]), Err(SearchError::FrontierExhausted));
    }

    #[test]
    fn arrival_on_a_goal_tile_is_detected() {
        let mut agent = UninformedSearchAgent::breadth_first(0);
        assert!(!agent.at_goal());
        let goal = Tile {
            goal: true,
            ..tile(5)
        };
        assert!(agent.move_to(&goal));
        assert!(agent.at_goal());
    }
}
