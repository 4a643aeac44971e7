use std::hash::Hash;

use log::trace;

use crate::basic_types::SearchError;
use crate::containers::HashMap;
use crate::containers::HashSet;
use crate::search::maximise_utility;
use crate::search::Action;

/// A uniform-cost (Dijkstra-style) agent over a weighted graph.
///
/// The agent maintains tentative distances and predecessors for every discovered node, starting
/// from `dist[origin] = 0`. Each step it relaxes the percepted edges of its current location and
/// moves to the cheapest unvisited discovered node (maximising `-dist`). Nodes are finalised on
/// departure and never relaxed again. On reaching the target the agent emits
/// [`Action::Deliver`] with the path walked back through the predecessor map and the total
/// cost; an exhausted frontier without reaching the target is the explicit
/// [`SearchError::Unreachable`].
#[derive(Debug)]
pub struct ShortestPathAgent<S> {
    dist: HashMap<S, i64>,
    prev: HashMap<S, S>,
    visited: HashSet<S>,
    location: S,
    origin: S,
    target: S,
}

impl<S: Copy + Eq + Hash + std::fmt::Debug> ShortestPathAgent<S> {
    pub fn new(origin: S, target: S) -> Self {
        let mut dist = HashMap::default();
        let _ = dist.insert(origin, 0);
        ShortestPathAgent {
            dist,
            prev: HashMap::default(),
            visited: HashSet::default(),
            location: origin,
            origin,
            target,
        }
    }

    pub fn location(&self) -> S {
        self.location
    }

    /// The tentative distance of a discovered node.
    pub fn distance_to(&self, node: S) -> Option<i64> {
        self.dist.get(&node).copied()
    }

    /// Relax the percepted edges of the current location, then move to the cheapest unvisited
    /// discovered node; deliver when standing on the target.
    pub fn step(&mut self, percept: &[(S, i64)]) -> Result<Action<S>, SearchError> {
        if self.location == self.target {
            let path = self.reconstruct_path();
            let cost = self.dist[&self.target];
            trace!("delivering along {path:?} at cost {cost}");
            return Ok(Action::Deliver { path, cost });
        }

        let current_dist = self.dist[&self.location];
        for &(neighbour, weight) in percept {
            if self.visited.contains(&neighbour) {
                // Finalised nodes are never relaxed again.
                continue;
            }
            let candidate = current_dist + weight;
            let improves = match self.dist.get(&neighbour) {
                None => true,
                Some(&known) => candidate < known,
            };
            if improves {
                let _ = self.dist.insert(neighbour, candidate);
                let _ = self.prev.insert(neighbour, self.location);
                trace!("relaxed {neighbour:?} to {candidate}");
            }
        }

        let candidates: Vec<S> = self
            .dist
            .keys()
            .filter(|node| !self.visited.contains(node) && **node != self.location)
            .copied()
            .collect();

        let next = maximise_utility(candidates, |node| -self.dist[node])
            .map_err(|_| SearchError::Unreachable)?;
        Ok(Action::Move(next))
    }

    /// Commit a move executed by the environment: the departed node is finalised.
    pub fn move_to(&mut self, node: S) {
        let _ = self.visited.insert(self.location);
        self.location = node;
    }

    fn reconstruct_path(&self) -> Vec<S> {
        let mut path = vec![self.target];
        let mut current = self.target;
        while current != self.origin {
            match self.prev.get(&current) {
                Some(&predecessor) => {
                    path.push(predecessor);
                    current = predecessor;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive the agent over an adjacency list until it delivers or fails.
    fn run(
        edges: &[Vec<(usize, i64)>],
        origin: usize,
        target: usize,
    ) -> Result<(Vec<usize>, i64), SearchError> {
        let mut agent = ShortestPathAgent::new(origin, target);
        loop {
            match agent.step(&edges[agent.location()])? {
                Action::Move(next) => agent.move_to(next),
                Action::Deliver { path, cost } => return Ok((path, cost)),
                action => panic!("unexpected action {action:?}"),
            }
        }
    }

    #[test]
    fn finds_the_cheapest_path() {
        // 0 -> 1 is expensive directly but cheap through 2.
        let edges = vec![
            vec![(1, 10), (2, 1)],
            vec![(0, 10), (2, 2)],
            vec![(0, 1), (1, 2)],
        ];
        let (path, cost) = run(&edges, 0, 1).expect("the target is reachable");
        assert_eq!(path, vec![0, 2, 1]);
        assert_eq!(cost, 3);
    }

    #[test]
    fn an_unreachable_target_is_explicit() {
        let edges = vec![vec![(1, 1)], vec![(0, 1)], vec![]];
        assert_eq!(run(&edges, 0, 2), Err(SearchError::Unreachable));
    }

    #[test]
    fn delivery_at_the_origin_is_immediate() {
        let edges = vec![vec![(1, 1)], vec![(0, 1)]];
        let (path, cost) = run(&edges, 0, 0).expect("already at the target");
        assert_eq!(path, vec![0]);
        assert_eq!(cost, 0);
    }

    #[test]
    fn already_finalised_nodes_are_not_relaxed() {
        let mut agent = ShortestPathAgent::new(0_usize, 3);
        let action = agent.step(&[(1, 1)]).expect("a candidate exists");
        assert_eq!(action, Action::Move(1));
        agent.move_to(1);

        // A spurious cheap edge back to the finalised origin must not change its distance.
        let _ = agent.step(&[(0, -100), (2, 1)]);
        assert_eq!(agent.distance_to(0), Some(0));
    }
}
