use std::collections::BinaryHeap;

use fxhash::{FxHashMap, FxHashSet};
use num_traits::Zero;

use crate::parents::ParentMap;
use crate::solver::{score_of, Frontier, SmallestCostHolder};
use crate::{Coord, Cost, Grid, EDGE_COST};

/// Uniform-cost frontier. A cell may be queued several times if a shorter distance to it is
/// found; only the first dequeue counts, later entries are dropped by the closed set.
#[derive(Clone, Debug)]
pub struct Dijkstra {
    to_see: BinaryHeap<SmallestCostHolder<Cost>>,
    distances: FxHashMap<Coord, Cost>,
    closed: FxHashSet<Coord>,
    parents: ParentMap,
    seq: usize,
}

impl Dijkstra {
    pub fn new(start: Coord) -> Dijkstra {
        let mut frontier = Dijkstra {
            to_see: BinaryHeap::new(),
            distances: FxHashMap::default(),
            closed: FxHashSet::default(),
            parents: ParentMap::default(),
            seq: 0,
        };
        frontier.distances.insert(start, Zero::zero());
        frontier.parents.insert(start, None);
        frontier.push(start, Zero::zero());
        frontier
    }

    /// Shortest distance found so far, [None] if `node` has not been reached.
    pub fn distance(&self, node: &Coord) -> Option<Cost> {
        self.distances.get(node).copied()
    }

    fn push(&mut self, node: Coord, distance: Cost) {
        self.to_see.push(SmallestCostHolder {
            priority: distance,
            seq: self.seq,
            node,
        });
        self.seq += 1;
    }
}

impl Frontier for Dijkstra {
    fn pop(&mut self) -> Option<Coord> {
        while let Some(SmallestCostHolder { node, .. }) = self.to_see.pop() {
            if self.closed.insert(node) {
                return Some(node);
            }
        }
        None
    }

    fn expand(&mut self, grid: &Grid, node: Coord) {
        let distance = score_of(&self.distances, &node);
        for neighbour in grid.neighbours_of(node) {
            let new_distance = distance + EDGE_COST;
            if new_distance < score_of(&self.distances, &neighbour) {
                self.distances.insert(neighbour, new_distance);
                self.parents.insert(neighbour, Some(node));
                self.push(neighbour, new_distance);
            }
        }
    }

    fn parents(&self) -> &ParentMap {
        &self.parents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::dijkstra;

    fn coords(cells: &[(usize, usize)]) -> Vec<Coord> {
        cells.iter().copied().map(Coord::from).collect()
    }

    /// On an open grid all distances tie layer by layer, so insertion order matches BFS.
    #[test]
    fn ties_pop_in_insertion_order() {
        let mut grid = Grid::new(3, 3);
        let outcome = dijkstra(&mut grid, Coord::new(0, 0), Coord::new(2, 2)).run();
        assert_eq!(
            outcome.visited_cells(),
            coords(&[
                (0, 0),
                (1, 0),
                (0, 1),
                (2, 0),
                (1, 1),
                (0, 2),
                (2, 1),
                (1, 2),
                (2, 2)
            ])
        );
        assert_eq!(
            outcome.path,
            Some(coords(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]))
        );
    }

    #[test]
    fn records_distances() {
        // |S..|
        // |##.|
        // |G..|
        let mut grid = Grid::new(3, 3);
        grid.set_blocked(Coord::new(1, 0), true);
        grid.set_blocked(Coord::new(1, 1), true);
        let mut frontier = Dijkstra::new(Coord::new(0, 0));
        let mut order = Vec::new();
        while let Some(node) = frontier.pop() {
            order.push(node);
            frontier.expand(&grid, node);
        }
        assert_eq!(frontier.distance(&Coord::new(2, 0)), Some(6));
        assert_eq!(frontier.distance(&Coord::new(1, 2)), Some(3));
        assert_eq!(frontier.distance(&Coord::new(1, 1)), None);
        assert_eq!(order.len(), 7);
    }

    #[test]
    fn no_path_visits_reachable_cells_once() {
        let mut grid = Grid::new(3, 3);
        for row in 0..3 {
            grid.set_blocked(Coord::new(row, 1), true);
        }
        let outcome = dijkstra(&mut grid, Coord::new(0, 0), Coord::new(0, 2)).run();
        assert_eq!(outcome.path, None);
        assert_eq!(outcome.visited_cells(), coords(&[(0, 0), (1, 0), (2, 0)]));
    }
}
