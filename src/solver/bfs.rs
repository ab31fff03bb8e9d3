use std::collections::VecDeque;

use crate::parents::ParentMap;
use crate::solver::Frontier;
use crate::{Coord, Grid};

/// Breadth-first frontier: a FIFO queue. Like [DepthFirst](crate::solver::dfs::DepthFirst),
/// cells are marked seen when enqueued.
#[derive(Clone, Debug)]
pub struct BreadthFirst {
    queue: VecDeque<Coord>,
    parents: ParentMap,
}

impl BreadthFirst {
    pub fn new(start: Coord) -> BreadthFirst {
        let mut parents = ParentMap::default();
        parents.insert(start, None);
        BreadthFirst {
            queue: VecDeque::from([start]),
            parents,
        }
    }
}

impl Frontier for BreadthFirst {
    fn pop(&mut self) -> Option<Coord> {
        self.queue.pop_front()
    }

    fn expand(&mut self, grid: &Grid, node: Coord) {
        for neighbour in grid.neighbours_of(node) {
            if !self.parents.contains_key(&neighbour) {
                self.parents.insert(neighbour, Some(node));
                self.queue.push_back(neighbour);
            }
        }
    }

    fn parents(&self) -> &ParentMap {
        &self.parents
    }
}
