use std::collections::BinaryHeap;

use fxhash::{FxHashMap, FxHashSet};
use num_traits::Zero;

use crate::parents::ParentMap;
use crate::solver::{score_of, Frontier, SmallestCostHolder};
use crate::{Coord, Cost, Grid, EDGE_COST};

/// Manhattan distance between two cells. Admissible and consistent for unit-cost 4-neighbour
/// movement. Diagonal moves or weighted terrain would need a different estimate.
pub fn manhattan(a: &Coord, b: &Coord) -> Cost {
    a.manhattan_distance(b) as Cost
}

/// A* frontier ordered by `g + manhattan(node, goal)`.
///
/// There is no closed set: a cell that was already processed is reopened if a strictly shorter
/// route to it turns up. A cell is in the open set at most once. Lowering the score of a cell
/// that is still open updates its scores and parent but leaves its heap entry, and with it its
/// queue position, as it was.
#[derive(Clone, Debug)]
pub struct Astar {
    goal: Coord,
    to_see: BinaryHeap<SmallestCostHolder<Cost>>,
    open: FxHashSet<Coord>,
    g_score: FxHashMap<Coord, Cost>,
    f_score: FxHashMap<Coord, Cost>,
    parents: ParentMap,
    seq: usize,
}

impl Astar {
    pub fn new(start: Coord, goal: Coord) -> Astar {
        let mut frontier = Astar {
            goal,
            to_see: BinaryHeap::new(),
            open: FxHashSet::default(),
            g_score: FxHashMap::default(),
            f_score: FxHashMap::default(),
            parents: ParentMap::default(),
            seq: 0,
        };
        let h = manhattan(&start, &goal);
        frontier.g_score.insert(start, Zero::zero());
        frontier.f_score.insert(start, h);
        frontier.parents.insert(start, None);
        frontier.push(start, h);
        frontier
    }

    pub fn g_score(&self, node: &Coord) -> Option<Cost> {
        self.g_score.get(node).copied()
    }

    pub fn f_score(&self, node: &Coord) -> Option<Cost> {
        self.f_score.get(node).copied()
    }

    pub fn is_open(&self, node: &Coord) -> bool {
        self.open.contains(node)
    }

    fn push(&mut self, node: Coord, f: Cost) {
        self.to_see.push(SmallestCostHolder {
            priority: f,
            seq: self.seq,
            node,
        });
        self.open.insert(node);
        self.seq += 1;
    }
}

impl Frontier for Astar {
    fn pop(&mut self) -> Option<Coord> {
        let SmallestCostHolder { node, .. } = self.to_see.pop()?;
        self.open.remove(&node);
        Some(node)
    }

    fn expand(&mut self, grid: &Grid, node: Coord) {
        let g = score_of(&self.g_score, &node);
        for neighbour in grid.neighbours_of(node) {
            let tentative = g + EDGE_COST;
            if tentative < score_of(&self.g_score, &neighbour) {
                let f = tentative + manhattan(&neighbour, &self.goal);
                self.parents.insert(neighbour, Some(node));
                self.g_score.insert(neighbour, tentative);
                self.f_score.insert(neighbour, f);
                if !self.open.contains(&neighbour) {
                    self.push(neighbour, f);
                }
            }
        }
    }

    fn parents(&self) -> &ParentMap {
        &self.parents
    }
}
