use core::fmt;
use std::cmp::Ordering;
use std::str::FromStr;

use fxhash::FxHashMap;
use log::{debug, trace};
use num_traits::Bounded;

use crate::error::ParseAlgorithmError;
use crate::parents::{reconstruct_path, ParentMap};
use crate::{Coord, Grid, Path};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use astar::Astar;
use bfs::BreadthFirst;
use dfs::DepthFirst;
use dijkstra::Dijkstra;

/// Emitted once for every cell taken off the frontier, in processing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Visit {
    pub cell: Coord,
    pub is_goal: bool,
}

/// Result of advancing a search by one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Visit(Visit),
    /// The search is over. Keeps being returned by further steps.
    Finished(Option<Path>),
}

/// Every event of a search driven to completion, together with its result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub visits: Vec<Visit>,
    pub path: Option<Path>,
}

impl Outcome {
    pub fn visited_cells(&self) -> Vec<Coord> {
        self.visits.iter().map(|v| v.cell).collect()
    }
}

/// The part of a search that differs between algorithms: how cells enter and leave the
/// frontier. Everything else lives in [Traversal].
pub trait Frontier {
    /// Takes the next cell to process off the frontier, silently dropping entries that were
    /// superseded or already closed. [None] once the frontier is exhausted.
    fn pop(&mut self) -> Option<Coord>;

    /// Adds the open neighbours of `node` to the frontier, recording their parents.
    fn expand(&mut self, grid: &Grid, node: Coord);

    fn parents(&self) -> &ParentMap;
}

/// Resumable search over a [Grid]. Each call to [step](Traversal::step) finishes the cell
/// emitted by the previous step (returns the path if it was the goal, otherwise paints it as
/// explored and expands it) and then emits the next cell off the frontier.
///
/// The grid is passed per step and may be repainted between steps. Its blocked flags must not
/// change until the search has finished.
#[derive(Clone, Debug)]
pub struct Traversal<F> {
    start: Coord,
    goal: Coord,
    frontier: Option<F>,
    pending: Option<Coord>,
    outcome: Option<Option<Path>>,
    visited: usize,
}

impl<F: Frontier> Traversal<F> {
    /// Builds the frontier with `make(start, goal)`, unless either endpoint lies outside the grid
    /// in which case the traversal is finished from the start with no path.
    pub fn new<M>(grid: &Grid, start: Coord, goal: Coord, make: M) -> Traversal<F>
    where
        M: FnOnce(Coord, Coord) -> F,
    {
        let valid = grid.contains(start) && grid.contains(goal);
        if !valid {
            debug!("Endpoint {} or {} is outside the grid, no search", start, goal);
        }
        Traversal {
            start,
            goal,
            frontier: valid.then(|| make(start, goal)),
            pending: None,
            outcome: (!valid).then_some(None),
            visited: 0,
        }
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Number of visitation events emitted so far.
    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// The final result, [None] while the search is still running.
    pub fn outcome(&self) -> Option<&Option<Path>> {
        self.outcome.as_ref()
    }

    pub fn step(&mut self, grid: &mut Grid) -> Step {
        if let Some(path) = &self.outcome {
            return Step::Finished(path.clone());
        }
        let Some(frontier) = self.frontier.as_mut() else {
            return self.finish(None);
        };
        if let Some(current) = self.pending.take() {
            if current == self.goal {
                let path = reconstruct_path(frontier.parents(), self.goal);
                return self.finish(path);
            }
            if current != self.start {
                grid.mark_explored(current);
            }
            frontier.expand(grid, current);
        }
        match frontier.pop() {
            Some(cell) => {
                let is_goal = cell == self.goal;
                trace!("Visiting {} (goal: {})", cell, is_goal);
                self.visited += 1;
                self.pending = Some(cell);
                Step::Visit(Visit { cell, is_goal })
            }
            None => self.finish(None),
        }
    }

    fn finish(&mut self, path: Option<Path>) -> Step {
        match &path {
            Some(p) => debug!(
                "Path of {} cells from {} to {} after {} visits",
                p.len(),
                self.start,
                self.goal,
                self.visited
            ),
            None => debug!(
                "No path from {} to {} after {} visits",
                self.start, self.goal, self.visited
            ),
        }
        self.frontier = None;
        self.pending = None;
        self.outcome = Some(path.clone());
        Step::Finished(path)
    }
}

/// A [Traversal] bound to the grid it runs on for the duration of one search. Iterating yields
/// the [Visit] events; once the iterator is exhausted [path](Search::path) holds the result.
#[derive(Debug)]
pub struct Search<'g, F> {
    grid: &'g mut Grid,
    traversal: Traversal<F>,
}

impl<'g, F: Frontier> Search<'g, F> {
    pub fn new(grid: &'g mut Grid, traversal: Traversal<F>) -> Search<'g, F> {
        Search { grid, traversal }
    }

    pub fn step(&mut self) -> Step {
        self.traversal.step(&mut *self.grid)
    }

    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// Access for repainting between steps. See [Traversal] for what may not be changed.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut *self.grid
    }

    pub fn traversal(&self) -> &Traversal<F> {
        &self.traversal
    }

    pub fn is_finished(&self) -> bool {
        self.traversal.is_finished()
    }

    /// The path found, [None] if there is none or the search has not finished.
    pub fn path(&self) -> Option<&Path> {
        self.traversal.outcome().and_then(|p| p.as_ref())
    }

    /// Drives the search to the end, collecting every event.
    pub fn run(mut self) -> Outcome {
        let mut visits = Vec::new();
        loop {
            match self.step() {
                Step::Visit(visit) => visits.push(visit),
                Step::Finished(path) => return Outcome { visits, path },
            }
        }
    }
}

impl<F: Frontier> Iterator for Search<'_, F> {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        match self.step() {
            Step::Visit(visit) => Some(visit),
            Step::Finished(_) => None,
        }
    }
}

/// Uninterrupted depth-first search.
pub fn dfs(grid: &mut Grid, start: Coord, end: Coord) -> Search<'_, DepthFirst> {
    let traversal = Traversal::new(grid, start, end, |start, _| DepthFirst::new(start));
    Search::new(grid, traversal)
}

/// Breadth-first search. Finds a shortest path.
pub fn bfs(grid: &mut Grid, start: Coord, end: Coord) -> Search<'_, BreadthFirst> {
    let traversal = Traversal::new(grid, start, end, |start, _| BreadthFirst::new(start));
    Search::new(grid, traversal)
}

/// Uniform-cost search. Finds a shortest path.
pub fn dijkstra(grid: &mut Grid, start: Coord, end: Coord) -> Search<'_, Dijkstra> {
    let traversal = Traversal::new(grid, start, end, |start, _| Dijkstra::new(start));
    Search::new(grid, traversal)
}

/// A* guided by the Manhattan distance to `end`. An open cell keeps the queue key it was pushed
/// with when a shorter route to it is found, so on some layouts the path is longer than the
/// shortest one.
pub fn astar(grid: &mut Grid, start: Coord, end: Coord) -> Search<'_, Astar> {
    let traversal = Traversal::new(grid, start, end, Astar::new);
    Search::new(grid, traversal)
}

/// Selects one of the four search engines at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    #[cfg_attr(feature = "serde", serde(rename = "dfs"))]
    DepthFirst,
    #[cfg_attr(feature = "serde", serde(rename = "bfs"))]
    BreadthFirst,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "dfs",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "a-star",
        }
    }

    /// Whether the paths found are guaranteed to have minimal length.
    pub fn is_optimal(&self) -> bool {
        matches!(self, Algorithm::BreadthFirst | Algorithm::Dijkstra)
    }

    pub fn search(self, grid: &mut Grid, start: Coord, end: Coord) -> Search<'_, AnyFrontier> {
        let traversal = Traversal::new(grid, start, end, |start, goal| match self {
            Algorithm::DepthFirst => AnyFrontier::DepthFirst(DepthFirst::new(start)),
            Algorithm::BreadthFirst => AnyFrontier::BreadthFirst(BreadthFirst::new(start)),
            Algorithm::Dijkstra => AnyFrontier::Dijkstra(Dijkstra::new(start)),
            Algorithm::AStar => AnyFrontier::Astar(Astar::new(start, goal)),
        });
        Search::new(grid, traversal)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Algorithm, ParseAlgorithmError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Algorithm::DepthFirst),
            "bfs" => Ok(Algorithm::BreadthFirst),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "a-star" | "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

/// Frontier of whichever engine an [Algorithm] picked.
#[derive(Clone, Debug)]
pub enum AnyFrontier {
    DepthFirst(DepthFirst),
    BreadthFirst(BreadthFirst),
    Dijkstra(Dijkstra),
    Astar(Astar),
}

impl Frontier for AnyFrontier {
    fn pop(&mut self) -> Option<Coord> {
        match self {
            AnyFrontier::DepthFirst(f) => f.pop(),
            AnyFrontier::BreadthFirst(f) => f.pop(),
            AnyFrontier::Dijkstra(f) => f.pop(),
            AnyFrontier::Astar(f) => f.pop(),
        }
    }

    fn expand(&mut self, grid: &Grid, node: Coord) {
        match self {
            AnyFrontier::DepthFirst(f) => f.expand(grid, node),
            AnyFrontier::BreadthFirst(f) => f.expand(grid, node),
            AnyFrontier::Dijkstra(f) => f.expand(grid, node),
            AnyFrontier::Astar(f) => f.expand(grid, node),
        }
    }

    fn parents(&self) -> &ParentMap {
        match self {
            AnyFrontier::DepthFirst(f) => f.parents(),
            AnyFrontier::BreadthFirst(f) => f.parents(),
            AnyFrontier::Dijkstra(f) => f.parents(),
            AnyFrontier::Astar(f) => f.parents(),
        }
    }
}

/// Heap entry ordered so that [BinaryHeap](std::collections::BinaryHeap) pops the smallest
/// priority first, and among equal priorities the one pushed first.
#[derive(Clone, Debug)]
pub(crate) struct SmallestCostHolder<K> {
    pub priority: K,
    pub seq: usize,
    pub node: Coord,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.seq == other.seq
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            s => s,
        }
    }
}

/// Score of `node`, positive infinity if it has none yet.
pub(crate) fn score_of<K: Bounded + Copy>(scores: &FxHashMap<Coord, K>, node: &Coord) -> K {
    scores.get(node).copied().unwrap_or_else(K::max_value)
}
