//! # grid_traversal
//!
//! Stepwise pathfinding on a 4-connected grid. Four interchangeable engines,
//! [depth-first](solver::dfs()), [breadth-first](solver::bfs()), [Dijkstra](solver::dijkstra()) and
//! [A*](solver::astar()) with the Manhattan heuristic, all share one resumable state machine: every
//! step takes one cell off the frontier and reports it as a [Visit], and the final step yields
//! the reconstructed path (or [None]). This makes it possible to drive a search at any pace, e.g.
//! one step per animation frame, and to repaint the [Grid] between steps.
//!
//! ```
//! use grid_traversal::{bfs, Coord, Grid};
//!
//! let mut grid = Grid::new(3, 3);
//! grid.set_wall(Coord::new(1, 1), true);
//! let mut search = bfs(&mut grid, Coord::new(0, 0), Coord::new(2, 2));
//! let visited = search.by_ref().count();
//! assert_eq!(visited, 8);
//! assert_eq!(search.path().map(|p| p.len()), Some(5));
//! ```
//!
//! All edges cost one and movement is cardinal only. Neighbours are always considered in the
//! order up, down, left, right, which fixes the visitation order of every engine.
mod cell;
pub mod error;
mod grid;
mod palette;
pub mod parents;
mod scenario;
pub mod solver;

pub use crate::cell::{Cell, Coord, Direction};
pub use crate::error::{ParseAlgorithmError, ParseScenarioError};
pub use crate::grid::Grid;
pub use crate::palette::{Color, Palette};
pub use crate::parents::{reconstruct_path, ParentMap};
pub use crate::scenario::Scenario;
pub use crate::solver::astar::manhattan;
pub use crate::solver::{
    astar, bfs, dfs, dijkstra, Algorithm, Frontier, Outcome, Search, Step, Traversal, Visit,
};

use itertools::Itertools;

/// Start-to-end sequence of cell identities, both endpoints included.
pub type Path = Vec<Coord>;

/// Distance and score type of the weighted engines.
pub type Cost = u32;

/// Every move between neighbouring cells costs the same.
pub const EDGE_COST: Cost = 1;

/// Checks that consecutive cells of `path` are open cardinal neighbours on `grid`. An empty path
/// is not valid.
pub fn is_valid_path(grid: &Grid, path: &Path) -> bool {
    !path.is_empty()
        && path.iter().all(|&c| grid.is_open(c))
        && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
}
