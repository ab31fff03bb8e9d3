use core::fmt;

use itertools::Itertools;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::{Cell, Coord, Direction};
use crate::palette::Palette;
use crate::Path;

/// [Grid] owns a fixed `rows x cols` arena of [Cell]s stored row-major, so a [Coord] maps to its
/// cell in O(1). In addition to the cells it maintains connected components of the open cells
/// using a [UnionFind] structure.
///
/// Blocked flags only change through [set_blocked](Grid::set_blocked) and
/// [set_wall](Grid::set_wall). Changing them while a search is in progress is allowed by the
/// borrow checker (through [Search::grid_mut](crate::Search::grid_mut)) but gives unspecified
/// search results.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    palette: Palette,
    pub(crate) components: UnionFind<usize>,
    pub(crate) components_dirty: bool,
}

impl Grid {
    /// Creates a grid of open cells painted with the default palette colour.
    pub fn new(rows: usize, cols: usize) -> Grid {
        Grid::with_palette(rows, cols, Palette::default())
    }

    pub fn with_palette(rows: usize, cols: usize, palette: Palette) -> Grid {
        let cells = (0..rows)
            .cartesian_product(0..cols)
            .map(|(row, col)| Cell::new(Coord::new(row, col), palette.default))
            .collect();
        let mut grid = Grid {
            rows,
            cols,
            cells,
            palette,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn ix(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then_some(coord.row * self.cols + coord.col)
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.ix(coord).map(|ix| &self.cells[ix])
    }

    /// Mutable access to a cell, e.g. to change its colour. The blocked flag is not reachable
    /// from here.
    pub fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.ix(coord).map(move |ix| &mut self.cells[ix])
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Whether `coord` is inside the grid and not blocked.
    pub fn is_open(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(|cell| !cell.blocked)
    }

    /// The open cells adjacent to `coord`, always in the order up, down, left, right.
    pub fn neighbours_of(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        Direction::CARDINAL
            .into_iter()
            .filter_map(|dir| coord.step(dir))
            .filter(|&n| self.is_open(n))
            .collect()
    }

    /// Updates the blocked flag of a cell. Joins newly connected components and flags the
    /// components as dirty if components are (potentially) broken apart into multiple.
    /// Returns [false] if `coord` is outside the grid.
    pub fn set_blocked(&mut self, coord: Coord, blocked: bool) -> bool {
        let Some(ix) = self.ix(coord) else {
            return false;
        };
        let was_blocked = self.cells[ix].blocked;
        self.cells[ix].blocked = blocked;
        if blocked {
            if !was_blocked {
                self.components_dirty = true;
            }
        } else {
            for n in self.neighbours_of(coord) {
                if let Some(n_ix) = self.ix(n) {
                    self.components.union(ix, n_ix);
                }
            }
        }
        true
    }

    /// Sets the blocked flag and paints the cell with the wall or default colour.
    pub fn set_wall(&mut self, coord: Coord, wall: bool) -> bool {
        if !self.set_blocked(coord, wall) {
            return false;
        }
        let color = if wall {
            self.palette.wall
        } else {
            self.palette.default
        };
        if let Some(cell) = self.cell_mut(coord) {
            cell.color = color;
        }
        true
    }

    /// Opens every cell and repaints it with the default colour.
    pub fn clear_walls(&mut self) {
        let default = self.palette.default;
        for cell in self.cells.iter_mut() {
            cell.blocked = false;
            cell.color = default;
        }
        self.generate_components();
    }

    /// Removes the colours left by a search and by [paint_path](Grid::paint_path). Walls keep
    /// the wall colour, every open cell goes back to the default.
    pub fn clear_trace(&mut self) {
        let Palette { default, wall, .. } = self.palette;
        for cell in self.cells.iter_mut() {
            cell.color = if cell.blocked { wall } else { default };
        }
    }

    /// Paints the interior of a path, leaving the start and end markers untouched.
    pub fn paint_path(&mut self, path: &Path) {
        let color = self.palette.path;
        if path.len() < 3 {
            return;
        }
        for &coord in &path[1..path.len() - 1] {
            if let Some(cell) = self.cell_mut(coord) {
                cell.color = color;
            }
        }
    }

    pub(crate) fn mark_explored(&mut self, coord: Coord) {
        let color = self.palette.explored;
        if let Some(cell) = self.cell_mut(coord) {
            cell.color = color;
        }
    }

    /// Retrieves the component id a given [Coord] belongs to.
    pub fn get_component(&self, coord: Coord) -> Option<usize> {
        self.ix(coord).map(|ix| self.components.find(ix))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: Coord, goal: Coord) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: Coord, goal: Coord) -> bool {
        match (self.ix(start), self.ix(goal)) {
            (Some(start_ix), Some(goal_ix)) => !self.components.equiv(start_ix, goal_ix),
            _ => true,
        }
    }

    /// All open cells on the same component as `coord`, in row-major order. Empty for blocked or
    /// out of bounds coordinates.
    pub fn component(&self, coord: Coord) -> Vec<Coord> {
        let Some(ix) = self.ix(coord).filter(|&ix| !self.cells[ix].blocked) else {
            return Vec::new();
        };
        self.cells
            .iter()
            .enumerate()
            .filter(|(other, cell)| !cell.blocked && self.components.equiv(ix, *other))
            .map(|(_, cell)| cell.coord())
            .collect()
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            debug!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up grid neighbours to the same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for ix in 0..self.cells.len() {
            if self.cells[ix].blocked {
                continue;
            }
            let coord = self.cells[ix].coord();
            let joined = [Direction::Down, Direction::Right]
                .into_iter()
                .filter_map(|dir| coord.step(dir))
                .filter(|&n| self.is_open(n))
                .filter_map(|n| self.ix(n))
                .collect::<SmallVec<[usize; 2]>>();
            for n_ix in joined {
                self.components.union(ix, n_ix);
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line: String = row
                .iter()
                .map(|cell| if cell.blocked { '#' } else { '.' })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
