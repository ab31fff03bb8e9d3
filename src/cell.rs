use core::fmt;

use crate::palette::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position of a cell as a 0-indexed `(row, col)` pair. Doubles as the identity of the cell at
/// that position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// The adjacent coordinate in the given direction, or [None] when stepping off the top or
    /// left edge. The bottom and right edges depend on the grid and are checked there.
    pub fn step(&self, dir: Direction) -> Option<Coord> {
        match dir {
            Direction::Up => self.row.checked_sub(1).map(|row| Coord::new(row, self.col)),
            Direction::Down => Some(Coord::new(self.row + 1, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|col| Coord::new(self.row, col)),
            Direction::Right => Some(Coord::new(self.row, self.col + 1)),
        }
    }

    pub fn manhattan_distance(&self, other: &Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether the two coordinates differ by exactly one cardinal step.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

/// Uses the `w{col}-h{row}` form of cell ids.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "w{}-h{}", self.col, self.row)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Coord {
        Coord::new(row, col)
    }
}

/// Cardinal movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbour expansion order. Changing it changes every DFS and BFS trace.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// A single grid cell. The blocked flag is owned by [Grid](crate::Grid) so that component
/// bookkeeping stays in sync; the colour may be changed freely.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    coord: Coord,
    pub(crate) blocked: bool,
    pub color: Color,
}

impl Cell {
    pub(crate) fn new(coord: Coord, color: Color) -> Cell {
        Cell {
            coord,
            blocked: false,
            color,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Identity of the cell. A pure function of its coordinate.
    pub fn id(&self) -> Coord {
        self.coord
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
