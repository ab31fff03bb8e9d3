//! Error types for parsing grids and algorithm names

use thiserror::Error;

/// Failure to read a [Scenario](crate::Scenario) from an ASCII map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseScenarioError {
    #[error("map contains no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile {tile:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, tile: char },

    #[error("map has no {0:?} marker")]
    MissingMarker(char),

    #[error("map has more than one {0:?} marker")]
    DuplicateMarker(char),
}

/// Unknown name passed to [Algorithm::from_str](crate::Algorithm).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm {0:?}, expected one of dfs, bfs, dijkstra, a-star")]
pub struct ParseAlgorithmError(pub String);
