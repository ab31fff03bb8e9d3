use std::str::FromStr;

use crate::error::ParseScenarioError;
use crate::{Coord, Grid};

/// A grid together with search endpoints, read from an ASCII map.
///
/// One line per row: `.` is open, `#` is a wall, `S` marks the start and `G` the goal (both
/// open). Leading and trailing blank lines and indentation are ignored.
///
/// ```
/// use grid_traversal::Scenario;
///
/// let scenario: Scenario = "
///     S.#
///     ..G
/// ".parse().unwrap();
/// assert_eq!(scenario.grid.cols(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Scenario {
    pub grid: Grid,
    pub start: Coord,
    pub goal: Coord,
}

impl FromStr for Scenario {
    type Err = ParseScenarioError;

    fn from_str(s: &str) -> Result<Scenario, ParseScenarioError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .skip_while(|line| line.is_empty())
            .collect();
        let lines = match lines.iter().rposition(|line| !line.is_empty()) {
            Some(last) => &lines[..=last],
            None => return Err(ParseScenarioError::Empty),
        };
        let cols = lines[0].chars().count();
        let mut grid = Grid::new(lines.len(), cols);
        let mut start = None;
        let mut goal = None;
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(ParseScenarioError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, tile) in line.chars().enumerate() {
                let coord = Coord::new(row, col);
                match tile {
                    '.' => {}
                    '#' => {
                        grid.set_wall(coord, true);
                    }
                    'S' => place_marker(&mut start, coord, tile)?,
                    'G' => place_marker(&mut goal, coord, tile)?,
                    _ => return Err(ParseScenarioError::UnknownTile { row, col, tile }),
                }
            }
        }
        grid.update();
        Ok(Scenario {
            grid,
            start: start.ok_or(ParseScenarioError::MissingMarker('S'))?,
            goal: goal.ok_or(ParseScenarioError::MissingMarker('G'))?,
        })
    }
}

fn place_marker(
    slot: &mut Option<Coord>,
    coord: Coord,
    tile: char,
) -> Result<(), ParseScenarioError> {
    match slot.replace(coord) {
        Some(_) => Err(ParseScenarioError::DuplicateMarker(tile)),
        None => Ok(()),
    }
}
