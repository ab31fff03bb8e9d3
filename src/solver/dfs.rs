use crate::parents::ParentMap;
use crate::solver::Frontier;
use crate::{Coord, Grid};

/// Depth-first frontier: a stack of cells. A cell counts as seen as soon as it is pushed, so it
/// is processed at most once and keeps the parent it was first discovered from.
#[derive(Clone, Debug)]
pub struct DepthFirst {
    stack: Vec<Coord>,
    parents: ParentMap,
}

impl DepthFirst {
    pub fn new(start: Coord) -> DepthFirst {
        let mut parents = ParentMap::default();
        parents.insert(start, None);
        DepthFirst {
            stack: vec![start],
            parents,
        }
    }
}

impl Frontier for DepthFirst {
    fn pop(&mut self) -> Option<Coord> {
        self.stack.pop()
    }

    fn expand(&mut self, grid: &Grid, node: Coord) {
        for neighbour in grid.neighbours_of(node) {
            if !self.parents.contains_key(&neighbour) {
                self.parents.insert(neighbour, Some(node));
                self.stack.push(neighbour);
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
    use crate::solver::dfs;

    /// The last pushed neighbour (right) is explored first.
    #[test]
    fn explores_right_before_down() {
        let mut grid = Grid::new(3, 3);
        let outcome = dfs(&mut grid, Coord::new(0, 0), Coord::new(2, 2)).run();
        let expected: Vec<Coord> = [(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]
            .into_iter()
            .map(Coord::from)
            .collect();
        assert_eq!(outcome.visited_cells(), expected);
        assert_eq!(outcome.path, Some(expected));
        assert!(outcome.visits.last().unwrap().is_goal);
    }

    /// Depth-first paths are not necessarily shortest.
    #[test]
    fn path_may_be_longer_than_shortest() {
        // |S.|
        // |..|
        // |G.|
        let mut grid = Grid::new(3, 2);
        let outcome = dfs(&mut grid, Coord::new(0, 0), Coord::new(2, 0)).run();
        let expected: Vec<Coord> = [(0, 0), (0, 1), (1, 1), (2, 1), (2, 0)]
            .into_iter()
            .map(Coord::from)
            .collect();
        assert_eq!(outcome.path, Some(expected));
    }

    #[test]
    fn blocked_goal_is_never_found() {
        let mut grid = Grid::new(2, 2);
        grid.set_blocked(Coord::new(1, 1), true);
        let outcome = dfs(&mut grid, Coord::new(0, 0), Coord::new(1, 1)).run();
        assert_eq!(outcome.path, None);
        assert_eq!(outcome.visits.len(), 3);
    }
}
