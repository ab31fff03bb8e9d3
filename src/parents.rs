use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use log::warn;

use crate::{Coord, Path};

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Maps every discovered cell to the cell it was reached from. The start maps to [None].
/// Entries keep discovery order, which makes the map usable as the seen set of DFS and BFS.
pub type ParentMap = FxIndexMap<Coord, Option<Coord>>;

/// Walks parent links back from `goal` and returns the start-to-goal sequence. Only returns
/// [None] if `goal` was never discovered.
pub fn reconstruct_path(parents: &ParentMap, goal: Coord) -> Option<Path> {
    if !parents.contains_key(&goal) {
        warn!("Reconstruction requested for {} which was never discovered", goal);
        return None;
    }
    let mut path: Path = std::iter::successors(Some(goal), |node| {
        parents.get(node).copied().flatten()
    })
    .collect();
    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_links_to_start() {
        let mut parents = ParentMap::default();
        parents.insert(Coord::new(0, 0), None);
        parents.insert(Coord::new(0, 1), Some(Coord::new(0, 0)));
        parents.insert(Coord::new(1, 1), Some(Coord::new(0, 1)));
        parents.insert(Coord::new(1, 0), Some(Coord::new(0, 0)));
        assert_eq!(
            reconstruct_path(&parents, Coord::new(1, 1)),
            Some(vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)])
        );
        assert_eq!(
            reconstruct_path(&parents, Coord::new(0, 0)),
            Some(vec![Coord::new(0, 0)])
        );
    }

    #[test]
    fn undiscovered_goal_has_no_path() {
        let mut parents = ParentMap::default();
        parents.insert(Coord::new(0, 0), None);
        assert_eq!(reconstruct_path(&parents, Coord::new(4, 4)), None);
    }
}
