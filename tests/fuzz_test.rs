/// Fuzzes the engines by checking for many random grids that a path is found exactly when the
/// goal is on the same connected component as the start, that every path is a valid walk, that
/// the optimal engines agree on its length, and that a failed search covers the whole component.
use std::collections::HashSet;

use grid_traversal::{is_valid_path, Algorithm, Coord, Grid, Outcome};
use rand::prelude::*;

fn random_grid(rows: usize, cols: usize, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            grid.set_wall(Coord::new(row, col), rng.gen_bool(0.4));
        }
    }
    grid
}

fn visualize_grid(grid: &Grid, start: &Coord, end: &Coord) {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let c = Coord::new(row, col);
            if *start == c {
                print!("S");
            } else if *end == c {
                print!("G");
            } else if !grid.is_open(c) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn run(algorithm: Algorithm, grid: &mut Grid, start: Coord, end: Coord) -> Outcome {
    algorithm.search(grid, start, end).run()
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Coord::new(0, 0);
    let end = Coord::new(N - 1, N - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        grid.set_wall(start, false);
        grid.set_wall(end, false);
        grid.update();
        let reachable = grid.reachable(start, end);
        let component: HashSet<Coord> = grid.component(start).into_iter().collect();

        let shortest = run(Algorithm::BreadthFirst, &mut grid, start, end)
            .path
            .map(|p| p.len());
        for algorithm in Algorithm::ALL {
            let outcome = run(algorithm, &mut grid, start, end);
            if outcome.path.is_some() != reachable {
                visualize_grid(&grid, &start, &end);
            }
            assert_eq!(outcome.path.is_some(), reachable, "{algorithm}");

            let visited: HashSet<Coord> = outcome.visited_cells().into_iter().collect();
            // A* reopens cells whose g drops after they were processed.
            if algorithm != Algorithm::AStar {
                assert_eq!(visited.len(), outcome.visits.len(), "{algorithm} revisited a cell");
            }
            assert!(visited.is_subset(&component), "{algorithm}");
            assert_eq!(outcome.visits.iter().filter(|v| v.is_goal).count(), reachable as usize);

            match &outcome.path {
                Some(path) => {
                    assert_eq!(path.first(), Some(&start));
                    assert_eq!(path.last(), Some(&end));
                    assert!(is_valid_path(&grid, path), "{algorithm}: {path:?}");
                    if algorithm.is_optimal() {
                        assert_eq!(Some(path.len()), shortest, "{algorithm}");
                    } else {
                        assert!(Some(path.len()) >= shortest);
                    }
                }
                None => assert_eq!(visited, component, "{algorithm}"),
            }
        }
    }
}

#[test]
fn fuzz_idempotent() {
    const N_GRIDS: usize = 200;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let rows = rng.gen_range(1..12);
        let cols = rng.gen_range(1..12);
        let mut grid = random_grid(rows, cols, &mut rng);
        let start = Coord::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
        let end = Coord::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
        for algorithm in Algorithm::ALL {
            let first = run(algorithm, &mut grid, start, end);
            let second = run(algorithm, &mut grid, start, end);
            assert_eq!(first, second, "{algorithm}");
        }
    }
}

/// Without walls every engine but DFS finds the Manhattan distance, from every start.
#[test]
fn open_grid_paths_are_manhattan() {
    let mut grid = Grid::new(5, 6);
    let end = Coord::new(4, 5);
    for row in 0..5 {
        for col in 0..6 {
            let start = Coord::new(row, col);
            for algorithm in [Algorithm::BreadthFirst, Algorithm::Dijkstra, Algorithm::AStar] {
                let path = run(algorithm, &mut grid, start, end).path.unwrap();
                assert_eq!(path.len(), start.manhattan_distance(&end) + 1);
            }
        }
    }
}
