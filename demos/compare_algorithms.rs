use grid_traversal::{Algorithm, Scenario};

// Runs every engine on the same map and compares how much of it each one explores before
// finding a path.

fn main() {
    env_logger::init();
    let scenario: Scenario = "
        S.........
        .########.
        .#......#.
        .#.####.#.
        .#.#G.#.#.
        .#.#..#.#.
        .#.##.#.#.
        .#....#...
        .######.#.
        ..........
    "
    .parse()
    .expect("demo map is well formed");
    println!("{}", scenario.grid);
    for algorithm in Algorithm::ALL {
        let mut grid = scenario.grid.clone();
        let outcome = algorithm.search(&mut grid, scenario.start, scenario.goal).run();
        match outcome.path {
            Some(path) => println!(
                "{:>8}: visited {:>3} cells, path of {:>2} cells",
                algorithm,
                outcome.visits.len(),
                path.len()
            ),
            None => println!(
                "{:>8}: visited {:>3} cells, no path",
                algorithm,
                outcome.visits.len()
            ),
        }
    }
}
