use grid_traversal::{Algorithm, Grid, Scenario, Step};

// Drives a search one step at a time the way a renderer would, printing the grid with
// explored cells after every few steps. Pass the algorithm name as the first argument.

const MAP: &str = "
    S.....#.....
    .####.#.###.
    .#....#...#.
    .#.####.#.#.
    .#......#..G
";

fn render(grid: &Grid, scenario: &Scenario) {
    let explored = grid.palette().explored;
    for row in 0..grid.rows() {
        let line: String = (0..grid.cols())
            .map(|col| {
                let coord = (row, col).into();
                match grid.cell(coord) {
                    _ if coord == scenario.start => 'S',
                    _ if coord == scenario.goal => 'G',
                    Some(cell) if cell.is_blocked() => '#',
                    Some(cell) if cell.color == explored => 'o',
                    Some(cell) if cell.color == grid.palette().path => '*',
                    _ => '.',
                }
            })
            .collect();
        println!("{}", line);
    }
    println!();
}

fn main() {
    env_logger::init();
    let algorithm: Algorithm = match std::env::args().nth(1) {
        Some(name) => match name.parse() {
            Ok(algorithm) => algorithm,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => Algorithm::AStar,
    };
    let scenario: Scenario = match MAP.parse() {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let mut grid = scenario.grid.clone();
    let mut search = algorithm.search(&mut grid, scenario.start, scenario.goal);
    let mut steps = 0;
    let path = loop {
        match search.step() {
            Step::Visit(_) => {
                steps += 1;
                if steps % 10 == 0 {
                    println!("{} after {} steps:", algorithm, steps);
                    render(search.grid(), &scenario);
                }
            }
            Step::Finished(path) => break path,
        }
    };
    match path {
        Some(path) => {
            grid.paint_path(&path);
            println!("{}: path of {} cells after {} steps", algorithm, path.len(), steps);
        }
        None => println!("{}: no path after {} steps", algorithm, steps),
    }
    render(&grid, &scenario);
}
