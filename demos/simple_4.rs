use grid_traversal::{astar, Coord, Grid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end

fn main() {
    env_logger::init();
    let mut grid = Grid::new(3, 3);
    grid.set_wall(Coord::new(1, 1), true);
    println!("{}", grid);
    let start = Coord::new(0, 0);
    let end = Coord::new(2, 2);
    let outcome = astar(&mut grid, start, end).run();
    println!("Visited {} cells", outcome.visits.len());
    println!("Path:");
    for p in outcome.path.unwrap_or_default() {
        println!("{:?}", p);
    }
}
