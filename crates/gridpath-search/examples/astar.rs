use gridpath_search::{Coord, Grid, reconstruct_path, solve};
use std::collections::HashSet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Same lattice and endpoints as the interactive frontend's defaults
    let mut grid = Grid::new(20, 20)?;

    // A wall with a single gap at the bottom, plus a small block near the goal
    for row in 0..17 {
        grid.set_obstacle(Coord::new(8, row), true)?;
    }
    for col in 12..15 {
        for row in 9..13 {
            grid.set_obstacle(Coord::new(col, row), true)?;
        }
    }

    println!("Start: {}", grid.start());
    println!("Goal: {}", grid.goal());

    let report = solve(&mut grid);
    println!("{}", report);

    match reconstruct_path(&grid) {
        Some(path) => {
            println!("\nPath found with {} waypoints!", path.len());
            let path_set: HashSet<Coord> = path.into_iter().collect();
            print_grid(&grid, &path_set)?;
        }
        None => {
            println!("\nNo path found.");
            print_grid(&grid, &HashSet::new())?;
        }
    }

    Ok(())
}

fn print_grid(grid: &Grid, path: &HashSet<Coord>) -> Result<(), Box<dyn std::error::Error>> {
    for row in 0..grid.height() {
        print!("{:>2} ", row);
        for col in 0..grid.width() {
            let c = Coord::new(col, row);
            let symbol = if c == grid.start() {
                'S'
            } else if c == grid.goal() {
                'G'
            } else if grid.is_obstacle(c)? {
                'X'
            } else if path.contains(&c) {
                '*'
            } else if grid.is_visited(c)? {
                'o'
            } else {
                '.'
            };
            print!("{} ", symbol);
        }
        println!();
    }

    // Column labels, last digit only
    print!("   ");
    for col in 0..grid.width() {
        print!("{} ", col % 10);
    }
    println!();
    Ok(())
}
