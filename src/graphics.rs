use gridpath_search::{Coord, Planner};
use macroquad::prelude::*;

use crate::layout::Layout;

// Function to configure the macroquad window
pub fn window_conf() -> Conf {
    Conf {
        window_title: "Gridpath A* Solver".to_string(),
        window_width: 640,
        window_height: 680,
        high_dpi: true,
        ..Default::default()
    }
}

const HELP_TEXT: &str = "click: obstacle  shift+click: start  ctrl+click: goal  R: scatter  C: clear";

/// Fill color of a cell: goal over start over obstacle over visited.
fn cell_color(planner: &Planner, coord: Coord, index: usize) -> Color {
    let grid = planner.grid();
    if coord == grid.goal() {
        RED
    } else if coord == grid.start() {
        GREEN
    } else if matches!(grid.is_obstacle(coord), Ok(true)) {
        GRAY
    } else if grid.search_state().get(index).visited {
        BLUE
    } else {
        DARKBLUE
    }
}

/// Draws the lattice, the current path and the status line.
pub fn draw_frame(planner: &Planner, layout: &Layout) {
    clear_background(BLACK);
    let grid = planner.grid();
    let size = layout.fill_size();

    for index in 0..grid.total_cells() {
        let coord = grid.coord_of(index);
        let corner = layout.cell_origin(coord);
        draw_rectangle(corner.x, corner.y, size, size, cell_color(planner, coord, index));
    }

    if let Some(path) = planner.path() {
        for step in path.windows(2) {
            let a = layout.cell_center(step[0]);
            let b = layout.cell_center(step[1]);
            draw_line(a.x, a.y, b.x, b.y, 2.0, YELLOW);
        }
    }

    let report = planner.last_report();
    let status = match report.path_cost {
        Some(cost) => format!("path cost {:.2}, {} cells expanded", cost, report.expanded),
        None => format!("no path, {} cells expanded", report.expanded),
    };
    let top = layout.lattice_height(grid);
    draw_text(&status, 10.0, top + 16.0, 20.0, WHITE);
    draw_text(HELP_TEXT, 10.0, top + 34.0, 16.0, LIGHTGRAY);
}
