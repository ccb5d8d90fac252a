use gridpath_search::{Coord, Grid};
use macroquad::math::{Vec2, vec2};

/// Height reserved below the lattice for the status line.
pub const HUD_HEIGHT: f32 = 40.0;

/// Maps grid cells to screen pixels for the current window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Pitch between cell origins.
    pub cell: f32,
    /// Undrawn margin on the right and bottom of each cell.
    pub gap: f32,
    /// Screen position of cell (0, 0).
    pub origin: Vec2,
}

impl Layout {
    /// Largest square pitch that fits the grid above the status line, centered horizontally.
    pub fn fit(grid: &Grid, screen_width: f32, screen_height: f32, gap_ratio: f32) -> Self {
        let cols = grid.width() as f32;
        let rows = grid.height() as f32;
        let cell = (screen_width / cols)
            .min((screen_height - HUD_HEIGHT) / rows)
            .max(1.0);
        Layout {
            cell,
            gap: cell * gap_ratio.clamp(0.0, 0.9),
            origin: vec2(((screen_width - cell * cols) / 2.0).max(0.0), 0.0),
        }
    }

    /// Cell under a screen position, if any.
    pub fn cell_at(&self, grid: &Grid, position: Vec2) -> Option<Coord> {
        let local = (position - self.origin) / self.cell;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let coord = Coord::new(local.x as usize, local.y as usize);
        grid.contains(coord).then_some(coord)
    }

    /// Top-left corner of a cell's filled square.
    pub fn cell_origin(&self, coord: Coord) -> Vec2 {
        self.origin + vec2(coord.col as f32, coord.row as f32) * self.cell
    }

    /// Side of a cell's filled square.
    pub fn fill_size(&self) -> f32 {
        self.cell - self.gap
    }

    /// Center of a cell's filled square.
    pub fn cell_center(&self, coord: Coord) -> Vec2 {
        self.cell_origin(coord) + self.fill_size() / 2.0
    }

    /// Total height taken by the lattice.
    pub fn lattice_height(&self, grid: &Grid) -> f32 {
        self.cell * grid.height() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_square_window() {
        let grid = Grid::new(20, 20).unwrap();
        let layout = Layout::fit(&grid, 640.0, 640.0 + HUD_HEIGHT, 0.25);
        assert_eq!(layout.cell, 32.0);
        assert_eq!(layout.gap, 8.0);
        assert_eq!(layout.origin, vec2(0.0, 0.0));
        assert_eq!(layout.lattice_height(&grid), 640.0);
    }

    #[test]
    fn test_fit_centers_wide_window() {
        let grid = Grid::new(10, 10).unwrap();
        let layout = Layout::fit(&grid, 500.0, 300.0 + HUD_HEIGHT, 0.0);
        assert_eq!(layout.cell, 30.0);
        assert_eq!(layout.origin.x, 100.0);
    }

    #[test]
    fn test_cell_at_maps_clicks() {
        let grid = Grid::new(20, 20).unwrap();
        let layout = Layout::fit(&grid, 640.0, 640.0 + HUD_HEIGHT, 0.25);
        assert_eq!(layout.cell_at(&grid, vec2(33.0, 65.0)), Some(Coord::new(1, 2)));
        assert_eq!(layout.cell_at(&grid, vec2(639.0, 639.0)), Some(Coord::new(19, 19)));
        assert_eq!(layout.cell_at(&grid, vec2(10.0, 650.0)), None, "Status line is not a cell");
        assert_eq!(layout.cell_at(&grid, vec2(-1.0, 5.0)), None);
    }

    #[test]
    fn test_cell_center_inside_fill() {
        let grid = Grid::new(4, 4).unwrap();
        let layout = Layout::fit(&grid, 160.0, 160.0 + HUD_HEIGHT, 0.25);
        let center = layout.cell_center(Coord::new(1, 0));
        assert_eq!(center, vec2(40.0 + 15.0, 15.0));
        assert_eq!(layout.cell_at(&grid, center), Some(Coord::new(1, 0)));
    }
}
