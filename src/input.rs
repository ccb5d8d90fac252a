use gridpath_search::{Coord, Edit, Grid};
use macroquad::prelude::*;
use tracing::debug;

use crate::layout::Layout;

/// Translates this frame's mouse and keyboard state into at most one edit.
///
/// Left click toggles an obstacle, Shift + click moves the start, Ctrl + click
/// moves the goal. `R` scatters random obstacles and `C` clears them.
pub fn poll_edit(layout: &Layout, grid: &Grid, scatter_density: f64) -> Option<Edit> {
    if is_key_pressed(KeyCode::C) {
        return Some(Edit::ClearObstacles);
    }
    if is_key_pressed(KeyCode::R) {
        return Some(Edit::ScatterObstacles {
            density: scatter_density,
            seed: None,
        });
    }
    if !is_mouse_button_released(MouseButton::Left) {
        return None;
    }

    let (x, y) = mouse_position();
    let Some(coord) = layout.cell_at(grid, vec2(x, y)) else {
        debug!(x, y, "Click outside the grid ignored");
        return None;
    };
    let shift = is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift);
    let ctrl = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl);
    Some(click_edit(coord, shift, ctrl))
}

/// Edit for a click on `coord` with the given modifiers held. Shift wins over Ctrl.
pub fn click_edit(coord: Coord, shift: bool, ctrl: bool) -> Edit {
    if shift {
        Edit::SetStart(coord)
    } else if ctrl {
        Edit::SetGoal(coord)
    } else {
        Edit::ToggleObstacle(coord)
    }
}
