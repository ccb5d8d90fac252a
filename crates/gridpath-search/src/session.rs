//! Edit-then-resolve session used by interactive frontends.
//!
//! Every accepted edit triggers an immediate, synchronous re-solve, so the
//! grid's search state always reflects the current obstacles and endpoints.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::astar::{SolveReport, solve_with};
use crate::error::GridError;
use crate::grid::{Coord, Grid};
use crate::open_set::OpenSetKind;
use crate::path::reconstruct_path;

/// A change requested by the input side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    /// Flip the obstacle flag of a cell.
    ToggleObstacle(Coord),
    /// Mark or clear an obstacle.
    SetObstacle(Coord, bool),
    /// Move the start cell.
    SetStart(Coord),
    /// Move the goal cell.
    SetGoal(Coord),
    /// Remove every obstacle.
    ClearObstacles,
    /// Block random cells with probability `density`. A fixed `seed` makes the
    /// field reproducible; `None` draws from the thread-local generator.
    ScatterObstacles {
        /// Probability for each free cell to become an obstacle.
        density: f64,
        /// Optional generator seed.
        seed: Option<u64>,
    },
}

/// Owns a grid and keeps its search results in sync with edits.
#[derive(Debug)]
pub struct Planner {
    grid: Grid,
    open_set: OpenSetKind,
    last_report: SolveReport,
}

impl Planner {
    /// Takes ownership of `grid` and solves it once.
    pub fn new(mut grid: Grid, open_set: OpenSetKind) -> Self {
        let last_report = solve_with(&mut grid, open_set);
        info!(
            width = grid.width(),
            height = grid.height(),
            start = %grid.start(),
            goal = %grid.goal(),
            "Planner ready: {}",
            last_report
        );
        Planner {
            grid,
            open_set,
            last_report,
        }
    }

    /// Applies `edit` and re-solves.
    ///
    /// A rejected edit leaves the grid and the previous results untouched.
    pub fn apply(&mut self, edit: Edit) -> Result<SolveReport, GridError> {
        match edit {
            Edit::ToggleObstacle(c) => {
                self.grid.toggle_obstacle(c)?;
            }
            Edit::SetObstacle(c, enabled) => self.grid.set_obstacle(c, enabled)?,
            Edit::SetStart(c) => self.grid.set_start(c)?,
            Edit::SetGoal(c) => self.grid.set_goal(c)?,
            Edit::ClearObstacles => self.grid.clear_obstacles(),
            Edit::ScatterObstacles { density, seed } => {
                match seed {
                    Some(seed) => self
                        .grid
                        .scatter_obstacles(&mut StdRng::seed_from_u64(seed), density)?,
                    None => self.grid.scatter_obstacles(&mut rand::rng(), density)?,
                };
            }
        }
        debug!(?edit, "Applied edit, re-solving");
        Ok(self.resolve())
    }

    /// Re-runs the solver on the current grid.
    pub fn resolve(&mut self) -> SolveReport {
        self.last_report = solve_with(&mut self.grid, self.open_set);
        self.last_report
    }

    /// Path from start to goal found by the last solve.
    pub fn path(&self) -> Option<Vec<Coord>> {
        reconstruct_path(&self.grid)
    }

    /// The grid, for read-only queries.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Report of the last solve.
    pub fn last_report(&self) -> SolveReport {
        self.last_report
    }

    /// Open set strategy used by every solve.
    pub fn open_set(&self) -> OpenSetKind {
        self.open_set
    }
}
