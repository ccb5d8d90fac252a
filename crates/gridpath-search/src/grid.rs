//! Grid graph for shortest-path search.
//!
//! The grid is an arena of `width * height` cells stored in row-major order.
//! Each cell is addressed either by its [`Coord`] or by its linear index
//! `row * width + col`. The structure is split in three parts with different
//! lifecycles:
//!
//! - [`AdjacencyModel`]: the 8-connected neighbor lists, built once at
//!   construction and never mutated.
//! - obstacle flags: set by the caller, persist across searches.
//! - [`SearchState`]: per-cell costs, visited flags and parent links, reset
//!   at the top of every solve.

#![warn(missing_docs)]

use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::error::GridError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Start position used when the grid is large enough to hold it.
pub const DEFAULT_START: Coord = Coord::new(0, 1);
/// Goal position used when the grid is large enough to hold it.
pub const DEFAULT_GOAL: Coord = Coord::new(15, 11);

/// A cell position as `(column, row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    /// Column, grows to the right.
    pub col: usize,
    /// Row, grows downward.
    pub row: usize,
}

impl Coord {
    /// Creates a coordinate from a column and a row.
    pub const fn new(col: usize, row: usize) -> Self {
        Coord { col, row }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((col, row): (usize, usize)) -> Self {
        Coord::new(col, row)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Bound-check rule used when wiring neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AdjacencyRule {
    /// Mixed bound checks: the downward tests compare the row against
    /// the width and the rightward test compares the column against the height.
    /// Only valid for square grids, which construction enforces.
    #[default]
    Legacy,
    /// Each axis is checked against its own extent. Supports non-square grids.
    PerAxis,
}

/// Immutable neighbor lists, one per cell, indexed by linear cell index.
#[derive(Debug, Clone)]
pub struct AdjacencyModel {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyModel {
    /// Wires every cell to its up to 8 neighbors.
    ///
    /// Neighbor order per cell: up, down, left, right, up-left, down-left,
    /// up-right, down-right.
    fn build(width: usize, height: usize, rule: AdjacencyRule) -> Self {
        // Exclusive limits for the `y + 1` and rightward `x + 1` checks.
        let (down_limit, right_limit) = match rule {
            AdjacencyRule::Legacy => (width, height),
            AdjacencyRule::PerAxis => (height, width),
        };
        let index = |x: usize, y: usize| y * width + x;

        let mut neighbors = vec![Vec::with_capacity(8); width * height];
        for x in 0..width {
            for y in 0..height {
                let list = &mut neighbors[index(x, y)];
                let can_up = y > 0;
                let can_down = y + 1 < down_limit;
                let can_left = x > 0;

                if can_up {
                    list.push(index(x, y - 1));
                }
                if can_down {
                    list.push(index(x, y + 1));
                }
                if can_left {
                    list.push(index(x - 1, y));
                }
                if x + 1 < right_limit {
                    list.push(index(x + 1, y));
                }
                if can_up && can_left {
                    list.push(index(x - 1, y - 1));
                }
                if can_down && can_left {
                    list.push(index(x - 1, y + 1));
                }
                if x + 1 < width && can_up {
                    list.push(index(x + 1, y - 1));
                }
                if can_down && x + 1 < width {
                    list.push(index(x + 1, y + 1));
                }
            }
        }

        AdjacencyModel { neighbors }
    }

    /// Neighbor indices of the cell at `index`.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }

    /// Returns true if `b` is listed as a neighbor of `a`.
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors[a].contains(&b)
    }

    /// Number of cells covered by the model.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns true if the model covers no cells.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

/// Per-cell search bookkeeping for one solver run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellState {
    /// True once the solver has expanded this cell in the current run.
    pub visited: bool,
    /// Accumulated path cost from the start cell (g-cost).
    pub cost_from_start: f32,
    /// `cost_from_start` plus the heuristic estimate to the goal (f-cost).
    pub estimated_total_cost: f32,
    /// Linear index of the predecessor on the best path found so far.
    pub parent: Option<usize>,
}

impl CellState {
    /// State of a cell the current run has not reached.
    pub const UNREACHED: CellState = CellState {
        visited: false,
        cost_from_start: f32::INFINITY,
        estimated_total_cost: f32::INFINITY,
        parent: None,
    };
}

impl Default for CellState {
    fn default() -> Self {
        CellState::UNREACHED
    }
}

/// Search state of every cell, reset before each run.
#[derive(Debug, Clone)]
pub struct SearchState {
    cells: Vec<CellState>,
}

impl SearchState {
    fn new(len: usize) -> Self {
        SearchState {
            cells: vec![CellState::UNREACHED; len],
        }
    }

    /// Puts every cell back to [`CellState::UNREACHED`].
    pub fn reset(&mut self) {
        self.cells.fill(CellState::UNREACHED);
    }

    /// State of the cell at `index`.
    pub fn get(&self, index: usize) -> &CellState {
        &self.cells[index]
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut CellState {
        &mut self.cells[index]
    }

    /// All cell states in row-major order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Number of cells expanded in the last run.
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.visited).count()
    }
}

/// Fixed-size 8-connected lattice with obstacles, endpoints and search state.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    rule: AdjacencyRule,
    adjacency: AdjacencyModel,
    obstacles: Vec<bool>,
    state: SearchState,
    start: usize,
    goal: usize,
}

impl Grid {
    /// Creates a grid wired with [`AdjacencyRule::Legacy`].
    ///
    /// # Returns
    /// * `Result<Self, GridError>` - The grid, or an error if a dimension is zero
    ///   or the grid is not square.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::with_rule(width, height, AdjacencyRule::Legacy)
    }

    /// Creates a grid wired with the given adjacency rule.
    ///
    /// Start and goal default to [`DEFAULT_START`] and [`DEFAULT_GOAL`]; when either
    /// does not fit, the top-left and bottom-right corners are used instead.
    pub fn with_rule(width: usize, height: usize, rule: AdjacencyRule) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions(
                "Width and height must be non-zero",
            ));
        }
        if rule == AdjacencyRule::Legacy && width != height {
            return Err(GridError::NonSquare { width, height });
        }
        let total_cells = width
            .checked_mul(height)
            .ok_or(GridError::InvalidDimensions(
                "Grid dimensions too large, would cause overflow",
            ))?;

        let start = if DEFAULT_START.col < width && DEFAULT_START.row < height {
            DEFAULT_START
        } else {
            Coord::new(0, 0)
        };
        let goal = if DEFAULT_GOAL.col < width && DEFAULT_GOAL.row < height {
            DEFAULT_GOAL
        } else {
            Coord::new(width - 1, height - 1)
        };

        let adjacency = AdjacencyModel::build(width, height, rule);
        debug!(width, height, ?rule, total_cells, "Built grid adjacency");

        Ok(Grid {
            width,
            height,
            rule,
            adjacency,
            obstacles: vec![false; total_cells],
            state: SearchState::new(total_cells),
            start: start.row * width + start.col,
            goal: goal.row * width + goal.col,
        })
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Adjacency rule the grid was wired with.
    pub fn rule(&self) -> AdjacencyRule {
        self.rule
    }

    /// Total number of cells.
    pub fn total_cells(&self) -> usize {
        self.obstacles.len()
    }

    /// Returns true if `coord` lies inside the lattice.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.col < self.width && coord.row < self.height
    }

    /// Linear index of `coord`.
    pub fn index_of(&self, coord: Coord) -> Result<usize, GridError> {
        if !self.contains(coord) {
            return Err(GridError::OutOfBounds {
                col: coord.col,
                row: coord.row,
            });
        }
        Ok(coord.row * self.width + coord.col)
    }

    /// Coordinate of the cell at linear `index`.
    pub fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index % self.width, index / self.width)
    }

    /// The immutable neighbor lists.
    pub fn adjacency(&self) -> &AdjacencyModel {
        &self.adjacency
    }

    /// Coordinates of the cells adjacent to `coord`, in wiring order.
    pub fn neighbors(&self, coord: Coord) -> Result<Vec<Coord>, GridError> {
        let index = self.index_of(coord)?;
        Ok(self
            .adjacency
            .neighbors(index)
            .iter()
            .map(|&n| self.coord_of(n))
            .collect())
    }

    /// Marks or clears an obstacle.
    pub fn set_obstacle(&mut self, coord: Coord, enabled: bool) -> Result<(), GridError> {
        let index = self.index_of(coord)?;
        self.obstacles[index] = enabled;
        Ok(())
    }

    /// Flips the obstacle flag and returns the new value.
    pub fn toggle_obstacle(&mut self, coord: Coord) -> Result<bool, GridError> {
        let index = self.index_of(coord)?;
        self.obstacles[index] = !self.obstacles[index];
        Ok(self.obstacles[index])
    }

    /// Removes every obstacle.
    pub fn clear_obstacles(&mut self) {
        self.obstacles.fill(false);
    }

    /// Randomly marks cells as obstacles with probability `density`.
    ///
    /// Existing obstacles are kept. Start and goal are never blocked.
    /// Returns the number of cells newly marked.
    pub fn scatter_obstacles<R: Rng>(&mut self, rng: &mut R, density: f64) -> Result<usize, GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }
        let mut placed = 0;
        for index in 0..self.obstacles.len() {
            if index == self.start || index == self.goal || self.obstacles[index] {
                continue;
            }
            if rng.random_bool(density) {
                self.obstacles[index] = true;
                placed += 1;
            }
        }
        debug!(density, placed, "Scattered obstacles");
        Ok(placed)
    }

    /// Returns true if the cell is impassable.
    pub fn is_obstacle(&self, coord: Coord) -> Result<bool, GridError> {
        Ok(self.obstacles[self.index_of(coord)?])
    }

    pub(crate) fn obstacle_at(&self, index: usize) -> bool {
        self.obstacles[index]
    }

    /// Returns true if the last solve expanded the cell.
    pub fn is_visited(&self, coord: Coord) -> Result<bool, GridError> {
        Ok(self.state.get(self.index_of(coord)?).visited)
    }

    /// Search state of the cell at `coord`.
    pub fn cell(&self, coord: Coord) -> Result<&CellState, GridError> {
        Ok(self.state.get(self.index_of(coord)?))
    }

    /// Parent of the cell at `coord`, as a coordinate.
    pub fn parent_of(&self, coord: Coord) -> Result<Option<Coord>, GridError> {
        Ok(self
            .state
            .get(self.index_of(coord)?)
            .parent
            .map(|p| self.coord_of(p)))
    }

    /// Search state of every cell.
    pub fn search_state(&self) -> &SearchState {
        &self.state
    }

    pub(crate) fn search_state_mut(&mut self) -> &mut SearchState {
        &mut self.state
    }

    /// Borrows the static parts alongside the mutable search state.
    pub(crate) fn search_parts(&mut self) -> (&AdjacencyModel, &[bool], &mut SearchState) {
        (&self.adjacency, &self.obstacles, &mut self.state)
    }

    /// Clears visited flags, parents and costs of every cell.
    pub fn reset_search_state(&mut self) {
        self.state.reset();
    }

    /// Moves the start cell.
    pub fn set_start(&mut self, coord: Coord) -> Result<(), GridError> {
        self.start = self.index_of(coord)?;
        Ok(())
    }

    /// Moves the goal cell.
    pub fn set_goal(&mut self, coord: Coord) -> Result<(), GridError> {
        self.goal = self.index_of(coord)?;
        Ok(())
    }

    /// Current start cell.
    pub fn start(&self) -> Coord {
        self.coord_of(self.start)
    }

    /// Current goal cell.
    pub fn goal(&self) -> Coord {
        self.coord_of(self.goal)
    }

    pub(crate) fn start_index(&self) -> usize {
        self.start
    }

    pub(crate) fn goal_index(&self) -> usize {
        self.goal
    }
}
