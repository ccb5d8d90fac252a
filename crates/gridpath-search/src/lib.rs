#![warn(missing_docs)]
#![doc = "Grid graph and A* search engine for interactive shortest-path solving."]
#![doc = ""]
#![doc = "A [`Grid`] owns a fixed 8-connected lattice, its obstacles and the per-cell"]
#![doc = "search state. [`solve`] runs A* over it with a Euclidean heuristic and leaves"]
#![doc = "visited flags, costs and parent links in the grid; [`reconstruct_path`] reads"]
#![doc = "the path back. [`Planner`] wraps both for frontends that re-solve on every edit."]

pub mod astar;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod open_set;
pub mod path;
pub mod session;

pub use astar::{SolveReport, solve, solve_with};
pub use error::GridError;
pub use grid::{AdjacencyModel, AdjacencyRule, CellState, Coord, Grid, SearchState};
pub use heuristic::euclidean_distance;
pub use open_set::{OpenSet, OpenSetKind};
pub use path::{path_cost, reconstruct_path};
pub use session::{Edit, Planner};
