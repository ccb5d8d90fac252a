/*

A* = f(n) = g(n) + h(n)

Where:
    n = a cell in the grid
    g(n) = accumulated cost from the start cell to n
    h(n) = Euclidean distance from n to the goal
    f(n) = estimated total cost of the cheapest path through n

Initialize:
    - reset every cell (not visited, no parent, g = f = +inf)
    - g(start) = 0, f(start) = h(start)
    - open set = [start]

Loop while the open set is not empty and current != goal:
    - take the unvisited entry with the lowest f(n) as current, mark it visited
    - for each neighbor that is neither visited nor an obstacle:
        - tentative = g(current) + dist(current, neighbor)
        - if tentative < g(neighbor): record current as parent, update g and f
        - add neighbor to the open set (duplicates are pruned when popped)

The results stay in the grid: visited flags, costs and parent links.

*/

use std::fmt;

use tracing::debug;

use crate::grid::{Coord, Grid};
use crate::heuristic::euclidean_distance;
use crate::open_set::{OpenSetKind, new_open_set};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Summary of one solver run. The full results live in the grid's search state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveReport {
    /// Number of cells expanded.
    pub expanded: usize,
    /// True if the goal is the start or has a parent.
    pub reached_goal: bool,
    /// Cost from start to goal, if the goal was reached.
    pub path_cost: Option<f32>,
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path_cost {
            Some(cost) => write!(
                f,
                "SolveReport {{ reached_goal: true, path_cost: {:.3}, expanded: {} }}",
                cost, self.expanded
            ),
            None => write!(
                f,
                "SolveReport {{ reached_goal: false, expanded: {} }}",
                self.expanded
            ),
        }
    }
}

/// Runs A* from the grid's start to its goal with the default open set.
///
/// See [`solve_with`].
pub fn solve(grid: &mut Grid) -> SolveReport {
    solve_with(grid, OpenSetKind::default())
}

/// Runs A* from the grid's start to its goal.
///
/// The grid's search state is reset first, so repeated calls without edits
/// leave identical state behind. Exploration stops as soon as the goal is
/// taken from the open set. An unreachable goal is not an error: the open set
/// runs dry and the goal keeps no parent.
pub fn solve_with(grid: &mut Grid, kind: OpenSetKind) -> SolveReport {
    grid.reset_search_state();

    let width = grid.width();
    let start = grid.start_index();
    let goal = grid.goal_index();
    let goal_coord = grid.goal();
    let coord_of = |index: usize| Coord::new(index % width, index / width);

    let (adjacency, obstacles, state) = grid.search_parts();

    let start_estimate = euclidean_distance(coord_of(start), goal_coord);
    {
        let cell = state.get_mut(start);
        cell.cost_from_start = 0.0;
        cell.estimated_total_cost = start_estimate;
    }

    let mut open = new_open_set(kind);
    open.push(start, start_estimate);

    let mut current = start;
    let mut expanded = 0;

    while !open.is_empty() && current != goal {
        let Some(next) = open.pop_unvisited(state) else {
            break;
        };
        current = next;
        state.get_mut(current).visited = true;
        expanded += 1;

        let current_coord = coord_of(current);
        let current_cost = state.get(current).cost_from_start;

        for &neighbor in adjacency.neighbors(current) {
            if state.get(neighbor).visited || obstacles[neighbor] {
                continue;
            }
            let neighbor_coord = coord_of(neighbor);
            let tentative = current_cost + euclidean_distance(current_coord, neighbor_coord);

            let cell = state.get_mut(neighbor);
            if tentative < cell.cost_from_start {
                cell.cost_from_start = tentative;
                cell.parent = Some(current);
                cell.estimated_total_cost = tentative + euclidean_distance(neighbor_coord, goal_coord);
            }
            open.push(neighbor, cell.estimated_total_cost);
        }
    }

    let goal_state = state.get(goal);
    let reached_goal = goal == start || goal_state.parent.is_some();
    let report = SolveReport {
        expanded,
        reached_goal,
        path_cost: reached_goal.then_some(goal_state.cost_from_start),
    };
    debug!(
        ?kind,
        expanded,
        reached_goal,
        path_cost = ?report.path_cost,
        "A* solve finished"
    );
    report
}
