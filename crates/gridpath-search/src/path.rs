//! Reading the search result back out of the grid.

use crate::grid::{Coord, Grid};
use crate::heuristic::euclidean_distance;

/// Walks the parent links left by the last solve, from the goal back to the start.
///
/// # Returns
/// * `Option<Vec<Coord>>` - The path from start to goal inclusive, or `None` if the
///   goal has no parent and is not the start cell.
pub fn reconstruct_path(grid: &Grid) -> Option<Vec<Coord>> {
    let goal = grid.goal_index();
    let state = grid.search_state();
    if goal != grid.start_index() && state.get(goal).parent.is_none() {
        return None;
    }

    let mut path = vec![grid.coord_of(goal)];
    let mut current = goal;
    while let Some(previous) = state.get(current).parent {
        path.push(grid.coord_of(previous));
        current = previous;
    }
    path.reverse();
    Some(path)
}

/// Sums the Euclidean step costs along `path`.
pub fn path_cost(path: &[Coord]) -> f32 {
    path.windows(2)
        .map(|step| euclidean_distance(step[0], step[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_follows_parents() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_start(Coord::new(0, 0)).unwrap();
        grid.set_goal(Coord::new(2, 1)).unwrap();
        // (0,0) -> (1,1) -> (2,1), filled in by hand.
        let w = grid.width();
        grid.search_state_mut().get_mut(w + 1).parent = Some(0);
        grid.search_state_mut().get_mut(w + 2).parent = Some(w + 1);

        let path = reconstruct_path(&grid).unwrap();
        assert_eq!(
            path,
            vec![Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 1)]
        );
        let expected = std::f32::consts::SQRT_2 + 1.0;
        assert!((path_cost(&path) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_reconstruct_without_parent() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_start(Coord::new(0, 0)).unwrap();
        grid.set_goal(Coord::new(3, 3)).unwrap();
        assert_eq!(reconstruct_path(&grid), None);

        grid.set_goal(Coord::new(0, 0)).unwrap();
        assert_eq!(
            reconstruct_path(&grid),
            Some(vec![Coord::new(0, 0)]),
            "A goal equal to the start is a one-cell path"
        );
    }

    #[test]
    fn test_path_cost_of_trivial_paths() {
        assert_eq!(path_cost(&[]), 0.0);
        assert_eq!(path_cost(&[Coord::new(3, 3)]), 0.0);
    }
}
