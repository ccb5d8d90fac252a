//! Distance functions shared by the heuristic and the edge cost.

use nalgebra::Vector2;

use crate::grid::Coord;

/// Euclidean distance between two cells, treating `(col, row)` as real-valued coordinates.
///
/// Used both as the A* estimate to the goal and as the cost of moving between
/// adjacent cells, so a diagonal step costs `sqrt(2)` and an orthogonal step costs `1`.
pub fn euclidean_distance(a: Coord, b: Coord) -> f32 {
    (to_vector(a) - to_vector(b)).norm()
}

fn to_vector(c: Coord) -> Vector2<f32> {
    Vector2::new(c.col as f32, c.row as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance_axis_aligned() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, 0);
        assert_eq!(euclidean_distance(a, b), 3.0);
        assert_eq!(euclidean_distance(b, a), 3.0);
    }

    #[test]
    fn test_euclidean_distance_pythagorean() {
        let a = Coord::new(1, 2);
        let b = Coord::new(4, 6);
        assert!((euclidean_distance(a, b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_euclidean_distance_diagonal_step() {
        let d = euclidean_distance(Coord::new(5, 5), Coord::new(6, 6));
        assert!((d - std::f32::consts::SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_euclidean_distance_same_cell() {
        let c = Coord::new(7, 7);
        assert_eq!(euclidean_distance(c, c), 0.0);
    }
}
