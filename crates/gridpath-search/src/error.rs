//! This module defines the error types used by the `gridpath-search` crate.

#![warn(missing_docs)]

/// Error type for grid construction, mutation and query operations.
///
/// An unreachable goal is not an error: it is reported through the grid's
/// search state after a solve.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Error for invalid grid dimensions.
    /// This variant is returned when width or height is zero or the cell count overflows.
    InvalidDimensions(&'static str),
    /// Error for a non-square grid under the legacy adjacency rule.
    /// The legacy bound checks mix width and height, so only square lattices are accepted.
    NonSquare {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },
    /// Error for out-of-bounds access.
    /// This variant is returned when a coordinate lies outside `[0,width) x [0,height)`.
    OutOfBounds {
        /// Column of the offending coordinate.
        col: usize,
        /// Row of the offending coordinate.
        row: usize,
    },
    /// Error for an obstacle density outside `[0, 1]`.
    InvalidDensity(f64),
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::InvalidDimensions(msg) => write!(f, "Invalid grid dimensions: {}", msg),
            GridError::NonSquare { width, height } => write!(
                f,
                "Legacy adjacency requires a square grid, got {}x{}",
                width, height
            ),
            GridError::OutOfBounds { col, row } => {
                write!(f, "Grid access out of bounds: ({}, {})", col, row)
            }
            GridError::InvalidDensity(density) => {
                write!(f, "Obstacle density must lie in [0, 1], got {}", density)
            }
        }
    }
}

impl core::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GridError::OutOfBounds { col: 20, row: 3 };
        assert_eq!(err.to_string(), "Grid access out of bounds: (20, 3)");

        let err = GridError::NonSquare { width: 4, height: 6 };
        assert!(
            err.to_string().contains("4x6"),
            "Display should include the requested dimensions"
        );
    }
}
