//! Tile grid error types.

use point_cloud::Axis;
use thiserror::Error;

/// Tile grid error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Attempted to write to a tile's frozen coordinate buffer.
    #[error("tile point cloud cannot be modified")]
    ImmutableTile,

    /// A split location lies outside the bounds it must fall within.
    #[error("split location {location} on axis {axis} is outside ({min}, {max})")]
    OutOfBounds {
        axis: Axis,
        location: f64,
        min: f64,
        max: f64,
    },

    /// Slicing with a step other than 1.
    #[error("tiles grid must be contiguous, slice step must be 1 (got {0})")]
    UnsupportedStep(isize),

    /// Tiles do not fit into the edges lattice.
    #[error("tiles do not fit into edges grid")]
    GridConsistency,

    /// Malformed bounds (min > max) on an axis that was asked to split.
    #[error("invalid bounds on axis {axis}: min {min} > max {max}")]
    InvalidBounds { axis: Axis, min: f64, max: f64 },

    /// More index specifiers than grid dimensions.
    #[error("too many indices for a 3D grid: {0}")]
    TooManyIndices(usize),

    /// No point clouds were supplied to derive a grid from.
    #[error("at least one point cloud is required")]
    NoClouds,
}

/// Result type for tile grid operations.
pub type GridResult<T> = Result<T, GridError>;
