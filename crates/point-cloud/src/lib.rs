//! Point cloud primitives for tiling.
//!
//! Provides the capability the tiling engine consumes from a point cloud:
//!
//! - **bounds**: `(minx, miny, minz, maxx, maxy, maxz)` of the points
//! - **split**: partition along one axis at sorted locations
//! - **merge**: combine two clouds that fall into the same cell
//!
//! Any type implementing [`Cloud`] can be retiled. [`PointCloud`] is the plain
//! mutable implementation.
//!
//! # Example
//!
//! ```
//! use point_cloud::{Axis, Cloud, PointCloud};
//!
//! let pc: PointCloud = (0..10).map(|i| [f64::from(i), 0.0, 0.0]).collect();
//! let parts = pc.split(Axis::X, &[4.5]);
//! assert_eq!(parts.len(), 2);
//! assert_eq!(parts[0].len(), 5);
//! ```

mod axis;
mod bounds;
mod cloud;

pub use axis::Axis;
pub use bounds::Bounds;
pub use cloud::{Cloud, Header, PointCloud};

/// A single `(x, y, z)` coordinate.
pub type Point = [f64; 3];
