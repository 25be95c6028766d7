//! Regular 3D tiling of point clouds.
//!
//! Point clouds are cut along x, y and z at per-axis split locations into a
//! grid of spatially disjoint, immutable [`Tile`]s. Alongside the tiles the
//! grid keeps an [`EdgeGrid`]: the lattice of grid-line coordinates, one
//! larger than the tiles array in every axis, so the tiling can be queried
//! and re-sliced without rescanning points.
//!
//! # Pipeline
//!
//! ```text
//! clouds + SplitLocs (or counts via fractional_splitlocs)
//!   │
//!   ├── merged bounds ── check_within ──┐
//!   │                                   │
//!   ├── retile ────────────▶ Grid3<Tile>│  (nx, ny, nz)
//!   └── make_edges_grid ───▶ EdgeGrid  ◀┘  (nx + 1, ny + 1, nz + 1, 3)
//!                                │
//!                                ▼
//!                            TilesGrid ── slice / bounds / validate / locate
//! ```
//!
//! # Invariant
//!
//! For every tile `[ix, iy, iz]`, its bounds lie within the cell spanned by
//! `edges[ix, iy, iz]` and `edges[ix + 1, iy + 1, iz + 1]`. Grids derived from
//! clouds and grids produced by slicing hold this by construction; grids
//! assembled by hand are checked by [`TilesGrid::new`].

mod array;
mod config;
mod edges;
mod error;
mod grid;
mod index;
mod retile;
mod splitlocs;
mod tile;

pub use array::Grid3;
pub use config::{TilingConfig, tile_points};
pub use edges::{EdgeGrid, make_edges_grid};
pub use error::{GridError, GridResult};
pub use grid::TilesGrid;
pub use index::{AxisIndex, edge_range, normalize};
pub use retile::retile;
pub use splitlocs::{AxisLocs, SplitLocs, fractional_splitlocs};
pub use tile::Tile;

/// Prelude for convenient imports
pub mod prelude {
    pub use point_cloud::{Axis, Bounds, Cloud, Point, PointCloud};

    pub use crate::{AxisIndex, GridError, GridResult, SplitLocs, Tile, TilesGrid, TilingConfig};
}
