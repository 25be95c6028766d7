//! Serializable description of how to tile a set of clouds.

use point_cloud::{Cloud, Point};
use serde::{Deserialize, Serialize};

use crate::{SplitLocs, Tile, TilesGrid, error::GridResult};

/// How to cut the merged bounds of the input clouds.
///
/// ```json
/// { "split_locs": { "x": [10.0], "y": [8.0] } }
/// { "counts": { "nx": 4, "ny": 2 } }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TilingConfig {
    /// Explicit locations per axis.
    SplitLocs(SplitLocs),
    /// Even sections per axis; omitted axes are not split.
    Counts {
        #[serde(default)]
        nx: Option<usize>,
        #[serde(default)]
        ny: Option<usize>,
        #[serde(default)]
        nz: Option<usize>,
    },
}

impl TilingConfig {
    /// Retile `clouds` according to this configuration.
    pub fn build<C>(&self, clouds: &[C]) -> GridResult<TilesGrid>
    where
        C: Cloud,
        Tile: From<C>,
    {
        match self {
            Self::SplitLocs(locs) => TilesGrid::from_point_clouds(clouds, locs),
            Self::Counts { nx, ny, nz } => TilesGrid::from_counts(clouds, *nx, *ny, *nz),
        }
    }

    /// Number of tiles per axis this config yields.
    #[must_use]
    pub fn tile_shape(&self) -> [usize; 3] {
        match self {
            Self::SplitLocs(locs) => locs.tile_shape(),
            Self::Counts { nx, ny, nz } => [*nx, *ny, *nz].map(|n| n.unwrap_or(1).max(1)),
        }
    }
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self::SplitLocs(SplitLocs::default())
    }
}

/// Tile a single set of points with a configuration.
pub fn tile_points(points: Vec<Point>, config: &TilingConfig) -> GridResult<TilesGrid> {
    config.build(&[Tile::new(points, None)])
}
