//! Immutable point cloud tiles.

use std::sync::Arc;

use point_cloud::{Cloud, Header, Point, PointCloud};

use crate::error::{GridError, GridResult};

/// An immutable point cloud occupying one cell of a [`TilesGrid`](crate::TilesGrid).
///
/// The coordinate buffer is frozen behind an `Arc<[Point]>` at construction.
/// Clones share the buffer, which is safe because nothing can write to it:
/// [`Tile::set_points`] always fails.
#[derive(Clone, Debug)]
pub struct Tile {
    points: Arc<[Point]>,
    header: Option<Header>,
}

impl Tile {
    /// Freeze a set of points into a tile.
    #[must_use]
    pub fn new(points: Vec<Point>, header: Option<Header>) -> Self {
        Self {
            points: points.into(),
            header,
        }
    }

    /// A tile with no points.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), None)
    }

    /// Tiles are read-only; this always returns [`GridError::ImmutableTile`].
    pub fn set_points(&mut self, _points: Vec<Point>) -> GridResult<()> {
        Err(GridError::ImmutableTile)
    }

    /// Copy the points out into a mutable cloud.
    #[must_use]
    pub fn to_point_cloud(&self) -> PointCloud {
        PointCloud::from_parts(self.points.to_vec(), self.header.clone())
    }
}

impl Cloud for Tile {
    fn points(&self) -> &[Point] {
        &self.points
    }

    fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    fn from_parts(points: Vec<Point>, header: Option<Header>) -> Self {
        Self::new(points, header)
    }
}

impl From<PointCloud> for Tile {
    fn from(pc: PointCloud) -> Self {
        let header = pc.header().cloned();
        Self::new(pc.into_points(), header)
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points && self.header == other.header
    }
}
