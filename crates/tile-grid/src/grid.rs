//! Grid of tiles paired with its edge lattice.

use point_cloud::{Axis, Bounds, Cloud, Point};

use crate::{
    AxisIndex, EdgeGrid, Grid3, SplitLocs, Tile,
    edges::make_edges_grid,
    error::{GridError, GridResult},
    index::{edge_range, normalize_all},
    retile::retile,
    splitlocs::fractional_splitlocs,
};

/// A 3D grid of spatially disjoint tiles and the lattice of edges around them.
///
/// Tiles are ordered along the array axes `0: x, 1: y, 2: z`. The edge lattice
/// is one larger per axis, and tile `[ix, iy, iz]` lies within the cell spanned
/// by `edges[ix, iy, iz]` and `edges[ix + 1, iy + 1, iz + 1]`.
///
/// # Example
///
/// ```
/// use point_cloud::{Axis, PointCloud};
/// use tile_grid::{AxisIndex, SplitLocs, TilesGrid};
///
/// let pc = PointCloud::new(vec![[0.0, 0.0, 0.0], [20.0, 16.0, 10.0]]);
/// let locs = SplitLocs::new().with(Axis::X, [10.0]).with(Axis::Y, [8.0]);
///
/// let grid = TilesGrid::from_point_clouds(&[pc], &locs)?;
/// assert_eq!(grid.shape(), [2, 2, 1]);
///
/// let column = grid.slice(&[AxisIndex::At(1)])?;
/// assert_eq!(column.shape(), [1, 2, 1]);
/// # Ok::<(), tile_grid::GridError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TilesGrid<T = Tile> {
    tiles: Grid3<T>,
    edges: EdgeGrid,
}

impl<T: Cloud> TilesGrid<T> {
    /// Pair a tiles array with its edges, failing if the tiles do not fit.
    pub fn new(tiles: Grid3<T>, edges: EdgeGrid) -> GridResult<Self> {
        Self::with_validation(tiles, edges, true)
    }

    /// Pair a tiles array with its edges, optionally skipping validation.
    ///
    /// Only skip validation for pairs that are consistent by construction.
    pub fn with_validation(tiles: Grid3<T>, edges: EdgeGrid, validate: bool) -> GridResult<Self> {
        let grid = Self { tiles, edges };
        if validate && !grid.validate() {
            return Err(GridError::GridConsistency);
        }
        Ok(grid)
    }

    /// Check that every tile lies within its edge cell.
    ///
    /// Both cell faces are inclusive, since the outermost edges coincide with
    /// the extent of the input clouds. Empty tiles always fit.
    #[must_use]
    pub fn validate(&self) -> bool {
        let lattice = self.edges.lattice_shape();
        let shapes_match = self
            .tiles
            .shape()
            .into_iter()
            .zip(lattice)
            .all(|(n, e)| e == n + 1 || (n == 0 && e == 0));
        if !shapes_match {
            tracing::debug!(
                tiles = ?self.tiles.shape(),
                edges = ?lattice,
                "edges lattice does not match tiles shape"
            );
            return false;
        }

        self.tiles.indexed_iter().all(|(index, tile)| {
            let bounds = tile.bounds();
            let fits = self
                .edges
                .cell_bounds(index)
                .is_some_and(|cell| cell.contains(&bounds));
            if !fits {
                tracing::debug!(?index, %bounds, "tile escapes its edge cell");
            }
            fits
        })
    }

    /// Bounds of the whole grid: the first and last corners of the lattice.
    ///
    /// `None` when the grid was sliced down to nothing along some axis.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Some(Bounds::from_corners(self.edges.first()?, self.edges.last()?))
    }

    /// Number of tiles along each axis.
    #[must_use]
    pub const fn shape(&self) -> [usize; 3] {
        self.tiles.shape()
    }

    /// Total number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the grid holds no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at `[ix, iy, iz]`.
    #[must_use]
    pub fn get(&self, ix: usize, iy: usize, iz: usize) -> Option<&T> {
        self.tiles.get([ix, iy, iz])
    }

    /// Iterate tiles with their indices, x-major.
    pub fn iter(&self) -> impl Iterator<Item = ([usize; 3], &T)> + '_ {
        self.tiles.indexed_iter()
    }

    /// Bounds of the edge cell enclosing tile `[ix, iy, iz]`.
    #[must_use]
    pub fn cell_bounds(&self, ix: usize, iy: usize, iz: usize) -> Option<Bounds> {
        if self.tiles.get([ix, iy, iz]).is_none() {
            return None;
        }
        self.edges.cell_bounds([ix, iy, iz])
    }

    /// Index of the tile a point would fall into, from the edges alone.
    ///
    /// Uses the same rule as splitting: a point on an inner edge belongs to
    /// the lower tile. Points outside [`TilesGrid::bounds`] give `None`.
    #[must_use]
    pub fn locate(&self, point: Point) -> Option<[usize; 3]> {
        let mut index = [0; 3];
        for axis in Axis::ALL {
            let d = axis.index();
            let lines = self.edges.axis_coords(axis);
            if lines.len() < 2 {
                return None;
            }
            let (lo, hi) = (lines[0], lines[lines.len() - 1]);
            if !(lo <= point[d] && point[d] <= hi) {
                return None;
            }
            let inner = &lines[1..lines.len() - 1];
            index[d] = inner.partition_point(|&line| line < point[d]);
        }
        self.tiles.get(index).map(|_| index)
    }

    /// The tiles array.
    #[must_use]
    pub const fn tiles(&self) -> &Grid3<T> {
        &self.tiles
    }

    /// The edge lattice.
    #[must_use]
    pub const fn edges(&self) -> &EdgeGrid {
        &self.edges
    }

    /// Take both arrays.
    #[must_use]
    pub fn into_parts(self) -> (Grid3<T>, EdgeGrid) {
        (self.tiles, self.edges)
    }
}

impl<T: Cloud + Clone> TilesGrid<T> {
    /// Extract a contiguous sub-grid.
    ///
    /// Takes up to three specifiers, one per axis; missing ones select the
    /// whole axis. Steps other than 1 are rejected. The edges along an axis
    /// extend one past the selected tiles, except that an empty tile range
    /// selects no edges at all.
    ///
    /// The result owns copies of both arrays. Tiles share their frozen point
    /// buffers with the parent.
    pub fn slice(&self, key: &[AxisIndex]) -> GridResult<Self> {
        let ranges = normalize_all(key, self.shape())?;
        let edge_ranges = ranges.each_ref().map(edge_range);

        let lattice = self.edges.lattice_shape();
        if edge_ranges.iter().zip(lattice).any(|(r, n)| r.end > n) {
            return Err(GridError::GridConsistency);
        }

        // A block of a valid grid is itself valid
        Self::with_validation(
            self.tiles.block(&ranges),
            self.edges.block(&edge_ranges),
            false,
        )
    }
}

impl TilesGrid<Tile> {
    /// Retile point clouds at the given split locations.
    ///
    /// The grid's bounds are the merged bounds of `clouds`, and every split
    /// location must lie strictly inside them. Fragments of different clouds
    /// falling into the same cell are merged into one tile.
    pub fn from_point_clouds<C>(clouds: &[C], splitlocs: &SplitLocs) -> GridResult<Self>
    where
        C: Cloud,
        Tile: From<C>,
    {
        let bounds = Bounds::merge_all(clouds.iter().map(Cloud::bounds)).ok_or(GridError::NoClouds)?;
        splitlocs.check_within(&bounds)?;

        let tiles = retile::<C, Tile>(clouds, splitlocs);
        let edges = make_edges_grid(&bounds, splitlocs);
        tracing::debug!(
            shape = ?tiles.shape(),
            %bounds,
            clouds = clouds.len(),
            "built tiles grid"
        );

        // Tiles and edges come from the same bounds and locations
        Self::with_validation(tiles, edges, false)
    }

    /// Retile point clouds into `nx * ny * nz` even sections of their merged bounds.
    ///
    /// `None` leaves an axis unsplit; see [`fractional_splitlocs`].
    pub fn from_counts<C>(
        clouds: &[C],
        nx: Option<usize>,
        ny: Option<usize>,
        nz: Option<usize>,
    ) -> GridResult<Self>
    where
        C: Cloud,
        Tile: From<C>,
    {
        let bounds = Bounds::merge_all(clouds.iter().map(Cloud::bounds)).ok_or(GridError::NoClouds)?;
        let splitlocs = fractional_splitlocs(&bounds, nx, ny, nz)?;
        Self::from_point_clouds(clouds, &splitlocs)
    }
}

#[cfg(test)]
mod tests {
    use point_cloud::PointCloud;

    use super::*;

    fn scenario_cloud() -> PointCloud {
        let mut pc = PointCloud::default();
        for i in 0..=20 {
            for j in 0..=16 {
                pc.push([f64::from(i), f64::from(j), f64::from(i % 11)]);
            }
        }
        pc
    }

    fn scenario() -> TilesGrid {
        let locs = SplitLocs::new().with(Axis::X, [10.0]).with(Axis::Y, [8.0]);
        TilesGrid::from_point_clouds(&[scenario_cloud()], &locs).unwrap()
    }

    #[test]
    fn test_scenario_shapes_and_corners() {
        let grid = scenario();
        assert_eq!(grid.shape(), [2, 2, 1]);
        assert_eq!(grid.edges().shape(), [3, 3, 2, 3]);
        assert_eq!(grid.edges().first(), Some([0.0, 0.0, 0.0]));
        assert_eq!(grid.edges().last(), Some([20.0, 16.0, 10.0]));
        assert_eq!(grid.edges().get([1, 1, 0]), Some([10.0, 8.0, 0.0]));
        assert_eq!(grid.bounds(), Some(Bounds::new(0.0, 0.0, 0.0, 20.0, 16.0, 10.0)));
        assert!(grid.validate());
    }

    #[test]
    fn test_len_and_emptiness() {
        let grid = scenario();
        assert_eq!(grid.len(), 4);
        assert!(!grid.is_empty());

        let none = grid.slice(&[(0..0).into()]).unwrap();
        assert_eq!(none.len(), 0);
        assert!(none.is_empty());
        assert_eq!(none.bounds(), None);
    }

    #[test]
    fn test_split_location_on_cloud_edge_is_rejected() {
        let locs = SplitLocs::new().with(Axis::Y, [16.0]);
        let err = TilesGrid::from_point_clouds(&[scenario_cloud()], &locs).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { axis: Axis::Y, .. }));
    }

    #[test]
    fn test_no_clouds() {
        let err = TilesGrid::from_point_clouds::<PointCloud>(&[], &SplitLocs::new()).unwrap_err();
        assert_eq!(err, GridError::NoClouds);
    }

    #[test]
    fn test_new_rejects_mismatched_tiles() {
        let (tiles, edges) = scenario().into_parts();
        // Swap two tiles so they no longer sit in their cells
        let mut data = tiles.into_vec();
        data.swap(0, 3);
        let swapped = Grid3::from_vec([2, 2, 1], data).unwrap();
        assert_eq!(
            TilesGrid::new(swapped.clone(), edges.clone()),
            Err(GridError::GridConsistency)
        );
        // Skipping validation trusts the caller
        assert!(TilesGrid::with_validation(swapped, edges, false).is_ok());
    }

    #[test]
    fn test_new_rejects_wrong_lattice_shape() {
        let (tiles, _) = scenario().into_parts();
        let bounds = Bounds::new(0.0, 0.0, 0.0, 20.0, 16.0, 10.0);
        let edges = make_edges_grid(&bounds, &SplitLocs::new().with(Axis::X, [10.0]));
        assert_eq!(TilesGrid::new(tiles, edges), Err(GridError::GridConsistency));
    }

    #[test]
    fn test_cell_bounds_and_locate() {
        let grid = scenario();
        assert_eq!(
            grid.cell_bounds(0, 1, 0),
            Some(Bounds::new(0.0, 8.0, 0.0, 10.0, 16.0, 10.0))
        );
        assert_eq!(grid.cell_bounds(2, 0, 0), None);

        assert_eq!(grid.locate([10.0, 8.0, 5.0]), Some([0, 0, 0]));
        assert_eq!(grid.locate([10.5, 8.0, 5.0]), Some([1, 0, 0]));
        assert_eq!(grid.locate([20.0, 16.0, 10.0]), Some([1, 1, 0]));
        assert_eq!(grid.locate([20.5, 1.0, 1.0]), None);
    }

    #[test]
    fn test_locate_agrees_with_tiles() {
        let grid = scenario();
        for (index, tile) in grid.iter() {
            for p in tile.points() {
                assert_eq!(grid.locate(*p), Some(index));
            }
        }
    }

    #[test]
    fn test_from_counts() {
        let grid = TilesGrid::from_counts(&[scenario_cloud()], Some(4), Some(2), None).unwrap();
        assert_eq!(grid.shape(), [4, 2, 1]);
        assert!(grid.validate());
        assert_eq!(grid.edges().axis_coords(Axis::X), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    }
}
