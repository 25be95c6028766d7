//! Coordinate lattice bounding the cells of a tile grid.

use std::ops::Range;

use point_cloud::{Axis, Bounds, Point};

use crate::{Grid3, SplitLocs};

/// Lattice of grid-line coordinates, one larger than the tiles array per axis.
///
/// `edges[ix, iy, iz]` is the `(x, y, z)` corner preceding tile `[ix, iy, iz]`,
/// so tile `[ix, iy, iz]` is enclosed by `edges[ix, iy, iz]` and
/// `edges[ix + 1, iy + 1, iz + 1]`. Viewed as a plain array the lattice has
/// shape `(nx + 1, ny + 1, nz + 1, 3)`.
///
/// ```text
///   y
///   ▲  e[0,2]──e[1,2]──e[2,2]
///   │    │ t[0,1] │ t[1,1] │
///   │  e[0,1]──e[1,1]──e[2,1]
///   │    │ t[0,0] │ t[1,0] │
///   │  e[0,0]──e[1,0]──e[2,0]
///   └──────────────────────────▶ x
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeGrid {
    corners: Grid3<Point>,
}

impl EdgeGrid {
    /// Wrap a lattice of corner coordinates.
    #[must_use]
    pub const fn new(corners: Grid3<Point>) -> Self {
        Self { corners }
    }

    /// Shape as a 4D array: `[nx + 1, ny + 1, nz + 1, 3]`.
    #[must_use]
    pub const fn shape(&self) -> [usize; 4] {
        let [ex, ey, ez] = self.corners.shape();
        [ex, ey, ez, 3]
    }

    /// Number of grid lines along each axis.
    #[must_use]
    pub const fn lattice_shape(&self) -> [usize; 3] {
        self.corners.shape()
    }

    /// Corner coordinate at `index`.
    #[must_use]
    pub fn get(&self, index: [usize; 3]) -> Option<Point> {
        self.corners.get(index).copied()
    }

    /// First corner, i.e. the grid's global minimum.
    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.get([0, 0, 0])
    }

    /// Last corner, i.e. the grid's global maximum.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        let [ex, ey, ez] = self.corners.shape();
        self.get([ex.checked_sub(1)?, ey.checked_sub(1)?, ez.checked_sub(1)?])
    }

    /// Grid-line coordinates along one axis.
    #[must_use]
    pub fn axis_coords(&self, axis: Axis) -> Vec<f64> {
        let n = self.corners.shape()[axis.index()];
        (0..n)
            .filter_map(|i| {
                let mut index = [0; 3];
                index[axis.index()] = i;
                self.get(index).map(|p| p[axis.index()])
            })
            .collect()
    }

    /// Bounds of the cell whose lower corner is `index`.
    #[must_use]
    pub fn cell_bounds(&self, [ix, iy, iz]: [usize; 3]) -> Option<Bounds> {
        let lo = self.get([ix, iy, iz])?;
        let hi = self.get([ix + 1, iy + 1, iz + 1])?;
        Some(Bounds::from_corners(lo, hi))
    }

    /// Copy out a contiguous block of the lattice.
    #[must_use]
    pub fn block(&self, ranges: &[Range<usize>; 3]) -> Self {
        Self::new(self.corners.block(ranges))
    }

    /// Underlying corner array.
    #[must_use]
    pub const fn corners(&self) -> &Grid3<Point> {
        &self.corners
    }
}

/// Build the edge lattice for a grid covering `bounds` cut at `splitlocs`.
///
/// Along each axis the grid lines are `[min] + locations + [max]`; the lattice
/// is their outer product indexed in `(x, y, z)` order. Must be called with
/// the same bounds and locations as the matching [`retile`](crate::retile)
/// for the resulting grid to validate.
#[must_use]
pub fn make_edges_grid(bounds: &Bounds, splitlocs: &SplitLocs) -> EdgeGrid {
    let lines = Axis::ALL.map(|axis| {
        let (min, max) = bounds.axis(axis);
        let mut line = Vec::with_capacity(splitlocs.get(axis).len() + 2);
        line.push(min);
        line.extend_from_slice(splitlocs.get(axis));
        line.push(max);
        line
    });
    let shape = [lines[0].len(), lines[1].len(), lines[2].len()];
    EdgeGrid::new(Grid3::from_fn(shape, |[ix, iy, iz]| {
        [lines[0][ix], lines[1][iy], lines[2][iz]]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> EdgeGrid {
        let bounds = Bounds::new(0.0, 0.0, 0.0, 20.0, 16.0, 10.0);
        let locs = SplitLocs::new().with(Axis::X, [10.0]).with(Axis::Y, [8.0]);
        make_edges_grid(&bounds, &locs)
    }

    #[test]
    fn test_edges_shape_and_corners() {
        let edges = scenario();
        assert_eq!(edges.shape(), [3, 3, 2, 3]);
        assert_eq!(edges.first(), Some([0.0, 0.0, 0.0]));
        assert_eq!(edges.last(), Some([20.0, 16.0, 10.0]));
        assert_eq!(edges.get([1, 1, 0]), Some([10.0, 8.0, 0.0]));
    }

    #[test]
    fn test_axis_coords_monotonic() {
        let edges = scenario();
        assert_eq!(edges.axis_coords(Axis::X), vec![0.0, 10.0, 20.0]);
        assert_eq!(edges.axis_coords(Axis::Y), vec![0.0, 8.0, 16.0]);
        assert_eq!(edges.axis_coords(Axis::Z), vec![0.0, 10.0]);
    }

    #[test]
    fn test_cell_bounds() {
        let edges = scenario();
        assert_eq!(
            edges.cell_bounds([1, 0, 0]),
            Some(Bounds::new(10.0, 0.0, 0.0, 20.0, 8.0, 10.0))
        );
        assert_eq!(edges.cell_bounds([2, 0, 0]), None);
    }

    #[test]
    fn test_empty_lattice_has_no_corners() {
        let edges = EdgeGrid::new(Grid3::from_fn([0, 3, 2], |_| [0.0; 3]));
        assert_eq!(edges.first(), None);
        assert_eq!(edges.last(), None);
    }
}
