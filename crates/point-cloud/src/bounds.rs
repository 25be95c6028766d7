//! Axis-aligned bounds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Axis, Point};

/// Axis-aligned extent `(minx, miny, minz, maxx, maxy, maxz)`.
///
/// A bounds is *strict* when `min <= max` on every axis. The bounds of a
/// cloud with no points is [`Bounds::EMPTY`], which is inverted on every axis:
/// it contains nothing and every bounds contains it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower corner.
    pub min: [f64; 3],
    /// Upper corner.
    pub max: [f64; 3],
}

impl Bounds {
    /// Bounds of an empty cloud. Identity element of [`Bounds::merge`].
    pub const EMPTY: Self = Self {
        min: [f64::INFINITY; 3],
        max: [f64::NEG_INFINITY; 3],
    };

    /// Create bounds from the six scalar extents.
    #[must_use]
    pub const fn new(minx: f64, miny: f64, minz: f64, maxx: f64, maxy: f64, maxz: f64) -> Self {
        Self {
            min: [minx, miny, minz],
            max: [maxx, maxy, maxz],
        }
    }

    /// Create bounds from a lower and an upper corner.
    #[must_use]
    pub const fn from_corners(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Create bounds from `[minx, miny, minz, maxx, maxy, maxz]`.
    #[must_use]
    pub const fn from_array(b: [f64; 6]) -> Self {
        Self::new(b[0], b[1], b[2], b[3], b[4], b[5])
    }

    /// Flatten to `[minx, miny, minz, maxx, maxy, maxz]`.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 6] {
        [
            self.min[0],
            self.min[1],
            self.min[2],
            self.max[0],
            self.max[1],
            self.max[2],
        ]
    }

    /// Tightest bounds around a set of points. `EMPTY` for no points.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        points.iter().fold(Self::EMPTY, |mut acc, p| {
            for d in 0..3 {
                acc.min[d] = acc.min[d].min(p[d]);
                acc.max[d] = acc.max[d].max(p[d]);
            }
            acc
        })
    }

    /// `(min, max)` along one axis.
    #[inline]
    #[must_use]
    pub const fn axis(&self, axis: Axis) -> (f64, f64) {
        (self.min[axis.index()], self.max[axis.index()])
    }

    /// Smallest bounds containing both `self` and `other`.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = *self;
        for d in 0..3 {
            merged.min[d] = merged.min[d].min(other.min[d]);
            merged.max[d] = merged.max[d].max(other.max[d]);
        }
        merged
    }

    /// Union of many bounds, or `None` when there are none.
    pub fn merge_all(bounds: impl IntoIterator<Item = Self>) -> Option<Self> {
        bounds.into_iter().reduce(|acc, b| acc.merge(&b))
    }

    /// Whether `min <= max` on every axis.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        (0..3).all(|d| self.min[d] <= self.max[d])
    }

    /// Whether `other` lies inside `self`, edges inclusive.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        (0..3).all(|d| self.min[d] <= other.min[d] && self.max[d] >= other.max[d])
    }

    /// Whether a point lies inside `self`, edges inclusive.
    #[must_use]
    pub fn contains_point(&self, p: Point) -> bool {
        (0..3).all(|d| self.min[d] <= p[d] && p[d] <= self.max[d])
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<[f64; 6]> for Bounds {
    fn from(b: [f64; 6]) -> Self {
        Self::from_array(b)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bounds: minx={}, miny={}, minz={}, maxx={}, maxy={}, maxz={}",
            self.min[0], self.min[1], self.min[2], self.max[0], self.max[1], self.max[2]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let b = Bounds::from_points(&[[1.0, 5.0, -2.0], [3.0, 0.0, 4.0], [2.0, 2.0, 2.0]]);
        assert_eq!(b, Bounds::new(1.0, 0.0, -2.0, 3.0, 5.0, 4.0));
        assert!(b.is_strict());
    }

    #[test]
    fn test_empty_is_merge_identity() {
        let b = Bounds::new(0.0, 0.0, 0.0, 1.0, 2.0, 3.0);
        assert_eq!(Bounds::from_points(&[]), Bounds::EMPTY);
        assert_eq!(b.merge(&Bounds::EMPTY), b);
        assert_eq!(Bounds::EMPTY.merge(&b), b);
        assert!(!Bounds::EMPTY.is_strict());
    }

    #[test]
    fn test_merge_all() {
        let a = Bounds::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let b = Bounds::new(-1.0, 0.5, 0.0, 0.5, 3.0, 1.0);
        assert_eq!(
            Bounds::merge_all([a, b]),
            Some(Bounds::new(-1.0, 0.0, 0.0, 1.0, 3.0, 1.0))
        );
        assert_eq!(Bounds::merge_all(std::iter::empty()), None);
    }

    #[test]
    fn test_contains() {
        let outer = Bounds::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        let inner = Bounds::new(0.0, 2.0, 3.0, 10.0, 4.0, 5.0);
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.contains(&Bounds::EMPTY));
        assert!(outer.contains_point([10.0, 0.0, 5.0]));
        assert!(!outer.contains_point([10.1, 0.0, 5.0]));
    }

    #[test]
    fn test_array_roundtrip_and_axis() {
        let b = Bounds::from([0.0, 0.0, 0.0, 20.0, 16.0, 10.0]);
        assert_eq!(b.to_array(), [0.0, 0.0, 0.0, 20.0, 16.0, 10.0]);
        assert_eq!(b.axis(Axis::Y), (0.0, 16.0));
    }
}
