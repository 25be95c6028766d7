//! The cloud capability and a plain mutable point cloud.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Axis, Bounds, Point};

/// Free-form metadata carried alongside point coordinates.
///
/// Headers travel with every fragment produced by [`Cloud::split`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    entries: BTreeMap<String, String>,
}

impl Header {
    /// Create an empty header.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Look up an entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the header has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Capability required by the tiling engine.
///
/// Implementers only have to provide storage access; splitting, merging and
/// bounds have default implementations in terms of [`Cloud::points`] and
/// [`Cloud::from_parts`].
pub trait Cloud: Sized {
    /// Ordered `(x, y, z)` coordinates.
    fn points(&self) -> &[Point];

    /// Attached metadata, if any.
    fn header(&self) -> Option<&Header>;

    /// Build a cloud of this type from owned parts.
    fn from_parts(points: Vec<Point>, header: Option<Header>) -> Self;

    /// Number of points.
    fn len(&self) -> usize {
        self.points().len()
    }

    /// Check if the cloud has no points.
    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// Tight bounds of the points, or [`Bounds::EMPTY`].
    fn bounds(&self) -> Bounds {
        Bounds::from_points(self.points())
    }

    /// Split along `axis` at `locations`, which must be sorted ascending.
    ///
    /// Returns `locations.len() + 1` fragments in ascending spatial order.
    /// Fragment `i` holds the points with `locations[i - 1] < p <= locations[i]`;
    /// the outermost fragments are open towards the cloud's own extent.
    fn split(&self, axis: Axis, locations: &[f64]) -> Vec<Self> {
        let d = axis.index();
        let mut buckets: Vec<Vec<Point>> = vec![Vec::new(); locations.len() + 1];
        for p in self.points() {
            let bucket = locations.partition_point(|&loc| loc < p[d]);
            buckets[bucket].push(*p);
        }
        tracing::trace!(
            %axis,
            fragments = buckets.len(),
            points = self.len(),
            "split cloud"
        );
        buckets
            .into_iter()
            .map(|points| Self::from_parts(points, self.header().cloned()))
            .collect()
    }

    /// Combine two clouds occupying the same cell.
    ///
    /// Points are concatenated without deduplication. The first available
    /// header is kept.
    #[must_use]
    fn merge(self, other: Self) -> Self {
        let header = self.header().or_else(|| other.header()).cloned();
        let mut points = Vec::with_capacity(self.len() + other.len());
        points.extend_from_slice(self.points());
        points.extend_from_slice(other.points());
        Self::from_parts(points, header)
    }
}

/// A mutable, owned point cloud.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    points: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    header: Option<Header>,
}

impl PointCloud {
    /// Create a cloud without a header.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            header: None,
        }
    }

    /// Create a cloud with a header.
    #[must_use]
    pub fn with_header(points: Vec<Point>, header: Header) -> Self {
        Self {
            points,
            header: Some(header),
        }
    }

    /// Replace the coordinate buffer.
    pub fn set_points(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    /// Append a single point.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Take the coordinate buffer.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl Cloud for PointCloud {
    fn points(&self) -> &[Point] {
        &self.points
    }

    fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    fn from_parts(points: Vec<Point>, header: Option<Header>) -> Self {
        Self { points, header }
    }

    fn merge(mut self, other: Self) -> Self {
        if self.header.is_none() {
            self.header = other.header;
        }
        self.points.extend(other.points);
        self
    }
}

impl From<Vec<Point>> for PointCloud {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for PointCloud {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
