//! Per-axis split locations.

use point_cloud::{Axis, Bounds};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{GridError, GridResult};

/// Sorted, deduplicated cut coordinates for one axis.
pub type AxisLocs = SmallVec<[f64; 8]>;

/// Locations at which to cut along each axis.
///
/// An axis that is absent means "no split on this axis"; the grid then has
/// a single tile along it. Locations are kept sorted and deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitLocs {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de_locs")]
    x: Option<AxisLocs>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de_locs")]
    y: Option<AxisLocs>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de_locs")]
    z: Option<AxisLocs>,
}

fn normalize(mut locs: AxisLocs) -> AxisLocs {
    locs.sort_by(f64::total_cmp);
    locs.dedup();
    locs
}

fn de_locs<'de, D>(deserializer: D) -> Result<Option<AxisLocs>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<AxisLocs>::deserialize(deserializer)?.map(normalize))
}

impl SplitLocs {
    /// No splits on any axis.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`SplitLocs::set`].
    #[must_use]
    pub fn with(mut self, axis: Axis, locs: impl IntoIterator<Item = f64>) -> Self {
        self.set(axis, locs);
        self
    }

    /// Set the locations for `axis`, sorting and deduplicating them.
    pub fn set(&mut self, axis: Axis, locs: impl IntoIterator<Item = f64>) {
        *self.slot_mut(axis) = Some(normalize(locs.into_iter().collect()));
    }

    /// Drop the entry for `axis`.
    pub fn remove(&mut self, axis: Axis) -> Option<AxisLocs> {
        self.slot_mut(axis).take()
    }

    /// Whether `axis` has an entry (possibly empty).
    #[must_use]
    pub fn contains_axis(&self, axis: Axis) -> bool {
        self.slot(axis).is_some()
    }

    /// Locations for `axis`; empty when the axis is absent.
    #[must_use]
    pub fn get(&self, axis: Axis) -> &[f64] {
        self.slot(axis).map_or(&[], |locs| locs.as_slice())
    }

    /// Number of tiles the locations produce along each axis.
    #[must_use]
    pub fn tile_shape(&self) -> [usize; 3] {
        Axis::ALL.map(|axis| self.get(axis).len() + 1)
    }

    /// Smallest and largest location per axis.
    ///
    /// Axes without locations get an inverted `(+inf, -inf)` extent so that
    /// any bounds contains them.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let mut b = Bounds::EMPTY;
        for axis in Axis::ALL {
            if let (Some(&lo), Some(&hi)) = (self.get(axis).first(), self.get(axis).last()) {
                b.min[axis.index()] = lo;
                b.max[axis.index()] = hi;
            }
        }
        b
    }

    /// Check that every location lies strictly inside `bounds`.
    pub fn check_within(&self, bounds: &Bounds) -> GridResult<()> {
        for axis in Axis::ALL {
            let (min, max) = bounds.axis(axis);
            if let Some(&location) = self.get(axis).iter().find(|&&loc| !(min < loc && loc < max)) {
                return Err(GridError::OutOfBounds {
                    axis,
                    location,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }

    const fn slot(&self, axis: Axis) -> Option<&AxisLocs> {
        match axis {
            Axis::X => self.x.as_ref(),
            Axis::Y => self.y.as_ref(),
            Axis::Z => self.z.as_ref(),
        }
    }

    fn slot_mut(&mut self, axis: Axis) -> &mut Option<AxisLocs> {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

/// Locations that split `bounds` into `n` even sections per axis.
///
/// An axis given `Some(n)` gets the `n - 1` interior points of
/// `linspace(min, max, n, endpoint = false)`; `n < 2` yields an empty entry.
/// An axis given `None` is left out entirely.
pub fn fractional_splitlocs(
    bounds: &Bounds,
    nx: Option<usize>,
    ny: Option<usize>,
    nz: Option<usize>,
) -> GridResult<SplitLocs> {
    let mut splitlocs = SplitLocs::new();
    for (axis, n) in Axis::ALL.into_iter().zip([nx, ny, nz]) {
        let Some(n) = n else { continue };
        let (min, max) = bounds.axis(axis);
        if min > max {
            return Err(GridError::InvalidBounds { axis, min, max });
        }
        let step = (max - min) / n.max(1) as f64;
        splitlocs.set(axis, (1..n).map(|i| min + step * i as f64));
    }
    Ok(splitlocs)
}
