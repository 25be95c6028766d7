//! Contiguous index specifiers for slicing a tile grid.
//!
//! Both the tiles array and the edge lattice are sliced through
//! [`normalize`] and [`edge_range`] so the two never fall out of step.

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::error::{GridError, GridResult};

/// Selection along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisIndex {
    /// The whole axis.
    #[default]
    Full,
    /// A single tile; negative values count from the end.
    At(isize),
    /// A half-open range with optional ends and step.
    ///
    /// Only a step of 1 (or `None`) is accepted.
    Range {
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    },
}

impl AxisIndex {
    /// A range with an explicit step.
    #[must_use]
    pub const fn stepped(start: Option<isize>, stop: Option<isize>, step: isize) -> Self {
        Self::Range {
            start,
            stop,
            step: Some(step),
        }
    }
}

impl From<isize> for AxisIndex {
    fn from(i: isize) -> Self {
        Self::At(i)
    }
}

impl From<Range<isize>> for AxisIndex {
    fn from(r: Range<isize>) -> Self {
        Self::Range {
            start: Some(r.start),
            stop: Some(r.end),
            step: None,
        }
    }
}

impl From<RangeFrom<isize>> for AxisIndex {
    fn from(r: RangeFrom<isize>) -> Self {
        Self::Range {
            start: Some(r.start),
            stop: None,
            step: None,
        }
    }
}

impl From<RangeTo<isize>> for AxisIndex {
    fn from(r: RangeTo<isize>) -> Self {
        Self::Range {
            start: None,
            stop: Some(r.end),
            step: None,
        }
    }
}

impl From<RangeFull> for AxisIndex {
    fn from(_: RangeFull) -> Self {
        Self::Full
    }
}

/// Resolve a possibly negative bound against an axis of length `len`.
fn clip(i: isize, len: usize) -> usize {
    if i < 0 {
        len.saturating_sub(i.unsigned_abs())
    } else {
        i.unsigned_abs().min(len)
    }
}

/// Resolve `index` to a half-open tile range within `0..len`.
///
/// Follows array slicing rules: negative ends count from the end, ends past
/// the axis are clipped, and a range whose stop precedes its start is empty.
pub fn normalize(index: AxisIndex, len: usize) -> GridResult<Range<usize>> {
    let (start, stop) = match index {
        AxisIndex::Full => (0, len),
        AxisIndex::At(i) => {
            let start = clip(i, len);
            // A negative index past the front selects nothing
            if i < 0 && i.unsigned_abs() > len {
                (0, 0)
            } else {
                (start, (start + 1).min(len))
            }
        }
        AxisIndex::Range { start, stop, step } => {
            if let Some(step) = step.filter(|&s| s != 1) {
                return Err(GridError::UnsupportedStep(step));
            }
            (
                start.map_or(0, |s| clip(s, len)),
                stop.map_or(len, |s| clip(s, len)),
            )
        }
    };
    Ok(start..stop.max(start))
}

/// Lattice range matching a tile range: one longer, unless there are no tiles.
#[must_use]
pub fn edge_range(tiles: &Range<usize>) -> Range<usize> {
    if tiles.is_empty() {
        tiles.clone()
    } else {
        tiles.start..tiles.end + 1
    }
}

/// Resolve up to three specifiers against a grid shape; missing ones are [`AxisIndex::Full`].
pub fn normalize_all(key: &[AxisIndex], shape: [usize; 3]) -> GridResult<[Range<usize>; 3]> {
    if key.len() > 3 {
        return Err(GridError::TooManyIndices(key.len()));
    }
    let axis_key = |d: usize| key.get(d).copied().unwrap_or_default();
    Ok([
        normalize(axis_key(0), shape[0])?,
        normalize(axis_key(1), shape[1])?,
        normalize(axis_key(2), shape[2])?,
    ])
}
