//! Splitting clouds into a 3D grid of cells.

use point_cloud::{Axis, Cloud};

use crate::{Grid3, SplitLocs};

/// Split every cloud along x, then y, then z and merge the fragments that
/// land in the same cell.
///
/// The result has shape `splitlocs.tile_shape()`. Fragments are converted to
/// the output type `T` after the x split, so the y and z splits (and the
/// merging of several input clouds) already operate on `T`.
///
/// Locations are not checked against the clouds' bounds here; see
/// [`SplitLocs::check_within`].
pub fn retile<C, T>(clouds: &[C], splitlocs: &SplitLocs) -> Grid3<T>
where
    C: Cloud,
    T: Cloud + From<C>,
{
    let shape = splitlocs.tile_shape();
    let mut cells: Grid3<Option<T>> = Grid3::from_fn(shape, |_| None);

    for cloud in clouds {
        for (ix, px) in cloud.split(Axis::X, splitlocs.get(Axis::X)).into_iter().enumerate() {
            let px = T::from(px);
            for (iy, py) in px.split(Axis::Y, splitlocs.get(Axis::Y)).into_iter().enumerate() {
                for (iz, pz) in py.split(Axis::Z, splitlocs.get(Axis::Z)).into_iter().enumerate() {
                    let Some(cell) = cells.get_mut([ix, iy, iz]) else {
                        continue;
                    };
                    *cell = Some(match cell.take() {
                        Some(existing) => existing.merge(pz),
                        None => pz,
                    });
                }
            }
        }
    }

    tracing::trace!(?shape, clouds = clouds.len(), "retiled clouds");

    // Only reachable with no input clouds
    cells.map(|cell| cell.unwrap_or_else(|| T::from_parts(Vec::new(), None)))
}
