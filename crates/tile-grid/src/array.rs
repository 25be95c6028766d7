//! Dense 3D array stored in a flat `Vec`.

use std::ops::Range;

/// A dense `(nx, ny, nz)` array in x-major order.
///
/// Element `[ix, iy, iz]` lives at `(ix * ny + iy) * nz + iz`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid3<T> {
    shape: [usize; 3],
    data: Vec<T>,
}

impl<T> Grid3<T> {
    /// Build an array by calling `f` for every index in x-major order.
    pub fn from_fn(shape: [usize; 3], mut f: impl FnMut([usize; 3]) -> T) -> Self {
        let mut data = Vec::with_capacity(shape.iter().product());
        for ix in 0..shape[0] {
            for iy in 0..shape[1] {
                for iz in 0..shape[2] {
                    data.push(f([ix, iy, iz]));
                }
            }
        }
        Self { shape, data }
    }

    /// Wrap an x-major buffer. Returns `None` if the length does not match the shape.
    #[must_use]
    pub fn from_vec(shape: [usize; 3], data: Vec<T>) -> Option<Self> {
        (data.len() == shape.iter().product::<usize>()).then_some(Self { shape, data })
    }

    /// Array extent along each axis.
    #[must_use]
    pub const fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// Total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn offset(&self, [ix, iy, iz]: [usize; 3]) -> Option<usize> {
        let [nx, ny, nz] = self.shape;
        (ix < nx && iy < ny && iz < nz).then(|| (ix * ny + iy) * nz + iz)
    }

    /// Element at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        self.offset(index).map(|i| &self.data[i])
    }

    /// Mutable element at `index`, if in range.
    pub fn get_mut(&mut self, index: [usize; 3]) -> Option<&mut T> {
        self.offset(index).map(move |i| &mut self.data[i])
    }

    /// Iterate elements with their indices in x-major order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = ([usize; 3], &T)> + '_ {
        let [_, ny, nz] = self.shape;
        self.data.iter().enumerate().map(move |(i, v)| {
            let iz = i % nz;
            let iy = (i / nz) % ny;
            let ix = i / (nz * ny);
            ([ix, iy, iz], v)
        })
    }

    /// Iterate elements in x-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Apply `f` to every element, keeping the shape.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Grid3<U> {
        Grid3 {
            shape: self.shape,
            data: self.data.into_iter().map(f).collect(),
        }
    }

    /// Take the flat x-major buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone> Grid3<T> {
    /// Copy out the contiguous block `ranges[0] x ranges[1] x ranges[2]`.
    ///
    /// Ranges must lie within the shape and have `start <= end`.
    #[must_use]
    pub fn block(&self, ranges: &[Range<usize>; 3]) -> Self {
        debug_assert!(
            ranges
                .iter()
                .zip(self.shape)
                .all(|(r, n)| r.start <= r.end && r.end <= n)
        );
        let shape = [ranges[0].len(), ranges[1].len(), ranges[2].len()];
        Self::from_fn(shape, |[ix, iy, iz]| {
            let [_, ny, nz] = self.shape;
            let src = ((ranges[0].start + ix) * ny + ranges[1].start + iy) * nz + ranges[2].start + iz;
            self.data[src].clone()
        })
    }
}

impl<'a, T> IntoIterator for &'a Grid3<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
