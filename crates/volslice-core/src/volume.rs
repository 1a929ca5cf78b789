//! Structured 3D scalar volumes.
//!
//! [`VolumeGrid`] is the read-only query contract the extractor consumes.
//! Loaders for concrete file formats live outside this crate; they only need
//! to produce something implementing the trait, typically an [`ImageVolume`].

use glam::DVec3;

use crate::error::{Result, SliceError};
use crate::scalar::Scalar;

/// Inclusive index bounds `[iMin, iMax, jMin, jMax, kMin, kMax]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent([i32; 6]);

impl Extent {
    /// Creates an extent, checking `min <= max` on every axis.
    pub fn new(bounds: [i32; 6]) -> Result<Self> {
        if bounds[0] > bounds[1] || bounds[2] > bounds[3] || bounds[4] > bounds[5] {
            return Err(SliceError::InvalidExtent(bounds));
        }
        Ok(Self(bounds))
    }

    /// Creates the extent `[0, nx-1, 0, ny-1, 0, nz-1]`.
    pub fn from_dimensions(nx: u32, ny: u32, nz: u32) -> Result<Self> {
        let upper = |n: u32| i32::try_from(n).map(|n| n - 1).unwrap_or(-1);
        Self::new([0, upper(nx), 0, upper(ny), 0, upper(nz)])
    }

    /// Returns the raw six-integer bounds.
    #[must_use]
    pub fn bounds(&self) -> [i32; 6] {
        self.0
    }

    /// Lower bound on `axis`.
    #[must_use]
    pub fn min(&self, axis: usize) -> i32 {
        self.0[axis * 2]
    }

    /// Upper bound on `axis`.
    #[must_use]
    pub fn max(&self, axis: usize) -> i32 {
        self.0[axis * 2 + 1]
    }

    /// Number of indices on `axis` (`max - min + 1`).
    #[must_use]
    pub fn span(&self, axis: usize) -> usize {
        let span = i64::from(self.max(axis)) - i64::from(self.min(axis)) + 1;
        usize::try_from(span).unwrap_or(0)
    }

    /// Number of indices on each axis.
    #[must_use]
    pub fn dimensions(&self) -> [usize; 3] {
        [self.span(0), self.span(1), self.span(2)]
    }

    /// Total number of grid points, or `None` if it overflows `usize`.
    #[must_use]
    pub fn num_points(&self) -> Option<usize> {
        let [nx, ny, nz] = self.dimensions();
        nx.checked_mul(ny)?.checked_mul(nz)
    }

    /// Returns whether `index` lies within the bounds of `axis`.
    #[must_use]
    pub fn contains(&self, axis: usize, index: i32) -> bool {
        self.min(axis) <= index && index <= self.max(axis)
    }

    /// Returns whether the index triple lies within the extent.
    #[must_use]
    pub fn contains_point(&self, i: i32, j: i32, k: i32) -> bool {
        self.contains(0, i) && self.contains(1, j) && self.contains(2, k)
    }

    /// Degenerate sub-extent holding the single index `index` on `axis`.
    ///
    /// Returns `None` if `index` lies outside the bounds of `axis`.
    #[must_use]
    pub fn restricted(&self, axis: usize, index: i32) -> Option<Extent> {
        if !self.contains(axis, index) {
            return None;
        }
        let mut bounds = self.0;
        bounds[axis * 2] = index;
        bounds[axis * 2 + 1] = index;
        Some(Extent(bounds))
    }
}

/// Read-only view over a 3D structured scalar field.
///
/// Implementations must be consistent: `scalar` is defined for every index
/// triple inside `extent()`, and `spacing()` has no zero component.
pub trait VolumeGrid {
    /// Component type of the samples.
    type Scalar: Scalar;

    /// Inclusive index bounds.
    fn extent(&self) -> Extent;

    /// Physical position of index (0, 0, 0).
    fn origin(&self) -> DVec3;

    /// Physical distance between adjacent indices; the sign encodes axis flips.
    fn spacing(&self) -> DVec3;

    /// Sample at an index triple inside `extent()`.
    fn scalar(&self, i: i32, j: i32, k: i32) -> Self::Scalar;

    /// Physical position of an index triple.
    fn point_position(&self, i: i32, j: i32, k: i32) -> DVec3 {
        self.origin() + self.spacing() * DVec3::new(f64::from(i), f64::from(j), f64::from(k))
    }
}

/// An in-memory volume with samples stored x-fastest, then y, then z.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageVolume<T> {
    extent: Extent,
    origin: DVec3,
    spacing: DVec3,
    values: Vec<T>,
}

impl<T: Scalar> ImageVolume<T> {
    /// Creates a volume from a flat value buffer.
    ///
    /// # Arguments
    /// * `extent` - Inclusive index bounds
    /// * `origin` - Physical position of index (0, 0, 0)
    /// * `spacing` - Per-axis spacing, finite and non-zero
    /// * `values` - `extent.num_points()` samples, i fastest, then j, then k
    pub fn new(extent: Extent, origin: DVec3, spacing: DVec3, values: Vec<T>) -> Result<Self> {
        validate_spacing(spacing)?;
        let expected = point_count(extent, values.len())?;
        if values.len() != expected {
            return Err(SliceError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            extent,
            origin,
            spacing,
            values,
        })
    }

    /// Creates a volume by evaluating `f` at every index triple.
    pub fn from_fn<F>(extent: Extent, origin: DVec3, spacing: DVec3, mut f: F) -> Result<Self>
    where
        F: FnMut(i32, i32, i32) -> T,
    {
        validate_spacing(spacing)?;
        let mut values = Vec::with_capacity(point_count(extent, 0)?);
        for k in extent.min(2)..=extent.max(2) {
            for j in extent.min(1)..=extent.max(1) {
                for i in extent.min(0)..=extent.max(0) {
                    values.push(f(i, j, k));
                }
            }
        }
        Self::new(extent, origin, spacing, values)
    }

    /// Returns the flat sample buffer.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Flattens an index triple inside the extent to a buffer position.
    #[must_use]
    pub fn flatten_index(&self, i: i32, j: i32, k: i32) -> usize {
        let [nx, ny, _] = self.extent.dimensions();
        let offset = |axis: usize, index: i32| {
            usize::try_from(i64::from(index) - i64::from(self.extent.min(axis))).unwrap_or(0)
        };
        offset(0, i) + offset(1, j) * nx + offset(2, k) * nx * ny
    }

    /// Checked sample access.
    #[must_use]
    pub fn get(&self, i: i32, j: i32, k: i32) -> Option<T> {
        if self.extent.contains_point(i, j, k) {
            self.values.get(self.flatten_index(i, j, k)).copied()
        } else {
            None
        }
    }
}

impl<T: Scalar> VolumeGrid for ImageVolume<T> {
    type Scalar = T;

    fn extent(&self) -> Extent {
        self.extent
    }

    fn origin(&self) -> DVec3 {
        self.origin
    }

    fn spacing(&self) -> DVec3 {
        self.spacing
    }

    fn scalar(&self, i: i32, j: i32, k: i32) -> T {
        self.values[self.flatten_index(i, j, k)]
    }
}

fn point_count(extent: Extent, actual: usize) -> Result<usize> {
    match extent.num_points() {
        Some(count) => Ok(count),
        None => Err(SliceError::SizeMismatch {
            expected: usize::MAX,
            actual,
        }),
    }
}

fn validate_spacing(spacing: DVec3) -> Result<()> {
    let components = spacing.to_array();
    if components.iter().any(|s| *s == 0.0 || !s.is_finite()) {
        return Err(SliceError::InvalidSpacing(components));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_validation() {
        assert!(Extent::new([0, 200, 0, 100, 0, 150]).is_ok());
        assert!(Extent::new([0, 0, 3, 3, -2, -2]).is_ok());
        assert!(matches!(
            Extent::new([0, 1, 5, 4, 0, 1]),
            Err(SliceError::InvalidExtent(_))
        ));
        assert!(Extent::from_dimensions(0, 1, 1).is_err());
    }

    #[test]
    fn test_extent_spans() {
        let extent = Extent::new([0, 200, 0, 100, 0, 150]).unwrap();
        assert_eq!(extent.dimensions(), [201, 101, 151]);
        assert_eq!(extent.num_points(), Some(201 * 101 * 151));
        assert!(extent.contains(1, 100));
        assert!(!extent.contains(1, 101));
        assert!(!extent.contains(0, -1));

        let plane = extent.restricted(1, 40).unwrap();
        assert_eq!(plane.bounds(), [0, 200, 40, 40, 0, 150]);
        assert_eq!(plane.span(1), 1);
        assert_eq!(extent.restricted(2, 151), None);
    }

    #[test]
    fn test_point_count_overflow_is_an_error() {
        let bounds = [i32::MIN, i32::MAX, i32::MIN, i32::MAX, 0, 3];
        let extent = Extent::new(bounds).unwrap();
        assert_eq!(extent.num_points(), None);

        let result = ImageVolume::new(extent, DVec3::ZERO, DVec3::ONE, vec![0_u8; 4]);
        assert!(matches!(
            result,
            Err(SliceError::SizeMismatch {
                expected: usize::MAX,
                actual: 4
            })
        ));

        let result = ImageVolume::from_fn(extent, DVec3::ZERO, DVec3::ONE, |_, _, _| 0_u8);
        assert!(result.is_err());
    }

    #[test]
    fn test_volume_size_mismatch() {
        let extent = Extent::from_dimensions(2, 2, 2).unwrap();
        let result = ImageVolume::new(extent, DVec3::ZERO, DVec3::ONE, vec![0_u8; 7]);
        assert!(matches!(
            result,
            Err(SliceError::SizeMismatch {
                expected: 8,
                actual: 7
            })
        ));
    }

    #[test]
    fn test_volume_zero_spacing() {
        let extent = Extent::from_dimensions(2, 2, 2).unwrap();
        let zero_y = DVec3::new(1.0, 0.0, 1.0);
        let result = ImageVolume::new(extent, DVec3::ZERO, zero_y, vec![0_u8; 8]);
        assert!(matches!(result, Err(SliceError::InvalidSpacing(_))));

        // Negative spacing encodes a flip and is allowed
        let flipped_y = DVec3::new(1.0, -1.0, 1.0);
        let result = ImageVolume::new(extent, DVec3::ZERO, flipped_y, vec![0_u8; 8]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_volume_indexing_with_offset_extent() {
        let extent = Extent::new([-1, 1, 2, 3, 10, 11]).unwrap();
        let volume = ImageVolume::from_fn(extent, DVec3::ZERO, DVec3::ONE, |i, j, k| {
            i * 100 + j * 10 + k
        })
        .unwrap();

        assert_eq!(volume.scalar(-1, 2, 10), -100 + 20 + 10);
        assert_eq!(volume.scalar(1, 3, 11), 100 + 30 + 11);
        assert_eq!(volume.get(0, 3, 10), Some(40));
        assert_eq!(volume.get(2, 3, 10), None);
        assert_eq!(volume.flatten_index(-1, 2, 10), 0);
        assert_eq!(volume.flatten_index(1, 3, 11), volume.values().len() - 1);
    }

    #[test]
    fn test_point_position() {
        let extent = Extent::from_dimensions(4, 4, 4).unwrap();
        let volume = ImageVolume::from_fn(
            extent,
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(0.5, -1.0, 2.0),
            |_, _, _| 0.0_f32,
        )
        .unwrap();
        let p = volume.point_position(2, 1, 3);
        assert!((p - DVec3::new(2.0, 1.0, 9.0)).length() < 1e-12);
    }
}
