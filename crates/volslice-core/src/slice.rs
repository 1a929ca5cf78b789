//! Two-dimensional scalar slices cut from a volume.

use glam::{DMat4, DVec2, DVec3};

use crate::axis::{AxisFrame, SliceAxis};
use crate::error::{Result, SliceError};
use crate::scalar::{Scalar, ScalarKind};
use crate::slice_plane::CutPlane;

/// Physical placement of a slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceGeometry {
    /// The plane the slice lies in.
    pub plane: CutPlane,
    /// Mapping of slice x/y onto volume axes.
    pub frame: AxisFrame,
    /// Physical position of sample (0, 0).
    pub origin: DVec3,
    /// Physical distance between adjacent samples along x and y, taken from
    /// the volume spacing of the mapped axes.
    pub spacing: DVec2,
}

impl SliceGeometry {
    /// Returns a copy with different in-plane spacing.
    #[must_use]
    pub fn with_spacing(self, spacing: DVec2) -> Self {
        Self { spacing, ..self }
    }

    /// Affine map from sample coordinates `(x, y, 0)` to physical space.
    pub fn transform(&self) -> DMat4 {
        DMat4::from_cols(
            (self.frame.u.unit() * self.spacing.x).extend(0.0),
            (self.frame.v.unit() * self.spacing.y).extend(0.0),
            self.plane.normal().extend(0.0),
            self.origin.extend(1.0),
        )
    }

    /// Physical position of a (possibly fractional) sample coordinate.
    pub fn position(&self, x: f64, y: f64) -> DVec3 {
        self.transform().transform_point3(DVec3::new(x, y, 0.0))
    }
}

/// A 2D structured scalar grid, row-major with x varying fastest.
///
/// A slice owns its samples; it never borrows from the volume it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice<T> {
    width: usize,
    height: usize,
    values: Vec<T>,
    geometry: SliceGeometry,
}

impl<T: Scalar> Slice<T> {
    /// Creates a slice, checking that `values` holds `width * height` samples.
    pub fn new(
        width: usize,
        height: usize,
        values: Vec<T>,
        geometry: SliceGeometry,
    ) -> Result<Self> {
        let Some(expected) = width.checked_mul(height) else {
            return Err(SliceError::SizeMismatch {
                expected: usize::MAX,
                actual: values.len(),
            });
        };
        if values.len() != expected {
            return Err(SliceError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            width,
            height,
            values,
            geometry,
        })
    }

    /// Creates a slice by evaluating `f(x, y)` for every sample, row by row.
    pub fn from_fn<F>(width: usize, height: usize, geometry: SliceGeometry, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut values = Vec::with_capacity(width.saturating_mul(height));
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            values,
            geometry,
        }
    }

    /// Returns the slice width (number of samples along x).
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the slice height (number of samples along y).
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns true if either dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the samples.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Consumes the slice, returning its sample buffer.
    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Returns the raw sample bytes in native endianness.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.values.as_slice())
    }

    /// Checked sample access.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x < self.width && y < self.height {
            self.values.get(y * self.width + x).copied()
        } else {
            None
        }
    }

    /// Returns the component type of the samples.
    #[must_use]
    pub fn scalar_kind(&self) -> ScalarKind {
        T::KIND
    }

    /// Minimum and maximum finite sample values, or `None` if there are none.
    #[must_use]
    pub fn scalar_range(&self) -> Option<(f64, f64)> {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for v in self.values.iter().map(|v| v.to_f64()) {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        (min <= max).then_some((min, max))
    }

    /// Returns the physical placement of the slice.
    #[must_use]
    pub fn geometry(&self) -> &SliceGeometry {
        &self.geometry
    }

    /// Returns the axis the slice was cut along.
    #[must_use]
    pub fn axis(&self) -> SliceAxis {
        self.geometry.plane.axis()
    }

    /// Returns the volume index the slice was cut at.
    #[must_use]
    pub fn index(&self) -> i32 {
        self.geometry.plane.index()
    }

    /// Physical offset of the cut plane along the slice axis.
    #[must_use]
    pub fn plane_offset(&self) -> f64 {
        self.geometry.plane.offset()
    }

    /// Physical position of sample (0, 0).
    #[must_use]
    pub fn origin(&self) -> DVec3 {
        self.geometry.origin
    }

    /// In-plane spacing along x and y.
    #[must_use]
    pub fn spacing(&self) -> DVec2 {
        self.geometry.spacing
    }

    /// Physical position of sample `(x, y)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn position(&self, x: usize, y: usize) -> DVec3 {
        self.geometry.position(x as f64, y as f64)
    }
}
