//! volslice: axis-aligned slice extraction and resampling for 3D scalar volumes.
//!
//! A volume is cut along one of its principal axes at an index inside its
//! extent, giving a 2D [`Slice`] that owns a copy of the samples. The slice can
//! then be resampled to any resolution and written out as an image.
//!
//! # Quick Start
//!
//! ```
//! use volslice::*;
//!
//! fn main() -> Result<()> {
//!     let extent = Extent::from_dimensions(64, 64, 32)?;
//!     let volume = ImageVolume::from_fn(extent, DVec3::ZERO, DVec3::ONE, |i, j, k| {
//!         (i * j + k) as u16
//!     })?;
//!
//!     // Axial slice through K = 10, resampled to 128x128
//!     let slice = extract(&volume, 2, 10, ExtractionMode::Reoriented)?;
//!     let slice = resample(slice, 128, 128);
//!     assert_eq!(slice.dimensions(), (128, 128));
//!     Ok(())
//! }
//! ```
//!
//! # Orientation
//!
//! In the default [`ExtractionMode::Reoriented`] layout each axis has a fixed
//! viewing orientation:
//!
//! | axis | view     | slice x | slice y |
//! |------|----------|---------|---------|
//! | 0    | sagittal | +K      | -J      |
//! | 1    | coronal  | +I      | +K      |
//! | 2    | axial    | +I      | +J      |
//!
//! [`ExtractionMode::ExtentRestricted`] keeps the two retained axes in
//! ascending order with no flip instead.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::many_single_char_names)]

mod extract;
mod generate;
mod init;
mod resample;
pub mod writer;

// Re-export core types
pub use volslice_core::{
    axis::{AxisFrame, Direction, ExtractionMode, FrameAxis, SliceAxis},
    error::{Result, SliceError},
    options::{Interpolation, SliceOptions},
    scalar::{Scalar, ScalarKind},
    slice::{Slice, SliceGeometry},
    slice_plane::CutPlane,
    volume::{Extent, ImageVolume, VolumeGrid},
    DMat4, DVec2, DVec3,
};

pub use extract::SliceExtractor;
pub use generate::generate_slice;
pub use init::init_logging;
pub use resample::Resampler;
pub use writer::{
    default_output_name, encode_png, save_slice, BitDepth, ImageWriterOptions, IntensityMapping,
    WriteError,
};

/// Extracts the slice at `index` along `axis` (0 = I, 1 = J, 2 = K).
///
/// Shorthand for `SliceExtractor::new(mode).extract(volume, axis, index)`.
pub fn extract<V>(
    volume: &V,
    axis: i32,
    index: i32,
    mode: ExtractionMode,
) -> Result<Slice<V::Scalar>>
where
    V: VolumeGrid + ?Sized,
{
    SliceExtractor::new(mode).extract(volume, axis, index)
}

/// Resamples a slice to `width x height` with linear interpolation.
///
/// Negative dimensions, or dimensions equal to the slice's own, return the
/// slice unchanged.
pub fn resample<T: Scalar>(slice: Slice<T>, width: i32, height: i32) -> Slice<T> {
    Resampler::default().resample(slice, width, height)
}
