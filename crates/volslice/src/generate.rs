//! One-shot extract-then-resample pipeline.

use volslice_core::{Result, Slice, SliceOptions, VolumeGrid};

use crate::{Resampler, SliceExtractor};

/// Extracts and, if requested, resamples a slice in one call.
///
/// Runs a [`SliceExtractor`] with `options.mode`, then a [`Resampler`] with
/// `options.interpolation` and the requested width and height.
///
/// # Errors
/// Fails only on an invalid axis or an out-of-range index; no partial slice
/// is produced in that case.
///
/// # Example
///
/// ```
/// use volslice::*;
///
/// let extent = Extent::new([0, 200, 0, 100, 0, 150]).unwrap();
/// let volume = ImageVolume::from_fn(
///     extent,
///     DVec3::ZERO,
///     DVec3::new(0.1, 0.2, 0.15),
///     |i, j, k| (i + j + k) as f32,
/// )
/// .unwrap();
///
/// let options = SliceOptions::new(1, 100).with_size(10, 10);
/// let slice = generate_slice(&volume, &options).unwrap();
/// assert_eq!(slice.dimensions(), (10, 10));
/// ```
pub fn generate_slice<V>(volume: &V, options: &SliceOptions) -> Result<Slice<V::Scalar>>
where
    V: VolumeGrid + ?Sized,
{
    let slice = SliceExtractor::new(options.mode).extract(volume, options.axis, options.index)?;
    Ok(Resampler::new(options.interpolation).resample(slice, options.width, options.height))
}
