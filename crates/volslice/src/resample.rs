//! Resolution changes for extracted slices.
//!
//! Target sample centres are spread so the first and last samples land on the
//! first and last source samples; a single-sample axis samples the source
//! centre. Any coordinate that falls outside the source is clamped to the
//! nearest edge sample.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

use glam::DVec2;
use volslice_core::{Interpolation, Scalar, Slice, SliceGeometry};

/// Resamples slices to a requested resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resampler {
    interpolation: Interpolation,
}

impl Resampler {
    /// Creates a resampler with the given interpolation policy.
    pub fn new(interpolation: Interpolation) -> Self {
        Self { interpolation }
    }

    /// Returns the interpolation policy.
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Resamples `slice` to `width x height`.
    ///
    /// A negative `width` or `height` means no resampling was requested, and a
    /// target equal to the current dimensions needs none; in both cases the
    /// input is returned untouched. A zero target dimension gives an empty
    /// slice.
    pub fn resample<T: Scalar>(&self, slice: Slice<T>, width: i32, height: i32) -> Slice<T> {
        let (Ok(width), Ok(height)) = (usize::try_from(width), usize::try_from(height)) else {
            log::trace!("no resampling requested ({width}x{height})");
            return slice;
        };
        if (width, height) == slice.dimensions() {
            log::trace!("slice already {width}x{height}, skipping resample");
            return slice;
        }

        let (src_w, src_h) = slice.dimensions();
        let map_x = AxisMap::new(src_w, width);
        let map_y = AxisMap::new(src_h, height);

        let source = *slice.geometry();
        let geometry = SliceGeometry {
            origin: source.position(map_x.start, map_y.start),
            ..source.with_spacing(DVec2::new(
                map_x.spacing_factor() * source.spacing.x,
                map_y.spacing_factor() * source.spacing.y,
            ))
        };

        log::debug!(
            "resampling {}x{} slice to {}x{} ({:?})",
            src_w,
            src_h,
            width,
            height,
            self.interpolation
        );

        if slice.is_empty() {
            if width > 0 && height > 0 {
                log::warn!(
                    "resampling an empty {src_w}x{src_h} slice to {width}x{height}; \
                     filling with zeros"
                );
            }
            return Slice::from_fn(width, height, geometry, |_, _| T::default());
        }

        let sample = |sx: f64, sy: f64| match self.interpolation {
            Interpolation::Nearest => slice_value(&slice, nearest(sx, src_w), nearest(sy, src_h)),
            Interpolation::Linear => bilinear(&slice, sx, sy),
        };

        Slice::from_fn(width, height, geometry, |x, y| {
            T::from_f64(sample(map_x.source(x), map_y.source(y)))
        })
    }
}

/// Maps target sample indices onto fractional source coordinates.
#[derive(Debug, Clone, Copy)]
struct AxisMap {
    /// Source coordinate of target sample 0.
    start: f64,
    /// Source samples per target sample.
    scale: f64,
}

impl AxisMap {
    fn new(src: usize, dst: usize) -> Self {
        if dst > 1 && src > 1 {
            Self {
                start: 0.0,
                scale: (src - 1) as f64 / (dst - 1) as f64,
            }
        } else if dst == 1 {
            Self {
                start: src.saturating_sub(1) as f64 / 2.0,
                scale: 1.0,
            }
        } else {
            // No interpolation span: every target sample reads source sample 0
            Self {
                start: 0.0,
                scale: 0.0,
            }
        }
    }

    /// Factor applied to the physical spacing; a one-sample source keeps its spacing.
    fn spacing_factor(self) -> f64 {
        if self.scale > 0.0 {
            self.scale
        } else {
            1.0
        }
    }

    fn source(self, target: usize) -> f64 {
        self.start + self.scale * target as f64
    }
}

fn clamp_coordinate(coord: f64, len: usize) -> f64 {
    let upper = len.saturating_sub(1) as f64;
    if coord.is_nan() {
        0.0
    } else {
        coord.clamp(0.0, upper)
    }
}

fn nearest(coord: f64, len: usize) -> usize {
    clamp_coordinate(coord, len).round() as usize
}

fn slice_value<T: Scalar>(slice: &Slice<T>, x: usize, y: usize) -> f64 {
    slice.values()[y * slice.width() + x].to_f64()
}

fn bilinear<T: Scalar>(slice: &Slice<T>, sx: f64, sy: f64) -> f64 {
    let (w, h) = slice.dimensions();
    let sx = clamp_coordinate(sx, w);
    let sy = clamp_coordinate(sy, h);

    let x0 = sx.floor() as usize;
    let y0 = sy.floor() as usize;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);
    let fx = sx - x0 as f64;
    let fy = sy - y0 as f64;

    let top = lerp(slice_value(slice, x0, y0), slice_value(slice, x1, y0), fx);
    let bottom = lerp(slice_value(slice, x0, y1), slice_value(slice, x1, y1), fx);
    lerp(top, bottom, fy)
}

#[allow(clippy::float_cmp)]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    // Equal endpoints short-circuit so infinities do not turn into NaN
    if t == 0.0 || a == b {
        a
    } else {
        a + (b - a) * t
    }
}
