//! Core types for volslice.
//!
//! This crate provides the data model shared by the extractor and resampler:
//! - [`VolumeGrid`] trait, the read-only query contract over a 3D scalar field,
//!   and [`ImageVolume`], an in-memory implementation
//! - [`Slice`], an owned 2D scalar grid with its physical placement
//! - [`SliceAxis`] and the per-axis [`AxisFrame`] table
//! - Scalar component typing, request options, and errors

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Axis and grid names like i, j, k, u, v are conventional
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod axis;
pub mod error;
pub mod options;
pub mod scalar;
pub mod slice;
pub mod slice_plane;
pub mod volume;

pub use axis::{AxisFrame, Direction, ExtractionMode, FrameAxis, SliceAxis};
pub use error::{Result, SliceError};
pub use options::{Interpolation, SliceOptions};
pub use scalar::{Scalar, ScalarKind};
pub use slice::{Slice, SliceGeometry};
pub use slice_plane::CutPlane;
pub use volume::{Extent, ImageVolume, VolumeGrid};

// Re-export glam types for convenience
pub use glam::{DMat4, DVec2, DVec3};
