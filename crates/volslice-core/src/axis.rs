//! Principal axes and the in-plane frames used to lay out a slice.
//!
//! Every axis-aligned cut is described by an [`AxisFrame`]: which volume axis
//! (and in which direction) feeds the slice's x and y, and which volume axis is
//! the plane normal. The frames for both extraction modes live in two constant
//! tables indexed by axis, so there is exactly one place that encodes the
//! sagittal/coronal/axial orientation convention.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SliceError};

/// One of the three principal volume axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SliceAxis {
    /// Axis 0. Cutting along I gives a sagittal slice.
    I,
    /// Axis 1. Cutting along J gives a coronal slice.
    J,
    /// Axis 2. Cutting along K gives an axial slice.
    K,
}

impl SliceAxis {
    /// All axes in index order.
    pub const ALL: [SliceAxis; 3] = [SliceAxis::I, SliceAxis::J, SliceAxis::K];

    /// Returns the axis for an integer index, failing with
    /// [`SliceError::InvalidAxis`] for anything outside `0..=2`.
    pub fn from_index(axis: i32) -> Result<Self> {
        match axis {
            0 => Ok(SliceAxis::I),
            1 => Ok(SliceAxis::J),
            2 => Ok(SliceAxis::K),
            _ => Err(SliceError::InvalidAxis(axis)),
        }
    }

    /// Returns the integer index of this axis.
    pub fn index(self) -> usize {
        match self {
            SliceAxis::I => 0,
            SliceAxis::J => 1,
            SliceAxis::K => 2,
        }
    }

    /// Conventional anatomical name of a cut along this axis.
    pub fn view_name(self) -> &'static str {
        match self {
            SliceAxis::I => "sagittal",
            SliceAxis::J => "coronal",
            SliceAxis::K => "axial",
        }
    }

    /// Returns the in-plane frame used for this axis in the given mode.
    pub fn frame(self, mode: ExtractionMode) -> AxisFrame {
        match mode {
            ExtractionMode::Reoriented => REORIENTED_FRAMES[self.index()],
            ExtractionMode::ExtentRestricted => RESTRICTED_FRAMES[self.index()],
        }
    }
}

impl TryFrom<i32> for SliceAxis {
    type Error = SliceError;

    fn try_from(axis: i32) -> Result<Self> {
        Self::from_index(axis)
    }
}

impl std::fmt::Display for SliceAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// How the two retained axes of a cut are laid out in the slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExtractionMode {
    /// Fixed viewing orientation per axis (sagittal x=+K y=-J, coronal
    /// x=+I y=+K, axial x=+I y=+J).
    #[default]
    Reoriented,
    /// Single-index sub-extent copied with the retained axes in ascending
    /// order and no flip.
    ExtentRestricted,
}

/// Direction in which a slice axis walks its volume axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From the extent minimum upward.
    Forward,
    /// From the extent maximum downward.
    Reverse,
}

impl Direction {
    /// `+1.0` for forward, `-1.0` for reverse.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }
}

/// A slice axis bound to a volume axis and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameAxis {
    /// Volume axis index (0, 1 or 2).
    pub axis: usize,
    /// Walking direction along that axis.
    pub direction: Direction,
}

impl FrameAxis {
    const fn forward(axis: usize) -> Self {
        Self {
            axis,
            direction: Direction::Forward,
        }
    }

    const fn reverse(axis: usize) -> Self {
        Self {
            axis,
            direction: Direction::Reverse,
        }
    }

    /// Signed unit vector of this axis in volume index space.
    pub fn unit(self) -> DVec3 {
        unit_vector(self.axis) * self.direction.sign()
    }

    /// Volume index reached after `step` samples, given the axis bounds.
    pub fn volume_index(self, min: i32, max: i32, step: usize) -> i32 {
        // step < span <= i32 range, checked by the caller's extent
        let step = i64::try_from(step).unwrap_or(i64::MAX);
        let index = match self.direction {
            Direction::Forward => i64::from(min) + step,
            Direction::Reverse => i64::from(max) - step,
        };
        i32::try_from(index).unwrap_or(if index < 0 { i32::MIN } else { i32::MAX })
    }
}

/// Mapping of a slice's x, y and normal onto volume axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisFrame {
    /// Volume axis feeding the slice x (width) direction.
    pub u: FrameAxis,
    /// Volume axis feeding the slice y (height) direction.
    pub v: FrameAxis,
    /// Volume axis normal to the cut plane.
    pub normal: usize,
}

const REORIENTED_FRAMES: [AxisFrame; 3] = [
    AxisFrame {
        u: FrameAxis::forward(2),
        v: FrameAxis::reverse(1),
        normal: 0,
    },
    AxisFrame {
        u: FrameAxis::forward(0),
        v: FrameAxis::forward(2),
        normal: 1,
    },
    AxisFrame {
        u: FrameAxis::forward(0),
        v: FrameAxis::forward(1),
        normal: 2,
    },
];

const RESTRICTED_FRAMES: [AxisFrame; 3] = [
    AxisFrame {
        u: FrameAxis::forward(1),
        v: FrameAxis::forward(2),
        normal: 0,
    },
    AxisFrame {
        u: FrameAxis::forward(0),
        v: FrameAxis::forward(2),
        normal: 1,
    },
    AxisFrame {
        u: FrameAxis::forward(0),
        v: FrameAxis::forward(1),
        normal: 2,
    },
];

pub(crate) fn unit_vector(axis: usize) -> DVec3 {
    match axis {
        0 => DVec3::X,
        1 => DVec3::Y,
        _ => DVec3::Z,
    }
}
