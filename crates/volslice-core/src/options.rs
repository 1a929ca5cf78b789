//! Configuration for a slice request.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::axis::ExtractionMode;
use crate::error::Result;

/// One complete extract-then-resample request.
///
/// Missing fields take their defaults when deserializing, so `{"index": 12}`
/// is a valid request for an axial slice at K = 12 with no resampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceOptions {
    /// Axis to cut along (0 = I, 1 = J, 2 = K).
    pub axis: i32,

    /// Index along `axis`, within the volume extent.
    pub index: i32,

    /// Target width in samples; negative disables resampling.
    pub width: i32,

    /// Target height in samples; negative disables resampling.
    pub height: i32,

    /// Interpolation used when resampling.
    pub interpolation: Interpolation,

    /// Layout of the extracted slice.
    pub mode: ExtractionMode,
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self {
            axis: 2,
            index: 0,
            width: -1,
            height: -1,
            interpolation: Interpolation::Linear,
            mode: ExtractionMode::Reoriented,
        }
    }
}

impl SliceOptions {
    /// Creates options for cutting `axis` at `index` without resampling.
    pub fn new(axis: i32, index: i32) -> Self {
        Self {
            axis,
            index,
            ..Self::default()
        }
    }

    /// Sets the target resolution.
    #[must_use]
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the interpolation policy.
    #[must_use]
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Sets the extraction mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ExtractionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Parses options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded slice options from {}", path.as_ref().display());
        Self::from_json(&text)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Interpolation policy for resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interpolation {
    /// Bilinear interpolation between the four surrounding samples.
    #[default]
    Linear,
    /// Value of the closest sample.
    Nearest,
}
