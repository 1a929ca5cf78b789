//! Error types for volslice.

use thiserror::Error;

/// The main error type for volslice operations.
#[derive(Error, Debug)]
pub enum SliceError {
    /// The axis argument is not one of 0 (I), 1 (J) or 2 (K).
    #[error("invalid axis {0}: expected 0 (I), 1 (J) or 2 (K)")]
    InvalidAxis(i32),

    /// The slice index lies outside the volume extent on the chosen axis.
    #[error("slice index {index} out of range [{min}, {max}] on axis {axis}")]
    IndexOutOfRange {
        axis: usize,
        index: i32,
        min: i32,
        max: i32,
    },

    /// An extent has `min > max` on some axis.
    #[error("invalid extent {0:?}: min must not exceed max on any axis")]
    InvalidExtent([i32; 6]),

    /// A spacing component is zero or not finite.
    #[error("invalid spacing {0:?}: components must be finite and non-zero")]
    InvalidSpacing([f64; 3]),

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for volslice operations.
pub type Result<T> = std::result::Result<T, SliceError>;
