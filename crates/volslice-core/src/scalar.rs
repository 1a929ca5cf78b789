//! Scalar component types for volume and slice samples.
//!
//! A grid's component type is fixed by its type parameter. Interpolation is
//! carried out in `f64` and converted back through [`Scalar::from_f64`], which
//! rounds and saturates for integer types.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::cast_precision_loss
)]

use serde::{Deserialize, Serialize};

/// Runtime tag for a scalar component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    F32,
    F64,
}

/// A scalar component type usable as a voxel or pixel value.
pub trait Scalar: bytemuck::Pod + Default + PartialOrd + std::fmt::Debug + Send + Sync {
    /// Runtime tag of this component type.
    const KIND: ScalarKind;

    /// Widens the value to `f64`.
    fn to_f64(self) -> f64;

    /// Narrows an `f64` to this type, rounding to nearest and saturating for integers.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_integer_scalar {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl Scalar for $t {
                const KIND: ScalarKind = ScalarKind::$kind;

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Self {
                    // `as` saturates and maps NaN to zero
                    value.round() as $t
                }
            }
        )*
    };
}

impl_integer_scalar!(
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
);

impl Scalar for f32 {
    const KIND: ScalarKind = ScalarKind::F32;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::F64;

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}
