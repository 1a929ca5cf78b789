//! Placement of an axis-aligned cut plane in physical space.

use glam::DVec3;

use crate::axis::{unit_vector, SliceAxis};

/// An axis-aligned plane cutting a volume at a fixed index.
///
/// The plane is perpendicular to `axis` and sits at
/// `origin[axis] + spacing[axis] * index` along it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutPlane {
    axis: SliceAxis,
    index: i32,
    offset: f64,
}

impl CutPlane {
    /// Places the plane through index `index` of a volume with the given
    /// origin and spacing.
    pub fn new(axis: SliceAxis, index: i32, origin: DVec3, spacing: DVec3) -> Self {
        let a = axis.index();
        Self {
            axis,
            index,
            offset: origin[a] + spacing[a] * f64::from(index),
        }
    }

    /// Returns the axis the plane is perpendicular to.
    pub fn axis(&self) -> SliceAxis {
        self.axis
    }

    /// Returns the volume index the plane passes through.
    pub fn index(&self) -> i32 {
        self.index
    }

    /// Physical offset of the plane along its axis.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns the unit normal of the plane (the positive volume axis).
    pub fn normal(&self) -> DVec3 {
        unit_vector(self.axis.index())
    }

    /// Returns a point on the plane.
    pub fn point(&self) -> DVec3 {
        self.normal() * self.offset
    }

    /// Returns the signed distance from a point to the plane.
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        (point - self.point()).dot(self.normal())
    }
}
