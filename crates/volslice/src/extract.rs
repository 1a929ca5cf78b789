//! Axis-aligned slice extraction.

use glam::DVec2;
use volslice_core::{
    CutPlane, ExtractionMode, Result, Slice, SliceAxis, SliceError, SliceGeometry, VolumeGrid,
};

/// Cuts 2D slices out of a volume along one of its principal axes.
///
/// The extractor holds no state besides its [`ExtractionMode`]; every call is
/// independent and only reads the volume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliceExtractor {
    mode: ExtractionMode,
}

impl SliceExtractor {
    /// Creates an extractor using the given slice layout.
    pub fn new(mode: ExtractionMode) -> Self {
        Self { mode }
    }

    /// Returns the slice layout this extractor produces.
    pub fn mode(&self) -> ExtractionMode {
        self.mode
    }

    /// Extracts the slice at `index` along `axis` (0 = I, 1 = J, 2 = K).
    ///
    /// # Errors
    /// [`SliceError::InvalidAxis`] if `axis` is not 0, 1 or 2, and
    /// [`SliceError::IndexOutOfRange`] if `index` lies outside the volume
    /// extent on that axis.
    pub fn extract<V>(&self, volume: &V, axis: i32, index: i32) -> Result<Slice<V::Scalar>>
    where
        V: VolumeGrid + ?Sized,
    {
        let axis = SliceAxis::from_index(axis)?;
        self.extract_along(volume, axis, index)
    }

    /// Extracts the slice at `index` along an already validated axis.
    pub fn extract_along<V>(
        &self,
        volume: &V,
        axis: SliceAxis,
        index: i32,
    ) -> Result<Slice<V::Scalar>>
    where
        V: VolumeGrid + ?Sized,
    {
        let extent = volume.extent();
        let a = axis.index();
        let Some(cut) = extent.restricted(a, index) else {
            return Err(SliceError::IndexOutOfRange {
                axis: a,
                index,
                min: extent.min(a),
                max: extent.max(a),
            });
        };

        let frame = axis.frame(self.mode);
        let (u, v) = (frame.u, frame.v);
        let width = cut.span(u.axis);
        let height = cut.span(v.axis);

        // Volume index of a slice sample; the normal component is pinned by `cut`
        let volume_index = |x: usize, y: usize| {
            let mut ijk = [cut.min(0), cut.min(1), cut.min(2)];
            ijk[u.axis] = u.volume_index(cut.min(u.axis), cut.max(u.axis), x);
            ijk[v.axis] = v.volume_index(cut.min(v.axis), cut.max(v.axis), y);
            ijk
        };

        let spacing = volume.spacing();
        let [i0, j0, k0] = volume_index(0, 0);
        let geometry = SliceGeometry {
            plane: CutPlane::new(axis, index, volume.origin(), spacing),
            frame,
            origin: volume.point_position(i0, j0, k0),
            spacing: DVec2::new(spacing[u.axis], spacing[v.axis]),
        };

        log::debug!(
            "extracting {} slice at index {} ({:?}): {}x{} samples, plane offset {}",
            axis.view_name(),
            index,
            self.mode,
            width,
            height,
            geometry.plane.offset()
        );

        Ok(Slice::from_fn(width, height, geometry, |x, y| {
            let [i, j, k] = volume_index(x, y);
            volume.scalar(i, j, k)
        }))
    }
}
