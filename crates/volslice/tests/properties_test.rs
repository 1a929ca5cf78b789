//! Property tests for extraction and resampling laws.

use proptest::prelude::*;
use volslice::*;

/// A small volume with arbitrary extent offsets and spacing signs.
fn arb_volume() -> impl Strategy<Value = ImageVolume<i16>> {
    (
        prop::array::uniform3(-4_i32..4),
        prop::array::uniform3(1_i32..7),
        prop::array::uniform3(prop_oneof![-2.0_f64..-0.1, 0.1_f64..2.0]),
    )
        .prop_map(|(lo, len, spacing)| {
            let extent = Extent::new([
                lo[0],
                lo[0] + len[0] - 1,
                lo[1],
                lo[1] + len[1] - 1,
                lo[2],
                lo[2] + len[2] - 1,
            ])
            .unwrap();
            let origin = DVec3::new(1.0, -2.0, 0.5);
            ImageVolume::from_fn(extent, origin, DVec3::from(spacing), |i, j, k| {
                (i * 49 + j * 7 + k) as i16
            })
            .unwrap()
        })
}

fn arb_mode() -> impl Strategy<Value = ExtractionMode> {
    prop_oneof![
        Just(ExtractionMode::Reoriented),
        Just(ExtractionMode::ExtentRestricted)
    ]
}

proptest! {
    #[test]
    fn extraction_succeeds_exactly_inside_extent(
        volume in arb_volume(),
        axis in 0_i32..3,
        index in -8_i32..12,
        mode in arb_mode(),
    ) {
        let extent = volume.extent();
        let a = axis as usize;
        let inside = extent.min(a) <= index && index <= extent.max(a);
        match extract(&volume, axis, index, mode) {
            Ok(slice) => {
                prop_assert!(inside);
                let frame = SliceAxis::from_index(axis).unwrap().frame(mode);
                prop_assert_eq!(
                    slice.dimensions(),
                    (extent.span(frame.u.axis), extent.span(frame.v.axis))
                );
                prop_assert_eq!(slice.values().len(), slice.width() * slice.height());
            }
            Err(SliceError::IndexOutOfRange { .. }) => prop_assert!(!inside),
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }

    #[test]
    fn invalid_axis_always_rejected(
        volume in arb_volume(),
        axis in prop_oneof![i32::MIN..0, 3_i32..i32::MAX],
        index in -8_i32..12,
    ) {
        let is_invalid_axis = matches!(
            extract(&volume, axis, index, ExtractionMode::Reoriented),
            Err(SliceError::InvalidAxis(a)) if a == axis
        );
        prop_assert!(is_invalid_axis);
    }

    #[test]
    fn extracted_values_lie_on_the_cut_plane(
        volume in arb_volume(),
        axis in 0_i32..3,
        mode in arb_mode(),
    ) {
        let a = axis as usize;
        let index = volume.extent().min(a);
        let slice = extract(&volume, axis, index, mode).unwrap();
        for y in 0..slice.height() {
            for x in 0..slice.width() {
                let p = slice.position(x, y);
                prop_assert!((p[a] - slice.plane_offset()).abs() < 1e-9);
                prop_assert!(slice.geometry().plane.signed_distance(p).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn resample_to_own_size_is_identity(
        volume in arb_volume(),
        axis in 0_i32..3,
        mode in arb_mode(),
    ) {
        let index = volume.extent().min(axis as usize);
        let slice = extract(&volume, axis, index, mode).unwrap();
        let (w, h) = slice.dimensions();
        let resampled = resample(slice.clone(), w as i32, h as i32);
        prop_assert_eq!(resampled, slice);
    }

    #[test]
    fn negative_dimension_passes_through(
        volume in arb_volume(),
        width in -10_i32..10,
        height in -10_i32..10,
    ) {
        prop_assume!(width < 0 || height < 0);
        let k = volume.extent().min(2);
        let slice = extract(&volume, 2, k, ExtractionMode::Reoriented).unwrap();
        let resampled = resample(slice.clone(), width, height);
        prop_assert_eq!(resampled, slice);
    }

    #[test]
    fn resample_produces_requested_dimensions(
        volume in arb_volume(),
        axis in 0_i32..3,
        width in 0_i32..24,
        height in 0_i32..24,
        nearest in any::<bool>(),
    ) {
        let index = volume.extent().max(axis as usize);
        let slice = extract(&volume, axis, index, ExtractionMode::Reoriented).unwrap();
        let interpolation = if nearest { Interpolation::Nearest } else { Interpolation::Linear };
        let resampled = Resampler::new(interpolation).resample(slice.clone(), width, height);

        prop_assert_eq!(resampled.dimensions(), (width as usize, height as usize));
        prop_assert_eq!(resampled.axis(), slice.axis());
        prop_assert_eq!(resampled.index(), slice.index());
    }

    #[test]
    fn resampled_values_stay_within_source_range(
        volume in arb_volume(),
        axis in 0_i32..3,
        width in 1_i32..16,
        height in 1_i32..16,
    ) {
        let index = volume.extent().min(axis as usize);
        let slice = extract(&volume, axis, index, ExtractionMode::Reoriented).unwrap();
        let (lo, hi) = slice.scalar_range().unwrap();
        let resampled = resample(slice, width, height);
        for v in resampled.values() {
            let v = f64::from(*v);
            prop_assert!(v >= lo && v <= hi);
        }
    }
}
