//! Raster output for slices.
//!
//! Slices hold arbitrary scalar values; writing them as a grayscale image
//! needs a mapping into the pixel range, chosen with [`IntensityMapping`].

#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use std::path::Path;

use image::{ImageBuffer, Luma};
use volslice_core::{Scalar, Slice, SliceAxis};

/// How scalar values are mapped onto pixel intensities.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum IntensityMapping {
    /// Values are clamped into the pixel range as-is.
    #[default]
    Clamp,
    /// The slice's own finite min/max are stretched over the pixel range.
    DataRange,
    /// The window `[min, max]` is stretched over the pixel range.
    Rescale { min: f64, max: f64 },
}

/// Bits per grayscale channel in the written image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitDepth {
    /// 8-bit grayscale.
    #[default]
    Eight,
    /// 16-bit grayscale (PNG only).
    Sixteen,
}

impl BitDepth {
    fn max_value(self) -> f64 {
        match self {
            BitDepth::Eight => f64::from(u8::MAX),
            BitDepth::Sixteen => f64::from(u16::MAX),
        }
    }
}

/// Options for writing slice images.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageWriterOptions {
    /// Scalar to intensity mapping.
    pub mapping: IntensityMapping,
    /// Output bit depth.
    pub bit_depth: BitDepth,
}

/// A grayscale image ready for encoding.
enum GrayImage {
    Eight(ImageBuffer<Luma<u8>, Vec<u8>>),
    Sixteen(ImageBuffer<Luma<u16>, Vec<u16>>),
}

/// Saves a slice as a grayscale image file.
///
/// Row 0 of the slice becomes the top row of the image.
///
/// # Arguments
/// * `slice` - The slice to write; must not be empty
/// * `filename` - Output filename (supports .png, .jpg, .jpeg)
/// * `options` - Intensity mapping and bit depth
///
/// # Errors
/// Returns an error if the file cannot be written, the format is unsupported,
/// or the slice is empty.
pub fn save_slice<T: Scalar>(
    slice: &Slice<T>,
    filename: impl AsRef<Path>,
    options: &ImageWriterOptions,
) -> Result<(), WriteError> {
    let path = filename.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let format = match extension.as_str() {
        "png" => image::ImageFormat::Png,
        "jpg" | "jpeg" if options.bit_depth == BitDepth::Eight => image::ImageFormat::Jpeg,
        "jpg" | "jpeg" => {
            return Err(WriteError::UnsupportedFormat(format!(
                "{extension} (16-bit)"
            )));
        }
        _ => return Err(WriteError::UnsupportedFormat(extension)),
    };

    match to_gray_image(slice, options)? {
        GrayImage::Eight(img) => img.save_with_format(path, format)?,
        GrayImage::Sixteen(img) => img.save_with_format(path, format)?,
    }

    log::info!(
        "saved {}x{} {} slice {} to {}",
        slice.width(),
        slice.height(),
        slice.axis().view_name(),
        slice.index(),
        path.display()
    );
    Ok(())
}

/// Encodes a slice as PNG into memory.
///
/// # Errors
/// Returns an error if the slice is empty or encoding fails.
pub fn encode_png<T: Scalar>(
    slice: &Slice<T>,
    options: &ImageWriterOptions,
) -> Result<Vec<u8>, WriteError> {
    let mut buffer = std::io::Cursor::new(Vec::new());
    match to_gray_image(slice, options)? {
        GrayImage::Eight(img) => img.write_to(&mut buffer, image::ImageFormat::Png)?,
        GrayImage::Sixteen(img) => img.write_to(&mut buffer, image::ImageFormat::Png)?,
    }
    Ok(buffer.into_inner())
}

/// Builds a timestamped output filename such as `slice_0_133_20250101_120000.png`.
pub fn default_output_name(axis: SliceAxis, index: i32) -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!("slice_{axis}_{index}_{timestamp}.png")
}

fn to_gray_image<T: Scalar>(
    slice: &Slice<T>,
    options: &ImageWriterOptions,
) -> Result<GrayImage, WriteError> {
    if slice.is_empty() {
        return Err(WriteError::InvalidImageData);
    }
    let width = u32::try_from(slice.width()).map_err(|_| WriteError::InvalidImageData)?;
    let height = u32::try_from(slice.height()).map_err(|_| WriteError::InvalidImageData)?;

    let max_value = options.bit_depth.max_value();
    let window = match options.mapping {
        IntensityMapping::Clamp => None,
        IntensityMapping::DataRange => Some(slice.scalar_range().unwrap_or((0.0, 1.0))),
        IntensityMapping::Rescale { min, max } => Some((min, max)),
    };
    let intensity = |value: f64| -> f64 {
        let mapped = match window {
            None => value,
            Some((lo, hi)) if hi > lo => (value - lo) / (hi - lo) * max_value,
            Some(_) => 0.0,
        };
        if mapped.is_nan() {
            0.0
        } else {
            mapped.round().clamp(0.0, max_value)
        }
    };

    let values = slice.values().iter().map(|v| intensity(v.to_f64()));
    let image = match options.bit_depth {
        BitDepth::Eight => {
            let pixels: Vec<u8> = values.map(|v| v as u8).collect();
            ImageBuffer::from_raw(width, height, pixels).map(GrayImage::Eight)
        }
        BitDepth::Sixteen => {
            let pixels: Vec<u16> = values.map(|v| v as u16).collect();
            ImageBuffer::from_raw(width, height, pixels).map(GrayImage::Sixteen)
        }
    };
    image.ok_or(WriteError::InvalidImageData)
}

/// Error type for slice image output.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to save image: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid image data")]
    InvalidImageData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec2, DVec3};
    use volslice_core::{CutPlane, ExtractionMode, SliceGeometry};

    fn slice_of<T: Scalar>(width: usize, height: usize, values: Vec<T>) -> Slice<T> {
        let geometry = SliceGeometry {
            plane: CutPlane::new(SliceAxis::K, 0, DVec3::ZERO, DVec3::ONE),
            frame: SliceAxis::K.frame(ExtractionMode::Reoriented),
            origin: DVec3::ZERO,
            spacing: DVec2::ONE,
        };
        Slice::new(width, height, values, geometry).unwrap()
    }

    fn decode(bytes: &[u8]) -> image::DynamicImage {
        image::load_from_memory_with_format(bytes, image::ImageFormat::Png).unwrap()
    }

    #[test]
    fn test_clamp_mapping() {
        let slice = slice_of(4, 1, vec![-20.0_f32, 0.4, 128.0, 900.0]);
        let png = encode_png(&slice, &ImageWriterOptions::default()).unwrap();
        let img = decode(&png).to_luma8();
        assert_eq!(img.dimensions(), (4, 1));
        assert_eq!(img.as_raw(), &vec![0, 0, 128, 255]);
    }

    #[test]
    fn test_data_range_mapping() {
        let slice = slice_of(3, 1, vec![1000_i16, 1500, 2000]);
        let options = ImageWriterOptions {
            mapping: IntensityMapping::DataRange,
            ..Default::default()
        };
        let img = decode(&encode_png(&slice, &options).unwrap()).to_luma8();
        assert_eq!(img.as_raw(), &vec![0, 128, 255]);
    }

    #[test]
    fn test_flat_window_maps_to_black() {
        let slice = slice_of(2, 1, vec![7_u8, 7]);
        let options = ImageWriterOptions {
            mapping: IntensityMapping::Rescale { min: 5.0, max: 5.0 },
            ..Default::default()
        };
        let img = decode(&encode_png(&slice, &options).unwrap()).to_luma8();
        assert_eq!(img.as_raw(), &vec![0, 0]);
    }

    #[test]
    fn test_sixteen_bit_output() {
        let slice = slice_of(2, 2, vec![0_u16, 1000, 40_000, 65_535]);
        let options = ImageWriterOptions {
            bit_depth: BitDepth::Sixteen,
            ..Default::default()
        };
        let img = decode(&encode_png(&slice, &options).unwrap()).to_luma16();
        assert_eq!(img.as_raw(), &vec![0, 1000, 40_000, 65_535]);
    }

    #[test]
    fn test_row_zero_is_top() {
        let slice = slice_of(1, 2, vec![10_u8, 200]);
        let img = decode(&encode_png(&slice, &ImageWriterOptions::default()).unwrap()).to_luma8();
        assert_eq!(img.get_pixel(0, 0).0, [10]);
        assert_eq!(img.get_pixel(0, 1).0, [200]);
    }

    #[test]
    fn test_empty_slice_rejected() {
        let slice = slice_of::<u8>(0, 3, Vec::new());
        assert!(matches!(
            encode_png(&slice, &ImageWriterOptions::default()),
            Err(WriteError::InvalidImageData)
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let slice = slice_of(1, 1, vec![1_u8]);
        let err = save_slice(&slice, "out.tiff", &ImageWriterOptions::default()).unwrap_err();
        assert!(matches!(err, WriteError::UnsupportedFormat(ext) if ext == "tiff"));

        let options = ImageWriterOptions {
            bit_depth: BitDepth::Sixteen,
            ..Default::default()
        };
        assert!(matches!(
            save_slice(&slice, "out.jpg", &options),
            Err(WriteError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_default_output_name() {
        let name = default_output_name(SliceAxis::I, 133);
        assert!(name.starts_with("slice_0_133_"));
        assert!(std::path::Path::new(&name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png")));
    }
}
