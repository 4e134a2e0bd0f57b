//! Core types for resampling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for resampling operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResampleError {
    /// The pixel buffer does not match the declared dimensions.
    #[error("Pixel buffer of {len} bytes does not match {width}x{height} RGB image")]
    BufferMismatch { width: u32, height: u32, len: usize },

    /// The source region extends past the image or is empty.
    #[error("Source region {src_w}x{src_h} at ({src_x}, {src_y}) does not fit a {width}x{height} image")]
    RegionOutOfBounds {
        src_x: u32,
        src_y: u32,
        src_w: u32,
        src_h: u32,
        width: u32,
        height: u32,
    },

    /// The destination canvas has a zero side.
    #[error("Destination size {0}x{1} is empty")]
    EmptyDestination(u32, u32),

    /// The destination offset pushes the canvas past `u32` pixels.
    #[error("Destination {dest_w}x{dest_h} at ({dest_x}, {dest_y}) is too large")]
    DestinationOverflow {
        dest_x: u32,
        dest_y: u32,
        dest_w: u32,
        dest_h: u32,
    },
}

/// Filter type for resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// A decoded image with RGB pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage, checking the buffer length.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ResampleError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3));
        if expected != Some(pixels.len()) {
            return Err(ResampleError::BufferMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a DecodedImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Borrow the pixel buffer as an RGB image view, without copying.
    ///
    /// Returns `None` if the buffer is shorter than the dimensions require.
    pub fn as_rgb_view(&self) -> Option<image::ImageBuffer<image::Rgb<u8>, &[u8]>> {
        image::ImageBuffer::from_raw(self.width, self.height, self.pixels.as_slice())
    }

    pub fn dimensions(&self) -> crate::Dimensions {
        crate::Dimensions::new(self.width, self.height)
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_decoded_image_creation() {
        let img = DecodedImage::new(100, 50, vec![0u8; 100 * 50 * 3]).unwrap();
        assert_eq!(img.dimensions(), crate::Dimensions::new(100, 50));
        assert!(!img.is_empty());
    }

    #[test]
    fn test_decoded_image_buffer_mismatch() {
        let err = DecodedImage::new(10, 10, vec![0u8; 12]).unwrap_err();
        assert_eq!(
            err,
            ResampleError::BufferMismatch {
                width: 10,
                height: 10,
                len: 12
            }
        );
        assert_eq!(
            err.to_string(),
            "Pixel buffer of 12 bytes does not match 10x10 RGB image"
        );
    }

    #[test]
    fn test_buffer_size_overflow_is_mismatch() {
        let err = DecodedImage::new(u32::MAX, u32::MAX, vec![0u8; 3]).unwrap_err();
        assert!(matches!(err, ResampleError::BufferMismatch { len: 3, .. }));
    }

    #[test]
    fn test_rgb_view_borrows_pixels() {
        let img = DecodedImage::new(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let view = img.as_rgb_view().unwrap();
        assert_eq!(view.get_pixel(1, 0), &image::Rgb([4, 5, 6]));
        assert_eq!(view.as_raw().as_ptr(), img.pixels.as_ptr());
    }

    #[test]
    fn test_rgb_image_round_trip() {
        let rgb = image::RgbImage::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let img = DecodedImage::from_rgb_image(rgb.clone());
        assert_eq!(img.as_rgb_view().unwrap().to_vec(), rgb.into_raw());
    }
}
