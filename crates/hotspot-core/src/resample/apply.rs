//! Application of a crop rectangle to pixel data.

use super::{DecodedImage, FilterType, ResampleError};
use crate::CropRect;

/// Copy the rectangle's source region, scale it to its destination size and
/// place it on a canvas at the destination offset.
///
/// The canvas is `(dest_x + dest_w) x (dest_y + dest_h)`; pixels left of or
/// above the offset are black. Hotspot crops always use offset `(0, 0)`, so
/// their output is exactly `dest_w x dest_h`.
///
/// # Errors
///
/// - [`ResampleError::RegionOutOfBounds`] if the source region is empty or
///   extends past the image
/// - [`ResampleError::EmptyDestination`] if the destination has a zero side
/// - [`ResampleError::DestinationOverflow`] if the canvas size overflows
/// - [`ResampleError::BufferMismatch`] if the image buffer is malformed
pub fn apply_crop_rect(
    image: &DecodedImage,
    rect: &CropRect,
    filter: FilterType,
) -> Result<DecodedImage, ResampleError> {
    if rect.dest_w == 0 || rect.dest_h == 0 {
        return Err(ResampleError::EmptyDestination(rect.dest_w, rect.dest_h));
    }
    if rect.src_w == 0
        || rect.src_h == 0
        || rect.src_x as u64 + rect.src_w as u64 > image.width as u64
        || rect.src_y as u64 + rect.src_h as u64 > image.height as u64
    {
        return Err(ResampleError::RegionOutOfBounds {
            src_x: rect.src_x,
            src_y: rect.src_y,
            src_w: rect.src_w,
            src_h: rect.src_h,
            width: image.width,
            height: image.height,
        });
    }
    let (canvas_w, canvas_h) = match (
        rect.dest_x.checked_add(rect.dest_w),
        rect.dest_y.checked_add(rect.dest_h),
    ) {
        (Some(w), Some(h)) => (w, h),
        _ => {
            return Err(ResampleError::DestinationOverflow {
                dest_x: rect.dest_x,
                dest_y: rect.dest_y,
                dest_w: rect.dest_w,
                dest_h: rect.dest_h,
            })
        }
    };

    let view = image.as_rgb_view().ok_or(ResampleError::BufferMismatch {
        width: image.width,
        height: image.height,
        len: image.pixels.len(),
    })?;

    let sub = image::imageops::crop_imm(&view, rect.src_x, rect.src_y, rect.src_w, rect.src_h);
    // `SubImage::to_image` requires a `'static` backing image; copy pixel-by-pixel instead.
    let region = image::RgbImage::from_fn(rect.src_w, rect.src_h, |x, y| {
        image::GenericImageView::get_pixel(&*sub, x, y)
    });

    let scaled = if region.dimensions() == (rect.dest_w, rect.dest_h) {
        region
    } else {
        image::imageops::resize(&region, rect.dest_w, rect.dest_h, filter.to_image_filter())
    };

    if rect.dest_x == 0 && rect.dest_y == 0 {
        return Ok(DecodedImage::from_rgb_image(scaled));
    }

    let mut canvas = image::RgbImage::new(canvas_w, canvas_h);
    image::imageops::replace(&mut canvas, &scaled, rect.dest_x as i64, rect.dest_y as i64);
    Ok(DecodedImage::from_rgb_image(canvas))
}
