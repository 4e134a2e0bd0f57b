//! Generic (hotspot-unaware) resize dimensions.
//!
//! This is the stock computation a thumbnail driver performs before any
//! hotspot bias: a centered crop for hard-cropped sizes, or a scale-to-fit
//! for the rest. Its output is the `prior` fed to
//! [`compute_crop_window`](super::compute_crop_window).

use super::{CropError, CropRect, ResizeState};
use crate::Dimensions;

/// How a side derived from the aspect ratio is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Rounding {
    Truncate,
    Nearest,
}

/// Reject originals with a zero side.
pub(super) fn validate_original(orig: Dimensions) -> Result<(), CropError> {
    if orig.has_zero_side() {
        return Err(CropError::InvalidDimension {
            width: orig.width,
            height: orig.height,
        });
    }
    Ok(())
}

/// `value * num / den` in exact integer arithmetic.
fn scale(value: u32, num: u32, den: u32, rounding: Rounding) -> u32 {
    let (value, num, den) = (value as u128, num as u128, den as u128);
    let scaled = match rounding {
        Rounding::Truncate => value * num / den,
        Rounding::Nearest => (2 * value * num + den) / (2 * den),
    };
    scaled.min(u32::MAX as u128) as u32
}

/// Destination size for a hard crop: the target capped at the original,
/// with a zero side derived from the other through the original aspect ratio.
///
/// A derived side that rounds to zero at extreme aspect ratios is kept at
/// one pixel.
pub(super) fn resolve_target(
    orig: Dimensions,
    target: Dimensions,
    rounding: Rounding,
) -> Result<Dimensions, CropError> {
    if target.width == 0 && target.height == 0 {
        return Err(CropError::EmptyTarget);
    }

    let mut width = target.width.min(orig.width);
    let mut height = target.height.min(orig.height);

    if width == 0 {
        width = scale(height, orig.width, orig.height, rounding).max(1);
    }
    if height == 0 {
        height = scale(width, orig.height, orig.width, rounding).max(1);
    }

    Ok(Dimensions::new(width, height))
}

/// Largest source window with the destination's aspect ratio.
///
/// The size ratio is the smallest scale factor that lets the source supply
/// both destination sides without stretching.
pub(super) fn window_size(orig: Dimensions, dest: Dimensions) -> Dimensions {
    let size_ratio = (dest.width as f64 / orig.width as f64).max(dest.height as f64 / orig.height as f64);

    let width = (dest.width as f64 / size_ratio).round() as u32;
    let height = (dest.height as f64 / size_ratio).round() as u32;

    // Rounding can overshoot by a pixel at extreme aspect ratios
    Dimensions::new(width.clamp(1, orig.width), height.clamp(1, orig.height))
}

/// Scale `current` down to fit inside `max`, preserving aspect ratio.
///
/// A zero side of `max` leaves that side unconstrained. Never returns a zero
/// side for a non-empty input, and never upscales.
pub fn constrain_dimensions(current: Dimensions, max: Dimensions) -> Dimensions {
    if (max.width == 0 && max.height == 0) || current.has_zero_side() {
        return current;
    }

    let shrink_width = max.width > 0 && current.width > max.width;
    let shrink_height = max.height > 0 && current.height > max.height;

    let width_ratio = if shrink_width {
        max.width as f64 / current.width as f64
    } else {
        1.0
    };
    let height_ratio = if shrink_height {
        max.height as f64 / current.height as f64
    } else {
        1.0
    };

    let smaller = width_ratio.min(height_ratio);
    let larger = width_ratio.max(height_ratio);

    let overflows = |ratio: f64| {
        (max.width > 0 && (current.width as f64 * ratio).round() as u32 > max.width)
            || (max.height > 0 && (current.height as f64 * ratio).round() as u32 > max.height)
    };
    let ratio = if overflows(larger) { smaller } else { larger };

    let mut width = ((current.width as f64 * ratio).round() as u32).max(1);
    let mut height = ((current.height as f64 * ratio).round() as u32).max(1);

    // Snap one-pixel rounding shortfalls back onto the constrained edge
    if shrink_width && width + 1 == max.width {
        width = max.width;
    }
    if shrink_height && height + 1 == max.height {
        height = max.height;
    }

    Dimensions::new(width, height)
}

/// Compute the generic resize rectangle for `orig` at `target`.
///
/// - `crop = true`: a centered window of the destination's aspect ratio
/// - `crop = false`: the whole source scaled to fit inside `target`
///
/// Returns [`ResizeState::Skip`] when the result would be the same size or
/// larger than the original, since thumbnails are never upscaled.
///
/// # Errors
///
/// - [`CropError::InvalidDimension`] if `orig` has a zero side
/// - [`CropError::EmptyTarget`] if both target sides are zero
pub fn center_crop(orig: Dimensions, target: Dimensions, crop: bool) -> Result<ResizeState, CropError> {
    validate_original(orig)?;
    if target.width == 0 && target.height == 0 {
        return Err(CropError::EmptyTarget);
    }

    let (dest, window, src_x, src_y) = if crop {
        let dest = resolve_target(orig, target, Rounding::Nearest)?;
        let window = window_size(orig, dest);
        let src_x = (orig.width - window.width) / 2;
        let src_y = (orig.height - window.height) / 2;
        (dest, window, src_x, src_y)
    } else {
        (constrain_dimensions(orig, target), orig, 0, 0)
    };

    if dest.width >= orig.width
        && dest.height >= orig.height
        && target.width != orig.width
        && target.height != orig.height
    {
        log::debug!(
            "No resize needed for {}x{} at {}x{}",
            orig.width,
            orig.height,
            target.width,
            target.height
        );
        return Ok(ResizeState::Skip);
    }

    Ok(ResizeState::Rect(CropRect {
        dest_x: 0,
        dest_y: 0,
        src_x,
        src_y,
        dest_w: dest.width,
        dest_h: dest.height,
        src_w: window.width,
        src_h: window.height,
    }))
}
