//! Hotspot-aware crop window.
//!
//! Re-biases an existing crop decision toward the hotspot bounding box. The
//! destination size never changes; only the sampled source position moves.
//!
//! # Bias order
//!
//! The two axes are adjusted one after the other, not symmetrically:
//! 1. If the centered window spans the full width (`src_x == 0`), the window
//!    is moved vertically to center the hotspot box.
//! 2. If the window now starts at the top (`src_y == 0`, possibly because
//!    step 1 just put it there), it is moved horizontally to center the box.
//!
//! Step 2 reads the value step 1 wrote, so a window that step 1 clamps to the
//! top edge also gets a horizontal bias.

use super::center::{resolve_target, validate_original, window_size, Rounding};
use super::{CropError, CropRect, ResizeState};
use crate::hotspot::BoundingBox;
use crate::Dimensions;

/// Compute the hotspot-biased crop rectangle.
///
/// # Arguments
///
/// * `orig` - Original image size
/// * `target` - Requested size; a zero side is derived from the aspect ratio
/// * `crop` - Whether this size is hard-cropped
/// * `prior` - Result of the generic computation for the same inputs
/// * `bbox` - Bounding box of the image's hotspots, `None` if it has none
///
/// # Behavior
///
/// - `prior` is [`ResizeState::Skip`]: returned unchanged, resizing is never
///   forced back on
/// - `crop` is false or `bbox` is `None`: `prior` is returned unchanged
/// - `prior` is a rectangle: its destination size is kept
/// - `prior` is [`ResizeState::Absent`]: the destination size is derived from
///   `target` and `orig`
///
/// # Errors
///
/// - [`CropError::MissingPriorWhenRequired`] if pass-through is required but
///   `prior` is absent
/// - [`CropError::InvalidDimension`] if `orig` has a zero side
/// - [`CropError::EmptyTarget`] if `prior` is absent and both target sides are zero
///
/// # Example
///
/// ```
/// use hotspot_core::{compute_crop_window, BoundingBox, CropRect, Dimensions, Point, ResizeState};
///
/// let prior = ResizeState::Rect(CropRect::from_array([0, 0, 200, 0, 300, 300, 600, 600]));
/// let bbox = BoundingBox::from_points([Point::new(900, 550)]);
///
/// let result = compute_crop_window(
///     Dimensions::new(1000, 600),
///     Dimensions::new(300, 300),
///     true,
///     prior,
///     bbox,
/// )
/// .unwrap();
/// assert_eq!(result.rect().unwrap().src_x, 400);
/// ```
pub fn compute_crop_window(
    orig: Dimensions,
    target: Dimensions,
    crop: bool,
    prior: ResizeState,
    bbox: Option<BoundingBox>,
) -> Result<ResizeState, CropError> {
    if prior.is_skip() {
        return Ok(ResizeState::Skip);
    }

    let bbox = match bbox {
        Some(bbox) if crop => bbox,
        _ => {
            log::debug!("Crop window pass-through (crop: {crop}, hotspots: {})", bbox.is_some());
            return match prior {
                ResizeState::Absent => Err(CropError::MissingPriorWhenRequired),
                state => Ok(state),
            };
        }
    };

    validate_original(orig)?;

    let dest = match prior {
        ResizeState::Rect(rect) => Dimensions::new(rect.dest_w.max(1), rect.dest_h.max(1)),
        _ => resolve_target(orig, target, Rounding::Truncate)?,
    };
    let window = window_size(orig, dest);

    let (orig_w, orig_h) = (orig.width as f64, orig.height as f64);
    let (crop_w, crop_h) = (window.width as f64, window.height as f64);

    let base_src_x = ((orig_w - crop_w) / 2.0).floor();
    let base_src_y = ((orig_h - crop_h) / 2.0).floor();

    let mut src_y = base_src_y;
    if base_src_x == 0.0 {
        src_y = (bbox.center_y() - crop_h / 2.0).max(0.0).min(orig_h - crop_h);
    }

    let mut src_x = base_src_x;
    if src_y == 0.0 {
        src_x = (bbox.center_x() - crop_w / 2.0).max(0.0).min(orig_w - crop_w);
    }

    let rect = clamp_into(
        CropRect {
            dest_x: 0,
            dest_y: 0,
            src_x: src_x as u32,
            src_y: src_y as u32,
            dest_w: dest.width,
            dest_h: dest.height,
            src_w: window.width,
            src_h: window.height,
        },
        orig,
    );

    log::debug!(
        "Crop window for {}x{} -> {}x{}: {}x{} at ({}, {})",
        orig.width,
        orig.height,
        rect.dest_w,
        rect.dest_h,
        rect.src_w,
        rect.src_h,
        rect.src_x,
        rect.src_y
    );

    Ok(ResizeState::Rect(rect))
}

/// Pull a rectangle back inside `orig` after rounding overshoot.
fn clamp_into(mut rect: CropRect, orig: Dimensions) -> CropRect {
    if rect.fits_within(orig) {
        return rect;
    }
    log::warn!("Crop window {:?} overshoots {}x{}, clamping", rect.to_array(), orig.width, orig.height);

    rect.src_w = rect.src_w.clamp(1, orig.width);
    rect.src_h = rect.src_h.clamp(1, orig.height);
    rect.src_x = rect.src_x.min(orig.width - rect.src_w);
    rect.src_y = rect.src_y.min(orig.height - rect.src_h);
    rect.dest_w = rect.dest_w.max(1);
    rect.dest_h = rect.dest_h.max(1);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    const ORIG: Dimensions = Dimensions {
        width: 1000,
        height: 600,
    };
    const SQUARE: Dimensions = Dimensions {
        width: 300,
        height: 300,
    };

    fn prior_square() -> ResizeState {
        ResizeState::Rect(CropRect::from_array([0, 0, 200, 0, 300, 300, 600, 600]))
    }

    fn bbox(points: &[(u32, u32)]) -> Option<BoundingBox> {
        BoundingBox::from_points(points.iter().map(|&(x, y)| Point::new(x, y)))
    }

    fn rect(result: Result<ResizeState, CropError>) -> [u32; 8] {
        result.unwrap().rect().copied().unwrap().to_array()
    }

    #[test]
    fn test_hotspot_bottom_right() {
        let result = compute_crop_window(ORIG, SQUARE, true, prior_square(), bbox(&[(900, 550)]));
        assert_eq!(rect(result), [0, 0, 400, 0, 300, 300, 600, 600]);
    }

    #[test]
    fn test_hotspot_top_left_clamped() {
        let result = compute_crop_window(ORIG, SQUARE, true, prior_square(), bbox(&[(50, 50)]));
        assert_eq!(rect(result), [0, 0, 0, 0, 300, 300, 600, 600]);
    }

    #[test]
    fn test_hotspot_centered_on_box() {
        // Box spans x 300..500, center 400, window 600 wide -> starts at 100
        let result =
            compute_crop_window(ORIG, SQUARE, true, prior_square(), bbox(&[(300, 10), (500, 590)]));
        assert_eq!(rect(result), [0, 0, 100, 0, 300, 300, 600, 600]);
    }

    #[test]
    fn test_pass_through_when_crop_disabled() {
        let prior = ResizeState::Rect(CropRect::from_array([0, 0, 0, 0, 300, 180, 1000, 600]));
        let result = compute_crop_window(ORIG, SQUARE, false, prior, bbox(&[(900, 550)]));
        assert_eq!(result, Ok(prior));
    }

    #[test]
    fn test_pass_through_without_hotspots() {
        let result = compute_crop_window(ORIG, SQUARE, true, prior_square(), None);
        assert_eq!(result, Ok(prior_square()));
    }

    #[test]
    fn test_pass_through_requires_prior() {
        let result = compute_crop_window(ORIG, SQUARE, true, ResizeState::Absent, None);
        assert_eq!(result, Err(CropError::MissingPriorWhenRequired));

        let result = compute_crop_window(ORIG, SQUARE, false, ResizeState::Absent, bbox(&[(1, 1)]));
        assert_eq!(result, Err(CropError::MissingPriorWhenRequired));
    }

    #[test]
    fn test_skip_propagates() {
        let hot = bbox(&[(900, 550)]);
        assert_eq!(
            compute_crop_window(ORIG, SQUARE, true, ResizeState::Skip, hot),
            Ok(ResizeState::Skip)
        );
        assert_eq!(
            compute_crop_window(ORIG, SQUARE, false, ResizeState::Skip, hot),
            Ok(ResizeState::Skip)
        );
        assert_eq!(
            compute_crop_window(ORIG, SQUARE, true, ResizeState::Skip, None),
            Ok(ResizeState::Skip)
        );
    }

    #[test]
    fn test_absent_prior_derives_height() {
        let result = compute_crop_window(
            ORIG,
            Dimensions::new(300, 0),
            true,
            ResizeState::Absent,
            bbox(&[(900, 550)]),
        );
        // 300 / (1000 / 600) = 180; the window is the whole image
        assert_eq!(rect(result), [0, 0, 0, 0, 300, 180, 1000, 600]);
    }

    #[test]
    fn test_absent_prior_derives_width_truncated() {
        let result = compute_crop_window(
            ORIG,
            Dimensions::new(0, 100),
            true,
            ResizeState::Absent,
            bbox(&[(10, 10)]),
        );
        // 100 * 1000 / 600 = 166.67, truncated
        let values = rect(result);
        assert_eq!(values[4], 166);
        assert_eq!(values[5], 100);
    }

    #[test]
    fn test_absent_prior_caps_at_original() {
        let result = compute_crop_window(
            Dimensions::new(200, 100),
            Dimensions::new(150, 150),
            true,
            ResizeState::Absent,
            bbox(&[(190, 50)]),
        );
        // 150x100 destination, window 150x100, hotspot pushes it right
        assert_eq!(rect(result), [0, 0, 50, 0, 150, 100, 150, 100]);
    }

    #[test]
    fn test_vertical_bias_for_portrait() {
        let orig = Dimensions::new(600, 1000);
        let prior = ResizeState::Rect(CropRect::from_array([0, 0, 0, 200, 150, 150, 600, 600]));

        let result = compute_crop_window(orig, Dimensions::new(150, 150), true, prior, bbox(&[(300, 900)]));
        // 900 - 300 = 600, clamped to 1000 - 600 = 400
        assert_eq!(rect(result), [0, 0, 0, 400, 150, 150, 600, 600]);

        let result = compute_crop_window(orig, Dimensions::new(150, 150), true, prior, bbox(&[(300, 550)]));
        assert_eq!(rect(result), [0, 0, 0, 250, 150, 150, 600, 600]);
    }

    #[test]
    fn test_vertical_clamp_to_top_also_biases_horizontally() {
        // Full-width window, so the vertical bias runs first and lands on 0;
        // the horizontal check then sees src_y == 0 but the window has no
        // horizontal slack, so src_x stays 0.
        let orig = Dimensions::new(600, 1000);
        let prior = ResizeState::Rect(CropRect::from_array([0, 0, 0, 200, 150, 150, 600, 600]));
        let result = compute_crop_window(orig, Dimensions::new(150, 150), true, prior, bbox(&[(590, 20)]));
        assert_eq!(rect(result), [0, 0, 0, 0, 150, 150, 600, 600]);
    }

    #[test]
    fn test_half_pixel_center_keeps_horizontal_center() {
        // Box center y = 300.5 gives src_y = 0.5 after the vertical bias, which
        // is not zero, so no horizontal bias happens.
        let orig = Dimensions::new(600, 601);
        let prior = ResizeState::Rect(CropRect::from_array([0, 0, 0, 0, 300, 300, 600, 600]));
        let result =
            compute_crop_window(orig, SQUARE, true, prior, bbox(&[(0, 300), (10, 301)]));
        assert_eq!(rect(result), [0, 0, 0, 0, 300, 300, 600, 600]);
    }

    #[test]
    fn test_prior_source_position_is_recomputed() {
        let prior = ResizeState::Rect(CropRect::from_array([0, 0, 17, 0, 300, 300, 600, 600]));
        let result = compute_crop_window(ORIG, SQUARE, true, prior, bbox(&[(500, 300)]));
        assert_eq!(rect(result), [0, 0, 200, 0, 300, 300, 600, 600]);
    }

    #[test]
    fn test_zero_original_rejected() {
        let result = compute_crop_window(
            Dimensions::new(1000, 0),
            SQUARE,
            true,
            prior_square(),
            bbox(&[(1, 1)]),
        );
        assert_eq!(
            result,
            Err(CropError::InvalidDimension {
                width: 1000,
                height: 0
            })
        );
    }

    #[test]
    fn test_empty_target_with_absent_prior() {
        let result = compute_crop_window(
            ORIG,
            Dimensions::new(0, 0),
            true,
            ResizeState::Absent,
            bbox(&[(1, 1)]),
        );
        assert_eq!(result, Err(CropError::EmptyTarget));
    }

    #[test]
    fn test_extreme_ratio_derives_one_pixel_height() {
        // 300 * 10 / 4000 truncates to 0, kept at 1
        let result = compute_crop_window(
            Dimensions::new(4000, 10),
            Dimensions::new(300, 0),
            true,
            ResizeState::Absent,
            bbox(&[(5, 10)]),
        );
        assert_eq!(rect(result), [0, 0, 0, 0, 300, 1, 3000, 10]);
    }

    #[test]
    fn test_extreme_ratio_derives_one_pixel_width() {
        let result = compute_crop_window(
            Dimensions::new(10, 4000),
            Dimensions::new(0, 100),
            true,
            ResizeState::Absent,
            bbox(&[(5, 10)]),
        );
        assert_eq!(rect(result), [0, 0, 0, 0, 1, 100, 10, 1000]);
    }

    #[test]
    fn test_zero_destination_in_prior_is_clamped() {
        let prior = ResizeState::Rect(CropRect::from_array([0, 0, 0, 0, 0, 300, 600, 600]));
        let result = compute_crop_window(ORIG, SQUARE, true, prior, bbox(&[(500, 300)]));
        let values = rect(result);
        assert!(values[4] > 0 && values[5] > 0);
        assert!(CropRect::from_array(values).fits_within(ORIG));
    }

    #[test]
    fn test_clamp_into_pulls_back_overshoot() {
        let rect = CropRect::from_array([0, 0, 450, 0, 300, 300, 600, 700]);
        let clamped = clamp_into(rect, ORIG);
        assert_eq!(clamped.to_array(), [0, 0, 400, 0, 300, 300, 600, 600]);
    }
}
