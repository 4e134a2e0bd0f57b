//! WASM bindings for hotspot crop geometry.
//!
//! These bindings let the browser-side point picker preview exactly which
//! region each hard-cropped size will keep, using the same computation as
//! thumbnail regeneration.
//!
//! # Value conventions
//!
//! - Hotspots: an array of `{x, y}` objects; values are coerced to
//!   non-negative integers and unknown keys are ignored
//! - Resize results: `null`/`undefined` (not computed), `false` (do not
//!   resize) or an array of 8 integers
//!   `[destX, destY, srcX, srcY, destW, destH, srcW, srcH]`
//!
//! # Example
//!
//! ```typescript
//! const prior = center_crop(1000, 600, 300, 300, true);
//! const rect = compute_crop_window(1000, 600, 300, 300, true, prior, [{ x: 900, y: 550 }]);
//! // rect = [0, 0, 400, 0, 300, 300, 600, 600]
//! ```

use hotspot_core::{
    apply_crop_rect as core_apply, center_crop as core_center, compute_crop_window as core_compute,
    BoundingBox, Dimensions, HotspotSet, ResizeState,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::types::{filter_from_u8, rect_from_slice, JsDecodedImage};

/// Bounding box shape returned to JavaScript.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct JsBoundingBox {
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
    width: u32,
    height: u32,
}

impl From<BoundingBox> for JsBoundingBox {
    fn from(bbox: BoundingBox) -> Self {
        Self {
            min_x: bbox.min_x,
            min_y: bbox.min_y,
            max_x: bbox.max_x,
            max_y: bbox.max_y,
            width: bbox.width(),
            height: bbox.height(),
        }
    }
}

fn js_error(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn prior_from_js(value: JsValue) -> Result<ResizeState, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(ResizeState::Absent);
    }
    if value.as_bool() == Some(false) {
        return Ok(ResizeState::Skip);
    }
    let values: Vec<u32> = serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid prior resize result: {}", e)))?;
    rect_from_slice(&values).map(ResizeState::Rect).map_err(js_error)
}

fn state_to_js(state: ResizeState) -> Result<JsValue, JsValue> {
    match state {
        ResizeState::Absent => Ok(JsValue::NULL),
        ResizeState::Skip => Ok(JsValue::FALSE),
        ResizeState::Rect(rect) => serde_wasm_bindgen::to_value(&rect.to_array()).map_err(js_error),
    }
}

fn hotspots_from_js(value: JsValue) -> Result<HotspotSet, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(HotspotSet::new());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid hotspots: {}", e)))
}

/// Core of [`compute_crop_window`] on plain Rust values.
fn crop_window(
    orig: Dimensions,
    target: Dimensions,
    crop: bool,
    prior: ResizeState,
    hotspots: &HotspotSet,
) -> Result<ResizeState, String> {
    let bbox = hotspots.clamp_to(orig).bounding_box();
    core_compute(orig, target, crop, prior, bbox).map_err(|e| e.to_string())
}

/// Compute the hotspot-biased crop rectangle for one target size.
///
/// # Arguments
///
/// * `orig_width`, `orig_height` - Original image size
/// * `target_width`, `target_height` - Target size, 0 to derive from the aspect ratio
/// * `crop` - Whether the size is hard-cropped
/// * `prior` - Generic result (`null`, `false` or 8 integers)
/// * `hotspots` - Array of `{x, y}` objects; out-of-range points are clamped
///
/// # Returns
///
/// `false` if the image must not be resized, otherwise 8 integers.
///
/// # Errors
///
/// Returns an error if the original has a zero side, if `prior` is `null`
/// while no hotspot bias applies, or if an argument is malformed.
#[wasm_bindgen]
pub fn compute_crop_window(
    orig_width: u32,
    orig_height: u32,
    target_width: u32,
    target_height: u32,
    crop: bool,
    prior: JsValue,
    hotspots: JsValue,
) -> Result<JsValue, JsValue> {
    let prior = prior_from_js(prior)?;
    let hotspots = hotspots_from_js(hotspots)?;
    let state = crop_window(
        Dimensions::new(orig_width, orig_height),
        Dimensions::new(target_width, target_height),
        crop,
        prior,
        &hotspots,
    )
    .map_err(|e| JsValue::from_str(&e))?;
    state_to_js(state)
}

/// Compute the generic (hotspot-unaware) resize result.
///
/// # Returns
///
/// `false` if the image would not shrink, otherwise 8 integers.
#[wasm_bindgen]
pub fn center_crop(
    orig_width: u32,
    orig_height: u32,
    target_width: u32,
    target_height: u32,
    crop: bool,
) -> Result<JsValue, JsValue> {
    let state = core_center(
        Dimensions::new(orig_width, orig_height),
        Dimensions::new(target_width, target_height),
        crop,
    )
    .map_err(js_error)?;
    state_to_js(state)
}

/// Coerce a hotspot list into clean `{x, y}` integer objects.
#[wasm_bindgen]
pub fn normalize_hotspots(hotspots: JsValue) -> Result<JsValue, JsValue> {
    let set = hotspots_from_js(hotspots)?;
    serde_wasm_bindgen::to_value(&set).map_err(js_error)
}

/// Bounding box of a hotspot list as
/// `{minX, minY, maxX, maxY, width, height}`, or `null` when empty.
#[wasm_bindgen]
pub fn bounding_box(hotspots: JsValue) -> Result<JsValue, JsValue> {
    let set = hotspots_from_js(hotspots)?;
    match set.bounding_box() {
        Some(bbox) => serde_wasm_bindgen::to_value(&JsBoundingBox::from(bbox)).map_err(js_error),
        None => Ok(JsValue::NULL),
    }
}

/// Apply a crop rectangle to an image.
///
/// # Arguments
///
/// * `image` - Source image
/// * `rect` - 8 integers as returned by `compute_crop_window`
/// * `filter` - 0 = Nearest, 1 = Bilinear, 2 = Lanczos3
#[wasm_bindgen]
pub fn apply_crop_rect(image: &JsDecodedImage, rect: Vec<u32>, filter: u8) -> Result<JsDecodedImage, JsValue> {
    let rect = rect_from_slice(&rect).map_err(js_error)?;
    let src = image.to_decoded().map_err(js_error)?;
    core_apply(&src, &rect, filter_from_u8(filter))
        .map(JsDecodedImage::from_decoded)
        .map_err(js_error)
}
