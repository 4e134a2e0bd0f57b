//! Hotspot WASM - WebAssembly bindings for hotspot-aware cropping
//!
//! This crate exposes the hotspot-core geometry to the browser-side point
//! picker, so it can preview the crop of every hard-cropped size before the
//! hotspots are saved.
//!
//! # Module Structure
//!
//! - `crop` - Crop window, generic center crop, hotspot normalization
//! - `types` - WASM-compatible wrapper types for image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { compute_crop_window, center_crop } from '@image-hotspot/wasm';
//!
//! await init();
//!
//! const prior = center_crop(img.width, img.height, 150, 150, true);
//! const rect = compute_crop_window(img.width, img.height, 150, 150, true, prior, hotspots);
//! ```

use wasm_bindgen::prelude::*;

mod crop;
mod types;

pub use crop::{apply_crop_rect, bounding_box, center_crop, compute_crop_window, normalize_hotspots};
pub use types::JsDecodedImage;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
