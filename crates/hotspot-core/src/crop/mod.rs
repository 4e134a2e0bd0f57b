//! Crop window geometry.
//!
//! This module turns an original image size, a target size and an optional
//! hotspot bounding box into the rectangle a resampler copies from.
//!
//! # Coordinate System
//!
//! - All values are integer pixels in the original image's space
//! - Origin is top-left corner
//! - Results use the `(dest_x, dest_y, src_x, src_y, dest_w, dest_h, src_w, src_h)`
//!   order of the resampling primitive

mod center;
mod types;
mod window;

pub use center::{center_crop, constrain_dimensions};
pub use types::{CropError, CropRect, ResizeState};
pub use window::compute_crop_window;
