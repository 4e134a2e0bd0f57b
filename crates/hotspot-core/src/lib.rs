//! Hotspot Core - Hotspot-aware crop geometry
//!
//! This crate computes where a hard-cropped thumbnail should sample its source
//! image so that user-designated points of interest ("hotspots") stay inside
//! the result, instead of always taking a plain center crop.
//!
//! # Pipeline
//!
//! For every (image, target size) pair:
//! 1. Hotspots are normalized at the input boundary ([`hotspot`])
//! 2. The generic center crop is computed ([`crop::center_crop`])
//! 3. The hotspot set is reduced to a [`BoundingBox`]
//! 4. The crop window is re-biased toward that box ([`crop::compute_crop_window`])
//! 5. The resulting rectangle is handed to a resampler ([`resample`])
//!
//! All computations are pure functions of their inputs.

pub mod crop;
pub mod hotspot;
pub mod resample;
pub mod sizes;

pub use crop::{center_crop, compute_crop_window, constrain_dimensions, CropError, CropRect, ResizeState};
pub use hotspot::{BoundingBox, Coordinate, HotspotError, HotspotRecord, HotspotSet};
pub use resample::{apply_crop_rect, DecodedImage, FilterType, ResampleError};
pub use sizes::{
    plan_cropped_sizes, plan_regeneration, plan_size, CatalogError, ImageSize, SizeCatalog, SizePlan,
};

/// A pixel position in the original image's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Clamp the point into `[0, bounds.width] x [0, bounds.height]`.
    pub fn clamped_to(self, bounds: Dimensions) -> Self {
        Self {
            x: self.x.min(bounds.width),
            y: self.y.min(bounds.height),
        }
    }

    /// Check whether the point lies inside `[0, bounds.width] x [0, bounds.height]`.
    pub fn is_within(self, bounds: Dimensions) -> bool {
        self.x <= bounds.width && self.y <= bounds.height
    }
}

/// Width and height in pixels.
///
/// For target sizes, `0` on one side means "derive from the aspect ratio
/// using the other side".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check if either side is zero.
    pub fn has_zero_side(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}
