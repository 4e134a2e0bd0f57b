//! Core types for crop window computation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Dimensions;

/// Error types for crop window computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CropError {
    /// The original image has a zero side, so no ratio can be computed.
    #[error("Invalid original dimensions {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pass-through was required but no prior resize result was supplied.
    #[error("No prior resize result to pass through")]
    MissingPriorWhenRequired,

    /// Both target sides resolved to zero.
    #[error("Target size has no non-zero side")]
    EmptyTarget,
}

/// Parameters for a crop-and-resample copy.
///
/// Copies a `src_w x src_h` region at `(src_x, src_y)` of the original into a
/// `dest_w x dest_h` canvas at `(dest_x, dest_y)`. The field order matches the
/// 8-tuple consumed by the resampling primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CropRect {
    pub dest_x: u32,
    pub dest_y: u32,
    pub src_x: u32,
    pub src_y: u32,
    pub dest_w: u32,
    pub dest_h: u32,
    pub src_w: u32,
    pub src_h: u32,
}

impl CropRect {
    /// Build from the fixed `(dest_x, dest_y, src_x, src_y, dest_w, dest_h, src_w, src_h)` order.
    pub fn from_array(values: [u32; 8]) -> Self {
        let [dest_x, dest_y, src_x, src_y, dest_w, dest_h, src_w, src_h] = values;
        Self {
            dest_x,
            dest_y,
            src_x,
            src_y,
            dest_w,
            dest_h,
            src_w,
            src_h,
        }
    }

    /// Flatten into the fixed 8-field order.
    pub fn to_array(self) -> [u32; 8] {
        [
            self.dest_x,
            self.dest_y,
            self.src_x,
            self.src_y,
            self.dest_w,
            self.dest_h,
            self.src_w,
            self.src_h,
        ]
    }

    /// Check that the source region lies inside `orig` and the destination is non-empty.
    pub fn fits_within(&self, orig: Dimensions) -> bool {
        self.src_x as u64 + self.src_w as u64 <= orig.width as u64
            && self.src_y as u64 + self.src_h as u64 <= orig.height as u64
            && self.dest_w > 0
            && self.dest_h > 0
    }
}

/// Outcome of a resize-dimension computation, used both as the prior input
/// and as the result.
///
/// Keeps "nothing computed yet" distinct from "do not resize this image".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeState {
    /// No computation has happened yet.
    #[default]
    Absent,
    /// The image must not be resized for this target.
    Skip,
    /// A computed rectangle.
    Rect(CropRect),
}

impl ResizeState {
    pub fn rect(&self) -> Option<&CropRect> {
        match self {
            ResizeState::Rect(rect) => Some(rect),
            _ => None,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, ResizeState::Skip)
    }
}

impl From<CropRect> for ResizeState {
    fn from(rect: CropRect) -> Self {
        ResizeState::Rect(rect)
    }
}
