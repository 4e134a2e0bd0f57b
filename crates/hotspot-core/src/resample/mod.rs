//! Resampling of a crop rectangle into a thumbnail.
//!
//! The crop geometry only decides *where* to sample. This module performs the
//! copy itself on an in-memory RGB buffer using the `image` crate's filters,
//! standing in for the resampling primitive of a thumbnail pipeline.
//! Decoding and encoding files is left to the caller.

mod apply;
mod types;

pub use apply::apply_crop_rect;
pub use types::{DecodedImage, FilterType, ResampleError};
