//! Target size catalog and regeneration planning.
//!
//! A thumbnail driver regenerates every configured size of an image after its
//! hotspots change. For each size the generic resize rectangle is computed
//! first, then re-biased toward the hotspots.
//!
//! Each size is planned independently from immutable inputs, so callers may
//! plan sizes on separate threads as long as they share one snapshot of the
//! hotspot set.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::crop::{center_crop, compute_crop_window, CropError, ResizeState};
use crate::{Dimensions, HotspotSet};

/// Error types for size catalog configuration.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog could not be parsed.
    #[error("Invalid size catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// A size has an empty name.
    #[error("Image size name cannot be empty")]
    EmptyName,

    /// Two sizes share a name.
    #[error("Duplicate image size: {0}")]
    DuplicateName(String),

    /// A size has no non-zero dimension.
    #[error("Image size {0} has neither width nor height")]
    EmptySize(String),
}

/// One configured target size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    /// Size name (e.g., "thumbnail").
    pub name: String,
    /// Target width in pixels, 0 to derive from the height.
    #[serde(default)]
    pub width: u32,
    /// Target height in pixels, 0 to derive from the width.
    #[serde(default)]
    pub height: u32,
    /// Hard-crop to exactly this size instead of fitting inside it.
    #[serde(default)]
    pub crop: bool,
}

impl ImageSize {
    pub fn new(name: impl Into<String>, width: u32, height: u32, crop: bool) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            crop,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

/// Ordered list of target sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeCatalog {
    sizes: Vec<ImageSize>,
}

impl Default for SizeCatalog {
    fn default() -> Self {
        Self {
            sizes: vec![
                ImageSize::new("thumbnail", 150, 150, true),
                ImageSize::new("medium", 300, 300, false),
                ImageSize::new("medium_large", 768, 0, false),
                ImageSize::new("large", 1024, 1024, false),
            ],
        }
    }
}

impl SizeCatalog {
    /// Build a validated catalog.
    pub fn new(sizes: Vec<ImageSize>) -> Result<Self, CatalogError> {
        let catalog = Self { sizes };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a JSON list of `{name, width, height, crop}` objects.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for size in &self.sizes {
            if size.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !seen.insert(size.name.as_str()) {
                return Err(CatalogError::DuplicateName(size.name.clone()));
            }
            if size.width == 0 && size.height == 0 {
                return Err(CatalogError::EmptySize(size.name.clone()));
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageSize> {
        self.sizes.iter()
    }

    pub fn get(&self, name: &str) -> Option<&ImageSize> {
        self.sizes.iter().find(|s| s.name == name)
    }

    /// Only the hard-cropped sizes, the ones hotspots can affect.
    pub fn cropped_sizes(&self) -> impl Iterator<Item = &ImageSize> {
        self.sizes.iter().filter(|s| s.crop)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// Planned resize for one catalog size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizePlan {
    pub name: String,
    /// [`ResizeState::Skip`] or [`ResizeState::Rect`]; never `Absent`.
    pub state: ResizeState,
}

/// Plan a single size: generic rectangle first, then the hotspot bias.
pub fn plan_size(orig: Dimensions, size: &ImageSize, hotspots: &HotspotSet) -> Result<SizePlan, CropError> {
    let target = size.dimensions();
    let prior = center_crop(orig, target, size.crop)?;
    let bbox = hotspots.clamp_to(orig).bounding_box();
    let state = compute_crop_window(orig, target, size.crop, prior, bbox)?;

    Ok(SizePlan {
        name: size.name.clone(),
        state,
    })
}

/// Plan every size in the catalog for an image.
///
/// Sizes that would not shrink the image come back as [`ResizeState::Skip`].
pub fn plan_regeneration(
    orig: Dimensions,
    catalog: &SizeCatalog,
    hotspots: &HotspotSet,
) -> Result<Vec<SizePlan>, CropError> {
    catalog
        .iter()
        .map(|size| plan_size(orig, size, hotspots))
        .collect()
}

/// Plan only the hard-cropped sizes.
pub fn plan_cropped_sizes(
    orig: Dimensions,
    catalog: &SizeCatalog,
    hotspots: &HotspotSet,
) -> Result<Vec<SizePlan>, CropError> {
    catalog
        .cropped_sizes()
        .map(|size| plan_size(orig, size, hotspots))
        .collect()
}
