//! Hotspot sets and their input boundary.
//!
//! A hotspot is a user-chosen point of interest in the original image's pixel
//! space. Hotspots are stored per image as a list of `{x, y}` objects; this
//! module turns that list into a [`HotspotSet`] of non-negative integer
//! [`Point`]s and reduces it to a [`BoundingBox`].
//!
//! Coordinates are coerced exactly once, when the set is built. The crop
//! geometry only ever sees clean points.

mod bounds;
mod coerce;

pub use bounds::BoundingBox;
pub use coerce::{Coordinate, HotspotRecord};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Dimensions, Point};

/// Error types for hotspot list parsing.
#[derive(Debug, Error)]
pub enum HotspotError {
    /// The input is not a JSON list of `{x, y}` objects.
    #[error("Invalid hotspot list: {0}")]
    Json(#[from] serde_json::Error),
}

/// A collection of hotspots for one image.
///
/// Order is irrelevant and duplicates are harmless. Serializes as a list of
/// `{x, y}` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<HotspotRecord>", into = "Vec<HotspotRecord>")]
pub struct HotspotSet {
    points: Vec<Point>,
}

impl HotspotSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from already-coerced records.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = HotspotRecord>,
    {
        Self {
            points: records.into_iter().map(Point::from).collect(),
        }
    }

    /// Parse a JSON list of `{x, y}` objects.
    ///
    /// Every entry must carry both keys. A blank string is an empty set, which
    /// is how cleared metadata is stored.
    pub fn from_json(json: &str) -> Result<Self, HotspotError> {
        if json.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a JSON list, dropping entries that are missing `x` or `y`
    /// instead of rejecting the whole list.
    pub fn from_json_lenient(json: &str) -> Result<Self, HotspotError> {
        if json.trim().is_empty() {
            return Ok(Self::new());
        }
        let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let records = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match HotspotRecord::deserialize(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("Dropping hotspot entry {index}: {e}");
                    None
                }
            });
        Ok(Self::from_records(records))
    }

    pub fn insert(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Points lying outside `[0, bounds.width] x [0, bounds.height]`.
    pub fn out_of_bounds(&self, bounds: Dimensions) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter().filter(move |p| !p.is_within(bounds))
    }

    /// Return a copy with every point clamped into the image.
    ///
    /// Out-of-range hotspots are not an error; each adjustment is logged.
    pub fn clamp_to(&self, bounds: Dimensions) -> Self {
        let points = self
            .points
            .iter()
            .map(|&p| {
                let clamped = p.clamped_to(bounds);
                if clamped != p {
                    log::warn!(
                        "Hotspot ({}, {}) outside {}x{} image, clamped to ({}, {})",
                        p.x,
                        p.y,
                        bounds.width,
                        bounds.height,
                        clamped.x,
                        clamped.y
                    );
                }
                clamped
            })
            .collect();
        Self { points }
    }

    /// Reduce the set to its bounding box, or `None` when empty.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.points.iter().copied())
    }
}

impl From<Vec<HotspotRecord>> for HotspotSet {
    fn from(records: Vec<HotspotRecord>) -> Self {
        Self::from_records(records)
    }
}

impl From<HotspotSet> for Vec<HotspotRecord> {
    fn from(set: HotspotSet) -> Self {
        set.points.into_iter().map(HotspotRecord::from).collect()
    }
}

impl FromIterator<Point> for HotspotSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_coerces_values() {
        let set = HotspotSet::from_json(r#"[{"x": "120", "y": -4}, {"x": 3.7, "y": 9}]"#).unwrap();
        let points: Vec<Point> = set.iter().copied().collect();
        assert_eq!(points, vec![Point::new(120, 0), Point::new(3, 9)]);
    }

    #[test]
    fn test_from_json_blank_is_empty() {
        assert!(HotspotSet::from_json("").unwrap().is_empty());
        assert!(HotspotSet::from_json("  ").unwrap().is_empty());
        assert!(HotspotSet::from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_from_json_rejects_incomplete_entry() {
        let err = HotspotSet::from_json(r#"[{"x": 1, "y": 2}, {"x": 5}]"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid hotspot list"));
    }

    #[test]
    fn test_from_json_rejects_non_list() {
        assert!(HotspotSet::from_json(r#"{"x": 1, "y": 2}"#).is_err());
    }

    #[test]
    fn test_lenient_drops_incomplete_entries() {
        let set =
            HotspotSet::from_json_lenient(r#"[{"x": 1, "y": 2}, {"x": 5}, "junk", {"y": 1, "x": 8}]"#)
                .unwrap();
        let points: Vec<Point> = set.iter().copied().collect();
        assert_eq!(points, vec![Point::new(1, 2), Point::new(8, 1)]);
    }

    #[test]
    fn test_serializes_as_record_list() {
        let set: HotspotSet = vec![Point::new(1, 2), Point::new(3, 4)].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[{"x":1,"y":2},{"x":3,"y":4}]"#);
    }

    #[test]
    fn test_insert_and_clear() {
        let mut set = HotspotSet::new();
        assert!(set.is_empty());
        set.insert(Point::new(10, 10));
        set.insert(Point::new(10, 10));
        assert_eq!(set.len(), 2);
        set.clear();
        assert!(set.is_empty());
        assert!(set.bounding_box().is_none());
    }

    #[test]
    fn test_clamp_to_image() {
        let set: HotspotSet = vec![Point::new(1200, 50), Point::new(10, 900), Point::new(5, 5)]
            .into_iter()
            .collect();
        let bounds = Dimensions::new(1000, 600);

        assert_eq!(set.out_of_bounds(bounds).count(), 2);

        let clamped = set.clamp_to(bounds);
        let points: Vec<Point> = clamped.iter().copied().collect();
        assert_eq!(
            points,
            vec![Point::new(1000, 50), Point::new(10, 600), Point::new(5, 5)]
        );
        assert_eq!(clamped.out_of_bounds(bounds).count(), 0);
    }

    #[test]
    fn test_bounding_box_of_set() {
        let set: HotspotSet = vec![Point::new(10, 10), Point::new(990, 590)].into_iter().collect();
        let bbox = set.bounding_box().unwrap();
        assert_eq!((bbox.width(), bbox.height()), (980, 580));
    }
}
