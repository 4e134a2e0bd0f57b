//! Axis-aligned bounding box of a hotspot set.

use serde::{Deserialize, Serialize};

use crate::Point;

/// The smallest axis-aligned rectangle enclosing a set of hotspots.
///
/// A single hotspot yields a zero-area box at that point, which is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BoundingBox {
    /// Compute the box enclosing `points`.
    ///
    /// Returns `None` for an empty input, which tells the caller to skip
    /// hotspot-aware adjustment entirely.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Self {
                    min_x: p.x,
                    min_y: p.y,
                    max_x: p.x,
                    max_y: p.y,
                },
                Some(b) => Self {
                    min_x: b.min_x.min(p.x),
                    min_y: b.min_y.min(p.y),
                    max_x: b.max_x.max(p.x),
                    max_y: b.max_y.max(p.y),
                },
            })
        })
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }

    /// Horizontal midpoint. Half pixels are kept.
    pub fn center_x(&self) -> f64 {
        self.min_x as f64 + self.width() as f64 / 2.0
    }

    /// Vertical midpoint. Half pixels are kept.
    pub fn center_y(&self) -> f64 {
        self.min_y as f64 + self.height() as f64 / 2.0
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}
