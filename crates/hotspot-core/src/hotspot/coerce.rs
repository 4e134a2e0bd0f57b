//! Coercion of untrusted hotspot coordinates.
//!
//! Hotspot lists arrive from persisted attachment metadata or from the
//! browser-side picker, so coordinate values may be any JSON scalar. Every
//! value is forced to a non-negative integer here and nowhere else.
//!
//! | Input              | Result                      |
//! |--------------------|-----------------------------|
//! | integer `n >= 0`   | `n` (saturating at u32::MAX)|
//! | negative number    | `0`                         |
//! | float              | truncated toward zero       |
//! | numeric string     | parsed, then as above       |
//! | other string       | `0`                         |
//! | `true` / `false`   | `1` / `0`                   |
//! | `null`, arrays, objects | `0`                    |

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::Point;

/// A pixel coordinate coerced to a non-negative integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Coordinate(pub u32);

impl Coordinate {
    /// Coerce a signed integer; negatives become 0.
    pub fn from_i64(value: i64) -> Self {
        Self(value.clamp(0, u32::MAX as i64) as u32)
    }

    /// Coerce a float by truncating toward zero; negatives and NaN become 0.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() || value <= 0.0 {
            return Self(0);
        }
        // `as` saturates at u32::MAX
        Self(value.trunc() as u32)
    }

    /// Coerce a string. Surrounding whitespace is ignored; anything that is
    /// not a number becomes 0.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Self::from_i64(n);
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => Self::from_f64(f),
            _ => Self(0),
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for Coordinate {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

struct CoordinateVisitor;

impl<'de> Visitor<'de> for CoordinateVisitor {
    type Value = Coordinate;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a pixel coordinate")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Coordinate(v as u32))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Coordinate::from_i64(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Coordinate(v.min(u32::MAX as u64) as u32))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Coordinate::from_f64(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Coordinate::parse(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Coordinate(0))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Coordinate(0))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Coordinate(0))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Coordinate(0))
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CoordinateVisitor)
    }
}

/// One persisted hotspot entry.
///
/// Both `x` and `y` are required; any other keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotspotRecord {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl From<HotspotRecord> for Point {
    fn from(record: HotspotRecord) -> Self {
        Point::new(record.x.value(), record.y.value())
    }
}

impl From<Point> for HotspotRecord {
    fn from(point: Point) -> Self {
        Self {
            x: Coordinate(point.x),
            y: Coordinate(point.y),
        }
    }
}
