//! Stroke primitives: colors, points and polylines

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// An opaque RGB stroke color.
///
/// Serialized as a `#rrggbb` string so config files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Color of the idle `scan.png` icon
    pub const SCAN_IDLE: Rgb = Rgb(122, 174, 131);
    /// Color of the `scan-active.png` icon (#0ea5e9)
    pub const SCAN_ACTIVE: Rgb = Rgb(14, 165, 233);

    /// Full-opacity RGBA bytes
    pub fn to_rgba(self) -> [u8; 4] {
        [self.0, self.1, self.2, 255]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parses `#rrggbb` or `rrggbb` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::ConfigError(format!(
                "invalid color {:?}: expected #rrggbb",
                s
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| Error::ConfigError(format!("invalid color {:?}: {}", s, e)))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

/// A point in pixel-edge coordinates: `(0, 0)` is the top-left corner of the
/// canvas and `(size, size)` the bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An open polyline: consecutive points are joined by straight segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}
