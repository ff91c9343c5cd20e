//! Physical lengths and edge specifications.
//!
//! The document's physical unit system is the typographic point
//! (1 pt = 1/72 in). Plot geometry arrives from the collaborator in points;
//! user-facing lengths (inset margins and the like) may be given in
//! millimetres, centimetres, inches, or points and are converted on
//! resolution.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const POINTS_PER_INCH: f32 = 72.0;
const MM_PER_INCH: f32 = 25.4;

/// A physical unit of measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Millimetres.
    Mm,
    /// Centimetres.
    Cm,
    /// Inches.
    In,
    /// Typographic points (1/72 inch).
    Pt,
}

impl Unit {
    /// Conversion factor from this unit to points.
    pub fn points_per_unit(self) -> f32 {
        match self {
            Unit::Mm => POINTS_PER_INCH / MM_PER_INCH,
            Unit::Cm => POINTS_PER_INCH * 10.0 / MM_PER_INCH,
            Unit::In => POINTS_PER_INCH,
            Unit::Pt => 1.0,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Mm => write!(f, "mm"),
            Unit::Cm => write!(f, "cm"),
            Unit::In => write!(f, "in"),
            Unit::Pt => write!(f, "pt"),
        }
    }
}

/// Error returned when a length string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid length '{input}': expected a number followed by mm, cm, in, or pt")]
pub struct LengthParseError {
    input: String,
}

/// A physical length: a magnitude and a [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    value: f32,
    unit: Unit,
}

impl Length {
    /// Creates a length from a magnitude and unit.
    pub fn new(value: f32, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Convenience constructor for millimetres.
    pub fn mm(value: f32) -> Self {
        Self::new(value, Unit::Mm)
    }

    /// Convenience constructor for points.
    pub fn pt(value: f32) -> Self {
        Self::new(value, Unit::Pt)
    }

    /// Returns the magnitude in the original unit.
    pub fn value(self) -> f32 {
        self.value
    }

    /// Returns the unit of measure.
    pub fn unit(self) -> Unit {
        self.unit
    }

    /// Converts this length to points.
    pub fn to_points(self) -> f32 {
        self.value * self.unit.points_per_unit()
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

impl FromStr for Length {
    type Err = LengthParseError;

    /// Parses strings such as `"15mm"`, `"2.5cm"`, `"1in"`, `"12pt"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || LengthParseError {
            input: s.to_string(),
        };

        let split = s
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(err)?;
        let (number, suffix) = s.split_at(split);
        let value: f32 = number.trim().parse().map_err(|_| err())?;
        let unit = match suffix.trim() {
            "mm" => Unit::Mm,
            "cm" => Unit::Cm,
            "in" => Unit::In,
            "pt" => Unit::Pt,
            _ => return Err(err()),
        };
        Ok(Length { value, unit })
    }
}

/// Specification of one edge of a bounding box.
///
/// Fractional extents scale against the reference region; absolute extents
/// are measured inward from the region's corresponding edge, so
/// `Extent::Absolute(15mm)` on a top edge anchors 15 mm below the region's
/// top, not 15 mm from the page origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// A fraction in [0,1] of the reference region's extent on this axis.
    Fraction(f32),
    /// A physical length measured inward from the corresponding region edge.
    Absolute(Length),
}

impl Extent {
    /// Convenience constructor for a fractional extent.
    pub fn fraction(f: f32) -> Self {
        Extent::Fraction(f)
    }
}

impl From<Length> for Extent {
    fn from(length: Length) -> Self {
        Extent::Absolute(length)
    }
}
