//! Extents parsing and representation
//!
//! Extents strings take the form `([minX, maxX], [minY, maxY], [minZ, maxZ])`
//! with optional spaces after the commas. The Z bounds may be `nan`
//! (case-insensitive) for data sets without a vertical extent. Numbers use
//! the same decimal-literal grammar as the CRS variant grammars.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::crs::errors::{CrsError, CrsResult};
use crate::crs::grammar::DECIMAL_PATTERN;

lazy_static! {
    static ref EXTENTS_REGEX: Regex = Regex::new(&format!(
        r"(?i)^\(\[({d}), ?({d})\], ?\[({d}), ?({d})\], ?\[({d}|nan), ?({d}|nan)\]\)$",
        d = DECIMAL_PATTERN
    ))
    .expect("extents grammar compiles");
}

/// Container for min/max values along three axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    /// Minimum X value
    pub min_x: f64,
    /// Maximum X value
    pub max_x: f64,
    /// Minimum Y value
    pub min_y: f64,
    /// Maximum Y value
    pub max_y: f64,
    /// Minimum Z value, may be NaN
    pub min_z: f64,
    /// Maximum Z value, may be NaN
    pub max_z: f64,
}

impl Extents {
    /// Create extents from the six bounds
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64, min_z: f64, max_z: f64) -> Self {
        Extents {
            min_x,
            max_x,
            min_y,
            max_y,
            min_z,
            max_z,
        }
    }

    /// Gets the minimum corner of the extents
    pub fn min(&self) -> [f64; 3] {
        [self.min_x, self.min_y, self.min_z]
    }

    /// Gets the maximum corner of the extents
    pub fn max(&self) -> [f64; 3] {
        [self.max_x, self.max_y, self.max_z]
    }

    /// Gets the center of the extents
    pub fn center(&self) -> [f64; 3] {
        [
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
            (self.min_z + self.max_z) / 2.0,
        ]
    }
}

impl fmt::Display for Extents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "([{}, {}], [{}, {}], [{}, {}])",
            self.min_x, self.max_x, self.min_y, self.max_y, self.min_z, self.max_z
        )
    }
}

/// Parses extents from a string
///
/// # Arguments
/// * `text` - The extents string to parse
///
/// # Returns
/// The parsed min/max for X, Y, and Z, or a parse error if the string does
/// not match the expected pattern
pub fn parse_extents(text: &str) -> CrsResult<Extents> {
    let caps = EXTENTS_REGEX.captures(text).ok_or_else(|| {
        CrsError::Parse(format!("extents did not match the expected pattern: {}", text))
    })?;

    let mut values = [0.0; 6];
    for (index, value) in values.iter_mut().enumerate() {
        let capture = &caps[index + 1];
        *value = capture
            .parse::<f64>()
            .map_err(|_| CrsError::Parse(format!("invalid extents value: {}", capture)))?;
    }

    Ok(Extents::new(
        values[0], values[1], values[2], values[3], values[4], values[5],
    ))
}
