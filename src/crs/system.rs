//! Coordinate reference system variants and their string grammars
//!
//! This module defines the closed set of CRS variants the toolkit
//! understands, each owning its textual grammar, canonical string form,
//! and (where applicable) a projection-engine descriptor string.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::crs::errors::{CrsError, CrsResult};
use crate::crs::grammar::{optional_offset_fragment, parse_decimal, parse_offset, DECIMAL_PATTERN};

/// Projection descriptor for the geocentric (ECEF) frame
pub(crate) const ECEF_PROJ: &str = "+proj=geocent +ellps=WGS84";
/// Projection descriptor for geodetic longitude/latitude coordinates
pub(crate) const GEODETIC_PROJ: &str = "+proj=longlat +ellps=WGS84 +datum=WGS84 +no_defs";

lazy_static! {
    static ref LTP_REGEX: Regex = Regex::new(&format!(
        r"(?i)^(?:ltp|enu) ({d}) ({d}) ({d}){off}$",
        d = DECIMAL_PATTERN,
        off = optional_offset_fragment()
    ))
    .expect("local tangent plane grammar compiles");
    static ref GEOCENTRIC_REGEX: Regex = Regex::new(&format!(
        r"(?i)^(?:gcc|geocentric|ecef){off}$",
        off = optional_offset_fragment()
    ))
    .expect("geocentric grammar compiles");
    static ref GEODETIC_REGEX: Regex = Regex::new(&format!(
        r"(?i)^(?:gdc|geodetic|lla){off}$",
        off = optional_offset_fragment()
    ))
    .expect("geodetic grammar compiles");
    static ref UTM_REGEX: Regex = Regex::new(&format!(
        r"(?i)^utm (\d{{1,2}})([a-z]){off}$",
        off = optional_offset_fragment()
    ))
    .expect("utm grammar compiles");
}

/// Formats the offset suffix appended to a canonical CRS string.
///
/// The suffix is only present when the offset is non-zero, so systems
/// without an offset round-trip to their bare keyword form.
fn offset_suffix(offset: &[f64; 3]) -> String {
    if *offset == [0.0; 3] {
        String::new()
    } else {
        format!(" {} {} {}", offset[0], offset[1], offset[2])
    }
}

/// A coordinate reference system description
///
/// The set of variants is closed: the converter dispatches over the pair of
/// variant tags with an exhaustive match, so adding a variant here forces
/// every dispatch site to handle it.
#[derive(Debug, Clone, PartialEq)]
pub enum Crs {
    /// East-North-Up frame tangent to the ellipsoid at an origin point
    LocalTangentPlane(LocalTangentPlane),
    /// Earth-Centered-Earth-Fixed Cartesian frame
    Geocentric(Geocentric),
    /// Longitude/latitude/altitude on the reference ellipsoid
    Geodetic(Geodetic),
    /// Universal Transverse Mercator zone
    Utm(Utm),
    /// Escape hatch for any system expressible as a projection descriptor
    RawProjection(RawProjection),
}

impl Crs {
    /// Get the offset applied in this system's own coordinate space
    ///
    /// Raw projection systems carry no offset grammar of their own and
    /// always report the zero offset.
    pub fn offset(&self) -> [f64; 3] {
        match self {
            Crs::LocalTangentPlane(ltp) => ltp.offset,
            Crs::Geocentric(gcc) => gcc.offset,
            Crs::Geodetic(gdc) => gdc.offset,
            Crs::Utm(utm) => utm.offset,
            Crs::RawProjection(_) => [0.0; 3],
        }
    }

    /// Get the projection-engine descriptor for this system, if it has one
    ///
    /// Local tangent planes are the one variant with no descriptor; they are
    /// handled by the tangent-plane engine instead of the projection engine.
    pub fn proj_def(&self) -> Option<String> {
        match self {
            Crs::LocalTangentPlane(_) => None,
            Crs::Geocentric(gcc) => Some(gcc.proj_str()),
            Crs::Geodetic(gdc) => Some(gdc.proj_str()),
            Crs::Utm(utm) => Some(utm.proj_str()),
            Crs::RawProjection(raw) => Some(raw.proj_str()),
        }
    }

    /// Parse a CRS description, routing unrecognized strings to a raw
    /// projection definition
    ///
    /// The keyword factory only recognizes the `ltp`/`enu`, `gdc`/`geodetic`/
    /// `lla`, `utm`, and `ecef`/`gcc` families; anything else is assumed to
    /// be a projection descriptor and handed to the projection engine
    /// verbatim when a converter is built.
    pub fn from_str_or_raw(definition: &str) -> CrsResult<Crs> {
        if definition.is_empty() {
            return Err(CrsError::EmptyInput);
        }
        if keyword_family(definition).is_none() {
            return Ok(Crs::RawProjection(RawProjection::new(definition)));
        }
        Crs::from_str(definition)
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Crs::LocalTangentPlane(ltp) => write!(f, "{}", ltp),
            Crs::Geocentric(gcc) => write!(f, "{}", gcc),
            Crs::Geodetic(gdc) => write!(f, "{}", gdc),
            Crs::Utm(utm) => write!(f, "{}", utm),
            Crs::RawProjection(raw) => write!(f, "{}", raw),
        }
    }
}

/// Keyword families recognized by the factory
enum Family {
    LocalTangentPlane,
    Geodetic,
    Utm,
    Geocentric,
}

/// Classifies a description by its case-insensitive keyword prefix.
///
/// Note that `geocentric` is accepted by the geocentric variant grammar but
/// is not a factory prefix; only `ecef` and `gcc` route there.
fn keyword_family(definition: &str) -> Option<Family> {
    let lower = definition.to_ascii_lowercase();
    if lower.starts_with("ltp") || lower.starts_with("enu") {
        Some(Family::LocalTangentPlane)
    } else if lower.starts_with("geodetic") || lower.starts_with("gdc") || lower.starts_with("lla")
    {
        Some(Family::Geodetic)
    } else if lower.starts_with("utm") {
        Some(Family::Utm)
    } else if lower.starts_with("ecef") || lower.starts_with("gcc") {
        Some(Family::Geocentric)
    } else {
        None
    }
}

impl FromStr for Crs {
    type Err = CrsError;

    /// Parse a CRS description by keyword dispatch
    ///
    /// # Arguments
    /// * `definition` - The CRS description string
    ///
    /// # Returns
    /// The parsed variant, or an error if the string is empty, matches no
    /// keyword family, or fails the matched variant's grammar
    fn from_str(definition: &str) -> CrsResult<Self> {
        if definition.is_empty() {
            return Err(CrsError::EmptyInput);
        }

        match keyword_family(definition) {
            Some(Family::LocalTangentPlane) => {
                Ok(Crs::LocalTangentPlane(definition.parse::<LocalTangentPlane>()?))
            }
            Some(Family::Geodetic) => Ok(Crs::Geodetic(definition.parse::<Geodetic>()?)),
            Some(Family::Utm) => Ok(Crs::Utm(definition.parse::<Utm>()?)),
            Some(Family::Geocentric) => Ok(Crs::Geocentric(definition.parse::<Geocentric>()?)),
            None => Err(CrsError::CrsDef(format!(
                "unrecognized coordinate reference system keyword: {}",
                definition
            ))),
        }
    }
}

/// A local tangent plane (East-North-Up) coordinate reference system
///
/// The frame is tangent to the reference ellipsoid at the origin given by
/// `lon`/`lat`/`alt`. An additional offset within the plane can be useful
/// for data sets centered on a local origin inside the tangent plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTangentPlane {
    /// Longitude of the tangent plane origin in degrees
    pub lon: f64,
    /// Latitude of the tangent plane origin in degrees
    pub lat: f64,
    /// Altitude of the origin above the reference ellipsoid in meters
    pub alt: f64,
    /// Offset by which points are adjusted within the plane
    pub offset: [f64; 3],
}

impl LocalTangentPlane {
    /// Create a tangent plane at the given origin with no offset
    pub fn new(lon: f64, lat: f64, alt: f64) -> Self {
        LocalTangentPlane {
            lon,
            lat,
            alt,
            offset: [0.0; 3],
        }
    }

    /// Create a tangent plane with an offset inside the plane
    pub fn with_offset(lon: f64, lat: f64, alt: f64, offset: [f64; 3]) -> Self {
        LocalTangentPlane {
            lon,
            lat,
            alt,
            offset,
        }
    }
}

impl fmt::Display for LocalTangentPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ENU {} {} {}{}",
            self.lon,
            self.lat,
            self.alt,
            offset_suffix(&self.offset)
        )
    }
}

impl FromStr for LocalTangentPlane {
    type Err = CrsError;

    fn from_str(definition: &str) -> CrsResult<Self> {
        let caps = LTP_REGEX.captures(definition).ok_or_else(|| {
            CrsError::CrsDef(format!(
                "could not parse local tangent plane definition: {}",
                definition
            ))
        })?;

        Ok(LocalTangentPlane {
            lon: parse_decimal(&caps[1])?,
            lat: parse_decimal(&caps[2])?,
            alt: parse_decimal(&caps[3])?,
            offset: parse_offset(&caps, 4)?,
        })
    }
}

/// The geocentric (Earth-Centered-Earth-Fixed) coordinate reference system
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geocentric {
    /// Offset by which points are adjusted, in meters per axis
    pub offset: [f64; 3],
}

impl Geocentric {
    /// Create the geocentric system with no offset
    pub fn new() -> Self {
        Geocentric::default()
    }

    /// Create the geocentric system with an offset
    pub fn with_offset(offset: [f64; 3]) -> Self {
        Geocentric { offset }
    }

    /// Get the projection descriptor for this system
    pub fn proj_str(&self) -> String {
        ECEF_PROJ.to_string()
    }
}

impl fmt::Display for Geocentric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GCC{}", offset_suffix(&self.offset))
    }
}

impl FromStr for Geocentric {
    type Err = CrsError;

    fn from_str(definition: &str) -> CrsResult<Self> {
        let caps = GEOCENTRIC_REGEX.captures(definition).ok_or_else(|| {
            CrsError::CrsDef(format!(
                "could not parse geocentric definition: {}",
                definition
            ))
        })?;

        Ok(Geocentric {
            offset: parse_offset(&caps, 1)?,
        })
    }
}

/// The geodetic (longitude/latitude/altitude) coordinate reference system
///
/// Points are ordered longitude, latitude (degrees), altitude (meters above
/// the reference ellipsoid).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geodetic {
    /// Offset by which points are adjusted (degrees, degrees, meters)
    pub offset: [f64; 3],
}

impl Geodetic {
    /// Create the geodetic system with no offset
    pub fn new() -> Self {
        Geodetic::default()
    }

    /// Create the geodetic system with an offset
    pub fn with_offset(offset: [f64; 3]) -> Self {
        Geodetic { offset }
    }

    /// Get the projection descriptor for this system
    pub fn proj_str(&self) -> String {
        GEODETIC_PROJ.to_string()
    }
}

impl fmt::Display for Geodetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GDC{}", offset_suffix(&self.offset))
    }
}

impl FromStr for Geodetic {
    type Err = CrsError;

    fn from_str(definition: &str) -> CrsResult<Self> {
        let caps = GEODETIC_REGEX.captures(definition).ok_or_else(|| {
            CrsError::CrsDef(format!("could not parse geodetic definition: {}", definition))
        })?;

        Ok(Geodetic {
            offset: parse_offset(&caps, 1)?,
        })
    }
}

/// A Universal Transverse Mercator coordinate reference system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Utm {
    /// Zone number, 1 through 60
    pub zone: u8,
    /// Whether the zone is in the southern designator band
    pub south: bool,
    /// Offset by which points are adjusted, in meters per axis
    pub offset: [f64; 3],
}

impl Utm {
    /// Create a UTM system for the given zone and hemisphere, no offset
    pub fn new(zone: u8, south: bool) -> Self {
        Utm {
            zone,
            south,
            offset: [0.0; 3],
        }
    }

    /// Create a UTM system with an offset
    pub fn with_offset(zone: u8, south: bool, offset: [f64; 3]) -> Self {
        Utm {
            zone,
            south,
            offset,
        }
    }

    /// Derive the UTM system containing a geodetic point
    ///
    /// The zone is computed with the plain 6-degree-band formula; the
    /// Norway and Svalbard zone exceptions are not applied. Longitude is
    /// expected in [-180, 180).
    ///
    /// # Arguments
    /// * `lon` - Longitude of the point in degrees
    /// * `lat` - Latitude of the point in degrees
    pub fn from_point(lon: f64, lat: f64) -> Self {
        let zone = (((lon + 180.0) / 360.0 * 60.0).floor() + 1.0) as u8;
        Utm::new(zone, lat < 0.0)
    }

    /// Get the projection descriptor for this zone
    pub fn proj_str(&self) -> String {
        let mut proj_str = format!("+proj=utm +zone={} +ellps=WGS84", self.zone);
        if self.south {
            proj_str.push_str(" +south");
        }
        proj_str
    }
}

impl fmt::Display for Utm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UTM {}{}{}",
            self.zone,
            if self.south { 'S' } else { 'N' },
            offset_suffix(&self.offset)
        )
    }
}

impl FromStr for Utm {
    type Err = CrsError;

    fn from_str(definition: &str) -> CrsResult<Self> {
        let caps = UTM_REGEX.captures(definition).ok_or_else(|| {
            CrsError::CrsDef(format!("could not parse UTM definition: {}", definition))
        })?;

        let zone = caps[1]
            .parse::<u8>()
            .map_err(|_| CrsError::Parse(format!("invalid UTM zone: {}", &caps[1])))?;
        if !(1..=60).contains(&zone) {
            return Err(CrsError::CrsDef(format!(
                "UTM zone must be between 1 and 60, got {}",
                zone
            )));
        }

        // Band letters follow the MGRS latitude-band convention: letters up
        // to and including 'M' lie south of the equator, the rest north.
        let band = caps[2]
            .chars()
            .next()
            .ok_or_else(|| CrsError::Parse("missing UTM band letter".to_string()))?
            .to_ascii_uppercase();

        Ok(Utm {
            zone,
            south: band <= 'M',
            offset: parse_offset(&caps, 3)?,
        })
    }
}

/// A coordinate reference system given directly as a projection descriptor
///
/// This is the escape hatch for systems the keyword grammars cannot
/// express. The definition is opaque to the CRS model; the projection
/// engine owns its evaluation when a converter is built.
#[derive(Debug, Clone, PartialEq)]
pub struct RawProjection {
    /// The projection descriptor string, stored verbatim
    pub definition: String,
}

impl RawProjection {
    /// Wrap a projection descriptor string
    pub fn new(definition: &str) -> Self {
        RawProjection {
            definition: definition.to_string(),
        }
    }

    /// Get the projection descriptor for this system
    pub fn proj_str(&self) -> String {
        self.definition.clone()
    }
}

impl fmt::Display for RawProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.definition)
    }
}
