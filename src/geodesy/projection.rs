//! Projection descriptor evaluation
//!
//! Descriptors are `+key=value` strings in the PROJ style. The engine
//! evaluates the families the CRS model can emit: `longlat` (alias
//! `latlong`), `geocent`, and `utm` with `zone`/`south` parameters. Any
//! other projection or parameter is rejected at converter construction,
//! and any ellipsoid or datum other than WGS84 is refused outright.

use crate::crs::errors::{CrsError, CrsResult};

use super::ellipsoid::Ellipsoid;
use super::geocentric::{ecef_to_geodetic, geodetic_to_ecef};
use super::transverse::{geodetic_to_utm, utm_to_geodetic};

/// A projection family parsed from a descriptor string
#[derive(Debug, Clone, Copy, PartialEq)]
enum ProjectionKind {
    /// Longitude/latitude/altitude on the ellipsoid
    Geodetic,
    /// Earth-centered Cartesian coordinates
    Geocentric,
    /// A transverse Mercator zone
    Utm { zone: u8, south: bool },
}

impl ProjectionKind {
    /// Parse a projection descriptor string
    fn parse(definition: &str) -> CrsResult<ProjectionKind> {
        let mut proj: Option<String> = None;
        let mut zone: Option<u8> = None;
        let mut south = false;

        for token in definition.split_whitespace() {
            let token = token.strip_prefix('+').ok_or_else(|| {
                CrsError::CrsDef(format!(
                    "malformed projection parameter `{}` in `{}`",
                    token, definition
                ))
            })?;

            let (key, value) = match token.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (token, None),
            };

            match key {
                "proj" => {
                    let value = value.ok_or_else(|| {
                        CrsError::CrsDef(format!("+proj requires a value in `{}`", definition))
                    })?;
                    proj = Some(value.to_string());
                }
                "zone" => {
                    let value = value.unwrap_or("");
                    let parsed = value.parse::<u8>().map_err(|_| {
                        CrsError::CrsDef(format!("invalid UTM zone `{}` in `{}`", value, definition))
                    })?;
                    zone = Some(parsed);
                }
                "south" => south = true,
                "ellps" | "datum" => {
                    let value = value.unwrap_or("");
                    if !value.eq_ignore_ascii_case("wgs84") {
                        return Err(CrsError::UnsupportedEllipsoid(format!(
                            "only WGS84 is supported, got {}={}",
                            key, value
                        )));
                    }
                }
                "no_defs" => {}
                other => {
                    return Err(CrsError::CrsDef(format!(
                        "unsupported projection parameter `+{}` in `{}`",
                        other, definition
                    )));
                }
            }
        }

        match proj.as_deref() {
            Some("longlat") | Some("latlong") => Ok(ProjectionKind::Geodetic),
            Some("geocent") => Ok(ProjectionKind::Geocentric),
            Some("utm") => {
                let zone = zone.ok_or_else(|| {
                    CrsError::CrsDef(format!(
                        "utm projection requires a +zone parameter: {}",
                        definition
                    ))
                })?;
                if !(1..=60).contains(&zone) {
                    return Err(CrsError::CrsDef(format!(
                        "UTM zone must be between 1 and 60, got {}",
                        zone
                    )));
                }
                Ok(ProjectionKind::Utm { zone, south })
            }
            Some(other) => Err(CrsError::CrsDef(format!(
                "unsupported projection `{}` in `{}`",
                other, definition
            ))),
            None => Err(CrsError::CrsDef(format!(
                "projection descriptor has no +proj parameter: {}",
                definition
            ))),
        }
    }

    /// Bring a point in this projection into geodetic coordinates
    fn to_geodetic(&self, point: [f64; 3], ellipsoid: &Ellipsoid) -> [f64; 3] {
        match self {
            ProjectionKind::Geodetic => point,
            ProjectionKind::Geocentric => ecef_to_geodetic(point, ellipsoid),
            ProjectionKind::Utm { zone, south } => {
                utm_to_geodetic(point, *zone, *south, ellipsoid)
            }
        }
    }

    /// Take a geodetic point into this projection
    fn from_geodetic(&self, point: [f64; 3], ellipsoid: &Ellipsoid) -> [f64; 3] {
        match self {
            ProjectionKind::Geodetic => point,
            ProjectionKind::Geocentric => geodetic_to_ecef(point, ellipsoid),
            ProjectionKind::Utm { zone, south } => {
                geodetic_to_utm(point, *zone, *south, ellipsoid)
            }
        }
    }
}

/// A transform between two descriptor-defined systems
///
/// Both descriptors are evaluated once at construction; applying the
/// transform routes each point source → geodetic → target.
#[derive(Debug, Clone)]
pub struct ProjectionTransform {
    from: ProjectionKind,
    to: ProjectionKind,
    ellipsoid: Ellipsoid,
}

impl ProjectionTransform {
    /// Build a transform from two projection descriptor strings
    ///
    /// # Arguments
    /// * `from_def` - Descriptor of the source system
    /// * `to_def` - Descriptor of the target system
    /// * `ellipsoid` - The reference ellipsoid for both endpoints
    pub fn new(from_def: &str, to_def: &str, ellipsoid: &Ellipsoid) -> CrsResult<Self> {
        Ok(ProjectionTransform {
            from: ProjectionKind::parse(from_def)?,
            to: ProjectionKind::parse(to_def)?,
            ellipsoid: *ellipsoid,
        })
    }

    /// Transform a single point between the two systems
    pub fn apply(&self, point: [f64; 3]) -> [f64; 3] {
        if self.from == self.to {
            return point;
        }

        let geodetic = self.from.to_geodetic(point, &self.ellipsoid);
        self.to.from_geodetic(geodetic, &self.ellipsoid)
    }
}
