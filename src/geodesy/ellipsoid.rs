//! Reference ellipsoid model
//!
//! All transforms in the toolkit run on a single reference ellipsoid fixed
//! at process start. Converters take the ellipsoid as an explicit value so
//! there is no mutable global to disagree about.

use crate::crs::errors::{CrsError, CrsResult};

/// Parameters of a reference ellipsoid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    semimajor: f64,
    inv_flattening: f64,
}

impl Ellipsoid {
    /// The WGS 84 reference ellipsoid, the toolkit default
    pub const WGS84: Ellipsoid = Ellipsoid {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257_223_563,
    };

    /// Create an ellipsoid from its semimajor axis (meters) and inverse
    /// flattening
    pub fn new(semimajor: f64, inv_flattening: f64) -> Self {
        Ellipsoid {
            semimajor,
            inv_flattening,
        }
    }

    /// Semimajor (equatorial) axis in meters
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Inverse flattening
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Flattening
    pub fn flattening(&self) -> f64 {
        1.0 / self.inv_flattening
    }

    /// Semiminor (polar) axis in meters
    pub fn semiminor(&self) -> f64 {
        self.semimajor * (1.0 - self.flattening())
    }

    /// First eccentricity squared
    pub fn e2(&self) -> f64 {
        let f = self.flattening();
        f * (2.0 - f)
    }

    /// Second eccentricity squared
    pub fn ep2(&self) -> f64 {
        self.e2() / (1.0 - self.e2())
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

/// Set the ellipsoid upon which converters are built.
///
/// Only WGS 84 has complete support; passing the default is a no-op and any
/// other ellipsoid is rejected. Failing fast here keeps converters built at
/// different times from silently disagreeing about the figure of the Earth.
pub fn set_active_ellipsoid(ellipsoid: Ellipsoid) -> CrsResult<()> {
    ensure_default(&ellipsoid)
}

/// Rejects any ellipsoid other than the default.
pub(crate) fn ensure_default(ellipsoid: &Ellipsoid) -> CrsResult<()> {
    if *ellipsoid == Ellipsoid::WGS84 {
        Ok(())
    } else {
        Err(CrsError::UnsupportedEllipsoid(format!(
            "only WGS84 is supported, got semimajor={} inv_flattening={}",
            ellipsoid.semimajor, ellipsoid.inv_flattening
        )))
    }
}
