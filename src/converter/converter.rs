//! Batch conversion between coordinate reference systems
//!
//! The converter captures both systems' offsets once, selects a transform
//! chain from the pair of variant tags, and then applies that chain to
//! whole point batches. Offsets are handled only at the conversion
//! boundary, so every chain runs in plain, unoffset CRS space.

use log::debug;

use crate::crs::errors::{CrsError, CrsResult};
use crate::crs::{Crs, LocalTangentPlane, GEODETIC_PROJ};
use crate::geodesy::ellipsoid::{ensure_default, Ellipsoid};
use crate::geodesy::projection::ProjectionTransform;
use crate::geodesy::tangent::TangentPlane;

use super::batch::PointBatch;

/// Converts point batches from one CRS to another
pub struct CoordinateConverter {
    from_offset: [f64; 3],
    to_offset: [f64; 3],
    chain: Chain,
}

/// The transform chain selected for a pair of systems
///
/// Local tangent planes cannot be expressed as projection descriptors, so
/// every pairing with one gets its own chain; everything else is a single
/// projection-engine transform between two descriptors.
enum Chain {
    /// Projection-engine transform between two descriptor-defined systems
    Projected(ProjectionTransform),
    /// ENU into the source plane's ECEF, then out into the target plane
    TangentToTangent { from: TangentPlane, to: TangentPlane },
    TangentToEcef { from: TangentPlane },
    TangentToGeodetic { from: TangentPlane },
    /// ENU to geodetic, then geodetic into the target descriptor system
    TangentToProjected { from: TangentPlane, to: ProjectionTransform },
    EcefToTangent { to: TangentPlane },
    GeodeticToTangent { to: TangentPlane },
    /// Source descriptor system to geodetic, then into the target plane
    ProjectedToTangent { from: ProjectionTransform, to: TangentPlane },
}

impl CoordinateConverter {
    /// Build a converter between two systems on the default ellipsoid
    ///
    /// # Arguments
    /// * `from_crs` - The system to convert points from
    /// * `to_crs` - The system to convert points to
    pub fn new(from_crs: &Crs, to_crs: &Crs) -> CrsResult<Self> {
        Self::with_ellipsoid(from_crs, to_crs, Ellipsoid::default())
    }

    /// Build a converter on an explicitly provided reference ellipsoid
    ///
    /// Only the default WGS84 ellipsoid is supported; any other value is
    /// rejected before a chain is built.
    pub fn with_ellipsoid(from_crs: &Crs, to_crs: &Crs, ellipsoid: Ellipsoid) -> CrsResult<Self> {
        ensure_default(&ellipsoid)?;

        debug!("Building conversion chain: {} -> {}", from_crs, to_crs);
        let chain = Chain::select(from_crs, to_crs, &ellipsoid)?;

        Ok(CoordinateConverter {
            from_offset: from_crs.offset(),
            to_offset: to_crs.offset(),
            chain,
        })
    }

    /// Convert a batch of points to the target CRS
    ///
    /// The source offset is added to every point, the chain is applied, and
    /// the target offset is subtracted from the result. The input batch is
    /// left untouched.
    ///
    /// # Arguments
    /// * `points` - A batch of shape (N, 3) in the source system's axis order
    ///
    /// # Returns
    /// A batch of shape (N, 3) in the target system's axis order, or a
    /// shape error if the input does not have exactly three columns
    pub fn convert(&self, points: &PointBatch) -> CrsResult<PointBatch> {
        let (rows, cols) = points.shape();
        if cols != 3 {
            return Err(CrsError::Shape { rows, cols });
        }

        let mut converted = Vec::with_capacity(rows);
        for index in 0..rows {
            let point = points.point(index);
            let shifted = [
                point[0] + self.from_offset[0],
                point[1] + self.from_offset[1],
                point[2] + self.from_offset[2],
            ];
            let out = self.chain.apply(shifted);
            converted.push([
                out[0] - self.to_offset[0],
                out[1] - self.to_offset[1],
                out[2] - self.to_offset[2],
            ]);
        }

        Ok(PointBatch::from_points(converted))
    }
}

/// Build the tangent plane frame for a local tangent plane CRS
fn plane(ltp: &LocalTangentPlane, ellipsoid: &Ellipsoid) -> TangentPlane {
    TangentPlane::new(ltp.lon, ltp.lat, ltp.alt, ellipsoid)
}

/// Get the projection descriptor of a non-tangent-plane system
fn proj_def(crs: &Crs) -> CrsResult<String> {
    crs.proj_def().ok_or_else(|| {
        CrsError::CrsDef(format!(
            "no projection definition exists for {}",
            crs
        ))
    })
}

impl Chain {
    /// Select the transform chain for a pair of systems
    ///
    /// The match is exhaustive over the variant pairs: every combination
    /// involving a local tangent plane has an explicit arm, and the final
    /// arm covers all pairs of descriptor-defined systems.
    fn select(from_crs: &Crs, to_crs: &Crs, ellipsoid: &Ellipsoid) -> CrsResult<Chain> {
        Ok(match (from_crs, to_crs) {
            (Crs::LocalTangentPlane(from), Crs::LocalTangentPlane(to)) => Chain::TangentToTangent {
                from: plane(from, ellipsoid),
                to: plane(to, ellipsoid),
            },
            (Crs::LocalTangentPlane(from), Crs::Geocentric(_)) => Chain::TangentToEcef {
                from: plane(from, ellipsoid),
            },
            (Crs::LocalTangentPlane(from), Crs::Geodetic(_)) => Chain::TangentToGeodetic {
                from: plane(from, ellipsoid),
            },
            (Crs::LocalTangentPlane(from), Crs::Utm(to)) => Chain::TangentToProjected {
                from: plane(from, ellipsoid),
                to: ProjectionTransform::new(GEODETIC_PROJ, &to.proj_str(), ellipsoid)?,
            },
            (Crs::LocalTangentPlane(from), Crs::RawProjection(to)) => Chain::TangentToProjected {
                from: plane(from, ellipsoid),
                to: ProjectionTransform::new(GEODETIC_PROJ, &to.proj_str(), ellipsoid)?,
            },
            (Crs::Geocentric(_), Crs::LocalTangentPlane(to)) => Chain::EcefToTangent {
                to: plane(to, ellipsoid),
            },
            (Crs::Geodetic(_), Crs::LocalTangentPlane(to)) => Chain::GeodeticToTangent {
                to: plane(to, ellipsoid),
            },
            (Crs::Utm(from), Crs::LocalTangentPlane(to)) => Chain::ProjectedToTangent {
                from: ProjectionTransform::new(&from.proj_str(), GEODETIC_PROJ, ellipsoid)?,
                to: plane(to, ellipsoid),
            },
            (Crs::RawProjection(from), Crs::LocalTangentPlane(to)) => Chain::ProjectedToTangent {
                from: ProjectionTransform::new(&from.proj_str(), GEODETIC_PROJ, ellipsoid)?,
                to: plane(to, ellipsoid),
            },
            // Neither endpoint is a tangent plane
            (from, to) => Chain::Projected(ProjectionTransform::new(
                &proj_def(from)?,
                &proj_def(to)?,
                ellipsoid,
            )?),
        })
    }

    /// Apply the chain to a single unoffset point
    fn apply(&self, point: [f64; 3]) -> [f64; 3] {
        match self {
            Chain::Projected(transform) => transform.apply(point),
            Chain::TangentToTangent { from, to } => to.ecef_to_enu(from.enu_to_ecef(point)),
            Chain::TangentToEcef { from } => from.enu_to_ecef(point),
            Chain::TangentToGeodetic { from } => from.enu_to_geodetic(point),
            Chain::TangentToProjected { from, to } => to.apply(from.enu_to_geodetic(point)),
            Chain::EcefToTangent { to } => to.ecef_to_enu(point),
            Chain::GeodeticToTangent { to } => to.geodetic_to_enu(point),
            Chain::ProjectedToTangent { from, to } => to.geodetic_to_enu(from.apply(point)),
        }
    }
}
