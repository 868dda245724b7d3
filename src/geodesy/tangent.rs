//! Local tangent plane (East-North-Up) transforms

use nalgebra::{Matrix3, Vector3};

use super::ellipsoid::Ellipsoid;
use super::geocentric::{ecef_to_geodetic, geodetic_to_ecef};

/// An East-North-Up frame anchored at a geodetic origin
///
/// The origin's ECEF position and the ECEF-to-ENU rotation are computed
/// once at construction; every transform afterwards is a rotation plus a
/// translation.
#[derive(Debug, Clone)]
pub struct TangentPlane {
    /// ECEF position of the frame origin
    origin: Vector3<f64>,
    /// Rotation taking ECEF axis deltas into ENU axes
    rotation: Matrix3<f64>,
    ellipsoid: Ellipsoid,
}

impl TangentPlane {
    /// Create a tangent plane frame at the given geodetic origin
    ///
    /// # Arguments
    /// * `lon` - Origin longitude in degrees
    /// * `lat` - Origin latitude in degrees
    /// * `alt` - Origin altitude above the ellipsoid in meters
    /// * `ellipsoid` - The reference ellipsoid
    pub fn new(lon: f64, lat: f64, alt: f64, ellipsoid: &Ellipsoid) -> Self {
        let [x, y, z] = geodetic_to_ecef([lon, lat, alt], ellipsoid);

        let phi = lat.to_radians();
        let lambda = lon.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_lambda, cos_lambda) = lambda.sin_cos();

        // Rows are the east, north, and up unit vectors in ECEF.
        let rotation = Matrix3::new(
            -sin_lambda,
            cos_lambda,
            0.0,
            -sin_phi * cos_lambda,
            -sin_phi * sin_lambda,
            cos_phi,
            cos_phi * cos_lambda,
            cos_phi * sin_lambda,
            sin_phi,
        );

        TangentPlane {
            origin: Vector3::new(x, y, z),
            rotation,
            ellipsoid: *ellipsoid,
        }
    }

    /// Transform a point in this frame to ECEF coordinates
    pub fn enu_to_ecef(&self, point: [f64; 3]) -> [f64; 3] {
        let local = Vector3::new(point[0], point[1], point[2]);
        let ecef = self.rotation.transpose() * local + self.origin;
        [ecef.x, ecef.y, ecef.z]
    }

    /// Transform an ECEF point into this frame
    pub fn ecef_to_enu(&self, point: [f64; 3]) -> [f64; 3] {
        let delta = Vector3::new(point[0], point[1], point[2]) - self.origin;
        let local = self.rotation * delta;
        [local.x, local.y, local.z]
    }

    /// Transform a point in this frame to geodetic coordinates
    pub fn enu_to_geodetic(&self, point: [f64; 3]) -> [f64; 3] {
        ecef_to_geodetic(self.enu_to_ecef(point), &self.ellipsoid)
    }

    /// Transform a geodetic point into this frame
    pub fn geodetic_to_enu(&self, point: [f64; 3]) -> [f64; 3] {
        self.ecef_to_enu(geodetic_to_ecef(point, &self.ellipsoid))
    }
}
