//! Geodetic and geocentric (ECEF) conversions

use super::ellipsoid::Ellipsoid;

/// Convert a geodetic point to ECEF coordinates
///
/// # Arguments
/// * `point` - Longitude (degrees), latitude (degrees), altitude (meters)
/// * `ellipsoid` - The reference ellipsoid
///
/// # Returns
/// ECEF x/y/z in meters
pub fn geodetic_to_ecef(point: [f64; 3], ellipsoid: &Ellipsoid) -> [f64; 3] {
    let lon = point[0].to_radians();
    let lat = point[1].to_radians();
    let alt = point[2];

    let e2 = ellipsoid.e2();
    let n = ellipsoid.semimajor() / (1.0 - e2 * lat.sin().powi(2)).sqrt();

    [
        (n + alt) * lat.cos() * lon.cos(),
        (n + alt) * lat.cos() * lon.sin(),
        (n * (1.0 - e2) + alt) * lat.sin(),
    ]
}

/// Convert an ECEF point to geodetic coordinates
///
/// Uses Bowring's closed formula, which is accurate to well below a
/// millimeter for terrestrial points.
///
/// # Arguments
/// * `point` - ECEF x/y/z in meters
/// * `ellipsoid` - The reference ellipsoid
///
/// # Returns
/// Longitude (degrees), latitude (degrees), altitude (meters)
pub fn ecef_to_geodetic(point: [f64; 3], ellipsoid: &Ellipsoid) -> [f64; 3] {
    let (x, y, z) = (point[0], point[1], point[2]);

    let a = ellipsoid.semimajor();
    let b = ellipsoid.semiminor();
    let e2 = ellipsoid.e2();
    let ep2 = ellipsoid.ep2();

    let rho = (x * x + y * y).sqrt();
    let mut theta = (z * a).atan2(rho * b);
    let mut lat = (z + ep2 * b * theta.sin().powi(3)).atan2(rho - e2 * a * theta.cos().powi(3));
    // One refinement of the parametric latitude keeps the remaining error
    // below floating-point noise even at altitude.
    theta = ((1.0 - ellipsoid.flattening()) * lat.tan()).atan();
    lat = (z + ep2 * b * theta.sin().powi(3)).atan2(rho - e2 * a * theta.cos().powi(3));
    let lon = y.atan2(x);

    let n = a / (1.0 - e2 * lat.sin().powi(2)).sqrt();
    // The usual altitude expression degenerates near the poles where rho
    // approaches zero, so switch to the polar form there.
    let alt = if rho > 1.0 {
        rho / lat.cos() - n
    } else {
        z / lat.sin() - n * (1.0 - e2)
    };

    [lon.to_degrees(), lat.to_degrees(), alt]
}
