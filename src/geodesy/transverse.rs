//! Transverse Mercator projection math for UTM zones
//!
//! Series expansions follow the standard Snyder formulation. Accuracy is
//! at the millimeter level within a zone, which is far below the batch
//! conversion tolerances this toolkit promises.

use super::ellipsoid::Ellipsoid;

/// UTM scale factor on the central meridian
const K0: f64 = 0.9996;
/// False easting applied to every zone, in meters
const FALSE_EASTING: f64 = 500_000.0;
/// False northing applied in the southern hemisphere, in meters
const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// Central meridian of a UTM zone in degrees
fn central_meridian(zone: u8) -> f64 {
    (zone as f64 - 1.0) * 6.0 - 180.0 + 3.0
}

/// Project a geodetic point into a UTM zone
///
/// Altitude passes through unchanged.
///
/// # Arguments
/// * `point` - Longitude (degrees), latitude (degrees), altitude (meters)
/// * `zone` - UTM zone number, 1 through 60
/// * `south` - Whether the southern false northing applies
/// * `ellipsoid` - The reference ellipsoid
///
/// # Returns
/// Easting, northing, altitude in meters
pub fn geodetic_to_utm(point: [f64; 3], zone: u8, south: bool, ellipsoid: &Ellipsoid) -> [f64; 3] {
    let a = ellipsoid.semimajor();
    let e2 = ellipsoid.e2();
    let ep2 = ellipsoid.ep2();

    let lat = point[1].to_radians();
    let lon = point[0].to_radians();
    let lon0 = central_meridian(zone).to_radians();

    let sin_lat = lat.sin();
    let cos_lat = lat.cos();
    let tan_lat = lat.tan();

    let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
    let t = tan_lat * tan_lat;
    let c = ep2 * cos_lat * cos_lat;
    let a_cap = (lon - lon0) * cos_lat;

    // Meridian arc length from the equator
    let m = a
        * ((1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2.powi(3) / 256.0) * lat
            - (3.0 * e2 / 8.0 + 3.0 * e2 * e2 / 32.0 + 45.0 * e2.powi(3) / 1024.0)
                * (2.0 * lat).sin()
            + (15.0 * e2 * e2 / 256.0 + 45.0 * e2.powi(3) / 1024.0) * (4.0 * lat).sin()
            - (35.0 * e2.powi(3) / 3072.0) * (6.0 * lat).sin());

    let easting = FALSE_EASTING
        + K0 * n
            * (a_cap
                + (1.0 - t + c) * a_cap.powi(3) / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a_cap.powi(5) / 120.0);

    let mut northing = K0
        * (m + n
            * tan_lat
            * (a_cap * a_cap / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c * c) * a_cap.powi(4) / 24.0
                + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a_cap.powi(6) / 720.0));
    if south {
        northing += FALSE_NORTHING_SOUTH;
    }

    [easting, northing, point[2]]
}

/// Unproject a UTM point back to geodetic coordinates
///
/// Altitude passes through unchanged.
///
/// # Arguments
/// * `point` - Easting, northing, altitude in meters
/// * `zone` - UTM zone number, 1 through 60
/// * `south` - Whether the southern false northing applies
/// * `ellipsoid` - The reference ellipsoid
///
/// # Returns
/// Longitude (degrees), latitude (degrees), altitude (meters)
pub fn utm_to_geodetic(point: [f64; 3], zone: u8, south: bool, ellipsoid: &Ellipsoid) -> [f64; 3] {
    let a = ellipsoid.semimajor();
    let e2 = ellipsoid.e2();
    let ep2 = ellipsoid.ep2();

    let x = point[0] - FALSE_EASTING;
    let mut y = point[1];
    if south {
        y -= FALSE_NORTHING_SOUTH;
    }

    // Footpoint latitude from the rectified arc length
    let m = y / K0;
    let mu = m / (a * (1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2.powi(3) / 256.0));
    let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());
    let j1 = 3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0;
    let j2 = 21.0 * e1.powi(2) / 16.0 - 55.0 * e1.powi(4) / 32.0;
    let j3 = 151.0 * e1.powi(3) / 96.0;
    let j4 = 1097.0 * e1.powi(4) / 512.0;
    let fp = mu
        + j1 * (2.0 * mu).sin()
        + j2 * (4.0 * mu).sin()
        + j3 * (6.0 * mu).sin()
        + j4 * (8.0 * mu).sin();

    let c1 = ep2 * fp.cos().powi(2);
    let t1 = fp.tan().powi(2);
    let r1 = a * (1.0 - e2) / (1.0 - e2 * fp.sin().powi(2)).powf(1.5);
    let n1 = a / (1.0 - e2 * fp.sin().powi(2)).sqrt();
    let d = x / (n1 * K0);

    let lat = fp
        - (n1 * fp.tan() / r1)
            * (d * d / 2.0
                - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d.powi(4) / 24.0
                + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1 - 252.0 * ep2 - 3.0 * c1 * c1)
                    * d.powi(6)
                    / 720.0);
    let lon = (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
        + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1) * d.powi(5)
            / 120.0)
        / fp.cos();

    [
        central_meridian(zone) + lon.to_degrees(),
        lat.to_degrees(),
        point[2],
    ]
}
