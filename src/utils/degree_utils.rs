//! Degree length estimation
//!
//! The length of a degree of latitude is nearly constant, while a degree of
//! longitude shrinks toward the poles. These series give both in meters at
//! a latitude, which is handy for sizing tangent plane data sets and
//! sanity-checking conversions.

use std::f64::consts::PI;

const M1: f64 = 111_132.92;
const M2: f64 = -559.82;
const M3: f64 = 1.175;
const M4: f64 = -0.0023;
const P1: f64 = 111_412.84;
const P2: f64 = -93.5;
const P3: f64 = 0.118;

/// Computes the size in meters of one degree of longitude and latitude at
/// the given latitude
///
/// # Arguments
/// * `lat` - The latitude in degrees at which to compute the degree sizes
///
/// # Returns
/// The length of one degree of longitude and of latitude, in meters
pub fn degree_size(lat: f64) -> (f64, f64) {
    let lat = lat * PI / 180.0;

    let lat_len = M1 + M2 * (2.0 * lat).cos() + M3 * (4.0 * lat).cos() + M4 * (6.0 * lat).cos();
    let lon_len = P1 * lat.cos() + P2 * (3.0 * lat).cos() + P3 * (5.0 * lat).cos();

    (lon_len, lat_len)
}
