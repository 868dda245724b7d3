pub mod crs;
pub mod geodesy;
pub mod converter;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::CoordKit;

pub use crs::errors::{CrsError, CrsResult};
pub use crs::{Crs, Geocentric, Geodetic, LocalTangentPlane, RawProjection, Utm};
pub use converter::{CoordinateConverter, PointBatch};
pub use geodesy::{set_active_ellipsoid, Ellipsoid};
