//! Geodetic math on the reference ellipsoid
//!
//! This module is the boundary between the CRS model and the actual
//! transform math: descriptor-defined projections, the geocentric frame,
//! and local tangent plane frames. The converter decides which transforms
//! to chain; this module owns how each one is computed.

pub mod ellipsoid;
pub mod geocentric;
pub mod projection;
pub mod tangent;
pub mod transverse;

// Re-export key types
pub use self::ellipsoid::{set_active_ellipsoid, Ellipsoid};
pub use self::projection::ProjectionTransform;
pub use self::tangent::TangentPlane;
