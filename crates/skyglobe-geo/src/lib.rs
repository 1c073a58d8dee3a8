//! Geographic coordinates on a Y-up sphere centered at the origin.
//!
//! Latitude is measured from the XZ plane toward +Y, which is the planet's
//! rotation axis. Longitude wraps around +Y with the prime meridian on +X.

mod convert;
mod coord;

pub use convert::{north_tangent, to_cartesian, to_geodetic};
pub use coord::GeoCoord;
