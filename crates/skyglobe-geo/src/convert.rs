//! Conversion between latitude/longitude/radius and Cartesian positions.

use std::f64::consts::PI;

use glam::DVec3;

use crate::GeoCoord;

/// Convert latitude/longitude (degrees) and a sphere radius to a position.
///
/// Uses the polar angle `phi = 90° - lat` and azimuth `theta = lon + 180°`:
///
/// ```text
/// x = -r sin(phi) cos(theta)
/// y =  r cos(phi)
/// z =  r sin(phi) sin(theta)
/// ```
pub fn to_cartesian(lat_deg: f64, lon_deg: f64, radius: f64) -> DVec3 {
    let phi = (90.0 - lat_deg) * PI / 180.0;
    let theta = (lon_deg + 180.0) * PI / 180.0;

    DVec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Inverse of [`to_cartesian`]. Longitude is returned in `[-180, 180)`.
///
/// The sphere center has no direction, so it maps to `(0, 0)` instead of NaN.
/// At the poles the latitude is exact but the longitude is arbitrary.
pub fn to_geodetic(position: DVec3) -> GeoCoord {
    let radius = position.length();
    if radius == 0.0 {
        return GeoCoord::new(0.0, 0.0);
    }

    // y / r can overshoot ±1 by an ulp.
    let polar = (position.y / radius).clamp(-1.0, 1.0).acos();
    let latitude = 90.0 - polar * 180.0 / PI;

    let azimuth = position.z.atan2(-position.x) * 180.0 / PI;
    let longitude = (azimuth + 360.0) % 360.0 - 180.0;

    GeoCoord::new(latitude, longitude)
}

/// Unit vector pointing due north along the surface at the given location.
///
/// This is the derivative of [`to_cartesian`] with respect to latitude. It is
/// already unit length and stays defined at the poles, where it points along
/// the meridian of `lon_deg`.
pub fn north_tangent(lat_deg: f64, lon_deg: f64) -> DVec3 {
    let phi = (90.0 - lat_deg) * PI / 180.0;
    let theta = (lon_deg + 180.0) * PI / 180.0;

    DVec3::new(phi.cos() * theta.cos(), phi.sin(), -phi.cos() * theta.sin())
}
