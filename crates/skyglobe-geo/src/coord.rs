//! Latitude/longitude pair with display and distance helpers.

use std::fmt;

use glam::DVec3;

use crate::convert::to_cartesian;

/// A geographic location in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoCoord {
    /// Latitude in degrees. Range: \[-90, 90\]. Positive = north.
    pub latitude: f64,
    /// Longitude in degrees. Range: \[-180, 180). Positive = east.
    pub longitude: f64,
}

impl GeoCoord {
    /// Create a new coordinate from degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Position of this coordinate on a sphere of the given radius.
    pub fn to_cartesian(&self, radius: f64) -> DVec3 {
        to_cartesian(self.latitude, self.longitude, radius)
    }

    /// Great-circle distance to `other` on a sphere of `radius` (haversine).
    pub fn surface_distance_to(&self, other: &GeoCoord, radius: f64) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().min(1.0).asin();

        radius * c
    }
}

impl fmt::Display for GeoCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        write!(
            f,
            "{:.2}\u{00B0}{}, {:.2}\u{00B0}{}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_compass_suffixes() {
        let paris = GeoCoord::new(48.85, 2.35);
        assert_eq!(paris.to_string(), "48.85\u{00B0}N, 2.35\u{00B0}E");

        let santiago = GeoCoord::new(-33.45, -70.66);
        assert_eq!(santiago.to_string(), "33.45\u{00B0}S, 70.66\u{00B0}W");
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = GeoCoord::new(12.0, -45.0);
        assert!(p.surface_distance_to(&p, 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_quarter_meridian_distance() {
        let equator = GeoCoord::new(0.0, 0.0);
        let pole = GeoCoord::new(90.0, 0.0);
        let d = equator.surface_distance_to(&pole, 100.0);
        assert!((d - 100.0 * std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_distance_is_half_circumference() {
        let a = GeoCoord::new(0.0, 0.0);
        let b = GeoCoord::new(0.0, 180.0);
        let d = a.surface_distance_to(&b, 1.0);
        assert!((d - std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn test_to_cartesian_matches_free_function() {
        let c = GeoCoord::new(-20.0, 140.0);
        assert_eq!(c.to_cartesian(7.0), to_cartesian(-20.0, 140.0, 7.0));
    }
}
