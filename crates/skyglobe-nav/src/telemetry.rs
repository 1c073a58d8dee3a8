use glam::EulerRot;
use skyglobe_geo::{GeoCoord, to_geodetic};

use crate::craft::CraftState;

/// Read-only flight readout, recomputed every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Telemetry {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Height above the planet surface.
    pub altitude_km: f64,
    /// Always in `[0, 360)`.
    pub heading_deg: f64,
    pub speed: f64,
}

impl Telemetry {
    pub fn derive(craft: &CraftState, planet_radius: f64) -> Self {
        let geo = to_geodetic(craft.position);
        // Y-X-Z decomposition, yaw first.
        let (yaw, _pitch, _roll) = craft.orientation.to_euler(EulerRot::YXZ);
        Self {
            latitude_deg: geo.latitude,
            longitude_deg: geo.longitude,
            altitude_km: craft.radius() - planet_radius,
            heading_deg: wrap_degrees(yaw.to_degrees()),
            speed: craft.current_speed,
        }
    }

    pub fn geo(&self) -> GeoCoord {
        GeoCoord::new(self.latitude_deg, self.longitude_deg)
    }
}

fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
