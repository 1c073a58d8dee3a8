//! Flight readout line for the on-screen panel and periodic logs.

use skyglobe_nav::{CameraMode, Telemetry};

/// Example: `POS: 48.85°, 2.35° | ALT: 3.00 km | HDG: 000.0° | SPD: 15.0 | ORBIT: ON | CAM: ORBIT`
pub fn format_readout(telemetry: &Telemetry, orbit_paused: bool, mode: CameraMode) -> String {
    // 359.96 would otherwise print as 360.0
    let heading = if (telemetry.heading_deg * 10.0).round() >= 3600.0 {
        0.0
    } else {
        telemetry.heading_deg
    };
    format!(
        "POS: {:.2}\u{00b0}, {:.2}\u{00b0} | ALT: {:.2} km | HDG: {:05.1}\u{00b0} | SPD: {:.1} | ORBIT: {} | CAM: {}",
        telemetry.latitude_deg,
        telemetry.longitude_deg,
        telemetry.altitude_km,
        heading,
        telemetry.speed,
        if orbit_paused { "OFF" } else { "ON" },
        mode,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> Telemetry {
        Telemetry {
            latitude_deg: 48.85,
            longitude_deg: 2.35,
            altitude_km: 3.0,
            heading_deg: 0.0,
            speed: 15.0,
        }
    }

    #[test]
    fn test_format_readout_output() {
        assert_eq!(
            format_readout(&paris(), false, CameraMode::Orbit),
            "POS: 48.85°, 2.35° | ALT: 3.00 km | HDG: 000.0° | SPD: 15.0 | ORBIT: ON | CAM: ORBIT"
        );
    }

    #[test]
    fn test_paused_cockpit_readout() {
        let telemetry = Telemetry {
            latitude_deg: -33.868,
            longitude_deg: 151.209,
            heading_deg: 87.25,
            ..paris()
        };
        let text = format_readout(&telemetry, true, CameraMode::Cockpit);
        assert!(text.starts_with("POS: -33.87°, 151.21°"));
        assert!(text.contains("HDG: 087.2°") || text.contains("HDG: 087.3°"));
        assert!(text.ends_with("ORBIT: OFF | CAM: COCKPIT"));
    }

    #[test]
    fn test_heading_never_prints_360() {
        let telemetry = Telemetry {
            heading_deg: 359.97,
            ..paris()
        };
        assert!(format_readout(&telemetry, false, CameraMode::Orbit).contains("HDG: 000.0°"));
    }
}
