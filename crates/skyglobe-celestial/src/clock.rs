use std::f64::consts::TAU;

use tracing::debug;

pub const SUN_RADIUS: f64 = 15.0;
pub const EARTH_ORBIT_RADIUS: f64 = 150.0;
pub const EARTH_RADIUS: f64 = 100.0;
pub const MOON_RADIUS: f64 = 1.0;
pub const MOON_ORBIT_RADIUS: f64 = 10.0;

/// Radians per tick.
pub const EARTH_YEAR_SPEED: f64 = 0.001;
/// Radians per tick.
pub const EARTH_DAY_SPEED: f64 = 0.005;
/// Radians per tick.
pub const MOON_ORBIT_SPEED: f64 = 0.01;

/// Sizes and angular speeds of the celestial system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CelestialParams {
    pub sun_radius: f64,
    /// Sun-to-Earth distance.
    pub earth_orbit_radius: f64,
    /// Matches the flight model's planet radius.
    pub earth_radius: f64,
    pub moon_radius: f64,
    /// Earth-to-Moon distance.
    pub moon_orbit_radius: f64,
    /// Earth orbit pivot, radians per tick.
    pub earth_year_speed: f64,
    /// Earth axial spin, radians per tick.
    pub earth_day_speed: f64,
    /// Moon orbit pivot, radians per tick.
    pub moon_orbit_speed: f64,
}

impl Default for CelestialParams {
    fn default() -> Self {
        Self {
            sun_radius: SUN_RADIUS,
            earth_orbit_radius: EARTH_ORBIT_RADIUS,
            earth_radius: EARTH_RADIUS,
            moon_radius: MOON_RADIUS,
            moon_orbit_radius: MOON_ORBIT_RADIUS,
            earth_year_speed: EARTH_YEAR_SPEED,
            earth_day_speed: EARTH_DAY_SPEED,
            moon_orbit_speed: MOON_ORBIT_SPEED,
        }
    }
}

/// Pivot angles of the celestial system.
///
/// The only writer of the angles. Each angle is kept in `[0, TAU)`.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialClock {
    /// Radii and per-tick speeds.
    pub params: CelestialParams,
    /// Earth's revolution around the Sun.
    pub earth_orbit: f64,
    /// Earth's axial spin.
    pub earth_spin: f64,
    /// Moon's revolution around the Earth.
    pub moon_orbit: f64,
    paused: bool,
}

impl CelestialClock {
    /// All angles at zero, running.
    pub fn new(params: CelestialParams) -> Self {
        Self {
            params,
            earth_orbit: 0.0,
            earth_spin: 0.0,
            moon_orbit: 0.0,
            paused: false,
        }
    }

    /// Advance every pivot by one tick. Does nothing while paused.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        self.earth_orbit = advance(self.earth_orbit, self.params.earth_year_speed);
        self.earth_spin = advance(self.earth_spin, self.params.earth_day_speed);
        self.moon_orbit = advance(self.moon_orbit, self.params.moon_orbit_speed);
    }

    /// Whether [`tick`](Self::tick) is currently a no-op.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freeze or resume every pivot.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            debug!(paused, "celestial clock pause changed");
        }
        self.paused = paused;
    }

    /// Moon body rotation that cancels its orbit angle.
    pub fn moon_spin(&self) -> f64 {
        -self.moon_orbit
    }
}

impl Default for CelestialClock {
    fn default() -> Self {
        Self::new(CelestialParams::default())
    }
}

/// A non-finite speed leaves the angle where it is.
fn advance(angle: f64, speed: f64) -> f64 {
    if !speed.is_finite() {
        return angle;
    }
    (angle + speed).rem_euclid(TAU)
}
