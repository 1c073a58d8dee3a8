use glam::{DAffine3, DQuat, DVec3};

use crate::clock::CelestialClock;

impl CelestialClock {
    /// Earth body frame: orbit pivot, offset to the orbit radius, axial spin.
    pub fn earth_frame(&self) -> DAffine3 {
        DAffine3::from_rotation_y(self.earth_orbit)
            * DAffine3::from_translation(DVec3::new(self.params.earth_orbit_radius, 0.0, 0.0))
            * DAffine3::from_rotation_y(self.earth_spin)
    }

    /// Moon body frame, nested under the Earth body.
    pub fn moon_frame(&self) -> DAffine3 {
        self.earth_frame()
            * DAffine3::from_rotation_y(self.moon_orbit)
            * DAffine3::from_translation(DVec3::new(self.params.moon_orbit_radius, 0.0, 0.0))
            * DAffine3::from_rotation_y(self.moon_spin())
    }

    /// World orientation of the Earth body: orbit pivot angle plus spin.
    pub fn earth_rotation(&self) -> DQuat {
        DQuat::from_rotation_y(self.earth_orbit + self.earth_spin)
    }

    /// Earth center in world space.
    pub fn earth_position(&self) -> DVec3 {
        self.earth_frame().translation
    }

    pub fn moon_position(&self) -> DVec3 {
        self.moon_frame().translation
    }

    /// Compose an Earth-local pose into world space.
    pub fn craft_to_world(&self, position: DVec3, orientation: DQuat) -> (DVec3, DQuat) {
        (
            self.earth_frame().transform_point3(position),
            (self.earth_rotation() * orientation).normalize(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{EARTH_ORBIT_RADIUS, MOON_ORBIT_RADIUS};
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_initial_frames() {
        let clock = CelestialClock::default();
        assert!((clock.earth_position() - DVec3::new(EARTH_ORBIT_RADIUS, 0.0, 0.0)).length() < EPS);
        assert!(
            (clock.moon_position() - DVec3::new(EARTH_ORBIT_RADIUS + MOON_ORBIT_RADIUS, 0.0, 0.0))
                .length()
                < EPS
        );
    }

    #[test]
    fn test_earth_stays_on_its_orbit() {
        let mut clock = CelestialClock::default();
        for _ in 0..500 {
            clock.tick();
            assert!((clock.earth_position().length() - EARTH_ORBIT_RADIUS).abs() < 1e-9);
            let moon_offset = clock.moon_position() - clock.earth_position();
            assert!((moon_offset.length() - MOON_ORBIT_RADIUS).abs() < 1e-9);
        }
    }

    #[test]
    fn test_moon_spin_cancels_its_orbit() {
        let mut clock = CelestialClock::default();
        for _ in 0..300 {
            clock.tick();
        }
        // relative to the earth body the moon never turns
        let moon = clock.moon_frame();
        for axis in [DVec3::X, DVec3::Z] {
            let expected = clock.earth_rotation() * axis;
            assert!((moon.transform_vector3(axis) - expected).length() < 1e-9);
        }
    }

    #[test]
    fn test_craft_to_world_follows_earth_spin() {
        let mut clock = CelestialClock::default();
        clock.earth_spin = FRAC_PI_2;
        let (pos, rot) = clock.craft_to_world(DVec3::new(0.0, 0.0, 103.0), DQuat::IDENTITY);
        // +Z rotated a quarter turn about +Y lands on +X
        assert!((pos - DVec3::new(EARTH_ORBIT_RADIUS + 103.0, 0.0, 0.0)).length() < EPS);
        assert!((rot * DVec3::Z - DVec3::X).length() < EPS);
    }
}
