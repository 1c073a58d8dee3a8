//! Sun, Earth, and Moon revolution.
//!
//! The Sun sits at the world origin. The Earth orbits it on a pivot and spins
//! about its own +Y axis; the Moon orbits the Earth on a second pivot that is
//! carried by the Earth's spin, and stays tidally locked. Angles advance by
//! fixed increments per tick, not per second, so the scene keeps the same
//! pace regardless of the craft's frame delta.

mod clock;
mod frames;

pub use clock::{
    CelestialClock, CelestialParams, EARTH_DAY_SPEED, EARTH_ORBIT_RADIUS, EARTH_RADIUS,
    EARTH_YEAR_SPEED, MOON_ORBIT_RADIUS, MOON_ORBIT_SPEED, MOON_RADIUS, SUN_RADIUS,
};
