use glam::{DQuat, DVec3};
use skyglobe_input::InputFrame;
use tracing::trace;

use crate::craft::{CraftState, DEGENERATE_EPSILON, tangent_frame};

pub const PLANET_RADIUS: f64 = 100.0;
pub const AIRPLANE_MIN_SPEED: f64 = 5.0;
pub const AIRPLANE_MAX_SPEED: f64 = 50.0;
pub const AIRPLANE_INITIAL_SPEED: f64 = 15.0;
/// Target-speed change per second while a speed key is held.
pub const AIRPLANE_ACCELERATION: f64 = 15.0;
/// Radians per second.
pub const AIRPLANE_TURN_RATE: f64 = 1.0;
/// How quickly the current speed converges on the target speed, per second.
pub const SPEED_BLEND_RATE: f64 = 5.0;
/// Reverse thrust relative to forward thrust.
pub const BACKWARD_FACTOR: f64 = 0.5;

/// Tunable parameters of the flight model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightModel {
    /// Sea-level radius; altitude is measured above it.
    pub planet_radius: f64,
    /// Lower bound for both current and target speed.
    pub min_speed: f64,
    /// Upper bound for both current and target speed.
    pub max_speed: f64,
    /// Target-speed change per second while a speed key is held.
    pub acceleration: f64,
    /// Fraction of the speed gap closed per second, capped at the whole gap.
    pub speed_blend: f64,
    /// Yaw rate in radians per second.
    pub turn_rate: f64,
    /// Reverse thrust as a fraction of forward thrust.
    pub backward_factor: f64,
}

impl Default for FlightModel {
    fn default() -> Self {
        Self {
            planet_radius: PLANET_RADIUS,
            min_speed: AIRPLANE_MIN_SPEED,
            max_speed: AIRPLANE_MAX_SPEED,
            acceleration: AIRPLANE_ACCELERATION,
            speed_blend: SPEED_BLEND_RATE,
            turn_rate: AIRPLANE_TURN_RATE,
            backward_factor: BACKWARD_FACTOR,
        }
    }
}

impl FlightModel {
    /// Advance `state` by one tick of `dt` seconds.
    ///
    /// Non-finite or negative `dt` is treated as zero. Degenerate geometry
    /// skips the translation for this tick; the result is always finite when
    /// the input state is.
    pub fn advance(&self, state: &CraftState, input: &InputFrame, dt: f64) -> CraftState {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut next = *state;

        self.apply_throttle(&mut next, input, dt);

        let mut yaw = 0.0;
        if input.left {
            yaw += self.turn_rate * dt;
        }
        if input.right {
            yaw -= self.turn_rate * dt;
        }
        if yaw != 0.0 {
            next.orientation = (next.orientation * DQuat::from_rotation_y(yaw)).normalize();
        }

        let step = next.current_speed * self.move_direction(input) * dt;
        if step != 0.0 {
            match self.translate(&next, step) {
                Some(moved) => next = moved,
                None => trace!(
                    position = ?next.position,
                    step,
                    "degenerate great-circle axis, translation skipped"
                ),
            }
        }

        next
    }

    /// 1 for forward, `-backward_factor` for backward, 0 otherwise.
    /// Forward wins when both are held.
    pub fn move_direction(&self, input: &InputFrame) -> f64 {
        if input.forward {
            1.0
        } else if input.backward {
            -self.backward_factor
        } else {
            0.0
        }
    }

    fn apply_throttle(&self, state: &mut CraftState, input: &InputFrame, dt: f64) {
        if input.increase_speed {
            state.target_speed += self.acceleration * dt;
        }
        if input.decrease_speed {
            state.target_speed -= self.acceleration * dt;
        }
        state.target_speed = self.clamp_speed(state.target_speed);

        let blend = (self.speed_blend * dt).min(1.0);
        state.current_speed += (state.target_speed - state.current_speed) * blend;
        state.current_speed = self.clamp_speed(state.current_speed);
    }

    /// Clamp into the speed band, tolerating swapped bounds.
    fn clamp_speed(&self, speed: f64) -> f64 {
        let lo = self.min_speed.min(self.max_speed);
        let hi = self.max_speed.max(self.min_speed);
        speed.max(lo).min(hi)
    }

    /// Slide the craft `distance` along the great circle through its
    /// position and forward vector, carrying its orientation along.
    fn translate(&self, state: &CraftState, distance: f64) -> Option<CraftState> {
        let radius = state.position.length();
        if !radius.is_finite() || radius < DEGENERATE_EPSILON {
            return None;
        }

        let axis = (state.position / radius).cross(state.forward());
        if axis.length_squared() < DEGENERATE_EPSILON * DEGENERATE_EPSILON {
            return None;
        }
        let rotation = DQuat::from_axis_angle(axis.normalize(), distance / radius);

        // Rescale so altitude does not drift over long flights.
        let position = (rotation * state.position).normalize() * radius;
        let carried = (rotation * state.orientation).normalize();
        let orientation = tangent_frame(position, carried * DVec3::Z).unwrap_or(carried);

        Some(CraftState {
            position,
            orientation,
            ..*state
        })
    }
}
