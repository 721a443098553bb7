use crate::core::utils::random::centered_f32;
use crate::domain::config::PhysicsConfig;
use crate::domain::object::PhysicsObject;

use super::{MAX_FRAME_MS, REFERENCE_FRAME_MS, TURBULENCE_THRESHOLD};

/// Convert a frame delta in ms to normalized frames (16ms = 1.0).
///
/// Hitches are capped at 33ms so a resumed tab can't tunnel through walls.
/// Negative or non-finite deltas count as a zero-length frame.
#[inline]
pub fn normalize_delta(delta_ms: f64) -> f32 {
    if !delta_ms.is_finite() || delta_ms <= 0.0 {
        return 0.0;
    }
    (delta_ms.min(MAX_FRAME_MS) / REFERENCE_FRAME_MS) as f32
}

/// Advance one object by `dt` normalized frames.
///
/// Velocity is fully updated (and clamped) before position moves.
pub fn integrate(obj: &mut PhysicsObject, dt: f32, complexity: u8, config: &PhysicsConfig) {
    // Gravity (+Y is down)
    obj.velocity.y += config.gravity * dt;

    if complexity > TURBULENCE_THRESHOLD {
        let strength = config.turbulence * (complexity as f32 / 100.0) * dt;
        obj.velocity.x += centered_f32(&mut obj.rng_state) * strength;
        obj.velocity.y += centered_f32(&mut obj.rng_state) * strength;
        obj.velocity.z += centered_f32(&mut obj.rng_state) * strength;
    }

    obj.velocity *= config.damping.powf(dt);

    obj.rotation += obj.rotation_velocity * dt;

    let max = config.maximum_velocity;
    let speed_squared = obj.velocity.length_squared();
    if speed_squared > max * max {
        obj.velocity *= max / speed_squared.sqrt();
    }

    obj.position += obj.velocity * dt;
}
