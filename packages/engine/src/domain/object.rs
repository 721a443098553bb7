//! PhysicsObject - one decorative body in the stress test
//!
//! The physics code reads and writes the kinematic state; `handle` only
//! tells the renderer which visual element the object belongs to.

use crate::core::utils::random::DEFAULT_SEED;
use crate::core::Vec3;

/// Opaque id of the visual element backing an object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct RenderHandle(pub u32);

#[derive(Clone, Debug)]
pub struct PhysicsObject {
    // === Physics State ===
    /// Centre position
    pub position: Vec3,
    /// Velocity (pixels per normalized frame)
    pub velocity: Vec3,
    /// Euler rotation in degrees, never wrapped
    pub rotation: Vec3,
    /// Degrees per normalized frame
    pub rotation_velocity: Vec3,

    // === Shape ===
    /// Bounding cube edge, doubles as collision diameter
    pub size: f32,
    /// Volume-proportional: size³ / 1000
    pub mass: f32,
    /// Bounciness in [0.7, 1.0)
    pub restitution: f32,

    /// Timestamp (ms) of the last meaningful floor bounce
    pub last_bounce_ms: f64,
    /// Visual detail hint for the renderer
    pub face_count: u32,
    pub handle: RenderHandle,
    /// Private generator state (turbulence)
    pub rng_state: u32,
}

impl PhysicsObject {
    /// Object at rest at `position`. Sizes below 1px are raised to 1px
    /// so mass stays positive.
    pub fn new(position: Vec3, size: f32) -> Self {
        let size = if size.is_finite() { size.max(1.0) } else { 1.0 };
        Self {
            position,
            velocity: Vec3::zero(),
            rotation: Vec3::zero(),
            rotation_velocity: Vec3::zero(),
            size,
            mass: mass_for_size(size),
            restitution: 0.85,
            last_bounce_ms: 0.0,
            face_count: 10,
            handle: RenderHandle::default(),
            rng_state: DEFAULT_SEED,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.set_restitution(restitution);
        self
    }

    /// Set restitution (bounciness), kept strictly below 1.0
    pub fn set_restitution(&mut self, r: f32) {
        self.restitution = r.clamp(0.0, MAX_RESTITUTION);
    }

    #[inline]
    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Largest f32 below 1.0
pub const MAX_RESTITUTION: f32 = 1.0 - f32::EPSILON / 2.0;

#[inline]
pub fn mass_for_size(size: f32) -> f32 {
    size * size * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_is_volume_proportional() {
        let obj = PhysicsObject::new(Vec3::zero(), 20.0);
        assert_eq!(obj.mass, 8.0);
        assert_eq!(obj.half_size(), 10.0);
    }

    #[test]
    fn degenerate_size_keeps_mass_positive() {
        assert!(PhysicsObject::new(Vec3::zero(), 0.0).mass > 0.0);
        assert!(PhysicsObject::new(Vec3::zero(), f32::NAN).mass > 0.0);
    }

    #[test]
    fn restitution_never_reaches_one() {
        let obj = PhysicsObject::new(Vec3::zero(), 20.0).with_restitution(1.0);
        assert!(obj.restitution < 1.0);
    }
}
