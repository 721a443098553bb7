//! Object Factory
//!
//! Spawns objects inside a band that is guaranteed to be on screen:
//! the central half horizontally, the upper 30% vertically, the central
//! 40% in depth. Everything falls into view rather than starting on the floor.
//! Objects are fully inside the box from the moment they exist.

use crate::core::utils::random::{centered_f32, fork_seed, unit_f32};
use crate::core::Vec3;
use crate::domain::bounds::SimulationBounds;
use crate::domain::object::{mass_for_size, PhysicsObject, RenderHandle, MAX_RESTITUTION};
use crate::systems::physics::contain;

const BASE_SIZE: f32 = 20.0;
const SIZE_SPREAD: f32 = 20.0;
const SPAWN_BAND_X: f32 = 0.5;
const SPAWN_BAND_Y: f32 = 0.3;
const SPAWN_BAND_Z: f32 = 0.4;
const INITIAL_SPEED: f32 = 3.0;
const INITIAL_SPIN: f32 = 3.0;
const MIN_RESTITUTION: f32 = 0.7;
const RESTITUTION_SPREAD: f32 = 0.3;
const MIN_FACES: u32 = 10;
const MAX_FACES: u32 = 60;

/// Number of faces the renderer should draw at this visual complexity
pub fn face_count(visual_complexity: u8) -> u32 {
    let c = visual_complexity.min(100) as u32;
    (MAX_FACES * c / 100).max(MIN_FACES)
}

/// Create an object's initial state.
///
/// `rng` is the simulation's generator; the object's own generator is forked from it.
pub fn create_object(
    visual_complexity: u8,
    bounds: &SimulationBounds,
    handle: RenderHandle,
    rng: &mut u32,
) -> PhysicsObject {
    let complexity = visual_complexity.min(100) as f32 / 100.0;
    let size = BASE_SIZE + unit_f32(rng) * SIZE_SPREAD * complexity;

    // The vertical band starts one half-size below the ceiling
    let half = size / 2.0;
    let band_y = (bounds.height * SPAWN_BAND_Y - half).max(0.0);
    let position = Vec3::new(
        centered_f32(rng) * bounds.width * SPAWN_BAND_X,
        bounds.min_y + half + unit_f32(rng) * band_y,
        centered_f32(rng) * bounds.depth * SPAWN_BAND_Z,
    );

    // No horizontal bias, downward-only vertical bias
    let velocity = Vec3::new(
        centered_f32(rng) * INITIAL_SPEED,
        unit_f32(rng) * INITIAL_SPEED,
        centered_f32(rng) * INITIAL_SPEED,
    );

    let rotation = Vec3::new(unit_f32(rng) * 360.0, unit_f32(rng) * 360.0, unit_f32(rng) * 360.0);
    let rotation_velocity = Vec3::new(
        centered_f32(rng) * INITIAL_SPIN,
        centered_f32(rng) * INITIAL_SPIN,
        centered_f32(rng) * INITIAL_SPIN,
    );

    let restitution = (MIN_RESTITUTION + unit_f32(rng) * RESTITUTION_SPREAD).min(MAX_RESTITUTION);

    let mut obj = PhysicsObject {
        position,
        velocity,
        rotation,
        rotation_velocity,
        size,
        mass: mass_for_size(size),
        restitution,
        last_bounce_ms: 0.0,
        face_count: face_count(visual_complexity),
        handle,
        rng_state: fork_seed(rng),
    };
    // Small viewports can make the X/Z bands wider than the box allows
    contain(&mut obj, bounds);
    obj
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> SimulationBounds {
        SimulationBounds::from_viewport(1200.0, 800.0).unwrap()
    }

    #[test]
    fn face_count_has_floor_of_ten() {
        assert_eq!(face_count(0), 10);
        assert_eq!(face_count(10), 10);
        assert_eq!(face_count(50), 30);
        assert_eq!(face_count(100), 60);
    }

    #[test]
    fn spawned_objects_respect_ranges() {
        let b = bounds();
        let mut rng = 42;
        for i in 0..500 {
            let obj = create_object(100, &b, RenderHandle(i), &mut rng);
            assert!(obj.size >= 20.0 && obj.size <= 40.0);
            assert!((obj.mass - obj.size.powi(3) / 1000.0).abs() < 1e-4);
            assert!(obj.restitution >= 0.7 && obj.restitution < 1.0);

            assert!(obj.position.x.abs() <= b.width * 0.25);
            assert!(obj.position.y >= b.min_y + obj.half_size());
            assert!(obj.position.y < b.min_y + b.height * 0.3);
            assert!(obj.position.z.abs() <= b.depth * 0.2);

            assert!(obj.velocity.y >= 0.0 && obj.velocity.y < 3.0);
            assert!(obj.velocity.x.abs() <= 1.5 && obj.velocity.z.abs() <= 1.5);
            assert_ne!(obj.rng_state, 0);
            assert_eq!(obj.handle, RenderHandle(i));
        }
    }

    #[test]
    fn spawned_objects_start_inside_the_box() {
        for (w, h) in [(1200.0, 800.0), (320.0, 200.0), (60.0, 40.0)] {
            let b = SimulationBounds::from_viewport(w, h).unwrap();
            let mut rng = 9;
            for i in 0..300 {
                let obj = create_object(100, &b, RenderHandle(i), &mut rng);
                let half = obj.half_size();
                let eps = 1e-3;
                assert!(obj.position.x - half >= b.min_x - eps && obj.position.x + half <= b.max_x + eps);
                assert!(obj.position.y - half >= b.min_y - eps && obj.position.y + half <= b.max_y + eps);
                assert!(obj.position.z - half >= b.min_z - eps && obj.position.z + half <= b.max_z + eps);
            }
        }
    }

    #[test]
    fn zero_visual_complexity_gives_minimum_size() {
        let mut rng = 7;
        let obj = create_object(0, &bounds(), RenderHandle(0), &mut rng);
        assert_eq!(obj.size, 20.0);
        assert_eq!(obj.face_count, 10);
    }
}
