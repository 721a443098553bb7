use crate::domain::bounds::SimulationBounds;
use crate::domain::config::PhysicsConfig;
use crate::domain::object::PhysicsObject;

use super::types::BoundaryContacts;

/// Minimum downward speed that still counts as a bounce
const BOUNCE_SPEED: f32 = 0.1;
/// Spin picked up when glancing off a side wall
const WALL_SPIN: f32 = 0.1;
/// Spin picked up when bouncing off the floor
const FLOOR_SPIN: f32 = 0.2;
/// Extra friction factor while resting
const REST_FRICTION: f32 = 0.95;
/// Spin decay while resting (x, y, z)
const REST_SPIN_DECAY: (f32, f32, f32) = (0.95, 0.98, 0.95);

/// Push an object back inside the box and reflect its velocity.
///
/// Axes are handled independently in the order X, floor, ceiling, Z.
/// A corner hit applies both corrections in sequence.
pub fn resolve_boundaries(
    obj: &mut PhysicsObject,
    bounds: &SimulationBounds,
    config: &PhysicsConfig,
    dt: f32,
    now_ms: f64,
) -> BoundaryContacts {
    let mut contacts = BoundaryContacts::default();
    let half = obj.half_size();

    // X walls
    if obj.position.x - half < bounds.min_x {
        obj.position.x = bounds.min_x + half;
        obj.velocity.x = obj.velocity.x.abs() * obj.restitution;
        obj.rotation_velocity.z -= obj.velocity.y * WALL_SPIN * dt;
        contacts.walls += 1;
    } else if obj.position.x + half > bounds.max_x {
        obj.position.x = bounds.max_x - half;
        obj.velocity.x = -obj.velocity.x.abs() * obj.restitution;
        obj.rotation_velocity.z += obj.velocity.y * WALL_SPIN * dt;
        contacts.walls += 1;
    }

    // Floor
    if obj.position.y + half > bounds.max_y {
        obj.position.y = bounds.max_y - half;

        if obj.velocity.y > BOUNCE_SPEED {
            obj.last_bounce_ms = now_ms;
            obj.velocity.y = -obj.velocity.y.abs() * obj.restitution * config.floor_restitution;

            obj.rotation_velocity.x += obj.velocity.z * FLOOR_SPIN * dt;
            obj.rotation_velocity.z -= obj.velocity.x * FLOOR_SPIN * dt;

            obj.velocity.x *= config.friction;
            obj.velocity.z *= config.friction;
            contacts.floor_bounces += 1;
        } else {
            // Resting: kill vertical motion, grip harder, let the spin die out
            obj.velocity.y = 0.0;
            obj.velocity.x *= config.friction * REST_FRICTION;
            obj.velocity.z *= config.friction * REST_FRICTION;
            obj.rotation_velocity = obj
                .rotation_velocity
                .scale(REST_SPIN_DECAY.0, REST_SPIN_DECAY.1, REST_SPIN_DECAY.2);
            contacts.floor_rests += 1;
        }
    }

    // Ceiling: plain reflection, no friction or spin
    if obj.position.y - half < bounds.min_y {
        obj.position.y = bounds.min_y + half;
        obj.velocity.y = obj.velocity.y.abs() * obj.restitution;
        contacts.ceiling += 1;
    }

    // Z walls
    if obj.position.z - half < bounds.min_z {
        obj.position.z = bounds.min_z + half;
        obj.velocity.z = obj.velocity.z.abs() * obj.restitution;
        obj.rotation_velocity.x += obj.velocity.y * WALL_SPIN * dt;
        contacts.walls += 1;
    } else if obj.position.z + half > bounds.max_z {
        obj.position.z = bounds.max_z - half;
        obj.velocity.z = -obj.velocity.z.abs() * obj.restitution;
        obj.rotation_velocity.x -= obj.velocity.y * WALL_SPIN * dt;
        contacts.walls += 1;
    }

    contacts
}

/// Clamp position inside the box without touching velocity.
/// Returns true if the object had to be moved.
pub fn contain(obj: &mut PhysicsObject, bounds: &SimulationBounds) -> bool {
    let half = obj.half_size();
    let before = obj.position;

    // max-then-min rather than clamp(): an object wider than the box must not panic
    obj.position.x = obj.position.x.max(bounds.min_x + half).min(bounds.max_x - half);
    obj.position.y = obj.position.y.max(bounds.min_y + half).min(bounds.max_y - half);
    obj.position.z = obj.position.z.max(bounds.min_z + half).min(bounds.max_z - half);

    obj.position != before
}
