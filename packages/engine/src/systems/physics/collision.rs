use crate::core::Vec3;
use crate::domain::config::PhysicsConfig;
use crate::domain::object::PhysicsObject;

use super::types::CollisionStats;
use super::{COLLISION_OBJECT_LIMIT, COLLISION_THRESHOLD};

/// Centres closer than this (squared) have no usable normal
const DEGENERATE_DIST_SQ: f32 = 1e-6;
/// Scale of the simplified angular impulse
const ANGULAR_FACTOR: f32 = 0.05;

/// What happened to a single pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairOutcome {
    /// Spheres don't overlap
    Apart,
    /// Spheres overlapped and were pushed apart; `approaching` pairs also got an impulse
    Overlap { approaching: bool, degenerate: bool },
}

/// The O(n²) sweep is only affordable for lighter loads
#[inline]
pub fn collisions_enabled(complexity: u8, object_count: usize) -> bool {
    complexity > COLLISION_THRESHOLD && object_count < COLLISION_OBJECT_LIMIT
}

/// Resolve one pair as two spheres of diameter `size`.
///
/// The normal points from `a` to `b`. Separation is split by inverse mass.
/// Only approaching pairs (`(vb - va)·n < 0`) receive an impulse.
pub fn resolve_pair(a: &mut PhysicsObject, b: &mut PhysicsObject, config: &PhysicsConfig) -> PairOutcome {
    let delta = b.position - a.position;
    let dist_sq = delta.length_squared();
    let min_dist = (a.size + b.size) / 2.0;

    if dist_sq >= min_dist * min_dist {
        return PairOutcome::Apart;
    }

    // Coincident centres: pick +X so the pair still separates and nothing turns NaN
    let degenerate = dist_sq <= DEGENERATE_DIST_SQ;
    let (normal, dist) = if degenerate {
        (Vec3::X, 0.0)
    } else {
        let dist = dist_sq.sqrt();
        (delta * (1.0 / dist), dist)
    };

    let overlap = min_dist - dist;
    let total_mass = a.mass + b.mass;
    a.position -= normal * (overlap * b.mass / total_mass);
    b.position += normal * (overlap * a.mass / total_mass);

    let v_dot_n = (b.velocity - a.velocity).dot(normal);
    if v_dot_n >= 0.0 {
        return PairOutcome::Overlap { approaching: false, degenerate };
    }

    let spin = normal.cross(a.velocity - b.velocity) * ANGULAR_FACTOR;

    let elasticity = (a.restitution + b.restitution) / 2.0;
    let impulse = -(1.0 + elasticity) * v_dot_n / total_mass;
    a.velocity -= normal * (impulse * b.mass * config.collision_damping);
    b.velocity += normal * (impulse * a.mass * config.collision_damping);

    a.rotation_velocity += spin;
    b.rotation_velocity -= spin;

    PairOutcome::Overlap { approaching: true, degenerate }
}

/// Single pass over every unordered pair, in list order.
/// Deep clusters settle over several ticks; there is no iteration to convergence.
pub fn resolve_collisions(objects: &mut [PhysicsObject], config: &PhysicsConfig) -> CollisionStats {
    let mut stats = CollisionStats::default();
    let n = objects.len();

    for j in 1..n {
        let (head, tail) = objects.split_at_mut(j);
        let b = &mut tail[0];
        for a in head.iter_mut() {
            stats.pairs_tested += 1;
            if let PairOutcome::Overlap { approaching, degenerate } = resolve_pair(a, b, config) {
                stats.overlaps += 1;
                if approaching {
                    stats.impulses += 1;
                }
                if degenerate {
                    stats.degenerate += 1;
                }
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(restitution: f32) -> (PhysicsObject, PhysicsObject) {
        let a = PhysicsObject::new(Vec3::new(-9.0, 0.0, 0.0), 20.0)
            .with_velocity(Vec3::new(2.0, 0.0, 0.0))
            .with_restitution(restitution);
        let b = PhysicsObject::new(Vec3::new(9.0, 0.0, 0.0), 20.0)
            .with_velocity(Vec3::new(-2.0, 0.0, 0.0))
            .with_restitution(restitution);
        (a, b)
    }

    #[test]
    fn gate_requires_complexity_and_small_load() {
        assert!(!collisions_enabled(40, 10));
        assert!(collisions_enabled(41, 10));
        assert!(collisions_enabled(100, 499));
        assert!(!collisions_enabled(100, 500));
    }

    #[test]
    fn head_on_equal_masses_separate_with_damped_speed() {
        let config = PhysicsConfig::default();
        let r = 0.9;
        let (mut a, mut b) = pair(r);
        let approach = (a.velocity - b.velocity).x;

        let outcome = resolve_pair(&mut a, &mut b, &config);
        assert_eq!(outcome, PairOutcome::Overlap { approaching: true, degenerate: false });

        let separation = (b.velocity - a.velocity).x;
        let expected = approach * (config.collision_damping * (1.0 + r) - 1.0);
        assert!(separation > 0.0);
        assert!((separation - expected).abs() < 1e-4);
        // Never more lively than restitution * damping allows
        assert!(separation <= approach * r * config.collision_damping);

        // Momentum conserved
        let p = a.velocity * a.mass + b.velocity * b.mass;
        assert!(p.length() < 1e-4);
    }

    #[test]
    fn overlap_split_by_inverse_mass() {
        let config = PhysicsConfig::default();
        let mut light = PhysicsObject::new(Vec3::new(0.0, 0.0, 0.0), 20.0);
        let mut heavy = PhysicsObject::new(Vec3::new(20.0, 0.0, 0.0), 40.0);
        // min_dist = 30, overlap = 10
        resolve_pair(&mut light, &mut heavy, &config);

        let total = light.mass + heavy.mass;
        assert!((light.position.x - (-10.0 * heavy.mass / total)).abs() < 1e-4);
        assert!((heavy.position.x - (20.0 + 10.0 * light.mass / total)).abs() < 1e-4);
        assert!(heavy.position.x - 20.0 < -light.position.x);
    }

    #[test]
    fn separating_pair_gets_no_impulse() {
        let config = PhysicsConfig::default();
        let (mut a, mut b) = pair(0.8);
        a.velocity = Vec3::new(-1.0, 0.0, 0.0);
        b.velocity = Vec3::new(1.0, 0.0, 0.0);

        let outcome = resolve_pair(&mut a, &mut b, &config);
        assert_eq!(outcome, PairOutcome::Overlap { approaching: false, degenerate: false });
        assert_eq!(a.velocity, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(a.rotation_velocity, Vec3::zero());
    }

    #[test]
    fn glancing_hit_spins_both_in_opposite_directions() {
        let config = PhysicsConfig::default();
        let mut a = PhysicsObject::new(Vec3::new(0.0, 0.0, 0.0), 20.0).with_velocity(Vec3::new(1.0, 1.0, 0.0));
        let mut b = PhysicsObject::new(Vec3::new(15.0, 0.0, 0.0), 20.0);
        resolve_pair(&mut a, &mut b, &config);

        assert!(a.rotation_velocity.z.abs() > 0.0);
        assert_eq!(a.rotation_velocity, -b.rotation_velocity);
    }

    #[test]
    fn coincident_centres_do_not_produce_nan() {
        let config = PhysicsConfig::default();
        let mut a = PhysicsObject::new(Vec3::new(5.0, 5.0, 5.0), 20.0);
        let mut b = PhysicsObject::new(Vec3::new(5.0, 5.0, 5.0), 20.0);

        let outcome = resolve_pair(&mut a, &mut b, &config);
        assert_eq!(outcome, PairOutcome::Overlap { approaching: false, degenerate: true });
        assert!(a.position.is_finite() && b.position.is_finite());
        assert!(a.velocity.is_finite() && b.velocity.is_finite());
        assert!((b.position.x - a.position.x - 20.0).abs() < 1e-4);
    }

    #[test]
    fn sweep_visits_each_pair_once() {
        let config = PhysicsConfig::default();
        let mut objects: Vec<PhysicsObject> = (0..5)
            .map(|i| PhysicsObject::new(Vec3::new(i as f32 * 100.0, 0.0, 0.0), 20.0))
            .collect();
        let stats = resolve_collisions(&mut objects, &config);
        assert_eq!(stats.pairs_tested, 10);
        assert_eq!(stats.overlaps, 0);
    }
}
