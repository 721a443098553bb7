#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::bounds::SimulationBounds;
use crate::domain::config::PhysicsConfig;
use crate::domain::object::PhysicsObject;
use crate::systems::physics::{
    collisions_enabled, contain, integrate, normalize_delta, resolve_boundaries, resolve_collisions,
    BoundaryContacts,
};

use super::{PerfTimer, SimulationCore};

pub(super) fn step_physics(sim: &mut SimulationCore, delta_ms: f64, now_ms: f64) {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let step_start = PerfTimer::start_if(perf_on);

    let dt = normalize_delta(delta_ms);
    if dt > 0.0 {
        let complexity = sim.settings.physics_complexity;

        // === INTEGRATE + BOUNDARIES (independent per object) ===
        let t0 = PerfTimer::start_if(perf_on);
        let contacts = integrate_all(&mut sim.objects, dt, complexity, &sim.config, &sim.bounds, now_ms);
        if let Some(t0) = t0 {
            sim.perf_stats.integrate_ms = t0.elapsed_ms();
            sim.perf_stats.objects_integrated = sim.objects.len() as u32;
            sim.perf_stats.add_contacts(contacts);
        }

        // === PAIRWISE COLLISIONS ===
        if collisions_enabled(complexity, sim.objects.len()) {
            let t1 = PerfTimer::start_if(perf_on);
            let stats = resolve_collisions(&mut sim.objects, &sim.config);

            // Separation may have pushed someone through a wall
            let mut contained = 0u32;
            for obj in sim.objects.iter_mut() {
                if contain(obj, &sim.bounds) {
                    contained += 1;
                }
            }

            if let Some(t1) = t1 {
                sim.perf_stats.collision_ms = t1.elapsed_ms();
                sim.perf_stats.collisions_enabled = true;
                sim.perf_stats.add_collisions(stats);
                sim.perf_stats.contained = contained;
            }
        }
    }

    if let Some(start) = step_start {
        sim.perf_stats.step_ms = start.elapsed_ms();
    }
}

/// Integrate every object and resolve it against the box.
/// Runs on the Rayon pool when the `parallel` feature is on.
fn integrate_all(
    objects: &mut [PhysicsObject],
    dt: f32,
    complexity: u8,
    config: &PhysicsConfig,
    bounds: &SimulationBounds,
    now_ms: f64,
) -> BoundaryContacts {
    let advance = |obj: &mut PhysicsObject| {
        integrate(obj, dt, complexity, config);
        resolve_boundaries(obj, bounds, config, dt, now_ms)
    };

    #[cfg(feature = "parallel")]
    {
        objects
            .par_iter_mut()
            .map(advance)
            .reduce(BoundaryContacts::default, BoundaryContacts::merge)
    }
    #[cfg(not(feature = "parallel"))]
    {
        objects
            .iter_mut()
            .map(advance)
            .fold(BoundaryContacts::default(), BoundaryContacts::merge)
    }
}
