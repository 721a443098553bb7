use crate::domain::config::RunSettings;
use crate::domain::object::RenderHandle;
use crate::systems::factory::create_object;

use super::results::RunResults;
use super::{RunState, SimulationCore};

/// Objects created per `spawn_batch` call; the browser yields between batches
pub const SPAWN_BATCH_SIZE: usize = 20;

pub(super) fn begin_run(sim: &mut SimulationCore, settings: RunSettings) {
    // No up-front reserve: the count comes straight from the host
    sim.objects.clear();
    sim.transforms.clear();

    sim.settings = settings;
    sim.rng_state = sim.seed;
    sim.frame = 0;
    sim.last_frame_ms = None;
    sim.run_start_ms = None;
    sim.last_timestamp_ms = 0.0;
    sim.fps.reset(0.0);
    sim.score = 0;
    sim.last_results = None;
    sim.perf_stats.reset();

    console_log!(
        "Starting stress test: {} objects, physics {}%, visual {}%",
        settings.object_count,
        settings.physics_complexity,
        settings.visual_complexity
    );

    sim.state = RunState::Loading;
    if settings.object_count == 0 {
        mark_ready(sim);
    }
}

pub(super) fn spawn_batch(sim: &mut SimulationCore) -> usize {
    if sim.state != RunState::Loading {
        return sim.objects.len();
    }

    let target = sim.settings.object_count as usize;
    let start = sim.objects.len();
    let end = (start + SPAWN_BATCH_SIZE).min(target);

    for i in start..end {
        let obj = create_object(
            sim.settings.visual_complexity,
            &sim.bounds,
            RenderHandle(i as u32),
            &mut sim.rng_state,
        );
        sim.objects.push(obj);
    }

    if sim.objects.len() >= target {
        mark_ready(sim);
    }
    sim.objects.len()
}

pub(super) fn start(sim: &mut SimulationCore, settings: RunSettings) {
    begin_run(sim, settings);
    while sim.state == RunState::Loading {
        spawn_batch(sim);
    }
}

/// Stop immediately. A run cancelled while loading never produced a frame,
/// so it goes back to idle without results; objects created so far stay.
pub(super) fn stop(sim: &mut SimulationCore, timestamp_ms: f64) -> Option<RunResults> {
    match sim.state {
        RunState::Running => Some(finish(sim, timestamp_ms)),
        RunState::Loading => {
            sim.state = RunState::Idle;
            console_log!("Stress test cancelled after {} objects", sim.objects.len());
            None
        }
        RunState::Idle | RunState::Finished => None,
    }
}

pub(super) fn reset(sim: &mut SimulationCore) {
    sim.objects.clear();
    sim.transforms.clear();
    sim.state = RunState::Idle;
}

/// Freeze the run and build the results summary
pub(super) fn finish(sim: &mut SimulationCore, timestamp_ms: f64) -> RunResults {
    sim.state = RunState::Finished;

    let results = RunResults {
        average_fps: sim.fps.average(),
        min_fps: sim.fps.minimum(),
        object_count: sim.objects.len() as u32,
        elapsed_seconds: super::step::elapsed_seconds(sim, timestamp_ms),
        score: sim.score,
    };
    sim.last_results = Some(results);

    console_log!(
        "Stress test finished: score {}, avg {:.1} fps, min {:.1} fps, {}s",
        results.score,
        results.average_fps,
        results.min_fps,
        results.elapsed_seconds
    );
    results
}

fn mark_ready(sim: &mut SimulationCore) {
    sim.state = RunState::Running;
    console_log!("{} objects ready", sim.objects.len());
}
