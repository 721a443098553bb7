use super::lifecycle::finish;
use super::fps::compute_score;
use super::{RunState, SimulationCore, TickOutcome};

/// A run auto-stops once this much time has passed since its first frame (ms)
pub const RUN_DURATION_MS: f64 = 30_000.0;

pub(super) fn tick(sim: &mut SimulationCore, timestamp_ms: f64) -> TickOutcome {
    if sim.state != RunState::Running {
        return TickOutcome::NotRunning;
    }

    // First frame: anchor the run clock and the FPS window, no physics yet
    let Some(last) = sim.last_frame_ms else {
        let start = if timestamp_ms.is_finite() { timestamp_ms } else { 0.0 };
        sim.last_frame_ms = Some(start);
        sim.run_start_ms = Some(start);
        sim.last_timestamp_ms = start;
        sim.fps.reset(start);
        return TickOutcome::Primed;
    };

    // Bad or backwards clock values become a zero-length frame
    let now = if timestamp_ms.is_finite() { timestamp_ms.max(last) } else { last };
    let delta_ms = now - last;
    sim.last_frame_ms = Some(now);
    sim.last_timestamp_ms = now;

    if sim.fps.record_frame(now).is_some() {
        let avg = sim.fps.average();
        sim.score = compute_score(
            avg,
            sim.settings.object_count,
            sim.settings.physics_complexity,
            sim.settings.visual_complexity,
        );
    }

    sim.step_physics(delta_ms, now);
    sim.frame += 1;

    let started = sim.run_start_ms.unwrap_or(now);
    if now - started >= RUN_DURATION_MS {
        return TickOutcome::Finished(finish(sim, now));
    }
    TickOutcome::Advanced
}

pub(super) fn elapsed_seconds(sim: &SimulationCore, timestamp_ms: f64) -> u32 {
    match sim.run_start_ms {
        Some(start) if timestamp_ms.is_finite() => ((timestamp_ms - start).max(0.0) / 1000.0).floor() as u32,
        _ => 0,
    }
}
