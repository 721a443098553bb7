use crate::core::utils::random::DEFAULT_SEED;
use crate::domain::bounds::SimulationBounds;
use crate::domain::config::{PhysicsConfig, RunSettings};

use super::fps::FpsTracker;
use super::perf_stats::PerfStats;
use super::{RunState, SimulationCore};

pub(super) fn create_simulation_core(
    width: f32,
    height: f32,
    config: PhysicsConfig,
) -> Result<SimulationCore, String> {
    let bounds = SimulationBounds::from_viewport(width, height)?;

    Ok(SimulationCore {
        config,
        bounds,
        settings: RunSettings::default(),
        objects: Vec::new(),
        state: RunState::Idle,
        seed: DEFAULT_SEED,
        rng_state: DEFAULT_SEED,
        frame: 0,
        last_frame_ms: None,
        run_start_ms: None,
        last_timestamp_ms: 0.0,
        fps: FpsTracker::new(),
        score: 0,
        last_results: None,
        transforms: Vec::new(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
