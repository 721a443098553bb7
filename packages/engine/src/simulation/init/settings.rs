use crate::core::utils::random::seed_or_default;
use crate::domain::bounds::SimulationBounds;
use crate::domain::config::PhysicsConfig;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn set_config(sim: &mut SimulationCore, config: PhysicsConfig) -> Result<(), String> {
    config.validate()?;
    sim.config = config;
    Ok(())
}

pub(super) fn load_config_json(sim: &mut SimulationCore, json: &str) -> Result<(), String> {
    let config = PhysicsConfig::from_json(json)?;
    set_config(sim, config)?;
    console_log!("Physics config loaded: {}", config.to_json());
    Ok(())
}

pub(super) fn resize(sim: &mut SimulationCore, width: f32, height: f32) -> Result<(), String> {
    sim.bounds = SimulationBounds::from_viewport(width, height)?;
    console_log!("Bounds resized to {}x{}", width, height);
    Ok(())
}

pub(super) fn set_seed(sim: &mut SimulationCore, seed: u32) {
    sim.seed = seed_or_default(seed);
}

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}
