//! Simulation - owns the object list and drives it one frame at a time
//!
//! The host calls `tick(timestamp)` once per animation frame; nothing here
//! schedules itself. Stopping is just "don't call tick again": the last
//! computed state stays valid for rendering.
//!
//! - lifecycle/ - begin/spawn/start/stop/reset
//! - step/      - per-frame driver and the physics pass
//! - metrics/   - FPS history and score
//! - render/    - transforms for the renderer
//! - facade     - wasm-bindgen surface

use crate::domain::bounds::SimulationBounds;
use crate::domain::config::{PhysicsConfig, RunSettings};
use crate::domain::object::PhysicsObject;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "metrics/fps.rs"]
mod fps;
#[path = "results/results.rs"]
mod results;
#[path = "lifecycle/lifecycle.rs"]
mod lifecycle;
#[path = "step/step_physics.rs"]
mod step_physics;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Simulation;
pub use fps::{compute_score, FpsRating, FpsTracker, FPS_HISTORY_LEN, FPS_SAMPLE_INTERVAL_MS};
pub use lifecycle::SPAWN_BATCH_SIZE;
pub use perf_stats::PerfStats;
pub use render_extract::{Renderer, Transform, TRANSFORM_STRIDE};
pub use results::RunResults;
pub use step::RUN_DURATION_MS;

use perf_timer::PerfTimer;

/// Where the run is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum RunState {
    Idle = 0,
    /// Objects are being created in batches
    Loading = 1,
    Running = 2,
    /// Auto-stopped or stopped by the host; objects kept for display
    Finished = 3,
}

/// Result of a single `tick`
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Not running; nothing happened
    NotRunning,
    /// First frame of the run: clock anchored, no physics
    Primed,
    Advanced,
    /// The run hit its time limit on this tick
    Finished(RunResults),
}

/// The simulation state
pub struct SimulationCore {
    config: PhysicsConfig,
    bounds: SimulationBounds,
    settings: RunSettings,
    objects: Vec<PhysicsObject>,

    // Run state
    state: RunState,
    seed: u32,
    rng_state: u32,
    frame: u64,
    last_frame_ms: Option<f64>,
    run_start_ms: Option<f64>,
    last_timestamp_ms: f64,

    // Scoring
    fps: FpsTracker,
    score: u32,
    last_results: Option<RunResults>,

    // Render
    transforms: Vec<f32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create an idle simulation for a viewport of the given size
    pub fn new(width: f32, height: f32) -> Result<Self, String> {
        init::create_simulation_core(width, height, PhysicsConfig::default())
    }

    pub fn with_config(width: f32, height: f32, config: PhysicsConfig) -> Result<Self, String> {
        config.validate()?;
        init::create_simulation_core(width, height, config)
    }

    pub fn config(&self) -> &PhysicsConfig { &self.config }

    pub fn bounds(&self) -> &SimulationBounds { &self.bounds }

    pub fn settings(&self) -> RunSettings { self.settings }

    pub fn state(&self) -> RunState { self.state }

    pub fn is_running(&self) -> bool { self.state == RunState::Running }

    pub fn objects(&self) -> &[PhysicsObject] { &self.objects }

    pub fn object_count(&self) -> usize { self.objects.len() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn fps(&self) -> u32 { self.fps.current() }

    pub fn fps_rating(&self) -> FpsRating { self.fps.rating() }

    pub fn score(&self) -> u32 { self.score }

    pub fn last_results(&self) -> Option<RunResults> { self.last_results }

    /// Whole seconds since the run clock started (first tick)
    pub fn elapsed_seconds(&self) -> u32 {
        step::elapsed_seconds(self, self.last_timestamp_ms)
    }

    /// Replace the physics constants (validated)
    pub fn set_config(&mut self, config: PhysicsConfig) -> Result<(), String> {
        settings::set_config(self, config)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_config_json(self, json)
    }

    /// Recompute the box after a viewport resize
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), String> {
        settings::resize(self, width, height)
    }

    /// Seed for the next run's object creation
    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === LIFECYCLE ===

    /// Clear the scene and prepare to create `settings.object_count` objects
    pub fn begin_run(&mut self, settings: RunSettings) {
        lifecycle::begin_run(self, settings);
    }

    /// Create the next batch of objects; returns how many exist so far
    pub fn spawn_batch(&mut self) -> usize {
        lifecycle::spawn_batch(self)
    }

    /// `begin_run` plus synchronous creation of every object
    pub fn start(&mut self, settings: RunSettings) {
        lifecycle::start(self, settings);
    }

    /// Stop now. Results only for a run that was running;
    /// a run still loading is cancelled back to idle.
    pub fn stop(&mut self, timestamp_ms: f64) -> Option<RunResults> {
        lifecycle::stop(self, timestamp_ms)
    }

    /// Destroy every object and go back to idle
    pub fn reset(&mut self) {
        lifecycle::reset(self);
    }

    // === FRAME ===

    /// Advance one animation frame
    pub fn tick(&mut self, timestamp_ms: f64) -> TickOutcome {
        step::tick(self, timestamp_ms)
    }

    /// Physics for one frame of `delta_ms`, independent of run state and clock
    pub fn step_physics(&mut self, delta_ms: f64, timestamp_ms: f64) {
        step_physics::step_physics(self, delta_ms, timestamp_ms);
    }

    // === RENDER ===

    /// Place every object through the renderer
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        render_extract::render(self, renderer);
    }

    /// Screen-space transform for one object
    pub fn transform_of(&self, obj: &PhysicsObject) -> Transform {
        render_extract::transform_of(self, obj)
    }

    /// Fill the flat transform buffer and return it
    pub fn extract_transforms(&mut self) -> &[f32] {
        render_extract::extract_transforms(self)
    }

    /// Get pointer to the transform buffer (for JS rendering)
    pub fn transforms_ptr(&self) -> *const f32 {
        self.transforms.as_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.transforms.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
