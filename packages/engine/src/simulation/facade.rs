use wasm_bindgen::prelude::*;

use crate::domain::config::RunSettings;

use super::perf_stats::PerfStats;
use super::results::RunResults;
use super::{SimulationCore, TickOutcome, TRANSFORM_STRIDE};

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create an idle simulation sized to the viewport
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<Simulation, JsValue> {
        let core = SimulationCore::new(width, height).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn object_count(&self) -> usize { self.core.object_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> u32 { self.core.fps() }

    /// 0 = bad, 1 = medium, 2 = good
    #[wasm_bindgen(getter)]
    pub fn fps_rating(&self) -> u8 { self.core.fps_rating() as u8 }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 { self.core.score() }

    #[wasm_bindgen(getter)]
    pub fn elapsed_seconds(&self) -> u32 { self.core.elapsed_seconds() }

    /// 0 = idle, 1 = loading, 2 = running, 3 = finished
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> u8 { self.core.state() as u8 }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool { self.core.is_running() }

    /// Load physics constants from JSON (missing keys keep defaults)
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_config_json(&self) -> String {
        self.core.config().to_json()
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.core
            .resize(width, height)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === RUN API ===

    /// Clear the scene and prepare a run; follow with `spawn_batch` until it reports the full count
    pub fn begin_run(&mut self, object_count: u32, physics_complexity: u8, visual_complexity: u8) {
        self.core
            .begin_run(RunSettings::new(object_count, physics_complexity, visual_complexity));
    }

    /// Create up to 20 objects; returns the number created so far
    pub fn spawn_batch(&mut self) -> usize {
        self.core.spawn_batch()
    }

    /// Prepare a run and create every object in one go
    pub fn start(&mut self, object_count: u32, physics_complexity: u8, visual_complexity: u8) {
        self.core
            .start(RunSettings::new(object_count, physics_complexity, visual_complexity));
    }

    /// Settings as JSON (`objectCount`, `physicsComplexity`, `visualComplexity`)
    pub fn start_with_json(&mut self, json: String) -> Result<(), JsValue> {
        let settings = RunSettings::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        self.core.start(settings);
        Ok(())
    }

    /// Manual stop; returns the results if a run was in progress
    pub fn stop(&mut self, timestamp: f64) -> Option<RunResults> {
        self.core.stop(timestamp)
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Advance one frame. Returns false once the run is over
    /// (then read `last_results`).
    pub fn tick(&mut self, timestamp: f64) -> bool {
        match self.core.tick(timestamp) {
            TickOutcome::Primed | TickOutcome::Advanced => true,
            TickOutcome::NotRunning | TickOutcome::Finished(_) => false,
        }
    }

    pub fn last_results(&self) -> Option<RunResults> {
        self.core.last_results()
    }

    // === RENDER API ===

    /// Refresh the transform buffer; returns the number of floats written
    pub fn extract_transforms(&mut self) -> usize {
        self.core.extract_transforms().len()
    }

    /// Get pointer to the transform buffer (for JS rendering)
    pub fn transforms_ptr(&self) -> *const f32 {
        self.core.transforms_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.core.transforms_len()
    }

    pub fn transform_stride(&self) -> usize {
        TRANSFORM_STRIDE
    }

    /// Faces to draw for object `idx` (0 if out of range)
    pub fn face_count(&self, idx: usize) -> u32 {
        self.core.objects().get(idx).map(|o| o.face_count).unwrap_or(0)
    }

    /// CSS transform for object `idx`
    pub fn css_transform(&self, idx: usize) -> Option<String> {
        let obj = self.core.objects().get(idx)?;
        Some(self.core.transform_of(obj).to_css())
    }
}
