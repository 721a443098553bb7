//! Stress Engine - physics core of the 3D browser stress test, in WASM
//!
//! Spawns a configurable number of objects, simulates gravity, wall/floor
//! bounce and pairwise collisions every animation frame, and turns the
//! observed frame rate into a score.
//!
//! Architecture:
//! - core/       - Vec3, randomness, console logging
//! - domain/     - config, bounds, physics objects
//! - systems/    - object factory and the physics passes
//! - simulation/ - per-frame driver, scoring, render extraction, JS facade

// Logging macro must be defined before the modules that use it
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use systems::physics;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Stress engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::Vec3;
pub use domain::bounds::SimulationBounds;
pub use domain::config::{PhysicsConfig, RunSettings};
pub use domain::object::{PhysicsObject, RenderHandle};
pub use simulation::{
    PerfStats, Renderer, RunResults, RunState, Simulation, SimulationCore, TickOutcome, Transform,
};
