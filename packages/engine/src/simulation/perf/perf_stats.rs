use wasm_bindgen::prelude::*;

use crate::systems::physics::{BoundaryContacts, CollisionStats};

/// Per-tick counters, zeroed at the start of every tick while perf is enabled
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) objects_integrated: u32,
    pub(super) collisions_enabled: bool,
    pub(super) pairs_tested: u32,
    pub(super) overlaps: u32,
    pub(super) impulses: u32,
    pub(super) degenerate_pairs: u32,
    pub(super) contained: u32,
    pub(super) wall_contacts: u32,
    pub(super) floor_bounces: u32,
    pub(super) floor_rests: u32,
    pub(super) ceiling_contacts: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(super) fn add_contacts(&mut self, contacts: BoundaryContacts) {
        self.wall_contacts += contacts.walls;
        self.floor_bounces += contacts.floor_bounces;
        self.floor_rests += contacts.floor_rests;
        self.ceiling_contacts += contacts.ceiling;
    }

    pub(super) fn add_collisions(&mut self, stats: CollisionStats) {
        self.pairs_tested += stats.pairs_tested;
        self.overlaps += stats.overlaps;
        self.impulses += stats.impulses;
        self.degenerate_pairs += stats.degenerate;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn objects_integrated(&self) -> u32 { self.objects_integrated }
    #[wasm_bindgen(getter)]
    pub fn collisions_enabled(&self) -> bool { self.collisions_enabled }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn overlaps(&self) -> u32 { self.overlaps }
    #[wasm_bindgen(getter)]
    pub fn impulses(&self) -> u32 { self.impulses }
    #[wasm_bindgen(getter)]
    pub fn degenerate_pairs(&self) -> u32 { self.degenerate_pairs }
    #[wasm_bindgen(getter)]
    pub fn contained(&self) -> u32 { self.contained }
    #[wasm_bindgen(getter)]
    pub fn wall_contacts(&self) -> u32 { self.wall_contacts }
    #[wasm_bindgen(getter)]
    pub fn floor_bounces(&self) -> u32 { self.floor_bounces }
    #[wasm_bindgen(getter)]
    pub fn floor_rests(&self) -> u32 { self.floor_rests }
    #[wasm_bindgen(getter)]
    pub fn ceiling_contacts(&self) -> u32 { self.ceiling_contacts }
}
