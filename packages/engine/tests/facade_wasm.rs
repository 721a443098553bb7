#![cfg(target_arch = "wasm32")]

use stress_engine::Simulation;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn facade_runs_a_short_test() {
    let mut sim = Simulation::new(800.0, 600.0).unwrap();
    sim.begin_run(45, 60, 50);
    while !sim.is_running() {
        sim.spawn_batch();
    }
    assert_eq!(sim.object_count(), 45);

    let mut t = 0.0;
    for _ in 0..40 {
        assert!(sim.tick(t));
        t += 16.0;
    }
    assert_eq!(sim.extract_transforms(), 45 * sim.transform_stride());
    assert!(sim.css_transform(0).is_some());
    assert!(sim.css_transform(45).is_none());

    let results = sim.stop(t).unwrap();
    assert!(results.to_json_js().contains("\"objectCount\":45"));
    assert!(!sim.is_running());
}

#[wasm_bindgen_test]
fn facade_rejects_bad_config() {
    let mut sim = Simulation::new(800.0, 600.0).unwrap();
    assert!(sim.load_config(String::from("{ \"damping\": -1 }")).is_err());
    assert!(sim.resize(0.0, 600.0).is_err());
}
