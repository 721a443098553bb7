use stress_engine::physics::{integrate, resolve_boundaries};
use stress_engine::{PhysicsConfig, PhysicsObject, SimulationBounds, Vec3};

/// Heights above the floor at the top of each bounce
fn apex_heights(obj: &mut PhysicsObject, bounds: &SimulationBounds, config: &PhysicsConfig) -> Vec<f32> {
    let resting_y = bounds.floor_y() - obj.half_size();
    let mut apexes = Vec::new();
    let mut prev_vy = obj.velocity.y;

    for frame in 0..3000 {
        integrate(obj, 1.0, 0, config);
        resolve_boundaries(obj, bounds, config, 1.0, frame as f64 * 16.0);

        // Rising (-Y) turns into falling (+Y)
        if prev_vy < 0.0 && obj.velocity.y >= 0.0 {
            apexes.push(resting_y - obj.position.y);
        }
        prev_vy = obj.velocity.y;
    }
    apexes
}

#[test]
fn bounce_peaks_strictly_decrease() {
    let bounds = SimulationBounds::from_viewport(800.0, 600.0).unwrap();
    let config = PhysicsConfig::default();
    let mut obj = PhysicsObject::new(Vec3::new(0.0, -250.0, 0.0), 30.0).with_restitution(0.9);

    let apexes: Vec<f32> = apex_heights(&mut obj, &bounds, &config)
        .into_iter()
        .filter(|&h| h > 1.0)
        .collect();

    assert!(apexes.len() >= 3, "expected several visible bounces, got {apexes:?}");
    for pair in apexes.windows(2) {
        assert!(pair[1] < pair[0], "peaks not decreasing: {apexes:?}");
    }
}

#[test]
fn dropped_object_comes_to_rest() {
    let bounds = SimulationBounds::from_viewport(800.0, 600.0).unwrap();
    let config = PhysicsConfig::default();
    let mut obj = PhysicsObject::new(Vec3::new(0.0, 0.0, 0.0), 20.0).with_restitution(0.9);
    apex_heights(&mut obj, &bounds, &config);

    // Ends in the floor micro-bounce: rebound of 0.63 * 0.294 / (1 + 0.98 * 0.63) ~= 0.115
    assert!((obj.position.y - (bounds.floor_y() - obj.half_size())).abs() < 1e-3);
    assert!(obj.velocity.y.abs() < 0.15);
}
