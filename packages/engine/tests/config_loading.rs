use stress_engine::{PhysicsConfig, RunSettings, SimulationCore};

#[test]
fn partial_config_overrides_only_named_keys() {
    let mut sim = SimulationCore::new(1024.0, 768.0).unwrap();
    sim.load_config_json(r#"{ "gravity": 0.45, "maximumVelocity": 20 }"#).unwrap();

    let config = sim.config();
    assert_eq!(config.gravity, 0.45);
    assert_eq!(config.maximum_velocity, 20.0);
    assert_eq!(config.friction, PhysicsConfig::default().friction);
}

#[test]
fn rejected_config_leaves_current_one_in_place() {
    let mut sim = SimulationCore::new(1024.0, 768.0).unwrap();
    sim.load_config_json(r#"{ "gravity": 0.5 }"#).unwrap();

    assert!(sim.load_config_json("not json").is_err());
    assert!(sim.load_config_json(r#"{ "maximumVelocity": 0 }"#).is_err());
    assert!(sim.load_config_json(r#"{ "collisionDamping": 1.5 }"#).is_err());
    assert_eq!(sim.config().gravity, 0.5);
}

#[test]
fn typed_config_is_validated_before_use() {
    let mut sim = SimulationCore::new(1024.0, 768.0).unwrap();
    let heavy = PhysicsConfig { gravity: 0.8, turbulence: 0.05, ..PhysicsConfig::default() };
    sim.set_config(heavy).unwrap();
    assert_eq!(*sim.config(), heavy);

    let broken = PhysicsConfig { friction: f32::INFINITY, ..PhysicsConfig::default() };
    assert!(sim.set_config(broken).is_err());
    assert_eq!(*sim.config(), heavy);
}

#[test]
fn invalid_config_is_refused_at_construction() {
    let config = PhysicsConfig { damping: 0.0, ..PhysicsConfig::default() };
    assert!(SimulationCore::with_config(800.0, 600.0, config).is_err());
    assert!(SimulationCore::new(f32::NAN, 600.0).is_err());
}

#[test]
fn run_settings_from_json_clamps_sliders() {
    let settings = RunSettings::from_json(r#"{ "objectCount": 750, "physicsComplexity": 250 }"#).unwrap();
    assert_eq!(settings.object_count, 750);
    assert_eq!(settings.physics_complexity, 100);
    assert_eq!(settings.visual_complexity, RunSettings::default().visual_complexity);
}
