use serde::{Deserialize, Serialize};

/// Highest value accepted for either complexity dial
pub const MAX_COMPLEXITY: u8 = 100;

/// Physics tuning constants, fixed for the duration of a run.
///
/// Units are "pixels per normalized frame" where one frame is 16ms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicsConfig {
    /// Added to vertical velocity every frame (+Y is down)
    pub gravity: f32,
    /// Per-frame velocity retention, applied as `damping^dt`
    pub damping: f32,
    /// Horizontal velocity retention on floor contact
    pub friction: f32,
    /// Not consulted by the integrator; carried for hosts that display it
    pub min_velocity: f32,
    /// Softening applied to pairwise impulses
    pub collision_damping: f32,
    /// Speed ceiling enforced after every integration
    pub maximum_velocity: f32,
    /// Amplitude of the random velocity jitter
    pub turbulence: f32,
    /// Floor bounciness, compounds with per-object restitution
    pub floor_restitution: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.3,
            damping: 0.98,
            friction: 0.97,
            min_velocity: 0.01,
            collision_damping: 0.7,
            maximum_velocity: 15.0,
            turbulence: 0.01,
            floor_restitution: 0.7,
        }
    }
}

impl PhysicsConfig {
    /// Parse a (possibly partial) JSON config; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: PhysicsConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("gravity", self.gravity),
            ("damping", self.damping),
            ("friction", self.friction),
            ("minVelocity", self.min_velocity),
            ("collisionDamping", self.collision_damping),
            ("maximumVelocity", self.maximum_velocity),
            ("turbulence", self.turbulence),
            ("floorRestitution", self.floor_restitution),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(format!("{name} must be finite, got {value}"));
            }
        }

        if self.maximum_velocity <= 0.0 {
            return Err(format!("maximumVelocity must be positive, got {}", self.maximum_velocity));
        }

        for (name, value) in [
            ("damping", self.damping),
            ("friction", self.friction),
            ("collisionDamping", self.collision_damping),
            ("floorRestitution", self.floor_restitution),
        ] {
            if value <= 0.0 || value > 1.0 {
                return Err(format!("{name} must be in (0, 1], got {value}"));
            }
        }

        Ok(())
    }
}

/// Per-run parameters chosen by the host (the three sliders)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunSettings {
    pub object_count: u32,
    /// 0-100: enables turbulence (>20) and pairwise collisions (>40)
    pub physics_complexity: u8,
    /// 0-100: object size spread and face count only
    pub visual_complexity: u8,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            object_count: 200,
            physics_complexity: 50,
            visual_complexity: 50,
        }
    }
}

impl RunSettings {
    /// Complexities above 100 are clamped, as the sliders would.
    pub fn new(object_count: u32, physics_complexity: u8, visual_complexity: u8) -> Self {
        Self {
            object_count,
            physics_complexity: physics_complexity.min(MAX_COMPLEXITY),
            visual_complexity: visual_complexity.min(MAX_COMPLEXITY),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let raw: RunSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Ok(Self::new(raw.object_count, raw.physics_complexity, raw.visual_complexity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PhysicsConfig::from_json(r#"{ "gravity": 0.5, "floorRestitution": 0.9 }"#).unwrap();
        assert_eq!(config.gravity, 0.5);
        assert_eq!(config.floor_restitution, 0.9);
        assert_eq!(config.damping, PhysicsConfig::default().damping);
        assert_eq!(config.maximum_velocity, 15.0);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(PhysicsConfig::from_json(r#"{ "damping": 1.5 }"#).is_err());
        assert!(PhysicsConfig::from_json(r#"{ "maximumVelocity": 0 }"#).is_err());
        assert!(PhysicsConfig::from_json(r#"{ "friction": 0 }"#).is_err());
        assert!(PhysicsConfig::from_json("not json").is_err());
    }

    #[test]
    fn config_json_round_trips_through_camel_case() {
        let json = PhysicsConfig::default().to_json();
        assert!(json.contains("\"collisionDamping\""));
        assert_eq!(PhysicsConfig::from_json(&json).unwrap(), PhysicsConfig::default());
    }

    #[test]
    fn settings_clamp_complexity() {
        let settings = RunSettings::new(10, 250, 101);
        assert_eq!(settings.physics_complexity, 100);
        assert_eq!(settings.visual_complexity, 100);

        let parsed = RunSettings::from_json(r#"{ "objectCount": 75, "physicsComplexity": 200 }"#).unwrap();
        assert_eq!(parsed.object_count, 75);
        assert_eq!(parsed.physics_complexity, 100);
        assert_eq!(parsed.visual_complexity, 50);
    }
}
