//! Game configuration
//!
//! Every simulation tunable lives here so the host can run modified rule
//! sets from a TOML or RON file. Defaults carry the stock arcade tuning.
//!
//! Velocities and accelerations are per-tick quantities (pixels per
//! frame), not per-second: the integrator adds velocity to position once
//! per tick regardless of elapsed time, so these values couple to the
//! display refresh rate. Durations (lifespans, timers) are milliseconds
//! and consume the per-tick delta.

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value failed validation
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },
}

/// Top-level game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield dimensions
    pub world: WorldConfig,

    /// Ship handling and survivability
    pub ship: ShipConfig,

    /// Projectile tuning and pool sizing
    pub projectile: ProjectileConfig,

    /// Asteroid field tuning
    pub asteroid: AsteroidConfig,

    /// Explosion animation timing
    pub explosion: ExplosionConfig,

    /// Session rules
    pub rules: RulesConfig,
}

impl Config for GameConfig {}

/// Playfield dimensions in pixels
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Playfield width
    pub width: f32,

    /// Playfield height
    pub height: f32,
}

/// Ship handling and survivability
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Acceleration added along the heading per tick while thrusting
    pub thrust: f32,

    /// Heading change per tick while turning, in radians.
    ///
    /// Applied as a constant per-tick delta, not scaled by elapsed
    /// time, so turning speed tracks the refresh rate.
    pub turn_speed: f32,

    /// Fraction of velocity removed every tick
    pub friction: f32,

    /// Post-spawn invincibility window in milliseconds
    pub invincibility_ms: f32,

    /// Collision radius
    pub radius: f32,

    /// Distance from ship center to the projectile spawn point
    pub muzzle_offset: f32,
}

/// Projectile tuning and pool sizing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Speed along the firing heading, per tick
    pub speed: f32,

    /// Time until an unspent projectile expires, in milliseconds
    pub lifespan_ms: f32,

    /// Hard cap on simultaneously live projectiles
    pub pool_size: usize,

    /// Collision radius
    pub radius: f32,
}

/// Asteroid field tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    /// Scale of the randomized per-axis velocity (each component is
    /// uniform in `[-speed/2, speed/2)`)
    pub speed: f32,

    /// Radius of a freshly spawned large asteroid
    pub base_radius: f32,

    /// Scale of the randomized cosmetic rotation speed, radians per tick
    pub rotation_speed: f32,

    /// Points for destroying a base-size asteroid
    pub points_large: u32,

    /// Points for destroying a half-size asteroid
    pub points_medium: u32,

    /// Points for destroying an asteroid too small to split
    pub points_small: u32,
}

/// Explosion animation timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionConfig {
    /// Number of animation frames
    pub frame_count: u32,

    /// Milliseconds each frame stays on screen
    pub frame_duration_ms: f32,
}

/// Session rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Lives at the start of a fresh game
    pub starting_lives: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            ship: ShipConfig::default(),
            projectile: ProjectileConfig::default(),
            asteroid: AsteroidConfig::default(),
            explosion: ExplosionConfig::default(),
            rules: RulesConfig::default(),
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            thrust: 0.08,
            turn_speed: 0.08,
            friction: 0.02,
            invincibility_ms: 3000.0,
            radius: 30.0,
            muzzle_offset: 49.0,
        }
    }
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: 7.0,
            lifespan_ms: 900.0,
            pool_size: 15,
            radius: 5.0,
        }
    }
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            speed: 1.5,
            base_radius: 45.0,
            rotation_speed: 0.02,
            points_large: 20,
            points_medium: 50,
            points_small: 100,
        }
    }
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            frame_count: 8,
            frame_duration_ms: 60.0,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self { starting_lives: 3 }
    }
}

impl GameConfig {
    /// Check that every tunable is usable by the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world.width <= 0.0 || self.world.height <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "world.width/height",
                reason: "playfield dimensions must be positive",
            });
        }
        if !(0.0..1.0).contains(&self.ship.friction) {
            return Err(ConfigError::Invalid {
                field: "ship.friction",
                reason: "friction must be in [0, 1)",
            });
        }
        if self.projectile.pool_size == 0 {
            return Err(ConfigError::Invalid {
                field: "projectile.pool_size",
                reason: "pool must hold at least one projectile",
            });
        }
        if self.asteroid.base_radius <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "asteroid.base_radius",
                reason: "base radius must be positive",
            });
        }
        if self.explosion.frame_count == 0 {
            return Err(ConfigError::Invalid {
                field: "explosion.frame_count",
                reason: "animation needs at least one frame",
            });
        }
        if self.rules.starting_lives <= 0 {
            return Err(ConfigError::Invalid {
                field: "rules.starting_lives",
                reason: "a game needs at least one life",
            });
        }
        Ok(())
    }

    /// Load configuration from file, falling back to defaults when the
    /// file is absent.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config from {path}: {e}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_pool() {
        let mut config = GameConfig::default();
        config.projectile.pool_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_full_friction() {
        let mut config = GameConfig::default();
        config.ship.friction = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GameConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: GameConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.projectile.pool_size, config.projectile.pool_size);
        assert_eq!(back.asteroid.points_small, config.asteroid.points_small);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let back: GameConfig = toml::from_str("[ship]\nturn_speed = 0.1\n").unwrap();
        assert_eq!(back.ship.turn_speed, 0.1);
        assert_eq!(back.rules.starting_lives, 3);
    }
}
