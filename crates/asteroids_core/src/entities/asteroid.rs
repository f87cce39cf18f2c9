//! Asteroids
//!
//! Asteroids drift at the constant velocity they were born with and
//! spin for looks only. Radius determines the size tier, which drives
//! scoring, sprite selection, and whether a hit splits the rock or
//! destroys it outright.

use rand::Rng;

use crate::config::{AsteroidConfig, GameConfig};
use crate::entities::body::Body;
use crate::foundation::math::Vec2;

/// Asteroid size categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidSize {
    /// Base-size asteroid (splits into two half-size rocks)
    Large,

    /// Half-size asteroid (splits into two quarter-size rocks)
    Medium,

    /// Below the split threshold (destroyed outright)
    Small,
}

impl AsteroidSize {
    /// Classify a radius against the configured base radius.
    ///
    /// Anything at or below a third of the base radius is too small to
    /// split; at or above the base radius counts as large.
    pub fn classify(radius: f32, base_radius: f32) -> Self {
        if radius >= base_radius {
            Self::Large
        } else if radius > base_radius / 3.0 {
            Self::Medium
        } else {
            Self::Small
        }
    }

    /// Points awarded for destroying an asteroid of this size.
    pub fn points(self, config: &AsteroidConfig) -> u32 {
        match self {
            Self::Large => config.points_large,
            Self::Medium => config.points_medium,
            Self::Small => config.points_small,
        }
    }

    /// Whether an asteroid of this size splits when destroyed.
    pub fn splits(self) -> bool {
        !matches!(self, Self::Small)
    }
}

/// One drifting rock.
#[derive(Debug, Clone)]
pub struct Asteroid {
    /// Embedded physics body (`angle` is the cosmetic spin)
    pub body: Body,

    /// Cosmetic spin per tick, radians
    pub rotation_speed: f32,

    /// Size tier derived from the radius at spawn
    pub size: AsteroidSize,
}

impl Asteroid {
    /// Spawn an asteroid with a randomized trajectory and spin.
    pub fn new<R: Rng>(x: f32, y: f32, radius: f32, config: &GameConfig, rng: &mut R) -> Self {
        let mut body = Body::new(x, y, radius);
        body.velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * config.asteroid.speed,
            (rng.gen::<f32>() - 0.5) * config.asteroid.speed,
        );
        Self {
            body,
            rotation_speed: (rng.gen::<f32>() - 0.5) * config.asteroid.rotation_speed,
            size: AsteroidSize::classify(radius, config.asteroid.base_radius),
        }
    }

    /// Apply one tick: spin, then drift. No deceleration, ever.
    pub fn update(&mut self, config: &GameConfig) {
        self.body.angle += self.rotation_speed;
        self.body.integrate(&config.world);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_classify_tiers() {
        assert_eq!(AsteroidSize::classify(45.0, 45.0), AsteroidSize::Large);
        assert_eq!(AsteroidSize::classify(22.5, 45.0), AsteroidSize::Medium);
        assert_eq!(AsteroidSize::classify(11.25, 45.0), AsteroidSize::Small);
        // Exactly one third of the base is already too small to split.
        assert_eq!(AsteroidSize::classify(15.0, 45.0), AsteroidSize::Small);
    }

    #[test]
    fn test_points_follow_tier() {
        let config = GameConfig::default();
        assert_eq!(AsteroidSize::Large.points(&config.asteroid), 20);
        assert_eq!(AsteroidSize::Medium.points(&config.asteroid), 50);
        assert_eq!(AsteroidSize::Small.points(&config.asteroid), 100);
    }

    #[test]
    fn test_split_threshold() {
        assert!(AsteroidSize::Large.splits());
        assert!(AsteroidSize::Medium.splits());
        assert!(!AsteroidSize::Small.splits());
    }

    #[test]
    fn test_spawn_velocity_within_speed_scale() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let asteroid = Asteroid::new(0.0, 0.0, 45.0, &config, &mut rng);
            assert!(asteroid.body.velocity.x.abs() <= config.asteroid.speed / 2.0);
            assert!(asteroid.body.velocity.y.abs() <= config.asteroid.speed / 2.0);
            assert!(asteroid.rotation_speed.abs() <= config.asteroid.rotation_speed / 2.0);
        }
    }

    #[test]
    fn test_velocity_is_constant_across_updates() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut asteroid = Asteroid::new(100.0, 100.0, 45.0, &config, &mut rng);
        let velocity = asteroid.body.velocity;
        for _ in 0..500 {
            asteroid.update(&config);
        }
        assert_relative_eq!(asteroid.body.velocity.x, velocity.x);
        assert_relative_eq!(asteroid.body.velocity.y, velocity.y);
    }
}
