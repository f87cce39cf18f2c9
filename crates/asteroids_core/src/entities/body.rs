//! Shared physics body
//!
//! Position, velocity, heading, and collision radius for anything that
//! moves on the playfield. Entities embed this by composition and call
//! [`Body::integrate`] from their own update rules.

use crate::config::WorldConfig;
use crate::foundation::math::Vec2;

/// Physics state shared by every movable entity.
#[derive(Debug, Clone)]
pub struct Body {
    /// Position of the center, in pixels
    pub position: Vec2,

    /// Velocity in pixels per tick
    pub velocity: Vec2,

    /// Heading/visual angle in radians
    pub angle: f32,

    /// Collision radius in pixels
    pub radius: f32,
}

impl Body {
    /// Create a stationary body at the given position.
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::zeros(),
            angle: 0.0,
            radius,
        }
    }

    /// Advance position by one tick of velocity and wrap around the
    /// playfield edges.
    ///
    /// Velocity is per-tick, so this deliberately ignores elapsed time.
    pub fn integrate(&mut self, world: &WorldConfig) {
        self.position += self.velocity;
        self.wrap(world);
    }

    /// Toroidal screen wrap, offset by the body's own radius so a body
    /// leaves one edge fully before reappearing at the other.
    pub fn wrap(&mut self, world: &WorldConfig) {
        if self.position.x < -self.radius {
            self.position.x = world.width + self.radius;
        }
        if self.position.x > world.width + self.radius {
            self.position.x = -self.radius;
        }
        if self.position.y < -self.radius {
            self.position.y = world.height + self.radius;
        }
        if self.position.y > world.height + self.radius {
            self.position.y = -self.radius;
        }
    }

    /// Current speed in pixels per tick.
    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }
}
