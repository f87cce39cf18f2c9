//! Player ship
//!
//! Rotation and thrust with inertia, multiplicative friction, and a
//! timed invincibility window after each (re)spawn.

use crate::config::GameConfig;
use crate::entities::body::Body;
use crate::foundation::math::heading_vector;
use crate::input::InputState;

/// Heading of a freshly spawned ship: straight up.
pub const START_ANGLE: f32 = -std::f32::consts::FRAC_PI_2;

/// Player ship state.
#[derive(Debug, Clone)]
pub struct Ship {
    /// Embedded physics body
    pub body: Body,

    /// Whether the ship currently ignores collisions
    pub invincible: bool,

    /// Remaining invincibility time in milliseconds
    pub invincibility_timer: f32,
}

impl Ship {
    /// Spawn a ship at the playfield center with a fresh invincibility
    /// window.
    pub fn new(config: &GameConfig) -> Self {
        let mut ship = Self {
            body: Body::new(0.0, 0.0, config.ship.radius),
            invincible: false,
            invincibility_timer: 0.0,
        };
        ship.reset(config);
        ship
    }

    /// Re-center the ship with zero velocity, default heading, and a
    /// fresh invincibility window.
    pub fn reset(&mut self, config: &GameConfig) {
        self.body.position.x = config.world.width / 2.0;
        self.body.position.y = config.world.height / 2.0;
        self.body.velocity.x = 0.0;
        self.body.velocity.y = 0.0;
        self.body.angle = START_ANGLE;
        self.invincible = true;
        self.invincibility_timer = config.ship.invincibility_ms;
    }

    /// Apply one tick of input, friction, and movement.
    ///
    /// Turn rate, thrust, and friction are constant per-tick deltas;
    /// only the invincibility countdown consumes the elapsed-time delta.
    pub fn update(&mut self, input: &InputState, delta_time: f32, config: &GameConfig) {
        if input.left {
            self.body.angle -= config.ship.turn_speed;
        }
        if input.right {
            self.body.angle += config.ship.turn_speed;
        }
        if input.thrust {
            self.body.velocity += heading_vector(self.body.angle) * config.ship.thrust;
        }
        self.body.velocity *= 1.0 - config.ship.friction;

        if self.invincible {
            self.invincibility_timer -= delta_time;
            if self.invincibility_timer <= 0.0 {
                self.invincible = false;
            }
        }

        self.body.integrate(&config.world);
    }
}
