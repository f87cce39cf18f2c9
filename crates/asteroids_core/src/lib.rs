//! # Asteroids Core
//!
//! Headless simulation core for an Asteroids-style arcade shooter.
//!
//! The crate owns everything that happens between two rendered frames:
//! entity integration with toroidal screen wrap, circle-based collision
//! detection, asteroid splitting, scoring, lives, level progression, and
//! the game-over/restart state machine. Rendering, input capture, asset
//! loading, and frame scheduling are external collaborators: the host
//! samples input, hands the session a timestamp once per display refresh,
//! and reads entity state back for drawing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use asteroids_core::prelude::*;
//!
//! let mut session = GameSession::new(GameConfig::default());
//! session.start();
//!
//! // Once per animation frame, with a monotonically increasing
//! // timestamp in milliseconds and freshly sampled input:
//! let input = InputState { thrust: true, ..InputState::default() };
//! session.advance(16.7, input);
//!
//! let hud = session.hud();
//! println!("score {} lives {} level {}", hud.score, hud.lives, hud.level);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod collision;
pub mod config;
pub mod entities;
pub mod foundation;
pub mod input;
pub mod session;

pub use config::{Config, ConfigError, GameConfig};
pub use input::InputState;
pub use session::{GamePhase, GameSession, HudSnapshot};

/// Common imports for simulation users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, GameConfig},
        entities::{
            asteroid::{Asteroid, AsteroidSize},
            body::Body,
            explosion::Explosion,
            projectile::{Projectile, ProjectilePool},
            ship::Ship,
        },
        foundation::{math::Vec2, time::FrameClock},
        input::InputState,
        session::{GamePhase, GameSession, HudSnapshot},
    };
}
