//! Cosmetic explosion animation
//!
//! Spawned wherever an asteroid dies or the ship loses a life. Purely
//! visual: no collision, no physics, pruned once the frame sequence
//! completes.

use crate::config::ExplosionConfig;
use crate::foundation::math::Vec2;

/// A transient explosion animation.
#[derive(Debug, Clone)]
pub struct Explosion {
    /// Center of the animation, in pixels
    pub position: Vec2,

    /// Index of the frame currently on screen
    pub current_frame: u32,

    /// Time accumulated toward the next frame advance, milliseconds
    pub timer: f32,

    /// Set once the last frame has played out
    pub finished: bool,
}

impl Explosion {
    /// Start an explosion at the given position.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            current_frame: 0,
            timer: 0.0,
            finished: false,
        }
    }

    /// Accumulate elapsed time and advance at most one frame per tick.
    pub fn update(&mut self, delta_time: f32, config: &ExplosionConfig) {
        if self.finished {
            return;
        }
        self.timer += delta_time;
        if self.timer > config.frame_duration_ms {
            self.timer = 0.0;
            self.current_frame += 1;
            if self.current_frame >= config.frame_count {
                self.finished = true;
            }
        }
    }
}
