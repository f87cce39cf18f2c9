//! Game session: state machine and frame driver
//!
//! [`GameSession`] owns every entity collection and the score/lives/level
//! counters. The host calls [`GameSession::advance`] once per animation
//! frame with a monotonic timestamp and a freshly sampled input snapshot;
//! everything for that frame (movement, collisions, splits, state
//! transitions) resolves synchronously before the call returns.
//!
//! Phases: `Ready` → `Playing` (via [`GameSession::start`]) → `GameOver`
//! (lives exhausted) → `Playing` again (via [`GameSession::restart`]).

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collision::bodies_overlap;
use crate::config::GameConfig;
use crate::entities::asteroid::Asteroid;
use crate::entities::explosion::Explosion;
use crate::entities::projectile::ProjectilePool;
use crate::entities::ship::Ship;
use crate::foundation::time::FrameClock;
use crate::input::InputState;

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Created but not started; ticks are ignored
    Ready,

    /// Live simulation
    Playing,

    /// Terminal until [`GameSession::restart`]
    GameOver,
}

/// Read-only HUD values for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudSnapshot {
    /// Accumulated score
    pub score: u32,

    /// Remaining lives (may go negative on a pathological multi-hit frame)
    pub lives: i32,

    /// Current level, starting at 1
    pub level: u32,

    /// Whether the session has ended
    pub game_over: bool,
}

/// One complete game: entities, counters, RNG, and frame clock.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    phase: GamePhase,
    score: u32,
    lives: i32,
    level: u32,
    ship: Ship,
    projectiles: ProjectilePool,
    asteroids: Vec<Asteroid>,
    explosions: Vec<Explosion>,
    clock: FrameClock,
    rng: StdRng,
    fire_held: bool,
}

impl GameSession {
    /// Create a session with an entropy-seeded RNG. Call
    /// [`GameSession::start`] to begin playing.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a session with a deterministic RNG seed (tests, replays).
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let ship = Ship::new(&config);
        let projectiles = ProjectilePool::new(&config);
        let lives = config.rules.starting_lives;
        Self {
            config,
            phase: GamePhase::Ready,
            score: 0,
            lives,
            level: 1,
            ship,
            projectiles,
            asteroids: Vec::new(),
            explosions: Vec::new(),
            clock: FrameClock::new(),
            rng,
            fire_held: false,
        }
    }

    /// Begin a fresh game: reset counters, reallocate entities, spawn the
    /// starting asteroid field. The ship gets its normal spawn
    /// invincibility window.
    pub fn start(&mut self) {
        self.score = 0;
        self.lives = self.config.rules.starting_lives;
        self.level = 1;
        self.init_entities();
        self.spawn_field();
        self.phase = GamePhase::Playing;
        info!(
            "Session started: lives={} level={} asteroids={}",
            self.lives,
            self.level,
            self.asteroids.len()
        );
    }

    /// Restart after a game over: full reset of counters and entities.
    ///
    /// Unlike a mid-game respawn, the restarted ship gets no
    /// invincibility grace period.
    pub fn restart(&mut self) {
        self.score = 0;
        self.lives = self.config.rules.starting_lives;
        self.level = 1;
        self.init_entities();
        self.ship.invincible = false;
        self.spawn_field();
        self.phase = GamePhase::Playing;
        info!("Session restarted");
    }

    /// Advance to `timestamp` (milliseconds, monotonic) and run one tick.
    pub fn advance(&mut self, timestamp: f32, input: InputState) {
        let delta_time = self.clock.delta(timestamp);
        self.step(delta_time, input);
    }

    /// Run one tick with an explicit elapsed-time delta in milliseconds.
    ///
    /// Order: fire resolution → entity updates → cosmetic pruning →
    /// collision resolution. A session that is not `Playing` only
    /// tracks the fire latch so a held trigger cannot re-fire across a
    /// restart.
    pub fn step(&mut self, delta_time: f32, input: InputState) {
        let fire_edge = input.fire && !self.fire_held;
        self.fire_held = input.fire;

        if self.phase != GamePhase::Playing {
            return;
        }

        if fire_edge {
            let fired = self.projectiles.fire(
                self.ship.body.position.x,
                self.ship.body.position.y,
                self.ship.body.angle,
                &self.config,
            );
            if !fired {
                debug!("Fire suppressed: projectile pool exhausted");
            }
        }

        self.ship.update(&input, delta_time, &self.config);
        self.projectiles.update(delta_time, &self.config);
        for asteroid in &mut self.asteroids {
            asteroid.update(&self.config);
        }
        for explosion in &mut self.explosions {
            explosion.update(delta_time, &self.config.explosion);
        }
        self.explosions.retain(|e| !e.finished);

        self.handle_collisions();
    }

    /// Resolve all overlaps for this tick.
    ///
    /// Each live projectile destroys at most one asteroid (first match
    /// in reverse list order), then stops checking. Later projectiles
    /// see the mutated list. The ship check samples invincibility once,
    /// then tests every asteroid: overlapping several rocks in one tick
    /// loses several lives.
    fn handle_collisions(&mut self) {
        for slot in 0..self.projectiles.slots().len() {
            if !self.projectiles.slots()[slot].active {
                continue;
            }
            let shot = self.projectiles.slots()[slot].body.clone();
            let hit = (0..self.asteroids.len())
                .rev()
                .find(|&i| bodies_overlap(&shot, &self.asteroids[i].body));
            if let Some(index) = hit {
                self.projectiles.slots_mut()[slot].active = false;
                self.break_asteroid(index);
            }
        }

        if !self.ship.invincible {
            for i in 0..self.asteroids.len() {
                if bodies_overlap(&self.ship.body, &self.asteroids[i].body) {
                    self.ship_hit();
                }
            }
        }
    }

    /// Destroy the asteroid at `index`: explosion, split or outright
    /// removal, scoring, and level advance when the field empties.
    fn break_asteroid(&mut self, index: usize) {
        let position = self.asteroids[index].body.position;
        let radius = self.asteroids[index].body.radius;
        let size = self.asteroids[index].size;

        self.explosions.push(Explosion::new(position.x, position.y));

        if size.splits() {
            let child_radius = radius / 2.0;
            for _ in 0..2 {
                let child = Asteroid::new(
                    position.x,
                    position.y,
                    child_radius,
                    &self.config,
                    &mut self.rng,
                );
                self.asteroids.push(child);
            }
        }
        self.score += size.points(&self.config.asteroid);
        self.asteroids.remove(index);
        debug!(
            "Asteroid destroyed ({size:?}); score={} remaining={}",
            self.score,
            self.asteroids.len()
        );

        if self.asteroids.is_empty() {
            self.level += 1;
            info!("Field cleared; advancing to level {}", self.level);
            self.spawn_field();
        }
    }

    /// One life lost: explosion at the ship, then respawn or game over.
    fn ship_hit(&mut self) {
        self.lives -= 1;
        self.explosions
            .push(Explosion::new(self.ship.body.position.x, self.ship.body.position.y));
        if self.lives <= 0 {
            self.phase = GamePhase::GameOver;
            info!("Game over; final score {}", self.score);
        } else {
            info!("Ship destroyed; {} lives remaining", self.lives);
            self.ship.reset(&self.config);
        }
    }

    /// Fresh ship, empty pool, empty asteroid and explosion lists.
    fn init_entities(&mut self) {
        self.ship = Ship::new(&self.config);
        self.projectiles = ProjectilePool::new(&self.config);
        self.asteroids.clear();
        self.explosions.clear();
    }

    /// Spawn `level + 2` base-size asteroids just outside a random edge
    /// of the playfield, each with a randomized trajectory.
    fn spawn_field(&mut self) {
        let count = self.level + 2;
        let base = self.config.asteroid.base_radius;
        let (width, height) = (self.config.world.width, self.config.world.height);
        for _ in 0..count {
            let (x, y) = if self.rng.gen::<f32>() > 0.5 {
                let x = if self.rng.gen::<f32>() > 0.5 {
                    -base
                } else {
                    width + base
                };
                (x, self.rng.gen::<f32>() * height)
            } else {
                let y = if self.rng.gen::<f32>() > 0.5 {
                    -base
                } else {
                    height + base
                };
                (self.rng.gen::<f32>() * width, y)
            };
            let asteroid = Asteroid::new(x, y, base, &self.config, &mut self.rng);
            self.asteroids.push(asteroid);
        }
        debug!("Spawned {count} asteroids for level {}", self.level);
    }

    /// Active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Whether the session has reached its terminal state.
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Accumulated score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Remaining lives.
    pub fn lives(&self) -> i32 {
        self.lives
    }

    /// Current level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// The player ship (read-only; renderers use position, angle, and
    /// the invincibility flag/timer for blink alpha).
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// The projectile pool.
    pub fn projectiles(&self) -> &ProjectilePool {
        &self.projectiles
    }

    /// Live asteroids.
    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    /// Running explosion animations.
    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    /// HUD values for the renderer.
    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.score,
            lives: self.lives,
            level: self.level,
            game_over: self.is_game_over(),
        }
    }
}
