//! Projectiles and the fixed-capacity projectile pool
//!
//! Projectiles are never allocated mid-game: the pool holds a fixed
//! number of slots toggled active/inactive, which hard-caps the number
//! of simultaneously live shots.

use crate::config::GameConfig;
use crate::entities::body::Body;
use crate::foundation::math::heading_vector;

/// One reusable projectile slot.
#[derive(Debug, Clone)]
pub struct Projectile {
    /// Embedded physics body
    pub body: Body,

    /// Whether this slot currently represents a live shot
    pub active: bool,

    /// Remaining flight time in milliseconds
    pub lifespan: f32,
}

impl Projectile {
    /// Create an inactive slot.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            body: Body::new(0.0, 0.0, config.projectile.radius),
            active: false,
            lifespan: 0.0,
        }
    }

    /// Activate this slot as a shot fired from `(x, y)` along `angle`.
    ///
    /// The shot spawns offset forward from the origin by the muzzle
    /// offset so it clears the ship sprite.
    pub fn fire(&mut self, x: f32, y: f32, angle: f32, config: &GameConfig) {
        let direction = heading_vector(angle);
        self.body.angle = angle;
        self.body.position.x = x + direction.x * config.ship.muzzle_offset;
        self.body.position.y = y + direction.y * config.ship.muzzle_offset;
        self.body.velocity = direction * config.projectile.speed;
        self.lifespan = config.projectile.lifespan_ms;
        self.active = true;
    }

    /// Apply one tick: burn lifespan, then move.
    ///
    /// A shot whose lifespan runs out this tick is deactivated but still
    /// integrates once before going dark.
    pub fn update(&mut self, delta_time: f32, config: &GameConfig) {
        if !self.active {
            return;
        }
        self.lifespan -= delta_time;
        if self.lifespan <= 0.0 {
            self.active = false;
        }
        self.body.integrate(&config.world);
    }
}

/// Fixed-capacity pool of projectile slots.
#[derive(Debug, Clone)]
pub struct ProjectilePool {
    slots: Vec<Projectile>,
}

impl ProjectilePool {
    /// Allocate the pool with every slot inactive.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            slots: vec![Projectile::new(config); config.projectile.pool_size],
        }
    }

    /// Fire from the first inactive slot, if any.
    ///
    /// Returns `false` without firing when every slot is live — the
    /// simultaneous-shot cap, not an error.
    pub fn fire(&mut self, x: f32, y: f32, angle: f32, config: &GameConfig) -> bool {
        match self.slots.iter_mut().find(|p| !p.active) {
            Some(slot) => {
                slot.fire(x, y, angle, config);
                true
            }
            None => false,
        }
    }

    /// Advance every slot by one tick.
    pub fn update(&mut self, delta_time: f32, config: &GameConfig) {
        for projectile in &mut self.slots {
            projectile.update(delta_time, config);
        }
    }

    /// All slots, live and dormant. Renderers skip inactive ones.
    pub fn slots(&self) -> &[Projectile] {
        &self.slots
    }

    /// Mutable access for collision resolution.
    pub(crate) fn slots_mut(&mut self) -> &mut [Projectile] {
        &mut self.slots
    }

    /// Number of currently live shots.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fire_offsets_spawn_forward() {
        let config = GameConfig::default();
        let mut projectile = Projectile::new(&config);
        projectile.fire(100.0, 100.0, 0.0, &config);
        assert!(projectile.active);
        assert_relative_eq!(projectile.body.position.x, 100.0 + config.ship.muzzle_offset);
        assert_relative_eq!(projectile.body.position.y, 100.0, epsilon = 1e-4);
        assert_relative_eq!(projectile.body.velocity.x, config.projectile.speed);
    }

    #[test]
    fn test_expires_after_lifespan() {
        let config = GameConfig::default();
        let mut projectile = Projectile::new(&config);
        projectile.fire(100.0, 100.0, 0.0, &config);
        projectile.update(config.projectile.lifespan_ms / 2.0, &config);
        assert!(projectile.active);
        projectile.update(config.projectile.lifespan_ms, &config);
        assert!(!projectile.active);
    }

    #[test]
    fn test_still_moves_on_expiry_tick() {
        let config = GameConfig::default();
        let mut projectile = Projectile::new(&config);
        projectile.fire(100.0, 100.0, 0.0, &config);
        let x_before = projectile.body.position.x;
        projectile.update(config.projectile.lifespan_ms + 1.0, &config);
        assert!(!projectile.active);
        assert_relative_eq!(
            projectile.body.position.x,
            x_before + config.projectile.speed
        );
    }

    #[test]
    fn test_inactive_slot_ignores_update() {
        let config = GameConfig::default();
        let mut projectile = Projectile::new(&config);
        projectile.body.velocity.x = 7.0;
        projectile.update(16.7, &config);
        assert_relative_eq!(projectile.body.position.x, 0.0);
    }

    #[test]
    fn test_pool_caps_live_shots() {
        let config = GameConfig::default();
        let mut pool = ProjectilePool::new(&config);
        for _ in 0..config.projectile.pool_size {
            assert!(pool.fire(0.0, 0.0, 0.0, &config));
        }
        assert_eq!(pool.active_count(), config.projectile.pool_size);
        // Exhausted pool refuses silently.
        assert!(!pool.fire(0.0, 0.0, 0.0, &config));
        assert_eq!(pool.active_count(), config.projectile.pool_size);
    }

    #[test]
    fn test_pool_reuses_expired_slots() {
        let config = GameConfig::default();
        let mut pool = ProjectilePool::new(&config);
        for _ in 0..config.projectile.pool_size {
            pool.fire(0.0, 0.0, 0.0, &config);
        }
        pool.update(config.projectile.lifespan_ms + 1.0, &config);
        assert_eq!(pool.active_count(), 0);
        assert!(pool.fire(0.0, 0.0, 0.0, &config));
    }
}
