//! Simulation entities
//!
//! Each entity embeds a shared [`body::Body`] by composition and layers
//! its own per-tick rules on top.

pub mod asteroid;
pub mod body;
pub mod explosion;
pub mod projectile;
pub mod ship;
