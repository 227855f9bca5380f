//! The player's projectile

use super::world::World;
use crate::Vector;

/// A bullet travelling straight up from where it was fired.
///
/// The trail from `origin` to `position` is drawn as a line, so the origin
/// never moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub origin: Vector,
    pub position: Vector,
    pub width: f64,
    /// Upward speed (px/s)
    pub speed: f64,
}

impl Bullet {
    pub fn new(origin: Vector, width: f64, speed: f64) -> Self {
        Self {
            origin,
            position: origin,
            width,
            speed,
        }
    }

    /// Move up by one tick
    pub fn advance(&mut self, dt: f64) {
        self.position.y -= self.speed * dt;
    }

    /// False once the tip has passed the roof spikes
    pub fn is_visible(&self, world: &World) -> bool {
        self.position.y >= world.spike_tip_y()
    }
}
