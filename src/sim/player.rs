//! The player: a triangle sliding along the ground

use super::bullet::Bullet;
use super::world::World;
use crate::Vector;
use crate::tuning::Tuning;

/// Outcome of a player update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerUpdate {
    /// Bullet left the screen without hitting anything this tick
    pub bullet_missed: bool,
}

/// The player.
///
/// `position` is the left end of the base line; the apex sits `height` above
/// the middle of the base.
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vector,
    /// Movement intent, each axis in {-1, 0, 1}
    pub movement: Vector,
    pub base_width: f64,
    pub height: f64,
    /// Horizontal speed (px/s)
    pub speed: f64,
    pub stroke_width: f64,
    /// At most one bullet in flight
    pub bullet: Option<Bullet>,
    pub bullet_width: f64,
    pub bullet_speed: f64,
    /// Bubble contacts so far
    pub collisions: u32,
}

impl Player {
    pub fn new(position: Vector, tuning: &Tuning) -> Self {
        Self {
            position,
            movement: Vector::ZERO,
            base_width: tuning.player_base_width,
            height: tuning.player_height,
            speed: tuning.player_speed,
            stroke_width: tuning.player_stroke_width,
            bullet: None,
            bullet_width: tuning.bullet_width,
            bullet_speed: tuning.bullet_speed,
            collisions: 0,
        }
    }

    /// Player centred on the ground of `world`
    pub fn spawn(world: &World, tuning: &Tuning) -> Self {
        Self::new(Vector::new(world.width / 2.0, world.ground_y()), tuning)
    }

    pub fn is_shooting(&self) -> bool {
        self.bullet.is_some()
    }

    /// Middle of the base line, where bullets start
    pub fn muzzle(&self) -> Vector {
        Vector::new(self.position.x + self.base_width / 2.0, self.position.y)
    }

    /// Fire a bullet unless one is already in flight
    pub fn fire(&mut self) -> bool {
        if self.is_shooting() {
            return false;
        }
        self.bullet = Some(Bullet::new(self.muzzle(), self.bullet_width, self.bullet_speed));
        true
    }

    /// Drop the bullet (hit or missed)
    pub fn release_bullet(&mut self) {
        self.bullet = None;
    }

    /// Whether the whole base fits on the canvas with its left end at `x`
    pub fn is_valid_x(&self, x: f64, world: &World) -> bool {
        x >= 0.0 && x + self.base_width <= world.width
    }

    /// Move and advance the bullet.
    ///
    /// A move that would push the base off the canvas is dropped whole; the
    /// player is not clamped to the edge.
    pub fn update(&mut self, world: &World) -> PlayerUpdate {
        let dx = self.movement.x * self.speed * world.delta_time;
        let x = self.position.x + dx;
        if self.is_valid_x(x, world) {
            self.position.x = x;
        }

        let mut result = PlayerUpdate::default();
        if let Some(bullet) = self.bullet.as_mut() {
            bullet.advance(world.delta_time);
            if !bullet.is_visible(world) {
                log::debug!("Bullet is invisible");
                self.release_bullet();
                result.bullet_missed = true;
            }
        }
        result
    }

    /// Points tested against bubbles: both base corners and the apex, each
    /// pushed outward by the stroke width
    pub fn probes(&self) -> [Vector; 3] {
        let Vector { x, y } = self.position;
        let s = self.stroke_width;
        [
            Vector::new(x - s, y + s),
            Vector::new(x + self.base_width + s, y + s),
            Vector::new(x + self.base_width / 2.0, y - self.height - s),
        ]
    }

    /// Contact with a bubble. Counted and logged, no penalty.
    pub fn collision_detected(&mut self, collider: &str) {
        self.collisions += 1;
        log::info!("Player collided with {}", collider);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world(dt: f64) -> World {
        let mut w = World::new(&Tuning::default(), 600.0, 450.0);
        w.delta_time = dt;
        w
    }

    fn player_at(x: f64) -> Player {
        Player::new(Vector::new(x, 425.0), &Tuning::default())
    }

    #[test]
    fn test_move_left_accepted() {
        let mut p = player_at(284.0);
        p.movement.x = -1.0;
        p.update(&world(0.1));
        assert!((p.position.x - 274.0).abs() < 1e-9);
    }

    #[test]
    fn test_move_off_left_edge_rejected() {
        let mut p = player_at(4.0);
        p.movement.x = -1.0;
        p.update(&world(0.1));
        assert_eq!(p.position.x, 4.0);
    }

    #[test]
    fn test_move_off_right_edge_rejected() {
        let mut p = player_at(565.0);
        p.movement.x = 1.0;
        p.update(&world(0.1));
        assert_eq!(p.position.x, 565.0);
        p.position.x = 558.0;
        p.update(&world(0.1));
        assert_eq!(p.position.x, 568.0);
    }

    #[test]
    fn test_fire_is_single_shot() {
        let mut p = player_at(100.0);
        assert!(p.fire());
        assert!(p.is_shooting());
        assert!(!p.fire());
        assert_eq!(p.bullet.as_ref().unwrap().origin, Vector::new(116.0, 425.0));
    }

    #[test]
    fn test_missed_bullet_releases_slot() {
        let mut p = player_at(100.0);
        p.fire();
        // 425 -> 35 takes 1.56 s at 250 px/s
        let w = world(0.1);
        let mut ticks = 0;
        while p.is_shooting() {
            let r = p.update(&w);
            ticks += 1;
            if r.bullet_missed {
                break;
            }
        }
        assert_eq!(ticks, 16);
        assert!(!p.is_shooting());
        assert!(p.fire());
    }

    #[test]
    fn test_probes() {
        let p = player_at(100.0);
        assert_eq!(
            p.probes(),
            [
                Vector::new(94.0, 431.0),
                Vector::new(138.0, 431.0),
                Vector::new(116.0, 387.0),
            ]
        );
    }
}
