//! Bouncing bubbles
//!
//! A bubble follows its trajectory, reflects it at the side walls, re-homes
//! onto a resting bounce when it touches the ground, and splits in two when
//! the bullet reaches it.

use super::player::Player;
use super::trajectory::{BounceShape, Trajectory};
use super::world::World;
use crate::consts::SIZE_EPSILON;
use crate::tuning::Tuning;
use crate::{Vector, inside_circle};

/// Horizontal heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// What happened to a bubble during its update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BubbleUpdate {
    /// Turned around at a side wall
    pub bounced_off_wall: bool,
    /// Touched the ground and switched to the resting bounce
    pub landed: bool,
    /// Overlaps the player silhouette
    pub touched_player: bool,
    /// Hit by the bullet; the bullet has been consumed
    pub popped: bool,
}

#[derive(Debug, Clone)]
pub struct Bubble {
    pub position: Vector,
    pub base_radius: f64,
    /// Fraction of full size, in (0, 1]
    pub size_modifier: f64,
    /// Size lost per split
    pub size_step: f64,
    /// Horizontal speed (px/s)
    pub speed: f64,
    pub direction: Direction,
    pub stroke_width: f64,
    pub fill_color: String,
    pub trajectory: Trajectory,
    /// Was beyond a side wall last tick
    pub was_outside: bool,
    /// Resting bounce for this size, anchored wherever the bubble lands
    pub bounce: BounceShape,
}

impl Bubble {
    /// A bubble on its resting bounce anchored at x = 0
    pub fn new(position: Vector, size_modifier: f64, tuning: &Tuning) -> Self {
        let base_radius = tuning.bubble_radius;
        let actual_radius = base_radius * size_modifier;
        let stroke_width =
            (2.0 * actual_radius * tuning.bubble_stroke_ratio).max(tuning.bubble_min_stroke_width);
        let bounce = BounceShape::new(
            actual_radius + stroke_width / 2.0,
            size_modifier,
            tuning.bubble_max_jump_height,
            tuning.bubble_max_jump_width,
            tuning.player_height,
            tuning.player_base_width,
        );
        Self {
            position,
            base_radius,
            size_modifier,
            size_step: tuning.size_step(),
            speed: tuning.bubble_speed,
            direction: Direction::Right,
            stroke_width,
            fill_color: tuning.bubble_fill_color.clone(),
            trajectory: Trajectory::bounce(0.0, bounce),
            was_outside: false,
            bounce,
        }
    }

    /// The opening bubble: full size, near the right edge
    pub fn spawn(world: &World, tuning: &Tuning) -> Self {
        Self::new(
            Vector::new(world.width - tuning.bubble_spawn_inset, tuning.bubble_spawn_y),
            1.0,
            tuning,
        )
    }

    pub fn with_trajectory(mut self, trajectory: Trajectory) -> Self {
        self.trajectory = trajectory;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[inline]
    pub fn actual_radius(&self) -> f64 {
        self.base_radius * self.size_modifier
    }

    /// Radius used for hit tests (includes half the stroke)
    #[inline]
    pub fn collision_radius(&self) -> f64 {
        self.actual_radius() + self.stroke_width / 2.0
    }

    pub fn contains(&self, p: Vector) -> bool {
        inside_circle(p, self.position, self.collision_radius())
    }

    /// (left, right) overlap with the side walls
    fn outside_walls(&self, world: &World) -> (bool, bool) {
        let r = self.collision_radius();
        (self.position.x - r <= 0.0, self.position.x + r >= world.width)
    }

    /// Bottom edge at or below the ground
    pub fn is_below_ground(&self, world: &World) -> bool {
        self.position.y + self.actual_radius() >= world.ground_y()
    }

    pub fn collides_with_player(&self, player: &Player) -> bool {
        player.probes().iter().any(|&p| self.contains(p))
    }

    /// Bullet column passes through the bubble and the tip has climbed to
    /// the bubble's height
    pub fn collides_with_bullet(&self, player: &Player) -> bool {
        let Some(bullet) = player.bullet.as_ref() else {
            return false;
        };
        self.contains(Vector::new(bullet.position.x, self.position.y))
            && self.position.y >= bullet.position.y
    }

    /// Whether a hit would produce children
    pub fn can_split(&self) -> bool {
        self.size_modifier - self.size_step > SIZE_EPSILON
    }

    /// Advance one tick.
    ///
    /// Player contact and bullet hits are reported; on a hit the bullet is
    /// taken from the player here, but removing this bubble and adding its
    /// children is left to the caller.
    pub fn update(&mut self, world: &World, player: &mut Player) -> BubbleUpdate {
        let mut result = BubbleUpdate::default();

        let (outside_left, outside_right) = self.outside_walls(world);
        let outside = outside_left || outside_right;
        if outside && !self.was_outside {
            let axis = self.position.x;
            self.trajectory = self.trajectory.clone().mirrored(axis);
            self.direction = self.direction.reversed();
            result.bounced_off_wall = true;
        }
        self.was_outside = outside;

        if self.is_below_ground(world) {
            self.trajectory = Trajectory::bounce(self.position.x, self.bounce);
            result.landed = true;
            log::debug!("Bubble hit ground at x={:.1}", self.position.x);
        }

        self.position.x += self.speed * world.delta_time * self.direction.sign();
        self.position.y = self.trajectory.y_at(self.position.x, world);

        if self.collides_with_player(player) {
            result.touched_player = true;
        }

        if self.collides_with_bullet(player) {
            log::info!(
                "Bubble hit by bullet: {:.2} / {:.2}",
                self.size_modifier,
                self.size_step
            );
            player.release_bullet();
            result.popped = true;
        }

        result
    }

    /// The two children of a popped bubble, or `None` if it was the
    /// smallest size.
    ///
    /// Both start at the parent's position. The right one follows an arc
    /// through the split point; the left one follows its mirror image and
    /// heads left.
    pub fn split(&self, tuning: &Tuning) -> Option<[Bubble; 2]> {
        if !self.can_split() {
            return None;
        }
        let child_size = self.size_modifier - self.size_step;
        let arc = Trajectory::parabola(self.position.x, self.position.y);

        let mut right = Bubble::new(self.position, child_size, tuning);
        right.size_step = self.size_step;
        let left = right
            .clone()
            .with_trajectory(arc.clone().mirrored(self.position.x))
            .with_direction(Direction::Left);
        let right = right.with_trajectory(arc);

        Some([right, left])
    }
}
