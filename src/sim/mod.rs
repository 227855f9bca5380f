//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Time enters only through `Game::run` / `World::delta_time`
//! - Paths are closed-form functions of x
//! - One tick at a time, player before bubbles

pub mod bubble;
pub mod bullet;
pub mod game;
pub mod player;
pub mod trajectory;
pub mod world;

pub use bubble::{Bubble, BubbleUpdate, Direction};
pub use bullet::Bullet;
pub use game::{Game, GameEvent};
pub use player::{Player, PlayerUpdate};
pub use trajectory::{BounceShape, Trajectory};
pub use world::World;
