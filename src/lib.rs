//! Bubble Pop - a 2D canvas arcade game
//!
//! Core modules:
//! - `sim`: Simulation (trajectories, entities, collisions, game loop)
//! - `render`: Immediate-mode drawing onto a 2D surface
//! - `input`: Keyboard mapping onto player intent
//! - `session`: Start/restart/stop lifecycle owned by the host UI
//! - `tuning`: Data-driven game balance

pub mod input;
pub mod render;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use tuning::{Tuning, TuningError};

/// 2D point / displacement used throughout the simulation.
///
/// Canvas coordinates: x grows to the right, y grows downward.
pub type Vector = glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Canvas size used when the host does not provide one (native runs)
    pub const DEFAULT_CANVAS_WIDTH: f64 = 600.0;
    pub const DEFAULT_CANVAS_HEIGHT: f64 = 450.0;

    /// Requested interval between ticks in milliseconds.
    /// The host decides the real cadence.
    pub const TICK_INTERVAL_MS: i32 = 1;

    /// Horizontal distance (px) from the split point to the vertex of a child's
    /// arc. The child also rises this far above the split point at the vertex.
    pub const SPLIT_ARC_REACH: f64 = 50.0;

    /// Size comparisons below this are treated as equal
    pub const SIZE_EPSILON: f64 = 1e-9;
}

/// Returns true if the point `p` lies strictly inside the circle at `center`.
#[inline]
pub fn inside_circle(p: Vector, center: Vector, radius: f64) -> bool {
    p.distance_squared(center) < radius * radius
}
