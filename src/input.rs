//! Keyboard input
//!
//! Maps `KeyboardEvent.key` strings onto game keys and applies presses and
//! releases to the player's movement intent.

use crate::sim::Player;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Fire,
    Left,
    Right,
    Down,
}

impl Key {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" | "ArrowUp" => Some(Key::Fire),
            "a" | "A" | "ArrowLeft" => Some(Key::Left),
            "d" | "D" | "ArrowRight" => Some(Key::Right),
            "s" | "S" | "ArrowDown" => Some(Key::Down),
            _ => None,
        }
    }
}

/// Apply a key press. Returns true if a bullet was fired.
///
/// Fire only takes effect while no bullet is in flight. A direction press
/// overrides whatever direction was held before.
pub fn press(player: &mut Player, key: Key) -> bool {
    match key {
        Key::Fire => return player.fire(),
        Key::Left => player.movement.x = -1.0,
        Key::Right => player.movement.x = 1.0,
        // Vertical intent has no effect on a ground-bound player
        Key::Down => player.movement.y = 1.0,
    }
    false
}

/// Apply a key release.
///
/// Releasing a direction only stops the player if that direction is the one
/// currently held, so letting go of an old key does not cancel a newer press.
pub fn release(player: &mut Player, key: Key) {
    match key {
        Key::Left if player.movement.x < 0.0 => player.movement.x = 0.0,
        Key::Right if player.movement.x > 0.0 => player.movement.x = 0.0,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector;
    use crate::tuning::Tuning;

    fn player() -> Player {
        Player::new(Vector::new(100.0, 425.0), &Tuning::default())
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_key("w"), Some(Key::Fire));
        assert_eq!(Key::from_key("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_key("D"), Some(Key::Right));
        assert_eq!(Key::from_key("Shift"), None);
        assert_eq!(Key::from_key(" "), None);
    }

    #[test]
    fn test_stale_release_keeps_newer_direction() {
        let mut p = player();
        press(&mut p, Key::Left);
        press(&mut p, Key::Right);
        release(&mut p, Key::Left);
        assert_eq!(p.movement.x, 1.0);
        release(&mut p, Key::Right);
        assert_eq!(p.movement.x, 0.0);
    }

    #[test]
    fn test_fire_is_edge_triggered() {
        let mut p = player();
        assert!(press(&mut p, Key::Fire));
        assert!(!press(&mut p, Key::Fire));
        release(&mut p, Key::Fire);
        assert!(p.is_shooting());
    }
}
