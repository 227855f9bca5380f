//! Game balance and geometry
//!
//! Every number the simulation and renderer read lives here. Can be
//! overridden from JSON (host page or LocalStorage); missing fields keep
//! their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum TuningError {
    /// JSON could not be parsed
    #[error("tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulation cannot run with
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    /// Height of the ground band, measured up from the canvas bottom
    pub ground_level: f64,
    /// Distance from the canvas bottom to the underside of the roof band
    pub roof_level: f64,
    /// Spikes hanging from the roof
    pub spike_height: f64,
    pub spike_width: f64,
    pub ground_color: String,
    pub roof_color: String,

    // === Player ===
    pub player_base_width: f64,
    pub player_height: f64,
    /// Horizontal speed (px/s)
    pub player_speed: f64,
    pub player_stroke_width: f64,
    pub player_stroke_color: String,
    pub player_fill_color: String,

    // === Bullet ===
    pub bullet_width: f64,
    /// Upward speed (px/s)
    pub bullet_speed: f64,
    pub bullet_head_width: f64,
    pub bullet_head_height: f64,
    pub bullet_color: String,

    // === Bubbles ===
    pub bubble_radius: f64,
    /// Horizontal speed (px/s)
    pub bubble_speed: f64,
    /// Number of size steps from a full bubble down to nothing
    pub bubble_split_count: u32,
    pub bubble_max_jump_height: f64,
    pub bubble_max_jump_width: f64,
    pub bubble_min_stroke_width: f64,
    /// Stroke width as a fraction of the bubble diameter
    pub bubble_stroke_ratio: f64,
    pub bubble_fill_color: String,
    /// First bubble spawns this far from the right edge
    pub bubble_spawn_inset: f64,
    pub bubble_spawn_y: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ground_level: 25.0,
            roof_level: 425.0,
            spike_height: 10.0,
            spike_width: 15.0,
            ground_color: "#333".into(),
            roof_color: "#333".into(),

            player_base_width: 32.0,
            player_height: 32.0,
            player_speed: 100.0,
            player_stroke_width: 6.0,
            player_stroke_color: "#333".into(),
            player_fill_color: "#000".into(),

            bullet_width: 1.0,
            bullet_speed: 250.0,
            bullet_head_width: 6.0,
            bullet_head_height: 8.0,
            bullet_color: "#000".into(),

            bubble_radius: 24.0,
            bubble_speed: 80.0,
            bubble_split_count: 4,
            bubble_max_jump_height: 150.0,
            bubble_max_jump_width: 60.0,
            bubble_min_stroke_width: 5.0,
            bubble_stroke_ratio: 0.2,
            bubble_fill_color: "#000".into(),
            bubble_spawn_inset: 30.0,
            bubble_spawn_y: 400.0,
        }
    }
}

impl Tuning {
    /// Parse from JSON and validate
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject values that would break simulation invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if !(self.bubble_radius > 0.0) {
            return invalid("bubble_radius", "must be positive");
        }
        if self.bubble_split_count == 0 {
            return invalid("bubble_split_count", "must be at least 1");
        }
        if !(self.player_base_width > 0.0) {
            return invalid("player_base_width", "must be positive");
        }
        if !(self.player_height > 0.0) {
            return invalid("player_height", "must be positive");
        }
        if self.player_speed < 0.0 || self.bullet_speed < 0.0 || self.bubble_speed < 0.0 {
            return invalid("speed", "must not be negative");
        }
        if !(self.spike_width > 0.0) {
            return invalid("spike_width", "must be positive");
        }
        if self.roof_level <= self.ground_level {
            return invalid("roof_level", "must be above ground_level");
        }
        Ok(())
    }

    /// Size lost by a bubble each time it splits
    pub fn size_step(&self) -> f64 {
        1.0 / self.bubble_split_count as f64
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bubble_pop_tuning";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Tuning saved");
                }
                Err(e) => log::warn!("Tuning not saved: {}", e),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
        assert!((Tuning::default().size_step() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "bubble_split_count": 10, "player_speed": 120.0 }"#)
            .unwrap();
        assert_eq!(tuning.bubble_split_count, 10);
        assert_eq!(tuning.player_speed, 120.0);
        assert_eq!(tuning.ground_level, 25.0);
        assert_eq!(tuning.bubble_radius, 24.0);
    }

    #[test]
    fn test_rejects_zero_split_count() {
        let err = Tuning::from_json(r#"{ "bubble_split_count": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "bubble_split_count",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_roof_below_ground() {
        let tuning = Tuning {
            roof_level: 10.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_stored_json_reloads_unchanged() {
        let tuning = Tuning {
            bubble_split_count: 3,
            bubble_fill_color: "#123".into(),
            ..Default::default()
        };
        let json = tuning.to_json().unwrap();
        assert!(json.contains("\"bubble_split_count\":3"));
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_parse_error() {
        let err = Tuning::from_json("not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().starts_with("tuning parse error"));
    }
}
