//! Per-tick shared context
//!
//! Bounds, level geometry and elapsed time. Owned by `Game`, lent to every
//! entity for the duration of its update.

use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq)]
pub struct World {
    /// Canvas size, refreshed every tick
    pub width: f64,
    pub height: f64,
    pub ground_level: f64,
    pub roof_level: f64,
    pub spike_height: f64,
    pub spike_width: f64,
    /// Seconds since the previous tick
    pub delta_time: f64,
}

impl World {
    pub fn new(tuning: &Tuning, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ground_level: tuning.ground_level,
            roof_level: tuning.roof_level,
            spike_height: tuning.spike_height,
            spike_width: tuning.spike_width,
            delta_time: 0.0,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Canvas y of the ground surface
    #[inline]
    pub fn ground_y(&self) -> f64 {
        self.height - self.ground_level
    }

    /// Canvas y of the underside of the roof band (spike bases)
    #[inline]
    pub fn roof_y(&self) -> f64 {
        self.height - self.roof_level
    }

    /// Canvas y of the spike tips; a bullet above this is gone
    #[inline]
    pub fn spike_tip_y(&self) -> f64 {
        self.roof_y() + self.spike_height
    }
}
