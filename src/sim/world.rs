//! World bounds and the light source
//!
//! Replaces ambient window/light globals with a value passed to every
//! vehicle constructor and update.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The static light: an axis-aligned square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightSource {
    pub center: DVec2,
    /// Side length of the square
    pub size: f64,
}

impl LightSource {
    pub fn new(center: DVec2, size: f64) -> Self {
        Self { center, size }
    }

    /// Top-left corner in screen coordinates
    pub fn min(&self) -> DVec2 {
        self.center - DVec2::splat(self.size / 2.0)
    }
}

impl Default for LightSource {
    fn default() -> Self {
        Self::new(DVec2::new(LIGHT_CENTER.0, LIGHT_CENTER.1), LIGHT_SIZE)
    }
}

/// Everything a vehicle needs to know about its surroundings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub light: LightSource,
    pub sensor_length: f64,
    pub initial_speed: f64,
    pub min_speed: f64,
    pub frame_rate: u32,
    /// Trajectory points kept per vehicle (`None` = keep everything)
    pub trajectory_limit: Option<usize>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            light: LightSource::default(),
            sensor_length: SENSOR_LENGTH,
            initial_speed: INITIAL_SPEED,
            min_speed: MIN_SPEED,
            frame_rate: FRAME_RATE,
            trajectory_limit: Some(TRAJECTORY_LIMIT),
        }
    }
}

impl WorldConfig {
    /// Same world with the light moved
    pub fn with_light_center(mut self, center: DVec2) -> Self {
        self.light.center = center;
        self
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// True when `pos` lies in [0, width) x [0, height)
    pub fn contains(&self, pos: DVec2) -> bool {
        (0.0..self.width).contains(&pos.x) && (0.0..self.height).contains(&pos.y)
    }
}
