//! Braitenberg vehicles - fear and aggression around a light source
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vehicles, sensors, world wrapping)
//! - `renderer`: Display list composition, tessellation and the wgpu pipeline
//! - `platform`: Frontend abstraction, frame pacing and the winit desktop shell
//! - `app`: The Running/Stopped frame loop

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use app::{App, LoopState, RunSummary};
pub use error::AppError;

use glam::DVec2;

/// Simulation and presentation constants
pub mod consts {
    /// World (and window) dimensions in pixels
    pub const WORLD_WIDTH: f64 = 800.0;
    pub const WORLD_HEIGHT: f64 = 600.0;

    /// Light source: a square centered on the world
    pub const LIGHT_CENTER: (f64, f64) = (400.0, 300.0);
    pub const LIGHT_SIZE: f64 = 20.0;

    /// Distance from the body to each virtual sensor
    pub const SENSOR_LENGTH: f64 = 20.0;
    /// Wheel speed at spawn
    pub const INITIAL_SPEED: f64 = 2.0;
    /// Wheel speeds never drop below this
    pub const MIN_SPEED: f64 = 0.5;
    /// Constant term of both wiring rules
    pub const BASE_SPEED: f64 = 0.5;

    /// Fear: speed gained per pixel of sensor distance
    pub const FEAR_GAIN: f64 = 0.01;
    /// Fear: heading delta = (right - left) / divisor
    pub const FEAR_TURN_DIVISOR: f64 = 30.0;
    /// Aggression: speed = base + 1 / (gain * distance)
    pub const AGGRESSION_GAIN: f64 = 0.01;
    /// Aggression: heading delta = (left - right) * gain
    pub const AGGRESSION_TURN_GAIN: f64 = 0.5;
    /// Smallest sensor distance fed into the aggression reciprocal
    pub const SENSOR_EPSILON: f64 = 1e-6;

    /// Target frame rate (one simulation step per frame)
    pub const FRAME_RATE: u32 = 60;
    /// Trajectory points kept per vehicle (one minute at 60 Hz)
    pub const TRAJECTORY_LIMIT: usize = 3600;

    /// Vehicle body radius
    pub const BODY_RADIUS: f32 = 10.0;
    /// Sensor whisker thickness
    pub const SENSOR_LINE_WIDTH: f32 = 2.0;
    /// Trail thickness
    pub const TRAIL_WIDTH: f32 = 2.0;
    /// Label position relative to the body center
    pub const LABEL_OFFSET: (f32, f32) = (-10.0, -30.0);
    /// Label pixel scale (5x7 glyphs -> 10x14 px)
    pub const LABEL_SCALE: f32 = 2.0;

    pub const WINDOW_TITLE: &str = "Braitenberg Vehicles: Fear and Aggression";
}

/// Offset of `length` along `direction` in screen space (y grows downward)
#[inline]
pub fn screen_offset(length: f64, direction: f64) -> DVec2 {
    DVec2::new(length * direction.cos(), -length * direction.sin())
}

/// Wrap a coordinate into [0, extent)
///
/// `rem_euclid` can round a tiny negative value up to `extent` itself, which
/// would break the half-open bound, so that case folds back to 0.
#[inline]
pub fn wrap_coordinate(value: f64, extent: f64) -> f64 {
    let wrapped = value.rem_euclid(extent);
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Wrap a position onto the torus [0, size.x) x [0, size.y)
#[inline]
pub fn wrap_position(pos: DVec2, size: DVec2) -> DVec2 {
    DVec2::new(wrap_coordinate(pos.x, size.x), wrap_coordinate(pos.y, size.y))
}
