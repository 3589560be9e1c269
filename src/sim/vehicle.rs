//! Braitenberg vehicle: two light sensors wired to two wheels
//!
//! Screen coordinates throughout: y grows downward, so a heading of π/2
//! points up the screen.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_4, TAU};

use super::trajectory::Trajectory;
use super::world::{LightSource, WorldConfig};
use crate::consts::*;
use crate::{screen_offset, wrap_position};

/// Sensor-to-motor wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Behavior {
    /// Each sensor drives the wheel on its own side; the vehicle turns away
    /// from the light and speeds up near it.
    Fear,
    /// Each sensor drives the opposite wheel through a reciprocal; the vehicle
    /// turns toward the light and charges it.
    Aggression,
}

impl Behavior {
    /// Braitenberg's vehicle numbers
    pub fn label(self) -> &'static str {
        match self {
            Behavior::Fear => "2a",
            Behavior::Aggression => "2b",
        }
    }

    /// Wheel speeds produced by this wiring for the given sensor distances
    pub fn wheel_speeds(self, readings: SensorReadings, min_speed: f64) -> WheelSpeeds {
        match self {
            Behavior::Fear => WheelSpeeds::clamped(
                BASE_SPEED + FEAR_GAIN * readings.left,
                BASE_SPEED + FEAR_GAIN * readings.right,
                min_speed,
            ),
            Behavior::Aggression => WheelSpeeds::clamped(
                BASE_SPEED + 1.0 / (AGGRESSION_GAIN * readings.right.max(SENSOR_EPSILON)),
                BASE_SPEED + 1.0 / (AGGRESSION_GAIN * readings.left.max(SENSOR_EPSILON)),
                min_speed,
            ),
        }
    }

    /// Heading change produced by a pair of wheel speeds
    pub fn turn(self, speeds: WheelSpeeds) -> f64 {
        match self {
            Behavior::Fear => (speeds.right - speeds.left) / FEAR_TURN_DIVISOR,
            Behavior::Aggression => (speeds.left - speeds.right) * AGGRESSION_TURN_GAIN,
        }
    }
}

/// World positions of the two sensor tips
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorPoints {
    /// Tip at heading - π/4
    pub left: DVec2,
    /// Tip at heading + π/4
    pub right: DVec2,
}

/// Distance from each sensor tip to the light center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReadings {
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelSpeeds {
    pub left: f64,
    pub right: f64,
}

impl WheelSpeeds {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Both wheels floored at `min_speed`
    pub fn clamped(left: f64, right: f64, min_speed: f64) -> Self {
        Self {
            left: left.max(min_speed),
            right: right.max(min_speed),
        }
    }

    #[inline]
    pub fn average(&self) -> f64 {
        (self.left + self.right) / 2.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub label: String,
    pub behavior: Behavior,
    pub pos: DVec2,
    /// Radians, never normalized
    pub heading: f64,
    pub speeds: WheelSpeeds,
    pub sensor_length: f64,
    pub trajectory: Trajectory,
}

impl Vehicle {
    /// Spawn at a uniformly random position and heading
    pub fn spawn<R: Rng + ?Sized>(
        behavior: Behavior,
        label: impl Into<String>,
        config: &WorldConfig,
        rng: &mut R,
    ) -> Self {
        let pos = DVec2::new(
            rng.random_range(0.0..config.width),
            rng.random_range(0.0..config.height),
        );
        let heading = rng.random_range(0.0..TAU);
        Self::placed(behavior, label, pos, heading, config)
    }

    /// Spawn at an explicit position and heading
    pub fn placed(
        behavior: Behavior,
        label: impl Into<String>,
        pos: DVec2,
        heading: f64,
        config: &WorldConfig,
    ) -> Self {
        Self {
            label: label.into(),
            behavior,
            pos,
            heading,
            speeds: WheelSpeeds::new(config.initial_speed, config.initial_speed),
            sensor_length: config.sensor_length,
            trajectory: Trajectory::new(pos, config.trajectory_limit),
        }
    }

    pub fn sensor_points(&self) -> SensorPoints {
        SensorPoints {
            left: self.pos + screen_offset(self.sensor_length, self.heading - FRAC_PI_4),
            right: self.pos + screen_offset(self.sensor_length, self.heading + FRAC_PI_4),
        }
    }

    pub fn sense(&self, light: &LightSource) -> SensorReadings {
        let sensors = self.sensor_points();
        SensorReadings {
            left: sensors.left.distance(light.center),
            right: sensors.right.distance(light.center),
        }
    }

    /// Advance one frame: sense, pick wheel speeds, turn, move, wrap, record
    pub fn update(&mut self, config: &WorldConfig) {
        let readings = self.sense(&config.light);
        let speeds = self.behavior.wheel_speeds(readings, config.min_speed);
        let turn = self.behavior.turn(speeds);
        self.drive(speeds, turn, config);
    }

    /// Apply wheel speeds and a heading change, then wrap onto the torus
    pub fn drive(&mut self, speeds: WheelSpeeds, turn: f64, config: &WorldConfig) {
        self.speeds = speeds;
        self.heading += turn;
        let step = screen_offset(speeds.average(), self.heading);
        self.pos = wrap_position(self.pos + step, config.size());
        self.trajectory.push(self.pos);
    }
}
