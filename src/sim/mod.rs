//! Deterministic simulation module
//!
//! All vehicle logic lives here. This module must stay pure:
//! - One fixed step per frame, no wall-clock time
//! - Randomness only at spawn, from an injected source
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;
pub mod trajectory;
pub mod vehicle;
pub mod world;

pub use state::SimState;
pub use tick::tick;
pub use trajectory::Trajectory;
pub use vehicle::{Behavior, SensorPoints, SensorReadings, Vehicle, WheelSpeeds};
pub use world::{LightSource, WorldConfig};
