//! Platform abstraction layer
//!
//! The frame loop only talks to a [`Frontend`]: something that delivers
//! input events, shows a finished frame and paces the loop.
//! - `clock`: fixed-rate frame limiter
//! - `desktop`: winit window + wgpu renderer

pub mod clock;
pub mod desktop;

pub use clock::FrameClock;
pub use desktop::DesktopFrontend;

use crate::error::AppError;
use crate::renderer::DisplayList;

/// Signals delivered from the windowing side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendEvent {
    /// Window closed or Escape pressed
    QuitRequested,
}

pub trait Frontend {
    /// Drain events that arrived since the last call (never blocks)
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>, AppError>;

    /// Draw and present one frame
    fn present(&mut self, frame: &DisplayList) -> Result<(), AppError>;

    /// Block until the next frame should start
    fn wait_for_next_frame(&mut self);
}
