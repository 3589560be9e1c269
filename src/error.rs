//! Fatal error type
//!
//! Everything here ends the run: the entry point logs it and exits non-zero.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to acquire graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("graphics device ran out of memory")]
    OutOfMemory,

    #[error("window did not become ready after {0} event pumps")]
    WindowUnavailable(u32),
}
