//! Native desktop frontend: a fixed-size winit window drawn with wgpu
//!
//! The event loop is pumped by hand once per frame instead of handing control
//! to `EventLoop::run_app`, so the frame loop stays a plain `while`.

use std::sync::Arc;
use std::time::Duration;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use super::clock::FrameClock;
use super::{Frontend, FrontendEvent};
use crate::error::AppError;
use crate::renderer::{DisplayList, RenderState, tessellate};
use crate::sim::WorldConfig;

/// Pumps allowed for the platform to deliver `resumed` and a window
const STARTUP_PUMPS: u32 = 100;
const STARTUP_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

/// Window-side state driven by winit callbacks
struct Shell {
    title: String,
    size: LogicalSize<f64>,
    world_size: Vec2,
    window: Option<Arc<Window>>,
    renderer: Option<RenderState>,
    events: Vec<FrontendEvent>,
    error: Option<AppError>,
}

impl Shell {
    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let attrs = Window::default_attributes()
            .with_title(self.title.as_str())
            .with_inner_size(self.size)
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs)?);
        let renderer = pollster::block_on(RenderState::new(window.clone(), self.world_size))?;

        log::info!(
            "Window open: {}x{} physical px",
            renderer.size.0,
            renderer.size.1
        );
        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }
}

impl ApplicationHandler for Shell {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.error.is_some() {
            return;
        }
        if let Err(e) = self.open(event_loop) {
            self.error = Some(e);
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                self.events.push(FrontendEvent::QuitRequested);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                log::info!("Escape pressed");
                self.events.push(FrontendEvent::QuitRequested);
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            _ => {}
        }
    }
}

pub struct DesktopFrontend {
    event_loop: EventLoop<()>,
    shell: Shell,
    clock: FrameClock,
}

impl DesktopFrontend {
    /// Create the window and GPU surface; fails if either is unavailable
    pub fn open(title: &str, config: &WorldConfig) -> Result<Self, AppError> {
        let event_loop = EventLoop::new()?;
        let mut frontend = Self {
            event_loop,
            shell: Shell {
                title: title.to_owned(),
                size: LogicalSize::new(config.width, config.height),
                world_size: config.size().as_vec2(),
                window: None,
                renderer: None,
                events: Vec::new(),
                error: None,
            },
            clock: FrameClock::new(config.frame_rate),
        };

        // `resumed` (and so window creation) only fires inside a pump
        for _ in 0..STARTUP_PUMPS {
            frontend.pump(STARTUP_PUMP_TIMEOUT)?;
            if frontend.shell.renderer.is_some() {
                return Ok(frontend);
            }
        }
        Err(AppError::WindowUnavailable(STARTUP_PUMPS))
    }

    fn pump(&mut self, timeout: Duration) -> Result<(), AppError> {
        let status = self
            .event_loop
            .pump_app_events(Some(timeout), &mut self.shell);
        if let PumpStatus::Exit(code) = status {
            log::debug!("Event loop exited with code {}", code);
            self.shell.events.push(FrontendEvent::QuitRequested);
        }
        match self.shell.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Frontend for DesktopFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>, AppError> {
        self.pump(Duration::ZERO)?;
        Ok(std::mem::take(&mut self.shell.events))
    }

    fn present(&mut self, frame: &DisplayList) -> Result<(), AppError> {
        let Some(renderer) = self.shell.renderer.as_mut() else {
            log::warn!("No renderer, dropping frame");
            return Ok(());
        };

        match renderer.render(&tessellate(frame)) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.reconfigure();
                Ok(())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                Err(AppError::OutOfMemory)
            }
            Err(e) => {
                log::warn!("Render error: {:?}", e);
                Ok(())
            }
        }
    }

    fn wait_for_next_frame(&mut self) {
        self.clock.tick();
    }
}

impl Drop for DesktopFrontend {
    fn drop(&mut self) {
        // Surface and window must go before the event loop that created them
        self.shell.renderer = None;
        self.shell.window = None;
        log::debug!("Window and GPU resources released");
    }
}
