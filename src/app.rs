//! Frame loop: poll, tick, draw, present, wait
//!
//! Two states only. `Running` until the frontend reports a quit, then
//! `Stopped` for good.

use crate::error::AppError;
use crate::platform::{Frontend, FrontendEvent};
use crate::renderer::compose;
use crate::sim::{SimState, tick};

/// Frames between periodic debug snapshots (10 s at 60 Hz)
const SNAPSHOT_INTERVAL: u64 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// What a finished run leaves behind
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Frames simulated and presented
    pub frames: u64,
    pub final_state: SimState,
}

pub struct App<F: Frontend> {
    sim: SimState,
    frontend: F,
    state: LoopState,
}

impl<F: Frontend> App<F> {
    pub fn new(sim: SimState, frontend: F) -> Self {
        Self {
            sim,
            frontend,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn sim(&self) -> &SimState {
        &self.sim
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Run one loop iteration
    ///
    /// A quit seen while polling stops the loop before anything else in the
    /// iteration runs.
    pub fn step(&mut self) -> Result<LoopState, AppError> {
        if self.state == LoopState::Stopped {
            return Ok(LoopState::Stopped);
        }

        let events = self.frontend.poll_events()?;
        if events.contains(&FrontendEvent::QuitRequested) {
            log::info!("Quit requested after {} frames", self.sim.frame);
            self.state = LoopState::Stopped;
            return Ok(self.state);
        }

        tick(&mut self.sim);
        if self.sim.frame % SNAPSHOT_INTERVAL == 0 {
            for v in &self.sim.vehicles {
                log::debug!(
                    "frame {} {}: pos=({:.1}, {:.1}) heading={:.2}",
                    self.sim.frame,
                    v.label,
                    v.pos.x,
                    v.pos.y,
                    v.heading
                );
            }
        }

        let frame = compose(&self.sim);
        self.frontend.present(&frame)?;
        self.frontend.wait_for_next_frame();
        Ok(self.state)
    }

    /// Loop until stopped; the frontend is dropped on return
    pub fn run(mut self) -> Result<RunSummary, AppError> {
        while self.step()? == LoopState::Running {}
        Ok(RunSummary {
            frames: self.sim.frame,
            final_state: self.sim,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DisplayList;

    /// Requests quit on the `quit_on_poll`-th poll (1-based)
    #[derive(Default)]
    struct ScriptedFrontend {
        quit_on_poll: usize,
        polls: usize,
        presented: Vec<usize>,
        waits: usize,
        fail_present: bool,
    }

    impl ScriptedFrontend {
        fn quitting_on(poll: usize) -> Self {
            Self {
                quit_on_poll: poll,
                ..Default::default()
            }
        }
    }

    impl Frontend for ScriptedFrontend {
        fn poll_events(&mut self) -> Result<Vec<FrontendEvent>, AppError> {
            self.polls += 1;
            if self.polls == self.quit_on_poll {
                Ok(vec![FrontendEvent::QuitRequested])
            } else {
                Ok(Vec::new())
            }
        }

        fn present(&mut self, frame: &DisplayList) -> Result<(), AppError> {
            if self.fail_present {
                return Err(AppError::OutOfMemory);
            }
            self.presented.push(frame.len());
            Ok(())
        }

        fn wait_for_next_frame(&mut self) {
            self.waits += 1;
        }
    }

    #[test]
    fn test_quit_on_first_poll() {
        let summary = App::new(SimState::new(1), ScriptedFrontend::quitting_on(1))
            .run()
            .unwrap();
        assert_eq!(summary.frames, 0);
        for v in &summary.final_state.vehicles {
            assert_eq!(v.trajectory.len(), 1);
        }
    }

    #[test]
    fn test_each_iteration_ticks_presents_and_waits() {
        let mut app = App::new(SimState::new(1), ScriptedFrontend::quitting_on(6));
        for expected in 1..=5 {
            assert_eq!(app.step().unwrap(), LoopState::Running);
            assert_eq!(app.sim().frame, expected);
        }
        assert_eq!(app.step().unwrap(), LoopState::Stopped);

        let f = app.frontend();
        assert_eq!(f.polls, 6);
        assert_eq!(f.presented.len(), 5);
        assert_eq!(f.waits, 5);
        assert!(f.presented.iter().all(|&n| n >= 2 + 2 * 4));
    }

    #[test]
    fn test_stopped_is_terminal() {
        let mut app = App::new(SimState::new(1), ScriptedFrontend::quitting_on(2));
        app.step().unwrap();
        assert_eq!(app.step().unwrap(), LoopState::Stopped);
        assert_eq!(app.step().unwrap(), LoopState::Stopped);
        assert_eq!(app.state(), LoopState::Stopped);
        assert_eq!(app.frontend().polls, 2);
        assert_eq!(app.sim().frame, 1);
    }

    #[test]
    fn test_run_reports_frames() {
        let summary = App::new(SimState::new(8), ScriptedFrontend::quitting_on(121))
            .run()
            .unwrap();
        assert_eq!(summary.frames, 120);
        assert_eq!(summary.final_state.frame, 120);
    }

    #[test]
    fn test_present_failure_ends_run() {
        let frontend = ScriptedFrontend {
            fail_present: true,
            ..Default::default()
        };
        let result = App::new(SimState::new(1), frontend).run();
        assert!(matches!(result, Err(AppError::OutOfMemory)));
    }
}
