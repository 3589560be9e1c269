//! Fixed-rate frame limiter

use std::time::{Duration, Instant};

/// Blocks the loop so frames start at most `fps` times per second
///
/// A frame that runs late is not made up for: the schedule restarts from the
/// late tick.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / fps.max(1),
            last_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Record a tick at `now` and return how long to wait before it
    pub fn schedule(&mut self, now: Instant) -> Duration {
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return Duration::ZERO;
        };

        let target = last + self.interval;
        if now < target {
            self.last_tick = Some(target);
            target - now
        } else {
            self.last_tick = Some(now);
            Duration::ZERO
        }
    }

    /// Sleep until the next frame boundary
    pub fn tick(&mut self) {
        let wait = self.schedule(Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
    }
}
