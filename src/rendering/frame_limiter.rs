//! # Frame Limiter
//!
//! Caps the frame rate by sleeping out whatever is left of each frame
//! interval after presenting.

use std::time::{Duration, Instant};

/// Fixed-interval frame pacing.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    interval: Duration,
    deadline: Instant,
}

impl FrameLimiter {
    /// Creates a limiter for `max_fps` frames per second starting now.
    pub fn new(max_fps: u32) -> Self {
        Self::starting_at(max_fps, Instant::now())
    }

    /// Creates a limiter whose first frame began at `start`.
    pub fn starting_at(max_fps: u32, start: Instant) -> Self {
        let interval = Duration::from_secs_f64(1.0 / f64::from(max_fps.max(1)));
        Self {
            interval,
            deadline: start + interval,
        }
    }

    /// Length of one frame.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns how long to sleep at `now` and schedules the next deadline.
    ///
    /// A frame that overran its deadline does not sleep, and the schedule
    /// restarts from `now` rather than trying to catch up.
    pub fn wait_duration(&mut self, now: Instant) -> Duration {
        if now >= self.deadline {
            self.deadline = now + self.interval;
            return Duration::ZERO;
        }
        let remaining = self.deadline - now;
        self.deadline += self.interval;
        remaining
    }

    /// Blocks until the current frame interval has elapsed.
    pub fn wait(&mut self) {
        let remaining = self.wait_duration(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}
