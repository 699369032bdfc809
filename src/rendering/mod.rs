//! # Rendering Module
//!
//! The frame loop and the surface it draws on.
//!
//! The loop only knows the [`FrameSurface`] capability: poll for a stop signal,
//! submit an ordered batch of quads, present and wait for the next tick. The
//! macroquad-backed implementation lives in [`display`]; tests drive the loop
//! with an in-memory surface.

pub mod display;
pub mod frame_limiter;

pub use display::*;
pub use frame_limiter::*;

use crate::{project_field, FrameSignal, StarField, StarQuad, StarfieldConfig, StarfieldResult};
use log::{debug, info};
use std::time::{Duration, Instant};

/// Capability the frame loop needs from a display.
#[allow(async_fn_in_trait)]
pub trait FrameSurface {
    /// Drains pending events and reports whether to keep running.
    fn poll_events(&mut self) -> FrameSignal;

    /// Draws the quads in the given order; later quads paint over earlier ones.
    fn submit_quads(&mut self, quads: &[StarQuad]);

    /// Shows the frame and blocks until the next frame tick.
    async fn present_and_wait_for_frame(&mut self);
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Frames simulated and presented
    pub frames: u64,
    /// Total star recycles over the run
    pub recycled: u64,
}

/// Periodic frame-rate logging.
#[derive(Debug)]
struct FrameStats {
    window_start: Instant,
    window_frames: u32,
    log_interval: Duration,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            window_frames: 0,
            log_interval: Duration::from_secs(5),
        }
    }

    fn record_frame(&mut self) {
        self.window_frames += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed >= self.log_interval {
            debug!(
                "{:.1} fps over the last {:.1}s",
                self.window_frames as f64 / elapsed.as_secs_f64(),
                elapsed.as_secs_f64()
            );
            self.window_start = Instant::now();
            self.window_frames = 0;
        }
    }
}

/// Drives the simulation and a surface one frame at a time.
pub struct FrameLoop<'a> {
    config: &'a StarfieldConfig,
    quads: Vec<StarQuad>,
    stats: FrameStats,
}

impl<'a> FrameLoop<'a> {
    /// Creates a loop for `config`.
    pub fn new(config: &'a StarfieldConfig) -> Self {
        Self {
            config,
            quads: Vec::with_capacity(config.star_count),
            stats: FrameStats::new(),
        }
    }

    /// Runs one frame: advance, project, submit. Does not present.
    ///
    /// Returns the number of stars recycled this frame.
    pub fn step<S: FrameSurface>(&mut self, field: &mut StarField, surface: &mut S) -> usize {
        let recycled = field.advance(self.config.speed, self.config.dt());

        self.quads.clear();
        self.quads.extend(project_field(field, self.config));
        surface.submit_quads(&self.quads);

        recycled
    }

    /// Runs until the surface reports [`FrameSignal::Terminate`].
    ///
    /// The stop signal is checked once per frame, before any update, so a
    /// terminated loop never advances the field again.
    pub async fn run<S: FrameSurface>(
        &mut self,
        field: &mut StarField,
        surface: &mut S,
    ) -> StarfieldResult<FrameReport> {
        info!(
            "Starting frame loop: {} stars at {} fps",
            field.len(),
            self.config.max_fps
        );

        let mut report = FrameReport::default();
        loop {
            if surface.poll_events() == FrameSignal::Terminate {
                break;
            }

            let recycled = self.step(field, surface);
            report.recycled += recycled as u64;

            surface.present_and_wait_for_frame().await;
            report.frames += 1;
            self.stats.record_frame();
        }

        info!(
            "Frame loop ended after {} frames ({} recycles)",
            report.frames, report.recycled
        );
        Ok(report)
    }
}
