//! # Input Module
//!
//! Window and keyboard input, reduced to the single question the frame loop
//! asks: keep going or stop.

use log::info;
use macroquad::prelude::*;

/// Outcome of polling events for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSignal {
    /// Keep running
    Continue,
    /// Leave the frame loop
    Terminate,
}

/// Raw input events the starfield reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window's close button or the OS asked the app to quit
    CloseRequested,
    /// Escape was pressed
    EscapePressed,
}

/// Input handler for the starfield window.
///
/// Window close requests are intercepted with macroquad's `prevent_quit` so the
/// loop can finish its frame and shut down cleanly instead of being torn down
/// mid-draw.
pub struct InputHandler {
    /// Whether Escape terminates the animation
    pub escape_quits: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use starfield::InputHandler;
    ///
    /// let input_handler = InputHandler::new();
    /// assert!(input_handler.escape_quits);
    /// ```
    pub fn new() -> Self {
        Self { escape_quits: true }
    }

    /// Takes over window-close handling from macroquad. Call once after the
    /// window exists.
    pub fn install(&self) {
        prevent_quit();
    }

    /// Collects this frame's events from macroquad.
    pub fn poll_events(&self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if is_quit_requested() {
            events.push(InputEvent::CloseRequested);
        }
        if is_key_pressed(KeyCode::Escape) {
            events.push(InputEvent::EscapePressed);
        }
        events
    }

    /// Polls macroquad and reduces the events to a frame signal.
    pub fn poll(&self) -> FrameSignal {
        self.signal_for(&self.poll_events())
    }

    /// Reduces a batch of events to a frame signal.
    pub fn signal_for(&self, events: &[InputEvent]) -> FrameSignal {
        for event in events {
            match event {
                InputEvent::CloseRequested => {
                    info!("Window close requested");
                    return FrameSignal::Terminate;
                }
                InputEvent::EscapePressed if self.escape_quits => {
                    info!("Escape pressed");
                    return FrameSignal::Terminate;
                }
                InputEvent::EscapePressed => {}
            }
        }
        FrameSignal::Continue
    }
}
