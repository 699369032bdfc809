//! # Starfield
//!
//! A warp-speed starfield animation: thousands of stars rush toward the camera,
//! drawn as depth-scaled textured quads that brighten as they approach.
//!
//! ## Architecture Overview
//!
//! The crate is split into a small simulation core and thin adapters around
//! the windowing library:
//!
//! - **Configuration**: one immutable [`StarfieldConfig`] built at startup
//! - **Simulation**: star generation, depth advance and in-place recycling
//! - **Projection**: perspective projection of stars into screen-space quads
//! - **Rendering**: the [`FrameSurface`] capability and the frame loop driving it
//! - **Input**: mapping window-close and Escape onto loop termination
//!
//! The simulation and projection modules never touch macroquad, so they can be
//! exercised headless in tests and benchmarks.

pub mod config;
pub mod input;
pub mod projection;
pub mod rendering;
pub mod simulation;

pub use config::*;
pub use input::*;
pub use projection::*;
pub use rendering::*;
pub use simulation::*;

/// Core error type for the starfield.
#[derive(thiserror::Error, Debug)]
pub enum StarfieldError {
    /// The star texture could not be loaded
    #[error("Failed to load asset '{path}': {message}")]
    AssetLoad { path: String, message: String },

    /// Configuration violates a structural constraint
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type used throughout the starfield codebase.
pub type StarfieldResult<T> = Result<T, StarfieldError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
