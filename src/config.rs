//! # Starfield Configuration
//!
//! The handful of constants that shape the animation, gathered into one
//! immutable struct that is built once at startup and passed by reference.

use crate::simulation::DeadZone;
use crate::{StarfieldError, StarfieldResult};
use serde::{Deserialize, Serialize};

/// Relative path of the star texture.
pub const DEFAULT_TEXTURE_PATH: &str = "res/star.png";

/// Configuration for the starfield.
///
/// Depth values are in world units along the viewing axis; `radius` is the
/// on-screen half-size of a star sitting at depth 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarfieldConfig {
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Number of stars, fixed for the lifetime of the field
    pub star_count: usize,
    /// Near plane; stars passing it are recycled
    pub near: f32,
    /// Far plane; recycled stars reappear here
    pub far: f32,
    /// Quad half-size at unit depth
    pub radius: f32,
    /// Depth units travelled per second
    pub speed: f32,
    /// Frame rate cap, also fixes the simulation step
    pub max_fps: u32,
    /// Exponent of the brightness falloff curve
    pub brightness_power: u32,
    /// Path of the star texture
    pub texture_path: String,
}

impl StarfieldConfig {
    /// Creates the dense configuration: a huge field with a deep far plane.
    ///
    /// # Examples
    ///
    /// ```
    /// use starfield::StarfieldConfig;
    ///
    /// let config = StarfieldConfig::new();
    /// assert!(config.near > 0.0);
    /// assert!(config.far > config.near);
    /// ```
    pub fn new() -> Self {
        Self {
            window_width: 2560,
            window_height: 1440,
            star_count: 600_000,
            near: 0.1,
            far: 100.0,
            radius: 100.0,
            speed: 1.0,
            max_fps: 60,
            brightness_power: 2,
            texture_path: DEFAULT_TEXTURE_PATH.to_string(),
        }
    }

    /// Creates the compact configuration: fewer stars, a shallow field and a
    /// high refresh rate.
    pub fn compact() -> Self {
        Self {
            window_width: 2560,
            window_height: 1440,
            star_count: 10_000,
            near: 0.1,
            far: 10.0,
            radius: 40.0,
            speed: 0.5,
            max_fps: 144,
            brightness_power: 1,
            texture_path: DEFAULT_TEXTURE_PATH.to_string(),
        }
    }

    /// Creates a small configuration for tests.
    pub fn for_testing() -> Self {
        Self {
            window_width: 320,
            window_height: 200,
            star_count: 1_000,
            near: 0.1,
            far: 10.0,
            radius: 4.0,
            speed: 1.0,
            max_fps: 60,
            brightness_power: 2,
            texture_path: DEFAULT_TEXTURE_PATH.to_string(),
        }
    }

    /// Fixed simulation step in seconds.
    pub fn dt(&self) -> f32 {
        1.0 / self.max_fps as f32
    }

    /// Scale applied to the window extent when scattering stars.
    ///
    /// Stars are placed at unit depth, so scaling by the far plane keeps the
    /// deepest stars spread across the whole screen once projected.
    pub fn spread_scale(&self) -> f32 {
        self.far
    }

    /// Window extent as floats.
    pub fn window_size(&self) -> (f32, f32) {
        (self.window_width as f32, self.window_height as f32)
    }

    /// Rectangle around the focal point where no star may spawn.
    pub fn dead_zone(&self) -> DeadZone {
        let (width, height) = self.window_size();
        DeadZone::centered(width * self.near, height * self.near)
    }

    /// Checks the structural constraints the simulation relies on.
    pub fn validate(&self) -> StarfieldResult<()> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(StarfieldError::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if self.star_count == 0 {
            return Err(StarfieldError::InvalidConfig(
                "star count must be at least 1".to_string(),
            ));
        }
        if self.near.is_nan() || self.near <= 0.0 {
            return Err(StarfieldError::InvalidConfig(format!(
                "near plane must be positive, got {}",
                self.near
            )));
        }
        if self.far.is_nan() || self.far <= self.near {
            return Err(StarfieldError::InvalidConfig(format!(
                "far plane ({}) must lie beyond near plane ({})",
                self.far, self.near
            )));
        }
        if self.radius.is_nan() || self.radius <= 0.0 {
            return Err(StarfieldError::InvalidConfig(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        if self.speed.is_nan() || self.speed < 0.0 {
            return Err(StarfieldError::InvalidConfig(format!(
                "speed must not be negative, got {}",
                self.speed
            )));
        }
        if self.max_fps == 0 {
            return Err(StarfieldError::InvalidConfig(
                "frame rate cap must be at least 1".to_string(),
            ));
        }
        if self.brightness_power == 0 {
            return Err(StarfieldError::InvalidConfig(
                "brightness power must be at least 1".to_string(),
            ));
        }
        // A step longer than the field is deep would wrap past the far plane.
        if self.speed * self.dt() >= self.far - self.near {
            return Err(StarfieldError::InvalidConfig(format!(
                "step of {} per frame exceeds field depth {}",
                self.speed * self.dt(),
                self.far - self.near
            )));
        }
        Ok(())
    }
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self::new()
    }
}
