//! # Star Spawning
//!
//! Uniform scattering of stars over a world-space rectangle, keeping the
//! focal point clear.

use super::Star;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world units where stars may not spawn.
///
/// Containment is half-open: the left and top edges are inside, the right and
/// bottom edges are not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeadZone {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

impl DeadZone {
    /// Creates a zone of the given size centered on the origin.
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            min_x: -width * 0.5,
            min_y: -height * 0.5,
            width,
            height,
        }
    }

    /// Returns true if the point lies inside the zone.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x
            && x < self.min_x + self.width
            && y >= self.min_y
            && y < self.min_y + self.height
    }
}

/// Sampling bounds for one star field.
#[derive(Debug, Clone, Copy)]
pub struct SpawnArea {
    /// Full width of the scatter rectangle, centered on the origin
    pub width: f32,
    /// Full height of the scatter rectangle, centered on the origin
    pub height: f32,
    /// Region kept free of stars
    pub dead_zone: DeadZone,
    pub near: f32,
    pub far: f32,
}

impl SpawnArea {
    /// Draws one star, resampling until its position clears the dead zone.
    ///
    /// The dead zone must be strictly smaller than the scatter rectangle or
    /// this never returns.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Star {
        loop {
            let x = (rng.gen::<f32>() - 0.5) * self.width;
            let y = (rng.gen::<f32>() - 0.5) * self.height;
            if self.dead_zone.contains(x, y) {
                continue;
            }

            let depth = self.near + rng.gen::<f32>() * (self.far - self.near);
            return Star::new(x, y, depth);
        }
    }
}
