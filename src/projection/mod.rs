//! # Projection Module
//!
//! Perspective projection of stars into screen-space quads, plus the
//! depth-based brightness falloff.
//!
//! Screen coordinates here are relative to the view center; the renderer adds
//! the centering translation.

use crate::{Star, StarField, StarfieldConfig};
use serde::{Deserialize, Serialize};

/// A 2D point in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Distance from the view center.
    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// Axis-aligned quad for one projected star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadGeometry {
    pub center: Point,
    /// Half-size of the quad after foreshortening
    pub radius: f32,
    /// Top-left, top-right, bottom-right, bottom-left
    pub corners: [Point; 4],
}

/// Neutral gray level applied equally to R, G and B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Gray(pub u8);

impl Gray {
    /// Channel value.
    pub fn level(self) -> u8 {
        self.0
    }

    /// RGBA bytes with full opacity.
    pub fn rgba(self) -> [u8; 4] {
        [self.0, self.0, self.0, 255]
    }
}

/// Geometry and color of one star, ready for submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarQuad {
    pub geometry: QuadGeometry,
    pub color: Gray,
}

/// Raises `x` to a small integer power by repeated multiplication.
///
/// # Examples
///
/// ```
/// use starfield::fast_pow;
///
/// assert_eq!(fast_pow(0.5, 2), 0.25);
/// assert_eq!(fast_pow(3.0, 0), 1.0);
/// ```
pub fn fast_pow(x: f32, power: u32) -> f32 {
    let mut result = 1.0;
    for _ in 0..power {
        result *= x;
    }
    result
}

/// Projects a star onto the screen plane.
///
/// `near` and `far` are accepted so the projector shares the simulator's
/// signature; projection itself only depends on depth.
pub fn project(star: &Star, radius: f32, _near: f32, _far: f32) -> QuadGeometry {
    let scale = 1.0 / star.depth;
    let center = Point::new(star.x * scale, star.y * scale);
    let r = radius * scale;

    QuadGeometry {
        center,
        radius: r,
        corners: [
            Point::new(center.x - r, center.y - r),
            Point::new(center.x + r, center.y - r),
            Point::new(center.x + r, center.y + r),
            Point::new(center.x - r, center.y + r),
        ],
    }
}

/// Computes the gray level of a star: full white at the near plane fading to
/// black at the far plane along `(1 - ratio)^power`.
pub fn colorize(star: &Star, near: f32, far: f32, power: u32) -> Gray {
    let depth_ratio = (star.depth - near) / (far - near);
    let brightness = fast_pow(1.0 - depth_ratio, power).clamp(0.0, 1.0);
    Gray((brightness * 255.0) as u8)
}

/// Projects and colors a single star with the settings from `config`.
pub fn project_star(star: &Star, config: &StarfieldConfig) -> StarQuad {
    StarQuad {
        geometry: project(star, config.radius, config.near, config.far),
        color: colorize(star, config.near, config.far, config.brightness_power),
    }
}

/// Projects the whole field in painter's order, farthest star first.
pub fn project_field<'a>(
    field: &'a StarField,
    config: &'a StarfieldConfig,
) -> impl Iterator<Item = StarQuad> + 'a {
    field
        .iter_far_to_near()
        .map(move |star| project_star(star, config))
}
