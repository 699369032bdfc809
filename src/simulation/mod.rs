//! # Simulation Module
//!
//! The star field itself: generation, forward travel and recycling.
//!
//! Stars are generated once, sorted farthest-first and never reordered in
//! memory afterwards. Each tick every star moves toward the camera; a star that
//! passes the near plane is pushed back to the far plane and the [`DrawOrder`]
//! ring is rotated so that iteration still runs farthest to nearest.

pub mod draw_order;
pub mod spawn;

pub use draw_order::*;
pub use spawn::*;

use crate::{StarfieldConfig, StarfieldResult};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// A single star.
///
/// `x` and `y` are world units at unit depth; the projector divides them by
/// `depth` to get screen offsets from the view center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    /// Distance from the camera along the viewing axis
    pub depth: f32,
}

impl Star {
    /// Creates a new star.
    pub fn new(x: f32, y: f32, depth: f32) -> Self {
        Self { x, y, depth }
    }

    /// Moves the star `step` closer to the camera, wrapping it to the far
    /// plane once it crosses `near`. Returns true if the star was recycled.
    ///
    /// The overshoot past the near plane is preserved so the star reappears
    /// exactly where continuous travel would have put it. Position is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use starfield::Star;
    ///
    /// let mut star = Star::new(1.0, 1.0, 0.15);
    /// assert!(star.advance(0.1, 0.1, 10.0));
    /// assert!((star.depth - 9.95).abs() < 1e-5);
    /// ```
    pub fn advance(&mut self, step: f32, near: f32, far: f32) -> bool {
        self.depth -= step;
        if self.depth < near {
            self.depth = far - (near - self.depth);
            true
        } else {
            false
        }
    }
}

/// Creates the random number generator used for star placement.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generates `count` stars sorted by descending depth.
///
/// Positions are uniform over the window extent scaled by `spread_scale`,
/// excluding `dead_zone`; depths are uniform in `[near, far)`.
pub fn generate_stars<R: Rng>(
    count: usize,
    near: f32,
    far: f32,
    spread_scale: f32,
    window_size: (f32, f32),
    dead_zone: DeadZone,
    rng: &mut R,
) -> Vec<Star> {
    let area = SpawnArea {
        width: window_size.0 * spread_scale,
        height: window_size.1 * spread_scale,
        dead_zone,
        near,
        far,
    };

    let mut stars: Vec<Star> = (0..count).map(|_| area.sample(rng)).collect();
    sort_far_to_near(&mut stars);
    stars
}

/// Sorts stars farthest-first for painter's-algorithm drawing.
pub fn sort_far_to_near(stars: &mut [Star]) {
    stars.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}

/// The complete simulated star field.
#[derive(Debug, Clone)]
pub struct StarField {
    stars: Vec<Star>,
    order: DrawOrder,
    near: f32,
    far: f32,
}

impl StarField {
    /// Generates a star field for `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use starfield::{create_rng, StarField, StarfieldConfig};
    ///
    /// let config = StarfieldConfig::for_testing();
    /// let mut rng = create_rng(42);
    /// let field = StarField::initialize(&config, &mut rng).unwrap();
    /// assert_eq!(field.len(), config.star_count);
    /// ```
    pub fn initialize<R: Rng>(
        config: &StarfieldConfig,
        rng: &mut R,
    ) -> StarfieldResult<Self> {
        config.validate()?;

        let stars = generate_stars(
            config.star_count,
            config.near,
            config.far,
            config.spread_scale(),
            config.window_size(),
            config.dead_zone(),
            rng,
        );
        debug!(
            "Generated {} stars between depth {} and {}",
            stars.len(),
            config.near,
            config.far
        );

        Ok(Self::from_sorted(stars, config.near, config.far))
    }

    /// Wraps an already farthest-first sorted collection.
    pub fn from_sorted(stars: Vec<Star>, near: f32, far: f32) -> Self {
        let order = DrawOrder::new(stars.len());
        Self {
            stars,
            order,
            near,
            far,
        }
    }

    /// Advances every star by `speed * dt`, recycling those that pass the
    /// near plane. Returns how many stars were recycled.
    pub fn advance(&mut self, speed: f32, dt: f32) -> usize {
        let step = speed * dt;
        let mut recycled = 0;
        for star in &mut self.stars {
            if star.advance(step, self.near, self.far) {
                self.order.rotate_back();
                recycled += 1;
            }
        }
        if recycled > 0 {
            trace!("Recycled {} stars, front now {}", recycled, self.order.front());
        }
        recycled
    }

    /// Stars in physical storage order.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Current draw-order ring.
    pub fn draw_order(&self) -> &DrawOrder {
        &self.order
    }

    /// Stars in painter's order, farthest first.
    pub fn iter_far_to_near(&self) -> impl Iterator<Item = &Star> + '_ {
        self.order.logical_order().map(move |i| &self.stars[i])
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_field(seed: u64) -> StarField {
        let config = StarfieldConfig::for_testing();
        let mut rng = create_rng(seed);
        StarField::initialize(&config, &mut rng).unwrap()
    }

    #[test]
    fn test_star_advance_without_recycle() {
        let mut star = Star::new(3.0, -2.0, 5.0);
        assert!(!star.advance(0.5, 0.1, 10.0));
        assert_eq!(star.depth, 4.5);
        assert_eq!((star.x, star.y), (3.0, -2.0));
    }

    #[test]
    fn test_star_recycle_keeps_position() {
        let mut star = Star::new(3.0, -2.0, 0.12);
        assert!(star.advance(0.05, 0.1, 10.0));
        assert!((star.depth - 9.97).abs() < 1e-5);
        assert_eq!((star.x, star.y), (3.0, -2.0));
    }

    #[test]
    fn test_initialize_sorts_far_to_near() {
        let field = test_field(12345);
        assert_eq!(field.len(), 1_000);
        for pair in field.stars().windows(2) {
            assert!(pair[0].depth >= pair[1].depth);
        }
    }

    #[test]
    fn test_initialize_rejects_invalid_config() {
        let mut config = StarfieldConfig::for_testing();
        config.far = 0.05;
        let mut rng = create_rng(1);
        assert!(StarField::initialize(&config, &mut rng).is_err());
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = test_field(99);
        let b = test_field(99);
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn test_recycle_rotates_front() {
        let stars = vec![
            Star::new(1.0, 1.0, 5.0),
            Star::new(1.0, 1.0, 3.0),
            Star::new(1.0, 1.0, 0.11),
        ];
        let mut field = StarField::from_sorted(stars, 0.1, 10.0);

        let recycled = field.advance(1.0, 0.05);
        assert_eq!(recycled, 1);
        assert_eq!(field.draw_order().front(), 2);

        let depths: Vec<f32> = field.iter_far_to_near().map(|s| s.depth).collect();
        assert!((depths[0] - 9.96).abs() < 1e-5);
        assert!((depths[1] - 4.95).abs() < 1e-5);
        assert!((depths[2] - 2.95).abs() < 1e-5);
    }

    #[test]
    fn test_logical_order_stays_sorted() {
        let mut field = test_field(2024);
        let config = StarfieldConfig::for_testing();

        // Long enough for every star to recycle at least once.
        for _ in 0..700 {
            field.advance(config.speed, config.dt());
        }

        let depths: Vec<f32> = field.iter_far_to_near().map(|s| s.depth).collect();
        for pair in depths.windows(2) {
            assert!(pair[0] + 1e-3 >= pair[1], "{} < {}", pair[0], pair[1]);
        }
    }
}
