//! Property tests for star generation, travel and projection.

use proptest::prelude::*;
use starfield::{
    colorize, create_rng, generate_stars, project, DeadZone, Gray, Star, StarField,
    StarfieldConfig,
};

const NEAR: f32 = 0.1;
const FAR: f32 = 10.0;

fn small_field(seed: u64, count: usize) -> StarField {
    let mut config = StarfieldConfig::for_testing();
    config.star_count = count;
    let mut rng = create_rng(seed);
    StarField::initialize(&config, &mut rng).expect("valid test config")
}

proptest! {
    #[test]
    fn generated_stars_respect_bounds(seed in any::<u64>(), count in 1usize..300) {
        let config = StarfieldConfig::for_testing();
        let zone = config.dead_zone();
        let field = small_field(seed, count);

        prop_assert_eq!(field.len(), count);
        for star in field.stars() {
            prop_assert!(star.depth >= config.near && star.depth <= config.far);
            prop_assert!(!zone.contains(star.x, star.y));
        }
    }

    #[test]
    fn generated_stars_are_sorted(seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let stars = generate_stars(
            1000,
            NEAR,
            FAR,
            FAR,
            (320.0, 200.0),
            DeadZone::centered(32.0, 20.0),
            &mut rng,
        );
        prop_assert_eq!(stars.len(), 1000);
        for pair in stars.windows(2) {
            prop_assert!(pair[0].depth >= pair[1].depth);
        }
    }

    #[test]
    fn depth_stays_in_range_while_travelling(seed in any::<u64>(), frames in 1usize..400) {
        let config = StarfieldConfig::for_testing();
        let mut field = small_field(seed, 200);

        for _ in 0..frames {
            field.advance(config.speed, config.dt());
        }
        for star in field.stars() {
            prop_assert!(star.depth >= config.near && star.depth <= config.far);
        }
    }

    #[test]
    fn star_just_past_near_plane_wraps_to_far(epsilon in 0.0f32..0.015) {
        let step = 1.0f32 / 60.0;
        let mut star = Star::new(5.0, -5.0, NEAR + epsilon);

        prop_assert!(star.advance(step, NEAR, FAR));
        prop_assert!(star.depth > FAR - NEAR && star.depth <= FAR);
        prop_assert_eq!((star.x, star.y), (5.0, -5.0));
    }

    #[test]
    fn doubling_depth_halves_projection(
        x in -1000.0f32..1000.0,
        y in -1000.0f32..1000.0,
        depth in 0.1f32..50.0,
    ) {
        let a = project(&Star::new(x, y, depth), 40.0, NEAR, FAR);
        let b = project(&Star::new(x, y, depth * 2.0), 40.0, NEAR, FAR);

        prop_assert!((a.radius - 2.0 * b.radius).abs() <= a.radius * 1e-5);
        let distance = a.center.length();
        prop_assert!((distance - 2.0 * b.center.length()).abs() <= distance * 1e-5 + 1e-6);
    }

    #[test]
    fn brightness_never_increases_with_depth(
        d1 in NEAR..FAR,
        d2 in NEAR..FAR,
        power in 1u32..4,
    ) {
        let (nearer, farther) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
        let bright = colorize(&Star::new(0.0, 0.0, nearer), NEAR, FAR, power);
        let dim = colorize(&Star::new(0.0, 0.0, farther), NEAR, FAR, power);
        prop_assert!(bright >= dim);
    }
}

#[test]
fn near_plane_star_end_to_end() {
    let star = Star::new(1.0, 1.0, NEAR);
    let quad = project(&star, 40.0, NEAR, FAR);

    assert!((quad.radius - 400.0).abs() < 1e-2);
    assert_eq!(colorize(&star, NEAR, FAR, 1), Gray(255));
    assert_eq!(colorize(&star, NEAR, FAR, 2), Gray(255));
    assert!(colorize(&star, NEAR, FAR, 2) > colorize(&Star::new(1.0, 1.0, FAR), NEAR, FAR, 2));
}
