#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use creatures::simulation::obstacle::Obstacle;
use creatures::simulation::params::Params;
use creatures::simulation::surface::{NO_HIT, OccupancySurface};

fn create_test_params() -> Params {
    Params {
        seed: Some(7),
        ..Params::default()
    }
}

/// Horizontal segment from arena (50, 100) to (150, 100).
fn horizontal_obstacle() -> Obstacle {
    Obstacle {
        x: 50.0,
        y: 100.0,
        angle: 0.0,
        dx: 1.0,
        dy: 1.0,
        length: 100.0,
    }
}

#[test]
fn test_surface_covers_border() {
    let params = create_test_params();
    let surface = OccupancySurface::new(&params);

    assert_eq!(surface.width(), params.frame_width());
    assert_eq!(surface.height(), params.frame_height());
    assert_eq!(surface.border(), 16);
    assert!(surface.is_occupied(15, 300));
    assert!(!surface.is_occupied(16, 300));
    assert!(!surface.is_occupied(420, 735));
    assert!(surface.is_occupied(421, 735));
    assert!(surface.is_occupied(200, 736));
}

#[test]
fn test_ray_from_corner_outward_is_no_hit() {
    let surface = OccupancySurface::new(&create_test_params());
    assert_eq!(surface.distance_along_ray(0.0, 0.0, PI + FRAC_PI_4), NO_HIT);

    let (w, h) = (surface.width() as f32, surface.height() as f32);
    assert_eq!(surface.distance_along_ray(w, h, FRAC_PI_4), NO_HIT);
}

#[test]
fn test_obstacle_stroke_width() {
    let params = create_test_params();
    let mut surface = OccupancySurface::new(&params);
    surface.rasterize(&horizontal_obstacle(), params.obstacle_width);

    // The stroke sits on frame row 116 and is three cells thick.
    for y in 115..=117 {
        assert!(surface.is_occupied(100, y), "row {y} should be covered");
    }
    assert!(!surface.is_occupied(100, 114));
    assert!(!surface.is_occupied(100, 118));

    // Round cap one cell beyond the anchor, nothing two cells beyond.
    assert!(surface.is_occupied(65, 116));
    assert!(!surface.is_occupied(64, 116));
    assert!(surface.is_occupied(167, 116));
    assert!(!surface.is_occupied(168, 116));
}

#[test]
fn test_creature_next_to_stroke_senses_and_collides() {
    let params = create_test_params();
    let mut surface = OccupancySurface::new(&params);
    surface.rasterize(&horizontal_obstacle(), params.obstacle_width);

    // Arena (100, 98) facing straight down at the stroke.
    let (x, y) = surface.to_frame(100.0, 98.0);
    let mut senses = vec![0.0; params.num_sensor_rays];
    surface.sense(x, y, FRAC_PI_2, &mut senses);

    assert!((senses[0] - 1.0).abs() < 1e-3, "got {}", senses[0]);
    assert!(surface.is_colliding(x, y, params.creature_radius));
}

#[test]
fn test_rebuild_drops_previous_strokes() {
    let params = create_test_params();
    let mut surface = OccupancySurface::new(&params);
    surface.rasterize(&horizontal_obstacle(), params.obstacle_width);
    assert!(surface.is_occupied(100, 116));

    surface.rebuild(&[], params.obstacle_width);
    assert!(!surface.is_occupied(100, 116));
    assert!(surface.is_occupied(0, 0));
}

#[test]
fn test_border_contact_collides() {
    let params = create_test_params();
    let surface = OccupancySurface::new(&params);

    let (x, y) = surface.to_frame(2.0, 100.0);
    assert!(surface.is_colliding(x, y, params.creature_radius));

    let (x, y) = surface.to_frame(200.0, 360.0);
    assert!(!surface.is_colliding(x, y, params.creature_radius));
}

#[test]
fn test_sensor_distances_are_positive() {
    let params = create_test_params();
    let surface = OccupancySurface::new(&params);
    let mut senses = vec![0.0; params.num_sensor_rays];

    for i in 0..20 {
        let (x, y) = surface.to_frame(10.0 + i as f32 * 19.0, 10.0 + i as f32 * 35.0);
        surface.sense(x, y, i as f32 * 0.3, &mut senses);
        for d in &senses {
            assert!(!d.is_nan());
            assert!(*d > 0.0);
        }
    }
}

#[test]
fn test_rays_are_evenly_spaced() {
    let params = create_test_params();
    let surface = OccupancySurface::new(&params);
    let (x, y) = surface.to_frame(200.0, 360.0);

    let mut senses = vec![0.0; 4];
    surface.sense(x, y, 0.0, &mut senses);

    assert_eq!(senses[0], surface.distance_along_ray(x, y, 0.0));
    assert_eq!(senses[1], surface.distance_along_ray(x, y, FRAC_PI_2));
    assert_eq!(senses[2], surface.distance_along_ray(x, y, PI));
}
