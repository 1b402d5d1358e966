// Host-side tests for the pointer perturbation falloff.

use dither_core::constants::POINTER_BOOST;
use dither_core::pointer::perturbation;
use glam::Vec2;

const RADIUS: f32 = 0.3;

#[test]
fn perturbation_is_maximal_at_the_pointer() {
    let p = Vec2::new(0.5, 0.5);
    assert_eq!(perturbation(p, p, RADIUS), POINTER_BOOST);
}

#[test]
fn perturbation_is_zero_at_and_beyond_the_radius() {
    let p = Vec2::new(0.5, 0.5);
    for d in [RADIUS, RADIUS + 1e-6, RADIUS * 2.0, 10.0] {
        let cell = p + Vec2::new(d, 0.0);
        assert_eq!(
            perturbation(cell, p, RADIUS),
            0.0,
            "expected zero at distance {d}"
        );
    }
}

#[test]
fn perturbation_is_continuous_at_the_boundary() {
    let p = Vec2::new(0.5, 0.5);
    let just_inside = p + Vec2::new(RADIUS * 0.999, 0.0);
    let value = perturbation(just_inside, p, RADIUS);
    assert!(value > 0.0, "inside the radius must perturb");
    assert!(
        value < 1e-4,
        "no jump at the boundary, got {value}"
    );
}

#[test]
fn perturbation_decays_monotonically() {
    let p = Vec2::new(0.5, 0.5);
    let mut prev = f32::INFINITY;
    for i in 0..=10 {
        let d = RADIUS * i as f32 / 10.0;
        let value = perturbation(p + Vec2::new(0.0, d), p, RADIUS);
        assert!(
            value <= prev,
            "falloff increased between steps ({prev} -> {value})"
        );
        prev = value;
    }
}

#[test]
fn zero_radius_never_perturbs() {
    let p = Vec2::new(0.5, 0.5);
    assert_eq!(perturbation(p, p, 0.0), 0.0);
    assert_eq!(perturbation(Vec2::ZERO, p, 0.0), 0.0);
}

#[test]
fn falloff_depends_only_on_distance() {
    let p = Vec2::new(0.4, 0.6);
    let d = 0.1;
    let along_x = perturbation(p + Vec2::new(d, 0.0), p, RADIUS);
    let along_y = perturbation(p + Vec2::new(0.0, d), p, RADIUS);
    assert!(
        (along_x - along_y).abs() < 1e-6,
        "falloff must be radially symmetric"
    );
}
