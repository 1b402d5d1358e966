//! Pointer-driven field perturbation.

use crate::constants::POINTER_BOOST;
use glam::Vec2;

/// Intensity added near the pointer. Maximal at the pointer itself, exactly
/// zero at and beyond `radius`, and continuous across the boundary
/// (smoothstep falloff). Distances are in normalized viewport units.
#[inline]
pub fn perturbation(cell_uv: Vec2, pointer_uv: Vec2, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    let d = cell_uv.distance(pointer_uv);
    if d >= radius {
        return 0.0;
    }
    let k = 1.0 - d / radius;
    POINTER_BOOST * k * k * (3.0 - 2.0 * k)
}
