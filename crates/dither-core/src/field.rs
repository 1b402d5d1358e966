//! Wave field generation.
//!
//! The field is a sum of three sinusoids over different spatial axes with
//! fixed phase offsets. For a given `(u, v, t, config)` the output is pure
//! and reproducible; freezing `t` freezes the pattern without bypassing the
//! generator.

use crate::config::RenderConfig;
use crate::constants::{
    CROSS_RATE, DRIFT_A, DRIFT_B, DRIFT_C, PHASE_B, PHASE_C, TIME_SCALE, X_STRETCH, Y_STRETCH,
};
use std::f32::consts::TAU;

/// Raw field intensity in [-1, 1] at normalized viewport position `(u, v)`
/// and animation time `t` (seconds).
pub fn intensity(u: f32, v: f32, t: f32, cfg: &RenderConfig) -> f32 {
    let a = cfg.wave_amplitude;
    let k = TAU * cfg.wave_frequency;
    let phase = t * cfg.wave_speed * TIME_SCALE;

    let wave_x = a * (k * u * X_STRETCH + phase * DRIFT_A).sin();
    let wave_y = a * (k * v * Y_STRETCH + phase * DRIFT_B + PHASE_B).sin();
    let cross = a * (k * CROSS_RATE * (u + v) + phase * DRIFT_C + PHASE_C).sin();

    (wave_x + wave_y + cross).clamp(-1.0, 1.0)
}

/// Field intensity mapped into [0, 1] for the quantizer.
#[inline]
pub fn normalized(u: f32, v: f32, t: f32, cfg: &RenderConfig) -> f32 {
    0.5 * (intensity(u, v, t, cfg) + 1.0)
}
