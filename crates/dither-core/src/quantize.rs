//! Ordered quantization of field intensities into the two-endpoint palette.
//!
//! `level` biases the intensity by the cell's dither threshold before
//! truncating to one of `color_num` levels; `shade` interpolates the final
//! color between the background and wave endpoints. Both are pure, so the
//! banding pattern is stable frame to frame.

use crate::config::RenderConfig;

/// Discrete level for intensity `v` in [0, 1] and threshold `m` in [0, 1).
/// Always in `[0, color_num - 1]`; `color_num` below 2 is treated as 2.
#[inline]
pub fn level(v: f32, m: f32, color_num: u32) -> u32 {
    let n = color_num.max(2) as f32;
    let biased = v + (m - 0.5) / n;
    (biased * n).floor().clamp(0.0, n - 1.0) as u32
}

/// RGBA8 color for a level, lerped from `background_color` to `wave_color`.
#[inline]
pub fn shade(level: u32, cfg: &RenderConfig) -> [u8; 4] {
    let n = cfg.color_num.max(2);
    let t = level.min(n - 1) as f32 / (n - 1) as f32;
    let mix = |bg: f32, wave: f32| to_byte(bg + (wave - bg) * t);
    [
        mix(cfg.background_color[0], cfg.wave_color[0]),
        mix(cfg.background_color[1], cfg.wave_color[1]),
        mix(cfg.background_color[2], cfg.wave_color[2]),
        0xFF,
    ]
}

/// RGBA8 flat fill of the background endpoint, used when the field cannot
/// be rendered.
#[inline]
pub fn background_rgba(cfg: &RenderConfig) -> [u8; 4] {
    [
        to_byte(cfg.background_color[0]),
        to_byte(cfg.background_color[1]),
        to_byte(cfg.background_color[2]),
        0xFF,
    ]
}

#[inline]
fn to_byte(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}
