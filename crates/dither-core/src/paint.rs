//! Frame rasterization: grid -> RGBA pixels.

use crate::config::RenderConfig;
use crate::grid::SampleGrid;
use crate::{bayer, field, pointer, quantize};
use glam::Vec2;

/// Rasterize one frame into `buf` (resized to `grid.buffer_len()`).
///
/// One field sample per grid cell, expanded into its `pixel_size`-square
/// block; blocks on the right/bottom edges are clipped to the viewport. The
/// output depends only on the arguments, so repeated calls with a frozen
/// timestamp reproduce the frame byte for byte.
pub fn frame(
    buf: &mut Vec<u8>,
    grid: &SampleGrid,
    cfg: &RenderConfig,
    t: f32,
    pointer_uv: Option<Vec2>,
) {
    buf.resize(grid.buffer_len(), 0);
    let pointer_uv = if cfg.enable_mouse_interaction {
        pointer_uv
    } else {
        None
    };

    let width = grid.width_px as usize;
    let height = grid.height_px as usize;
    let ps = grid.pixel_size as usize;

    for row in 0..grid.rows {
        let y0 = row as usize * ps;
        let block_h = ps.min(height - y0);
        for col in 0..grid.cols {
            let uv = grid.cell_center_uv(col, row);
            let mut v = field::normalized(uv.x, uv.y, t, cfg);
            if let Some(p) = pointer_uv {
                v = (v + pointer::perturbation(uv, p, cfg.mouse_radius)).clamp(0.0, 1.0);
            }
            let m = bayer::threshold(col, row);
            let rgba = quantize::shade(quantize::level(v, m, cfg.color_num), cfg);

            let x0 = col as usize * ps;
            let block_w = ps.min(width - x0);
            for dy in 0..block_h {
                let line = ((y0 + dy) * width + x0) * 4;
                for dx in 0..block_w {
                    buf[line + dx * 4..line + dx * 4 + 4].copy_from_slice(&rgba);
                }
            }
        }
    }
}

/// Flat fill of the background endpoint, the degraded output when the
/// drawing surface is unhealthy.
pub fn flat(buf: &mut Vec<u8>, grid: &SampleGrid, cfg: &RenderConfig) {
    let rgba = quantize::background_rgba(cfg);
    buf.resize(grid.buffer_len(), 0);
    for px in buf.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}
