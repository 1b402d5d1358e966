//! Sample grid derived from the viewport size and block size.

use glam::Vec2;

/// Grid of `pixel_size`-square sample blocks covering the viewport.
///
/// Recomputed only when the viewport or `pixel_size` changes; partial blocks
/// at the right/bottom edges are included (ceil division) and clipped when
/// painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleGrid {
    pub cols: u32,
    pub rows: u32,
    pub pixel_size: u32,
    pub width_px: u32,
    pub height_px: u32,
}

impl SampleGrid {
    pub fn from_viewport(width_px: u32, height_px: u32, pixel_size: u32) -> Self {
        let ps = pixel_size.max(1);
        let width_px = width_px.max(1);
        let height_px = height_px.max(1);
        Self {
            cols: width_px.div_ceil(ps),
            rows: height_px.div_ceil(ps),
            pixel_size: ps,
            width_px,
            height_px,
        }
    }

    /// Center of cell `(col, row)` in normalized viewport units, the same
    /// space pointer positions and `mouse_radius` live in.
    #[inline]
    pub fn cell_center_uv(&self, col: u32, row: u32) -> Vec2 {
        let ps = self.pixel_size as f32;
        Vec2::new(
            ((col as f32 + 0.5) * ps) / self.width_px as f32,
            ((row as f32 + 0.5) * ps) / self.height_px as f32,
        )
    }

    /// Size of the RGBA backing buffer for this grid, in bytes.
    #[inline]
    pub fn buffer_len(&self) -> usize {
        self.width_px as usize * self.height_px as usize * 4
    }
}
