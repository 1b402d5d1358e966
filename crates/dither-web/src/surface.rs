use anyhow::anyhow;
use dither_core::{RenderConfig, SampleGrid};
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys as web;

/// Owns the drawing surface: the canvas element, its (re)acquirable 2d
/// context, and the sample grid derived from the backing-store size.
pub struct Surface {
    canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
    grid: SampleGrid,
}

impl Surface {
    pub fn new(canvas: web::HtmlCanvasElement, pixel_size: u32) -> Self {
        let mut surface = Self {
            canvas,
            ctx: None,
            grid: SampleGrid::from_viewport(1, 1, pixel_size),
        };
        surface.sync_backing_size();
        surface.rebuild_grid(pixel_size);
        surface
    }

    /// Keep the canvas backing store at CSS size * devicePixelRatio.
    pub fn sync_backing_size(&mut self) {
        if let Some(w) = web::window() {
            let dpr = w.device_pixel_ratio();
            let rect = self.canvas.get_bounding_client_rect();
            let w_px = (rect.width() * dpr) as u32;
            let h_px = (rect.height() * dpr) as u32;
            self.canvas.set_width(w_px.max(1));
            self.canvas.set_height(h_px.max(1));
        }
    }

    pub fn rebuild_grid(&mut self, pixel_size: u32) {
        self.grid = SampleGrid::from_viewport(self.canvas.width(), self.canvas.height(), pixel_size);
    }

    #[inline]
    pub fn grid(&self) -> SampleGrid {
        self.grid
    }

    /// Acquire the 2d context if we do not hold one. Returns whether a
    /// context is available; failure is retried on the next call.
    pub fn ensure_context(&mut self) -> bool {
        if self.ctx.is_some() {
            return true;
        }
        let acquired = self
            .canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok());
        self.ctx = acquired;
        self.ctx.is_some()
    }

    pub fn blit(&self, buf: &[u8]) -> anyhow::Result<()> {
        let ctx = self.ctx.as_ref().ok_or_else(|| anyhow!("no 2d context"))?;
        let image = web::ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(buf),
            self.grid.width_px,
            self.grid.height_px,
        )
        .map_err(js_err)?;
        ctx.put_image_data(&image, 0.0, 0.0).map_err(js_err)
    }

    /// Degraded output: flat background fill covering the whole canvas.
    pub fn fill_flat(&self, cfg: &RenderConfig) -> anyhow::Result<()> {
        let ctx = self.ctx.as_ref().ok_or_else(|| anyhow!("no 2d context"))?;
        let [r, g, b] = cfg.background_color.map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8);
        ctx.set_fill_style_str(&format!("rgb({r},{g},{b})"));
        ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        Ok(())
    }

    /// Forget the current context so the next tick reacquires it.
    pub fn drop_context(&mut self) {
        self.ctx = None;
    }

    /// Dispose-time teardown; no draw call touches the surface afterwards.
    pub fn release(&mut self) {
        self.ctx = None;
    }
}

#[inline]
fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!(format!("{:?}", e))
}
