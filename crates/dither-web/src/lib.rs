#![cfg(target_arch = "wasm32")]
//! Browser shell for the animated dither background.
//!
//! The host page talks to exactly three lifecycle calls: construct
//! ([`DitherBackground::new`], mount), [`DitherBackground::update`] (config
//! change) and [`DitherBackground::unmount`]. Everything else — the frame
//! loop, resize handling, pointer tracking — is internal.

mod controller;
mod events;
mod surface;

use anyhow::anyhow;
use controller::Controller;
use dither_core::RenderConfig;
use surface::Surface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    Ok(())
}

/// Caller-assembled render parameters, pushed wholesale on every change.
#[wasm_bindgen]
#[derive(Clone, Copy, Default)]
pub struct DitherOptions {
    cfg: RenderConfig,
}

#[wasm_bindgen]
impl DitherOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> DitherOptions {
        DitherOptions::default()
    }

    pub fn set_wave_color(&mut self, r: f32, g: f32, b: f32) {
        self.cfg.wave_color = [r, g, b];
    }

    pub fn set_background_color(&mut self, r: f32, g: f32, b: f32) {
        self.cfg.background_color = [r, g, b];
    }

    pub fn set_color_num(&mut self, levels: u32) {
        self.cfg.color_num = levels;
    }

    pub fn set_pixel_size(&mut self, px: u32) {
        self.cfg.pixel_size = px;
    }

    pub fn set_wave_amplitude(&mut self, amplitude: f32) {
        self.cfg.wave_amplitude = amplitude;
    }

    pub fn set_wave_frequency(&mut self, frequency: f32) {
        self.cfg.wave_frequency = frequency;
    }

    pub fn set_wave_speed(&mut self, speed: f32) {
        self.cfg.wave_speed = speed;
    }

    pub fn set_mouse_radius(&mut self, radius: f32) {
        self.cfg.mouse_radius = radius;
    }

    pub fn set_enable_mouse_interaction(&mut self, enabled: bool) {
        self.cfg.enable_mouse_interaction = enabled;
    }

    pub fn set_disable_animation(&mut self, disabled: bool) {
        self.cfg.disable_animation = disabled;
    }
}

/// The mounted background renderer.
#[wasm_bindgen]
pub struct DitherBackground {
    ctrl: Controller,
}

#[wasm_bindgen]
impl DitherBackground {
    /// Mount on the canvas with the given element id and start rendering.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, opts: &DitherOptions) -> Result<DitherBackground, JsValue> {
        mount(canvas_id, opts.cfg).map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    /// Push a new config; applied atomically from the next tick.
    pub fn update(&self, opts: &DitherOptions) {
        self.ctrl.update_config(opts.cfg.sanitized());
    }

    /// Suspend scheduling, retaining all state.
    pub fn pause(&self) {
        self.ctrl.pause();
    }

    pub fn resume(&self) {
        self.ctrl.start();
    }

    /// Release the surface and cancel any pending redraw. Idempotent.
    pub fn unmount(&self) {
        self.ctrl.dispose();
        log::info!("dither background unmounted");
    }
}

fn mount(canvas_id: &str, cfg: RenderConfig) -> anyhow::Result<DitherBackground> {
    let cfg = cfg.sanitized();
    let document = web::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow!("missing #{canvas_id}"))?
        .dyn_into()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;

    let surface = Surface::new(canvas.clone(), cfg.pixel_size);
    let ctrl = Controller::new(surface, cfg);
    events::wire_pointer_move(&canvas, ctrl.clone());
    events::wire_resize(ctrl.clone());
    ctrl.start();
    log::info!("dither background mounted on #{canvas_id}");
    Ok(DitherBackground { ctrl })
}
