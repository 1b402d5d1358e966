use crate::surface::Surface;
use dither_core::{paint, FrameState, Phase, RenderConfig};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Engine {
    surface: Surface,
    cfg: RenderConfig,
    state: FrameState,
    buf: Vec<u8>,
    last_tick: Option<Instant>,
    raf_handle: Option<i32>,
    resize_pending: bool,
}

impl Engine {
    fn render(&mut self) {
        if !self.surface.ensure_context() {
            // Surface unavailable; retried next tick.
            return;
        }
        let grid = self.surface.grid();
        paint::frame(
            &mut self.buf,
            &grid,
            &self.cfg,
            self.state.time(),
            self.state.pointer(),
        );
        if let Err(err) = self.surface.blit(&self.buf) {
            log::warn!("blit failed, falling back to flat background: {err:?}");
            if self.surface.fill_flat(&self.cfg).is_err() {
                self.surface.drop_context();
            }
        }
    }

    fn cancel_raf(&mut self) {
        if let Some(handle) = self.raf_handle.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(handle);
            }
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drives recomputation and redraw once per display refresh while running,
/// and exactly once per config/resize change while animation is disabled.
#[derive(Clone)]
pub struct Controller {
    engine: Rc<RefCell<Engine>>,
    tick: TickClosure,
}

impl Controller {
    pub fn new(surface: Surface, cfg: RenderConfig) -> Self {
        let engine = Rc::new(RefCell::new(Engine {
            surface,
            cfg,
            state: FrameState::new(),
            buf: Vec::new(),
            last_tick: None,
            raf_handle: None,
            resize_pending: false,
        }));
        let tick: TickClosure = Rc::new(RefCell::new(None));
        let engine_tick = engine.clone();
        let tick_next = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            Self::tick(&engine_tick, &tick_next);
        }) as Box<dyn FnMut()>));
        Self { engine, tick }
    }

    fn tick(engine: &Rc<RefCell<Engine>>, tick: &TickClosure) {
        let mut e = engine.borrow_mut();
        e.raf_handle = None;
        if e.state.phase() != Phase::Running {
            // Stale callback after pause/dispose.
            return;
        }
        let now = Instant::now();
        let dt = e.last_tick.map(|prev| now - prev).unwrap_or_default();
        e.last_tick = Some(now);
        let frozen = e.cfg.disable_animation;
        e.state.advance(dt, frozen);

        if e.resize_pending {
            e.resize_pending = false;
            e.surface.sync_backing_size();
            let ps = e.cfg.pixel_size;
            e.surface.rebuild_grid(ps);
        }

        if e.state.take_redraw() || !frozen {
            e.render();
        }
        drop(e);
        if !frozen {
            Self::schedule(engine, tick);
        }
    }

    fn schedule(engine: &Rc<RefCell<Engine>>, tick: &TickClosure) {
        let mut e = engine.borrow_mut();
        if e.state.phase() != Phase::Running || e.raf_handle.is_some() {
            return;
        }
        let cell = tick.borrow();
        let (Some(w), Some(cb)) = (web::window(), cell.as_ref()) else {
            return;
        };
        match w.request_animation_frame(cb.as_ref().unchecked_ref::<js_sys::Function>()) {
            Ok(handle) => e.raf_handle = Some(handle),
            Err(err) => log::error!("requestAnimationFrame failed: {err:?}"),
        }
    }

    pub fn start(&self) {
        {
            let mut e = self.engine.borrow_mut();
            if !e.state.start() {
                return;
            }
            // Fresh dt baseline so paused time is not replayed.
            e.last_tick = None;
            e.state.queue_redraw();
        }
        Self::schedule(&self.engine, &self.tick);
    }

    pub fn pause(&self) {
        let mut e = self.engine.borrow_mut();
        e.state.pause();
        e.cancel_raf();
    }

    /// Terminal: cancels the pending callback, drops it, and releases the
    /// surface. Safe to call any number of times.
    pub fn dispose(&self) {
        {
            let mut e = self.engine.borrow_mut();
            e.state.dispose();
            e.cancel_raf();
            e.surface.release();
        }
        *self.tick.borrow_mut() = None;
    }

    /// Replace the whole config; takes effect from the next tick.
    pub fn update_config(&self, cfg: RenderConfig) {
        {
            let mut e = self.engine.borrow_mut();
            if e.state.phase() == Phase::Disposed {
                return;
            }
            if cfg.pixel_size != e.cfg.pixel_size {
                e.resize_pending = true;
            }
            e.cfg = cfg;
            e.state.queue_redraw();
        }
        Self::schedule(&self.engine, &self.tick);
    }

    pub fn on_pointer(&self, uv: Vec2) {
        let mut e = self.engine.borrow_mut();
        if e.cfg.enable_mouse_interaction {
            e.state.set_pointer(uv);
        }
    }

    /// Viewport changed; the grid rebuild is deferred to the next tick so a
    /// burst of resize events costs one recomputation.
    pub fn on_resize(&self) {
        {
            let mut e = self.engine.borrow_mut();
            if e.state.phase() == Phase::Disposed {
                return;
            }
            e.resize_pending = true;
            e.state.queue_redraw();
        }
        Self::schedule(&self.engine, &self.tick);
    }
}
