use crate::controller::Controller;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position in normalized viewport units of the canvas.
#[inline]
fn pointer_canvas_uv(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = (rect.width() as f32, rect.height() as f32);
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let u = (ev.client_x() as f32 - rect.left() as f32) / w;
    let v = (ev.client_y() as f32 - rect.top() as f32) / h;
    Some(Vec2::new(u.clamp(0.0, 1.0), v.clamp(0.0, 1.0)))
}

pub fn wire_pointer_move(canvas: &web::HtmlCanvasElement, ctrl: Controller) {
    let canvas_moved = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(uv) = pointer_canvas_uv(&ev, &canvas_moved) {
            ctrl.on_pointer(uv);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn wire_resize(ctrl: Controller) {
    let closure = Closure::wrap(Box::new(move || {
        ctrl.on_resize();
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
