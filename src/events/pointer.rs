use crate::dom;
use crate::parallax::PointerParallax;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Normalized pointer position, clamped to the viewport.
#[inline]
pub fn pointer_viewport_uv(ev: &web::PointerEvent, window: &web::Window) -> Option<[f64; 2]> {
    let vp = dom::viewport(window);
    if vp.is_renderable() {
        let u = (ev.client_x() as f64 / vp.width).clamp(0.0, 1.0);
        let v = (ev.client_y() as f64 / vp.height).clamp(0.0, 1.0);
        Some([u, v])
    } else {
        None
    }
}

/// Feed raw pointer moves into the driver's target; smoothing happens per frame.
pub fn wire_pointermove(driver: Rc<RefCell<PointerParallax>>) {
    dom::add_window_listener("pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let mut d = driver.borrow_mut();
        if let Some([x, y]) = pointer_viewport_uv(ev, &d.window) {
            d.motion.pointer.set_target(x, y);
        }
    });
}
