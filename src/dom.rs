use crate::core::Viewport;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up an element by id; a missing node is an error for the caller.
pub fn require_html_element(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}

pub fn viewport(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width, height)
}

pub fn document_height(document: &web::Document) -> f64 {
    document
        .body()
        .map(|b| b.offset_height() as f64)
        .unwrap_or(0.0)
}

#[inline]
pub fn set_px(el: &web::HtmlElement, property: &str, value: f64) {
    _ = el.style().set_property(property, &format!("{}px", value));
}

#[inline]
pub fn set_number(el: &web::HtmlElement, property: &str, value: f64) {
    _ = el.style().set_property(property, &value.to_string());
}

/// Subscribe `handler` to `event` on the window for the page's lifetime.
pub fn add_window_listener(event: &str, mut handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Run `f` once on the next animation frame.
pub fn next_frame(f: impl FnOnce() + 'static) {
    let closure = Closure::once_into_js(f);
    if let Some(window) = web::window() {
        _ = window.request_animation_frame(closure.unchecked_ref());
    }
}
