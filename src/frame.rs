use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Stop switch for a running animation loop.
#[derive(Clone, Default)]
pub struct LoopHandle {
    stopped: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.stopped.set(true);
    }
}

/// Call `tick` with the frame timestamp on every animation frame until the
/// returned handle is stopped. The flag is checked before each tick; a stopped
/// loop simply stops requesting frames.
pub fn start_loop(mut tick: impl FnMut(f64) + 'static) -> LoopHandle {
    let handle = LoopHandle::default();
    let stopped = handle.stopped.clone();

    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let slot_tick = slot.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if stopped.get() {
            return;
        }
        tick(timestamp);
        request(&slot_tick);
    }) as Box<dyn FnMut(f64)>));
    request(&slot);
    handle
}

fn request(slot: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), slot.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
