use crate::core::lifecycle::is_teardown;
use crate::dom;
use crate::frame::LoopHandle;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Stop every running loop when the page is torn down. Pages entering the
/// back/forward cache keep their loops so they animate again on return.
pub fn wire_pagehide(loops: Vec<LoopHandle>) {
    dom::add_window_listener("pagehide", move |ev| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|e| e.persisted())
            .unwrap_or(false);
        if !is_teardown(persisted) {
            log::info!("[lifecycle] pagehide into bfcache: loops kept");
            return;
        }
        for l in &loops {
            l.stop();
        }
        log::info!("[lifecycle] pagehide: stopped {} loop(s)", loops.len());
    });
}
