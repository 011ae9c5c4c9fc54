use crate::constants::{IMAGE_GROUP_SELECTOR, LOADED_CLASS};
use crate::core::LoadGate;
use crate::dom;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct GroupGate {
    group: web::Element,
    gate: Rc<RefCell<LoadGate>>,
}

impl GroupGate {
    /// Defer the class change by one frame so it lands as a transition rather
    /// than on the first paint.
    fn trigger(&self) {
        let mut gate = self.gate.borrow_mut();
        if !gate.request() {
            log::debug!(
                "[images] trigger ignored (loaded={}, pending={})",
                gate.is_loaded(),
                gate.is_pending()
            );
            return;
        }
        drop(gate);
        let this = self.clone();
        dom::next_frame(move || {
            if this.gate.borrow_mut().commit() {
                _ = this.group.class_list().add_1(LOADED_CLASS);
            }
        });
    }
}

/// Last `img` in document order, the one that finishes the group.
fn last_image(group: &web::Element) -> Option<web::HtmlImageElement> {
    let imgs = group.query_selector_all("img").ok()?;
    let len = imgs.length();
    if len == 0 {
        return None;
    }
    imgs.item(len - 1)?.dyn_into::<web::HtmlImageElement>().ok()
}

/// Mark every image group `loaded` once its last image has loaded.
pub fn wire_load_gates(document: &web::Document) -> anyhow::Result<usize> {
    let groups = document
        .query_selector_all(IMAGE_GROUP_SELECTOR)
        .map_err(|e| anyhow!("{:?}", e))?;
    let mut gated = 0;
    for i in 0..groups.length() {
        let Some(group) = groups.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let Some(img) = last_image(&group) else {
            log::warn!("[images] group without images skipped");
            continue;
        };
        let gate = GroupGate {
            group,
            gate: Rc::new(RefCell::new(LoadGate::default())),
        };

        let on_load = gate.clone();
        let closure = Closure::wrap(Box::new(move || on_load.trigger()) as Box<dyn FnMut()>);
        _ = img.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
        closure.forget();

        if img.complete() {
            gate.trigger();
        }
        gated += 1;
    }
    Ok(gated)
}
