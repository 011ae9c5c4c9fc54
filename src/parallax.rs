use crate::constants::{LAYER_ATTR, OFFSET_X_PROP, OFFSET_Y_PROP};
use crate::core::{IdleParallax, Layer, LayerOffset};
use crate::dom;
use crate::events;
use crate::frame::{self, LoopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer-variant driver: idle circle blended with the smoothed pointer.
pub struct PointerParallax {
    pub(crate) window: web::Window,
    nodes: Vec<(Layer, web::HtmlElement)>,
    pub motion: IdleParallax,
}

impl PointerParallax {
    pub fn new(window: web::Window, document: &web::Document) -> Self {
        let nodes = Layer::ALL
            .iter()
            .filter_map(|&layer| {
                let selector = format!("[{}=\"{}\"]", LAYER_ATTR, layer.name());
                let node = document
                    .query_selector(&selector)
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
                if node.is_none() {
                    log::warn!("[parallax] no node for layer '{}'", layer.name());
                }
                node.map(|n| (layer, n))
            })
            .collect();
        Self {
            window,
            nodes,
            motion: IdleParallax::default(),
        }
    }

    fn publish(&self, offsets: &[LayerOffset]) {
        for o in offsets {
            if let Some((_, el)) = self.nodes.iter().find(|(l, _)| *l == o.layer) {
                dom::set_number(el, OFFSET_X_PROP, o.offset.x);
                dom::set_number(el, OFFSET_Y_PROP, o.offset.y);
            }
        }
    }

    pub fn publish_initial(&self) {
        let vp = dom::viewport(&self.window);
        if let Some(offsets) = IdleParallax::initial(&vp) {
            self.publish(&offsets);
        }
    }

    pub fn frame(&mut self, timestamp_ms: f64) {
        let vp = dom::viewport(&self.window);
        if let Some(offsets) = self.motion.tick(timestamp_ms, &vp) {
            self.publish(&offsets);
        }
    }
}

pub fn start(driver: PointerParallax) -> LoopHandle {
    driver.publish_initial();
    let layers = driver.nodes.len();
    let driver = Rc::new(RefCell::new(driver));

    events::wire_pointermove(driver.clone());

    log::info!("[parallax] started with {} layer(s)", layers);
    frame::start_loop(move |ts| driver.borrow_mut().frame(ts))
}
