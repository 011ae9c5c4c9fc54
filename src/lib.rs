#![cfg(target_arch = "wasm32")]
use crate::core::Variant;
use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod images;
mod parallax;
mod scroll;
mod tagline;
mod taglines;

use constants::{LAYER_ATTR, MOUNTAIN_IDS, VARIANT_ATTR};

fn detect_variant(document: &web::Document) -> Option<Variant> {
    let attr = document.body().and_then(|b| b.get_attribute(VARIANT_ATTR));
    let has_scroll_nodes = document.get_element_by_id(MOUNTAIN_IDS[0]).is_some();
    let has_layer_nodes = document
        .query_selector(&format!("[{}]", LAYER_ATTR))
        .ok()
        .flatten()
        .is_some();
    Variant::resolve(attr.as_deref(), has_scroll_nodes, has_layer_nodes)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("skyline-parallax starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    // Each component fails on its own; the others still run.
    if let Err(e) = tagline::publish(&document) {
        log::error!("[tagline] {:?}", e);
    }
    match images::wire_load_gates(&document) {
        Ok(n) => log::info!("[images] gating {} group(s)", n),
        Err(e) => log::error!("[images] {:?}", e),
    }

    let mut loops = Vec::new();
    match detect_variant(&document) {
        Some(Variant::Scroll) => {
            let driver = scroll::ScrollDriver::new(window.clone(), document.clone())?;
            loops.push(scroll::start(driver));
        }
        Some(Variant::Pointer) => {
            let driver = parallax::PointerParallax::new(window.clone(), &document);
            loops.push(parallax::start(driver));
        }
        None => log::info!("no parallax layers on this page"),
    }
    events::wire_pagehide(loops);

    Ok(())
}
