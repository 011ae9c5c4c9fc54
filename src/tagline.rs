use crate::constants::{TAGLINE_PROP, TAGLINE_SEED_ATTR};
use crate::core::tagline::{css_string, parse_seed, pick};
use crate::taglines::TAGLINES;
use anyhow::anyhow;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Seeded from `<html data-tagline-seed>` when present, otherwise entropy.
fn tagline_rng(root: &web::Element) -> StdRng {
    match parse_seed(root.get_attribute(TAGLINE_SEED_ATTR).as_deref()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Pick one tagline and publish it as a quoted CSS variable on `<html>`.
pub fn publish(document: &web::Document) -> anyhow::Result<()> {
    let root = document
        .document_element()
        .ok_or_else(|| anyhow!("no document element"))?;
    let mut rng = tagline_rng(&root);
    let (index, text) = pick(TAGLINES, &mut rng).ok_or_else(|| anyhow!("tagline list is empty"))?;
    let root = root
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("document element is not an HtmlElement: {:?}", e))?;
    root.style()
        .set_property(TAGLINE_PROP, &css_string(text))
        .map_err(|e| anyhow!("{:?}", e))?;
    log::info!("[tagline] #{} of {}", index, TAGLINES.len());
    Ok(())
}
