use crate::constants::{CLOUD_IDS, COUNTER_ID, MOUNTAIN_IDS};
use crate::core::scroll::scroll_proxy;
use crate::core::{LayerPair, PairPlacement, ScrollState, CLOUDS, MOUNTAINS};
use crate::dom;
use crate::frame::{self, LoopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct TiledPair {
    pair: LayerPair,
    first: web::HtmlElement,
    second: web::HtmlElement,
}

impl TiledPair {
    fn resolve(document: &web::Document, pair: LayerPair, ids: [&str; 2]) -> anyhow::Result<Self> {
        Ok(Self {
            pair,
            first: dom::require_html_element(document, ids[0])?,
            second: dom::require_html_element(document, ids[1])?,
        })
    }

    fn apply(&self, state: &ScrollState, window: &web::Window) {
        let vp = dom::viewport(window);
        let image_height = self.first.offset_height() as f64;
        let PairPlacement { first, second } =
            self.pair.place(state.window_fraction, vp.width, vp.height, image_height);
        for (el, p) in [(&self.first, first), (&self.second, second)] {
            dom::set_px(el, "right", p.right);
            dom::set_px(el, "bottom", p.bottom);
            // Images start hidden so nothing flashes before the first placement
            _ = el.style().set_property("visibility", "visible");
        }
    }
}

/// Scroll-variant driver: two tiled pairs plus the debug counter.
pub struct ScrollDriver {
    window: web::Window,
    document: web::Document,
    counter: web::HtmlElement,
    mountains: TiledPair,
    clouds: TiledPair,
    state: ScrollState,
}

impl ScrollDriver {
    /// Resolve every node up front; a missing one means the page is not a
    /// scroll-variant page and the driver must not start.
    pub fn new(window: web::Window, document: web::Document) -> anyhow::Result<Self> {
        let counter = dom::require_html_element(&document, COUNTER_ID)?;
        let mountains = TiledPair::resolve(&document, MOUNTAINS, MOUNTAIN_IDS)?;
        let clouds = TiledPair::resolve(&document, CLOUDS, CLOUD_IDS)?;
        Ok(Self {
            window,
            document,
            counter,
            mountains,
            clouds,
            state: ScrollState::default(),
        })
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn frame(&mut self) {
        let vp = dom::viewport(&self.window);
        let scroll = scroll_proxy(js_sys::Date::now());
        self.state = ScrollState::measure(scroll, vp.height, dom::document_height(&self.document));
        self.counter
            .set_text_content(Some(&self.state.window_fraction.to_string()));
        self.mountains.apply(&self.state, &self.window);
        self.clouds.apply(&self.state, &self.window);
    }
}

/// Recompute on load/scroll/resize and on every animation frame.
pub fn start(driver: ScrollDriver) -> LoopHandle {
    let driver = Rc::new(RefCell::new(driver));
    for event in ["load", "scroll", "resize"] {
        let d = driver.clone();
        dom::add_window_listener(event, move |_| d.borrow_mut().frame());
    }
    driver.borrow_mut().frame();
    {
        let s = driver.borrow().state();
        log::info!(
            "[scroll] started window_fraction={:.3} page_fraction={}",
            s.window_fraction,
            s.page_fraction
        );
    }
    frame::start_loop(move |_ts| driver.borrow_mut().frame())
}
