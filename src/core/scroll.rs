use crate::constants::{
    CLOUD_DROP, CLOUD_OVERLAY, CLOUD_SPEED_FACTOR, MOUNTAIN_DROP, MOUNTAIN_OVERLAY,
    MOUNTAIN_SPEED_FACTOR, SCROLL_PROXY_DIVISOR, SPEED,
};

/// How far the page has "scrolled", relative to the viewport and the document.
///
/// `page_fraction` is left unguarded: when the document is no taller than the
/// viewport the denominator is zero or negative and the value is infinite,
/// NaN or negative. Nothing downstream reads it besides logging.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub window_fraction: f64,
    pub page_fraction: f64,
}

impl ScrollState {
    pub fn measure(scroll: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            window_fraction: scroll / viewport_height,
            page_fraction: scroll / (document_height - viewport_height),
        }
    }
}

/// Scroll position stand-in. The drift is driven by wall-clock time, not by
/// the real scroll offset, so the layers keep moving while the page is idle.
#[inline]
pub fn scroll_proxy(now_ms: f64) -> f64 {
    now_ms / SCROLL_PROXY_DIVISOR
}

/// Tuning for a pair of horizontally tiled images.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerPair {
    pub speed_factor: f64,
    pub overlay: f64,
    pub drop: f64,
}

pub const MOUNTAINS: LayerPair = LayerPair {
    speed_factor: MOUNTAIN_SPEED_FACTOR,
    overlay: MOUNTAIN_OVERLAY,
    drop: MOUNTAIN_DROP,
};

pub const CLOUDS: LayerPair = LayerPair {
    speed_factor: CLOUD_SPEED_FACTOR,
    overlay: CLOUD_OVERLAY,
    drop: CLOUD_DROP,
};

/// CSS `right` / `bottom` offsets in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub right: f64,
    pub bottom: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PairPlacement {
    pub first: Placement,
    pub second: Placement,
}

impl LayerPair {
    /// Position within the wrap cycle. Uses the truncating remainder, so a
    /// negative fraction yields a negative phase.
    #[inline]
    pub fn phase(&self, window_fraction: f64) -> f64 {
        (window_fraction * SPEED * self.speed_factor) % 1.0
    }

    /// Amount the image is pushed below the viewport bottom.
    #[inline]
    pub fn height_correction(&self, viewport_height: f64, image_height: f64) -> f64 {
        image_height - (viewport_height * self.overlay).min(image_height * self.overlay)
    }

    /// Offsets for both images. The second trails the first by one full
    /// viewport width so the pair tiles seamlessly across a wrap.
    pub fn place(
        &self,
        window_fraction: f64,
        viewport_width: f64,
        viewport_height: f64,
        image_height: f64,
    ) -> PairPlacement {
        let phase = self.phase(window_fraction);
        let height = self.height_correction(viewport_height, image_height);
        let at = |p: f64| Placement {
            right: p * viewport_width,
            bottom: p * image_height * self.drop - height,
        };
        PairPlacement {
            first: at(phase),
            second: at(phase - 1.0),
        }
    }
}
