use crate::constants::{
    CLOUDS_SPEED, FIELD_ASPECT, FIELD_SPEED, FIELD_TRAVEL, IDLE_CENTER, IDLE_CYCLE_MS,
    IDLE_RADIUS, IMG_WIDTH_LOWER_VW, IMG_WIDTH_PREFERRED_VH, IMG_WIDTH_PREFERRED_VW,
    IMG_WIDTH_UPPER_VH, MOUNTAINS_SPEED, POINTER_SMOOTHING,
};
use glam::DVec2;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
    /// 1% of the viewport width.
    #[inline]
    pub fn vw(&self) -> f64 {
        self.width / 100.0
    }
    /// 1% of the viewport height.
    #[inline]
    pub fn vh(&self) -> f64 {
        self.height / 100.0
    }
    /// Zero-sized viewports (collapsed iframes) have no meaningful aspect.
    #[inline]
    pub fn is_renderable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
    #[inline]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

/// Raw and smoothed pointer position in normalized viewport space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub target: DVec2,
    pub smooth: DVec2,
}

impl Default for PointerState {
    fn default() -> Self {
        let center = DVec2::from_array(IDLE_CENTER);
        Self {
            target: center,
            smooth: center,
        }
    }
}

impl PointerState {
    #[inline]
    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = DVec2::new(x, y);
    }

    /// One low-pass step towards the target; returns the new smoothed point.
    #[inline]
    pub fn step(&mut self) -> DVec2 {
        self.smooth += (self.target - self.smooth) * POINTER_SMOOTHING;
        self.smooth
    }
}

/// Phase anchor for the idle motion. The first tick pins the start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timeline {
    pub start_ms: Option<f64>,
    pub duration_ms: f64,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            start_ms: None,
            duration_ms: IDLE_CYCLE_MS,
        }
    }
}

impl Timeline {
    pub fn elapsed(&mut self, timestamp_ms: f64) -> f64 {
        let start = *self.start_ms.get_or_insert(timestamp_ms);
        timestamp_ms - start
    }
}

/// Point on the idle ellipse. The y radius is stretched by the aspect ratio so
/// the path reads as a circle on screen.
pub fn idle_circle_point(elapsed_ms: f64, duration_ms: f64, aspect: f64) -> DVec2 {
    let progress = (elapsed_ms % duration_ms) / duration_ms;
    let angle = progress * TAU;
    DVec2::new(
        IDLE_CENTER[0] + IDLE_RADIUS * angle.cos(),
        IDLE_CENTER[1] + IDLE_RADIUS * aspect * angle.sin(),
    )
}

#[inline]
pub fn blend(circle: DVec2, pointer: DVec2) -> DVec2 {
    (circle + pointer) * 0.5
}

/// `min(max(max(50vh, 50vw), 80vw), 86.33vh)`. The bounds are not ordered,
/// so on wide viewports the upper bound wins over the lower one.
pub fn reference_image_width(vp: &Viewport) -> f64 {
    let preferred = (IMG_WIDTH_PREFERRED_VH * vp.vh()).max(IMG_WIDTH_PREFERRED_VW * vp.vw());
    preferred
        .max(IMG_WIDTH_LOWER_VW * vp.vw())
        .min(IMG_WIDTH_UPPER_VH * vp.vh())
}

/// Unscaled pixel offset for a blended input position.
pub fn base_offset(mouse: DVec2, vp: &Viewport) -> DVec2 {
    let img_width = reference_image_width(vp);
    let max_offset_x = 50.0 * vp.vw() - img_width / 2.0;
    let field_height = img_width * FIELD_ASPECT;
    let max_offset_y = field_height * FIELD_TRAVEL;
    DVec2::new(
        (0.5 - mouse.x) * max_offset_x * 2.0,
        (mouse.y - 1.0) * max_offset_y,
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Clouds,
    Mountains,
    Field,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Clouds, Layer::Mountains, Layer::Field];

    pub fn name(self) -> &'static str {
        match self {
            Layer::Clouds => "clouds",
            Layer::Mountains => "mountains",
            Layer::Field => "field",
        }
    }

    pub fn speed(self) -> DVec2 {
        let [x, y] = match self {
            Layer::Clouds => CLOUDS_SPEED,
            Layer::Mountains => MOUNTAINS_SPEED,
            Layer::Field => FIELD_SPEED,
        };
        DVec2::new(x, y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerOffset {
    pub layer: Layer,
    pub offset: DVec2,
}

pub fn layer_offsets(base: DVec2) -> [LayerOffset; 3] {
    Layer::ALL.map(|layer| LayerOffset {
        layer,
        offset: base * layer.speed(),
    })
}

/// Idle circle + smoothed pointer, evaluated once per animation frame.
#[derive(Clone, Debug, Default)]
pub struct IdleParallax {
    pub pointer: PointerState,
    pub timeline: Timeline,
}

impl IdleParallax {
    /// Offsets for the centered position, published before the first frame.
    pub fn initial(vp: &Viewport) -> Option<[LayerOffset; 3]> {
        if !vp.is_renderable() {
            return None;
        }
        Some(layer_offsets(base_offset(DVec2::from_array(IDLE_CENTER), vp)))
    }

    /// Smoothing and the timeline advance every frame; offsets are `None`
    /// while the viewport has no area.
    pub fn tick(&mut self, timestamp_ms: f64, vp: &Viewport) -> Option<[LayerOffset; 3]> {
        let elapsed = self.timeline.elapsed(timestamp_ms);
        let smooth = self.pointer.step();
        if !vp.is_renderable() {
            return None;
        }
        let circle = idle_circle_point(elapsed, self.timeline.duration_ms, vp.aspect());
        Some(layer_offsets(base_offset(blend(circle, smooth), vp)))
    }
}
