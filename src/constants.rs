/// Parallax tuning constants and the DOM contract shared by the drivers.
///
/// Numbers here are the ones the page styles were tuned against; changing
/// them shifts where the artwork sits on screen.
// ---------------- Scroll driver ----------------

// Global horizontal drift speed for the scroll variant
pub const SPEED: f64 = 0.2;

// Wall-clock milliseconds per unit of scroll proxy
pub const SCROLL_PROXY_DIVISOR: f64 = 10.0;

pub const MOUNTAIN_SPEED_FACTOR: f64 = 1.0;
pub const MOUNTAIN_OVERLAY: f64 = 0.4; // share of the image kept above the fold
pub const MOUNTAIN_DROP: f64 = 0.156; // vertical sink per wrap, as a share of image height

pub const CLOUD_SPEED_FACTOR: f64 = 0.5;
pub const CLOUD_OVERLAY: f64 = 0.7;
pub const CLOUD_DROP: f64 = 0.1;

// ---------------- Pointer / idle-circle driver ----------------

// Exponential smoothing factor applied once per frame
pub const POINTER_SMOOTHING: f64 = 0.03;

// Idle ellipse in normalized viewport space
pub const IDLE_RADIUS: f64 = 0.15;
pub const IDLE_CENTER: [f64; 2] = [0.5, 0.5];
pub const IDLE_CYCLE_MS: f64 = 30_000.0;

// Reference image width: min(max(max(50vh, 50vw), 80vw), 86.33vh)
pub const IMG_WIDTH_PREFERRED_VH: f64 = 50.0;
pub const IMG_WIDTH_PREFERRED_VW: f64 = 50.0;
pub const IMG_WIDTH_LOWER_VW: f64 = 80.0;
pub const IMG_WIDTH_UPPER_VH: f64 = 86.33;

// Field artwork is 3200x1998
pub const FIELD_ASPECT: f64 = 1998.0 / 3200.0;
pub const FIELD_TRAVEL: f64 = 0.3 / 0.6;

// (speed_x, speed_y) per layer
pub const CLOUDS_SPEED: [f64; 2] = [-0.1, 0.4];
pub const MOUNTAINS_SPEED: [f64; 2] = [0.2, 0.5];
pub const FIELD_SPEED: [f64; 2] = [0.6, 0.6];

// ---------------- DOM contract ----------------

pub const COUNTER_ID: &str = "counter";
pub const MOUNTAIN_IDS: [&str; 2] = ["mountain-1", "mountain-2"];
pub const CLOUD_IDS: [&str; 2] = ["cloud-1", "cloud-2"];

pub const LAYER_ATTR: &str = "data-parallax-layer";
pub const OFFSET_X_PROP: &str = "--offset-x";
pub const OFFSET_Y_PROP: &str = "--offset-y";

pub const VARIANT_ATTR: &str = "data-parallax";
pub const TAGLINE_PROP: &str = "--tagline";
pub const TAGLINE_SEED_ATTR: &str = "data-tagline-seed";

pub const IMAGE_GROUP_SELECTOR: &str = ".image-group";
pub const LOADED_CLASS: &str = "loaded";
