pub mod gate;
pub mod lifecycle;
pub mod pointer;
pub mod scroll;
pub mod tagline;
pub mod variant;

pub use gate::LoadGate;
pub use pointer::{IdleParallax, Layer, LayerOffset, Viewport};
pub use scroll::{LayerPair, PairPlacement, ScrollState, CLOUDS, MOUNTAINS};
pub use variant::Variant;
