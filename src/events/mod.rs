pub mod lifecycle;
pub mod pointer;

pub use lifecycle::*;
pub use pointer::*;
