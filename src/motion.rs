//! Spring physics and the pointer-to-rotation mapping behind tilt cards.

pub mod spring;
pub mod tilt;

pub use tilt::{Bounds, Depth, TiltSurface, PERSPECTIVE_PX};
