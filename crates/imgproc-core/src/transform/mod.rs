//! Image transforms: per-pixel tone operators, geometry and fusion.
//!
//! Every operator takes its input by reference and returns a new image.

pub mod fusion;
pub mod geometry;
pub mod tone;

pub use fusion::fuse;
pub use geometry::rotate;
pub use tone::{adjust_brightness, grayscale, luma_rounded, negative, sunset};
