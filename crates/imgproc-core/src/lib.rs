//! imgproc core — raster image decoding, transforms, and export.
//!
//! Decoded images are normalized once into [`PixelImage`] (non-premultiplied
//! 8-bit RGBA); every operator consumes and returns `PixelImage` values.

pub mod action;
pub mod artifact;
pub mod ascii;
pub mod codec;
pub mod error;
pub mod fingerprint;
pub mod image;
pub mod normalize;
pub mod resample;
pub mod transform;

// Re-exports for convenience.
pub use action::Action;
pub use artifact::{ArtifactStore, Base64Decode};
pub use ascii::render_ascii;
pub use error::{ImgprocError, Result};
pub use fingerprint::{Fingerprint, fingerprint};
pub use crate::image::{PixelImage, Rgba, SourceFormat};
pub use normalize::{SourceRaster, decode, load, normalize};
pub use resample::resize;
pub use transform::{adjust_brightness, fuse, grayscale, negative, rotate, sunset};
