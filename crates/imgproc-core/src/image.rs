//! Normalized in-memory image representation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ImgprocError, Result};

/// One non-premultiplied RGBA pixel, 8 bits per channel.
pub type Rgba = [u8; 4];

/// Container format the image was decoded from.
///
/// Informational only; it never changes how pixels are processed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceFormat(String);

impl SourceFormat {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "unknown")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Normalized RGBA image. Always stored as non-premultiplied 8-bit RGBA,
/// row-major, `height` rows of `width` pixels.
///
/// The pixel grid is owned and never exposed mutably; every transform
/// builds a fresh `PixelImage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
    source_name: String,
    source_format: SourceFormat,
}

impl PixelImage {
    /// Build an image from a row-major pixel buffer.
    ///
    /// Fails with [`ImgprocError::BufferSize`] unless the buffer holds exactly
    /// `height * width` pixels.
    pub fn new(height: u32, width: u32, pixels: Vec<Rgba>) -> Result<Self> {
        let expected = height as usize * width as usize;
        if pixels.len() != expected {
            return Err(ImgprocError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
            source_name: String::new(),
            source_format: SourceFormat::default(),
        })
    }

    /// Image of `height × width` pixels all set to `pixel`.
    pub fn filled(height: u32, width: u32, pixel: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; height as usize * width as usize],
            source_name: String::new(),
            source_format: SourceFormat::default(),
        }
    }

    /// Attach the originating artifact's stem and container format.
    pub fn with_source(mut self, name: impl Into<String>, format: SourceFormat) -> Self {
        self.source_name = name.into();
        self.source_format = format;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Stem of the artifact this image was loaded from; empty for derived
    /// images with no single origin.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn source_format(&self) -> &SourceFormat {
        &self.source_format
    }

    /// Pixel at `(row, col)`. Panics when out of bounds, like slice indexing.
    pub fn pixel(&self, row: u32, col: u32) -> Rgba {
        assert!(row < self.height && col < self.width, "pixel ({row}, {col}) out of bounds");
        self.pixels[row as usize * self.width as usize + col as usize]
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Iterate over rows, each exactly `width` pixels long.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> {
        // `chunks_exact(0)` panics, and an empty image has no rows anyway.
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    /// Channel bytes in `R, G, B, A` order, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Build a derived image with the same dimensions, mapping every pixel.
    ///
    /// The result carries this image's source metadata.
    pub(crate) fn map_pixels(&self, f: impl Fn(Rgba) -> Rgba) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
            source_name: self.source_name.clone(),
            source_format: self.source_format.clone(),
        }
    }

    /// Copy of the source metadata onto a freshly computed grid.
    pub(crate) fn derive(&self, height: u32, width: u32, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(pixels.len(), height as usize * width as usize);
        Self {
            width,
            height,
            pixels,
            source_name: self.source_name.clone(),
            source_format: self.source_format.clone(),
        }
    }

    /// Drop source metadata, for results that have no single origin.
    pub(crate) fn anonymous(mut self) -> Self {
        self.source_name.clear();
        self.source_format = SourceFormat::default();
        self
    }
}
