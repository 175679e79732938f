//! Conversion of decoded rasters into the normalized [`PixelImage`] form.
//!
//! Whatever colour model a decoder hands back is reduced to
//! non-premultiplied 8-bit RGBA here, once, at load time.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageReader};

use crate::error::{ImgprocError, Result};
use crate::image::{PixelImage, Rgba, SourceFormat};

/// Chroma subsampling layout of a planar YCbCr source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromaSubsampling {
    /// Full-resolution chroma.
    S444,
    /// Half horizontal chroma resolution.
    S422,
    /// Half horizontal and half vertical chroma resolution.
    S420,
    /// Half vertical chroma resolution.
    S440,
    /// Quarter horizontal chroma resolution.
    S411,
    /// Quarter horizontal and half vertical chroma resolution.
    S410,
}

impl ChromaSubsampling {
    /// Chroma plane position `(row, col)` for luma pixel `(y, x)`.
    fn chroma_position(self, y: usize, x: usize) -> (usize, usize) {
        match self {
            Self::S444 => (y, x),
            Self::S422 => (y, x / 2),
            Self::S420 => (y / 2, x / 2),
            Self::S440 => (y / 2, x),
            Self::S411 => (y, x / 4),
            Self::S410 => (y / 2, x / 4),
        }
    }
}

/// Planar luma-chroma raster.
#[derive(Debug, Clone)]
pub struct YCbCrPlanes {
    /// Image width in luma samples.
    pub width: u32,
    /// Image height in luma samples.
    pub height: u32,
    /// Luma plane.
    pub y: Vec<u8>,
    /// Blue-difference chroma plane.
    pub cb: Vec<u8>,
    /// Red-difference chroma plane.
    pub cr: Vec<u8>,
    /// Bytes per row of the Y plane.
    pub y_stride: usize,
    /// Bytes per row of the Cb and Cr planes.
    pub c_stride: usize,
    /// Chroma plane layout relative to the luma plane.
    pub subsampling: ChromaSubsampling,
}

impl YCbCrPlanes {
    /// Minimum `(luma, chroma)` plane lengths the declared layout indexes.
    fn required_lens(&self) -> (usize, usize) {
        if self.width == 0 || self.height == 0 {
            return (0, 0);
        }
        let last_y = self.height as usize - 1;
        let last_x = self.width as usize - 1;
        let (cy, cx) = self.subsampling.chroma_position(last_y, last_x);
        (last_y * self.y_stride + last_x + 1, cy * self.c_stride + cx + 1)
    }
}

/// A decoded source raster, tagged by colour model.
///
/// 16-bit buffers hold one `u16` per channel, in native order.
#[derive(Debug, Clone)]
pub enum SourceRaster {
    /// Non-premultiplied 8-bit RGBA.
    Nrgba8 { width: u32, height: u32, data: Vec<u8> },
    /// Non-premultiplied 16-bit RGBA.
    Nrgba16 { width: u32, height: u32, data: Vec<u16> },
    /// Alpha-premultiplied 8-bit RGBA.
    PremultipliedRgba8 { width: u32, height: u32, data: Vec<u8> },
    /// Alpha-premultiplied 16-bit RGBA.
    PremultipliedRgba16 { width: u32, height: u32, data: Vec<u16> },
    Gray8 { width: u32, height: u32, data: Vec<u8> },
    Gray16 { width: u32, height: u32, data: Vec<u16> },
    YCbCr(YCbCrPlanes),
    /// Anything else; sampled pixel by pixel through the decoder's own
    /// RGBA conversion.
    Generic(DynamicImage),
}

impl SourceRaster {
    /// Tag a decoder result with its colour model.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        match image {
            DynamicImage::ImageRgba8(buf) => Self::Nrgba8 { width, height, data: buf.into_raw() },
            DynamicImage::ImageRgba16(buf) => Self::Nrgba16 { width, height, data: buf.into_raw() },
            DynamicImage::ImageRgb16(buf) => Self::Nrgba16 {
                width,
                height,
                data: buf.as_raw().chunks_exact(3).flat_map(|p| [p[0], p[1], p[2], 0xffff]).collect(),
            },
            DynamicImage::ImageLumaA16(buf) => Self::Nrgba16 {
                width,
                height,
                data: buf.as_raw().chunks_exact(2).flat_map(|p| [p[0], p[0], p[0], p[1]]).collect(),
            },
            DynamicImage::ImageLuma8(buf) => Self::Gray8 { width, height, data: buf.into_raw() },
            DynamicImage::ImageLuma16(buf) => Self::Gray16 { width, height, data: buf.into_raw() },
            other => Self::Generic(other),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Nrgba8 { width, height, .. }
            | Self::Nrgba16 { width, height, .. }
            | Self::PremultipliedRgba8 { width, height, .. }
            | Self::PremultipliedRgba16 { width, height, .. }
            | Self::Gray8 { width, height, .. }
            | Self::Gray16 { width, height, .. } => (*width, *height),
            Self::YCbCr(planes) => (planes.width, planes.height),
            Self::Generic(image) => image.dimensions(),
        }
    }

    /// Number of samples a buffer of this model must hold.
    fn expected_len(&self) -> usize {
        let (width, height) = self.dimensions();
        let count = width as usize * height as usize;
        match self {
            Self::Gray8 { .. } | Self::Gray16 { .. } => count,
            _ => count * 4,
        }
    }

    fn check_len(&self, actual: usize) -> Result<()> {
        let expected = self.expected_len();
        if actual != expected {
            return Err(ImgprocError::BufferSize { expected, actual });
        }
        Ok(())
    }
}

/// Convert a source raster to non-premultiplied 8-bit RGBA.
pub fn normalize(source: &SourceRaster) -> Result<PixelImage> {
    let (width, height) = source.dimensions();

    let pixels: Vec<Rgba> = match source {
        SourceRaster::Nrgba8 { data, .. } => {
            source.check_len(data.len())?;
            data.chunks_exact(4)
                .map(|p| [p[0], p[1], p[2], p[3]])
                .collect()
        }
        SourceRaster::Nrgba16 { data, .. } => {
            source.check_len(data.len())?;
            data.chunks_exact(4)
                .map(|p| [high_byte(p[0]), high_byte(p[1]), high_byte(p[2]), high_byte(p[3])])
                .collect()
        }
        SourceRaster::PremultipliedRgba8 { data, .. } => {
            source.check_len(data.len())?;
            data.chunks_exact(4)
                .map(|p| unpremultiply8([p[0], p[1], p[2], p[3]]))
                .collect()
        }
        SourceRaster::PremultipliedRgba16 { data, .. } => {
            source.check_len(data.len())?;
            data.chunks_exact(4)
                .map(|p| unpremultiply16([p[0], p[1], p[2], p[3]]))
                .collect()
        }
        SourceRaster::Gray8 { data, .. } => {
            source.check_len(data.len())?;
            data.iter()
                .map(|&c| [c, c, c, 0xff])
                .collect()
        }
        SourceRaster::Gray16 { data, .. } => {
            source.check_len(data.len())?;
            data.iter()
                .map(|&c| {
                    let c = high_byte(c);
                    [c, c, c, 0xff]
                })
                .collect()
        }
        SourceRaster::YCbCr(planes) => ycbcr_pixels(planes)?,
        SourceRaster::Generic(image) => image.pixels().map(|(_, _, p)| p.0).collect(),
    };

    PixelImage::new(height, width, pixels)
}

/// Decode an encoded raster and normalize it.
///
/// `name` is the artifact's file name; its stem (everything before the first
/// `.`) becomes the image's source name.
pub fn decode(bytes: &[u8], name: &str) -> Result<PixelImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(ImgprocError::Io)?;
    let format = reader
        .format()
        .and_then(|f| f.extensions_str().first().copied())
        .map(SourceFormat::new)
        .unwrap_or_default();
    let decoded = reader.decode().map_err(ImgprocError::Decode)?;

    let image = normalize(&SourceRaster::from_dynamic(decoded))?;
    Ok(image.with_source(artifact_stem(name), format))
}

/// Read and decode an image file.
pub fn load(path: &Path) -> Result<PixelImage> {
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    decode(&bytes, &name)
}

/// Base name up to the first `.`: `"cat.final.png"` → `"cat"`.
pub fn artifact_stem(name: &str) -> &str {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    base.split('.').next().unwrap_or(base)
}

fn high_byte(value: u16) -> u8 {
    (value >> 8) as u8
}

fn unpremultiply8(p: Rgba) -> Rgba {
    let a = p[3];
    match a {
        0 => [0, 0, 0, 0],
        0xff => p,
        _ => {
            let scale = |c: u8| (c as u32 * 0xff / a as u32).min(0xff) as u8;
            [scale(p[0]), scale(p[1]), scale(p[2]), a]
        }
    }
}

fn unpremultiply16(p: [u16; 4]) -> Rgba {
    let a = p[3];
    match a {
        0 => [0, 0, 0, 0],
        0xffff => [high_byte(p[0]), high_byte(p[1]), high_byte(p[2]), 0xff],
        _ => {
            let scale = |c: u16| high_byte((c as u32 * 0xffff / a as u32).min(0xffff) as u16);
            [scale(p[0]), scale(p[1]), scale(p[2]), high_byte(a)]
        }
    }
}

fn ycbcr_pixels(planes: &YCbCrPlanes) -> Result<Vec<Rgba>> {
    let width = planes.width as usize;
    let height = planes.height as usize;
    let (y_len, c_len) = planes.required_lens();
    for (expected, actual) in [
        (y_len, planes.y.len()),
        (c_len, planes.cb.len()),
        (c_len, planes.cr.len()),
    ] {
        if actual < expected {
            return Err(ImgprocError::BufferSize { expected, actual });
        }
    }

    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let yi = y * planes.y_stride + x;
            let (cy, cx) = planes.subsampling.chroma_position(y, x);
            let ci = cy * planes.c_stride + cx;

            let [r, g, b] = ycbcr_to_rgb(planes.y[yi], planes.cb[ci], planes.cr[ci]);
            pixels.push([r, g, b, 0xff]);
        }
    }
    Ok(pixels)
}

/// JFIF YCbCr → RGB in 16.16 fixed point.
///
/// ```text
/// R = Y + 1.40200 × (Cr − 128)
/// G = Y − 0.34414 × (Cb − 128) − 0.71414 × (Cr − 128)
/// B = Y + 1.77200 × (Cb − 128)
/// ```
pub fn ycbcr_to_rgb(y: u8, cb: u8, cr: u8) -> [u8; 3] {
    let yy = y as i32 * 0x10101;
    let cb = cb as i32 - 128;
    let cr = cr as i32 - 128;

    let r = yy + 91881 * cr;
    let g = yy - 22554 * cb - 46802 * cr;
    let b = yy + 116130 * cb;

    [clamp_fixed(r), clamp_fixed(g), clamp_fixed(b)]
}

fn clamp_fixed(v: i32) -> u8 {
    (v >> 16).clamp(0, 0xff) as u8
}
