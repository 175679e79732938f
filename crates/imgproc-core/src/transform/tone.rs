//! Per-pixel tone operators. Alpha is never touched and dimensions are kept.

use crate::image::{PixelImage, Rgba};

/// Green and blue attenuation applied by [`sunset`].
const SUNSET_FACTOR: f64 = 0.7;

/// Fixed offset subtracted after scaling in [`adjust_brightness`].
const BRIGHTNESS_OFFSET: f64 = 100.0;

/// Warm "sunset" tone: green and blue scaled by 0.7, truncated.
pub fn sunset(image: &PixelImage) -> PixelImage {
    image.map_pixels(|[r, g, b, a]| {
        let scale = |c: u8| (c as f64 * SUNSET_FACTOR) as u8;
        [r, scale(g), scale(b), a]
    })
}

/// Colour negative: `255 − c` on R, G and B.
pub fn negative(image: &PixelImage) -> PixelImage {
    image.map_pixels(|[r, g, b, a]| [u8::MAX - r, u8::MAX - g, u8::MAX - b, a])
}

/// Weighted luma with a rounding bias.
///
/// ```text
/// luma = (30 R + 59 G + 11 B + 50) / 100
/// ```
pub fn luma_rounded([r, g, b, _]: Rgba) -> u8 {
    ((r as u32 * 30 + g as u32 * 59 + b as u32 * 11 + 50) / 100) as u8
}

/// Grayscale: R, G and B all replaced by [`luma_rounded`].
pub fn grayscale(image: &PixelImage) -> PixelImage {
    image.map_pixels(|p| {
        let y = luma_rounded(p);
        [y, y, y, p[3]]
    })
}

/// Brightness: `clamp(c × rate − 100, 0, 255)` on R, G and B, truncated.
///
/// Negative (or NaN) rates are treated as 0.
pub fn adjust_brightness(image: &PixelImage, rate: f64) -> PixelImage {
    let rate = rate.max(0.0);
    image.map_pixels(|[r, g, b, a]| {
        let adjust = |c: u8| (c as f64 * rate - BRIGHTNESS_OFFSET).clamp(0.0, 255.0) as u8;
        [adjust(r), adjust(g), adjust(b), a]
    })
}
