//! Bilinear resize with half-pixel-centre sampling.
//!
//! ```text
//! src_x = (tx + 0.5) × (src_width / target_width) − 0.5
//! x0 = max(floor(src_x), 0),  x1 = min(x0 + 1, src_width − 1)
//! fx = src_x − x0
//! top    = p[y0][x0] × (1 − fx) + p[y0][x1] × fx
//! bottom = p[y1][x0] × (1 − fx) + p[y1][x1] × fx
//! out    = top × (1 − fy) + bottom × fy        (truncated to u8)
//! ```
//!
//! All four channels are resampled identically. Results are truncated, not
//! rounded, so a resize biases values slightly low.

use crate::error::{ImgprocError, Result};
use crate::image::{PixelImage, Rgba};

/// Resize `image` to exactly `height × width` pixels.
///
/// Both target dimensions must be positive and the source must not be empty.
pub fn resize(image: &PixelImage, height: u32, width: u32) -> Result<PixelImage> {
    if height == 0 || width == 0 {
        return Err(ImgprocError::InvalidParameter(
            "resize target height and width must be greater than 0",
        ));
    }
    if image.is_empty() {
        return Err(ImgprocError::EmptyImage);
    }
    Ok(resample(image, height, width))
}

/// Unchecked resize for callers that pass fixed, non-zero targets.
///
/// `image` must be non-empty and `height`, `width` positive.
pub(crate) fn resample(image: &PixelImage, height: u32, width: u32) -> PixelImage {
    let src_w = image.width() as usize;
    let src_h = image.height() as usize;
    let src = image.pixels();

    let x_scale = src_w as f64 / width as f64;
    let y_scale = src_h as f64 / height as f64;

    // Horizontal taps depend only on the column; compute them once.
    let columns: Vec<Tap> = (0..width as usize)
        .map(|tx| Tap::new(tx, x_scale, src_w))
        .collect();

    let mut pixels = Vec::with_capacity(height as usize * width as usize);
    for ty in 0..height as usize {
        let row = Tap::new(ty, y_scale, src_h);
        let upper = &src[row.lo * src_w..(row.lo + 1) * src_w];
        let lower = &src[row.hi * src_w..(row.hi + 1) * src_w];

        for col in &columns {
            let mut out: Rgba = [0; 4];
            for (c, value) in out.iter_mut().enumerate() {
                let top = col.blend(upper[col.lo][c], upper[col.hi][c]);
                let bottom = col.blend(lower[col.lo][c], lower[col.hi][c]);
                // `as` saturates, keeping edge extrapolation inside [0, 255].
                *value = row.mix(top, bottom) as u8;
            }
            pixels.push(out);
        }
    }

    image.derive(height, width, pixels)
}

/// Source sample pair and fractional weight along one axis.
#[derive(Debug, Clone, Copy)]
struct Tap {
    lo: usize,
    hi: usize,
    frac: f64,
}

impl Tap {
    fn new(target: usize, scale: f64, src_len: usize) -> Self {
        let pos = (target as f64 + 0.5) * scale - 0.5;
        let lo = (pos.floor().max(0.0) as usize).min(src_len - 1);
        let hi = (lo + 1).min(src_len - 1);
        Self { lo, hi, frac: pos - lo as f64 }
    }

    fn blend(&self, a: u8, b: u8) -> f64 {
        self.mix(a as f64, b as f64)
    }

    // Same weights as `a × (1 − frac) + b × frac`, but exact when a == b.
    fn mix(&self, a: f64, b: f64) -> f64 {
        a + (b - a) * self.frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(height: u32, width: u32) -> PixelImage {
        let pixels = (0..height * width)
            .map(|i| {
                let v = (i * 7 % 256) as u8;
                [v, 255 - v, v / 2, 255]
            })
            .collect();
        PixelImage::new(height, width, pixels).unwrap()
    }

    #[test]
    fn test_resize_output_dimensions() {
        let image = gradient(5, 7);
        for (h, w) in [(1, 1), (3, 2), (10, 14), (5, 20), (64, 3)] {
            let out = resize(&image, h, w).unwrap();
            assert_eq!((out.height(), out.width()), (h, w));
            assert_eq!(out.rows().count(), h as usize);
        }
    }

    #[test]
    fn test_resize_to_own_size_is_identity() {
        let image = gradient(6, 9);
        let out = resize(&image, 6, 9).unwrap();
        assert_eq!(out.pixels(), image.pixels());
    }

    #[test]
    fn test_resize_solid_stays_solid() {
        let image = PixelImage::filled(3, 4, [90, 180, 30, 200]);
        let out = resize(&image, 11, 2).unwrap();
        assert!(out.pixels().iter().all(|&p| p == [90, 180, 30, 200]));
    }

    #[test]
    fn test_upscale_interpolates_between_columns() {
        let image = PixelImage::new(1, 2, vec![[0, 0, 0, 255], [100, 100, 100, 255]]).unwrap();
        let out = resize(&image, 1, 4).unwrap();
        // src_x = -0.25, 0.25, 0.75, 1.25
        let reds: Vec<u8> = out.pixels().iter().map(|p| p[0]).collect();
        assert_eq!(reds[0], 0);
        assert_eq!(reds[1], 25);
        assert_eq!(reds[2], 75);
        assert_eq!(reds[3], 100);
    }

    #[test]
    fn test_resize_keeps_source_name() {
        let image = gradient(2, 2).with_source("cat", Default::default());
        assert_eq!(resize(&image, 4, 4).unwrap().source_name(), "cat");
    }

    #[test]
    fn test_resize_rejects_zero_target() {
        let image = gradient(2, 2);
        assert!(matches!(resize(&image, 0, 3), Err(ImgprocError::InvalidParameter(_))));
        assert!(matches!(resize(&image, 3, 0), Err(ImgprocError::InvalidParameter(_))));
    }

    #[test]
    fn test_resize_rejects_empty_source() {
        let image = PixelImage::new(0, 0, vec![]).unwrap();
        assert!(matches!(resize(&image, 2, 2), Err(ImgprocError::EmptyImage)));
    }
}
