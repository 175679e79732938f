//! Half-and-half blend of two images.

use crate::error::{ImgprocError, Result};
use crate::image::PixelImage;
use crate::resample::resample;

/// Blend `base` with `overlay`, at `base`'s size.
///
/// `overlay` is bilinearly resized to `base`'s dimensions, then each colour
/// channel becomes `(a >> 1) + (b >> 1)`. Alpha comes from `base`. The
/// result carries no source name.
pub fn fuse(base: &PixelImage, overlay: &PixelImage) -> Result<PixelImage> {
    if base.is_empty() || overlay.is_empty() {
        return Err(ImgprocError::EmptyImage);
    }

    let overlay = resample(overlay, base.height(), base.width());
    let pixels = base
        .pixels()
        .iter()
        .zip(overlay.pixels())
        .map(|(a, b)| {
            let half = |c: usize| (a[c] >> 1) + (b[c] >> 1);
            [half(0), half(1), half(2), a[3]]
        })
        .collect();

    Ok(base.derive(base.height(), base.width(), pixels).anonymous())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::SourceFormat;

    #[test]
    fn test_fuse_halves_and_adds() {
        let a = PixelImage::filled(2, 2, [100, 100, 100, 255]).with_source("a", SourceFormat::new("png"));
        let b = PixelImage::filled(2, 2, [50, 50, 50, 255]);
        let out = fuse(&a, &b).unwrap();
        assert!(out.pixels().iter().all(|&p| p == [75, 75, 75, 255]));
        assert_eq!(out.source_name(), "");
    }

    #[test]
    fn test_fuse_drops_low_bits() {
        let a = PixelImage::filled(1, 1, [255, 1, 3, 10]);
        let b = PixelImage::filled(1, 1, [255, 1, 3, 200]);
        assert_eq!(fuse(&a, &b).unwrap().pixel(0, 0), [254, 0, 2, 10]);
    }

    #[test]
    fn test_fuse_uses_base_dimensions() {
        let a = PixelImage::filled(3, 5, [0, 0, 0, 255]);
        let b = PixelImage::filled(8, 2, [200, 200, 200, 255]);
        let out = fuse(&a, &b).unwrap();
        assert_eq!((out.height(), out.width()), (3, 5));
        assert!(out.pixels().iter().all(|&p| p == [100, 100, 100, 255]));
    }

    #[test]
    fn test_fuse_rejects_empty() {
        let a = PixelImage::filled(2, 2, [0; 4]);
        let empty = PixelImage::new(0, 0, vec![]).unwrap();
        assert!(matches!(fuse(&a, &empty), Err(ImgprocError::EmptyImage)));
    }
}
