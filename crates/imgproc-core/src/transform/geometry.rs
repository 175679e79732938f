//! Geometric transforms.

use crate::image::PixelImage;

/// Transpose the pixel grid: `out[i][j] = in[j][i]`.
///
/// The result is `width × height`. This mirrors along the main diagonal; it
/// is not an aspect-preserving 90° turn.
pub fn rotate(image: &PixelImage) -> PixelImage {
    let src_w = image.width() as usize;
    let src_h = image.height() as usize;
    let src = image.pixels();

    let mut pixels = Vec::with_capacity(src.len());
    for i in 0..src_w {
        for j in 0..src_h {
            pixels.push(src[j * src_w + i]);
        }
    }

    image.derive(image.width(), image.height(), pixels)
}
