//! Byte-level encodings of a [`PixelImage`]: PNG, JPEG and base64-wrapped PNG.

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{ImgprocError, Result};
use crate::image::PixelImage;

/// Extension of the lossless interchange format.
pub const LOSSLESS_EXT: &str = "png";
/// Extension of the lossy export format.
pub const LOSSY_EXT: &str = "jpg";

/// Quality bounds for lossy export; out-of-range requests are clamped.
pub const MIN_QUALITY: i32 = 1;
pub const MAX_QUALITY: i32 = 100;

/// Encode as RGBA PNG.
pub fn encode_lossless(image: &PixelImage) -> Result<Vec<u8>> {
    if image.is_empty() {
        return Err(ImgprocError::EmptyImage);
    }

    let mut buffer = Vec::new();
    PngEncoder::new(Cursor::new(&mut buffer))
        .write_image(image.as_bytes(), image.width(), image.height(), ExtendedColorType::Rgba8)
        .map_err(ImgprocError::Encode)?;
    Ok(buffer)
}

/// Encode as JPEG at `quality`, clamped to `[1, 100]`.
///
/// JPEG carries no alpha plane, so alpha is dropped.
pub fn encode_lossy(image: &PixelImage, quality: i32) -> Result<Vec<u8>> {
    if image.is_empty() {
        return Err(ImgprocError::EmptyImage);
    }

    let quality = quality.clamp(MIN_QUALITY, MAX_QUALITY) as u8;
    let rgb: Vec<u8> = image
        .pixels()
        .iter()
        .flat_map(|&[r, g, b, _]| [r, g, b])
        .collect();

    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(Cursor::new(&mut buffer), quality)
        .write_image(&rgb, image.width(), image.height(), ExtendedColorType::Rgb8)
        .map_err(ImgprocError::Encode)?;
    Ok(buffer)
}

/// PNG-encode `image` and wrap the bytes in standard base64.
pub fn encode_base64(image: &PixelImage) -> Result<String> {
    Ok(STANDARD.encode(encode_lossless(image)?))
}

/// Unwrap standard base64 text. Line breaks anywhere and surrounding
/// whitespace are ignored, so wrapped output decodes.
///
/// The decoded bytes are returned as-is; nothing checks that they form an
/// image.
pub fn decode_base64(text: &[u8]) -> Result<Vec<u8>> {
    let payload: Vec<u8> = text
        .trim_ascii()
        .iter()
        .copied()
        .filter(|&b| !matches!(b, b'\r' | b'\n'))
        .collect();
    Ok(STANDARD.decode(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::decode;

    fn checker() -> PixelImage {
        let pixels = (0..16)
            .map(|i| if i % 2 == 0 { [255, 0, 0, 255] } else { [0, 0, 255, 128] })
            .collect();
        PixelImage::new(4, 4, pixels).unwrap()
    }

    #[test]
    fn test_png_preserves_pixels() {
        let bytes = encode_lossless(&checker()).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
        let back = decode(&bytes, "checker.png").unwrap();
        assert_eq!(back.pixels(), checker().pixels());
        assert_eq!(back.source_format().as_str(), "png");
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let empty = PixelImage::new(0, 3, vec![]).unwrap();
        assert!(matches!(encode_lossless(&empty), Err(ImgprocError::EmptyImage)));
        assert!(matches!(encode_lossy(&empty, 80), Err(ImgprocError::EmptyImage)));
        assert!(matches!(encode_base64(&empty), Err(ImgprocError::EmptyImage)));
    }

    #[test]
    fn test_jpeg_quality_is_clamped() {
        let image = PixelImage::filled(8, 8, [40, 80, 120, 255]);
        assert_eq!(encode_lossy(&image, -5).unwrap(), encode_lossy(&image, 1).unwrap());
        assert_eq!(encode_lossy(&image, 1000).unwrap(), encode_lossy(&image, 100).unwrap());
    }

    #[test]
    fn test_jpeg_decodes_opaque() {
        let bytes = encode_lossy(&PixelImage::filled(8, 8, [40, 80, 120, 10]), 95).unwrap();
        let back = decode(&bytes, "x.jpg").unwrap();
        assert_eq!((back.height(), back.width()), (8, 8));
        assert!(back.pixels().iter().all(|p| p[3] == 255));
    }

    #[test]
    fn test_base64_wraps_png() {
        let text = encode_base64(&checker()).unwrap();
        let bytes = decode_base64(format!("{text}\n").as_bytes()).unwrap();
        assert_eq!(bytes, encode_lossless(&checker()).unwrap());
    }

    #[test]
    fn test_base64_decode_accepts_wrapped_lines() {
        let text = encode_base64(&checker()).unwrap();
        let wrapped: Vec<&str> = text
            .as_bytes()
            .chunks(76)
            .map(|line| std::str::from_utf8(line).unwrap())
            .collect();
        let bytes = decode_base64(wrapped.join("\r\n").as_bytes()).unwrap();
        assert_eq!(bytes, encode_lossless(&checker()).unwrap());
    }

    #[test]
    fn test_base64_decode_passes_non_images_through() {
        let text = STANDARD.encode(b"not an image");
        assert_eq!(decode_base64(text.as_bytes()).unwrap(), b"not an image");
    }

    #[test]
    fn test_base64_decode_rejects_invalid_text() {
        assert!(matches!(decode_base64(b"***"), Err(ImgprocError::Base64(_))));
    }
}
