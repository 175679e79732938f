//! Perceptual difference hash.
//!
//! The image is shrunk to 9 × 8, reduced to luma, and each row contributes
//! one bit per adjacent column pair: `1` when the left sample is brighter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ImgprocError, Result};
use crate::image::{PixelImage, Rgba};
use crate::resample::resample;

/// Rows of the hash grid.
const HASH_ROWS: u32 = 8;
/// Columns sampled per row; one more than the bits emitted per row.
const HASH_COLS: u32 = 9;

/// 64-bit difference hash. Bit 63 is the first comparison of the first row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

impl Fingerprint {
    pub const BITS: usize = 64;

    pub fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u64 {
        self.0
    }

    /// Number of differing bits. Small distances mean similar images.
    pub fn hamming_distance(&self, other: &Self) -> u32 {
        (self.0 ^ other.0).count_ones()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:064b}", self.0)
    }
}

impl FromStr for Fingerprint {
    type Err = ImgprocError;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != Self::BITS || !s.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(ImgprocError::InvalidParameter(
                "fingerprint must be 64 characters of '0' or '1'",
            ));
        }
        u64::from_str_radix(s, 2)
            .map(Self)
            .map_err(|_| ImgprocError::InvalidParameter("fingerprint is not binary"))
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Luma without rounding bias: `(30 R + 59 G + 11 B) / 100`.
fn luma_truncated([r, g, b, _]: Rgba) -> u32 {
    (r as u32 * 30 + g as u32 * 59 + b as u32 * 11) / 100
}

/// Compute the difference hash of `image`.
pub fn fingerprint(image: &PixelImage) -> Result<Fingerprint> {
    if image.is_empty() {
        return Err(ImgprocError::EmptyImage);
    }

    let small = resample(image, HASH_ROWS, HASH_COLS);
    let mut bits = 0u64;
    for row in small.rows() {
        let luma: Vec<u32> = row.iter().map(|&p| luma_truncated(p)).collect();
        for pair in luma.windows(2) {
            // Ties count as 0.
            bits = (bits << 1) | u64::from(pair[0] > pair[1]);
        }
    }
    Ok(Fingerprint(bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal_ramp(descending: bool) -> PixelImage {
        let width = 90;
        let pixels = (0..16)
            .flat_map(move |_| {
                (0..width).map(move |x| {
                    let v = (x * 255 / (width - 1)) as u8;
                    let v = if descending { 255 - v } else { v };
                    [v, v, v, 255]
                })
            })
            .collect();
        PixelImage::new(16, width, pixels).unwrap()
    }

    #[test]
    fn test_solid_image_is_all_zeros() {
        let fp = fingerprint(&PixelImage::filled(20, 30, [123, 45, 67, 255])).unwrap();
        assert_eq!(fp.to_string(), "0".repeat(64));
    }

    #[test]
    fn test_descending_ramp_is_all_ones() {
        let fp = fingerprint(&horizontal_ramp(true)).unwrap();
        assert_eq!(fp.to_string(), "1".repeat(64));
        assert_eq!(fingerprint(&horizontal_ramp(false)).unwrap().bits(), 0);
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let image = horizontal_ramp(true);
        assert_eq!(fingerprint(&image).unwrap(), fingerprint(&image).unwrap());
    }

    #[test]
    fn test_display_is_64_chars() {
        let fp = Fingerprint::from_bits(1);
        let s = fp.to_string();
        assert_eq!(s.len(), 64);
        assert!(s.ends_with('1'));
        assert_eq!(s.parse::<Fingerprint>().unwrap(), fp);
    }

    #[test]
    fn test_hamming_distance() {
        let a = Fingerprint::from_bits(0b1011);
        let b = Fingerprint::from_bits(0b0001);
        assert_eq!(a.hamming_distance(&b), 2);
        assert_eq!(a.hamming_distance(&a), 0);
    }

    #[test]
    fn test_parse_rejects_bad_strings() {
        assert!("0101".parse::<Fingerprint>().is_err());
        assert!("2".repeat(64).parse::<Fingerprint>().is_err());
    }

    #[test]
    fn test_fingerprint_rejects_empty() {
        let empty = PixelImage::new(0, 0, vec![]).unwrap();
        assert!(matches!(fingerprint(&empty), Err(ImgprocError::EmptyImage)));
    }
}
