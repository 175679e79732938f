//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Apply one image operation and write the result under the result directory
#[derive(Parser, Debug)]
#[command(name = "imgproc")]
#[command(version, about = "Raster image transforms, fingerprints and ASCII art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Directory input files are read from (default: $IMGPROC_RAW_DIR or ./raw)
    #[arg(long, global = true)]
    pub raw_dir: Option<PathBuf>,

    /// Directory artifacts are written to (default: $IMGPROC_RESULT_DIR or ./result)
    #[arg(long, global = true)]
    pub result_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List the action catalogue
    Actions,
    /// Warm tone: attenuate green and blue
    Sunset { file: String },
    /// Colour negative
    Negative { file: String },
    /// Weighted grayscale
    Gray { file: String },
    /// Transpose the pixel grid
    Rotate { file: String },
    /// Scale colour channels by RATE, minus 100
    Brightness {
        file: String,
        /// Negative values are treated as 0
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
    },
    /// Bilinear resize
    Resize {
        file: String,
        #[arg(long)]
        height: u32,
        #[arg(long)]
        width: u32,
    },
    /// Blend two images at the first one's size
    Fuse { base: String, overlay: String },
    /// Print the 64-bit difference hash
    Fingerprint {
        file: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the Hamming distance between two fingerprints
    Compare { first: String, second: String },
    /// Render as ASCII art
    Ascii { file: String },
    /// Export as JPEG
    Jpeg {
        file: String,
        /// Clamped into 1..=100
        #[arg(long, default_value = "75", allow_negative_numbers = true)]
        quality: i32,
    },
    /// Write the image as base64 text
    Base64Encode { file: String },
    /// Turn base64 text back into an image file
    Base64Decode {
        file: String,
        /// Refuse payloads that are not a decodable image
        #[arg(long)]
        validate: bool,
    },
}
