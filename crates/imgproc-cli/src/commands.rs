//! Dispatch of parsed commands to the core library.

use std::path::PathBuf;

use imgproc_core::{
    Action, ArtifactStore, Base64Decode, Fingerprint, ImgprocError, PixelImage, adjust_brightness,
    fingerprint, fuse, grayscale, load, negative, render_ascii, resize, rotate, sunset,
};
use serde::Serialize;

use crate::args::Command;
use crate::config::AppConfig;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ImgprocError),
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// What a command produced, ready to be printed.
#[derive(Debug)]
pub enum Outcome {
    /// An artifact was written to this path.
    Written(PathBuf),
    /// A value to print on stdout.
    Text(String),
}

#[derive(Serialize)]
struct FingerprintReport<'a> {
    source: &'a str,
    fingerprint: Fingerprint,
}

/// Run one command against the configured directories.
pub fn run(command: &Command, config: &AppConfig) -> Result<Outcome, CliError> {
    let store = ArtifactStore::new(&config.result_dir);
    tracing::debug!("artifacts go to {}", store.result_dir().display());

    let outcome = match command {
        Command::Actions => {
            let labels: Vec<&str> = Action::all().iter().map(|a| a.label()).collect();
            Outcome::Text(labels.join("\n"))
        }
        Command::Sunset { file } => {
            let image = sunset(&open_input(config, file)?);
            Outcome::Written(store.save_image(Action::Sunset, &image)?)
        }
        Command::Negative { file } => {
            let image = negative(&open_input(config, file)?);
            Outcome::Written(store.save_image(Action::NegativeFilm, &image)?)
        }
        Command::Gray { file } => {
            let image = grayscale(&open_input(config, file)?);
            Outcome::Written(store.save_image(Action::Grayscale, &image)?)
        }
        Command::Rotate { file } => {
            let image = rotate(&open_input(config, file)?);
            Outcome::Written(store.save_image(Action::Rotate, &image)?)
        }
        Command::Brightness { file, rate } => {
            let image = adjust_brightness(&open_input(config, file)?, *rate);
            Outcome::Written(store.save_image(Action::AdjustBrightness, &image)?)
        }
        Command::Resize { file, height, width } => {
            let image = resize(&open_input(config, file)?, *height, *width)?;
            Outcome::Written(store.save_image(Action::Resize, &image)?)
        }
        Command::Fuse { base, overlay } => {
            let base = open_input(config, base)?;
            let overlay = open_input(config, overlay)?;
            let fused = fuse(&base, &overlay)?;
            Outcome::Written(store.save_fusion(&fused, &base, &overlay)?)
        }
        Command::Fingerprint { file, json } => {
            let image = open_input(config, file)?;
            let fp = fingerprint(&image)?;
            if *json {
                let report = FingerprintReport { source: image.source_name(), fingerprint: fp };
                Outcome::Text(serde_json::to_string(&report)?)
            } else {
                Outcome::Text(fp.to_string())
            }
        }
        Command::Compare { first, second } => {
            let a = fingerprint(&open_input(config, first)?)?;
            let b = fingerprint(&open_input(config, second)?)?;
            Outcome::Text(a.hamming_distance(&b).to_string())
        }
        Command::Ascii { file } => {
            let image = open_input(config, file)?;
            let text = render_ascii(&image)?;
            Outcome::Written(store.save_ascii(&image, &text)?)
        }
        Command::Jpeg { file, quality } => {
            Outcome::Written(store.save_lossy(&open_input(config, file)?, *quality)?)
        }
        Command::Base64Encode { file } => Outcome::Written(store.save_base64(&open_input(config, file)?)?),
        Command::Base64Decode { file, validate } => {
            let mode = if *validate { Base64Decode::Validate } else { Base64Decode::Passthrough };
            Outcome::Written(store.restore_base64(&config.input_path(file), mode)?)
        }
    };
    Ok(outcome)
}

fn open_input(config: &AppConfig, name: &str) -> Result<PixelImage, ImgprocError> {
    load(&config.input_path(name))
}
