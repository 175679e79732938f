//! Named output artifacts written under a result directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::action::Action;
use crate::codec::{self, LOSSLESS_EXT, LOSSY_EXT};
use crate::error::{ImgprocError, Result};
use crate::image::PixelImage;
use crate::normalize::{self, artifact_stem};

/// How base64 text is turned back into an image artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Base64Decode {
    /// Write the decoded bytes unchecked.
    #[default]
    Passthrough,
    /// Refuse bytes that do not decode as an image.
    Validate,
}

/// Writes artifacts into `result_dir`, creating it on first write.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    result_dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(result_dir: impl Into<PathBuf>) -> Self {
        Self { result_dir: result_dir.into() }
    }

    pub fn result_dir(&self) -> &Path {
        &self.result_dir
    }

    /// `<prefix>-<stem>.<ext>` under the result directory.
    pub fn path_for(&self, prefix: &str, stem: &str, ext: &str) -> PathBuf {
        self.result_dir.join(format!("{prefix}-{stem}.{ext}"))
    }

    /// PNG-encode the output of `action` as `<prefix>-<sourceName>.png`.
    pub fn save_image(&self, action: Action, image: &PixelImage) -> Result<PathBuf> {
        let prefix = output_prefix(action)?;
        let path = self.path_for(prefix, image.source_name(), LOSSLESS_EXT);
        self.write(&path, &codec::encode_lossless(image)?)?;
        Ok(path)
    }

    /// PNG-encode a fusion result as `fusion-<nameA><nameB>.png`.
    pub fn save_fusion(&self, fused: &PixelImage, base: &PixelImage, overlay: &PixelImage) -> Result<PathBuf> {
        let stem = format!("{}{}", base.source_name(), overlay.source_name());
        let path = self.path_for(output_prefix(Action::Fusion)?, &stem, LOSSLESS_EXT);
        self.write(&path, &codec::encode_lossless(fused)?)?;
        Ok(path)
    }

    /// JPEG-encode `image` as `Jpeg-<sourceName>.jpg`.
    pub fn save_lossy(&self, image: &PixelImage, quality: i32) -> Result<PathBuf> {
        let path = self.path_for(output_prefix(Action::LossyExport)?, image.source_name(), LOSSY_EXT);
        self.write(&path, &codec::encode_lossy(image, quality)?)?;
        Ok(path)
    }

    /// Write ASCII art as `Ascii-<sourceName>.txt`.
    pub fn save_ascii(&self, image: &PixelImage, text: &str) -> Result<PathBuf> {
        let path = self.path_for(output_prefix(Action::Ascii)?, image.source_name(), "txt");
        self.write(&path, text.as_bytes())?;
        Ok(path)
    }

    /// Write the base64 form of `image` as `base64-<sourceName>.txt`.
    pub fn save_base64(&self, image: &PixelImage) -> Result<PathBuf> {
        let path = self.path_for(output_prefix(Action::Base64Encode)?, image.source_name(), "txt");
        self.write(&path, codec::encode_base64(image)?.as_bytes())?;
        Ok(path)
    }

    /// Decode the base64 text file `input` into `base64Dec-<stem>.png`.
    pub fn restore_base64(&self, input: &Path, mode: Base64Decode) -> Result<PathBuf> {
        let text = fs::read(input)?;
        tracing::debug!("read {} bytes of base64 from {}", text.len(), input.display());
        let bytes = codec::decode_base64(&text)?;

        if mode == Base64Decode::Validate {
            normalize::decode(&bytes, "")?;
        }

        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let path = self.path_for(
            output_prefix(Action::Base64Decode)?,
            artifact_stem(&name),
            LOSSLESS_EXT,
        );
        self.write(&path, &bytes)?;
        Ok(path)
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.result_dir)?;
        fs::write(path, bytes)?;
        tracing::debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

fn output_prefix(action: Action) -> Result<&'static str> {
    action
        .output_prefix()
        .ok_or(ImgprocError::InvalidParameter("action does not produce an artifact"))
}
