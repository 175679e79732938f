//! Catalogue of the operations the engine offers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One catalogued operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Sunset,
    NegativeFilm,
    Rotate,
    AdjustBrightness,
    Resize,
    Base64Decode,
    Grayscale,
    Base64Encode,
    Fusion,
    Fingerprint,
    Ascii,
    LossyExport,
}

impl Action {
    /// Menu label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sunset => "Sunset",
            Self::NegativeFilm => "NegativeFilm",
            Self::Rotate => "Rotate",
            Self::AdjustBrightness => "AdjustBrightness",
            Self::Resize => "Resize",
            Self::Base64Decode => "Base64Dec",
            Self::Grayscale => "ToGray",
            Self::Base64Encode => "Base64Enc",
            Self::Fusion => "Fusion",
            Self::Fingerprint => "FingerPrint",
            Self::Ascii => "Ascii",
            Self::LossyExport => "Jpeg",
        }
    }

    /// Prefix of the artifact name this action writes, `None` when the
    /// action only returns a value.
    pub const fn output_prefix(&self) -> Option<&'static str> {
        match self {
            Self::Sunset => Some("Sunset"),
            Self::NegativeFilm => Some("NegativeFilm"),
            Self::Rotate => Some("Rotate"),
            Self::AdjustBrightness => Some("AdjBrit"),
            Self::Resize => Some("Resize"),
            Self::Base64Decode => Some("base64Dec"),
            Self::Grayscale => Some("Gray"),
            Self::Base64Encode => Some("base64"),
            Self::Fusion => Some("fusion"),
            Self::Fingerprint => None,
            Self::Ascii => Some("Ascii"),
            Self::LossyExport => Some("Jpeg"),
        }
    }

    /// Every action, in menu order.
    pub fn all() -> &'static [Self] {
        const ALL: [Action; 12] = [
            Action::Sunset,
            Action::NegativeFilm,
            Action::Rotate,
            Action::AdjustBrightness,
            Action::Resize,
            Action::Base64Decode,
            Action::Grayscale,
            Action::Base64Encode,
            Action::Fusion,
            Action::Fingerprint,
            Action::Ascii,
            Action::LossyExport,
        ];
        &ALL
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
