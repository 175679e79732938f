//! Runtime configuration for the command-line front end.

use std::path::PathBuf;

/// Default directory inputs are resolved against.
const DEFAULT_RAW_DIR: &str = "raw";
/// Default directory artifacts are written to.
const DEFAULT_RESULT_DIR: &str = "result";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory input images and base64 texts are read from.
    pub raw_dir: PathBuf,
    /// Directory artifacts are written to.
    pub result_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            raw_dir: std::env::var_os("IMGPROC_RAW_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RAW_DIR)),
            result_dir: std::env::var_os("IMGPROC_RESULT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULT_DIR)),
        }
    }
}

impl AppConfig {
    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, raw_dir: Option<PathBuf>, result_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = raw_dir {
            self.raw_dir = dir;
        }
        if let Some(dir) = result_dir {
            self.result_dir = dir;
        }
        self
    }

    /// Path of an input artifact named on the command line.
    pub fn input_path(&self, name: &str) -> PathBuf {
        self.raw_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_dirs() {
        let config = AppConfig {
            raw_dir: "a".into(),
            result_dir: "b".into(),
        }
        .with_overrides(Some("in".into()), None);
        assert_eq!(config.raw_dir, PathBuf::from("in"));
        assert_eq!(config.result_dir, PathBuf::from("b"));
        assert_eq!(config.input_path("cat.png"), PathBuf::from("in").join("cat.png"));
    }
}
