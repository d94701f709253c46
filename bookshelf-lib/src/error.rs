use std::path::PathBuf;

use thiserror::Error;

use bookshelf_catalog::LookupError;

/// Errors that can occur while reading or writing `settings.toml`.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

impl SettingsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

/// Errors from the scan-a-barcode flow.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The decoder found nothing usable in the image.
    #[error("No barcode detected in image")]
    NoBarcode,

    #[error(transparent)]
    Lookup(#[from] LookupError),
}
