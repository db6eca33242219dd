use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Unsupported")]
    Unsupported,

    #[error("No display available")]
    NoDisplay,

    #[error("screen capture failed: {0}")]
    Capture(String),

    #[error("input simulation failed: {0}")]
    Input(String),

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode page image")]
    Encode(#[from] image::ImageError),

    #[error("capture cancelled")]
    Cancelled,
}

impl FolioError {
    pub(crate) fn invalid_config<S: Into<String>>(reason: S) -> Self {
        FolioError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

pub type FolioResult<T> = Result<T, FolioError>;
