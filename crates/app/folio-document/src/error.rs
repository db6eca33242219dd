use std::path::PathBuf;

pub type AssembleResult<T> = std::result::Result<T, AssembleError>;

#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    #[error("no page images found in {0}")]
    NoImages(PathBuf),

    #[error("failed to list page images in {path}: {reason}")]
    List { path: PathBuf, reason: String },

    #[error("failed to decode {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to render PDF: {0}")]
    Render(String),

    #[error("failed to write document to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid document options: {reason}")]
    InvalidOptions { reason: String },
}
