use std::path::PathBuf;

use thiserror::Error;

use crate::layout::InvalidDimensions;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("invalid dimensions for image {path}: {source}")]
    InvalidImageDimensions {
        path: PathBuf,
        #[source]
        source: InvalidDimensions,
    },
    #[error("failed to read image {path}: {message}")]
    ImageRead { path: PathBuf, message: String },
    #[error("failed to write document {path}: {source}")]
    DocumentWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
