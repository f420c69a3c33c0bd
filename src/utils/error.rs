//! Error handling for Iconcheck

use thiserror::Error;

/// Main error type for Iconcheck
#[derive(Debug, Error)]
pub enum IconCheckError {
    #[error("Failed to decode image: {0}")]
    DecodeError(#[from] image::ImageError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
