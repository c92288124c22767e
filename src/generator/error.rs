use std::path::PathBuf;

use thiserror::Error;

/// User-visible failures of the generate/save flow
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Please enter text or URL to convert to QR code.")]
    EmptyInput,

    #[error("QR code generation failed: {0}")]
    Encoding(String),

    #[error("Create a QR code first.")]
    NoImage,

    #[error("Failed to save QR code: {source} ({})", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl From<qrcode::types::QrError> for GeneratorError {
    fn from(err: qrcode::types::QrError) -> Self {
        GeneratorError::Encoding(err.to_string())
    }
}
