//! Error types module
//!
//! All errors across the workspace are unified under the `EditError` enum:
//! raster-engine failures, pixelation-engine failures, invalid caller input,
//! font problems, and I/O from the file helpers.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// The raster engine rejected a decode, transform, or encode call.
    #[error("image engine error: {0}")]
    Image(#[from] image::ImageError),

    /// The secondary engine used for pixelation failed.
    #[error("pixelation engine error: {0}")]
    Pixelate(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("font error: {0}")]
    Font(String),

    /// The requested output encoding is not one the engine can produce.
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl EditError {
    /// Short variant name, useful for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            EditError::Image(_) => "Image",
            EditError::Pixelate(_) => "Pixelate",
            EditError::InvalidInput(_) => "InvalidInput",
            EditError::Font(_) => "Font",
            EditError::UnsupportedFormat(_) => "UnsupportedFormat",
            EditError::Io(_) => "Io",
            EditError::Internal(_) => "Internal",
        }
    }
}
