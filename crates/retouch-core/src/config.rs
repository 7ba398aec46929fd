//! Configuration module
//!
//! Editor configuration is fixed at construction and never mutated: the
//! overlay font source and the error mode of the top-level pipeline.

use std::path::Path;

use crate::error::EditError;

/// How the top-level `edit` pipeline reports stage failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Log the failure and resolve with no output. Callers cannot tell a
    /// failed edit from an edit that produced nothing.
    #[default]
    Resolve,
    /// Surface the failure to the caller.
    Propagate,
}

/// Overlay font source, reused for every text overlay the editor draws.
#[derive(Clone, Default)]
pub enum FontSetting {
    /// The DejaVu Sans face embedded in the processing crate.
    #[default]
    BuiltIn,
    /// A TTF/OTF face supplied by the caller.
    Bytes(Vec<u8>),
}

impl FontSetting {
    /// Load a TTF/OTF file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EditError> {
        Ok(FontSetting::Bytes(std::fs::read(path)?))
    }
}

impl std::fmt::Debug for FontSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontSetting::BuiltIn => write!(f, "FontSetting::BuiltIn"),
            FontSetting::Bytes(bytes) => write!(f, "FontSetting::Bytes({} bytes)", bytes.len()),
        }
    }
}

/// Immutable editor configuration.
#[derive(Debug, Clone, Default)]
pub struct EditorConfig {
    pub font: FontSetting,
    pub error_mode: ErrorMode,
}
