//! Retouch Core Library
//!
//! This crate provides the shared vocabulary of the retouch workspace: the
//! unified error type, editor configuration, and the preset/filter/color
//! models consumed by the processing pipeline.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{EditorConfig, ErrorMode, FontSetting};
pub use error::EditError;
pub use models::{Color, EditOptions, FilterKind, Gravity, SizePreset};
