use serde::{Deserialize, Serialize};

use crate::models::{Color, FilterKind, SizePreset};

/// Option bundle for a single edit call.
///
/// Defaults mirror the editor's contract: default sizing, no overlay text,
/// opaque white, font size 30, no filter, no custom dimensions. Custom
/// dimensions are honored only when `preset` is `SizePreset::Default`; a
/// named preset always wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditOptions {
    pub preset: SizePreset,
    pub text: String,
    pub color: Color,
    pub font_size: u32,
    pub filter: FilterKind,
    pub custom_width: Option<u32>,
    pub custom_height: Option<u32>,
}

impl Default for EditOptions {
    fn default() -> Self {
        EditOptions {
            preset: SizePreset::Default,
            text: String::new(),
            color: Color::WHITE,
            font_size: 30,
            filter: FilterKind::None,
            custom_width: None,
            custom_height: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EditOptions::default();
        assert_eq!(options.preset, SizePreset::Default);
        assert!(options.text.is_empty());
        assert_eq!(options.color, Color::WHITE);
        assert_eq!(options.font_size, 30);
        assert_eq!(options.filter, FilterKind::None);
        assert_eq!(options.custom_width, None);
        assert_eq!(options.custom_height, None);
    }

    #[test]
    fn test_deserialize_short_keys() {
        let options: EditOptions = serde_json::from_str(
            r##"{"preset": "sq", "text": "hello", "color": "#ff0000", "filter": "blur"}"##,
        )
        .unwrap();
        assert_eq!(options.preset, SizePreset::Square);
        assert_eq!(options.text, "hello");
        assert_eq!(options.color, Color::rgb(255, 0, 0));
        assert_eq!(options.filter, FilterKind::Blur);
        // Unspecified fields keep their defaults.
        assert_eq!(options.font_size, 30);
    }

    #[test]
    fn test_deserialize_unknown_preset_falls_back() {
        let options: EditOptions =
            serde_json::from_str(r#"{"preset": "poster", "custom_width": 250}"#).unwrap();
        assert_eq!(options.preset, SizePreset::Default);
        assert_eq!(options.custom_width, Some(250));
    }
}
