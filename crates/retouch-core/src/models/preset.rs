use serde::{Deserialize, Serialize};

/// Named sizing strategies, selectable by a short or long key.
///
/// `Default` is the sentinel for "default sizing": it is the only variant
/// from which custom dimensions are honored, and without them it falls back
/// to a width-600 resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SizePreset {
    /// Cover-resize to 200 and crop to exactly 200x200.
    Square,
    /// Width 400, height derived from the aspect ratio.
    Medium,
    /// Width 300, height derived from the aspect ratio.
    Small,
    /// Width 100, height derived from the aspect ratio.
    XSmall,
    /// Pass the buffer through unchanged.
    Original,
    #[default]
    Default,
}

impl SizePreset {
    /// Resolve a preset from its short or long spelling. Matching is exact;
    /// unrecognized values fall through to `Default`.
    pub fn parse(s: &str) -> Self {
        match s {
            "sq" | "square" => SizePreset::Square,
            "md" | "medium" => SizePreset::Medium,
            "sm" | "small" => SizePreset::Small,
            "xs" | "xsmall" => SizePreset::XSmall,
            "or" | "original" => SizePreset::Original,
            _ => SizePreset::Default,
        }
    }

    /// Canonical long spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            SizePreset::Square => "square",
            SizePreset::Medium => "medium",
            SizePreset::Small => "small",
            SizePreset::XSmall => "xsmall",
            SizePreset::Original => "original",
            SizePreset::Default => "default",
        }
    }
}

impl From<String> for SizePreset {
    fn from(s: String) -> Self {
        SizePreset::parse(&s)
    }
}

impl From<SizePreset> for String {
    fn from(preset: SizePreset) -> String {
        preset.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_spellings() {
        assert_eq!(SizePreset::parse("sq"), SizePreset::Square);
        assert_eq!(SizePreset::parse("square"), SizePreset::Square);
        assert_eq!(SizePreset::parse("md"), SizePreset::Medium);
        assert_eq!(SizePreset::parse("medium"), SizePreset::Medium);
        assert_eq!(SizePreset::parse("sm"), SizePreset::Small);
        assert_eq!(SizePreset::parse("small"), SizePreset::Small);
        assert_eq!(SizePreset::parse("xs"), SizePreset::XSmall);
        assert_eq!(SizePreset::parse("xsmall"), SizePreset::XSmall);
        assert_eq!(SizePreset::parse("or"), SizePreset::Original);
        assert_eq!(SizePreset::parse("original"), SizePreset::Original);
    }

    #[test]
    fn test_parse_is_exact() {
        // No trimming, no case folding.
        assert_eq!(SizePreset::parse("SQ"), SizePreset::Default);
        assert_eq!(SizePreset::parse(" sq"), SizePreset::Default);
        assert_eq!(SizePreset::parse("unknown"), SizePreset::Default);
        assert_eq!(SizePreset::parse(""), SizePreset::Default);
        assert_eq!(SizePreset::parse("default"), SizePreset::Default);
    }

    #[test]
    fn test_round_trips_through_canonical_spelling() {
        for preset in [
            SizePreset::Square,
            SizePreset::Medium,
            SizePreset::Small,
            SizePreset::XSmall,
            SizePreset::Original,
            SizePreset::Default,
        ] {
            assert_eq!(SizePreset::parse(preset.as_str()), preset);
        }
    }
}
