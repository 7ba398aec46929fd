use serde::{Deserialize, Serialize};

/// Named color/stylistic filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterKind {
    /// Gaussian blur, radius 5, sigma 2.
    Blur,
    /// Monochrome conversion.
    Mono,
    /// Sepia tone.
    Sepia,
    /// Matched but not implemented; applied as a pass-through.
    Mosaic,
    /// Pixelation with 8-pixel blocks, via the secondary engine.
    Pixel,
    /// Color inversion.
    Negative,
    /// Oil-paint effect, radius 5.
    Paint,
    #[default]
    None,
}

impl FilterKind {
    /// Resolve a filter from its key. Matching is exact; unrecognized values
    /// fall through to `None`.
    pub fn parse(s: &str) -> Self {
        match s {
            "blur" => FilterKind::Blur,
            "mono" => FilterKind::Mono,
            "sepia" => FilterKind::Sepia,
            "mosaic" => FilterKind::Mosaic,
            "pixel" => FilterKind::Pixel,
            "negative" => FilterKind::Negative,
            "paint" => FilterKind::Paint,
            _ => FilterKind::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterKind::Blur => "blur",
            FilterKind::Mono => "mono",
            FilterKind::Sepia => "sepia",
            FilterKind::Mosaic => "mosaic",
            FilterKind::Pixel => "pixel",
            FilterKind::Negative => "negative",
            FilterKind::Paint => "paint",
            FilterKind::None => "none",
        }
    }
}

impl From<String> for FilterKind {
    fn from(s: String) -> Self {
        FilterKind::parse(&s)
    }
}

impl From<FilterKind> for String {
    fn from(filter: FilterKind) -> String {
        filter.as_str().to_string()
    }
}
