use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

/// Resampling filter used for every resize in the pipeline.
const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Target dimensions for a resize; a `None` side is derived from the source
/// aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct ResizeDimensions {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ResizeDimensions {
    pub fn new(width: Option<u32>, height: Option<u32>) -> Self {
        ResizeDimensions { width, height }
    }

    pub fn width(width: u32) -> Self {
        ResizeDimensions {
            width: Some(width),
            height: None,
        }
    }

    /// Resolve against a source, deriving an absent side from the aspect
    /// ratio. With both sides absent the source dimensions are kept.
    pub fn resolve(self, orig_width: u32, orig_height: u32) -> (u32, u32) {
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => {
                let h = (w as f32 * orig_height as f32 / orig_width as f32).round() as u32;
                (w, h.max(1))
            }
            (None, Some(h)) => {
                let w = (h as f32 * orig_width as f32 / orig_height as f32).round() as u32;
                (w.max(1), h)
            }
            (None, None) => (orig_width, orig_height),
        }
    }
}

/// Image resize operations.
pub struct ImageResize;

impl ImageResize {
    /// Apply a resize described by `ResizeDimensions`. A target equal to the
    /// source returns the image untouched.
    pub fn apply_resize(img: &DynamicImage, dimensions: ResizeDimensions) -> DynamicImage {
        let (orig_width, orig_height) = img.dimensions();
        let (target_width, target_height) = dimensions.resolve(orig_width, orig_height);

        if (target_width, target_height) == (orig_width, orig_height) {
            return img.clone();
        }
        img.resize_exact(target_width, target_height, RESAMPLE_FILTER)
    }

    /// Scale until both dimensions reach at least `min_width` x
    /// `min_height`, preserving the aspect ratio. This is the fill-style
    /// resize used before cropping to a fixed frame.
    pub fn resize_to_cover(img: &DynamicImage, min_width: u32, min_height: u32) -> DynamicImage {
        let (orig_width, orig_height) = img.dimensions();

        let scale_width = min_width as f32 / orig_width as f32;
        let scale_height = min_height as f32 / orig_height as f32;
        let scale = scale_width.max(scale_height);

        let target_width = ((orig_width as f32 * scale).round() as u32).max(min_width);
        let target_height = ((orig_height as f32 * scale).round() as u32).max(min_height);

        if (target_width, target_height) == (orig_width, orig_height) {
            return img.clone();
        }
        img.resize_exact(target_width, target_height, RESAMPLE_FILTER)
    }
}
