//! The editing pipeline: preset sizing, filter, and centered text overlay
//! over an encoded buffer.

use ab_glyph::FontArc;
use bytes::Bytes;
use image::DynamicImage;
use retouch_core::{
    Color, EditError, EditOptions, EditorConfig, ErrorMode, FilterKind, FontSetting, Gravity,
    SizePreset,
};

use crate::codec;
use crate::image::crop::ImageCrop;
use crate::image::filters::ImageFilters;
use crate::image::pixelate;
use crate::image::processor::{ImageMetadata, ImageProcessor, ImageSize};
use crate::image::resize::{ImageResize, ResizeDimensions};
use crate::image::text::TextOverlay;

/// Square preset frame edge.
const SQUARE_EDGE: u32 = 200;
/// Aspect-preserving preset widths.
const MEDIUM_WIDTH: u32 = 400;
const SMALL_WIDTH: u32 = 300;
const XSMALL_WIDTH: u32 = 100;
const FALLBACK_WIDTH: u32 = 600;
/// Fixed filter parameters.
const BLUR_RADIUS: f32 = 5.0;
const BLUR_SIGMA: f32 = 2.0;
const PAINT_RADIUS: u32 = 5;
const PIXELATE_BLOCK_SIZE: u32 = 8;

/// Default overlay face, compiled in so the editor works out of the box.
pub(crate) static BUILTIN_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Vertical text offset: a quarter of the image height, truncated at each
/// halving step.
fn vertical_text_offset(height: u32) -> u32 {
    (height / 2) / 2
}

/// Preset-driven image editor.
///
/// Holds the overlay font and error mode fixed at construction; a single
/// instance serves any number of concurrent `edit` calls.
#[derive(Clone)]
pub struct ImageEditor {
    font: FontArc,
    error_mode: ErrorMode,
}

impl ImageEditor {
    /// Build an editor from configuration. Fails when the configured font
    /// cannot be parsed.
    pub fn new(config: EditorConfig) -> Result<Self, EditError> {
        let font = match config.font {
            FontSetting::BuiltIn => FontArc::try_from_slice(BUILTIN_FONT),
            FontSetting::Bytes(bytes) => FontArc::try_from_vec(bytes),
        }
        .map_err(|e| EditError::Font(e.to_string()))?;

        Ok(ImageEditor {
            font,
            error_mode: config.error_mode,
        })
    }

    /// Run the full pipeline: sizing preset, filter, centered text overlay.
    ///
    /// Under `ErrorMode::Resolve` any stage failure is logged and the call
    /// returns `Ok(None)`; under `ErrorMode::Propagate` the error is
    /// returned. Success is `Ok(Some(buffer))`.
    pub async fn edit(
        &self,
        buffer: Bytes,
        mimetype: &str,
        options: EditOptions,
    ) -> Result<Option<Bytes>, EditError> {
        let editor = self.clone();
        let mimetype = mimetype.to_string();
        // Decode and pixel work are CPU-bound; run off the async pool to
        // avoid blocking other tasks.
        let result =
            tokio::task::spawn_blocking(move || editor.run_pipeline(&buffer, &mimetype, &options))
                .await
                .unwrap_or_else(|e| Err(EditError::Internal(format!("edit task failed: {e}"))));

        match result {
            Ok(edited) => Ok(Some(edited)),
            Err(err) => match self.error_mode {
                ErrorMode::Resolve => {
                    tracing::error!(error = %err, kind = err.kind(), "edit pipeline failed");
                    Ok(None)
                }
                ErrorMode::Propagate => Err(err),
            },
        }
    }

    fn run_pipeline(
        &self,
        buffer: &[u8],
        mimetype: &str,
        options: &EditOptions,
    ) -> Result<Bytes, EditError> {
        let sized = self.apply_preset(
            buffer,
            mimetype,
            options.preset,
            options.custom_width,
            options.custom_height,
        )?;
        let filtered = self.apply_filter(&sized, mimetype, options.filter)?;
        let size = self.size(&filtered)?;
        let text_y = i64::from(vertical_text_offset(size.height));
        self.write(
            &filtered,
            &options.text,
            0,
            text_y,
            Gravity::Center,
            options.color,
            options.font_size,
        )
    }

    /// Select and perform exactly one sizing strategy. Named presets take
    /// precedence over custom dimensions; the custom branch is reachable
    /// only from the `Default` sentinel.
    pub fn apply_preset(
        &self,
        data: &[u8],
        mimetype: &str,
        preset: SizePreset,
        custom_width: Option<u32>,
        custom_height: Option<u32>,
    ) -> Result<Bytes, EditError> {
        tracing::debug!(?preset, "applying sizing preset");
        match preset {
            SizePreset::Square => {
                let gravity = if mimetype == "image/gif" {
                    Gravity::NorthWest
                } else {
                    Gravity::Center
                };
                let covered = self.resize_to_cover(data, SQUARE_EDGE, SQUARE_EDGE)?;
                self.crop(&covered, SQUARE_EDGE, SQUARE_EDGE, gravity, 0, 0)
            }
            SizePreset::Medium => self.resize(data, Some(MEDIUM_WIDTH), None),
            SizePreset::Small => self.resize(data, Some(SMALL_WIDTH), None),
            SizePreset::XSmall => self.resize(data, Some(XSMALL_WIDTH), None),
            SizePreset::Original => Ok(Bytes::copy_from_slice(data)),
            SizePreset::Default => {
                if custom_width.is_some() || custom_height.is_some() {
                    self.resize(data, custom_width, custom_height)
                } else {
                    self.resize(data, Some(FALLBACK_WIDTH), None)
                }
            }
        }
    }

    /// Select and perform exactly one filter; `None` passes the buffer
    /// through unchanged.
    pub fn apply_filter(
        &self,
        data: &[u8],
        mimetype: &str,
        filter: FilterKind,
    ) -> Result<Bytes, EditError> {
        tracing::debug!(?filter, "applying filter");
        match filter {
            FilterKind::Blur => self.blur(data, BLUR_RADIUS, BLUR_SIGMA),
            FilterKind::Mono => self.mono(data),
            FilterKind::Sepia => self.sepia(data),
            FilterKind::Mosaic => {
                // No engine implementation behind this key.
                tracing::warn!("mosaic filter is not implemented; passing buffer through");
                Ok(Bytes::copy_from_slice(data))
            }
            FilterKind::Pixel => self.pixelate(data, mimetype, PIXELATE_BLOCK_SIZE),
            FilterKind::Negative => self.negative(data),
            FilterKind::Paint => self.paint(data, PAINT_RADIUS),
            FilterKind::None => Ok(Bytes::copy_from_slice(data)),
        }
    }

    /// Decode, transform, and re-encode in the buffer's own format.
    fn transform<F>(&self, data: &[u8], op: F) -> Result<Bytes, EditError>
    where
        F: FnOnce(&DynamicImage) -> Result<DynamicImage, EditError>,
    {
        let format = codec::guess_format(data)?;
        let img = codec::decode_image(data)?;
        let transformed = op(&img)?;
        codec::encode_image(&transformed, format)
    }

    /// Resize; a `None` side derives from the aspect ratio, both `None`
    /// keeps the source dimensions.
    pub fn resize(
        &self,
        data: &[u8],
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<Bytes, EditError> {
        self.transform(data, |img| {
            Ok(ImageResize::apply_resize(
                img,
                ResizeDimensions::new(width, height),
            ))
        })
    }

    /// Scale until both dimensions reach the given minimums, preserving the
    /// aspect ratio.
    pub fn resize_to_cover(
        &self,
        data: &[u8],
        min_width: u32,
        min_height: u32,
    ) -> Result<Bytes, EditError> {
        self.transform(data, |img| {
            Ok(ImageResize::resize_to_cover(img, min_width, min_height))
        })
    }

    /// Gravity-anchored crop.
    pub fn crop(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
        gravity: Gravity,
        x_offset: u32,
        y_offset: u32,
    ) -> Result<Bytes, EditError> {
        self.transform(data, |img| {
            ImageCrop::apply(img, width, height, gravity, x_offset, y_offset)
        })
    }

    /// Gaussian blur. The kernel is derived from `sigma`; `radius` is
    /// validated with it as part of the engine's blur parameters.
    pub fn blur(&self, data: &[u8], radius: f32, sigma: f32) -> Result<Bytes, EditError> {
        if radius <= 0.0 || sigma <= 0.0 {
            return Err(EditError::InvalidInput(
                "blur radius and sigma must be positive".to_string(),
            ));
        }
        self.transform(data, |img| Ok(ImageFilters::blur(img, sigma)))
    }

    /// Monochrome conversion.
    pub fn mono(&self, data: &[u8]) -> Result<Bytes, EditError> {
        self.transform(data, |img| Ok(ImageFilters::mono(img)))
    }

    /// Sepia tone.
    pub fn sepia(&self, data: &[u8]) -> Result<Bytes, EditError> {
        self.transform(data, |img| Ok(ImageFilters::sepia(img)))
    }

    /// Color inversion.
    pub fn negative(&self, data: &[u8]) -> Result<Bytes, EditError> {
        self.transform(data, |img| Ok(ImageFilters::negative(img)))
    }

    /// Oil-paint effect.
    pub fn paint(&self, data: &[u8], radius: u32) -> Result<Bytes, EditError> {
        if radius == 0 {
            return Err(EditError::InvalidInput(
                "paint radius must be positive".to_string(),
            ));
        }
        self.transform(data, |img| Ok(ImageFilters::paint(img, radius)))
    }

    /// Pixelation through the secondary engine; the output encoding follows
    /// `mimetype`.
    pub fn pixelate(
        &self,
        data: &[u8],
        mimetype: &str,
        block_size: u32,
    ) -> Result<Bytes, EditError> {
        pixelate::pixelate(data, mimetype, block_size)
    }

    /// Width and height of a buffer, without modifying it.
    pub fn size(&self, data: &[u8]) -> Result<ImageSize, EditError> {
        ImageProcessor::dimensions(data)
    }

    /// Full buffer metadata.
    pub fn metadata(&self, data: &[u8]) -> Result<ImageMetadata, EditError> {
        ImageProcessor::metadata(data)
    }

    /// Text overlay. Empty text returns the buffer unchanged, byte for
    /// byte; otherwise the two-pass shadow/foreground draw re-encodes in the
    /// buffer's own format.
    #[allow(clippy::too_many_arguments)]
    pub fn write(
        &self,
        data: &[u8],
        text: &str,
        x: i64,
        y: i64,
        anchor: Gravity,
        color: Color,
        font_size: u32,
    ) -> Result<Bytes, EditError> {
        if text.is_empty() {
            return Ok(Bytes::copy_from_slice(data));
        }
        self.transform(data, |img| {
            TextOverlay::draw(img, &self.font, text, x, y, anchor, color, font_size)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_text_offset_matches_quarter_height() {
        // Two truncating halvings against a single truncating division by
        // four, across odd and even heights.
        for height in [0, 1, 2, 3, 5, 6, 7, 10, 101, 201, 202, 203, 1003] {
            assert_eq!(
                vertical_text_offset(height),
                height / 4,
                "height {height}"
            );
        }
        assert_eq!(vertical_text_offset(201), 50);
        assert_eq!(vertical_text_offset(1003), 250);
    }

    #[test]
    fn test_editor_construction_with_builtin_font() {
        assert!(ImageEditor::new(EditorConfig::default()).is_ok());
    }

    #[test]
    fn test_editor_construction_with_bad_font() {
        let config = EditorConfig {
            font: FontSetting::Bytes(vec![0, 1, 2, 3]),
            ..EditorConfig::default()
        };
        assert!(matches!(
            ImageEditor::new(config),
            Err(EditError::Font(_))
        ));
    }
}
