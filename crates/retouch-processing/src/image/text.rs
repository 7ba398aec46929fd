use ab_glyph::{FontArc, PxScale};
use image::{DynamicImage, GenericImageView, Rgba};
use imageproc::drawing::{draw_text_mut, text_size};
use retouch_core::{Color, EditError, Gravity};

/// Text overlay drawing.
pub struct TextOverlay;

impl TextOverlay {
    /// Draw `text` twice: a black drop shadow at `(x + 1, y + 1)` anchored
    /// by the caller's gravity, then the foreground at `(x, y)` with a
    /// forced `Center` anchor. The shadow pass honors the caller's anchor
    /// while the foreground pass is always centered; both passes share the
    /// font and scale.
    ///
    /// Empty text returns the image unchanged. The anchor selects the
    /// horizontal reference (left edge, centered, or right edge); the
    /// vertical position is the caller's `y` offset from the top.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        img: &DynamicImage,
        font: &FontArc,
        text: &str,
        x: i64,
        y: i64,
        anchor: Gravity,
        color: Color,
        font_size: u32,
    ) -> Result<DynamicImage, EditError> {
        if text.is_empty() {
            return Ok(img.clone());
        }
        if font_size == 0 {
            return Err(EditError::InvalidInput(
                "font size must be positive".to_string(),
            ));
        }

        let scale = PxScale::from(font_size as f32);
        let (text_width, _text_height) = text_size(scale, font, text);
        let (width, _height) = img.dimensions();

        let mut canvas = img.to_rgba8();

        let shadow_x = Self::anchor_x(anchor, width, text_width as i32) + x + 1;
        draw_text_mut(
            &mut canvas,
            Rgba(Color::BLACK.to_rgba()),
            shadow_x as i32,
            (y + 1) as i32,
            scale,
            font,
            text,
        );

        let foreground_x = Self::anchor_x(Gravity::Center, width, text_width as i32) + x;
        draw_text_mut(
            &mut canvas,
            Rgba(color.to_rgba()),
            foreground_x as i32,
            y as i32,
            scale,
            font,
            text,
        );

        Ok(DynamicImage::ImageRgba8(canvas))
    }

    /// Horizontal reference for a gravity column.
    fn anchor_x(anchor: Gravity, image_width: u32, text_width: i32) -> i64 {
        match anchor {
            Gravity::NorthWest | Gravity::West | Gravity::SouthWest => 0,
            Gravity::North | Gravity::Center | Gravity::South => {
                (i64::from(image_width) - i64::from(text_width)) / 2
            }
            Gravity::NorthEast | Gravity::East | Gravity::SouthEast => {
                i64::from(image_width) - i64::from(text_width)
            }
        }
    }
}
