//! Pixelation via the secondary resize engine.
//!
//! Unlike every other operation, the scaling here runs through
//! `fast_image_resize`, and the output encoding comes from the caller's MIME
//! type rather than from the source buffer.

use bytes::Bytes;
use fast_image_resize::{FilterType, ResizeAlg, ResizeOptions, Resizer};
use image::{DynamicImage, GenericImageView};
use retouch_core::EditError;

use crate::codec;

/// Pixelate with square blocks of `block_size` pixels: block-average
/// downscale, then nearest-neighbor upscale back to the source dimensions.
pub fn pixelate(data: &[u8], mimetype: &str, block_size: u32) -> Result<Bytes, EditError> {
    if block_size == 0 {
        return Err(EditError::InvalidInput(
            "pixelate block size must be positive".to_string(),
        ));
    }

    let format = codec::format_for_mime(mimetype)?;
    let decoded = codec::decode_image(data)?;
    let src = DynamicImage::ImageRgba8(decoded.to_rgba8());
    let (width, height) = src.dimensions();

    let small_width = width.div_ceil(block_size).max(1);
    let small_height = height.div_ceil(block_size).max(1);

    let mut resizer = Resizer::new();

    let mut small = DynamicImage::new_rgba8(small_width, small_height);
    resizer
        .resize(
            &src,
            &mut small,
            &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Box)),
        )
        .map_err(|e| EditError::Pixelate(e.to_string()))?;

    let mut blocky = DynamicImage::new_rgba8(width, height);
    resizer
        .resize(
            &small,
            &mut blocky,
            &ResizeOptions::new().resize_alg(ResizeAlg::Nearest),
        )
        .map_err(|e| EditError::Pixelate(e.to_string()))?;

    codec::encode_image(&blocky, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    fn gradient_png(width: u32, height: u32) -> Bytes {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 3 % 256) as u8, (y * 3 % 256) as u8, 128, 255])
        });
        codec::encode_image(&DynamicImage::ImageRgba8(img), ImageFormat::Png).unwrap()
    }

    #[test]
    fn test_pixelate_keeps_dimensions() {
        let data = gradient_png(64, 48);
        let out = pixelate(&data, "image/png", 8).unwrap();
        let decoded = codec::decode_image(&out).unwrap();
        assert_eq!(decoded.dimensions(), (64, 48));
    }

    #[test]
    fn test_pixelate_blocks_are_uniform() {
        let data = gradient_png(64, 64);
        let out = pixelate(&data, "image/png", 8).unwrap();
        let rgba = codec::decode_image(&out).unwrap().to_rgba8();
        // Every pixel of an 8x8 block collapses to the block average.
        let anchor = *rgba.get_pixel(0, 0);
        for dy in 0..8 {
            for dx in 0..8 {
                assert_eq!(*rgba.get_pixel(dx, dy), anchor);
            }
        }
        // A neighboring block along the gradient differs.
        assert_ne!(*rgba.get_pixel(8, 0), anchor);
    }

    #[test]
    fn test_pixelate_output_format_follows_mimetype() {
        let data = gradient_png(32, 32);
        let out = pixelate(&data, "image/jpeg", 8).unwrap();
        assert_eq!(
            codec::guess_format(&out).unwrap(),
            image::ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_pixelate_unknown_mimetype_rejected() {
        let data = gradient_png(32, 32);
        assert!(matches!(
            pixelate(&data, "image/avif", 8),
            Err(EditError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_pixelate_zero_block_rejected() {
        let data = gradient_png(32, 32);
        assert!(pixelate(&data, "image/png", 0).is_err());
    }

    #[test]
    fn test_pixelate_block_larger_than_image() {
        let data = gradient_png(5, 5);
        let out = pixelate(&data, "image/png", 8).unwrap();
        let rgba = codec::decode_image(&out).unwrap().to_rgba8();
        // The whole image collapses to one averaged block.
        let anchor = *rgba.get_pixel(0, 0);
        assert_eq!(*rgba.get_pixel(4, 4), anchor);
    }
}
