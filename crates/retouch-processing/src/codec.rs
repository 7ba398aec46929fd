//! Encoded-buffer helpers: decode, format detection, and format-preserving
//! re-encode.

use std::io::Cursor;

use bytes::Bytes;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use retouch_core::EditError;

/// Decode an encoded buffer, guessing the container format from content.
pub fn decode_image(data: &[u8]) -> Result<DynamicImage, EditError> {
    let cursor = Cursor::new(data);
    let reader = ImageReader::new(cursor).with_guessed_format()?;
    Ok(reader.decode()?)
}

/// Container format of an encoded buffer.
pub fn guess_format(data: &[u8]) -> Result<ImageFormat, EditError> {
    Ok(image::guess_format(data)?)
}

/// Output format for a MIME type. Only formats the engine can encode are
/// accepted.
pub fn format_for_mime(mime: &str) -> Result<ImageFormat, EditError> {
    match mime {
        "image/jpeg" | "image/jpg" => Ok(ImageFormat::Jpeg),
        "image/png" => Ok(ImageFormat::Png),
        "image/gif" => Ok(ImageFormat::Gif),
        "image/webp" => Ok(ImageFormat::WebP),
        "image/bmp" => Ok(ImageFormat::Bmp),
        "image/tiff" => Ok(ImageFormat::Tiff),
        other => Err(EditError::UnsupportedFormat(other.to_string())),
    }
}

/// Encode a working image into `format`, normalizing the color type to what
/// the target encoder accepts.
pub fn encode_image(img: &DynamicImage, format: ImageFormat) -> Result<Bytes, EditError> {
    let (width, height) = img.dimensions();
    let estimated_size = (width * height * 3) as usize;
    let mut buffer = Vec::with_capacity(estimated_size);
    let mut cursor = Cursor::new(&mut buffer);

    match format {
        // The JPEG encoder has no alpha channel.
        ImageFormat::Jpeg => match img {
            DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => {
                img.write_to(&mut cursor, format)?
            }
            _ => DynamicImage::ImageRgb8(img.to_rgb8()).write_to(&mut cursor, format)?,
        },
        // The GIF and WebP encoders take RGB8/RGBA8 only.
        ImageFormat::Gif | ImageFormat::WebP => match img {
            DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => {
                img.write_to(&mut cursor, format)?
            }
            _ => DynamicImage::ImageRgba8(img.to_rgba8()).write_to(&mut cursor, format)?,
        },
        _ => img.write_to(&mut cursor, format)?,
    }

    Ok(Bytes::from(buffer))
}
