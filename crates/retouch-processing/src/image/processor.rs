//! Buffer inspection: validation, size query, metadata extraction.

use image::GenericImageView;
use serde::{Deserialize, Serialize};
use retouch_core::EditError;

use crate::codec;

/// Dimensions of a decoded buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Metadata extracted from an encoded buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub size_bytes: u64,
}

pub struct ImageProcessor;

impl ImageProcessor {
    /// Validate that a buffer decodes.
    pub fn validate(data: &[u8]) -> Result<(), EditError> {
        codec::decode_image(data).map(|_| ())
    }

    /// Width and height of an encoded buffer, without modifying it.
    pub fn dimensions(data: &[u8]) -> Result<ImageSize, EditError> {
        let img = codec::decode_image(data)?;
        let (width, height) = img.dimensions();
        Ok(ImageSize { width, height })
    }

    /// Full metadata: dimensions plus container format and byte size.
    pub fn metadata(data: &[u8]) -> Result<ImageMetadata, EditError> {
        let format = codec::guess_format(data)
            .map(|f| format!("{f:?}"))
            .unwrap_or_else(|_| "unknown".to_string());
        let size = Self::dimensions(data)?;
        Ok(ImageMetadata {
            width: size.width,
            height: size.height,
            format,
            size_bytes: data.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

    fn test_png(width: u32, height: u32) -> bytes::Bytes {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([255, 0, 0, 255]),
        ));
        codec::encode_image(&img, ImageFormat::Png).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let data = test_png(120, 80);
        let size = ImageProcessor::dimensions(&data).unwrap();
        assert_eq!(size.width, 120);
        assert_eq!(size.height, 80);
    }

    #[test]
    fn test_validate_invalid() {
        assert!(ImageProcessor::validate(b"not an image").is_err());
    }

    #[test]
    fn test_metadata() {
        let data = test_png(32, 16);
        let metadata = ImageProcessor::metadata(&data).unwrap();
        assert_eq!(metadata.width, 32);
        assert_eq!(metadata.height, 16);
        assert_eq!(metadata.format, "Png");
        assert_eq!(metadata.size_bytes, data.len() as u64);
    }
}
