use image::{DynamicImage, GenericImageView};
use retouch_core::{EditError, Gravity};

/// Gravity-anchored cropping.
pub struct ImageCrop;

impl ImageCrop {
    /// Crop a `width` x `height` window positioned by `gravity` and shifted
    /// by `x_offset`/`y_offset`. The window is clamped to the image bounds,
    /// so a crop larger than the image degenerates to the full image.
    pub fn apply(
        img: &DynamicImage,
        width: u32,
        height: u32,
        gravity: Gravity,
        x_offset: u32,
        y_offset: u32,
    ) -> Result<DynamicImage, EditError> {
        if width == 0 || height == 0 {
            return Err(EditError::InvalidInput(
                "crop dimensions must be positive".to_string(),
            ));
        }

        let (img_width, img_height) = img.dimensions();
        let crop_width = width.min(img_width);
        let crop_height = height.min(img_height);

        let (anchor_x, anchor_y) = gravity.origin(img_width, img_height, crop_width, crop_height);
        let x = anchor_x.saturating_add(x_offset).min(img_width - crop_width);
        let y = anchor_y
            .saturating_add(y_offset)
            .min(img_height - crop_height);

        Ok(img.crop_imm(x, y, crop_width, crop_height))
    }
}
