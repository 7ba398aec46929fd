//! Image operations: sizing, cropping, filters, pixelation, text overlay,
//! and buffer inspection.

pub mod crop;
pub mod filters;
pub mod pixelate;
pub mod processor;
pub mod resize;
pub mod text;

pub use crop::ImageCrop;
pub use filters::ImageFilters;
pub use processor::{ImageMetadata, ImageProcessor, ImageSize};
pub use resize::{ImageResize, ResizeDimensions};
pub use text::TextOverlay;
