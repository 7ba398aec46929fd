use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

/// Color and stylistic filters over a decoded image.
pub struct ImageFilters;

impl ImageFilters {
    /// Gaussian blur. The kernel is derived from `sigma`.
    pub fn blur(img: &DynamicImage, sigma: f32) -> DynamicImage {
        DynamicImage::ImageRgba8(imageproc::filter::gaussian_blur_f32(&img.to_rgba8(), sigma))
    }

    /// Monochrome conversion to luma grayscale.
    pub fn mono(img: &DynamicImage) -> DynamicImage {
        img.grayscale()
    }

    /// Sepia tone.
    pub fn sepia(img: &DynamicImage) -> DynamicImage {
        let (width, height) = img.dimensions();
        let rgba = img.to_rgba8();
        let mut toned = RgbaImage::new(width, height);

        for (x, y, pixel) in rgba.enumerate_pixels() {
            let Rgba([r, g, b, a]) = *pixel;

            let tr = (0.393 * r as f32 + 0.769 * g as f32 + 0.189 * b as f32).min(255.0) as u8;
            let tg = (0.349 * r as f32 + 0.686 * g as f32 + 0.168 * b as f32).min(255.0) as u8;
            let tb = (0.272 * r as f32 + 0.534 * g as f32 + 0.131 * b as f32).min(255.0) as u8;

            toned.put_pixel(x, y, Rgba([tr, tg, tb, a]));
        }

        DynamicImage::ImageRgba8(toned)
    }

    /// Invert colors, leaving alpha untouched.
    pub fn negative(img: &DynamicImage) -> DynamicImage {
        let (width, height) = img.dimensions();
        let rgba = img.to_rgba8();
        let mut inverted = RgbaImage::new(width, height);

        for (x, y, pixel) in rgba.enumerate_pixels() {
            let Rgba([r, g, b, a]) = *pixel;
            inverted.put_pixel(x, y, Rgba([255 - r, 255 - g, 255 - b, a]));
        }

        DynamicImage::ImageRgba8(inverted)
    }

    /// Oil-paint effect: each output pixel takes the mean color of the most
    /// populated intensity bucket in its `radius` neighborhood.
    pub fn paint(img: &DynamicImage, radius: u32) -> DynamicImage {
        const LEVELS: usize = 20;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        let mut painted = RgbaImage::new(width, height);
        let r = radius as i32;

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let mut counts = [0u32; LEVELS];
                let mut sums = [[0u64; 3]; LEVELS];

                for dy in -r..=r {
                    for dx in -r..=r {
                        let nx = (x + dx).clamp(0, width as i32 - 1) as u32;
                        let ny = (y + dy).clamp(0, height as i32 - 1) as u32;

                        let p = rgba.get_pixel(nx, ny);
                        let intensity = (p[0] as u32 + p[1] as u32 + p[2] as u32) / 3;
                        let level = (intensity as usize * (LEVELS - 1)) / 255;

                        counts[level] += 1;
                        sums[level][0] += p[0] as u64;
                        sums[level][1] += p[1] as u64;
                        sums[level][2] += p[2] as u64;
                    }
                }

                let best = (0..LEVELS).max_by_key(|&i| counts[i]).unwrap_or(0);
                let n = counts[best].max(1) as u64;
                let alpha = rgba.get_pixel(x as u32, y as u32)[3];
                painted.put_pixel(
                    x as u32,
                    y as u32,
                    Rgba([
                        (sums[best][0] / n) as u8,
                        (sums[best][1] / n) as u8,
                        (sums[best][2] / n) as u8,
                        alpha,
                    ]),
                );
            }
        }

        DynamicImage::ImageRgba8(painted)
    }
}
