use image::imageops::{self, colorops::BiLevel};
use image::{GrayImage, Luma, RgbaImage};
use imageproc::stats::histogram;

/// Contrast factor applied before binarizing in one bit mode
pub const ONE_BIT_CONTRAST: f32 = 2.0;

/// Calculate luminance from an RGBA image
///
/// Formula: L = 0.299*R + 0.587*G + 0.114*B (ITU-R 601), computed in
/// 16.16 fixed point and rounded. Alpha is ignored.
///
/// # Arguments
/// * `img` - Input RGBA image
///
/// # Returns
/// Grayscale image with luminance values
pub fn calculate_luminance(img: &RgbaImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let pixel = img.get_pixel(x, y);
            let r = pixel[0] as u32;
            let g = pixel[1] as u32;
            let b = pixel[2] as u32;

            let luminance = (r * 19595 + g * 38470 + b * 7471 + 0x8000) >> 16;
            output.put_pixel(x, y, Luma([luminance as u8]));
        }
    }

    output
}

/// Mean luminance rounded to the nearest integer
///
/// Returns 0 for an empty image.
pub fn mean_luminance(img: &GrayImage) -> u8 {
    let pixel_count = img.width() as u64 * img.height() as u64;
    if pixel_count == 0 {
        return 0;
    }

    let hist = histogram(img);
    let sum: u64 = hist.channels[0]
        .iter()
        .enumerate()
        .map(|(value, &count)| value as u64 * count as u64)
        .sum();

    ((sum as f64 / pixel_count as f64) + 0.5) as u8
}

/// Stretch luminance away from the image mean
///
/// Each pixel becomes `mean + factor * (pixel - mean)`, clamped to [0, 255].
/// A factor of 1.0 leaves the image unchanged.
pub fn boost_contrast(img: &GrayImage, factor: f32) -> GrayImage {
    let (width, height) = img.dimensions();
    let mean = mean_luminance(img) as f32;
    let mut output = GrayImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let value = img.get_pixel(x, y)[0] as f32;
            let boosted = (mean + factor * (value - mean)) as i32;
            output.put_pixel(x, y, Luma([boosted.clamp(0, 255) as u8]));
        }
    }

    output
}

/// Reduce to pure black and white with Floyd-Steinberg error diffusion
///
/// # Returns
/// Binary image (0 or 255)
pub fn binarize(img: &GrayImage) -> GrayImage {
    let mut output = img.clone();
    imageops::dither(&mut output, &BiLevel);
    output
}
