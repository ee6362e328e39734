use crate::ascii::{crop_rows, quantize};
use crate::config::{PaletteMode, RenderConfig};
use crate::error::{ArtError, Result};
use crate::filters::{ONE_BIT_CONTRAST, binarize, boost_contrast, calculate_luminance};
use crate::palette::Palette;
use image::{RgbaImage, imageops};
use std::path::Path;

/// Height correction for monospaced cells being taller than wide
pub const CELL_ASPECT_CORRECTION: f64 = 0.6;

/// Largest grid, in cells, a render may allocate
pub const MAX_GRID_CELLS: u64 = 1 << 22;

/// Grid dimensions for a source image at a target width
///
/// Height is `src_height / src_width * target_width * 0.6`, truncated and
/// never less than one row.
pub fn grid_dimensions(src_width: u32, src_height: u32, target_width: u32) -> (u32, u32) {
    let aspect_ratio = src_height as f64 / src_width as f64;
    let height = (aspect_ratio * target_width as f64 * CELL_ASPECT_CORRECTION) as u32;
    (target_width, height.max(1))
}

/// Grid dimensions, rejected when the grid exceeds [`MAX_GRID_CELLS`]
pub fn checked_grid_dimensions(
    src_width: u32,
    src_height: u32,
    target_width: u32,
) -> Result<(u32, u32)> {
    let (grid_width, grid_height) = grid_dimensions(src_width, src_height, target_width);
    let cells = (grid_width as u64)
        .checked_mul(grid_height as u64)
        .filter(|&cells| cells <= MAX_GRID_CELLS);

    match cells {
        Some(_) => Ok((grid_width, grid_height)),
        None => {
            log::warn!(
                "rejected width {}: {}x{} grid is too large",
                target_width,
                grid_width,
                grid_height
            );
            Err(ArtError::InvalidConfiguration(format!(
                "width {} gives a {}x{} grid, more than {} cells",
                target_width, grid_width, grid_height, MAX_GRID_CELLS
            )))
        }
    }
}

/// Resample the source image to one pixel per grid cell
fn resize_to_grid(input: &RgbaImage, grid_width: u32, grid_height: u32) -> RgbaImage {
    let (width, height) = input.dimensions();
    log::debug!(
        "resizing {}x{} to {}x{} cells",
        width,
        height,
        grid_width,
        grid_height
    );

    // Bicubic resampling
    imageops::resize(
        input,
        grid_width,
        grid_height,
        imageops::FilterType::CatmullRom,
    )
}

/// Converts an image to a cropped character grid
///
/// Pipeline:
/// 1. Resample to `width` columns with aspect correction
/// 2. Extract luminance
/// 3. One bit only: boost contrast and binarize with error diffusion
/// 4. Map each pixel to a palette character
/// 5. Crop to the shared left/right window and drop blank rows
///
/// # Arguments
/// * `input` - The source image, never modified
/// * `config` - Render configuration
///
/// # Returns
/// The rendered grid, empty if the image has no content after quantization
///
/// # Errors
/// `InvalidConfiguration` for a zero width or a grid larger than
/// [`MAX_GRID_CELLS`], `UnsupportedImageSource` for a zero sized image
pub fn render(input: &RgbaImage, config: &RenderConfig) -> Result<String> {
    config.validate()?;

    let (width, height) = input.dimensions();
    if width == 0 || height == 0 {
        return Err(ArtError::UnsupportedImageSource(format!(
            "image has zero size ({}x{})",
            width, height
        )));
    }

    let (grid_width, grid_height) = checked_grid_dimensions(width, height, config.width)?;
    let working_image = resize_to_grid(input, grid_width, grid_height);

    let mut lum = calculate_luminance(&working_image);
    if config.palette_mode == PaletteMode::OneBit {
        lum = binarize(&boost_contrast(&lum, ONE_BIT_CONTRAST));
    }

    let palette = Palette::new(config.palette_mode, config.invert);
    let rows = quantize(&lum, &palette);
    let grid = crop_rows(&rows, config.width as usize);

    log::debug!("rendered grid with {} rows", grid.lines().count());
    Ok(grid)
}

/// Build an image from a raw RGBA8 buffer
///
/// # Errors
/// `UnsupportedImageSource` if the buffer length is not `width * height * 4`
pub fn image_from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<RgbaImage> {
    let len = pixels.len();
    RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
        ArtError::UnsupportedImageSource(format!(
            "buffer of {} bytes does not hold a {}x{} RGBA image",
            len, width, height
        ))
    })
}

/// Decode an image file
///
/// # Errors
/// `UnsupportedImageSource` if the file is missing or cannot be decoded
pub fn open_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| {
        ArtError::UnsupportedImageSource(format!("{}: {}", path.display(), e))
    })?;
    Ok(img.to_rgba8())
}
