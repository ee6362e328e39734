use crate::palette::Palette;
use image::GrayImage;
use rayon::prelude::*;

/// Map every pixel of a luminance image to a palette character
///
/// # Arguments
/// * `lum` - Luminance image already resized to the grid dimensions
/// * `palette` - Active palette
///
/// # Returns
/// One row of characters per image row, each `lum.width()` long
pub fn quantize(lum: &GrayImage, palette: &Palette) -> Vec<Vec<char>> {
    let (width, height) = lum.dimensions();

    // Parallelize row processing
    (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| palette.char_for(lum.get_pixel(x, y)[0]))
                .collect()
        })
        .collect()
}

/// Shared left/right crop window over all rows
///
/// The left boundary is `width` minus the longest row once its leading
/// blanks are stripped, the right boundary is the longest row once its
/// trailing blanks are stripped.
///
/// # Returns
/// `(left, right)` column indices, right exclusive
pub fn crop_window(rows: &[Vec<char>], width: usize) -> (usize, usize) {
    let mut content_left = 0;
    let mut content_right = 0;

    for row in rows {
        let leading = row.iter().take_while(|c| c.is_whitespace()).count();
        let trailing = row.iter().rev().take_while(|c| c.is_whitespace()).count();

        content_left = content_left.max(row.len() - leading);
        content_right = content_right.max(row.len() - trailing);
    }

    (width.saturating_sub(content_left), content_right)
}

fn is_blank(row: &[char]) -> bool {
    row.iter().all(|c| c.is_whitespace())
}

/// Crop rows to the shared window, drop blank rows and join them
///
/// # Arguments
/// * `rows` - Quantized rows, each `width` characters long
/// * `width` - Grid width the rows were quantized at
///
/// # Returns
/// Newline separated grid, empty when every row is blank
pub fn crop_rows(rows: &[Vec<char>], width: usize) -> String {
    let (left, right) = crop_window(rows, width);
    log::debug!("crop window {}..{} of {}", left, right, width);

    rows.iter()
        .filter(|row| !is_blank(row))
        .map(|row| {
            let end = right.min(row.len());
            if left < end {
                row[left..end].iter().collect::<String>()
            } else {
                String::new()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaletteMode;
    use image::Luma;
    use proptest::prelude::*;

    fn rows(lines: &[&str]) -> Vec<Vec<char>> {
        lines.iter().map(|line| line.chars().collect()).collect()
    }

    #[test]
    fn test_quantize_dimensions() {
        let img = GrayImage::from_pixel(5, 3, Luma([0]));
        let palette = Palette::new(PaletteMode::OneBit, false);
        let chars = quantize(&img, &palette);

        assert_eq!(chars.len(), 3);
        assert!(chars.iter().all(|row| row.len() == 5));
        assert!(chars.iter().flatten().all(|&c| c == '@'));
    }

    #[test]
    fn test_quantize_four_bit_gradient() {
        let img = GrayImage::from_fn(4, 1, |x, _| Luma([(x * 64) as u8]));
        let palette = Palette::new(PaletteMode::FourBit, false);
        let chars = quantize(&img, &palette);

        assert_eq!(chars[0], vec!['@', '*', '.', ' ']);
    }

    #[test]
    fn test_crop_window_uses_widest_extents() {
        let grid = rows(&["  @@    ", "   @@@  ", "        "]);
        assert_eq!(crop_window(&grid, 8), (2, 6));
    }

    #[test]
    fn test_crop_rows_drops_blank_rows() {
        let grid = rows(&["      ", "  @@  ", "      ", " @  @ ", "      "]);
        assert_eq!(crop_rows(&grid, 6), " @@ \n@  @");
    }

    #[test]
    fn test_crop_rows_shared_boundaries() {
        let grid = rows(&["@     ", "    @ ", "  **  "]);
        let cropped = crop_rows(&grid, 6);
        let lengths: Vec<usize> = cropped.lines().map(|l| l.chars().count()).collect();

        assert_eq!(cropped, "@    \n    @\n  ** ");
        assert!(lengths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_crop_rows_all_blank() {
        let grid = rows(&["    ", "    "]);
        assert_eq!(crop_rows(&grid, 4), "");
    }

    #[test]
    fn test_crop_rows_full_rows_untouched() {
        let grid = rows(&["@@", "@@"]);
        assert_eq!(crop_rows(&grid, 2), "@@\n@@");
    }

    fn quantized_rows() -> impl Strategy<Value = (usize, Vec<Vec<char>>)> {
        (1usize..16).prop_flat_map(|width| {
            let cell = prop::sample::select(vec!['@', '*', '.', ' ', ' ', ' ']);
            prop::collection::vec(prop::collection::vec(cell, width), 1..12)
                .prop_map(move |rows| (width, rows))
        })
    }

    proptest! {
        #[test]
        fn prop_crop_drops_every_blank_row((width, grid) in quantized_rows()) {
            let cropped = crop_rows(&grid, width);
            let content_rows = grid.iter().filter(|row| !is_blank(row)).count();

            if content_rows == 0 {
                prop_assert_eq!(cropped, "");
            } else {
                let lines: Vec<&str> = cropped.split('\n').collect();
                prop_assert_eq!(lines.len(), content_rows);
                prop_assert!(lines.iter().all(|l| !l.trim().is_empty()));
            }
        }

        #[test]
        fn prop_crop_boundaries_are_shared((width, grid) in quantized_rows()) {
            let cropped = crop_rows(&grid, width);
            let (left, right) = crop_window(&grid, width);

            for line in cropped.split('\n').filter(|l| !l.is_empty()) {
                prop_assert_eq!(line.chars().count(), right - left);
            }
        }

        #[test]
        fn prop_crop_keeps_all_content((width, grid) in quantized_rows()) {
            let cropped = crop_rows(&grid, width);
            let before = grid.iter().flatten().filter(|c| !c.is_whitespace()).count();
            let after = cropped.chars().filter(|c| !c.is_whitespace()).count();

            prop_assert_eq!(before, after);
        }
    }
}
