use code_ascii_art::{ArtState, EmbedConfig, PaletteMode, RenderConfig};
use image::{Rgba, RgbaImage};

fn main() {
    println!("Code ASCII Art - Width and Palette Demo");
    println!("=======================================\n");

    // Diagonal gradient, dark in the top left corner
    let (width, height) = (320, 200);
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let gray = ((x + y) * 255 / (width + height)) as u8;
        Rgba([gray, gray, gray, 255])
    });

    let mut state = ArtState::new(RenderConfig::default(), EmbedConfig::default())
        .expect("Default configuration is valid");
    state.set_image(img).expect("Failed to render");

    for palette_mode in [PaletteMode::OneBit, PaletteMode::FourBit] {
        state
            .set_palette_mode(palette_mode)
            .expect("Failed to render");

        for width in ["20", "40", "0", "-3", "sixty"] {
            println!("{:?}, width {}:", palette_mode, width);
            match state.set_width_text(width) {
                Ok(()) => println!("{}\n", state.grid()),
                Err(e) => println!(
                    "  rejected ({}), keeping width {}\n",
                    e,
                    state.render_config().width
                ),
            }
        }
    }
}
