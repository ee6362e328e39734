/// Basic example: hide this example's own source inside an ASCII picture
///
/// Draws a ring, renders it to a one bit grid, embeds the source of this
/// file and checks the payload can be read back from the artifact
use code_ascii_art::{EmbedConfig, RenderConfig, embed, recover_payload, render};
use image::{Rgba, RgbaImage};

const SOURCE: &str = include_str!("basic.rs");

fn main() {
    println!("Code ASCII Art - Basic Example");
    println!("==============================\n");

    // Black ring on a white background
    let size = 400;
    let center = size as f32 / 2.0;
    let img = RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        let dist = (dx * dx + dy * dy).sqrt();
        if (90.0..180.0).contains(&dist) {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });

    println!("Created test image: {}x{}", size, size);

    let render_config = RenderConfig {
        width: 80,
        ..Default::default()
    };
    let grid = render(&img, &render_config).expect("Failed to render");

    let placeholders = code_ascii_art::embed::placeholder_count(&grid);
    let encoded = code_ascii_art::embed::encoded_len(SOURCE);
    println!("Grid: {} rows, {} placeholder cells", grid.lines().count(), placeholders);
    println!("Payload: {} bytes, {} encoded characters", SOURCE.len(), encoded);
    println!();

    let embed_config = EmbedConfig {
        line_width: render_config.width,
        ..Default::default()
    };
    let art = embed(&grid, SOURCE, &embed_config);
    println!("{}", art);

    let recovered = recover_payload(&art).expect("Failed to recover payload");
    assert_eq!(recovered, SOURCE);

    std::fs::write("basic_art.py", &art).expect("Failed to save artifact");
    println!("\n✓ Payload recovered intact");
    println!("✓ Saved artifact to: basic_art.py");
}
