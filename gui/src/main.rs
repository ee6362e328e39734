mod app;

use app::CodeArtApp;
use eframe::egui;

const APP_NAME: &str = "Python Code to ASCII Art";

/// Side of the square window icon in pixels
const ICON_SIZE: u32 = 32;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let viewport = egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size([1400.0, 900.0])
        .with_min_inner_size([800.0, 600.0])
        .with_icon(ring_icon());

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(CodeArtApp::new(cc)))),
    )
}

/// Light ring on dark grey, the same shape the basic demo renders
fn ring_icon() -> egui::IconData {
    let center = ICON_SIZE as i32 / 2;
    let rgba = (0..ICON_SIZE * ICON_SIZE)
        .flat_map(|i| {
            let dx = (i % ICON_SIZE) as i32 - center;
            let dy = (i / ICON_SIZE) as i32 - center;
            let shade = if (64..=196).contains(&(dx * dx + dy * dy)) {
                255
            } else {
                48
            };
            [shade, shade, shade, 255]
        })
        .collect();

    egui::IconData {
        rgba,
        width: ICON_SIZE,
        height: ICON_SIZE,
    }
}
