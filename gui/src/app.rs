use code_ascii_art::embed::{encoded_len, placeholder_count};
use code_ascii_art::{ArtState, PaletteMode, Result as ArtResult, open_image};
use eframe::egui;

/// Font sizes offered in the preview window
const PREVIEW_FONT_SIZES: std::ops::RangeInclusive<u32> = 2..=15;

/// Main application state for the code ASCII art GUI
pub struct CodeArtApp {
    /// Image, configuration, cached grid and payload
    state: ArtState,

    /// Text of the width field, may hold an invalid width
    width_text: String,
    invert: bool,
    four_bit: bool,
    add_wrapper: bool,
    fill_remainder: bool,

    /// Editable copies of the grid and payload
    grid: String,
    payload: String,

    /// Latest artifact
    artifact: String,

    show_preview: bool,
    preview_font_size: f32,
    preview_background: egui::Color32,
    preview_text_color: egui::Color32,

    /// Error message to display (if any)
    error_message: Option<String>,
}

impl Default for CodeArtApp {
    fn default() -> Self {
        let state = ArtState::default();
        let render_config = *state.render_config();
        let embed_config = *state.embed_config();

        Self {
            width_text: render_config.width.to_string(),
            invert: render_config.invert,
            four_bit: render_config.palette_mode == PaletteMode::FourBit,
            add_wrapper: embed_config.add_wrapper,
            fill_remainder: embed_config.fill_remainder,
            grid: String::new(),
            payload: String::new(),
            artifact: String::new(),
            show_preview: false,
            preview_font_size: 6.0,
            preview_background: egui::Color32::WHITE,
            preview_text_color: egui::Color32::BLACK,
            error_message: None,
            state,
        }
    }
}

impl CodeArtApp {
    /// Create a new application
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Load an image from file path
    pub fn load_image(&mut self, path: &std::path::Path) {
        let result = open_image(path).and_then(|img| self.state.set_image(img));
        match &result {
            Ok(()) => log::info!("loaded {}", path.display()),
            Err(e) => log::warn!("failed to load {}: {}", path.display(), e),
        }
        self.after_render(result);
    }

    /// Save the artifact to a text file
    pub fn save_output(&self, path: &std::path::Path) -> Result<(), String> {
        if self.artifact.is_empty() {
            return Err("No result art to save".to_string());
        }
        std::fs::write(path, &self.artifact).map_err(|e| format!("Failed to save: {}", e))
    }

    /// Sync the grid editor after a render and refresh the artifact
    fn after_render(&mut self, result: ArtResult<()>) {
        match result {
            Ok(()) => {
                self.grid = self.state.grid().to_string();
                self.error_message = None;
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
        self.refresh_artifact();
    }

    fn refresh_artifact(&mut self) {
        self.artifact = self.state.artifact();
    }

    fn pick_image(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "gif"])
            .pick_file()
        {
            self.load_image(&path);
        }
    }

    /// Render the payload editor
    fn render_payload(&mut self, ui: &mut egui::Ui) {
        ui.heading("Python code or text");

        egui::ScrollArea::vertical()
            .id_salt("payload_scroll")
            .show(ui, |ui| {
                let response = ui.add(
                    egui::TextEdit::multiline(&mut self.payload)
                        .code_editor()
                        .desired_rows(12)
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    self.state.set_payload(self.payload.clone());
                    self.refresh_artifact();
                }
            });
    }

    /// Render the grid editor and its render controls
    fn render_grid_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Original Art (Editable)");

        ui.horizontal(|ui| {
            if ui.button("Select Image").clicked() {
                self.pick_image();
            }

            ui.label("Width:");
            if ui
                .add(egui::TextEdit::singleline(&mut self.width_text).desired_width(40.0))
                .on_hover_text("Width image in chars")
                .changed()
            {
                let result = self.state.set_width_text(&self.width_text);
                self.after_render(result);
            }

            if ui.checkbox(&mut self.invert, "Invert").changed() {
                let result = self.state.set_invert(self.invert);
                self.after_render(result);
            }

            if ui.checkbox(&mut self.four_bit, "4 bit color").changed() {
                let mode = if self.four_bit {
                    PaletteMode::FourBit
                } else {
                    PaletteMode::OneBit
                };
                let result = self.state.set_palette_mode(mode);
                self.after_render(result);
            }
        });

        ui.separator();

        if !self.state.has_image() {
            ui.label("No image loaded");
        }

        egui::ScrollArea::both()
            .id_salt("grid_scroll")
            .show(ui, |ui| {
                let response = ui.add(
                    egui::TextEdit::multiline(&mut self.grid)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    self.state.set_grid(self.grid.clone());
                    self.refresh_artifact();
                }
            });
    }

    /// Render the artifact view and its embed controls
    fn render_result_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Result Art");

        ui.horizontal(|ui| {
            if ui
                .checkbox(&mut self.add_wrapper, "Add \"exec\"")
                .on_hover_text("Adds exec and base64 decode\ncommands to run the script")
                .changed()
            {
                self.state.set_add_wrapper(self.add_wrapper);
                self.refresh_artifact();
            }

            if ui
                .checkbox(&mut self.fill_remainder, "Fill")
                .on_hover_text("Blanks out placeholders left after the code runs out")
                .changed()
            {
                self.state.set_fill_remainder(self.fill_remainder);
                self.refresh_artifact();
            }

            if ui
                .button("Preview")
                .on_hover_text("Full size Preview in new window")
                .clicked()
                && !self.artifact.is_empty()
            {
                self.show_preview = true;
            }

            if ui.button("Copy to clipboard").clicked() {
                ui.ctx().copy_text(self.artifact.clone());
            }
        });

        ui.label(format!(
            "{} placeholder cells, {} encoded characters",
            placeholder_count(self.state.grid()),
            encoded_len(self.state.payload())
        ));

        ui.separator();

        egui::ScrollArea::both()
            .id_salt("result_scroll")
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.artifact.as_str())
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY),
                );
            });
    }
}

impl eframe::App for CodeArtApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        self.pick_image();
                        ui.close();
                    }

                    if ui.button("Save Output...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Python", &["py"])
                            .add_filter("Text", &["txt"])
                            .save_file()
                            && let Err(e) = self.save_output(&path)
                        {
                            self.error_message = Some(e);
                        }
                        ui.close();
                    }

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Top panel: payload
        egui::TopBottomPanel::top("payload_panel")
            .resizable(true)
            .show(ctx, |ui| self.render_payload(ui));

        // Left panel: grid
        egui::SidePanel::left("grid_panel")
            .resizable(true)
            .default_width(600.0)
            .show(ctx, |ui| self.render_grid_panel(ui));

        // Central panel: result
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref msg) = self.error_message {
                ui.colored_label(egui::Color32::RED, msg);
                if ui.button("Clear Error").clicked() {
                    self.error_message = None;
                }
                ui.separator();
            }

            self.render_result_panel(ui);
        });

        egui::Window::new("Result Art Preview")
            .open(&mut self.show_preview)
            .resizable(true)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.color_edit_button_srgba(&mut self.preview_background);
                    ui.label("Background Color");
                    ui.color_edit_button_srgba(&mut self.preview_text_color);
                    ui.label("Text Color");

                    egui::ComboBox::from_label("Font size")
                        .selected_text(format!("{}", self.preview_font_size))
                        .show_ui(ui, |ui| {
                            for size in PREVIEW_FONT_SIZES {
                                ui.selectable_value(
                                    &mut self.preview_font_size,
                                    size as f32,
                                    size.to_string(),
                                );
                            }
                        });
                });

                ui.separator();

                egui::ScrollArea::both().show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut self.artifact.as_str())
                            .font(egui::FontId::monospace(self.preview_font_size))
                            .background_color(self.preview_background)
                            .text_color(self.preview_text_color),
                    );
                });
            });
    }
}
