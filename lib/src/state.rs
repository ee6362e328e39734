use crate::config::{EmbedConfig, PaletteMode, RenderConfig, parse_width};
use crate::embed::embed;
use crate::error::Result;
use crate::processor::render;
use image::RgbaImage;

/// Caller owned state pairing a cached grid with its payload
///
/// The grid is re-rendered whenever the image or a render setting changes,
/// so editing only the payload or the embed settings never resamples the
/// image. Failed updates leave both the configuration and the grid as they
/// were.
#[derive(Debug, Clone, Default)]
pub struct ArtState {
    image: Option<RgbaImage>,
    render_config: RenderConfig,
    embed_config: EmbedConfig,
    grid: String,
    payload: String,
}

impl ArtState {
    pub fn new(render_config: RenderConfig, embed_config: EmbedConfig) -> Result<Self> {
        render_config.validate()?;
        Ok(Self {
            render_config,
            embed_config: EmbedConfig {
                line_width: render_config.width,
                ..embed_config
            },
            ..Default::default()
        })
    }

    pub fn render_config(&self) -> &RenderConfig {
        &self.render_config
    }

    pub fn embed_config(&self) -> &EmbedConfig {
        &self.embed_config
    }

    pub fn grid(&self) -> &str {
        &self.grid
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Replace the source image and re-render
    pub fn set_image(&mut self, image: RgbaImage) -> Result<()> {
        let grid = render(&image, &self.render_config)?;
        self.image = Some(image);
        self.grid = grid;
        Ok(())
    }

    /// Re-render with a new configuration, committing it only on success
    fn apply(&mut self, config: RenderConfig) -> Result<()> {
        let grid = match &self.image {
            Some(image) => render(image, &config)?,
            None => String::new(),
        };
        self.render_config = config;
        self.embed_config.line_width = config.width;
        self.grid = grid;
        Ok(())
    }

    pub fn set_width(&mut self, width: i64) -> Result<()> {
        let mut config = self.render_config;
        config.set_width(width)?;
        self.apply(config)
    }

    /// Set the width from text typed by the user
    pub fn set_width_text(&mut self, text: &str) -> Result<()> {
        self.set_width(parse_width(text)?)
    }

    pub fn set_invert(&mut self, invert: bool) -> Result<()> {
        self.apply(RenderConfig {
            invert,
            ..self.render_config
        })
    }

    pub fn set_palette_mode(&mut self, palette_mode: PaletteMode) -> Result<()> {
        self.apply(RenderConfig {
            palette_mode,
            ..self.render_config
        })
    }

    /// Replace the cached grid with a hand edited one
    pub fn set_grid(&mut self, grid: impl Into<String>) {
        self.grid = grid.into();
    }

    pub fn set_payload(&mut self, payload: impl Into<String>) {
        self.payload = payload.into();
    }

    pub fn set_add_wrapper(&mut self, add_wrapper: bool) {
        self.embed_config.add_wrapper = add_wrapper;
    }

    pub fn set_fill_remainder(&mut self, fill_remainder: bool) {
        self.embed_config.fill_remainder = fill_remainder;
    }

    /// Produce a fresh artifact from the cached grid and payload
    pub fn artifact(&self) -> String {
        embed(&self.grid, &self.payload, &self.embed_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::recover_payload;
    use crate::error::ArtError;
    use image::Rgba;

    fn black_state() -> ArtState {
        let mut state = ArtState::new(
            RenderConfig {
                width: 2,
                ..Default::default()
            },
            EmbedConfig {
                add_wrapper: false,
                ..Default::default()
            },
        )
        .unwrap();
        state
            .set_image(RgbaImage::from_pixel(4, 8, Rgba([0, 0, 0, 255])))
            .unwrap();
        state
    }

    #[test]
    fn test_new_rejects_zero_width() {
        let config = RenderConfig {
            width: 0,
            ..Default::default()
        };
        assert!(ArtState::new(config, EmbedConfig::default()).is_err());
    }

    #[test]
    fn test_no_image_gives_empty_grid() {
        let mut state = ArtState::default();
        state.set_width(30).unwrap();
        state.set_payload("print(1)");
        assert_eq!(state.grid(), "");
        assert_eq!(state.artifact(), "");
    }

    #[test]
    fn test_set_image_renders() {
        let state = black_state();
        assert_eq!(state.grid(), "@@\n@@");
        assert!(state.has_image());
    }

    #[test]
    fn test_rejected_width_keeps_grid() {
        let mut state = black_state();
        let before = state.grid().to_string();

        for width in [0, -5] {
            assert!(matches!(
                state.set_width(width),
                Err(ArtError::InvalidConfiguration(_))
            ));
            assert_eq!(state.grid(), before);
            assert_eq!(state.render_config().width, 2);
        }

        assert!(state.set_width_text("wide").is_err());
        assert!(state.set_width_text("2.5").is_err());
        assert_eq!(state.grid(), before);
    }

    #[test]
    fn test_oversized_width_keeps_grid() {
        let mut state = black_state();
        let before = state.grid().to_string();

        assert!(matches!(
            state.set_width(2_000_000_000),
            Err(ArtError::InvalidConfiguration(_))
        ));
        assert!(state.set_width_text("2000000000").is_err());
        assert_eq!(state.grid(), before);
        assert_eq!(state.render_config().width, 2);
        assert_eq!(state.embed_config().line_width, 2);
    }

    #[test]
    fn test_width_change_rerenders() {
        let mut state = black_state();
        state.set_width_text("4").unwrap();
        assert_eq!(state.grid(), "@@@@\n@@@@\n@@@@\n@@@@");
        assert_eq!(state.embed_config().line_width, 4);
    }

    #[test]
    fn test_invert_rerenders() {
        let mut state = black_state();
        state.set_invert(true).unwrap();
        assert_eq!(state.grid(), "");
        state.set_invert(false).unwrap();
        assert_eq!(state.grid(), "@@\n@@");
    }

    #[test]
    fn test_palette_mode_rerenders() {
        let mut state = black_state();
        state.set_palette_mode(PaletteMode::FourBit).unwrap();
        assert_eq!(state.render_config().palette_mode, PaletteMode::FourBit);
        assert_eq!(state.grid(), "@@\n@@");
    }

    #[test]
    fn test_payload_change_keeps_grid() {
        let mut state = black_state();
        state.set_payload("AB");
        assert_eq!(state.artifact(), "QU\nI=\n");

        state.set_payload("A");
        assert_eq!(state.grid(), "@@\n@@");
        assert_eq!(state.artifact(), "QQ\n==\n");
    }

    #[test]
    fn test_edited_grid_is_used() {
        let mut state = black_state();
        state.set_grid("@ @");
        state.set_payload("AB");
        state.set_fill_remainder(true);
        assert_eq!(state.artifact(), "Q U\n\nI=");
    }

    #[test]
    fn test_artifact_round_trip() {
        let mut state = black_state();
        state.set_add_wrapper(true);
        state.set_payload("import this\n");
        let artifact = state.artifact();

        assert!(artifact.starts_with("\"\"\""));
        assert_eq!(recover_payload(&artifact).unwrap(), "import this\n");
    }
}
