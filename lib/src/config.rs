use crate::error::{ArtError, Result};

/// Default grid width in characters
pub const DEFAULT_WIDTH: u32 = 70;

/// Number of luminance levels used when quantizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteMode {
    /// Two levels: placeholder and space, with contrast boost and dithering
    #[default]
    OneBit,
    /// Four levels: placeholder, two shades and space
    FourBit,
}

/// Configuration for the image to grid conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Target grid width in characters, default 70
    pub width: u32,
    /// Reverse the palette order, default false
    pub invert: bool,
    /// Palette variant, default one bit
    pub palette_mode: PaletteMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            invert: false,
            palette_mode: PaletteMode::OneBit,
        }
    }
}

impl RenderConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(ArtError::InvalidConfiguration(
                "width must be positive, got 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Updates the width, keeping the previous value if `width` is not positive
    pub fn set_width(&mut self, width: i64) -> Result<()> {
        if width <= 0 {
            log::warn!("rejected width {}", width);
            return Err(ArtError::InvalidConfiguration(format!(
                "width must be positive, got {}",
                width
            )));
        }
        self.width = u32::try_from(width).map_err(|_| {
            ArtError::InvalidConfiguration(format!("width {} is too large", width))
        })?;
        Ok(())
    }
}

/// Parses a width typed into a text field
pub fn parse_width(text: &str) -> Result<i64> {
    text.trim().parse::<i64>().map_err(|_| {
        ArtError::InvalidConfiguration(format!("width must be an integer, got {:?}", text))
    })
}

/// Configuration for embedding a payload into a rendered grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedConfig {
    /// Surround the artifact with the self-decoding wrapper, default true
    pub add_wrapper: bool,
    /// Blank out placeholders left after the payload runs out, default false
    pub fill_remainder: bool,
    /// Width of the overflow lines appended below the grid
    pub line_width: u32,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            add_wrapper: true,
            fill_remainder: false,
            line_width: DEFAULT_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 70);
        assert_eq!(config.palette_mode, PaletteMode::OneBit);
    }

    #[test]
    fn test_zero_width_is_invalid() {
        let config = RenderConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ArtError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_set_width_rejects_non_positive() {
        let mut config = RenderConfig::default();
        assert!(config.set_width(0).is_err());
        assert!(config.set_width(-5).is_err());
        assert_eq!(config.width, 70);

        config.set_width(40).unwrap();
        assert_eq!(config.width, 40);
    }

    #[test]
    fn test_set_width_rejects_overflow() {
        let mut config = RenderConfig::default();
        assert!(config.set_width(i64::MAX).is_err());
        assert_eq!(config.width, 70);
    }

    #[test]
    fn test_parse_width() {
        assert_eq!(parse_width(" 42 ").unwrap(), 42);
        assert_eq!(parse_width("-5").unwrap(), -5);
        assert!(parse_width("4.5").is_err());
        assert!(parse_width("abc").is_err());
        assert!(parse_width("").is_err());
    }

    #[test]
    fn test_default_embed_config() {
        let config = EmbedConfig::default();
        assert!(config.add_wrapper);
        assert!(!config.fill_remainder);
        assert_eq!(config.line_width, DEFAULT_WIDTH);
    }
}
