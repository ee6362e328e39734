//! Character palettes indexed by quantized luminance
//!
//! Index 0 of both palettes is the placeholder, the only character the
//! embedder replaces with payload characters.

use crate::config::PaletteMode;

/// Character substituted with payload characters
pub const PLACEHOLDER: char = '@';

/// Two levels, darkest first
pub const CHARS_1BIT: [char; 2] = [PLACEHOLDER, ' '];

/// Four levels, darkest first
pub const CHARS_4BIT: [char; 4] = [PLACEHOLDER, '*', '.', ' '];

/// Luminance divisor giving two buckets (0 and 255 after binarizing)
pub const DIVISOR_1BIT: u8 = 255;

/// Luminance divisor giving four buckets
pub const DIVISOR_4BIT: u8 = 64;

/// The active palette for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
    divisor: u8,
}

impl Palette {
    pub fn new(mode: PaletteMode, invert: bool) -> Self {
        let (chars, divisor): (&[char], u8) = match mode {
            PaletteMode::OneBit => (&CHARS_1BIT, DIVISOR_1BIT),
            PaletteMode::FourBit => (&CHARS_4BIT, DIVISOR_4BIT),
        };

        let mut chars = chars.to_vec();
        if invert {
            chars.reverse();
        }

        Self { chars, divisor }
    }

    /// Get the character for a luminance value
    ///
    /// The bucket is `luminance / divisor`, clamped to the last palette entry.
    pub fn char_for(&self, luminance: u8) -> char {
        let index = (luminance / self.divisor) as usize;
        self.chars[index.min(self.chars.len() - 1)]
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}
