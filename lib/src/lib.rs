//! Code ASCII Art - images to ASCII art carrying hidden source code
//!
//! An image is resampled to a character grid, quantized to a one or four
//! level palette and cropped. The darkest palette character is a
//! placeholder: embedding a payload replaces placeholders with the
//! payload's base64 characters, so the text still shows the picture while
//! carrying the payload. With the wrapper enabled the result is a Python
//! script that runs the hidden source.
//!
//! # Example
//! ```no_run
//! use code_ascii_art::{EmbedConfig, RenderConfig, embed, open_image, render};
//! use std::path::Path;
//!
//! let image = open_image(Path::new("logo.png")).unwrap();
//! let grid = render(&image, &RenderConfig::default()).unwrap();
//! let art = embed(&grid, "print('hello')", &EmbedConfig::default());
//! println!("{}", art);
//! ```

pub mod ascii;
pub mod config;
pub mod embed;
pub mod error;
pub mod filters;
pub mod palette;
pub mod processor;
pub mod state;

// Re-export main types for convenience
pub use config::{EmbedConfig, PaletteMode, RenderConfig, parse_width};
pub use embed::{embed, recover_payload};
pub use error::{ArtError, Result};
pub use palette::{PLACEHOLDER, Palette};
pub use processor::{image_from_rgba, open_image, render};
pub use state::ArtState;
