//! Hiding a payload inside a rendered grid
//!
//! The payload is base64 encoded and its characters replace the grid's
//! placeholders one by one in reading order. Characters that do not fit are
//! appended below the picture, so the encoded payload always appears in the
//! artifact exactly once. With the wrapper the artifact is a Python script
//! whose docstring is the picture and which executes the hidden source.

use crate::config::EmbedConfig;
use crate::error::{ArtError, Result};
use crate::palette::PLACEHOLDER;
use base64::{Engine as _, engine::general_purpose};

/// Opens the docstring holding the picture
pub const WRAPPER_PROLOGUE: &str = "\"\"\"\n\n";

/// Closes the docstring and executes its decoded content
pub const WRAPPER_EPILOGUE: &str = "\n\"\"\"\nexec(__import__(\"base64\").b64decode(__doc__))";

/// Character written over placeholders once the payload is exhausted
pub const FILLER: char = ' ';

/// Base64 encode a payload (standard alphabet, padded, no line breaks)
pub fn encode_payload(payload: &str) -> String {
    general_purpose::STANDARD.encode(payload.as_bytes())
}

/// Length of the encoded form of a payload
pub fn encoded_len(payload: &str) -> usize {
    payload.len().div_ceil(3) * 4
}

/// Number of cells in a grid available for payload characters
pub fn placeholder_count(grid: &str) -> usize {
    grid.chars().filter(|&c| c == PLACEHOLDER).count()
}

/// Embed a payload into a rendered grid
///
/// # Arguments
/// * `grid` - Rendered grid, possibly hand edited
/// * `payload` - Text to hide
/// * `config` - Wrapper, fill and overflow line width settings
///
/// # Returns
/// The artifact, or an empty string when either input is empty
pub fn embed(grid: &str, payload: &str, config: &EmbedConfig) -> String {
    if grid.is_empty() || payload.is_empty() {
        log::debug!("nothing to embed");
        return String::new();
    }

    let encoded = encode_payload(payload);
    let encoded_chars = encoded.as_bytes();

    let mut output = String::with_capacity(
        WRAPPER_PROLOGUE.len() + grid.len() + encoded.len() + WRAPPER_EPILOGUE.len() + 1,
    );
    if config.add_wrapper {
        output.push_str(WRAPPER_PROLOGUE);
    }

    let (cursor, mut output) = grid.chars().fold((0, output), |(cursor, mut output), ch| {
        if ch != PLACEHOLDER {
            output.push(ch);
            return (cursor, output);
        }

        match encoded_chars.get(cursor) {
            Some(&encoded_char) => {
                output.push(encoded_char as char);
                (cursor + 1, output)
            }
            None => {
                output.push(if config.fill_remainder { FILLER } else { PLACEHOLDER });
                (cursor, output)
            }
        }
    });
    output.push('\n');

    // Base64 is ASCII, so any byte offset is a char boundary
    let mut overflow = &encoded[cursor..];
    if !overflow.is_empty() {
        log::debug!(
            "{} of {} encoded characters overflow the grid",
            overflow.len(),
            encoded.len()
        );
    }
    let line_width = config.line_width.max(1) as usize;
    while !overflow.is_empty() {
        let (line, rest) = overflow.split_at(line_width.min(overflow.len()));
        output.push('\n');
        output.push_str(line);
        overflow = rest;
    }

    if config.add_wrapper {
        output.push_str(WRAPPER_EPILOGUE);
    }
    output
}

fn is_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='
}

/// Recover the payload hidden in an artifact
///
/// The wrapper is stripped when present and every character outside the
/// base64 alphabet is skipped, the same way the wrapper's own decoder reads
/// the docstring.
///
/// # Errors
/// `CorruptPayload` if the remaining characters are not valid base64 or do
/// not decode to UTF-8
pub fn recover_payload(artifact: &str) -> Result<String> {
    let body = artifact
        .strip_prefix(WRAPPER_PROLOGUE)
        .and_then(|rest| rest.strip_suffix(WRAPPER_EPILOGUE))
        .unwrap_or(artifact);

    let encoded: String = body.chars().filter(|&c| is_base64_char(c)).collect();
    let bytes = general_purpose::STANDARD
        .decode(encoded.as_bytes())
        .map_err(|e| ArtError::CorruptPayload(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| ArtError::CorruptPayload(e.to_string()))
}
