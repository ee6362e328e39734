use thiserror::Error;

/// Errors reported by the renderer, the embedder and [`crate::ArtState`]
///
/// None of these are fatal: a failed operation leaves any previously cached
/// grid untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArtError {
    /// Target width was zero, negative or not an integer
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The source could not be interpreted as a pixel grid
    #[error("unsupported image source: {0}")]
    UnsupportedImageSource(String),

    /// An artifact did not contain a decodable payload
    #[error("corrupt payload: {0}")]
    CorruptPayload(String),
}

pub type Result<T> = std::result::Result<T, ArtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ArtError::InvalidConfiguration("width must be positive, got 0".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: width must be positive, got 0"
        );

        let err = ArtError::UnsupportedImageSource("image has zero size".to_string());
        assert!(err.to_string().starts_with("unsupported image source"));
    }
}
