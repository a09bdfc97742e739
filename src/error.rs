//! Error types for the carousel controller.

use thiserror::Error;

/// Errors raised while building or driving a carousel.
#[derive(Debug, Error)]
pub enum CarouselError {
    /// No slides were found, the carousel declines to activate.
    #[error("carousel has no slides")]
    NoSlides,

    /// `go_to` was asked for an index outside the slide set.
    #[error("slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    /// A configuration value violates its invariant.
    #[error("invalid carousel config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("failed to parse carousel config")]
    Config(#[from] serde_json::Error),

    /// The autoplay timer thread could not be spawned.
    #[error("failed to spawn autoplay timer")]
    Timer(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CarouselError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(CarouselError::NoSlides.to_string(), "carousel has no slides");
        assert_eq!(
            CarouselError::IndexOutOfRange { index: 7, len: 4 }.to_string(),
            "slide index 7 out of range for 4 slides"
        );
        assert_eq!(
            CarouselError::InvalidConfig("slides_per_view must be at least 1".into()).to_string(),
            "invalid carousel config: slides_per_view must be at least 1"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let err: CarouselError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, CarouselError::Config(_)));
    }
}
