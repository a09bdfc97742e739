//! Carousel configuration.
//!
//! Every field has a default matching the stock testimonial slider, so an
//! empty JSON object (`{}`) is a valid config.
//!
//! # Example
//!
//! ```ignore
//! use spark_carousel::CarouselConfig;
//!
//! let config = CarouselConfig::from_json(r#"{ "autoplay_interval_ms": 4000 }"#)?;
//! assert_eq!(config.swipe_threshold, 50.0);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, Result};

/// Default autoplay period.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 6000;

/// Default horizontal swipe distance that must be exceeded to navigate.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Behaviour knobs for a [`Carousel`](crate::Carousel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Start autoplay when the carousel is constructed.
    pub autoplay: bool,
    /// Period between autoplay ticks, in milliseconds.
    pub autoplay_interval_ms: u64,
    /// Swipe distance (exclusive) needed to trigger navigation.
    pub swipe_threshold: f32,
    /// How many slides the viewport shows at once. Scales the offset.
    pub slides_per_view: u16,
    /// Respond to ArrowLeft / ArrowRight while in view.
    pub keyboard: bool,
    /// Pause autoplay while the pointer hovers the carousel root.
    pub pause_on_hover: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            slides_per_view: 1,
            keyboard: true,
            pause_on_hover: true,
        }
    }
}

impl CarouselConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field invariants.
    pub fn validate(&self) -> Result<()> {
        if self.autoplay_interval_ms == 0 {
            return Err(CarouselError::InvalidConfig(
                "autoplay_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.slides_per_view == 0 {
            return Err(CarouselError::InvalidConfig(
                "slides_per_view must be at least 1".to_string(),
            ));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "swipe_threshold must be a non-negative number, got {}",
                self.swipe_threshold
            )));
        }
        Ok(())
    }

    /// Autoplay period as a `Duration`.
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.autoplay_interval_ms = interval.as_millis() as u64;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn with_slides_per_view(mut self, slides_per_view: u16) -> Self {
        self.slides_per_view = slides_per_view;
        self
    }

    pub fn with_keyboard(mut self, keyboard: bool) -> Self {
        self.keyboard = keyboard;
        self
    }

    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CarouselConfig::default();
        assert!(config.autoplay);
        assert_eq!(config.autoplay_interval(), Duration::from_millis(6000));
        assert_eq!(config.swipe_threshold, 50.0);
        assert_eq!(config.slides_per_view, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = CarouselConfig::from_json(r#"{ "autoplay_interval_ms": 4000, "keyboard": false }"#)
            .unwrap();
        assert_eq!(config.autoplay_interval_ms, 4000);
        assert!(!config.keyboard);
        // Untouched fields keep defaults
        assert!(config.pause_on_hover);
        assert_eq!(config.swipe_threshold, 50.0);
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = CarouselConfig::from_json("{}").unwrap();
        assert_eq!(config, CarouselConfig::default());
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let err = CarouselConfig::from_json(r#"{ "slides_per_view": 0 }"#).unwrap_err();
        assert!(matches!(err, CarouselError::InvalidConfig(_)));

        let err = CarouselConfig::from_json(r#"{ "autoplay_interval_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, CarouselError::InvalidConfig(_)));

        let err = CarouselConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, CarouselError::Config(_)));
    }

    #[test]
    fn test_negative_threshold_invalid() {
        let config = CarouselConfig::default().with_swipe_threshold(-1.0);
        assert!(config.validate().is_err());

        let config = CarouselConfig::default().with_swipe_threshold(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = CarouselConfig::default()
            .with_autoplay(false)
            .with_interval(Duration::from_millis(250))
            .with_slides_per_view(3)
            .with_pause_on_hover(false);
        assert!(!config.autoplay);
        assert_eq!(config.autoplay_interval_ms, 250);
        assert_eq!(config.slides_per_view, 3);
        assert!(!config.pause_on_hover);
    }
}
