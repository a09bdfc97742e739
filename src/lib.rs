//! # spark-carousel
//!
//! Reactive carousel controller for Rust.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! A carousel owns one piece of navigation state, the current slide index,
//! and publishes everything a host draws as signals:
//!
//! ```text
//! inputs (controls, dots, keys, pointer, autoplay ticks)
//!     → CarouselEvent queue → Carousel → index / RenderState / dot signals → host effects
//! ```
//!
//! Hover and swipe gestures pause autoplay through a pause-reason set, so the
//! timer resumes only once every reason has cleared.
//!
//! ## Modules
//!
//! - [`carousel`] - The controller, its events and render state
//! - [`state`] - Keyboard, pointer, gesture, pause, autoplay, viewport, terminal input
//! - [`config`] - Configuration with defaults and validation
//! - [`error`] - Error type

pub mod carousel;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used items
pub use carousel::{Carousel, CarouselEvent, RenderState};
pub use config::CarouselConfig;
pub use error::{CarouselError, Result};

pub use state::{
    // Keyboard
    KeyboardEvent, KeyState, Modifiers, NavKey,
    // Pointer
    PointerAction, PointerEvent, PointerKind,
    // Gesture / pause
    Swipe, PauseReasons,
    // Viewport
    ViewportRect,
};
