//! Keyboard Module - Keyboard event types and navigation-key mapping
//!
//! Does NOT own stdin (the `input` module bridges terminal events).
//! Presses and held-key repeats navigate; releases are ignored.
//!
//! # Example
//!
//! ```ignore
//! use spark_carousel::state::{KeyboardEvent, NavKey};
//!
//! let event = KeyboardEvent::new("ArrowRight");
//! assert_eq!(NavKey::from_event(&event), Some(NavKey::Next));
//! ```

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// True when no modifier is held
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key identifier (e.g., "a", "Enter", "ArrowLeft")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }
}

// =============================================================================
// NAVIGATION KEYS
// =============================================================================

/// Direction a key navigates the carousel in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Previous,
    Next,
}

impl NavKey {
    /// Map a key press to a navigation direction.
    ///
    /// Returns `None` for non-arrow keys and for repeat/release events.
    pub fn from_event(event: &KeyboardEvent) -> Option<Self> {
        if event.state == KeyState::Release {
            return None;
        }
        match event.key.as_str() {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
