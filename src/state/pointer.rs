//! Pointer Module - Pointer and touch event types
//!
//! Covers the pointer input the carousel reacts to:
//!
//! - **Down / Up** - start and end of a horizontal swipe gesture
//! - **Enter / Leave** - hover over the carousel root (pauses autoplay)
//!
//! Coordinates are horizontal screen positions. Touch and mouse share one
//! event type; `kind` records which device produced it.

/// Pointer action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Up,
    Enter,
    Leave,
}

/// Device that produced the event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

/// Pointer event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub kind: PointerKind,
    /// Horizontal screen coordinate
    pub x: f32,
}

impl PointerEvent {
    pub fn new(action: PointerAction, kind: PointerKind, x: f32) -> Self {
        Self { action, kind, x }
    }

    /// Touch start at `x`
    pub fn touch_start(x: f32) -> Self {
        Self::new(PointerAction::Down, PointerKind::Touch, x)
    }

    /// Touch end at `x`
    pub fn touch_end(x: f32) -> Self {
        Self::new(PointerAction::Up, PointerKind::Touch, x)
    }

    /// Mouse button down at `x`
    pub fn down(x: f32) -> Self {
        Self::new(PointerAction::Down, PointerKind::Mouse, x)
    }

    /// Mouse button up at `x`
    pub fn up(x: f32) -> Self {
        Self::new(PointerAction::Up, PointerKind::Mouse, x)
    }

    /// Pointer entered the carousel root
    pub fn enter() -> Self {
        Self::new(PointerAction::Enter, PointerKind::Mouse, 0.0)
    }

    /// Pointer left the carousel root
    pub fn leave() -> Self {
        Self::new(PointerAction::Leave, PointerKind::Mouse, 0.0)
    }
}
