//! Input Module - crossterm event conversion
//!
//! Bridges crossterm's event system to carousel events for terminal hosts.
//!
//! # API
//!
//! - `convert_key_event` - Convert crossterm KeyEvent to our KeyboardEvent
//! - `TerminalInput::translate` - Map any crossterm Event onto the carousel,
//!   using the track's on-screen bounds for gestures and hover
//! - `poll_event` - Non-blocking event check with timeout
//! - `enable_mouse` / `disable_mouse` - Control mouse capture
//!
//! # Example
//!
//! ```ignore
//! use spark_carousel::state::input::{poll_event, TerminalInput, TrackBounds};
//! use std::time::Duration;
//!
//! let mut input = TerminalInput::new(TrackBounds::new(0, 2, 80, 8));
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         for event in input.translate(&event) {
//!             carousel.handle(event);
//!         }
//!     }
//!     carousel.pump();
//! }
//! ```

use crossterm::event::{
    Event as CrosstermEvent,
    KeyCode, KeyEventKind, KeyModifiers,
    KeyEvent as CrosstermKeyEvent,
    MouseButton as CrosstermMouseButton,
    MouseEvent as CrosstermMouseEvent,
    MouseEventKind,
    poll, read,
    EnableMouseCapture, DisableMouseCapture,
};
use crossterm::execute;
use std::io::stdout;
use std::time::Duration;

use super::keyboard::{KeyboardEvent, KeyState, Modifiers};
use super::pointer::PointerEvent;
use super::viewport::ViewportRect;
use crate::carousel::CarouselEvent;

// =============================================================================
// TRACK BOUNDS
// =============================================================================

/// Cell rectangle the carousel track occupies on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackBounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl TrackBounds {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && (column as u32) < self.x as u32 + self.width as u32
            && (row as u32) < self.y as u32 + self.height as u32
    }

    /// Vertical extent as a viewport rect, in rows.
    pub fn viewport_rect(&self) -> ViewportRect {
        ViewportRect::new(self.y as f32, self.y as f32 + self.height as f32)
    }
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent {
        key,
        modifiers: convert_modifiers(event.modifiers),
        state,
    }
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: mods.contains(KeyModifiers::SUPER),
    }
}

// =============================================================================
// TERMINAL INPUT
// =============================================================================

/// Stateful translator from crossterm events to carousel events.
///
/// Tracks hover and the pressed button so that enter/leave fire once per
/// crossing and a release only ends a gesture that started on the track.
#[derive(Debug, Clone, Default)]
pub struct TerminalInput {
    bounds: TrackBounds,
    hovered: bool,
    pressed: bool,
}

impl TerminalInput {
    pub fn new(bounds: TrackBounds) -> Self {
        Self {
            bounds,
            hovered: false,
            pressed: false,
        }
    }

    pub fn bounds(&self) -> TrackBounds {
        self.bounds
    }

    /// Move the track, e.g. after a terminal resize.
    pub fn set_bounds(&mut self, bounds: TrackBounds) {
        self.bounds = bounds;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Translate one crossterm event. May yield zero, one or two events.
    pub fn translate(&mut self, event: &CrosstermEvent) -> Vec<CarouselEvent> {
        match event {
            CrosstermEvent::Key(key) => vec![CarouselEvent::Key(convert_key_event(*key))],
            CrosstermEvent::Mouse(mouse) => self.translate_mouse(mouse),
            CrosstermEvent::Resize(_, height) => vec![CarouselEvent::Viewport {
                rect: self.bounds.viewport_rect(),
                window_height: *height as f32,
            }],
            _ => Vec::new(),
        }
    }

    fn translate_mouse(&mut self, mouse: &CrosstermMouseEvent) -> Vec<CarouselEvent> {
        let inside = self.bounds.contains(mouse.column, mouse.row);
        let x = mouse.column as f32;
        let mut events = self.update_hover(inside);

        match mouse.kind {
            MouseEventKind::Down(CrosstermMouseButton::Left) if inside => {
                self.pressed = true;
                events.push(CarouselEvent::Pointer(PointerEvent::down(x)));
            }
            MouseEventKind::Up(CrosstermMouseButton::Left) if self.pressed => {
                self.pressed = false;
                events.push(CarouselEvent::Pointer(PointerEvent::up(x)));
            }
            _ => {}
        }
        events
    }

    fn update_hover(&mut self, inside: bool) -> Vec<CarouselEvent> {
        if inside == self.hovered {
            return Vec::new();
        }
        self.hovered = inside;
        let pointer = if inside { PointerEvent::enter() } else { PointerEvent::leave() };
        vec![CarouselEvent::Pointer(pointer)]
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<CrosstermEvent>> {
    if poll(timeout)? {
        Ok(Some(read()?))
    } else {
        Ok(None)
    }
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable mouse capture.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================
