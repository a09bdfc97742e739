//! State Module - Runtime state pieces the carousel is assembled from
//!
//! - **Keyboard** - Event types, navigation-key mapping
//! - **Pointer** - Touch/mouse down, up, enter, leave
//! - **Gesture** - Swipe start/end tracking, exclusive threshold
//! - **Pause** - Pause-reason set (hover, gesture)
//! - **Autoplay** - Background tick timer feeding the event queue
//! - **Viewport** - Window intersection for keyboard gating
//! - **Input** - crossterm bridge for terminal hosts

mod autoplay;
mod gesture;
pub mod input;
mod keyboard;
mod pause;
mod pointer;
mod viewport;

pub use autoplay::*;
pub use gesture::*;
pub use keyboard::*;
pub use pause::*;
pub use pointer::*;
pub use viewport::*;
