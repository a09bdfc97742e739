//! Carousel events - every input the controller reacts to.
//!
//! All inputs funnel through one enum so they can share a single serialized
//! queue with the autoplay timer. Whichever event is applied last wins.

use crate::state::{KeyboardEvent, PointerEvent, ViewportRect};

/// One input to a carousel.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent {
    /// "previous" control activated
    Previous,
    /// "next" control activated
    Next,
    /// Dot indicator activated, carrying its slide index
    Dot(usize),
    /// Key event
    Key(KeyboardEvent),
    /// Pointer / touch event
    Pointer(PointerEvent),
    /// The root's position relative to the window changed
    Viewport { rect: ViewportRect, window_height: f32 },
    /// The host reports visibility directly
    InView(bool),
    /// Autoplay period elapsed for the timer of `generation`
    AutoplayTick { generation: u64 },
}
