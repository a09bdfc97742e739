//! Gesture Module - Horizontal swipe tracking
//!
//! A swipe is a start/end coordinate pair. The start is held only between
//! `begin` and `end`; `end` consumes it.
//!
//! `delta = start_x - end_x`:
//!
//! - `delta > threshold` - swipe left, show the next slide
//! - `-delta > threshold` - swipe right, show the previous slide
//! - otherwise nothing (the threshold is exclusive)

/// Resolved swipe direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Previous,
}

/// Tracks one in-flight swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl GestureTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.start_x.is_some()
    }

    /// Record the start coordinate. A second start replaces the first.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish the gesture at `x`.
    ///
    /// Returns `None` when no gesture was started (the end is ignored) and
    /// `Some(None)` when the movement stayed within the threshold.
    pub fn end(&mut self, x: f32) -> Option<Option<Swipe>> {
        let start_x = self.start_x.take()?;
        Some(resolve_swipe(start_x, x, self.threshold))
    }

    /// Drop the in-flight gesture without resolving it.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

/// Resolve a start/end pair against an exclusive threshold.
pub fn resolve_swipe(start_x: f32, end_x: f32, threshold: f32) -> Option<Swipe> {
    let delta = start_x - end_x;
    if delta > threshold {
        Some(Swipe::Next)
    } else if -delta > threshold {
        Some(Swipe::Previous)
    } else {
        None
    }
}
