//! Viewport intersection - is the carousel root inside the visible window.

/// Vertical extent of the carousel root, relative to the top of the window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportRect {
    pub top: f32,
    pub bottom: f32,
}

impl ViewportRect {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// True when any part of the rect overlaps `[0, window_height)`.
    pub fn intersects_window(&self, window_height: f32) -> bool {
        self.top < window_height && self.bottom > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_window() {
        assert!(ViewportRect::new(100.0, 400.0).intersects_window(800.0));
    }

    #[test]
    fn test_partially_visible() {
        assert!(ViewportRect::new(-200.0, 10.0).intersects_window(800.0));
        assert!(ViewportRect::new(790.0, 1200.0).intersects_window(800.0));
    }

    #[test]
    fn test_outside_window() {
        // Scrolled past
        assert!(!ViewportRect::new(-400.0, 0.0).intersects_window(800.0));
        // Below the fold
        assert!(!ViewportRect::new(800.0, 1100.0).intersects_window(800.0));
    }
}
