//! Render state - what the host draws for the current index.
//!
//! The carousel publishes a `RenderState` signal plus one active flag per dot.
//! Hosts bind effects to them; nothing here touches a real view.

/// Visual state derived from the current index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    /// Current slide index
    pub index: usize,
    /// Horizontal translation of the track, in percent of the viewport width
    pub offset_percent: f32,
    /// The "previous" control should be disabled
    pub previous_disabled: bool,
    /// The "next" control should be disabled
    pub next_disabled: bool,
}

impl RenderState {
    /// Compute the state for `index` in a set of `len` slides.
    pub fn compute(index: usize, len: usize, slides_per_view: u16) -> Self {
        let per_view = slides_per_view.max(1) as f32;
        Self {
            index,
            offset_percent: -(index as f32 * 100.0 / per_view),
            previous_disabled: index == 0,
            next_disabled: index + 1 == len,
        }
    }

    /// Transform command for DOM hosts, e.g. `translateX(-200%)`.
    pub fn css_transform(&self) -> String {
        format!("translateX(-{}%)", self.offset_percent.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_slide() {
        let state = RenderState::compute(0, 4, 1);
        assert_eq!(state.offset_percent, 0.0);
        assert!(state.previous_disabled);
        assert!(!state.next_disabled);
        assert_eq!(state.css_transform(), "translateX(-0%)");
    }

    #[test]
    fn test_last_slide() {
        let state = RenderState::compute(3, 4, 1);
        assert_eq!(state.offset_percent, -300.0);
        assert!(!state.previous_disabled);
        assert!(state.next_disabled);
        assert_eq!(state.css_transform(), "translateX(-300%)");
    }

    #[test]
    fn test_single_slide_disables_both() {
        let state = RenderState::compute(0, 1, 1);
        assert!(state.previous_disabled);
        assert!(state.next_disabled);
    }

    #[test]
    fn test_slides_per_view_scales_offset() {
        let state = RenderState::compute(2, 6, 2);
        assert_eq!(state.offset_percent, -100.0);

        let state = RenderState::compute(1, 6, 4);
        assert_eq!(state.css_transform(), "translateX(-25%)");
    }
}
