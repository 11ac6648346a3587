/// Transition used while the track moves to a new window
pub const SLIDE_TRANSITION: &str = "transform 0.8s cubic-bezier(0.25, 0.1, 0.25, 1)";
/// Transition of the very first placement
pub const INITIAL_TRANSITION: &str = "transform 0.8s ease";

/// Index of the leftmost visible card.
///
/// Valid positions are `0..=len - visible`. A list that fits into the window
/// has the single position 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    len: usize,
    visible: usize,
}

impl CarouselState {
    pub fn new(len: usize, visible: usize) -> Self {
        Self {
            current_index: 0,
            len,
            visible: visible.max(1),
        }
    }

    #[allow(dead_code)]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn max_index(&self) -> usize {
        self.len.saturating_sub(self.visible)
    }

    pub fn prev_disabled(&self) -> bool {
        self.current_index == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.current_index >= self.max_index()
    }

    /// Moves one card to the right; no-op at the last window
    pub fn advance(&mut self) -> bool {
        if self.next_disabled() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Moves one card to the left; no-op at the first window
    pub fn retreat(&mut self) -> bool {
        if self.prev_disabled() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Autoplay step: advances and wraps to 0 after the last window
    pub fn autoplay_tick(&mut self) -> usize {
        if !self.advance() {
            self.current_index = 0;
        }
        self.current_index
    }

    /// Horizontal track offset for the current window
    pub fn offset_px(&self, card_width: f64, gap: f64) -> f64 {
        -(self.current_index as f64 * (card_width + gap))
    }

    /// Inline style of the track
    pub fn track_style(&self, card_width: f64, gap: f64, transition: &str) -> String {
        format!(
            "display: flex; gap: {}px; transform: translateX({}px); transition: {};",
            gap,
            self.offset_px(card_width, gap),
            transition
        )
    }
}

/// Direction of a recognised swipe gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left: show the next cards
    Left,
    /// Finger moved right: show the previous cards
    Right,
}

/// Horizontal touch tracking for the carousel track
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
    threshold: f64,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            start_x: None,
            threshold,
        }
    }

    pub fn touch_start(&mut self, screen_x: f64) {
        self.start_x = Some(screen_x);
    }

    /// Finishes the gesture; movements up to the threshold are ignored
    pub fn touch_end(&mut self, screen_x: f64) -> Option<Swipe> {
        let start = self.start_x.take()?;
        let diff = start - screen_x;
        if diff.abs() <= self.threshold {
            return None;
        }
        if diff > 0.0 {
            Some(Swipe::Left)
        } else {
            Some(Swipe::Right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_for_every_valid_index() {
        let mut carousel = CarouselState::new(8, 3);
        let card_width = 340.0;
        for expected in 0..=carousel.max_index() {
            assert_eq!(carousel.current_index(), expected);
            assert_eq!(
                carousel.offset_px(card_width, 32.0),
                -(expected as f64 * (card_width + 32.0))
            );
            carousel.advance();
        }
    }

    #[test]
    fn test_advance_and_retreat_are_noops_at_bounds() {
        let mut carousel = CarouselState::new(5, 3);
        assert!(!carousel.retreat());
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.prev_disabled());

        assert!(carousel.advance());
        assert!(carousel.advance());
        assert!(!carousel.advance());
        assert_eq!(carousel.current_index(), 2);
        assert!(carousel.next_disabled());
    }

    #[test]
    fn test_autoplay_wraps_after_last_window() {
        let mut carousel = CarouselState::new(5, 3);
        assert_eq!(carousel.autoplay_tick(), 1);
        assert_eq!(carousel.autoplay_tick(), 2);
        assert_eq!(carousel.autoplay_tick(), 0);
    }

    #[test]
    fn test_short_list_has_single_window() {
        let mut carousel = CarouselState::new(2, 3);
        assert_eq!(carousel.max_index(), 0);
        assert!(carousel.prev_disabled());
        assert!(carousel.next_disabled());
        assert!(!carousel.advance());
        assert_eq!(carousel.autoplay_tick(), 0);
    }

    #[test]
    fn test_track_style() {
        let mut carousel = CarouselState::new(6, 3);
        carousel.advance();
        let style = carousel.track_style(300.0, 32.0, SLIDE_TRANSITION);
        assert!(style.contains("translateX(-332px)"));
        assert!(style.contains(SLIDE_TRANSITION));
    }

    #[test]
    fn test_swipe_threshold() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(250.0), None);

        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(200.0), Some(Swipe::Left));

        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(180.0), Some(Swipe::Right));

        // No start recorded
        assert_eq!(swipe.touch_end(0.0), None);
    }
}
