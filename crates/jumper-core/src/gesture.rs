//! Swipe gesture classification.
//!
//! Tracks the horizontal touch position and turns a completed gesture into a
//! [`SwipeDirection`]. Index stepping lives in [`crate::navigation`]; the two
//! only meet through [`SwipeDirection::direction`].

use serde::{Deserialize, Serialize};

use crate::navigation::{Direction, next_index};

/// Direction the finger travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Classify a pixel distance against a threshold.
    ///
    /// `distance` is `start - end`, so a finger moving left is positive.
    pub fn classify(distance: f64, threshold: f64) -> Option<Self> {
        if distance > threshold {
            Some(Self::Left)
        } else if distance < -threshold {
            Some(Self::Right)
        } else {
            None
        }
    }

    /// Carousel step for this swipe: left reveals the next item.
    pub fn direction(self) -> Direction {
        match self {
            Self::Left => Direction::Next,
            Self::Right => Direction::Previous,
        }
    }

    /// Label used in tracking payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Horizontal touch tracker for a single gesture at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeTracker {
    start_x: f64,
    current_x: f64,
    active: bool,
    threshold: f64,
}

impl SwipeTracker {
    /// Create a tracker with a minimum swipe distance in pixels.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.abs(),
            ..Self::default()
        }
    }

    /// Touch started at `x`.
    pub fn begin(&mut self, x: f64) {
        self.start_x = x;
        self.current_x = x;
        self.active = true;
    }

    /// Touch moved to `x`. Ignored when no touch is active.
    pub fn update(&mut self, x: f64) {
        if self.active {
            self.current_x = x;
        }
    }

    /// Touch ended. Returns the swipe, or `None` for a tap.
    pub fn end(&mut self) -> Option<SwipeDirection> {
        if !self.active {
            return None;
        }
        self.active = false;
        SwipeDirection::classify(self.start_x - self.current_x, self.threshold)
    }

    /// Touch cancelled by the browser; nothing is classified.
    pub fn cancel(&mut self) {
        self.active = false;
        self.current_x = self.start_x;
    }

    /// Whether a touch is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Travelled distance, `start - current`. Zero when idle.
    pub fn distance(&self) -> f64 {
        if self.active {
            self.start_x - self.current_x
        } else {
            0.0
        }
    }

    /// Classification of the gesture so far.
    pub fn pending(&self) -> Option<SwipeDirection> {
        SwipeDirection::classify(self.distance(), self.threshold)
    }
}

/// Opacity override for a carousel card during an active swipe.
///
/// The card being revealed fades in by `|distance| / fade` while the active
/// card fades out by the same amount. Other cards, an idle gesture or an empty
/// carousel produce `None`, meaning the default styling applies.
pub fn card_opacity(
    index: usize,
    active_index: usize,
    item_count: usize,
    distance: f64,
    fade: f64,
) -> Option<f64> {
    if item_count == 0 || distance == 0.0 || fade <= 0.0 {
        return None;
    }

    let progress = (distance.abs() / fade).clamp(0.0, 1.0);
    let incoming = if distance > 0.0 {
        Direction::Next
    } else {
        Direction::Previous
    };

    if index == active_index {
        Some(1.0 - progress)
    } else if next_index(incoming, active_index, item_count) == Some(index) {
        Some(progress)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_threshold() {
        assert_eq!(SwipeDirection::classify(51.0, 50.0), Some(SwipeDirection::Left));
        assert_eq!(SwipeDirection::classify(-51.0, 50.0), Some(SwipeDirection::Right));
        assert_eq!(SwipeDirection::classify(50.0, 50.0), None);
        assert_eq!(SwipeDirection::classify(0.0, 50.0), None);
    }

    #[test]
    fn test_swipe_maps_to_direction() {
        assert_eq!(SwipeDirection::Left.direction(), Direction::Next);
        assert_eq!(SwipeDirection::Right.direction(), Direction::Previous);
    }

    #[test]
    fn test_tracker_left_swipe() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.begin(300.0);
        tracker.update(200.0);
        assert!(tracker.is_active());
        assert_eq!(tracker.distance(), 100.0);
        assert_eq!(tracker.pending(), Some(SwipeDirection::Left));
        assert_eq!(tracker.end(), Some(SwipeDirection::Left));
        assert!(!tracker.is_active());
        assert_eq!(tracker.distance(), 0.0);
    }

    #[test]
    fn test_tracker_tap_is_not_a_swipe() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.begin(120.0);
        tracker.update(110.0);
        assert_eq!(tracker.end(), None);
    }

    #[test]
    fn test_tracker_ignores_moves_when_idle() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.update(10.0);
        assert_eq!(tracker.distance(), 0.0);
        assert_eq!(tracker.end(), None);
    }

    #[test]
    fn test_tracker_cancel() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.begin(0.0);
        tracker.update(400.0);
        tracker.cancel();
        assert_eq!(tracker.end(), None);
    }

    fn approx(value: Option<f64>, expected: f64) -> bool {
        value.is_some_and(|v| (v - expected).abs() < 1e-9)
    }

    #[test]
    fn test_card_opacity_left_swipe() {
        // Active card 1 of 5, finger moved 125px left: card 2 fades in.
        assert!(approx(card_opacity(1, 1, 5, 125.0, 250.0), 0.5));
        assert!(approx(card_opacity(2, 1, 5, 125.0, 250.0), 0.5));
        assert_eq!(card_opacity(0, 1, 5, 125.0, 250.0), None);
    }

    #[test]
    fn test_card_opacity_right_swipe_wraps() {
        assert!(approx(card_opacity(4, 0, 5, -50.0, 250.0), 0.2));
        assert!(approx(card_opacity(0, 0, 5, -50.0, 250.0), 0.8));
    }

    #[test]
    fn test_card_opacity_clamped_and_idle() {
        assert_eq!(card_opacity(1, 0, 3, 1000.0, 250.0), Some(1.0));
        assert_eq!(card_opacity(0, 0, 3, 1000.0, 250.0), Some(0.0));
        assert_eq!(card_opacity(0, 0, 3, 0.0, 250.0), None);
        assert_eq!(card_opacity(0, 0, 0, 10.0, 250.0), None);
    }
}
