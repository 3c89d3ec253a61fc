//! Keyboard shortcuts for the highlights carousel.

use crate::navigation::Direction;

/// Action bound to a key while the carousel is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKey {
    /// Open the active article.
    Open,
    /// Move to the neighbouring item.
    Step(Direction),
}

impl CarouselKey {
    /// Map a `KeyboardEvent.key` value to a carousel action.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Open),
            "ArrowRight" => Some(Self::Step(Direction::Next)),
            "ArrowLeft" => Some(Self::Step(Direction::Previous)),
            _ => None,
        }
    }
}
