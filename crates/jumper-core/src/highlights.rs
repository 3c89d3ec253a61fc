//! Highlights carousel controller.
//!
//! Owns the carousel's navigation and gesture state and turns raw input
//! (touch positions, key names, dot clicks, card taps) into index changes
//! and the tracking events they produce. The UI feeds it events and renders
//! whatever it reports; nothing here touches the DOM.

use crate::{
    config::HighlightsConfig,
    gesture::{SwipeTracker, card_opacity},
    keyboard::CarouselKey,
    navigation::NavigationState,
    tracking::TrackingEvent,
};

/// Outcome of a key press on the carousel.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// Open the article at this index.
    Open(usize),
    /// The active card moved to `index`.
    Moved { index: usize, event: TrackingEvent },
}

/// Input state machine behind the highlights carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightsController {
    state: NavigationState,
    swipe: SwipeTracker,
    max_items: usize,
    fade_distance: f64,
    /// Set when the last touch ended in a swipe; the click that follows it
    /// must not open the card.
    swiped: bool,
}

impl HighlightsController {
    /// Empty controller; call [`set_count`](Self::set_count) once content loads.
    pub fn new(settings: &HighlightsConfig) -> Self {
        Self {
            state: NavigationState::default(),
            swipe: SwipeTracker::new(settings.swipe_threshold),
            max_items: settings.max_items,
            fade_distance: settings.fade_distance,
            swiped: false,
        }
    }

    /// Update the number of loaded articles, capped at `max_items`.
    pub fn set_count(&mut self, loaded: usize) {
        self.state = self.state.with_count(loaded.min(self.max_items));
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn touch_start(&mut self, x: f64) {
        self.swiped = false;
        self.swipe.begin(x);
    }

    pub fn touch_move(&mut self, x: f64) {
        self.swipe.update(x);
    }

    pub fn touch_cancel(&mut self) {
        self.swipe.cancel();
    }

    /// Finish a touch.
    ///
    /// Returns the new active index and its swipe event when the gesture
    /// moved the carousel. Short drags and swipes over an empty carousel
    /// return `None` and track nothing.
    pub fn touch_end(&mut self) -> Option<(usize, TrackingEvent)> {
        let gesture = self.swipe.end()?;
        self.swiped = true;
        self.state = self.state.step(gesture.direction())?;
        let index = self.state.active_index;
        Some((index, TrackingEvent::highlight_swipe(gesture, index)))
    }

    /// Handle a key by its `KeyboardEvent.key` name.
    pub fn key(&mut self, key: &str) -> Option<KeyOutcome> {
        if self.state.is_empty() {
            return None;
        }
        match CarouselKey::from_key(key)? {
            CarouselKey::Open => Some(KeyOutcome::Open(self.state.active_index)),
            CarouselKey::Step(direction) => {
                self.state = self.state.step(direction)?;
                let index = self.state.active_index;
                Some(KeyOutcome::Moved {
                    index,
                    event: TrackingEvent::highlight_step(Some(direction), index),
                })
            }
        }
    }

    /// Activate the card behind a pagination dot.
    pub fn select(&mut self, index: usize) -> Option<TrackingEvent> {
        self.state = self.state.select(index)?;
        Some(TrackingEvent::highlight_step(None, index))
    }

    /// Whether a click on a card should open it.
    pub fn allows_tap(&self) -> bool {
        !self.swiped
    }

    /// Handle a click on the card at `index`.
    ///
    /// The click synthesized right after a swipe is swallowed; the flag is
    /// cleared either way so later mouse clicks open normally.
    pub fn tap(&mut self, index: usize) -> Option<usize> {
        let allowed = self.allows_tap();
        self.swiped = false;
        (allowed && index < self.state.item_count).then_some(index)
    }

    /// Opacity override for the card at `index` during a drag.
    pub fn opacity(&self, index: usize) -> Option<f64> {
        card_opacity(
            index,
            self.state.active_index,
            self.state.item_count,
            self.swipe.distance(),
            self.fade_distance,
        )
    }
}
