//! Bounded circular navigation.
//!
//! The stepper is a pure function of the direction, the active index and the
//! item count. Callers own the state and feed the result back in.

use serde::{Deserialize, Serialize};

/// Sequential direction for circular traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Self::Next => Self::Previous,
            Self::Previous => Self::Next,
        }
    }

    /// Short label used in tracking payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "prev",
        }
    }
}

/// Compute the index reached by stepping once in `direction`.
///
/// Wraps to `0` past the last item and to `item_count - 1` before the first.
/// Returns `None` when there is nothing to navigate. An `active_index` outside
/// `0..item_count` never panics: `Next` wraps to the start and `Previous`
/// steps down by one.
#[must_use]
pub fn next_index(direction: Direction, active_index: usize, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }

    let last = item_count - 1;
    let index = match direction {
        Direction::Next if active_index < last => active_index + 1,
        Direction::Next => 0,
        Direction::Previous if active_index > 0 => active_index - 1,
        Direction::Previous => last,
    };

    Some(index)
}

/// Active position inside a list of navigable items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    /// Currently active index.
    pub active_index: usize,

    /// Number of navigable items.
    pub item_count: usize,
}

impl NavigationState {
    /// Create a new state, clamping the active index into range.
    pub fn new(active_index: usize, item_count: usize) -> Self {
        let active_index = if item_count == 0 {
            0
        } else {
            active_index.min(item_count - 1)
        };

        Self {
            active_index,
            item_count,
        }
    }

    /// Whether there is anything to navigate.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// The state after stepping once, or `None` for an empty list.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        next_index(direction, self.active_index, self.item_count).map(|active_index| Self {
            active_index,
            ..self
        })
    }

    /// The state after an explicit selection, or `None` when out of range.
    #[must_use]
    pub fn select(self, index: usize) -> Option<Self> {
        (index < self.item_count).then_some(Self {
            active_index: index,
            ..self
        })
    }

    /// Index that a step in `direction` would activate.
    pub fn peek(&self, direction: Direction) -> Option<usize> {
        next_index(direction, self.active_index, self.item_count)
    }

    /// Same position with a new item count, e.g. once content has loaded.
    #[must_use]
    pub fn with_count(self, item_count: usize) -> Self {
        Self::new(self.active_index, item_count)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_next_steps_forward() {
        assert_eq!(next_index(Direction::Next, 2, 5), Some(3));
    }

    #[test]
    fn test_next_wraps_to_start() {
        assert_eq!(next_index(Direction::Next, 4, 5), Some(0));
    }

    #[test]
    fn test_previous_wraps_to_end() {
        assert_eq!(next_index(Direction::Previous, 0, 5), Some(4));
    }

    #[test]
    fn test_previous_steps_back() {
        assert_eq!(next_index(Direction::Previous, 3, 5), Some(2));
    }

    #[test]
    fn test_empty_has_no_index() {
        assert_eq!(next_index(Direction::Next, 0, 0), None);
        assert_eq!(next_index(Direction::Previous, 0, 0), None);
        assert_eq!(next_index(Direction::Previous, 7, 0), None);
    }

    #[test]
    fn test_single_item_stays_put() {
        assert_eq!(next_index(Direction::Next, 0, 1), Some(0));
        assert_eq!(next_index(Direction::Previous, 0, 1), Some(0));
    }

    #[test]
    fn test_out_of_range_does_not_panic() {
        assert_eq!(next_index(Direction::Next, 9, 3), Some(0));
        assert_eq!(next_index(Direction::Previous, 9, 3), Some(8));
        assert_eq!(next_index(Direction::Next, usize::MAX, 3), Some(0));
    }

    #[test]
    fn test_state_new_clamps() {
        assert_eq!(NavigationState::new(8, 5).active_index, 4);
        assert_eq!(NavigationState::new(3, 0).active_index, 0);
    }

    #[test]
    fn test_state_step_and_select() {
        let state = NavigationState::new(0, 3);
        let state = state.step(Direction::Previous).expect("non-empty");
        assert_eq!(state.active_index, 2);
        assert_eq!(state.item_count, 3);

        assert_eq!(state.select(1).map(|s| s.active_index), Some(1));
        assert_eq!(state.select(3), None);
        assert_eq!(NavigationState::default().step(Direction::Next), None);
    }

    #[test]
    fn test_state_with_count_after_load() {
        let state = NavigationState::default().with_count(5);
        assert_eq!(state.active_index, 0);
        assert_eq!(state.peek(Direction::Previous), Some(4));
    }

    #[test]
    fn test_direction_reverse() {
        assert_eq!(Direction::Next.reverse(), Direction::Previous);
        assert_eq!(Direction::Previous.reverse(), Direction::Next);
    }

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Direction::Next), Just(Direction::Previous)]
    }

    proptest! {
        /// Next followed by Previous returns to the starting index.
        #[test]
        fn next_then_previous_round_trips((count, active) in (2usize..64).prop_flat_map(|n| (Just(n), 0..n))) {
            let forward = next_index(Direction::Next, active, count).unwrap();
            prop_assert_eq!(next_index(Direction::Previous, forward, count), Some(active));
        }

        /// Stepping forward `count` times is a full cycle.
        #[test]
        fn full_cycle_returns_to_start((count, start) in (1usize..64).prop_flat_map(|n| (Just(n), 0..n))) {
            let mut index = start;
            for _ in 0..count {
                index = next_index(Direction::Next, index, count).unwrap();
            }
            prop_assert_eq!(index, start);
        }

        #[test]
        fn boundaries_wrap(count in 1usize..1024) {
            prop_assert_eq!(next_index(Direction::Next, count - 1, count), Some(0));
            prop_assert_eq!(next_index(Direction::Previous, 0, count), Some(count - 1));
        }

        /// Valid input always produces a valid index.
        #[test]
        fn result_stays_in_range(
            direction in direction_strategy(),
            (count, active) in (1usize..256).prop_flat_map(|n| (Just(n), 0..n)),
        ) {
            let index = next_index(direction, active, count).unwrap();
            prop_assert!(index < count);
        }

        #[test]
        fn empty_is_always_none(direction in direction_strategy(), active in any::<usize>()) {
            prop_assert_eq!(next_index(direction, active, 0), None);
        }
    }
}
