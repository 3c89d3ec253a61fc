//! Analytics events fired by the blog components.
//!
//! Components build a [`TrackingEvent`] and hand it to a [`Tracker`]. The
//! concrete analytics client sits behind the trait.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{config::TrackingConfig, gesture::SwipeDirection, navigation::Direction, share::ShareTarget};

/// Analytics backends an event can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingTool {
    Ga,
    Arcx,
    Cookie3,
}

/// Event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingCategory {
    BlogHighlights,
    BlogArticlesBoard,
    BlogArticle,
}

/// Event action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingAction {
    SwipeHighlightCard,
    ClickPagination,
    ClickHighlightCard,
    ShareArticle,
}

/// Keys of the event payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackingParameter {
    Pagination,
    PaginationCat,
    SwipeDirection,
    ShareTarget,
    Slug,
}

impl TrackingParameter {
    /// Payload key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pagination => "param_pagination",
            Self::PaginationCat => "param_pagination_cat",
            Self::SwipeDirection => "param_swipe_direction",
            Self::ShareTarget => "param_share_target",
            Self::Slug => "param_slug",
        }
    }
}

/// A single analytics event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub category: TrackingCategory,
    pub action: TrackingAction,
    pub label: String,
    #[serde(default)]
    pub data: BTreeMap<String, Value>,
    #[serde(default)]
    pub disabled_tools: Vec<TrackingTool>,
}

impl TrackingEvent {
    /// Create an event without payload.
    pub fn new(category: TrackingCategory, action: TrackingAction, label: impl Into<String>) -> Self {
        Self {
            category,
            action,
            label: label.into(),
            data: BTreeMap::new(),
            disabled_tools: Vec::new(),
        }
    }

    /// Add a payload entry.
    pub fn with(mut self, key: TrackingParameter, value: impl Into<Value>) -> Self {
        self.data.insert(key.as_str().to_string(), value.into());
        self
    }

    /// Exclude analytics backends; duplicates are ignored.
    pub fn disable(mut self, tools: &[TrackingTool]) -> Self {
        for tool in tools {
            if !self.disabled_tools.contains(tool) {
                self.disabled_tools.push(*tool);
            }
        }
        self
    }

    /// Whether `tool` should receive this event.
    pub fn sends_to(&self, tool: TrackingTool) -> bool {
        !self.disabled_tools.contains(&tool)
    }

    /// A completed swipe on the highlights carousel.
    pub fn highlight_swipe(swipe: SwipeDirection, index: usize) -> Self {
        Self::new(
            TrackingCategory::BlogHighlights,
            TrackingAction::SwipeHighlightCard,
            format!("swipe-blog-highlights-{}", swipe.as_str()),
        )
        .with(TrackingParameter::Pagination, index)
        .with(TrackingParameter::SwipeDirection, swipe.as_str())
    }

    /// Keyboard or dot navigation on the highlights carousel.
    pub fn highlight_step(direction: Option<Direction>, index: usize) -> Self {
        let label = match direction {
            Some(d) => format!("click-blog-highlights-{}", d.as_str()),
            None => "click-blog-highlights-pagination".to_string(),
        };
        Self::new(
            TrackingCategory::BlogHighlights,
            TrackingAction::ClickPagination,
            label,
        )
        .with(TrackingParameter::Pagination, index)
    }

    /// Opening the article behind a highlight card.
    pub fn highlight_open(slug: &str) -> Self {
        Self::new(
            TrackingCategory::BlogHighlights,
            TrackingAction::ClickHighlightCard,
            "click-blog-highlights-card",
        )
        .with(TrackingParameter::Slug, slug)
    }

    /// A click on the articles board pagination.
    ///
    /// `direction` is `None` for a numbered page button.
    pub fn board_pagination(direction: Option<Direction>, page: u32, tag_id: Option<u64>) -> Self {
        let label = match direction {
            Some(d) => format!("click-pagination-{}", d.as_str()),
            None => "click-pagination".to_string(),
        };
        Self::new(
            TrackingCategory::BlogArticlesBoard,
            TrackingAction::ClickPagination,
            label,
        )
        .with(TrackingParameter::Pagination, page)
        .with(TrackingParameter::PaginationCat, tag_id)
    }

    /// Sharing an article.
    pub fn share(target: ShareTarget, slug: &str) -> Self {
        Self::new(
            TrackingCategory::BlogArticle,
            TrackingAction::ShareArticle,
            format!("share-article-{}", target.as_str()),
        )
        .with(TrackingParameter::ShareTarget, target.as_str())
        .with(TrackingParameter::Slug, slug)
    }
}

/// Sink for analytics events.
pub trait Tracker {
    /// Record one event.
    fn track(&self, event: &TrackingEvent);
}

impl<F> Tracker for F
where
    F: Fn(&TrackingEvent),
{
    fn track(&self, event: &TrackingEvent) {
        self(event)
    }
}

/// Writes events to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracker;

impl Tracker for LogTracker {
    fn track(&self, event: &TrackingEvent) {
        let data = serde_json::to_string(&event.data).unwrap_or_default();
        tracing::info!(
            category = ?event.category,
            action = ?event.action,
            label = %event.label,
            data = %data,
            "tracking event"
        );
    }
}

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracker;

impl Tracker for NoopTracker {
    fn track(&self, _event: &TrackingEvent) {}
}

/// Applies [`TrackingConfig`] before forwarding to an inner tracker.
#[derive(Debug, Clone)]
pub struct ConfiguredTracker<T> {
    inner: T,
    config: TrackingConfig,
}

impl<T: Tracker> ConfiguredTracker<T> {
    /// Wrap `inner` with the given settings.
    pub fn new(inner: T, config: TrackingConfig) -> Self {
        Self { inner, config }
    }
}

impl<T: Tracker> Tracker for ConfiguredTracker<T> {
    fn track(&self, event: &TrackingEvent) {
        if !self.config.enabled {
            tracing::debug!(label = %event.label, "tracking disabled, event dropped");
            return;
        }
        let event = event.clone().disable(&self.config.disabled_tools);
        self.inner.track(&event);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn test_swipe_event_payload() {
        let event = TrackingEvent::highlight_swipe(SwipeDirection::Left, 2);
        assert_eq!(event.category, TrackingCategory::BlogHighlights);
        assert_eq!(event.label, "swipe-blog-highlights-left");
        assert_eq!(event.data["param_pagination"], Value::from(2));
        assert_eq!(event.data["param_swipe_direction"], Value::from("left"));
    }

    #[test]
    fn test_swipe_right_label() {
        let event = TrackingEvent::highlight_swipe(SwipeDirection::Right, 0);
        assert_eq!(event.label, "swipe-blog-highlights-right");
        assert_eq!(event.data["param_swipe_direction"], Value::from("right"));
    }

    #[test]
    fn test_board_pagination_labels() {
        let numbered = TrackingEvent::board_pagination(None, 3, Some(4));
        assert_eq!(numbered.label, "click-pagination");
        assert_eq!(numbered.data["param_pagination_cat"], Value::from(4));

        let next = TrackingEvent::board_pagination(Some(Direction::Next), 1, None);
        assert_eq!(next.label, "click-pagination-next");
        assert_eq!(next.data["param_pagination_cat"], Value::Null);

        let prev = TrackingEvent::board_pagination(Some(Direction::Previous), 1, None);
        assert_eq!(prev.label, "click-pagination-prev");
    }

    #[test]
    fn test_disable_deduplicates() {
        let event = TrackingEvent::highlight_open("slug")
            .disable(&[TrackingTool::Arcx])
            .disable(&[TrackingTool::Arcx, TrackingTool::Cookie3]);
        assert_eq!(event.disabled_tools.len(), 2);
        assert!(event.sends_to(TrackingTool::Ga));
        assert!(!event.sends_to(TrackingTool::Cookie3));
    }

    #[test]
    fn test_closure_tracker() {
        let seen = RefCell::new(Vec::new());
        let tracker = |event: &TrackingEvent| seen.borrow_mut().push(event.label.clone());
        tracker.track(&TrackingEvent::share(ShareTarget::X, "hello"));
        assert_eq!(seen.borrow().as_slice(), ["share-article-x"]);
    }

    #[test]
    fn test_configured_tracker_applies_tools() {
        let seen = RefCell::new(Vec::new());
        let tracker = ConfiguredTracker::new(
            |event: &TrackingEvent| seen.borrow_mut().push(event.clone()),
            TrackingConfig::default(),
        );
        tracker.track(&TrackingEvent::highlight_open("a"));

        let events = seen.borrow();
        assert_eq!(events.len(), 1);
        assert!(!events[0].sends_to(TrackingTool::Arcx));
        assert!(events[0].sends_to(TrackingTool::Ga));
    }

    #[test]
    fn test_configured_tracker_disabled() {
        let seen = RefCell::new(0);
        let config = TrackingConfig {
            enabled: false,
            ..TrackingConfig::default()
        };
        let tracker = ConfiguredTracker::new(|_: &TrackingEvent| *seen.borrow_mut() += 1, config);
        tracker.track(&TrackingEvent::highlight_open("a"));
        assert_eq!(*seen.borrow(), 0);
    }
}
