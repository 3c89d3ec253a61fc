//! Shared site context: configuration and the analytics sink.

use std::sync::Arc;

use jumper_core::{Config, ConfiguredTracker, LogTracker, Tracker, TrackingEvent};
use leptos::prelude::*;

/// Values every blog component reads from context.
#[derive(Clone)]
pub struct SiteContext {
    /// Site configuration.
    pub config: Arc<Config>,
    tracker: Arc<dyn Tracker + Send + Sync>,
}

impl SiteContext {
    /// Create a context around `tracker`.
    ///
    /// The tracker is always wrapped in [`ConfiguredTracker`], so `[tracking]`
    /// settings apply whichever sink receives the events.
    pub fn new(config: Config, tracker: impl Tracker + Send + Sync + 'static) -> Self {
        let tracker = ConfiguredTracker::new(tracker, config.tracking.clone());
        Self {
            config: Arc::new(config),
            tracker: Arc::new(tracker),
        }
    }

    /// Create a context that logs events.
    pub fn with_log_tracker(config: Config) -> Self {
        Self::new(config, LogTracker)
    }

    /// Send an analytics event.
    pub fn track(&self, event: TrackingEvent) {
        self.tracker.track(&event);
    }

    /// Origin used to resolve CMS uploads.
    pub fn cms_origin(&self) -> &str {
        &self.config.cms.base_url
    }
}

/// Provide the site context to child components.
pub fn provide_site(site: SiteContext) {
    provide_context(site);
}

/// Read the site context provided by [`provide_site`].
pub fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use jumper_core::tracking::TrackingTool;

    use super::*;

    const CONFIG: &str = r#"
[site]
title = "Jumper"
base_url = "https://jumper.exchange"

[cms]
base_url = "https://strapi.jumper.exchange"
"#;

    fn config() -> Config {
        Config::from_toml_str(CONFIG).expect("config")
    }

    fn recording_site(config: Config) -> (SiteContext, Arc<Mutex<Vec<TrackingEvent>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let site = SiteContext::new(config, move |event: &TrackingEvent| {
            sink.lock().expect("lock").push(event.clone());
        });
        (site, seen)
    }

    #[test]
    fn test_custom_tracker_honors_disabled_tools() {
        let (site, seen) = recording_site(config());
        site.track(TrackingEvent::highlight_open("hello"));

        let seen = seen.lock().expect("lock");
        assert_eq!(seen.len(), 1);
        assert!(seen[0].sends_to(TrackingTool::Ga));
        assert!(!seen[0].sends_to(TrackingTool::Arcx));
        assert!(!seen[0].sends_to(TrackingTool::Cookie3));
    }

    #[test]
    fn test_custom_tracker_honors_disabled_tracking() {
        let mut config = config();
        config.tracking.enabled = false;
        let (site, seen) = recording_site(config);
        site.track(TrackingEvent::highlight_open("hello"));
        assert!(seen.lock().expect("lock").is_empty());
    }

    #[test]
    fn test_track_forwards_events() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let site = SiteContext::new(config(), move |event: &TrackingEvent| {
            sink.lock().expect("lock").push(event.label.clone());
        });

        site.track(TrackingEvent::highlight_open("hello"));
        assert_eq!(
            seen.lock().expect("lock").as_slice(),
            ["click-blog-highlights-card"]
        );
    }

    #[test]
    fn test_cms_origin() {
        let site = SiteContext::with_log_tracker(config());
        assert_eq!(site.cms_origin(), "https://strapi.jumper.exchange");
    }
}
