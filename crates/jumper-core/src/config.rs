//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    tracking::TrackingTool,
};

/// Main configuration structure for the blog components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Headless CMS settings.
    #[serde(default)]
    pub cms: CmsConfig,

    /// Highlights carousel settings.
    #[serde(default)]
    pub highlights: HighlightsConfig,

    /// Articles board settings.
    #[serde(default)]
    pub board: BoardConfig,

    /// Analytics settings.
    #[serde(default)]
    pub tracking: TrackingConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Public base URL of the site (e.g., "https://jumper.exchange").
    pub base_url: String,

    /// Navbar tabs.
    #[serde(default = "default_nav")]
    pub nav: Vec<NavLink>,
}

/// A navbar tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

/// Headless CMS connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    /// CMS origin, also used to resolve upload URLs.
    #[serde(default = "default_cms_url")]
    pub base_url: String,

    /// REST prefix below the origin.
    #[serde(default = "default_api_path")]
    pub api_path: String,

    /// Optional bearer token for read access.
    #[serde(default)]
    pub token: Option<String>,
}

/// Highlights carousel behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightsConfig {
    /// Maximum number of highlighted articles.
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// Minimum horizontal travel, in pixels, for a swipe.
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,

    /// Travel, in pixels, over which cards cross-fade.
    #[serde(default = "default_fade_distance")]
    pub fade_distance: f64,
}

/// Articles board behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Articles per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

/// Analytics settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Whether events are sent at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Tools that never receive blog events.
    #[serde(default = "default_disabled_tools")]
    pub disabled_tools: Vec<TrackingTool>,
}

// Default value functions
fn default_nav() -> Vec<NavLink> {
    vec![
        NavLink {
            label: "Exchange".to_string(),
            path: "/".to_string(),
        },
        NavLink {
            label: "Learn".to_string(),
            path: "/learn".to_string(),
        },
    ]
}

fn default_cms_url() -> String {
    "http://localhost:1337".to_string()
}

fn default_api_path() -> String {
    "api".to_string()
}

fn default_max_items() -> usize {
    5
}

fn default_swipe_threshold() -> f64 {
    50.0
}

fn default_fade_distance() -> f64 {
    250.0
}

fn default_page_size() -> u32 {
    6
}

fn default_true() -> bool {
    true
}

fn default_disabled_tools() -> Vec<TrackingTool> {
    vec![TrackingTool::Arcx, TrackingTool::Cookie3]
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: default_cms_url(),
            api_path: default_api_path(),
            token: None,
        }
    }
}

impl Default for HighlightsConfig {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
            swipe_threshold: default_swipe_threshold(),
            fade_distance: default_fade_distance(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            disabled_tools: default_disabled_tools(),
        }
    }
}

impl Config {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| CoreError::config_with_source("Failed to parse config", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, with `JUMPER__*` overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("JUMPER").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.cms.base_url.is_empty() {
            return Err(CoreError::config("cms.base_url cannot be empty"));
        }

        if self.highlights.max_items == 0 {
            return Err(CoreError::config("highlights.max_items must be positive"));
        }

        if self.board.page_size == 0 {
            return Err(CoreError::config("board.page_size must be positive"));
        }

        if self.highlights.swipe_threshold < 0.0 || self.highlights.fade_distance <= 0.0 {
            return Err(CoreError::config(
                "highlights swipe distances must be positive",
            ));
        }

        if self.site.base_url.ends_with('/') || self.cms.base_url.ends_with('/') {
            tracing::warn!("base_url values should not have a trailing slash");
        }

        Ok(())
    }

    /// Get the full public URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
