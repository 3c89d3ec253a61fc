//! Jumper Core Library
//!
//! DOM-free building blocks for the Jumper blog components: circular
//! navigation, swipe classification, keyboard mapping, the highlights
//! carousel controller, page stepping, the Strapi content model, share
//! links, tracking events and configuration.

pub mod blocks;
pub mod cms;
pub mod config;
pub mod error;
pub mod gesture;
pub mod highlights;
pub mod keyboard;
pub mod navigation;
pub mod pagination;
pub mod schema;
pub mod share;
pub mod tracking;

pub use blocks::{Block, InlineNode, reading_time};
pub use cms::{BlogArticle, ContentQuery, StrapiEntity, StrapiMeta, StrapiResponse, format_date};
pub use config::Config;
pub use error::{CoreError, Result};
pub use gesture::{SwipeDirection, SwipeTracker, card_opacity};
pub use highlights::{HighlightsController, KeyOutcome};
pub use keyboard::CarouselKey;
pub use navigation::{Direction, NavigationState, next_index};
pub use pagination::{PageWindow, step_page};
pub use schema::ArticleSchema;
pub use share::ShareTarget;
pub use tracking::{ConfiguredTracker, LogTracker, NoopTracker, Tracker, TrackingEvent};
