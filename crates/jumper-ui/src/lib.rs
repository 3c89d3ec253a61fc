//! Jumper UI Components
//!
//! Leptos components for the Jumper blog.
//!
//! # Components
//!
//! ## Blog
//! - [`BlogHighlights`] - Swipeable carousel of the newest articles
//! - [`BlogArticle`] - Full article with share bar and author footer
//! - [`BlogArticlesBoard`] - Paged grid of [`ArticleCard`]s
//! - [`BlogArticlesBoardPagination`] - Prev/next and numbered page buttons
//!
//! ## Navigation
//! - [`Navbar`] - Logo, tabs and action slot
//!
//! # Example
//!
//! ```ignore
//! use jumper_core::Config;
//! use jumper_ui::{BlogHighlights, SiteContext, provide_site};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Blog(config: Config) -> impl IntoView {
//!     provide_site(SiteContext::with_log_tracker(config));
//!
//!     view! { <BlogHighlights /> }
//! }
//! ```

pub mod article;
pub mod board;
pub mod cms;
pub mod context;
pub mod dom;
pub mod highlights;
pub mod navbar;
pub mod pagination;

pub use article::{BlocksRenderer, BlogArticle, JumperBanner};
pub use board::{ArticleCard, BlogArticlesBoard};
pub use cms::{FetchError, fetch_article, fetch_articles};
pub use context::{SiteContext, provide_site, use_site};
pub use highlights::BlogHighlights;
pub use navbar::{Navbar, is_active_path};
pub use pagination::BlogArticlesBoardPagination;
