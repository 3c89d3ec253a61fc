//! CMS fetching from the browser.

use gloo_net::http::Request;
use jumper_core::{
    CoreError, StrapiResponse,
    cms::{BlogArticle as BlogArticleData, ContentQuery},
    config::CmsConfig,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Error loading content from the CMS.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The CMS answered with a non-success status.
    #[error("CMS responded with HTTP {0}")]
    Status(u16),

    /// The query or the payload was invalid.
    #[error("{0}")]
    Content(String),
}

impl From<CoreError> for FetchError {
    fn from(err: CoreError) -> Self {
        Self::Content(err.to_string())
    }
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Run a collection query against the CMS.
pub async fn fetch_collection<T: DeserializeOwned>(
    cms: &CmsConfig,
    query: &ContentQuery,
) -> Result<StrapiResponse<T>, FetchError> {
    let url = query.url(cms)?;
    log::debug!("fetching {url}");

    let mut request = Request::get(url.as_str());
    if let Some(token) = &cms.token {
        request = request.header("Authorization", &format!("Bearer {token}"));
    }

    let response = request.send().await?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.text().await?;
    Ok(StrapiResponse::from_json(query.content_type(), &body)?)
}

/// One page of blog articles, newest first, optionally filtered by tag.
pub async fn fetch_articles(
    cms: &CmsConfig,
    page: u32,
    page_size: u32,
    tag_id: Option<u64>,
) -> Result<StrapiResponse<BlogArticleData>, FetchError> {
    let query = ContentQuery::blog_articles()
        .with_page(page, page_size)
        .with_tag(tag_id);
    fetch_collection(cms, &query).await
}

/// A single article by slug; `None` when no article matches.
pub async fn fetch_article(
    cms: &CmsConfig,
    slug: &str,
) -> Result<Option<BlogArticleData>, FetchError> {
    let query = ContentQuery::blog_articles().with_slug(slug);
    let response = fetch_collection::<BlogArticleData>(cms, &query).await?;
    Ok(response.data.into_iter().next().map(|e| e.attributes))
}
