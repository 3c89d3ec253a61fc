//! Strapi content model and query URLs.
//!
//! Mirrors the v4 REST envelope: every collection comes back as
//! `{ data: [{ id, attributes }], meta: { pagination } }` and relations are
//! nested `{ data: ... }` objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use url::Url;

use crate::{
    blocks::{self, Block},
    config::CmsConfig,
    error::{CoreError, Result},
};

/// Collection name of blog articles in the CMS.
pub const BLOG_ARTICLES: &str = "blog-articles";

/// Relations populated for blog article queries.
const ARTICLE_POPULATE: &[&str] = &["Image", "author.Avatar", "tags"];

/// Collection response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrapiResponse<T> {
    pub data: Vec<StrapiEntity<T>>,
    #[serde(default)]
    pub meta: StrapiMeta,
}

impl<T: DeserializeOwned> StrapiResponse<T> {
    /// Decode a response body for `content_type`.
    pub fn from_json(content_type: &str, body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| CoreError::decode(content_type, e.to_string()))
    }
}

impl<T> StrapiResponse<T> {
    /// Whether the page holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A single entry with its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrapiEntity<T> {
    pub id: u64,
    pub attributes: T,
}

/// Response metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrapiMeta {
    #[serde(default)]
    pub pagination: StrapiPagination,
}

/// Pagination metadata, 1-based pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrapiPagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u32,
}

impl Default for StrapiPagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 0,
            page_count: 0,
            total: 0,
        }
    }
}

/// A to-one relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation<T> {
    pub data: Option<StrapiEntity<T>>,
}

impl<T> Default for Relation<T> {
    fn default() -> Self {
        Self { data: None }
    }
}

impl<T> Relation<T> {
    /// The related attributes, when present.
    pub fn get(&self) -> Option<&T> {
        self.data.as_ref().map(|e| &e.attributes)
    }
}

/// A to-many relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationList<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<StrapiEntity<T>>,
}

impl<T> Default for RelationList<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

/// Uploaded media file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAttributes {
    pub url: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
}

/// Media relation as returned for images.
pub type StrapiImage = Relation<MediaAttributes>;

/// Article author.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthorAttributes {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Role", default)]
    pub role: Option<String>,
    #[serde(rename = "Avatar", default)]
    pub avatar: StrapiImage,
}

/// Article tag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TagAttributes {
    #[serde(rename = "Title")]
    pub title: String,
}

/// Blog article attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogArticle {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Subtitle", default)]
    pub subtitle: String,
    #[serde(rename = "Slug")]
    pub slug: String,
    #[serde(rename = "Content", default)]
    pub content: Vec<Block>,
    #[serde(rename = "Image", default)]
    pub image: StrapiImage,
    #[serde(default)]
    pub author: Relation<AuthorAttributes>,
    #[serde(default)]
    pub tags: RelationList<TagAttributes>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl BlogArticle {
    /// Publication date, falling back to creation.
    pub fn published(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }

    /// Last modification date, falling back to creation.
    pub fn modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    /// Formatted publication date.
    pub fn display_date(&self) -> String {
        format_date(self.published())
    }

    /// Reading time in minutes.
    pub fn reading_time(&self) -> u32 {
        blocks::reading_time(&self.content)
    }

    /// Router path of the article page.
    pub fn path(&self) -> String {
        article_path(&self.slug)
    }

    /// Absolute URL of the hero image.
    pub fn image_url(&self, origin: &str) -> Option<String> {
        self.image.get().map(|m| media_url(origin, &m.url))
    }

    /// Alternative text of the hero image.
    pub fn image_alt(&self) -> String {
        self.image
            .get()
            .and_then(|m| m.alternative_text.clone())
            .unwrap_or_default()
    }

    /// Author attributes, when the relation was populated.
    pub fn author(&self) -> Option<&AuthorAttributes> {
        self.author.get()
    }

    /// Absolute URL of the author avatar.
    pub fn avatar_url(&self, origin: &str) -> Option<String> {
        self.author()
            .and_then(|a| a.avatar.get())
            .map(|m| media_url(origin, &m.url))
    }

    /// Tag titles in CMS order.
    pub fn tag_titles(&self) -> Vec<String> {
        self.tags
            .data
            .iter()
            .map(|t| t.attributes.title.clone())
            .collect()
    }
}

/// Router path for an article slug.
pub fn article_path(slug: &str) -> String {
    format!("/blog/{slug}")
}

/// Resolve an upload path against the CMS origin.
///
/// Absolute URLs (e.g. from a CDN provider) are kept as they are.
pub fn media_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Date as shown next to articles, e.g. `Jan 5, 2024`.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Query against a CMS collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    content_type: String,
    page: Option<u32>,
    page_size: Option<u32>,
    slug: Option<String>,
    tag_id: Option<u64>,
    populate: Vec<String>,
    sort: Option<String>,
}

impl ContentQuery {
    /// Query all entries of `content_type`, fully populated.
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            page: None,
            page_size: None,
            slug: None,
            tag_id: None,
            populate: Vec::new(),
            sort: None,
        }
    }

    /// Newest blog articles first, with image, author and tags.
    pub fn blog_articles() -> Self {
        Self::new(BLOG_ARTICLES)
            .with_populate(ARTICLE_POPULATE)
            .with_sort("publishedAt:desc")
    }

    /// Collection name.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Request one page.
    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = Some(page.max(1));
        self.page_size = Some(page_size);
        self
    }

    /// Filter by slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Filter by tag id; `None` clears the filter.
    pub fn with_tag(mut self, tag_id: Option<u64>) -> Self {
        self.tag_id = tag_id;
        self
    }

    /// Relations to populate instead of `*`.
    pub fn with_populate(mut self, fields: &[&str]) -> Self {
        self.populate = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Sort expression such as `publishedAt:desc`.
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Full request URL against the configured CMS.
    pub fn url(&self, cms: &CmsConfig) -> Result<Url> {
        let raw = format!(
            "{}/{}/{}",
            cms.base_url.trim_end_matches('/'),
            cms.api_path.trim_matches('/'),
            self.content_type
        );
        let mut url = Url::parse(&raw)?;

        {
            let mut pairs = url.query_pairs_mut();
            if self.populate.is_empty() {
                pairs.append_pair("populate", "*");
            } else {
                for (i, field) in self.populate.iter().enumerate() {
                    pairs.append_pair(&format!("populate[{i}]"), field);
                }
            }
            if let Some(sort) = &self.sort {
                pairs.append_pair("sort", sort);
            }
            if let Some(slug) = &self.slug {
                pairs.append_pair("filters[Slug][$eq]", slug);
            }
            if let Some(tag_id) = self.tag_id {
                pairs.append_pair("filters[tags][id][$eq]", &tag_id.to_string());
            }
            if let (Some(page), Some(size)) = (self.page, self.page_size) {
                pairs.append_pair("pagination[page]", &page.to_string());
                pairs.append_pair("pagination[pageSize]", &size.to_string());
            }
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLES_JSON: &str = r#"{
      "data": [
        {
          "id": 7,
          "attributes": {
            "Title": "Bridging 101",
            "Subtitle": "How cross-chain swaps work",
            "Slug": "bridging-101",
            "Content": [{"type": "paragraph", "children": [{"type": "text", "text": "Hello"}]}],
            "Image": {"data": {"id": 1, "attributes": {"url": "/uploads/hero.png", "alternativeText": "hero"}}},
            "author": {"data": {"id": 2, "attributes": {
              "Name": "Ada", "Role": "Writer",
              "Avatar": {"data": {"id": 3, "attributes": {"url": "/uploads/ada.png"}}}
            }}},
            "tags": {"data": [{"id": 4, "attributes": {"Title": "Bridges"}}]},
            "createdAt": "2024-01-03T10:00:00.000Z",
            "updatedAt": "2024-01-06T10:00:00.000Z",
            "publishedAt": "2024-01-05T10:00:00.000Z"
          }
        }
      ],
      "meta": {"pagination": {"page": 1, "pageSize": 6, "pageCount": 2, "total": 9}}
    }"#;

    fn cms() -> CmsConfig {
        CmsConfig {
            base_url: "https://cms.example.com/".to_string(),
            ..CmsConfig::default()
        }
    }

    #[test]
    fn test_decode_articles() {
        let response =
            StrapiResponse::<BlogArticle>::from_json(BLOG_ARTICLES, ARTICLES_JSON).expect("decode");
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.meta.pagination.page_count, 2);

        let article = &response.data[0].attributes;
        assert_eq!(article.slug, "bridging-101");
        assert_eq!(article.display_date(), "Jan 5, 2024");
        assert_eq!(article.reading_time(), 1);
        assert_eq!(article.path(), "/blog/bridging-101");
        assert_eq!(article.author().map(|a| a.name.as_str()), Some("Ada"));
        assert_eq!(
            article.avatar_url("https://cms.example.com").as_deref(),
            Some("https://cms.example.com/uploads/ada.png")
        );
        assert_eq!(article.image_alt(), "hero");
        assert_eq!(article.tag_titles(), vec!["Bridges"]);
    }

    #[test]
    fn test_decode_error_names_content_type() {
        let err = StrapiResponse::<BlogArticle>::from_json(BLOG_ARTICLES, "{").unwrap_err();
        assert!(err.to_string().contains("blog-articles"));
    }

    #[test]
    fn test_missing_relations_default() {
        let json = r#"{"data": [{"id": 1, "attributes": {
            "Title": "T", "Slug": "t", "createdAt": "2023-11-20T00:00:00Z"
        }}]}"#;
        let response = StrapiResponse::<BlogArticle>::from_json(BLOG_ARTICLES, json).expect("decode");
        let article = &response.data[0].attributes;
        assert!(article.author().is_none());
        assert!(article.image_url("https://cms.example.com").is_none());
        assert_eq!(article.display_date(), "Nov 20, 2023");
        assert_eq!(response.meta.pagination.page, 1);
    }

    #[test]
    fn test_media_url() {
        assert_eq!(
            media_url("https://cms.example.com/", "/uploads/a.png"),
            "https://cms.example.com/uploads/a.png"
        );
        assert_eq!(
            media_url("https://cms.example.com", "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_query_url_defaults() {
        let url = ContentQuery::new("tags").url(&cms()).expect("url");
        assert_eq!(url.path(), "/api/tags");
        assert_eq!(url.query(), Some("populate=*"));
    }

    #[test]
    fn test_query_url_blog_page() {
        let url = ContentQuery::blog_articles()
            .with_page(2, 6)
            .with_tag(Some(4))
            .url(&cms())
            .expect("url");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("populate[1]".into(), "author.Avatar".into())));
        assert!(pairs.contains(&("sort".into(), "publishedAt:desc".into())));
        assert!(pairs.contains(&("filters[tags][id][$eq]".into(), "4".into())));
        assert!(pairs.contains(&("pagination[page]".into(), "2".into())));
        assert!(pairs.contains(&("pagination[pageSize]".into(), "6".into())));
    }

    #[test]
    fn test_query_url_slug() {
        let url = ContentQuery::blog_articles()
            .with_slug("bridging-101")
            .url(&cms())
            .expect("url");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("filters[Slug][$eq]".into(), "bridging-101".into())));
    }

    #[test]
    fn test_query_url_invalid_base() {
        let config = CmsConfig {
            base_url: "not a url".to_string(),
            ..CmsConfig::default()
        };
        assert!(ContentQuery::new("tags").url(&config).is_err());
    }
}
