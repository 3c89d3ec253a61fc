//! schema.org structured data for article pages.

use serde::Serialize;

use crate::{cms::BlogArticle, error::Result};

/// `NewsArticle` JSON-LD document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub image: Vec<String>,
    pub date_published: String,
    pub date_modified: String,
    pub author: Vec<SchemaAuthor>,
}

/// Author entry of the JSON-LD document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaAuthor {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

impl ArticleSchema {
    /// Build the document for an article, resolving images against `origin`.
    pub fn from_article(article: &BlogArticle, origin: &str) -> Self {
        let author = article
            .author()
            .map(|a| SchemaAuthor {
                kind: "Person",
                name: a.name.clone(),
            })
            .into_iter()
            .collect();

        Self {
            context: "https://schema.org",
            kind: "NewsArticle",
            headline: article.title.clone(),
            image: article.image_url(origin).into_iter().collect(),
            date_published: article.published().to_rfc3339(),
            date_modified: article.modified().to_rfc3339(),
            author,
        }
    }

    /// Serialized script body.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::cms::{AuthorAttributes, MediaAttributes, Relation, RelationList, StrapiEntity};

    fn article() -> BlogArticle {
        BlogArticle {
            title: "Bridging 101".to_string(),
            subtitle: String::new(),
            slug: "bridging-101".to_string(),
            content: Vec::new(),
            image: Relation {
                data: Some(StrapiEntity {
                    id: 1,
                    attributes: MediaAttributes {
                        url: "/uploads/hero.png".to_string(),
                        alternative_text: None,
                    },
                }),
            },
            author: Relation {
                data: Some(StrapiEntity {
                    id: 2,
                    attributes: AuthorAttributes {
                        name: "Ada".to_string(),
                        ..AuthorAttributes::default()
                    },
                }),
            },
            tags: RelationList::default(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 3, 10, 0, 0).unwrap(),
            updated_at: None,
            published_at: Some(Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_schema_fields() {
        let schema = ArticleSchema::from_article(&article(), "https://cms.example.com");
        assert_eq!(schema.headline, "Bridging 101");
        assert_eq!(schema.image, vec!["https://cms.example.com/uploads/hero.png"]);
        assert!(schema.date_published.starts_with("2024-01-05"));
        // No update: modified falls back to creation.
        assert!(schema.date_modified.starts_with("2024-01-03"));
        assert_eq!(schema.author[0].name, "Ada");
    }

    #[test]
    fn test_schema_json() {
        let json = ArticleSchema::from_article(&article(), "https://cms.example.com")
            .to_json()
            .expect("serialize");
        assert!(json.contains("\"@context\":\"https://schema.org\""));
        assert!(json.contains("\"@type\":\"NewsArticle\""));
        assert!(json.contains("\"datePublished\""));
    }
}
