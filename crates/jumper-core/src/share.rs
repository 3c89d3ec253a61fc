//! Social share links for articles.

use url::Url;

use crate::error::Result;

const X_SHARE_URL: &str = "https://x.com/intent/tweet";
const FB_SHARE_URL: &str = "https://www.facebook.com/sharer/sharer.php";
const LINKEDIN_SHARE_URL: &str = "https://www.linkedin.com/shareArticle";

/// Where an article is shared to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareTarget {
    X,
    Facebook,
    LinkedIn,
    /// Copy the link to the clipboard.
    Link,
}

impl ShareTarget {
    /// All targets in the order the share bar shows them.
    pub const ALL: [ShareTarget; 4] = [Self::LinkedIn, Self::Facebook, Self::X, Self::Link];

    /// Identifier used in tracking labels and CSS classes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Facebook => "facebook",
            Self::LinkedIn => "linkedin",
            Self::Link => "link",
        }
    }

    /// Tooltip text.
    pub fn title(self) -> &'static str {
        match self {
            Self::X => "Share article on X",
            Self::Facebook => "Share article on Facebook",
            Self::LinkedIn => "Share article on LinkedIn",
            Self::Link => "Share the link",
        }
    }

    /// URL to open for this target.
    ///
    /// For [`ShareTarget::Link`] this is the page URL itself, which the caller
    /// copies instead of opening.
    pub fn share_url(self, page_url: &str, title: &str) -> Result<String> {
        let (base, params): (&str, Vec<(&str, &str)>) = match self {
            Self::X => (X_SHARE_URL, vec![("url", page_url), ("title", title)]),
            Self::Facebook => (FB_SHARE_URL, vec![("u", page_url), ("title", title)]),
            Self::LinkedIn => (
                LINKEDIN_SHARE_URL,
                vec![("mini", "true"), ("url", page_url), ("title", title)],
            ),
            Self::Link => return Ok(page_url.to_string()),
        };

        let url = Url::parse_with_params(base, params)?;
        Ok(url.into())
    }
}
