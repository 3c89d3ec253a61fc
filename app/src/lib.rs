use jumper_core::Config;
use jumper_ui::{
    BlogArticle, BlogArticlesBoard, BlogHighlights, Navbar, SiteContext, fetch_article,
    provide_site, use_site,
};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_params_map, use_query_map},
};

#[component]
pub fn App(
    /// Site configuration.
    config: Config,
) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let title = config.site.title.clone();
    provide_site(SiteContext::with_log_tracker(config));

    view! {
      // sets the document title
      <Title text=title />

      <Router>
        <Navbar />
        <main>
          <Routes fallback=|| view! { <NotFound /> }>
            <Route path=StaticSegment("") view=BlogPage />
            <Route path=StaticSegment("blog") view=BlogPage />
            <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=ArticlePage />
          </Routes>
        </main>
      </Router>
    }
}

/// Parse the `?tag=` filter of the blog page.
fn parse_tag(value: Option<String>) -> Option<u64> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Highlights carousel above the paged articles board.
#[component]
fn BlogPage() -> impl IntoView {
    let query = use_query_map();
    let tag_id = Signal::derive(move || parse_tag(query.with(|q| q.get("tag"))));

    view! {
      <BlogHighlights />
      <BlogArticlesBoard tag_id=tag_id />
    }
}

/// A single article, looked up by slug.
#[component]
fn ArticlePage() -> impl IntoView {
    let site = use_site();
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").unwrap_or_default());

    let article = LocalResource::new({
        let cms = site.config.cms.clone();
        move || {
            let cms = cms.clone();
            let slug = slug();
            async move { fetch_article(&cms, &slug).await }
        }
    });

    let data = Signal::derive(move || match article.get() {
        Some(Ok(article)) => article,
        Some(Err(err)) => {
            log::warn!("failed to load article: {err}");
            None
        }
        None => None,
    });

    view! { <BlogArticle article=data /> }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <p class="jumper-not-found">"Page not found."</p> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag() {
        assert_eq!(parse_tag(Some("4".to_string())), Some(4));
        assert_eq!(parse_tag(Some(" 12 ".to_string())), Some(12));
        assert_eq!(parse_tag(Some("bridges".to_string())), None);
        assert_eq!(parse_tag(None), None);
    }
}
