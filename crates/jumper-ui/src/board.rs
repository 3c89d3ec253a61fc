//! Paged grid of blog articles.

use jumper_core::{StrapiResponse, cms::BlogArticle as BlogArticleData};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::{cms::fetch_articles, context::use_site, pagination::BlogArticlesBoardPagination};

/// Articles board with tag filter and pagination.
#[component]
pub fn BlogArticlesBoard(
    /// Tag to filter by; `None` shows every article.
    #[prop(into, default = Signal::stored(None))]
    tag_id: Signal<Option<u64>>,
) -> impl IntoView {
    let site = use_site();
    let origin = site.cms_origin().to_string();
    let page_size = site.config.board.page_size;
    let page = RwSignal::new(1u32);

    // A new filter starts from the first page.
    Effect::new(move |previous: Option<Option<u64>>| {
        let tag = tag_id.get();
        if previous.is_some_and(|p| p != tag) {
            page.set(1);
        }
        tag
    });

    let articles = LocalResource::new({
        let cms = site.config.cms.clone();
        move || {
            let cms = cms.clone();
            let page = page.get();
            let tag = tag_id.get();
            async move { fetch_articles(&cms, page, page_size, tag).await }
        }
    });

    let loaded = Memo::new(move |_| match articles.get() {
        Some(Ok(response)) => Some(response),
        Some(Err(err)) => {
            log::warn!("failed to load articles page: {err}");
            None
        }
        None => None,
    });

    let is_success = Signal::derive(move || loaded.with(Option::is_some));
    let is_empty = Signal::derive(move || {
        loaded.with(|r| r.as_ref().is_some_and(StrapiResponse::is_empty))
    });
    let page_count = Signal::derive(move || {
        loaded.with(|r| r.as_ref().map_or(0, |r| r.meta.pagination.page_count))
    });

    view! {
      <section class="jumper-board">
        <div class="jumper-board-grid">
          <For
            each=move || loaded.get().map(|r| r.data).unwrap_or_default()
            key=|entity| entity.id
            children=move |entity| {
              view! { <ArticleCard article=entity.attributes origin=origin.clone() /> }
            }
          />
        </div>
        <BlogArticlesBoardPagination
          is_success=is_success
          is_empty=is_empty
          page=page
          page_count=page_count
          tag_id=tag_id
        />
      </section>
    }
}

/// Preview card linking to an article.
#[component]
pub fn ArticleCard(
    /// Article to preview.
    article: BlogArticleData,
    /// Origin used to resolve the preview image.
    #[prop(into)]
    origin: String,
) -> impl IntoView {
    let image = article.image_url(&origin);
    let alt = article.image_alt();
    let tags = article.tag_titles();

    view! {
      <A href=article.path() attr:class="jumper-article-card">
        {image.map(|src| view! { <img class="jumper-article-card-image" src=src alt=alt /> })}
        <div class="jumper-article-card-tags">
          {tags.into_iter().map(|tag| view! { <span class="jumper-tag">{tag}</span> }).collect_view()}
        </div>
        <h3 class="jumper-article-card-title">{article.title.clone()}</h3>
        <div class="jumper-article-card-meta">
          <span class="jumper-article-date">{article.display_date()}</span>
          <span class="jumper-article-reading-time">{article.reading_time()} " min read"</span>
        </div>
      </A>
    }
}
