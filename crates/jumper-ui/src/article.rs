//! Article component for rendering a blog post.
//!
//! Renders CMS rich-text blocks, the share bar, the author footer and the
//! schema.org JSON-LD for the article.

use jumper_core::{
    ArticleSchema, ShareTarget, TrackingEvent,
    blocks::{Block, InlineNode, ListFormat},
    cms::BlogArticle as BlogArticleData,
};
use leptos::prelude::*;

use crate::{context::use_site, dom};

/// Full blog article, or a skeleton until one with a title is available.
#[component]
pub fn BlogArticle(
    /// The article to render.
    article: Signal<Option<BlogArticleData>>,
) -> impl IntoView {
    let site = use_site();

    move || {
        let Some(data) = article.get().filter(|a| !a.title.is_empty()) else {
            return view! { <div class="jumper-skeleton jumper-skeleton-article"></div> }.into_any();
        };

        let origin = site.cms_origin().to_string();
        let page_url = site.config.url_for(&data.path());
        let image = data.image_url(&origin);
        let avatar = data.avatar_url(&origin);
        let author = data.author().cloned().unwrap_or_default();
        let schema = ArticleSchema::from_article(&data, &origin)
            .to_json()
            .map_err(|e| log::warn!("failed to serialize article schema: {e}"))
            .ok();

        view! {
          <article class="jumper-article">
            <ArticleMeta date=data.display_date() reading_time=data.reading_time() tags=data.tag_titles() />
            <h1 class="jumper-article-title">{data.title.clone()}</h1>

            <div class="jumper-article-byline">
              <div class="jumper-article-author">
                {avatar.clone().map(|src| view! { <img class="jumper-avatar" src=src alt="author-avatar" /> })}
                <span class="jumper-article-author-name">{author.name.clone()}</span>
              </div>
              <ShareBar page_url=page_url title=data.title.clone() slug=data.slug.clone() />
            </div>

            {image.map(|src| view! { <img class="jumper-article-image" src=src alt=data.image_alt() /> })}

            <div class="jumper-article-content">
              <h2 class="jumper-article-subtitle">{data.subtitle.clone()}</h2>
              <BlocksRenderer blocks=data.content.clone() origin=origin.clone() />
              <hr class="jumper-divider" />
              <div class="jumper-article-author-card">
                {avatar.map(|src| view! { <img class="jumper-avatar" src=src alt="author-avatar" /> })}
                <div class="jumper-article-author-details">
                  <span class="jumper-article-author-name">{author.name}</span>
                  <span class="jumper-article-author-role">{author.role.unwrap_or_default()}</span>
                </div>
              </div>
            </div>

            {schema.map(|json| view! { <script type="application/ld+json" inner_html=json></script> })}
          </article>
        }
        .into_any()
    }
}

/// Article metadata: date, reading time and tags.
#[component]
pub fn ArticleMeta(
    /// Publication date.
    date: String,
    /// Reading time in minutes.
    reading_time: u32,
    /// Tags.
    #[prop(default = vec![])]
    tags: Vec<String>,
) -> impl IntoView {
    let has_tags = !tags.is_empty();
    let tags_list = StoredValue::new(tags);

    view! {
      <div class="jumper-article-meta">
        <time class="jumper-article-date">{date}</time>
        <span class="jumper-article-reading-time">{reading_time} " min read"</span>

        <Show when=move || has_tags>
          <div class="jumper-article-tags">
            <For
              each=move || tags_list.get_value()
              key=|tag| tag.clone()
              children=move |tag| {
                view! { <span class="jumper-tag">{tag}</span> }
              }
            />

          </div>
        </Show>
      </div>
    }
}

/// Share buttons for the current article.
#[component]
fn ShareBar(page_url: String, title: String, slug: String) -> impl IntoView {
    let site = use_site();

    ShareTarget::ALL
        .into_iter()
        .map(|target| {
            let site = site.clone();
            let page_url = page_url.clone();
            let title = title.clone();
            let slug = slug.clone();
            let on_click = move |_| {
                site.track(TrackingEvent::share(target, &slug));
                match target.share_url(&page_url, &title) {
                    Ok(url) if target == ShareTarget::Link => {
                        if let Err(err) = dom::copy_to_clipboard(&url) {
                            log::warn!("failed to copy link: {err:?}");
                        }
                    }
                    Ok(url) => dom::open_in_new_tab(&url),
                    Err(err) => log::warn!("failed to build share link: {err}"),
                }
            };
            let class = format!("jumper-share-button jumper-share-{}", target.as_str());

            view! {
              <button class=class title=target.title() aria-label=target.title() on:click=on_click>
                <span class="jumper-share-icon"></span>
              </button>
            }
        })
        .collect_view()
}

/// Promotional banner placed where the article body asks for it.
#[component]
pub fn JumperBanner() -> impl IntoView {
    view! {
      <aside class="jumper-banner">
        <p class="jumper-banner-text">"Swap and bridge across chains with Jumper."</p>
        <a class="jumper-button jumper-button-primary" href="/">
          "Launch app"
        </a>
      </aside>
    }
}

/// Render CMS rich-text blocks.
#[component]
pub fn BlocksRenderer(
    /// Blocks in document order.
    blocks: Vec<Block>,
    /// Origin used to resolve embedded upload URLs.
    #[prop(into)]
    origin: String,
) -> impl IntoView {
    blocks
        .into_iter()
        .map(|block| render_block(block, &origin))
        .collect_view()
}

fn render_block(block: Block, origin: &str) -> AnyView {
    if block.is_banner() {
        return view! { <JumperBanner /> }.into_any();
    }

    match block {
        Block::Paragraph { children } => {
            view! { <p class="jumper-paragraph">{render_inlines(children)}</p> }.into_any()
        }
        Block::Heading { level, children } => {
            let content = render_inlines(children);
            match level {
                1 => view! { <h1>{content}</h1> }.into_any(),
                2 => view! { <h2>{content}</h2> }.into_any(),
                3 => view! { <h3>{content}</h3> }.into_any(),
                4 => view! { <h4>{content}</h4> }.into_any(),
                5 => view! { <h5>{content}</h5> }.into_any(),
                _ => view! { <h6>{content}</h6> }.into_any(),
            }
        }
        Block::List { format, children } => {
            let items = children
                .into_iter()
                .map(|item| view! { <li>{render_inlines(item.children)}</li> })
                .collect_view();
            match format {
                ListFormat::Ordered => view! { <ol>{items}</ol> }.into_any(),
                ListFormat::Unordered => view! { <ul>{items}</ul> }.into_any(),
            }
        }
        Block::Quote { children } => {
            view! { <blockquote>{render_inlines(children)}</blockquote> }.into_any()
        }
        Block::Code { children } => {
            view! { <pre><code>{render_inlines(children)}</code></pre> }.into_any()
        }
        Block::Image { image } => {
            let src = jumper_core::cms::media_url(origin, &image.url);
            view! { <img class="jumper-content-image" src=src alt=image.alternative_text.unwrap_or_default() /> }
                .into_any()
        }
        Block::Unknown => ().into_any(),
    }
}

fn render_inlines(nodes: Vec<InlineNode>) -> Vec<AnyView> {
    nodes.into_iter().map(render_inline).collect()
}

fn render_inline(node: InlineNode) -> AnyView {
    match node {
        InlineNode::Text {
            text,
            bold,
            italic,
            underline,
            strikethrough,
            code,
        } => {
            let mut view = text.into_any();
            if code {
                view = view! { <code>{view}</code> }.into_any();
            }
            if bold {
                view = view! { <strong>{view}</strong> }.into_any();
            }
            if italic {
                view = view! { <em>{view}</em> }.into_any();
            }
            if underline {
                view = view! { <u>{view}</u> }.into_any();
            }
            if strikethrough {
                view = view! { <s>{view}</s> }.into_any();
            }
            view
        }
        InlineNode::Link { url, children } => view! {
          <a href=url target="_blank" rel="noopener noreferrer">
            {render_inlines(children)}
          </a>
        }
        .into_any(),
    }
}
