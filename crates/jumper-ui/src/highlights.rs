//! Blog highlights carousel.
//!
//! Shows the newest articles one card at a time. Cards change on swipe, on
//! the arrow keys and on the pagination dots; Enter opens the active article.

use jumper_core::{HighlightsController, KeyOutcome, TrackingEvent, cms::article_path};
use leptos::{ev, prelude::*};
use leptos_router::hooks::use_navigate;

use crate::{cms::fetch_articles, context::use_site, dom};

/// Placeholder dots shown while highlights load.
const SKELETON_DOTS: usize = 5;

/// Inline style for a card with an optional opacity override.
pub fn card_style(opacity: Option<f64>) -> String {
    opacity
        .map(|o| format!("opacity: {o:.3};"))
        .unwrap_or_default()
}

/// Carousel of the newest blog articles.
#[component]
pub fn BlogHighlights() -> impl IntoView {
    let site = use_site();
    let settings = site.config.highlights.clone();
    let origin = site.cms_origin().to_string();
    let max_items = settings.max_items;

    let articles = LocalResource::new({
        let cms = site.config.cms.clone();
        let limit = u32::try_from(max_items).unwrap_or(u32::MAX);
        move || {
            let cms = cms.clone();
            async move { fetch_articles(&cms, 1, limit, None).await }
        }
    });

    let highlights = Memo::new(move |_| match articles.get() {
        Some(Ok(response)) => response
            .data
            .into_iter()
            .take(max_items)
            .collect::<Vec<_>>(),
        Some(Err(err)) => {
            log::warn!("failed to load blog highlights: {err}");
            Vec::new()
        }
        None => Vec::new(),
    });

    let controller = RwSignal::new(HighlightsController::new(&settings));
    Effect::new(move |_| {
        let count = highlights.with(Vec::len);
        controller.update(|c| c.set_count(count));
    });
    let active = Memo::new(move |_| controller.with(HighlightsController::active_index));

    let navigate = use_navigate();
    let open = {
        let site = site.clone();
        move |index: usize| {
            let slug =
                highlights.with_untracked(|h| h.get(index).map(|e| e.attributes.slug.clone()));
            if let Some(slug) = slug {
                site.track(TrackingEvent::highlight_open(&slug));
                navigate(&article_path(&slug), Default::default());
                dom::scroll_to_top();
            }
        }
    };

    let select = {
        let site = site.clone();
        move |index: usize| {
            if let Some(event) = controller.try_update(|c| c.select(index)).flatten() {
                site.track(event);
            }
        }
    };

    let handle = window_event_listener(ev::keydown, {
        let open = open.clone();
        let site = site.clone();
        move |event| match controller.try_update(|c| c.key(&event.key())).flatten() {
            Some(KeyOutcome::Open(index)) => open(index),
            Some(KeyOutcome::Moved { event, .. }) => site.track(event),
            None => {}
        }
    });
    on_cleanup(move || handle.remove());

    let on_touch_start = move |event: web_sys::TouchEvent| {
        if let Some(x) = dom::touch_x(&event) {
            controller.update(|c| c.touch_start(x));
        }
    };

    let on_touch_move = move |event: web_sys::TouchEvent| {
        if let Some(x) = dom::touch_x(&event) {
            controller.update(|c| c.touch_move(x));
        }
    };

    let on_touch_end = {
        let site = site.clone();
        move |_: web_sys::TouchEvent| {
            if let Some((_, event)) = controller.try_update(HighlightsController::touch_end).flatten()
            {
                site.track(event);
            }
        }
    };

    let on_touch_cancel =
        move |_: web_sys::TouchEvent| controller.update(HighlightsController::touch_cancel);

    let style_for = move |index: usize| card_style(controller.with(|c| c.opacity(index)));

    let open_active = {
        let open = open.clone();
        move |_: web_sys::MouseEvent| {
            if !controller.with_untracked(HighlightsController::is_empty) {
                open(active.get_untracked());
            }
        }
    };

    view! {
      <section
        class="jumper-highlights"
        on:touchstart=on_touch_start
        on:touchmove=on_touch_move
        on:touchend=on_touch_end
        on:touchcancel=on_touch_cancel
      >
        <Show
          when=move || !highlights.with(Vec::is_empty)
          fallback=|| view! { <HighlightsSkeleton /> }
        >
          <For
            each=move || highlights.get().into_iter().enumerate()
            key=|(index, entity)| (*index, entity.id)
            children={
              let origin = origin.clone();
              let open = open.clone();
              move |(index, entity)| {
                let article = entity.attributes;
                let image = article.image_url(&origin).unwrap_or_default();
                let alt = article.image_alt();
                let open = open.clone();
                view! {
                  <article
                    class="jumper-highlights-card"
                    class:active=move || active.get() == index
                    style=move || style_for(index)
                  >
                    <div class="jumper-highlights-content">
                      <h2 class="jumper-highlights-title">{article.title.clone()}</h2>
                      <p class="jumper-highlights-subtitle">{article.subtitle.clone()}</p>
                    </div>
                    <img
                      class="jumper-highlights-image"
                      src=image
                      alt=alt
                      draggable="false"
                      on:click=move |_| {
                        if let Some(index) = controller.try_update(|c| c.tap(index)).flatten() {
                          open(index);
                        }
                      }
                    />
                  </article>
                }
              }
            }
          />
        </Show>

        <div class="jumper-highlights-controls">
          <button class="jumper-button jumper-button-primary" on:click=open_active>
            "Go to article"
          </button>
          <div class="jumper-highlights-dots">
            <Show
              when=move || !highlights.with(Vec::is_empty)
              fallback=|| view! { <DotsSkeleton /> }
            >
              <For
                each=move || 0..highlights.with(Vec::len)
                key=|index| *index
                children={
                  let select = select.clone();
                  move |index| {
                    let select = select.clone();
                    view! {
                      <span
                        class="jumper-dot"
                        class:active=move || active.get() == index
                        data-index=index.to_string()
                        on:click=move |event: web_sys::MouseEvent| {
                          event.prevent_default();
                          event.stop_propagation();
                          select(index);
                        }
                      ></span>
                    }
                  }
                }
              />
            </Show>
          </div>
        </div>
      </section>
    }
}

/// Card placeholder while articles load.
#[component]
fn HighlightsSkeleton() -> impl IntoView {
    view! {
      <article class="jumper-highlights-card jumper-skeleton-card">
        <div class="jumper-highlights-content">
          <div class="jumper-skeleton jumper-skeleton-title"></div>
          <div class="jumper-skeleton jumper-skeleton-subtitle"></div>
        </div>
        <div class="jumper-skeleton jumper-skeleton-image"></div>
      </article>
    }
}

/// Dot placeholders while articles load.
#[component]
fn DotsSkeleton() -> impl IntoView {
    (0..SKELETON_DOTS)
        .map(|_| view! { <span class="jumper-dot jumper-skeleton"></span> })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_style_without_override() {
        assert_eq!(card_style(None), "");
    }

    #[test]
    fn test_card_style_with_opacity() {
        assert_eq!(card_style(Some(0.5)), "opacity: 0.500;");
        assert_eq!(card_style(Some(1.0)), "opacity: 1.000;");
    }
}
