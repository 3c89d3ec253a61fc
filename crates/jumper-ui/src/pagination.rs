//! Pagination controls for the articles board.

use jumper_core::{Direction, PageWindow, TrackingEvent, pagination::SKELETON_PAGES};
use leptos::prelude::*;

use crate::context::use_site;

/// Prev/next arrows with numbered page buttons.
///
/// Shows placeholder dots until the page has loaded and nothing when the
/// loaded page is empty.
#[component]
pub fn BlogArticlesBoardPagination(
    /// Whether the current page loaded successfully.
    #[prop(into)]
    is_success: Signal<bool>,
    /// Whether the loaded page has no articles.
    #[prop(into)]
    is_empty: Signal<bool>,
    /// Current 1-based page.
    page: RwSignal<u32>,
    /// Number of pages reported by the CMS.
    #[prop(into)]
    page_count: Signal<u32>,
    /// Active tag filter, reported with pagination events.
    #[prop(into, default = Signal::stored(None))]
    tag_id: Signal<Option<u64>>,
) -> impl IntoView {
    let site = use_site();
    let window = move || PageWindow::new(page.get(), page_count.get());

    let go = move |direction: Option<Direction>, target: Option<u32>| {
        let next = match (direction, target) {
            (Some(direction), _) => {
                PageWindow::new(page.get_untracked(), page_count.get_untracked()).step(direction)
            }
            (None, target) => target,
        };
        if let Some(next) = next {
            site.track(TrackingEvent::board_pagination(
                direction,
                next,
                tag_id.get_untracked(),
            ));
            page.set(next);
        }
    };

    move || {
        if !is_success.get() {
            return view! {
              <nav class="jumper-pagination">
                {(0..SKELETON_PAGES)
                  .map(|_| view! { <span class="jumper-skeleton jumper-skeleton-circle"></span> })
                  .collect_view()}
              </nav>
            }
            .into_any();
        }
        if is_empty.get() {
            return ().into_any();
        }

        let go = go.clone();
        let prev = {
            let go = go.clone();
            move |_| go(Some(Direction::Previous), None)
        };
        let next = {
            let go = go.clone();
            move |_| go(Some(Direction::Next), None)
        };

        view! {
          <nav class="jumper-pagination" aria-label="Pagination">
            <button
              class="jumper-pagination-arrow"
              class:muted=move || window().prev_muted()
              aria-label="Previous page"
              on:click=prev
            >
              "←"
            </button>
            <For
              each=move || window().links()
              key=|link| *link
              children=move |link| {
                let go = go.clone();
                view! {
                  <button
                    class="jumper-pagination-index"
                    class:active=link.active
                    aria-current=link.active.then_some("page")
                    on:click=move |_| go(None, Some(link.page))
                  >
                    {link.page}
                  </button>
                }
              }
            />
            <button
              class="jumper-pagination-arrow"
              class:muted=move || window().next_muted()
              aria-label="Next page"
              on:click=next
            >
              "→"
            </button>
          </nav>
        }
        .into_any()
    }
}
