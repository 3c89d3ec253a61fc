//! Site navigation bar.

use jumper_core::config::NavLink;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

use crate::context::use_site;

/// Whether `url` is the current page or one of its ancestors.
///
/// The root path only matches itself.
pub fn is_active_path(current: &str, url: &str) -> bool {
    if url == "/" {
        return current == "/";
    }
    let url = url.trim_end_matches('/');
    current == url || current.starts_with(&format!("{url}/"))
}

/// Navigation bar with logo, tabs and an action slot.
#[component]
pub fn Navbar(
    /// Hide the navigation tabs, e.g. on focused landing pages.
    #[prop(optional)]
    hide_tabs: bool,
    /// Called when the logo is clicked.
    #[prop(optional, into)]
    on_logo_click: Option<Callback<()>>,
    /// Buttons rendered at the end of the bar.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let site = use_site();
    let title = site.config.site.title.clone();
    let tabs = site.config.site.nav.clone();

    view! {
      <header class="jumper-navbar">
        <A href="/" attr:class="jumper-navbar-logo">
          <span
            class="jumper-logo"
            aria-label=title.clone()
            on:click=move |_| {
              if let Some(callback) = on_logo_click.as_ref() {
                callback.run(());
              }
            }
          >
            {title.clone()}
          </span>
        </A>
        {(!hide_tabs).then(|| view! { <NavbarTabs tabs=tabs /> })}
        <div class="jumper-navbar-buttons">{children.map(|children| children())}</div>
      </header>
    }
}

/// Tab list with active highlighting.
#[component]
fn NavbarTabs(tabs: Vec<NavLink>) -> impl IntoView {
    let location = use_location();

    view! {
      <nav class="jumper-navbar-tabs" aria-label="Main navigation">
        <ul class="jumper-navbar-tab-list">
          <For
            each=move || tabs.clone()
            key=|tab| tab.path.clone()
            children=move |tab| {
              let path = tab.path.clone();
              let is_active = Memo::new(move |_| is_active_path(&location.pathname.get(), &path));
              view! {
                <li class="jumper-navbar-tab" class:active=is_active>
                  <A
                    href=tab.path.clone()
                    attr:class="jumper-navbar-link"
                    attr:aria-current=move || is_active.get().then_some("page")
                  >
                    {tab.label.clone()}
                  </A>
                </li>
              }
            }
          />
        </ul>
      </nav>
    }
}
