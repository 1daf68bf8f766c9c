//! Routes and pages of the portfolio site.

pub mod pages;
pub mod site;

use std::sync::Arc;

use folio_ui::{Header, provide_theme_context};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::{
    pages::{NotFound, NotePage, NotesIndex, WorkIndex, WorkPostPage, use_site},
    site::Site,
};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let site = match Site::load() {
        Ok(site) => Arc::new(site),
        Err(err) => {
            tracing::error!(%err, "failed to load site");
            return view! {
              <Title text="Site unavailable" />
              <p class="error">"This site could not be loaded."</p>
            }
            .into_any();
        }
    };

    provide_theme_context(&site.config.theme);
    provide_context(site);

    view! {
      <Router>
        <SiteHeader />
        <main>
          <Routes fallback=|| view! { <NotFound /> }>
            <Route path=StaticSegment("") view=WorkIndex />
            <Route path=StaticSegment("work") view=WorkIndex />
            <Route path=(StaticSegment("work"), ParamSegment("slug")) view=WorkPostPage />
            <Route path=StaticSegment("notes") view=NotesIndex />
            <Route path=(StaticSegment("notes"), ParamSegment("slug")) view=NotePage />
          </Routes>
        </main>
      </Router>
    }
    .into_any()
}

#[component]
fn SiteHeader() -> impl IntoView {
    let site = use_site();
    let location = use_location();
    let current_path = Signal::derive(move || location.pathname.get());

    view! { <Header name=site.logo_name().to_string() items=site.nav_items() current_path=current_path /> }
}
