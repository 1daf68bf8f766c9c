//! Routed pages.

use std::sync::Arc;

use folio_core::{Post, PostKind};
use folio_ui::{Button, ButtonSize, PostLink, WorkPost, use_default_theme, use_page_theme};
use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use crate::site::Site;

pub fn use_site() -> Arc<Site> {
    expect_context::<Arc<Site>>()
}

fn post_card(post: &Post, label: &'static str) -> impl IntoView + use<> {
    let date = post.frontmatter.display_date();
    view! {
      <div class="post-card">
        <h2 class="title h2">{post.title().to_string()}</h2>
        <p>{date}</p>
        <Button href=post.slug.clone() size=ButtonSize::Tiny>
          {label}
          " "
          <span>"→"</span>
        </Button>
      </div>
    }
}

/// List of work posts; also the home page.
#[component]
pub fn WorkIndex() -> impl IntoView {
    use_page_theme(None);
    let site = use_site();
    let description = site.config.site.description.clone().unwrap_or_default();
    let cards = site
        .content
        .work()
        .iter()
        .map(|post| post_card(post, "View Work"))
        .collect_view();

    view! {
      <Title text=site.config.site.title.clone() />
      <Meta name="description" content=description />
      <div class="index-title centered-title container">
        <h1 class="title">"Work"</h1>
      </div>
      <div class="work-index-container">{cards}</div>
    }
}

#[component]
pub fn WorkPostPage() -> impl IntoView {
    let params = use_params_map();
    let site = use_site();

    move || {
        let slug = params.read().get("slug").unwrap_or_default();
        let path = format!("/work/{slug}");
        match site.content.find(&path) {
            Some(post) if post.kind == PostKind::Work => {
                let (previous, next) = site.content.neighbors(&path);
                view! {
                  <WorkPost
                    post=post.clone()
                    previous=previous.map(PostLink::from)
                    next=next.map(PostLink::from)
                    site_title=site.config.site.title.clone()
                    dock=site.config.dock.clone()
                  />
                }
                .into_any()
            }
            _ => view! { <NotFound /> }.into_any(),
        }
    }
}

/// Published notes. Always shows the default palette.
#[component]
pub fn NotesIndex() -> impl IntoView {
    use_default_theme();
    let site = use_site();
    let description = site.config.site.description.clone().unwrap_or_default();
    let cards = site
        .content
        .notes()
        .map(|post| post_card(post, "View Note"))
        .collect_view();

    view! {
      <Title text=site.config.page_title("Notes") />
      <Meta name="description" content=description />
      <div class="index-title centered-title preload container">
        <h1 class="title">"Notes"</h1>
      </div>
      <div class="note-index-container">{cards}</div>
    }
}

#[component]
pub fn NotePage() -> impl IntoView {
    let params = use_params_map();
    let site = use_site();

    move || {
        let slug = params.read().get("slug").unwrap_or_default();
        match site.content.find(&format!("/notes/{slug}")) {
            Some(post) if post.kind == PostKind::Note && post.frontmatter.publish => {
                view! { <NoteArticle post=post.clone() site_title=site.config.site.title.clone() /> }
                    .into_any()
            }
            _ => view! { <NotFound /> }.into_any(),
        }
    }
}

#[component]
fn NoteArticle(post: Post, site_title: String) -> impl IntoView {
    use_page_theme(None);
    let date = post.frontmatter.display_date();

    view! {
      <Title text=format!("{} - {site_title}", post.frontmatter.title) />
      <Meta name="description" content=post.excerpt />
      <div class="note-title centered-title container">
        <h1>{post.frontmatter.title}</h1>
      </div>
      <div class="note-container container">
        <h5>{date}</h5>
        <div inner_html=post.html></div>
      </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    use_page_theme(None);
    let site = use_site();
    let host = site.host().to_string();
    let search = format!("https://www.google.com/search?q=site%3A{host}");

    view! {
      <Title text="⚠ Page Not Found" />
      <div class="error-page bs-wrapper">
        <div class="bs-content">
          <h1>"The page cannot be found"</h1>
          <p>
            "The page you are looking for might have been removed, had its name changed, or is temporarily unavailable."
          </p>
          <hr />
          <p>"Please try the following:"</p>
          <ul>
            <li>
              "If you typed the page address in the Address bar, make sure that it is spelled correctly."
            </li>
            <li>
              "Open the " <a href="/">{host}</a>
              " home page, and then look for links to the information you want."
            </li>
            <li>
              "Click the " <a href="javascript:window.history.back()">"Back"</a>
              " button to try another link."
            </li>
            <li>
              "Click " <a href=search target="_blank" rel="noopener noreferrer">
                "Search"
              </a> " to look for information on the Internet."
            </li>
          </ul>
          <p>"HTTP 404 - File not found"</p>
        </div>
      </div>
    }
}
