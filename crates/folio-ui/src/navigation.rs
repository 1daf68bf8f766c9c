//! Site header and post-to-post navigation.

use folio_core::Post;
use leptos::prelude::*;

use crate::button::{Button, ButtonSize, IconSide};

/// A navigation item.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    /// Display label.
    pub label: String,

    /// Link URL.
    pub url: String,
}

impl NavItem {
    /// Create a new navigation item.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Whether `url` is the current page or one of its descendants.
fn is_active(current: &str, url: &str) -> bool {
    if url.contains(':') {
        return false;
    }
    let current = current.trim_end_matches('/');
    let url = url.trim_end_matches('/');
    current == url || current.starts_with(&format!("{url}/"))
}

/// Splits a name into initial/rest pairs: `"Jeff Wolff"` becomes
/// `[("J", "eff "), ("W", "olff")]`. The rest is collapsed on small screens.
fn logo_parts(name: &str) -> Vec<(String, String)> {
    let words: Vec<_> = name.split_whitespace().collect();
    let last = words.len().saturating_sub(1);
    words
        .iter()
        .enumerate()
        .filter_map(|(i, word)| {
            let mut chars = word.chars();
            let initial = chars.next()?.to_string();
            let mut rest: String = chars.collect();
            if i < last {
                rest.push(' ');
            }
            Some((initial, rest))
        })
        .collect()
}

/// Site header with logo and main navigation.
#[component]
pub fn Header(
    /// Name shown as the logo.
    #[prop(into)]
    name: String,
    /// Navigation items.
    items: Vec<NavItem>,
    /// Current path for active highlighting.
    #[prop(default = "/".to_string().into())]
    current_path: Signal<String>,
) -> impl IntoView {
    let logo = logo_parts(&name)
        .into_iter()
        .map(|(initial, rest)| view! { {initial}<span>{rest}</span> })
        .collect_view();

    view! {
      <div class="header">
        <a href="/" class="logo">
          {logo}
        </a>
        <ul class="navigation">
          {items
            .into_iter()
            .map(|item| {
              let url = item.url.clone();
              let active = Memo::new(move |_| is_active(&current_path.get(), &url));
              view! {
                <li class:active=active>
                  <a
                    href=item.url.clone()
                    aria-current=move || { if active.get() { Some("page") } else { None } }
                  >
                    {item.label.clone()}
                  </a>
                </li>
              }
            })
            .collect_view()}
        </ul>
      </div>
    }
}

/// Title and URL of a neighboring post.
#[derive(Debug, Clone, PartialEq)]
pub struct PostLink {
    pub title: String,
    pub url: String,
}

impl From<&Post> for PostLink {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title().to_string(),
            url: post.slug.clone(),
        }
    }
}

/// Links to the previous (older) and next (newer) post.
#[component]
pub fn PostPager(
    #[prop(default = None)] previous: Option<PostLink>,
    #[prop(default = None)] next: Option<PostLink>,
) -> impl IntoView {
    view! {
      <ul class="post-pager">
        <li>
          {previous
            .map(|link| {
              view! {
                <Button href=link.url size=ButtonSize::Tiny icon=IconSide::Left rel="prev">
                  <span>"↑"</span>
                  " "
                  {link.title}
                </Button>
              }
            })}
        </li>
        <li>
          {next
            .map(|link| {
              view! {
                <Button href=link.url size=ButtonSize::Tiny icon=IconSide::Right rel="next">
                  {link.title}
                  " "
                  <span>"↓"</span>
                </Button>
              }
            })}
        </li>
      </ul>
    }
}
