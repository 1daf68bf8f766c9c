//! Work post page: cover video, docked title, body and pager.

use folio_core::{Post, config::DockConfig};
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::{
    button::{Button, IconSide},
    navigation::{PostLink, PostPager},
    scroll::use_page_session,
};

/// Markup for an autoplaying, muted, looping cover video.
///
/// Written as raw HTML so `muted` lands as an attribute, which browsers
/// require before they autoplay.
fn cover_video_html(src: &str) -> String {
    let src = src.replace('&', "&amp;").replace('"', "&quot;");
    format!(
        r#"<video autoplay muted loop playsinline class="vid-wrap"><source src="{src}" type="video/mp4"></video>"#
    )
}

/// Document title of a work post.
fn document_title(post_title: &str, site_title: &str) -> String {
    format!("{post_title} Website - {site_title}")
}

/// A work case study.
///
/// Mounting applies the post's theme and starts docking the title to the
/// viewport; unmounting stops the docking.
#[component]
pub fn WorkPost(
    post: Post,
    #[prop(default = None)] previous: Option<PostLink>,
    #[prop(default = None)] next: Option<PostLink>,
    /// Site title appended to the document title.
    #[prop(into)]
    site_title: String,
    dock: DockConfig,
) -> impl IntoView {
    use_page_session(Some(post.theme_record()), dock);

    let fm = post.frontmatter;
    let title = document_title(&fm.title, &site_title);
    let date = fm.display_date();
    let cover = fm
        .featured_video
        .as_deref()
        .map(|src| view! { <div class="vid-cover" inner_html=cover_video_html(src)></div> });
    let website = fm.url.map(|url| {
        let href = format!("https://{url}");
        view! {
          <div class="work-post-website-btn">
            <Button href=href external=true icon=IconSide::Right>
              {url}
              " "
              <span>"↗"</span>
            </Button>
          </div>
        }
    });
    let team = fm
        .team
        .map(|team| view! { <p class="work-post-team">{team}</p> });

    view! {
      <Title text=title />
      <Meta name="description" content=post.excerpt />
      <div class="work-post-wrapper">
        {cover}
        <div class="work-post-title centered-title">
          <h1>{fm.title}</h1>
        </div>
        {website}
        <div class="work-post-container container">
          <h5>{date}</h5>
          {team}
          <div inner_html=post.html></div>
          <PostPager previous=previous next=next />
        </div>
      </div>
    }
}
