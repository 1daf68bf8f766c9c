//! Folio UI Components
//!
//! Leptos components for the Folio portfolio site, and the browser bindings
//! that connect `folio-core`'s theme and docking logic to the DOM.
//!
//! # Components
//!
//! - [`WorkPost`] - Work case study with per-post theme and docked title
//! - [`Header`] - Logo and main navigation
//! - [`PostPager`] - Previous/next post links
//! - [`Button`] - Link styled as a button
//!
//! # Lifecycle hooks
//!
//! - [`use_page_session`] - Theme + title docking for the current component
//! - [`use_page_theme`] - Theme only, for pages without a docked title
//! - [`use_default_theme`] - Default palette regardless of the navigation policy
//!
//! # Example
//!
//! ```ignore
//! use folio_core::Config;
//! use folio_ui::{WorkPost, provide_theme_context};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Page(config: Config, post: folio_core::Post) -> impl IntoView {
//!     provide_theme_context(&config.theme);
//!
//!     view! { <WorkPost post=post site_title=config.site.title dock=config.dock /> }
//! }
//! ```

pub mod button;
pub mod dom;
pub mod navigation;
pub mod scroll;
pub mod theme;
pub mod work_post;

pub use button::{Button, ButtonSize, IconSide};
pub use dom::{BrowserClock, DocumentTheme, DomDockSurface};
pub use navigation::{Header, NavItem, PostLink, PostPager};
pub use scroll::{ScrollListener, use_page_session};
pub use theme::{
    ThemeContext, provide_theme_context, use_default_theme, use_page_theme, use_theme_context,
};
pub use work_post::WorkPost;
