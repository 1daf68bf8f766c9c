//! Folio Core Library
//!
//! Page-level state for the Folio portfolio site: per-page themes, the
//! scroll-docked work title, configuration and the content index.
//!
//! Nothing in this crate touches the DOM. Browser access goes through the
//! [`theme::ThemeTarget`] and [`dock::DockSurface`] traits, which `folio-ui`
//! implements with `web-sys`.

pub mod config;
pub mod content;
pub mod dock;
pub mod error;
pub mod frontmatter;
pub mod session;
pub mod theme;
pub mod throttle;

pub use config::Config;
pub use content::{Post, PostKind, SiteContent};
pub use dock::{DockState, DockStyle, DockSurface, ScrollDocker, ScrollSample};
pub use error::{CoreError, Result};
pub use frontmatter::Frontmatter;
pub use session::PageSession;
pub use theme::{Palette, ThemeApplier, ThemePolicy, ThemeRecord, ThemeState, ThemeTarget, ThemeVar};
pub use throttle::{Clock, ManualClock, RateLimiter};
