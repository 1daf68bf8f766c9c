//! Site configuration and content embedded at compile time.

use folio_core::{Config, Result, SiteContent};
use folio_ui::NavItem;

const SITE_TOML: &str = include_str!("../site.toml");

const SOURCES: [(&str, &str); 5] = [
    ("work/harbor.md", include_str!("../content/work/harbor.md")),
    ("work/saltbox.md", include_str!("../content/work/saltbox.md")),
    ("work/lumen.md", include_str!("../content/work/lumen.md")),
    ("notes/grids.md", include_str!("../content/notes/grids.md")),
    ("notes/drafting.md", include_str!("../content/notes/drafting.md")),
];

/// Everything the pages render from.
#[derive(Debug)]
pub struct Site {
    pub config: Config,
    pub content: SiteContent,
}

impl Site {
    /// Load the embedded configuration and content.
    pub fn load() -> Result<Self> {
        Self::from_parts(SITE_TOML, SOURCES)
    }

    pub fn from_parts<'a>(
        config: &str,
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self> {
        Ok(Self {
            config: Config::from_toml_str(config)?,
            content: SiteContent::from_sources(sources)?,
        })
    }

    /// Name shown as the header logo.
    pub fn logo_name(&self) -> &str {
        self.config
            .site
            .author
            .as_deref()
            .unwrap_or(&self.config.site.title)
    }

    /// Host part of the site URL, e.g. `jeffwolff.net`.
    pub fn host(&self) -> &str {
        let url = &self.config.site.site_url;
        let without_scheme = url.split_once("://").map_or(url.as_str(), |(_, rest)| rest);
        without_scheme.trim_end_matches('/')
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        let mut items = vec![NavItem::new("Work", "/work"), NavItem::new("Notes", "/notes")];
        if let Some(email) = &self.config.site.contact_email {
            items.push(NavItem::new("Contact", format!("mailto:{email}")));
        }
        items
    }
}
