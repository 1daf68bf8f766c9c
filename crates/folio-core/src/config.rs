//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    theme::{Palette, ThemePolicy},
};

/// Main configuration structure for Folio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Theme settings.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Title docking settings.
    #[serde(default)]
    pub dock: DockConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, appended to every document title.
    pub title: String,

    /// Base URL for the site (e.g., "https://example.com").
    pub site_url: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Site author name.
    #[serde(default)]
    pub author: Option<String>,

    /// Address behind the "Contact" navigation link.
    #[serde(default)]
    pub contact_email: Option<String>,
}

/// Theme configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// What a page without its own theme does to the current theme.
    #[serde(default)]
    pub on_navigate: ThemePolicy,

    /// Palette shown when no page theme is active.
    #[serde(default)]
    pub defaults: Palette,
}

/// Title docking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockConfig {
    /// Minimum time between two recomputes, in milliseconds.
    #[serde(default = "default_throttle_ms")]
    pub throttle_ms: u64,

    /// Selector of the docked title element.
    #[serde(default = "default_title_selector")]
    pub title_selector: String,

    /// Selector of the element whose height bounds the title.
    #[serde(default = "default_content_selector")]
    pub content_selector: String,
}

fn default_throttle_ms() -> u64 {
    50
}

fn default_title_selector() -> String {
    ".work-post-title".to_string()
}

fn default_content_selector() -> String {
    ".work-post-wrapper".to_string()
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            throttle_ms: default_throttle_ms(),
            title_selector: default_title_selector(),
            content_selector: default_content_selector(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| CoreError::config_with_source("Failed to parse config", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, with `FOLIO__` environment
    /// overrides (e.g. `FOLIO__DOCK__THROTTLE_MS=100`).
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.dock.throttle_ms == 0 {
            return Err(CoreError::config("dock.throttle_ms must be positive"));
        }

        if self.dock.title_selector.is_empty() || self.dock.content_selector.is_empty() {
            return Err(CoreError::config("dock selectors cannot be empty"));
        }

        if self.site.site_url.ends_with('/') {
            tracing::warn!("site.site_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.site_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Document title for a page, e.g. `"Notes - Jeff Wolff"`.
    pub fn page_title(&self, page: &str) -> String {
        format!("{page} - {}", self.site.title)
    }
}
