//! Frontmatter parsing for content files.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    theme::{Palette, ThemeRecord, ThemeVar},
};

/// Frontmatter metadata for work posts and notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Page title (required).
    pub title: String,

    /// Publication date.
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Whether a note shows up in the notes index.
    #[serde(default)]
    pub publish: bool,

    /// Page description; the excerpt is used when absent.
    #[serde(default)]
    pub description: Option<String>,

    /// People credited on a work post.
    #[serde(default)]
    pub team: Option<String>,

    /// Bare host of the project website (e.g. `example.com`).
    #[serde(default)]
    pub url: Option<String>,

    /// Cover video played above the title.
    #[serde(default, rename = "featuredVideo")]
    pub featured_video: Option<String>,

    /// Whether the page declares its own theme.
    #[serde(default)]
    pub theme: bool,

    #[serde(default)]
    pub tbg: Option<String>,
    #[serde(default)]
    pub tbgf: Option<String>,
    #[serde(default)]
    pub tp: Option<String>,
    #[serde(default)]
    pub tpf: Option<String>,
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub tsf: Option<String>,
    #[serde(default)]
    pub twb: Option<String>,
    #[serde(default)]
    pub twt: Option<String>,
    #[serde(default)]
    pub tfbg: Option<String>,
}

/// Delimiter types for frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// YAML frontmatter delimited by `---`.
    Yaml,
    /// TOML frontmatter delimited by `+++`.
    Toml,
}

impl FrontmatterFormat {
    /// Get the delimiter string for this format.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split content into frontmatter and body.
pub fn split_frontmatter(content: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let content = content.trim_start();

    let format = if content.starts_with("---") {
        FrontmatterFormat::Yaml
    } else if content.starts_with("+++") {
        FrontmatterFormat::Toml
    } else {
        return None;
    };

    let delimiter = format.delimiter();

    let after_first = &content[delimiter.len()..];
    let closing_pos = after_first.find(delimiter)?;

    let frontmatter = after_first[..closing_pos].trim();
    let body = after_first[closing_pos + delimiter.len()..].trim_start();

    Some((format, frontmatter, body))
}

/// Parse frontmatter from a string.
pub fn parse_frontmatter(content: &str, path: &Path) -> Result<(Frontmatter, String)> {
    let Some((format, fm_str, body)) = split_frontmatter(content) else {
        return Ok((Frontmatter::default(), content.to_string()));
    };

    let frontmatter: Frontmatter = match format {
        FrontmatterFormat::Yaml => {
            serde_yaml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
        FrontmatterFormat::Toml => {
            toml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
    };

    Ok((frontmatter, body.to_string()))
}

impl Frontmatter {
    /// Validate required fields.
    pub fn validate(&self, path: &Path) -> Result<()> {
        if self.title.is_empty() {
            return Err(CoreError::frontmatter(path, "title is required"));
        }
        Ok(())
    }

    /// Raw value of a theme key.
    pub fn theme_value(&self, var: ThemeVar) -> Option<&str> {
        let value = match var {
            ThemeVar::Background => &self.tbg,
            ThemeVar::BackgroundFaded => &self.tbgf,
            ThemeVar::Primary => &self.tp,
            ThemeVar::PrimaryFaded => &self.tpf,
            ThemeVar::Secondary => &self.ts,
            ThemeVar::SecondaryFaded => &self.tsf,
            ThemeVar::WindowBorder => &self.twb,
            ThemeVar::WindowTitle => &self.twt,
            ThemeVar::FooterBackground => &self.tfbg,
        };
        value.as_deref()
    }

    /// The page's theme record.
    ///
    /// Absent keys become empty strings; values are passed through as written.
    pub fn theme_record(&self) -> ThemeRecord {
        if !self.theme {
            return ThemeRecord::disabled();
        }

        let mut palette = Palette::default();
        for var in ThemeVar::ALL {
            palette.set(var, self.theme_value(var).unwrap_or_default());
        }
        ThemeRecord::enabled(palette)
    }

    /// Date formatted for display, e.g. `May 04, 2018`.
    pub fn display_date(&self) -> Option<String> {
        self.date.map(|date| date.format("%B %d, %Y").to_string())
    }
}
