//! Per-page color themes.
//!
//! A work post may declare its own palette in frontmatter. When the page
//! mounts, the palette is resolved against the current [`ThemeState`] and
//! written out as CSS custom properties on the document root, together with
//! the `theme-color` meta tag that mirrors the background.
//!
//! Resolution is pure ([`resolve`]); only [`ThemeApplier::apply`] talks to a
//! [`ThemeTarget`].

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// One of the nine themeable variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeVar {
    Background,
    BackgroundFaded,
    Primary,
    PrimaryFaded,
    Secondary,
    SecondaryFaded,
    WindowBorder,
    WindowTitle,
    FooterBackground,
}

impl ThemeVar {
    /// All variables, in the order they are written.
    pub const ALL: [ThemeVar; 9] = [
        Self::Background,
        Self::BackgroundFaded,
        Self::Primary,
        Self::PrimaryFaded,
        Self::Secondary,
        Self::SecondaryFaded,
        Self::WindowBorder,
        Self::WindowTitle,
        Self::FooterBackground,
    ];

    /// CSS custom property name.
    pub fn css_property(&self) -> &'static str {
        match self {
            Self::Background => "--bg",
            Self::BackgroundFaded => "--bg-faded",
            Self::Primary => "--primary",
            Self::PrimaryFaded => "--primary-faded",
            Self::Secondary => "--secondary",
            Self::SecondaryFaded => "--secondary-faded",
            Self::WindowBorder => "--window-border",
            Self::WindowTitle => "--window-title",
            Self::FooterBackground => "--footer-bg",
        }
    }

    /// Frontmatter key holding this variable's value.
    pub fn frontmatter_key(&self) -> &'static str {
        match self {
            Self::Background => "tbg",
            Self::BackgroundFaded => "tbgf",
            Self::Primary => "tp",
            Self::PrimaryFaded => "tpf",
            Self::Secondary => "ts",
            Self::SecondaryFaded => "tsf",
            Self::WindowBorder => "twb",
            Self::WindowTitle => "twt",
            Self::FooterBackground => "tfbg",
        }
    }
}

/// A full set of theme values.
///
/// Values are opaque strings (hex colors, `rgba(...)`, bare `r, g, b`
/// triples used inside `rgba(var(--bg-faded), .5)`); nothing is validated.
/// Missing entries in configuration fall back to the stock palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub background_faded: String,
    pub primary: String,
    pub primary_faded: String,
    pub secondary: String,
    pub secondary_faded: String,
    pub window_border: String,
    pub window_title: String,
    pub footer_background: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#151515".to_string(),
            background_faded: "21, 21, 21".to_string(),
            primary: "#ff0".to_string(),
            primary_faded: "rgba(255,255,0,.78)".to_string(),
            secondary: "#2828ef".to_string(),
            secondary_faded: "#1414ab".to_string(),
            window_border: "190,190,190".to_string(),
            window_title: "0,0,0".to_string(),
            footer_background: "#000".to_string(),
        }
    }
}

impl Palette {
    /// Get the value of a variable.
    pub fn get(&self, var: ThemeVar) -> &str {
        match var {
            ThemeVar::Background => &self.background,
            ThemeVar::BackgroundFaded => &self.background_faded,
            ThemeVar::Primary => &self.primary,
            ThemeVar::PrimaryFaded => &self.primary_faded,
            ThemeVar::Secondary => &self.secondary,
            ThemeVar::SecondaryFaded => &self.secondary_faded,
            ThemeVar::WindowBorder => &self.window_border,
            ThemeVar::WindowTitle => &self.window_title,
            ThemeVar::FooterBackground => &self.footer_background,
        }
    }

    /// Set the value of a variable.
    pub fn set(&mut self, var: ThemeVar, value: impl Into<String>) {
        let slot = match var {
            ThemeVar::Background => &mut self.background,
            ThemeVar::BackgroundFaded => &mut self.background_faded,
            ThemeVar::Primary => &mut self.primary,
            ThemeVar::PrimaryFaded => &mut self.primary_faded,
            ThemeVar::Secondary => &mut self.secondary,
            ThemeVar::SecondaryFaded => &mut self.secondary_faded,
            ThemeVar::WindowBorder => &mut self.window_border,
            ThemeVar::WindowTitle => &mut self.window_title,
            ThemeVar::FooterBackground => &mut self.footer_background,
        };
        *slot = value.into();
    }

    /// Iterate `(variable, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeVar, &str)> {
        ThemeVar::ALL.into_iter().map(move |var| (var, self.get(var)))
    }
}

/// A page's theme declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRecord {
    /// Whether the page overrides the theme at all.
    pub enabled: bool,

    /// The page's palette. Ignored unless `enabled`.
    pub palette: Palette,
}

impl ThemeRecord {
    /// An enabled record carrying `palette`.
    pub fn enabled(palette: Palette) -> Self {
        Self {
            enabled: true,
            palette,
        }
    }

    /// A record that leaves the theme alone.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            palette: Palette::default(),
        }
    }
}

/// The theme currently visible in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    palette: Palette,
    meta_theme_color: String,
}

impl ThemeState {
    /// State for a palette; the meta color follows the background.
    pub fn new(palette: Palette) -> Self {
        let meta_theme_color = palette.background.clone();
        Self {
            palette,
            meta_theme_color,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Value of the `theme-color` meta tag.
    pub fn meta_theme_color(&self) -> &str {
        &self.meta_theme_color
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

/// What happens to the theme when a page without its own theme mounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemePolicy {
    /// Return to the default palette before applying the next page.
    #[default]
    Reset,
    /// Keep whatever the previous page left behind.
    Carry,
}

/// Compute the theme a page should show.
pub fn resolve(
    current: &ThemeState,
    record: Option<&ThemeRecord>,
    defaults: &Palette,
    policy: ThemePolicy,
) -> ThemeState {
    match record {
        Some(record) if record.enabled => ThemeState::new(record.palette.clone()),
        _ => match policy {
            ThemePolicy::Reset => ThemeState::new(defaults.clone()),
            ThemePolicy::Carry => current.clone(),
        },
    }
}

/// Where a theme gets written. The browser implementation targets the
/// document root's inline style and `meta[name=theme-color]`.
pub trait ThemeTarget {
    /// Whether the `theme-color` indicator exists.
    fn has_indicator(&self) -> bool;

    /// Write one custom property.
    fn set_variable(&mut self, property: &str, value: &str);

    /// Write the indicator's color.
    fn set_indicator(&mut self, value: &str);
}

/// Write a full state to a target.
///
/// The indicator is checked first so a failure leaves the target untouched.
pub fn commit<T: ThemeTarget + ?Sized>(state: &ThemeState, target: &mut T) -> Result<()> {
    if !target.has_indicator() {
        return Err(CoreError::MissingIndicatorElement);
    }

    for (var, value) in state.palette.iter() {
        target.set_variable(var.css_property(), value);
    }
    target.set_indicator(state.meta_theme_color());

    Ok(())
}

/// Holds the document's theme and applies page records to it.
///
/// Until [`sync`](Self::sync) or a successful write, `current` is only what
/// the document is expected to show, so resolving to it still writes.
#[derive(Debug, Clone)]
pub struct ThemeApplier {
    defaults: Palette,
    policy: ThemePolicy,
    current: ThemeState,
    synced: bool,
}

impl ThemeApplier {
    pub fn new(defaults: Palette, policy: ThemePolicy) -> Self {
        let current = ThemeState::new(defaults.clone());
        Self {
            defaults,
            policy,
            current,
            synced: false,
        }
    }

    pub fn current(&self) -> &ThemeState {
        &self.current
    }

    pub fn policy(&self) -> ThemePolicy {
        self.policy
    }

    /// Whether `current` is known to be on the document.
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    /// Write the current state unconditionally. Called once at startup so the
    /// configured defaults replace whatever the stylesheet declared.
    pub fn sync<T: ThemeTarget + ?Sized>(&mut self, target: &mut T) -> Result<()> {
        commit(&self.current, target)?;
        self.synced = true;
        tracing::debug!(background = %self.current.meta_theme_color(), "theme synced");
        Ok(())
    }

    /// Apply a page's record.
    ///
    /// Returns `Ok(false)` when nothing was written: the resolved theme is
    /// already showing, or the policy carries an unknown leftover.
    pub fn apply<T: ThemeTarget + ?Sized>(
        &mut self,
        record: Option<&ThemeRecord>,
        target: &mut T,
    ) -> Result<bool> {
        let next = resolve(&self.current, record, &self.defaults, self.policy);
        let carried =
            !record.is_some_and(|record| record.enabled) && self.policy == ThemePolicy::Carry;
        self.transition(next, carried, target)
    }

    /// Show the default palette whatever the policy.
    pub fn restore_defaults<T: ThemeTarget + ?Sized>(&mut self, target: &mut T) -> Result<bool> {
        let next = ThemeState::new(self.defaults.clone());
        self.transition(next, false, target)
    }

    fn transition<T: ThemeTarget + ?Sized>(
        &mut self,
        next: ThemeState,
        carried: bool,
        target: &mut T,
    ) -> Result<bool> {
        if next == self.current && (self.synced || carried) {
            tracing::trace!("theme unchanged");
            return Ok(false);
        }

        commit(&next, target)?;
        tracing::debug!(background = %next.meta_theme_color(), "applied page theme");
        self.current = next;
        self.synced = true;
        Ok(true)
    }
}

impl Default for ThemeApplier {
    fn default() -> Self {
        Self::new(Palette::default(), ThemePolicy::default())
    }
}
