//! Theme state shared through the component tree.

use folio_core::{ThemeApplier, ThemeRecord, ThemeState, config::ThemeConfig};
use leptos::prelude::*;

use crate::dom::DocumentTheme;

/// Handle to the document theme, provided once by the root component.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    applier: StoredValue<ThemeApplier>,
}

impl ThemeContext {
    pub fn new(theme: &ThemeConfig) -> Self {
        Self {
            applier: StoredValue::new(ThemeApplier::new(
                theme.defaults.clone(),
                theme.on_navigate,
            )),
        }
    }

    /// Run `f` with the applier. `None` once the owning root is gone.
    pub fn with_applier<R>(&self, f: impl FnOnce(&mut ThemeApplier) -> R) -> Option<R> {
        self.applier.try_update_value(f)
    }

    /// Snapshot of the theme currently written to the document.
    pub fn current(&self) -> Option<ThemeState> {
        self.applier.try_with_value(|applier| applier.current().clone())
    }
}

/// Create the theme context and make it available to descendants.
///
/// The configured defaults are written to the document right away, replacing
/// the stylesheet's `:root` values.
pub fn provide_theme_context(theme: &ThemeConfig) -> ThemeContext {
    let context = ThemeContext::new(theme);
    match DocumentTheme::current() {
        Ok(mut target) => {
            if let Some(Err(err)) = context.with_applier(|applier| applier.sync(&mut target)) {
                tracing::warn!(error = %err, "default theme not written");
            }
        }
        Err(err) => tracing::warn!(error = %err, "default theme not written"),
    }
    provide_context(context);
    context
}

pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Apply a page's theme once it is mounted. For pages without title docking.
pub fn use_page_theme(record: Option<ThemeRecord>) {
    on_mount_theme(move |applier, target| applier.apply(record.as_ref(), target));
}

/// Show the default palette once mounted, whatever the navigation policy.
pub fn use_default_theme() {
    on_mount_theme(|applier, target| applier.restore_defaults(target));
}

fn on_mount_theme<F>(write: F)
where
    F: Fn(&mut ThemeApplier, &mut DocumentTheme) -> folio_core::Result<bool> + 'static,
{
    let theme = use_theme_context();

    Effect::new(move |applied: Option<()>| {
        if applied.is_some() {
            return;
        }
        let mut target = match DocumentTheme::current() {
            Ok(target) => target,
            Err(err) => {
                tracing::warn!(error = %err, "page theme not applied");
                return;
            }
        };
        match theme.with_applier(|applier| write(applier, &mut target)) {
            Some(Ok(_)) => {}
            Some(Err(err)) => tracing::warn!(error = %err, "page theme not applied"),
            None => tracing::warn!("page theme not applied: theme context disposed"),
        }
    });
}
