//! `web-sys` implementations of the core traits.

use std::time::Duration;

use folio_core::{
    Clock, CoreError, DockStyle, DockSurface, Result, ScrollSample, ThemeTarget,
    config::DockConfig,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Performance, Window};

/// Selector of the browser chrome color tag.
pub const THEME_COLOR_SELECTOR: &str = "meta[name=theme-color]";

pub(crate) fn js_error(err: JsValue) -> CoreError {
    CoreError::dom(format!("{err:?}"))
}

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| CoreError::dom("no global window"))
}

pub(crate) fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| CoreError::dom("window has no document"))
}

/// The document root's inline style plus the `theme-color` meta tag.
#[derive(Debug, Clone)]
pub struct DocumentTheme {
    root: HtmlElement,
    indicator: Option<Element>,
}

impl DocumentTheme {
    pub fn from_document(document: &Document) -> Result<Self> {
        let root = document
            .document_element()
            .ok_or_else(|| CoreError::dom("document has no root element"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| CoreError::dom("document root is not an HTML element"))?;
        let indicator = document
            .query_selector(THEME_COLOR_SELECTOR)
            .map_err(js_error)?;

        Ok(Self { root, indicator })
    }

    /// Bind to the global document.
    pub fn current() -> Result<Self> {
        Self::from_document(&document()?)
    }
}

impl ThemeTarget for DocumentTheme {
    fn has_indicator(&self) -> bool {
        self.indicator.is_some()
    }

    fn set_variable(&mut self, property: &str, value: &str) {
        if let Err(err) = self.root.style().set_property(property, value) {
            tracing::warn!(property, error = ?err, "failed to set theme variable");
        }
    }

    fn set_indicator(&mut self, value: &str) {
        if let Some(meta) = &self.indicator {
            if let Err(err) = meta.set_attribute("content", value) {
                tracing::warn!(error = ?err, "failed to set theme color");
            }
        }
    }
}

/// Live title and content wrapper geometry, looked up on every call.
#[derive(Debug, Clone)]
pub struct DomDockSurface {
    window: Window,
    title_selector: String,
    content_selector: String,
}

impl DomDockSurface {
    pub fn new(window: Window, dock: &DockConfig) -> Self {
        Self {
            window,
            title_selector: dock.title_selector.clone(),
            content_selector: dock.content_selector.clone(),
        }
    }

    fn element(&self, selector: &str) -> Option<HtmlElement> {
        let document = self.window.document()?;
        let element = document.query_selector(selector).ok().flatten()?;
        element.dyn_into::<HtmlElement>().ok()
    }
}

impl DockSurface for DomDockSurface {
    fn sample(&self) -> Option<ScrollSample> {
        let title = self.element(&self.title_selector)?;
        let content = self.element(&self.content_selector)?;
        let scroll_offset = self.window.scroll_y().ok()?;

        Some(ScrollSample::new(
            f64::from(title.offset_height()),
            scroll_offset,
            f64::from(content.offset_height()),
        ))
    }

    fn apply(&mut self, style: &DockStyle) -> Result<()> {
        let title = self
            .element(&self.title_selector)
            .ok_or_else(|| CoreError::missing_target(&self.title_selector))?;
        let css = title.style();
        css.set_property("position", style.position)
            .map_err(js_error)?;
        css.set_property("top", &style.top).map_err(js_error)?;
        Ok(())
    }
}

/// `performance.now()`, or `Date.now()` where the Performance API is missing.
#[derive(Debug, Clone)]
pub struct BrowserClock {
    performance: Option<Performance>,
}

impl BrowserClock {
    pub fn new() -> Self {
        Self {
            performance: web_sys::window().and_then(|w| w.performance()),
        }
    }
}

impl Default for BrowserClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for BrowserClock {
    fn now(&self) -> Duration {
        let millis = match &self.performance {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        };
        Duration::from_secs_f64(millis.max(0.0) / 1000.0)
    }
}
