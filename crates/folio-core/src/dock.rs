//! Scroll-linked docking of the work post title.
//!
//! While the reader scrolls through a work post, its title stays fixed to
//! the top of the viewport. Once the bottom of the title would pass the
//! bottom of the content wrapper, the title is anchored there instead so it
//! scrolls away with the end of the page.

use std::time::Duration;

use crate::{
    error::Result,
    throttle::{Clock, RateLimiter},
};

/// Geometry read from the document on one scroll tick. All values are CSS
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    /// Rendered height of the title element.
    pub title_height: f64,

    /// Current vertical scroll offset of the viewport.
    pub scroll_offset: f64,

    /// Rendered height of the content wrapper.
    pub content_height: f64,
}

impl ScrollSample {
    pub fn new(title_height: f64, scroll_offset: f64, content_height: f64) -> Self {
        Self {
            title_height,
            scroll_offset,
            content_height,
        }
    }

    /// Where the bottom edge of a pinned title currently sits.
    pub fn scroll_bottom(&self) -> f64 {
        self.scroll_offset + self.title_height
    }

    /// Top offset that puts the title flush with the end of the content.
    pub fn anchor_offset(&self) -> f64 {
        self.content_height - self.title_height
    }
}

/// Positioning mode of the title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DockState {
    /// Fixed to the top of the viewport.
    Pinned,
    /// Absolutely positioned at the given top offset.
    Anchored(f64),
}

impl DockState {
    pub fn from_sample(sample: &ScrollSample) -> Self {
        if sample.scroll_bottom() >= sample.content_height {
            Self::Anchored(sample.anchor_offset())
        } else {
            Self::Pinned
        }
    }

    /// Inline style properties for this state.
    pub fn style(&self) -> DockStyle {
        match self {
            Self::Pinned => DockStyle {
                position: "fixed",
                top: "0px".to_string(),
            },
            Self::Anchored(offset) => DockStyle {
                position: "absolute",
                top: format!("{offset}px"),
            },
        }
    }
}

/// `position` and `top` values written to the title element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockStyle {
    pub position: &'static str,
    pub top: String,
}

/// The document as seen by the docker.
pub trait DockSurface {
    /// Read current geometry, or `None` if the title or the content wrapper
    /// is not in the document.
    fn sample(&self) -> Option<ScrollSample>;

    /// Write the title's inline position.
    fn apply(&mut self, style: &DockStyle) -> Result<()>;
}

/// Title docking state machine.
///
/// `Stopped` until [`start`](Self::start), then `Pinned` or `Anchored`
/// depending on the last recompute, and `Stopped` again after
/// [`stop`](Self::stop).
#[derive(Debug)]
pub struct ScrollDocker<C> {
    limiter: RateLimiter<C>,
    state: Option<DockState>,
}

impl<C: Clock> ScrollDocker<C> {
    pub fn new(interval: Duration, clock: C) -> Self {
        Self {
            limiter: RateLimiter::new(interval, clock),
            state: None,
        }
    }

    /// Current state, `None` while stopped.
    pub fn state(&self) -> Option<DockState> {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_some()
    }

    /// Begin docking. The title is assumed pinned until the first recompute.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.limiter.reset();
        self.state = Some(DockState::Pinned);
        tracing::debug!(interval_ms = self.limiter.interval().as_millis() as u64, "dock started");
    }

    /// Stop docking. Later scroll notifications are ignored.
    pub fn stop(&mut self) {
        if self.state.take().is_some() {
            tracing::debug!("dock stopped");
        }
    }

    /// Handle a scroll notification, subject to rate limiting.
    ///
    /// Returns the new state if a recompute ran.
    pub fn on_scroll<S: DockSurface + ?Sized>(&mut self, surface: &mut S) -> Option<DockState> {
        if !self.is_running() {
            return None;
        }
        // Split borrow: the limiter gates a recompute that needs `self.state`.
        let Self { limiter, state } = self;
        limiter.call(|| recompute(state, surface)).flatten()
    }

    /// Read geometry and reposition the title.
    ///
    /// A missing title or content wrapper makes this a no-op; that happens
    /// while a page is being torn down.
    pub fn recompute<S: DockSurface + ?Sized>(&mut self, surface: &mut S) -> Option<DockState> {
        recompute(&mut self.state, surface)
    }
}

fn recompute<S: DockSurface + ?Sized>(
    state: &mut Option<DockState>,
    surface: &mut S,
) -> Option<DockState> {
    let previous = (*state)?;
    let Some(sample) = surface.sample() else {
        tracing::trace!("dock targets missing, skipping recompute");
        return None;
    };

    let next = DockState::from_sample(&sample);
    if let Err(err) = surface.apply(&next.style()) {
        tracing::trace!(error = %err, "dock write skipped");
        return None;
    }

    if next != previous {
        tracing::debug!(state = ?next, "dock state changed");
    }
    *state = Some(next);
    Some(next)
}
