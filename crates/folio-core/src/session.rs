//! Mount/unmount contract of a work post page.

use std::time::Duration;

use crate::{
    config::DockConfig,
    dock::{DockState, DockSurface, ScrollDocker},
    theme::{ThemeApplier, ThemeRecord, ThemeTarget},
    throttle::Clock,
};

/// Lifecycle of one page view.
///
/// Mounting applies the page theme and starts title docking; unmounting
/// stops docking. Failures are logged and never reach the page.
#[derive(Debug)]
pub struct PageSession<C> {
    docker: ScrollDocker<C>,
}

impl<C: Clock> PageSession<C> {
    pub fn new(dock: &DockConfig, clock: C) -> Self {
        Self {
            docker: ScrollDocker::new(Duration::from_millis(dock.throttle_ms), clock),
        }
    }

    pub fn docker(&self) -> &ScrollDocker<C> {
        &self.docker
    }

    /// Apply the page's theme, then start docking.
    pub fn mount<T: ThemeTarget + ?Sized>(
        &mut self,
        theme: &mut ThemeApplier,
        record: Option<&ThemeRecord>,
        target: &mut T,
    ) {
        if let Err(err) = theme.apply(record, target) {
            tracing::warn!(error = %err, "page theme not applied");
        }
        self.docker.start();
    }

    /// Start docking without touching the theme, for when no applier is
    /// available.
    pub fn start_docking(&mut self) {
        self.docker.start();
    }

    /// Forward a scroll notification to the docker.
    pub fn on_scroll<S: DockSurface + ?Sized>(&mut self, surface: &mut S) -> Option<DockState> {
        self.docker.on_scroll(surface)
    }

    pub fn unmount(&mut self) {
        self.docker.stop();
    }
}
