//! Scroll listener registration and the work post page session.

use std::{cell::RefCell, rc::Rc};

use folio_core::{PageSession, Result, ThemeRecord, config::DockConfig};
use leptos::prelude::*;
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::EventTarget;

use crate::{
    dom::{BrowserClock, DocumentTheme, DomDockSurface, js_error, window},
    theme::{ThemeContext, use_theme_context},
};

const SCROLL: &str = "scroll";

/// A registered `scroll` listener. Dropping it removes the listener.
pub struct ScrollListener {
    target: EventTarget,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(target: &EventTarget, handler: impl FnMut() + 'static) -> Result<Self> {
        let callback = Closure::<dyn FnMut()>::new(handler);
        target
            .add_event_listener_with_callback(SCROLL, callback.as_ref().unchecked_ref())
            .map_err(js_error)?;

        Ok(Self {
            target: target.clone(),
            callback,
        })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(SCROLL, self.callback.as_ref().unchecked_ref())
        {
            tracing::warn!(error = ?err, "failed to remove scroll listener");
        }
    }
}

impl std::fmt::Debug for ScrollListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollListener").finish_non_exhaustive()
    }
}

/// A mounted page: its session and the listener feeding it.
struct ActiveSession {
    session: Rc<RefCell<PageSession<BrowserClock>>>,
    listener: ScrollListener,
}

impl ActiveSession {
    fn start(theme: ThemeContext, record: Option<&ThemeRecord>, dock: &DockConfig) -> Result<Self> {
        let window = window()?;
        let mut target = DocumentTheme::current()?;

        let mut session = PageSession::new(dock, BrowserClock::new());
        if theme
            .with_applier(|applier| session.mount(applier, record, &mut target))
            .is_none()
        {
            tracing::warn!("page theme not applied: theme context disposed");
            session.start_docking();
        }

        let session = Rc::new(RefCell::new(session));
        let mut surface = DomDockSurface::new(window.clone(), dock);
        let handler = {
            let session = Rc::clone(&session);
            move || {
                session.borrow_mut().on_scroll(&mut surface);
            }
        };
        let event_target: &EventTarget = window.as_ref();
        let listener = ScrollListener::attach(event_target, handler)?;

        Ok(Self { session, listener })
    }

    fn stop(self) {
        drop(self.listener);
        self.session.borrow_mut().unmount();
    }
}

/// Run the work post lifecycle for the current component: apply `record`
/// and start title docking once mounted, stop docking on cleanup.
pub fn use_page_session(record: Option<ThemeRecord>, dock: DockConfig) {
    let theme = use_theme_context();
    let active = StoredValue::new_local(None::<ActiveSession>);

    Effect::new(move |_| {
        if active.with_value(Option::is_some) {
            return;
        }
        match ActiveSession::start(theme, record.as_ref(), &dock) {
            Ok(session) => active.set_value(Some(session)),
            Err(err) => tracing::warn!(error = %err, "page session not started"),
        }
    });

    on_cleanup(move || {
        active.try_update_value(|active| {
            if let Some(session) = active.take() {
                session.stop();
            }
        });
    });
}
