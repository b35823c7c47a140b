use std::{cell::RefCell, rc::Rc};

use gloo::events::EventListener;
use log::debug;
use screenfit_core::{debounce::Debouncer, Screen};

use crate::{
    dom::WebEnvironment,
    timer::GlooTimer,
    util::{ResultExt, Shared},
};

fn refit(screen: &Shared<Screen<WebEnvironment>>) {
    let _ = screen.borrow_mut().update_size().log_err();
}

fn refit_later(
    screen: &Shared<Screen<WebEnvironment>>,
    debouncer: &Shared<Debouncer<GlooTimer>>,
) -> impl FnMut(&web_sys::Event) {
    let screen = screen.clone();
    let debouncer = debouncer.clone();
    move |_| {
        let screen = screen.clone();
        debouncer.borrow_mut().call(move || refit(&screen));
    }
}

/// Refits the canvas after a window resize or a fullscreen change, once the
/// events have settled. Listeners and pending refits are dropped with it.
pub struct ScreenListeners {
    _resize: EventListener,
    _fullscreen_change: EventListener,
    resize_debouncer: Shared<Debouncer<GlooTimer>>,
    fullscreen_debouncer: Shared<Debouncer<GlooTimer>>,
}

impl ScreenListeners {
    pub fn register(screen: Shared<Screen<WebEnvironment>>) -> Self {
        let (window, document, resize_ms, fullscreen_ms) = {
            let screen = screen.borrow();
            (
                screen.env().window().clone(),
                screen.env().document().clone(),
                screen.config().resize_debounce_ms,
                screen.config().fullscreen_delay_ms,
            )
        };
        debug!(
            "refitting {}ms after resize, {}ms after fullscreen change",
            resize_ms, fullscreen_ms
        );
        let resize_debouncer = Rc::new(RefCell::new(Debouncer::new(GlooTimer, resize_ms)));
        let fullscreen_debouncer =
            Rc::new(RefCell::new(Debouncer::new(GlooTimer, fullscreen_ms)));

        Self {
            _resize: EventListener::new(
                &window,
                "resize",
                refit_later(&screen, &resize_debouncer),
            ),
            _fullscreen_change: EventListener::new(
                &document,
                "fullscreenchange",
                refit_later(&screen, &fullscreen_debouncer),
            ),
            resize_debouncer,
            fullscreen_debouncer,
        }
    }
}

impl Drop for ScreenListeners {
    fn drop(&mut self) {
        self.resize_debouncer.borrow_mut().cancel();
        self.fullscreen_debouncer.borrow_mut().cancel();
    }
}
