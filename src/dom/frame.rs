use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::snapshot;
use crate::engine::frame::{FrameDispatcher, HandlerControl, HandlerId};
use crate::engine::ScrollSnapshot;

pub type FrameHandler = Box<dyn FnMut(&ScrollSnapshot) -> HandlerControl>;

struct Inner {
    dispatcher: RefCell<FrameDispatcher<FrameHandler>>,
    on_frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    on_scroll: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// The one scroll/resize listener of the app.
///
/// Every scroll-driven effect registers a handler here. Scroll events only
/// request an animation frame; the frame reads the window once and hands
/// that snapshot to each handler in turn.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<Inner>,
}

impl PartialEq for FrameLoop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl FrameLoop {
    pub fn attach() -> Self {
        let inner = Rc::new(Inner {
            dispatcher: RefCell::new(FrameDispatcher::new()),
            on_frame: RefCell::new(None),
            on_scroll: RefCell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        *inner.on_frame.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
            if let Some(inner) = weak.upgrade() {
                run_frame(&inner);
            }
        }));

        let weak = Rc::downgrade(&inner);
        *inner.on_scroll.borrow_mut() = Some(Closure::new(move || request_frame(&weak)));

        if let Some(window) = web_sys::window() {
            if let Some(callback) = inner.on_scroll.borrow().as_ref() {
                for event in ["scroll", "resize"] {
                    if window
                        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("could not listen for {} events", event);
                    }
                }
            }
        }

        Self { inner }
    }

    pub fn register(&self, handler: FrameHandler) -> HandlerId {
        self.inner.dispatcher.borrow_mut().register(handler)
    }

    pub fn unregister(&self, id: HandlerId) {
        self.inner.dispatcher.borrow_mut().unregister(id);
    }

    /// Runs all handlers right now, outside the scroll cycle. Used after
    /// mounting so that whatever is already on screen is handled before the
    /// first scroll event.
    pub fn prime(&self) {
        run_handlers(&self.inner, |dispatcher| dispatcher.begin_prime());
    }

    pub fn detach(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(callback) = self.inner.on_scroll.borrow().as_ref() {
            for event in ["scroll", "resize"] {
                let _ = window
                    .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
            }
        }
    }
}

fn request_frame(weak: &Weak<Inner>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    if !inner.dispatcher.borrow_mut().on_scroll() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(callback) = inner.on_frame.borrow().as_ref() {
        if window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .is_err()
        {
            debug!("animation frame request failed, running inline");
            run_frame(&inner);
        }
    };
}

fn run_frame(inner: &Inner) {
    run_handlers(inner, |dispatcher| dispatcher.begin_tick());
}

fn run_handlers<F>(inner: &Inner, begin: F)
where
    F: FnOnce(&mut FrameDispatcher<FrameHandler>) -> Vec<(HandlerId, FrameHandler)>,
{
    let Some(window) = web_sys::window() else {
        return;
    };
    let snap = snapshot(&window);

    // Handlers run without the dispatcher borrowed so they may register or
    // unregister (e.g. a component unmounting in response).
    let batch = begin(&mut inner.dispatcher.borrow_mut());
    let ran = batch
        .into_iter()
        .map(|(id, mut handler)| {
            let control = handler(&snap);
            (id, handler, control)
        })
        .collect();
    inner.dispatcher.borrow_mut().end_tick(ran);
}
