use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::engine::counter::{claim, Cadence, CounterAnimation};
use crate::engine::profile::CounterBinding;

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Starts the count-up bound to a freshly revealed host, at most once per
/// number element. A host without a number element is left alone.
pub fn start_for_host(host: &Element, binding: &CounterBinding) {
    if let Some(class) = binding.host_class {
        if !host.class_list().contains(class) {
            return;
        }
    }
    let number = match binding.number_selector {
        Some(selector) => host.query_selector(selector).ok().flatten(),
        None => Some(host.clone()),
    };
    let Some(number) = number else {
        debug!("counter host has no number element");
        return;
    };
    if !claim(&number) {
        return;
    }

    let profile = binding.profile;
    let setup = profile.setup_from_attrs(|name| number.get_attribute(name));
    let animation = CounterAnimation::start(&setup, &profile.duration, now_ms());
    debug!(
        "counting to {}{} over {}ms",
        setup.target,
        setup.suffix,
        animation.duration_ms()
    );

    match profile.cadence {
        Cadence::AnimationFrame => run_on_frames(number, animation),
        Cadence::Interval { every_ms } => run_on_interval(number, animation, every_ms),
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request(callback: &FrameCallback) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(cb) = callback.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

fn run_on_frames(element: Element, mut animation: CounterAnimation) {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();

    *callback.borrow_mut() = Some(Closure::new(move |now: f64| {
        let frame = animation.frame(now);
        if let Some(text) = frame.text {
            element.set_text_content(Some(&text));
        }
        if frame.done {
            // Drops this closure; nothing references it afterwards.
            let _ = next.borrow_mut().take();
        } else {
            request(&next);
        }
    }));

    request(&callback);
}

fn run_on_interval(element: Element, mut animation: CounterAnimation, every_ms: u32) {
    let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let handle = slot.clone();

    let tick = move || {
        if animation.is_finished() {
            return;
        }
        let frame = animation.frame(now_ms());
        if let Some(text) = frame.text {
            element.set_text_content(Some(&text));
        }
        if frame.done {
            let handle = handle.clone();
            Timeout::new(0, move || drop(handle.borrow_mut().take())).forget();
        }
    };

    *slot.borrow_mut() = Some(Interval::new(every_ms, tick));
}
