//! Browser glue: measures the page for the engine and writes its results back.

pub mod anchors;
pub mod counter;
pub mod frame;
pub mod page;
pub mod parallax;
pub mod reveal;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use crate::engine::counter::{CountedMarker, COUNTED_CLASS};
use crate::engine::reveal::{RevealWrite, StyleWrite};
use crate::engine::{Rect, ScrollSnapshot};

pub fn snapshot(window: &Window) -> ScrollSnapshot {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let viewport_width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    ScrollSnapshot::new(scroll_y, viewport_height, viewport_width)
}

/// Viewport box of an element, `None` once it has left the document.
pub fn rect_of(element: &Element) -> Option<Rect> {
    if !element.is_connected() {
        return None;
    }
    let r = element.get_bounding_client_rect();
    Some(Rect::new(r.top(), r.left(), r.width(), r.height()))
}

pub fn offset_top(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map(|el| el.offset_top() as f64)
        .unwrap_or(0.0)
}

/// All matches of `selector` under `root`. Invalid selectors yield nothing.
pub fn query_all(root: &impl QueryRoot, selector: &str) -> Vec<Element> {
    let Some(list) = root.select_all(selector) else {
        debug!("selector {} matched nothing", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Something `querySelectorAll` can be called on.
pub trait QueryRoot {
    fn select_all(&self, selector: &str) -> Option<web_sys::NodeList>;
}

impl QueryRoot for web_sys::Document {
    fn select_all(&self, selector: &str) -> Option<web_sys::NodeList> {
        self.query_selector_all(selector).ok()
    }
}

impl QueryRoot for Element {
    fn select_all(&self, selector: &str) -> Option<web_sys::NodeList> {
        self.query_selector_all(selector).ok()
    }
}

pub fn set_style(element: &Element, write: &StyleWrite) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        if el.style().set_property(write.property, &write.value).is_err() {
            debug!("could not set {} on element", write.property);
        }
    }
}

pub fn add_class(element: &Element, class: &str) {
    if element.class_list().add_1(class).is_err() {
        debug!("could not add class {}", class);
    }
}

pub fn toggle_class(element: &Element, class: &str, on: bool) {
    if element.class_list().toggle_with_force(class, on).is_err() {
        debug!("could not toggle class {}", class);
    }
}

pub fn apply_reveal(element: &Element, write: &RevealWrite) {
    match write {
        RevealWrite::AddClass(class) => add_class(element, class),
        RevealWrite::Styles(styles) => styles.iter().for_each(|s| set_style(element, s)),
    }
}

/// Runs `f` after `delay_ms`, or right away for a zero delay.
pub fn after(delay_ms: u32, f: impl FnOnce() + 'static) {
    if delay_ms == 0 {
        f();
    } else {
        Timeout::new(delay_ms, f).forget();
    }
}

impl CountedMarker for Element {
    fn is_counted(&self) -> bool {
        self.class_list().contains(COUNTED_CLASS)
    }

    fn mark_counted(&self) {
        add_class(self, COUNTED_CLASS);
    }
}
