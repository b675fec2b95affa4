use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::query_all;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorTarget<'a> {
    /// A bare `#`: swallow the click, go nowhere.
    Nothing,
    /// `#id`, usable as a selector.
    Fragment(&'a str),
    /// Not an in-page link.
    Elsewhere,
}

pub fn anchor_target(href: &str) -> AnchorTarget<'_> {
    match href {
        "#" => AnchorTarget::Nothing,
        h if h.starts_with('#') => AnchorTarget::Fragment(h),
        _ => AnchorTarget::Elsewhere,
    }
}

pub fn smooth_scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Click handlers installed on the in-page links; removed on drop.
pub struct SmoothAnchors {
    listeners: Vec<(Element, Closure<dyn FnMut(MouseEvent)>)>,
}

impl SmoothAnchors {
    pub fn install(document: &Document, push_history: bool) -> Self {
        let listeners = query_all(document, "a[href^=\"#\"]")
            .into_iter()
            .filter_map(|anchor| {
                let doc = document.clone();
                let link = anchor.clone();
                let callback = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
                    let href = link.get_attribute("href").unwrap_or_default();
                    follow(&doc, &href, &e, push_history);
                });
                anchor
                    .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
                    .ok()?;
                Some((anchor, callback))
            })
            .collect();
        Self { listeners }
    }
}

impl Drop for SmoothAnchors {
    fn drop(&mut self) {
        for (anchor, callback) in &self.listeners {
            let _ = anchor.remove_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        }
    }
}

fn follow(document: &Document, href: &str, event: &MouseEvent, push_history: bool) {
    match anchor_target(href) {
        AnchorTarget::Nothing => event.prevent_default(),
        AnchorTarget::Fragment(selector) => {
            let Some(target) = document.query_selector(selector).ok().flatten() else {
                debug!("no element for {}", selector);
                return;
            };
            event.prevent_default();
            smooth_scroll_into_view(&target);
            if push_history {
                if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(href));
                }
            }
        }
        AnchorTarget::Elsewhere => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_hrefs() {
        assert_eq!(anchor_target("#"), AnchorTarget::Nothing);
        assert_eq!(anchor_target("#services"), AnchorTarget::Fragment("#services"));
        assert_eq!(anchor_target("/contact/"), AnchorTarget::Elsewhere);
        assert_eq!(anchor_target(""), AnchorTarget::Elsewhere);
    }
}
