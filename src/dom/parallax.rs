use web_sys::{Document, Element};

use super::{offset_top, query_all, rect_of, set_style, toggle_class};
use crate::engine::chrome::HeroFade;
use crate::engine::parallax::{LayerMeasure, ParallaxLayer};
use crate::engine::ScrollSnapshot;

struct Host {
    element: Element,
    target: Element,
    speed: f64,
}

/// A parallax layer bound to the elements it matched.
pub struct ParallaxBinding {
    layer: ParallaxLayer,
    hosts: Vec<Host>,
}

impl ParallaxBinding {
    pub fn mount(document: &Document, layer: ParallaxLayer) -> Self {
        let hosts = query_all(document, layer.selector)
            .into_iter()
            .filter_map(|element| {
                let target = match layer.apply_to {
                    Some(selector) => element.query_selector(selector).ok().flatten()?,
                    None => element.clone(),
                };
                let raw_speed = layer
                    .speed
                    .attr_name()
                    .and_then(|name| element.get_attribute(name));
                let speed = layer.speed.resolve(raw_speed.as_deref());
                Some(Host {
                    element,
                    target,
                    speed,
                })
            })
            .collect();
        Self { layer, hosts }
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn on_frame(&self, snapshot: &ScrollSnapshot) {
        if !self.layer.enabled_for(snapshot) {
            return;
        }
        for host in &self.hosts {
            let Some(rect) = rect_of(&host.element) else {
                continue;
            };
            let measure = LayerMeasure {
                element_top: offset_top(&host.element),
                rect,
            };
            if let Some(write) = self.layer.compute(snapshot, &measure, host.speed) {
                set_style(&host.target, &write);
            }
        }
    }
}

/// Home hero: overlay and content switch to their scrolled look together.
pub struct HeroFadeBinding {
    fade: HeroFade,
    scrolled: Vec<Element>,
    indicator: Option<Element>,
    last: Option<bool>,
}

impl HeroFadeBinding {
    pub fn mount(document: &Document, fade: HeroFade) -> Option<Self> {
        let scrolled: Vec<Element> = HeroFade::SCROLLED
            .iter()
            .filter_map(|selector| document.query_selector(selector).ok().flatten())
            .collect();
        // All three parts or nothing.
        if scrolled.len() != HeroFade::SCROLLED.len() {
            return None;
        }
        let indicator = document.query_selector(HeroFade::INDICATOR).ok().flatten();
        Some(Self {
            fade,
            scrolled,
            indicator,
            last: None,
        })
    }

    pub fn on_frame(&mut self, snapshot: &ScrollSnapshot) {
        let is_scrolled = self.fade.is_scrolled(snapshot.scroll_y);
        if self.last == Some(is_scrolled) {
            return;
        }
        self.last = Some(is_scrolled);
        for element in &self.scrolled {
            toggle_class(element, "scrolled", is_scrolled);
        }
        if let Some(indicator) = &self.indicator {
            toggle_class(indicator, "hidden", is_scrolled);
        }
    }
}
