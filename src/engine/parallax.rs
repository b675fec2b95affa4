use super::reveal::StyleWrite;
use super::{parse_number_attr, Rect, ScrollSnapshot};

pub const DEFAULT_SPEED: f64 = 0.5;

/// `(scroll - element_top) * speed`
pub fn anchored_offset(scroll_y: f64, element_top: f64, speed: f64) -> f64 {
    (scroll_y - element_top) * speed
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Speed {
    Fixed(f64),
    /// Read from a `data-*` attribute on the layer host.
    Attr { name: &'static str, default: f64 },
}

impl Speed {
    pub fn resolve(&self, attr_value: Option<&str>) -> f64 {
        match *self {
            Speed::Fixed(speed) => speed,
            Speed::Attr { default, .. } => parse_number_attr(attr_value).unwrap_or(default),
        }
    }

    pub fn attr_name(&self) -> Option<&'static str> {
        match *self {
            Speed::Attr { name, .. } => Some(name),
            Speed::Fixed(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Offset from the top of the page, for full-bleed heroes.
    Page,
    /// Same as `Page` but moving up instead of down.
    PageInverted,
    /// Offset relative to the element's own document position.
    ElementTop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    BackgroundPositionY,
    TranslateY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    /// Only while the host box overlaps the viewport.
    InViewport,
    /// Only while the page is scrolled less than one viewport height.
    FirstViewport,
}

/// A parallax background registered for a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    pub selector: &'static str,
    /// Child of the host that receives the write; the host itself if `None`.
    pub apply_to: Option<&'static str>,
    pub speed: Speed,
    pub origin: Origin,
    pub property: Property,
    pub gate: Gate,
    pub min_viewport_width: Option<f64>,
}

/// What the DOM layer measures for one host element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerMeasure {
    /// Document offset (`offsetTop`).
    pub element_top: f64,
    /// Viewport-relative box.
    pub rect: Rect,
}

impl ParallaxLayer {
    pub fn offset(&self, scroll_y: f64, element_top: f64, speed: f64) -> f64 {
        match self.origin {
            Origin::Page => scroll_y * speed,
            Origin::PageInverted => -(scroll_y * speed),
            Origin::ElementTop => anchored_offset(scroll_y, element_top, speed),
        }
    }

    /// Whether the layer is active at all for this viewport size.
    pub fn enabled_for(&self, snapshot: &ScrollSnapshot) -> bool {
        self.min_viewport_width
            .map_or(true, |min| snapshot.viewport_width > min)
    }

    fn passes_gate(&self, snapshot: &ScrollSnapshot, measure: &LayerMeasure) -> bool {
        match self.gate {
            Gate::Always => true,
            Gate::InViewport => measure.rect.intersects_viewport(snapshot.viewport_height),
            Gate::FirstViewport => snapshot.scroll_y < snapshot.viewport_height,
        }
    }

    /// The style write for this frame, or `None` when the layer is gated off.
    pub fn compute(&self, snapshot: &ScrollSnapshot, measure: &LayerMeasure, speed: f64) -> Option<StyleWrite> {
        if !self.enabled_for(snapshot) || !self.passes_gate(snapshot, measure) {
            return None;
        }
        let offset = self.offset(snapshot.scroll_y, measure.element_top, speed);
        Some(match self.property {
            Property::BackgroundPositionY => StyleWrite::new("background-position-y", format!("{}px", offset)),
            Property::TranslateY => StyleWrite::new("transform", format!("translateY({}px)", offset)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn layer(origin: Origin, gate: Gate) -> ParallaxLayer {
        ParallaxLayer {
            selector: "#stats-bg",
            apply_to: None,
            speed: Speed::Fixed(DEFAULT_SPEED),
            origin,
            property: Property::BackgroundPositionY,
            gate,
            min_viewport_width: None,
        }
    }

    fn measure_at(element_top: f64, height: f64, scroll_y: f64) -> LayerMeasure {
        LayerMeasure {
            element_top,
            rect: Rect::new(element_top - scroll_y, 0.0, 1200.0, height),
        }
    }

    #[test]
    fn anchored_offset_is_linear_in_scroll() {
        for scroll in [0.0, 100.0, 1234.5, 4000.0] {
            assert_eq!(anchored_offset(scroll, 1000.0, 0.5), (scroll - 1000.0) * 0.5);
        }
        assert_eq!(anchored_offset(1200.0, 1000.0, 0.25), 50.0);
    }

    #[test]
    fn element_layers_only_write_while_on_screen() {
        let stats = layer(Origin::ElementTop, Gate::InViewport);
        let snap = ScrollSnapshot::new(1400.0, 800.0, 1200.0);
        let write = stats.compute(&snap, &measure_at(1800.0, 600.0, 1400.0), 0.5);
        assert_eq!(write, Some(StyleWrite::new("background-position-y", "-200px")));

        let far = ScrollSnapshot::new(0.0, 800.0, 1200.0);
        assert_eq!(stats.compute(&far, &measure_at(1800.0, 600.0, 0.0), 0.5), None);
    }

    #[test]
    fn hero_variants() {
        let hero = layer(Origin::Page, Gate::Always);
        let snap = ScrollSnapshot::new(300.0, 800.0, 1200.0);
        assert_eq!(
            hero.compute(&snap, &measure_at(0.0, 600.0, 300.0), 0.5),
            Some(StyleWrite::new("background-position-y", "150px"))
        );

        let mut bg = layer(Origin::PageInverted, Gate::InViewport);
        bg.property = Property::TranslateY;
        assert_eq!(
            bg.compute(&snap, &measure_at(200.0, 600.0, 300.0), 0.5),
            Some(StyleWrite::new("transform", "translateY(-150px)"))
        );

        let mut contact = layer(Origin::Page, Gate::FirstViewport);
        contact.property = Property::TranslateY;
        let past = ScrollSnapshot::new(900.0, 800.0, 1200.0);
        assert_eq!(contact.compute(&past, &measure_at(0.0, 600.0, 900.0), 0.5), None);
    }

    #[test]
    fn narrow_screens_disable_width_gated_layers() {
        let mut hero = layer(Origin::Page, Gate::Always);
        hero.min_viewport_width = Some(768.0);
        let phone = ScrollSnapshot::new(100.0, 700.0, 768.0);
        assert_eq!(hero.compute(&phone, &measure_at(0.0, 500.0, 100.0), 0.5), None);
        let desktop = ScrollSnapshot::new(100.0, 700.0, 1024.0);
        assert!(hero.compute(&desktop, &measure_at(0.0, 500.0, 100.0), 0.5).is_some());
    }

    #[test]
    fn attr_speed_falls_back_to_default() {
        let speed = Speed::Attr {
            name: "data-speed",
            default: DEFAULT_SPEED,
        };
        assert_eq!(speed.resolve(Some("0.3")), 0.3);
        assert_eq!(speed.resolve(Some("fast")), DEFAULT_SPEED);
        assert_eq!(speed.resolve(None), DEFAULT_SPEED);
        assert_eq!(Speed::Fixed(0.2).resolve(Some("0.9")), 0.2);
    }
}
