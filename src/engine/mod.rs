//! DOM-free core of the scroll effects.
//!
//! Everything in here is plain data and arithmetic so it can be exercised
//! with `cargo test` on the host. The `dom` module feeds it measurements taken
//! from the browser and writes the results back.

pub mod chrome;
pub mod counter;
pub mod frame;
pub mod parallax;
pub mod profile;
pub mod reveal;

/// Everything a per-frame handler needs to know about the window.
/// Read once per animation frame and shared by every handler of that tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub viewport_width: f64,
}

impl ScrollSnapshot {
    pub fn new(scroll_y: f64, viewport_height: f64, viewport_width: f64) -> Self {
        Self {
            scroll_y,
            viewport_height,
            viewport_width,
        }
    }
}

/// Element box relative to the viewport, as `getBoundingClientRect` reports it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// True when any part of the box overlaps the vertical extent of the viewport.
    pub fn intersects_viewport(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom() > 0.0
    }
}

/// Parses a numeric `data-*` attribute the forgiving way the markup expects:
/// anything missing, unparsable or negative becomes `None`.
pub(crate) fn parse_number_attr(raw: Option<&str>) -> Option<f64> {
    let value = raw?.trim().parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_viewport_intersection_is_exclusive_at_edges() {
        let vh = 800.0;
        assert!(Rect::new(799.0, 0.0, 100.0, 50.0).intersects_viewport(vh));
        assert!(!Rect::new(800.0, 0.0, 100.0, 50.0).intersects_viewport(vh));
        assert!(!Rect::new(-50.0, 0.0, 100.0, 50.0).intersects_viewport(vh));
        assert!(Rect::new(-49.0, 0.0, 100.0, 50.0).intersects_viewport(vh));
    }

    #[test]
    fn number_attrs_degrade_to_none() {
        assert_eq!(parse_number_attr(Some("25")), Some(25.0));
        assert_eq!(parse_number_attr(Some(" 0.3 ")), Some(0.3));
        assert_eq!(parse_number_attr(Some("abc")), None);
        assert_eq!(parse_number_attr(Some("-4")), None);
        assert_eq!(parse_number_attr(None), None);
    }
}
