use crate::config;

/// Scroll offsets above which the page chrome changes state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeThresholds {
    pub nav: f64,
    pub back_to_top: f64,
}

impl Default for ChromeThresholds {
    fn default() -> Self {
        Self {
            nav: config::NAV_SCROLLED_THRESHOLD,
            back_to_top: config::BACK_TO_TOP_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromeState {
    pub nav_scrolled: bool,
    pub back_to_top_visible: bool,
}

impl ChromeThresholds {
    /// Both thresholds are strict: exactly 50px is not "scrolled".
    pub fn evaluate(&self, scroll_y: f64) -> ChromeState {
        ChromeState {
            nav_scrolled: scroll_y > self.nav,
            back_to_top_visible: scroll_y > self.back_to_top,
        }
    }
}

/// How a page's back-to-top button shows, hides and reacts to hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackToTopVariant {
    /// `display: none` / `display: block`.
    Display { hover_shadow: bool },
    /// Fades through opacity and visibility.
    Fade,
}

impl BackToTopVariant {
    pub fn visibility_style(&self, visible: bool) -> &'static str {
        match (self, visible) {
            (Self::Display { .. }, true) => "display: block;",
            (Self::Display { .. }, false) => "display: none;",
            (Self::Fade, true) => "opacity: 1; visibility: visible;",
            (Self::Fade, false) => "opacity: 0; visibility: hidden;",
        }
    }

    pub fn hover_style(&self, hovered: bool) -> &'static str {
        let has_shadow = matches!(self, Self::Fade | Self::Display { hover_shadow: true });
        match (hovered, has_shadow) {
            (true, true) => "transform: scale(1.1) translateY(-5px); box-shadow: 0 6px 20px rgba(12, 22, 36, 0.4);",
            (true, false) => "transform: scale(1.1) translateY(-5px);",
            (false, true) => "transform: scale(1) translateY(0); box-shadow: 0 4px 12px rgba(12, 22, 36, 0.3);",
            (false, false) => "transform: scale(1) translateY(0);",
        }
    }
}

/// Hero section on the home page fades its overlay once the user scrolls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFade {
    pub threshold: f64,
}

impl Default for HeroFade {
    fn default() -> Self {
        Self {
            threshold: config::NAV_SCROLLED_THRESHOLD,
        }
    }
}

impl HeroFade {
    pub const SCROLLED: [&'static str; 3] = [".hero-section", ".hero-overlay", ".hero-content"];
    pub const INDICATOR: &'static str = ".scroll-indicator";

    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_threshold_is_strict() {
        let t = ChromeThresholds::default();
        assert!(!t.evaluate(49.0).nav_scrolled);
        assert!(!t.evaluate(50.0).nav_scrolled);
        assert!(t.evaluate(51.0).nav_scrolled);
    }

    #[test]
    fn back_to_top_threshold_is_strict() {
        let t = ChromeThresholds::default();
        assert!(!t.evaluate(299.0).back_to_top_visible);
        assert!(!t.evaluate(300.0).back_to_top_visible);
        assert!(t.evaluate(301.0).back_to_top_visible);
        assert!(t.evaluate(301.0).nav_scrolled);
    }

    #[test]
    fn back_to_top_variants_render_their_own_styles() {
        let display = BackToTopVariant::Display { hover_shadow: false };
        assert_eq!(display.visibility_style(true), "display: block;");
        assert!(!display.hover_style(true).contains("box-shadow"));
        assert!(BackToTopVariant::Fade.visibility_style(false).contains("visibility: hidden"));
        assert!(BackToTopVariant::Fade.hover_style(false).contains("box-shadow"));
    }

    #[test]
    fn hero_fade_matches_nav_threshold() {
        let hero = HeroFade::default();
        assert!(!hero.is_scrolled(50.0));
        assert!(hero.is_scrolled(50.5));
    }
}
