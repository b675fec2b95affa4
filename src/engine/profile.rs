//! Per-page effect configurations.
//!
//! The four pages were tuned separately (different thresholds, counter
//! curves, back-to-top styling). Each keeps its own profile here rather than
//! being folded into one shared behaviour.

use super::chrome::{BackToTopVariant, HeroFade};
use super::counter::CounterProfile;
use super::parallax::{Gate, Origin, ParallaxLayer, Property, Speed, DEFAULT_SPEED};
use super::reveal::{Cascade, Presentation, RevealConfig};
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterBinding {
    /// Number element inside the host; the host itself when `None`.
    pub number_selector: Option<&'static str>,
    /// Only hosts carrying this class start a counter.
    pub host_class: Option<&'static str>,
    pub profile: CounterProfile,
}

/// A set of elements revealed together under one trigger configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchGroup {
    pub selector: &'static str,
    pub config: RevealConfig,
    pub presentation: Option<Presentation>,
    pub stagger_ms: u32,
    pub counter: Option<CounterBinding>,
    pub cascade: Option<Cascade>,
    /// Apply the cascade's initial styles to the children at mount.
    pub prepare_cascade: bool,
}

impl WatchGroup {
    fn new(selector: &'static str, config: RevealConfig) -> Self {
        Self {
            selector,
            config,
            presentation: None,
            stagger_ms: 0,
            counter: None,
            cascade: None,
            prepare_cascade: false,
        }
    }

    fn presenting(mut self, presentation: Presentation) -> Self {
        self.presentation = Some(presentation);
        self
    }

    fn staggered(mut self, stagger_ms: u32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    fn counting(mut self, counter: CounterBinding) -> Self {
        self.counter = Some(counter);
        self
    }

    fn cascading(mut self, cascade: Cascade, prepare: bool) -> Self {
        self.cascade = Some(cascade);
        self.prepare_cascade = prepare;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageEffects {
    pub name: &'static str,
    pub groups: Vec<WatchGroup>,
    pub parallax: Vec<ParallaxLayer>,
    pub hero_fade: Option<HeroFade>,
    pub back_to_top: BackToTopVariant,
    /// Anchor clicks also record the hash in history.
    pub push_anchor_history: bool,
}

const VISIBLE: Presentation = Presentation::Class("visible");

const RISE: Presentation = Presentation::FadeSlide {
    from: "translateY(30px)",
    to: "translateY(0)",
    duration_ms: 600,
    stagger_ms: 100,
};

impl PageEffects {
    pub fn home() -> Self {
        Self {
            name: "home",
            groups: vec![
                WatchGroup::new(
                    ".fade-in, .slide-up, .fade-in-up, .fade-in-left, .fade-in-right, .zoom-in, .pop-in, .slide-in-left, .slide-in-right",
                    RevealConfig::new(0.1, 100.0),
                )
                .presenting(VISIBLE),
                WatchGroup::new(".count-up", RevealConfig::new(0.5, 0.0)).counting(CounterBinding {
                    number_selector: Some(".stat-number"),
                    host_class: None,
                    profile: CounterProfile::LINEAR_FRAMES,
                }),
            ],
            parallax: vec![
                ParallaxLayer {
                    selector: "#hero",
                    apply_to: None,
                    speed: Speed::Fixed(DEFAULT_SPEED),
                    origin: Origin::Page,
                    property: Property::BackgroundPositionY,
                    gate: Gate::Always,
                    min_viewport_width: None,
                },
                ParallaxLayer {
                    selector: "#services-bg, #stats-bg",
                    apply_to: None,
                    speed: Speed::Fixed(DEFAULT_SPEED),
                    origin: Origin::ElementTop,
                    property: Property::BackgroundPositionY,
                    gate: Gate::InViewport,
                    min_viewport_width: None,
                },
                ParallaxLayer {
                    selector: ".parallax-bg",
                    apply_to: None,
                    speed: Speed::Fixed(DEFAULT_SPEED),
                    origin: Origin::PageInverted,
                    property: Property::TranslateY,
                    gate: Gate::InViewport,
                    min_viewport_width: None,
                },
            ],
            hero_fade: Some(HeroFade::default()),
            back_to_top: BackToTopVariant::Fade,
            push_anchor_history: true,
        }
    }

    pub fn about() -> Self {
        Self {
            name: "about",
            groups: vec![WatchGroup::new(
                ".slide-in-left, .slide-in-right, .counter-item, .facility-item, .team-member",
                RevealConfig::new(0.15, 100.0),
            )
            .presenting(VISIBLE)
            .counting(CounterBinding {
                number_selector: Some(".stat-number"),
                host_class: Some("counter-item"),
                profile: CounterProfile::EASED,
            })],
            parallax: vec![ParallaxLayer {
                selector: ".parallax-section",
                apply_to: Some(".parallax-bg"),
                speed: Speed::Attr {
                    name: "data-speed",
                    default: DEFAULT_SPEED,
                },
                origin: Origin::ElementTop,
                property: Property::TranslateY,
                gate: Gate::InViewport,
                min_viewport_width: None,
            }],
            hero_fade: None,
            back_to_top: BackToTopVariant::Display { hover_shadow: false },
            push_anchor_history: false,
        }
    }

    pub fn services() -> Self {
        Self {
            name: "services",
            groups: vec![
                WatchGroup::new(".fade-in-up", RevealConfig::new(0.15, 50.0))
                    .presenting(VISIBLE)
                    .staggered(100),
                WatchGroup::new(".service-card", RevealConfig::new(0.2, 0.0)).presenting(
                    Presentation::PausedKeyframes {
                        keyframes: "slideInUp",
                        duration_ms: 600,
                        stagger_ms: 200,
                    },
                ),
                WatchGroup::new(".stat-number", RevealConfig::new(0.5, 0.0)).counting(CounterBinding {
                    number_selector: None,
                    host_class: None,
                    profile: CounterProfile::LINEAR_STEPS,
                }),
            ],
            parallax: vec![ParallaxLayer {
                selector: ".services-hero",
                apply_to: None,
                speed: Speed::Fixed(DEFAULT_SPEED),
                origin: Origin::Page,
                property: Property::BackgroundPositionY,
                gate: Gate::Always,
                min_viewport_width: Some(config::PARALLAX_MIN_VIEWPORT_WIDTH),
            }],
            hero_fade: None,
            back_to_top: BackToTopVariant::Display { hover_shadow: true },
            push_anchor_history: false,
        }
    }

    pub fn contact() -> Self {
        Self {
            name: "contact",
            groups: vec![
                WatchGroup::new(
                    ".info-card, .service-item, .faq-item, .map-info-item",
                    RevealConfig::new(0.1, 50.0),
                )
                .presenting(RISE),
                WatchGroup::new(".map-section", RevealConfig::new(0.3, 0.0)).cascading(
                    Cascade {
                        child_selector: ".map-info-item",
                        step_ms: 150,
                        presentation: RISE,
                    },
                    false,
                ),
                WatchGroup::new(".gallery-grid", RevealConfig::new(0.2, 0.0)).cascading(
                    Cascade {
                        child_selector: ".gallery-item",
                        step_ms: 100,
                        presentation: Presentation::FadeSlide {
                            from: "scale(0.9)",
                            to: "scale(1)",
                            duration_ms: 500,
                            stagger_ms: 0,
                        },
                    },
                    true,
                ),
                WatchGroup::new("img[loading=\"lazy\"]", RevealConfig::new(0.0, 0.0))
                    .presenting(Presentation::Class("loaded")),
            ],
            parallax: vec![ParallaxLayer {
                selector: ".contact-hero",
                apply_to: None,
                speed: Speed::Fixed(DEFAULT_SPEED),
                origin: Origin::Page,
                property: Property::TranslateY,
                gate: Gate::FirstViewport,
                min_viewport_width: None,
            }],
            hero_fade: None,
            back_to_top: BackToTopVariant::Display { hover_shadow: false },
            push_anchor_history: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::counter::{Cadence, Easing};

    fn counter_profiles(page: &PageEffects) -> Vec<CounterProfile> {
        page.groups
            .iter()
            .filter_map(|g| g.counter.map(|c| c.profile))
            .collect()
    }

    #[test]
    fn each_page_keeps_its_own_counter_flavour() {
        assert_eq!(counter_profiles(&PageEffects::home())[0].easing, Easing::Linear);
        assert_eq!(counter_profiles(&PageEffects::about())[0].easing, Easing::EaseOutQuad);
        assert_eq!(
            counter_profiles(&PageEffects::services())[0].cadence,
            Cadence::Interval { every_ms: 40 }
        );
        assert!(counter_profiles(&PageEffects::contact()).is_empty());
    }

    #[test]
    fn every_group_does_something() {
        for page in [
            PageEffects::home(),
            PageEffects::about(),
            PageEffects::services(),
            PageEffects::contact(),
        ] {
            for group in &page.groups {
                assert!(!group.selector.is_empty());
                assert!(
                    group.presentation.is_some() || group.counter.is_some() || group.cascade.is_some(),
                    "{}: {} has no effect",
                    page.name,
                    group.selector
                );
            }
        }
    }

    #[test]
    fn only_home_fades_its_hero() {
        assert!(PageEffects::home().hero_fade.is_some());
        assert!(PageEffects::about().hero_fade.is_none());
        assert_eq!(PageEffects::home().back_to_top, BackToTopVariant::Fade);
    }
}
