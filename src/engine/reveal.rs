use super::{Rect, ScrollSnapshot};

/// When an element counts as "in view".
///
/// Mirrors an intersection observer with a single threshold and a negative
/// bottom root margin: the viewport is shrunk by `bottom_margin` pixels so
/// elements trigger slightly after their top edge appears.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub bottom_margin: f64,
}

impl RevealConfig {
    pub const fn new(threshold: f64, bottom_margin: f64) -> Self {
        Self {
            threshold,
            bottom_margin,
        }
    }

    /// Fraction of the element's area inside the (shrunken) viewport.
    pub fn intersection_ratio(&self, rect: &Rect, snapshot: &ScrollSnapshot) -> f64 {
        let root_bottom = (snapshot.viewport_height - self.bottom_margin).max(0.0);
        let root_right = snapshot.viewport_width;

        let visible_h = rect.bottom().min(root_bottom) - rect.top.max(0.0);
        let visible_w = rect.right().min(root_right) - rect.left.max(0.0);

        let area = rect.width * rect.height;
        if area <= 0.0 {
            // Empty boxes are either fully in or fully out.
            let inside = rect.top >= 0.0
                && rect.top <= root_bottom
                && rect.left >= 0.0
                && rect.left <= root_right;
            return if inside { 1.0 } else { 0.0 };
        }
        if visible_h <= 0.0 || visible_w <= 0.0 {
            return 0.0;
        }
        ((visible_h * visible_w) / area).min(1.0)
    }

    pub fn is_in_view(&self, rect: &Rect, snapshot: &ScrollSnapshot) -> bool {
        let ratio = self.intersection_ratio(rect, snapshot);
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// Inline style property write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleWrite {
    pub property: &'static str,
    pub value: String,
}

impl StyleWrite {
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealWrite {
    AddClass(&'static str),
    Styles(Vec<StyleWrite>),
}

/// How an element goes from hidden to its final look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Stylesheet does the work, we only add a class.
    Class(&'static str),
    /// Inline opacity/transform transition, delayed `stagger_ms` per element.
    FadeSlide {
        from: &'static str,
        to: &'static str,
        duration_ms: u32,
        stagger_ms: u32,
    },
    /// Keyframe animation installed paused and resumed on reveal.
    PausedKeyframes {
        keyframes: &'static str,
        duration_ms: u32,
        stagger_ms: u32,
    },
}

impl Presentation {
    /// Initial inline styles for the `index`-th element of a group.
    pub fn prepare(&self, index: usize) -> Vec<StyleWrite> {
        match *self {
            Presentation::Class(_) => Vec::new(),
            Presentation::FadeSlide {
                from,
                duration_ms,
                stagger_ms,
                ..
            } => {
                let delay = index as u32 * stagger_ms;
                vec![
                    StyleWrite::new("opacity", "0"),
                    StyleWrite::new("transform", from),
                    StyleWrite::new(
                        "transition",
                        format!(
                            "opacity {d}ms ease {delay}ms, transform {d}ms ease {delay}ms",
                            d = duration_ms
                        ),
                    ),
                ]
            }
            Presentation::PausedKeyframes {
                keyframes,
                duration_ms,
                stagger_ms,
            } => {
                let delay = index as u32 * stagger_ms;
                vec![StyleWrite::new(
                    "animation",
                    format!("{keyframes} {duration_ms}ms ease-out {delay}ms both paused"),
                )]
            }
        }
    }

    pub fn reveal(&self) -> RevealWrite {
        match *self {
            Presentation::Class(class) => RevealWrite::AddClass(class),
            Presentation::FadeSlide { to, .. } => RevealWrite::Styles(vec![
                StyleWrite::new("opacity", "1"),
                StyleWrite::new("transform", to),
            ]),
            Presentation::PausedKeyframes { .. } => {
                RevealWrite::Styles(vec![StyleWrite::new("animation-play-state", "running")])
            }
        }
    }
}

/// A host that, once revealed, reveals its children one after another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cascade {
    pub child_selector: &'static str,
    pub step_ms: u32,
    pub presentation: Presentation,
}

impl Cascade {
    pub fn delay_for(&self, index: usize) -> u32 {
        index as u32 * self.step_ms
    }
}

#[derive(Debug)]
pub struct WatchedElement<T> {
    pub item: T,
    visible: bool,
}

impl<T> WatchedElement<T> {
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTransition {
    pub index: usize,
    /// Delay before the presentation is applied (stagger within one batch).
    pub delay_ms: u32,
}

/// Tracks which elements of a group have been revealed.
///
/// Visibility only ever goes from false to true. Elements already revealed
/// are not measured again.
#[derive(Debug)]
pub struct RevealTracker<T> {
    elements: Vec<WatchedElement<T>>,
    config: RevealConfig,
    stagger_ms: u32,
    pending: usize,
}

impl<T> RevealTracker<T> {
    pub fn new(items: Vec<T>, config: RevealConfig, stagger_ms: u32) -> Self {
        let pending = items.len();
        Self {
            elements: items
                .into_iter()
                .map(|item| WatchedElement {
                    item,
                    visible: false,
                })
                .collect(),
            config,
            stagger_ms,
            pending,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, index: usize) -> Option<&WatchedElement<T>> {
        self.elements.get(index)
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Nothing left to reveal: the caller can stop observing.
    pub fn is_exhausted(&self) -> bool {
        self.pending == 0
    }

    /// Measures every element still hidden and reports the ones that have
    /// just come into view. `measure` returning `None` (element gone from the
    /// layout) leaves that element hidden.
    pub fn evaluate<F>(&mut self, snapshot: &ScrollSnapshot, mut measure: F) -> Vec<RevealTransition>
    where
        F: FnMut(&T) -> Option<Rect>,
    {
        let mut transitions = Vec::new();
        for (index, element) in self.elements.iter_mut().enumerate() {
            if element.visible {
                continue;
            }
            let Some(rect) = measure(&element.item) else {
                continue;
            };
            if self.config.is_in_view(&rect, snapshot) {
                element.visible = true;
                self.pending -= 1;
                transitions.push(RevealTransition {
                    index,
                    delay_ms: transitions.len() as u32 * self.stagger_ms,
                });
            }
        }
        transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VIEW: ScrollSnapshot = ScrollSnapshot {
        scroll_y: 0.0,
        viewport_height: 800.0,
        viewport_width: 1200.0,
    };

    /// Page-space layout: (document top, height). Rects are derived from scroll.
    fn layout_rect(doc_top: f64, height: f64, scroll_y: f64) -> Rect {
        Rect::new(doc_top - scroll_y, 0.0, 600.0, height)
    }

    #[test]
    fn bottom_margin_shrinks_the_viewport() {
        let config = RevealConfig::new(0.1, 100.0);
        // 200px box with its top at 650: 50px inside the shrunken 700px root.
        let rect = Rect::new(650.0, 0.0, 100.0, 200.0);
        assert_eq!(config.intersection_ratio(&rect, &VIEW), 0.25);
        // Top at 690: only 10px of 200 inside, 5% < 10%.
        let rect = Rect::new(690.0, 0.0, 100.0, 200.0);
        assert!(!config.is_in_view(&rect, &VIEW));
    }

    #[test]
    fn elements_in_view_at_load_reveal_on_first_evaluation() {
        let docs = vec![(100.0, 200.0), (500.0, 200.0), (1500.0, 200.0)];
        let mut tracker = RevealTracker::new(docs, RevealConfig::new(0.15, 100.0), 0);
        let revealed = tracker.evaluate(&VIEW, |(top, h)| Some(layout_rect(*top, *h, 0.0)));
        let indices: Vec<usize> = revealed.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(tracker.pending(), 1);
    }

    #[test]
    fn visibility_is_monotonic_and_reported_once() {
        let mut tracker = RevealTracker::new(vec![(1000.0, 200.0)], RevealConfig::new(0.1, 0.0), 0);
        let mut reports = 0;
        for scroll in [0.0, 600.0, 3000.0, 0.0, 600.0, 3000.0, 600.0] {
            let snap = ScrollSnapshot::new(scroll, 800.0, 1200.0);
            reports += tracker
                .evaluate(&snap, |(top, h)| Some(layout_rect(*top, *h, scroll)))
                .len();
        }
        assert_eq!(reports, 1);
        assert!(tracker.element(0).unwrap().is_visible());
        assert!(tracker.is_exhausted());
    }

    #[test]
    fn revealed_elements_are_not_measured_again() {
        let mut tracker = RevealTracker::new(vec![0.0, 5000.0], RevealConfig::new(0.1, 0.0), 0);
        let mut measured = Vec::new();
        for _ in 0..3 {
            tracker.evaluate(&VIEW, |top| {
                measured.push(*top);
                Some(layout_rect(*top, 100.0, 0.0))
            });
        }
        assert_eq!(measured, vec![0.0, 5000.0, 5000.0, 5000.0]);
    }

    #[test]
    fn batch_reveals_are_staggered() {
        let tops = vec![0.0, 150.0, 300.0];
        let mut tracker = RevealTracker::new(tops, RevealConfig::new(0.15, 50.0), 100);
        let delays: Vec<u32> = tracker
            .evaluate(&VIEW, |top| Some(layout_rect(*top, 100.0, 0.0)))
            .iter()
            .map(|t| t.delay_ms)
            .collect();
        assert_eq!(delays, vec![0, 100, 200]);
    }

    #[test]
    fn missing_measurements_leave_elements_hidden() {
        let mut tracker = RevealTracker::new(vec![(); 2], RevealConfig::new(0.1, 0.0), 0);
        assert!(tracker.evaluate(&VIEW, |_| None).is_empty());
        assert_eq!(tracker.pending(), 2);
    }

    #[test]
    fn presentations_prepare_and_reveal() {
        let fade = Presentation::FadeSlide {
            from: "translateY(30px)",
            to: "translateY(0)",
            duration_ms: 600,
            stagger_ms: 100,
        };
        let prepared = fade.prepare(3);
        assert_eq!(prepared[2].value, "opacity 600ms ease 300ms, transform 600ms ease 300ms");
        assert_eq!(
            fade.reveal(),
            RevealWrite::Styles(vec![
                StyleWrite::new("opacity", "1"),
                StyleWrite::new("transform", "translateY(0)"),
            ])
        );

        let cards = Presentation::PausedKeyframes {
            keyframes: "slideInUp",
            duration_ms: 600,
            stagger_ms: 200,
        };
        assert_eq!(cards.prepare(2)[0].value, "slideInUp 600ms ease-out 400ms both paused");
        assert!(Presentation::Class("visible").prepare(7).is_empty());
        assert_eq!(Presentation::Class("visible").reveal(), RevealWrite::AddClass("visible"));
    }
}
