use super::parse_number_attr;

/// Marker class set on a number element once its count-up has started.
pub const COUNTED_CLASS: &str = "counted";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// `t * (2 - t)`: fast start, gentle finish. Values are rounded.
    EaseOutQuad,
    /// Straight line. Values are floored so the display never runs ahead.
    Linear,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::EaseOutQuad => t * (2.0 - t),
            Easing::Linear => t,
        }
    }

    fn quantize(self, raw: f64) -> f64 {
        match self {
            Easing::EaseOutQuad => raw.round(),
            Easing::Linear => raw.floor(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationRule {
    /// `clamp(target * per_unit_ms, min_ms, max_ms)`
    Scaled { per_unit_ms: f64, min_ms: f64, max_ms: f64 },
    Fixed(f64),
}

impl DurationRule {
    pub const GENTLE: DurationRule = DurationRule::Scaled {
        per_unit_ms: 30.0,
        min_ms: 2000.0,
        max_ms: 8000.0,
    };

    pub fn resolve(&self, target: u64) -> f64 {
        match *self {
            DurationRule::Scaled { per_unit_ms, min_ms, max_ms } => {
                (target as f64 * per_unit_ms).clamp(min_ms, max_ms)
            }
            DurationRule::Fixed(ms) => ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    AnimationFrame,
    Interval { every_ms: u32 },
}

/// One page's flavour of count-up: which attributes it reads, how it
/// eases and how often it repaints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterProfile {
    pub target_attr: &'static str,
    pub suffix_attr: Option<&'static str>,
    pub duration_attr: Option<&'static str>,
    pub easing: Easing,
    pub duration: DurationRule,
    pub cadence: Cadence,
}

impl CounterProfile {
    /// About page: eased, duration scales with the value.
    pub const EASED: CounterProfile = CounterProfile {
        target_attr: "data-target",
        suffix_attr: Some("data-suffix"),
        duration_attr: Some("data-duration"),
        easing: Easing::EaseOutQuad,
        duration: DurationRule::GENTLE,
        cadence: Cadence::AnimationFrame,
    };

    /// Home page stats: linear over two seconds, repainted every frame.
    pub const LINEAR_FRAMES: CounterProfile = CounterProfile {
        target_attr: "data-count",
        suffix_attr: None,
        duration_attr: None,
        easing: Easing::Linear,
        duration: DurationRule::Fixed(2000.0),
        cadence: Cadence::AnimationFrame,
    };

    /// Services page stats: 50 linear steps over two seconds.
    pub const LINEAR_STEPS: CounterProfile = CounterProfile {
        target_attr: "data-target",
        suffix_attr: Some("data-suffix"),
        duration_attr: None,
        easing: Easing::Linear,
        duration: DurationRule::Fixed(2000.0),
        cadence: Cadence::Interval { every_ms: 40 },
    };

    /// Builds a setup from the element's attributes. Missing or malformed
    /// values fall back to 0, no suffix and the profile's duration rule.
    pub fn setup_from_attrs<F>(&self, attr: F) -> CounterSetup
    where
        F: Fn(&str) -> Option<String>,
    {
        let target = parse_number_attr(attr(self.target_attr).as_deref())
            .map(|v| v.trunc() as u64)
            .unwrap_or(0);
        let suffix = self.suffix_attr.and_then(&attr).unwrap_or_default();
        let duration_ms = self
            .duration_attr
            .and_then(|name| parse_number_attr(attr(name).as_deref()))
            .filter(|ms| *ms > 0.0);

        CounterSetup {
            target,
            suffix,
            duration_ms,
            easing: self.easing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterSetup {
    pub target: u64,
    pub suffix: String,
    pub duration_ms: Option<f64>,
    pub easing: Easing,
}

impl CounterSetup {
    pub fn effective_duration(&self, rule: &DurationRule) -> f64 {
        self.duration_ms.unwrap_or_else(|| rule.resolve(self.target))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    /// New text for the element, `None` if the displayed value did not change.
    pub text: Option<String>,
    pub done: bool,
}

/// A running count-up. Feed it timestamps, write out whatever text it returns.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    suffix: String,
    easing: Easing,
    duration_ms: f64,
    start_ms: f64,
    last_shown: Option<u64>,
    finished: bool,
}

impl CounterAnimation {
    pub fn start(setup: &CounterSetup, rule: &DurationRule, now_ms: f64) -> Self {
        Self {
            target: setup.target,
            suffix: setup.suffix.clone(),
            easing: setup.easing,
            duration_ms: setup.effective_duration(rule),
            start_ms: now_ms,
            last_shown: None,
            finished: false,
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now_ms: f64) -> u64 {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return self.target;
        }
        let raw = self.target as f64 * self.easing.apply(progress);
        (self.easing.quantize(raw) as u64).min(self.target)
    }

    pub fn frame(&mut self, now_ms: f64) -> CounterFrame {
        if self.finished {
            return CounterFrame { text: None, done: true };
        }
        let value = self.value_at(now_ms).max(self.last_shown.unwrap_or(0));
        let done = self.progress(now_ms) >= 1.0;
        self.finished = done;

        let text = if self.last_shown != Some(value) {
            self.last_shown = Some(value);
            Some(format!("{}{}", value, self.suffix))
        } else {
            None
        };
        CounterFrame { text, done }
    }
}

/// Anything that can carry the one-shot "counted" marker.
pub trait CountedMarker {
    fn is_counted(&self) -> bool;
    fn mark_counted(&self);
}

/// First call wins: returns true exactly once per marker.
pub fn claim<M: CountedMarker + ?Sized>(marker: &M) -> bool {
    if marker.is_counted() {
        return false;
    }
    marker.mark_counted();
    true
}
