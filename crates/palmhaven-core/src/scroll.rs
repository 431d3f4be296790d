//! Scroll-driven page state.
//!
//! Three trackers, all fed from the same scroll probe:
//!
//! - [`HeroState`] collapses the nav once the hero banner is mostly
//!   scrolled out of view.
//! - [`SectionTracker`] decides which nav link is the active one.
//! - [`RevealTracker`] un-hides each section the first time it becomes
//!   sufficiently visible, then forgets about it.

use std::collections::HashSet;

use crate::watch::VisibilityWatcher;

const HERO_TARGET: &str = "hero";

/// Nav/hero "scrolled" state, driven by the hero banner's visibility.
///
/// The hero is watched at the 0%, 20% and 100% visibility thresholds;
/// whenever one is crossed the scrolled flag becomes "less than 20%
/// visible". Between crossings the flag is stable, so callers can apply
/// CSS classes only when [`HeroState::sample`] reports a change.
pub struct HeroState {
    watcher: VisibilityWatcher,
    scrolled: bool,
}

impl HeroState {
    /// Visibility thresholds watched on the hero banner.
    pub const THRESHOLDS: [f64; 3] = [0.0, 0.2, 1.0];

    /// Ratio below which the nav collapses to its scrolled style.
    pub const SCROLLED_BELOW: f64 = 0.2;

    pub fn new() -> Self {
        let mut watcher = VisibilityWatcher::new();
        watcher.observe(HERO_TARGET, &Self::THRESHOLDS);
        Self {
            watcher,
            scrolled: false,
        }
    }

    /// Feed the hero's current visibility ratio. Returns the new scrolled
    /// flag when a threshold crossing changed it, `None` otherwise.
    pub fn sample(&mut self, ratio: f64) -> Option<bool> {
        let crossing = self.watcher.sample(HERO_TARGET, ratio)?;
        let scrolled = crossing.ratio < Self::SCROLLED_BELOW;
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            return Some(scrolled);
        }
        None
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

impl Default for HeroState {
    fn default() -> Self {
        Self::new()
    }
}

/// Vertical span of one page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Picks the active nav link from the scroll position.
///
/// A section is active while `scroll_y + 200` falls inside its span. The
/// last section is additionally forced active once the page is scrolled
/// to within 5px of its bottom, so a short final section still gets its
/// link highlighted. When no span matches, the previous pick stands.
pub struct SectionTracker {
    spans: Vec<SectionSpan>,
    active: Option<String>,
}

impl SectionTracker {
    /// Offset added to the scroll position before the span scan.
    pub const ACTIVATION_OFFSET: f64 = 200.0;

    /// Distance from the page bottom that force-activates the last section.
    pub const BOTTOM_SLACK: f64 = 5.0;

    pub fn new(spans: Vec<SectionSpan>) -> Self {
        Self {
            spans,
            active: None,
        }
    }

    /// Replace the measured spans, e.g. after a window resize.
    pub fn set_spans(&mut self, spans: Vec<SectionSpan>) {
        self.spans = spans;
    }

    /// Recompute the active section for a scroll position. Returns the
    /// active section id (unchanged if nothing matched this time).
    pub fn update(&mut self, scroll_y: f64, viewport_h: f64, page_h: f64) -> Option<&str> {
        let probe = scroll_y + Self::ACTIVATION_OFFSET;
        let at_bottom = scroll_y + viewport_h >= page_h - Self::BOTTOM_SLACK;

        for (i, span) in self.spans.iter().enumerate() {
            let is_last = i == self.spans.len() - 1;
            if span.contains(probe) || (is_last && at_bottom) {
                self.active = Some(span.id.clone());
            }
        }
        self.active.as_deref()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}

/// One-shot section reveal at 15% visibility.
pub struct RevealTracker {
    watcher: VisibilityWatcher,
    revealed: HashSet<String>,
}

impl RevealTracker {
    /// Visibility ratio at which a hidden section is revealed.
    pub const THRESHOLD: f64 = 0.15;

    pub fn new() -> Self {
        Self {
            watcher: VisibilityWatcher::new(),
            revealed: HashSet::new(),
        }
    }

    /// Start watching a hidden section. Already-revealed sections are not
    /// re-registered.
    pub fn observe(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.revealed.contains(&id) {
            self.watcher.observe(id, &[Self::THRESHOLD]);
        }
    }

    /// Feed a visibility sample. Returns `true` exactly once per section,
    /// when it first reaches the reveal threshold; the section is then
    /// dropped from observation for good.
    pub fn sample(&mut self, id: &str, ratio: f64) -> bool {
        let Some(crossing) = self.watcher.sample(id, ratio) else {
            return false;
        };
        if crossing.ratio < Self::THRESHOLD {
            return false;
        }
        self.watcher.unobserve(id);
        self.revealed.insert(id.to_string());
        tracing::debug!(section = id, "revealing section");
        true
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new("home", 0.0, 800.0),
            SectionSpan::new("rooms", 800.0, 1200.0),
            SectionSpan::new("facilities", 2000.0, 900.0),
            SectionSpan::new("contact", 2900.0, 100.0),
        ]
    }

    #[test]
    fn hero_collapses_below_threshold() {
        let mut hero = HeroState::new();
        assert_eq!(hero.sample(1.0), None); // first crossing, still visible
        assert_eq!(hero.sample(0.1), Some(true));
        assert!(hero.is_scrolled());
    }

    #[test]
    fn hero_restores_above_threshold() {
        let mut hero = HeroState::new();
        hero.sample(1.0);
        hero.sample(0.05);
        assert_eq!(hero.sample(0.5), Some(false));
        assert!(!hero.is_scrolled());
    }

    #[test]
    fn hero_is_quiet_within_band() {
        let mut hero = HeroState::new();
        hero.sample(0.5);
        assert_eq!(hero.sample(0.6), None);
        assert_eq!(hero.sample(0.9), None);
    }

    #[test]
    fn tracker_picks_section_containing_offset_probe() {
        let mut tracker = SectionTracker::new(spans());
        // scroll_y 700 + 200 = 900, inside "rooms"
        assert_eq!(tracker.update(700.0, 800.0, 3000.0), Some("rooms"));
    }

    #[test]
    fn tracker_keeps_previous_when_nothing_matches() {
        // A single short span: once scrolled past it (and not at the page
        // bottom), the previous pick stays rather than clearing.
        let mut tracker = SectionTracker::new(vec![SectionSpan::new("home", 0.0, 300.0)]);
        tracker.update(0.0, 50.0, 4000.0);
        assert_eq!(tracker.active(), Some("home"));
        tracker.update(2000.0, 50.0, 4000.0);
        assert_eq!(tracker.active(), Some("home"));
    }

    #[test]
    fn tracker_forces_last_section_at_page_bottom() {
        let mut tracker = SectionTracker::new(spans());
        // "contact" is only 100px tall; probe overshoots it, but the
        // viewport bottom is within 5px of the page end.
        assert_eq!(tracker.update(2200.0, 800.0, 3000.0), Some("contact"));
    }

    #[test]
    fn tracker_starts_with_no_active_link() {
        let tracker = SectionTracker::new(spans());
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn reveal_fires_once() {
        let mut reveal = RevealTracker::new();
        reveal.observe("rooms");
        assert!(!reveal.sample("rooms", 0.0));
        assert!(reveal.sample("rooms", 0.3));
        assert!(reveal.is_revealed("rooms"));
        // Further samples, even below threshold, never un-reveal.
        assert!(!reveal.sample("rooms", 0.0));
        assert!(reveal.is_revealed("rooms"));
    }

    #[test]
    fn reveal_ignores_reregistration() {
        let mut reveal = RevealTracker::new();
        reveal.observe("rooms");
        reveal.sample("rooms", 1.0);
        reveal.observe("rooms");
        assert!(!reveal.sample("rooms", 0.0));
        assert!(reveal.is_revealed("rooms"));
    }
}
