//! Generic visibility watching.
//!
//! The browser original leaned on `IntersectionObserver`; here the same
//! contract is a plain state machine. Register a target with a threshold
//! list, feed it visibility-ratio samples as the page scrolls, and get a
//! [`Crossing`] back whenever the ratio moves across one of the
//! configured thresholds. Samples that stay inside the same threshold
//! band are silent.

use std::collections::HashMap;

/// Fraction of the region `[top, top + height)` that lies inside the
/// viewport `[scroll_y, scroll_y + viewport_h)`. Clamped to `0.0..=1.0`;
/// a zero-height region is never visible.
pub fn visible_ratio(top: f64, height: f64, scroll_y: f64, viewport_h: f64) -> f64 {
    if height <= 0.0 || viewport_h <= 0.0 {
        return 0.0;
    }
    let visible_top = top.max(scroll_y);
    let visible_bottom = (top + height).min(scroll_y + viewport_h);
    ((visible_bottom - visible_top) / height).clamp(0.0, 1.0)
}

/// Emitted when a target's visibility ratio crosses a configured threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct Crossing {
    /// The sampled visibility ratio that triggered the notification
    pub ratio: f64,
}

struct Target {
    thresholds: Vec<f64>,
    last_band: Option<usize>,
}

impl Target {
    /// Number of thresholds at or below the ratio. Two ratios in the same
    /// band have not crossed anything between them.
    fn band(&self, ratio: f64) -> usize {
        self.thresholds.iter().filter(|t| ratio >= **t).count()
    }
}

/// Tracks visibility-threshold crossings for a set of named targets.
#[derive(Default)]
pub struct VisibilityWatcher {
    targets: HashMap<String, Target>,
}

impl VisibilityWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target with the thresholds to watch. Re-registering
    /// resets the target's crossing history.
    pub fn observe(&mut self, id: impl Into<String>, thresholds: &[f64]) {
        let mut thresholds = thresholds.to_vec();
        thresholds.sort_by(|a, b| a.total_cmp(b));
        self.targets.insert(
            id.into(),
            Target {
                thresholds,
                last_band: None,
            },
        );
    }

    /// Stop watching a target. Subsequent samples for it are ignored.
    pub fn unobserve(&mut self, id: &str) {
        self.targets.remove(id);
    }

    pub fn is_observing(&self, id: &str) -> bool {
        self.targets.contains_key(id)
    }

    /// Feed one visibility sample. The first sample for a target always
    /// reports; afterwards only threshold crossings do.
    pub fn sample(&mut self, id: &str, ratio: f64) -> Option<Crossing> {
        let target = self.targets.get_mut(id)?;
        let band = target.band(ratio);
        if target.last_band == Some(band) {
            return None;
        }
        target.last_band = Some(band);
        Some(Crossing { ratio })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_fully_visible() {
        assert_eq!(visible_ratio(100.0, 200.0, 0.0, 800.0), 1.0);
    }

    #[test]
    fn ratio_scrolled_past() {
        assert_eq!(visible_ratio(0.0, 400.0, 1000.0, 800.0), 0.0);
    }

    #[test]
    fn ratio_partial_overlap() {
        // Region 0..400, viewport starts at 300: 100px of 400 remain.
        let r = visible_ratio(0.0, 400.0, 300.0, 800.0);
        assert!((r - 0.25).abs() < 1e-9);
    }

    #[test]
    fn ratio_zero_height_region() {
        assert_eq!(visible_ratio(100.0, 0.0, 0.0, 800.0), 0.0);
    }

    #[test]
    fn first_sample_always_reports() {
        let mut watcher = VisibilityWatcher::new();
        watcher.observe("hero", &[0.0, 0.2, 1.0]);
        assert!(watcher.sample("hero", 1.0).is_some());
    }

    #[test]
    fn same_band_is_silent() {
        let mut watcher = VisibilityWatcher::new();
        watcher.observe("hero", &[0.0, 0.2, 1.0]);
        watcher.sample("hero", 0.5);
        assert_eq!(watcher.sample("hero", 0.6), None);
        assert_eq!(watcher.sample("hero", 0.21), None);
    }

    #[test]
    fn crossing_reports_ratio() {
        let mut watcher = VisibilityWatcher::new();
        watcher.observe("hero", &[0.0, 0.2, 1.0]);
        watcher.sample("hero", 0.5);
        let crossing = watcher.sample("hero", 0.1).expect("crossed 0.2");
        assert_eq!(crossing.ratio, 0.1);
        assert!(watcher.sample("hero", 0.5).is_some());
    }

    #[test]
    fn unobserved_target_is_ignored() {
        let mut watcher = VisibilityWatcher::new();
        watcher.observe("hero", &[0.2]);
        watcher.unobserve("hero");
        assert!(!watcher.is_observing("hero"));
        assert_eq!(watcher.sample("hero", 0.0), None);
    }
}
