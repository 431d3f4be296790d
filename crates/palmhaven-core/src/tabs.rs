//! Room gallery tab state.
//!
//! One tab and its matching content panel are active at a time. The
//! initially active tab is whatever the markup seeds; every click after
//! that moves the single active marker.

/// Tab strip over a fixed set of tab identifiers.
#[derive(Clone, Debug, PartialEq)]
pub struct TabStrip {
    tabs: Vec<String>,
    active: String,
}

impl TabStrip {
    /// Build a strip with `initial` as the seeded active tab.
    pub fn new(tabs: impl IntoIterator<Item = impl Into<String>>, initial: impl Into<String>) -> Self {
        Self {
            tabs: tabs.into_iter().map(Into::into).collect(),
            active: initial.into(),
        }
    }

    /// Activate a tab. Unknown identifiers are ignored so a stale click
    /// cannot clear the active pair.
    pub fn activate(&mut self, id: &str) {
        if self.tabs.iter().any(|t| t == id) {
            self.active = id.to_string();
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> TabStrip {
        TabStrip::new(["standard", "deluxe-suite", "premium-view"], "standard")
    }

    #[test]
    fn initial_active_comes_from_markup() {
        assert_eq!(strip().active(), "standard");
    }

    #[test]
    fn activate_moves_the_single_marker() {
        let mut tabs = strip();
        tabs.activate("premium-view");
        assert!(tabs.is_active("premium-view"));
        assert!(!tabs.is_active("standard"));
        let active_count = tabs.tabs().iter().filter(|t| tabs.is_active(t)).count();
        assert_eq!(active_count, 1);
    }

    #[test]
    fn unknown_tab_is_ignored() {
        let mut tabs = strip();
        tabs.activate("penthouse");
        assert_eq!(tabs.active(), "standard");
    }
}
