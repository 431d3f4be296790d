//! Modal dialog registry.
//!
//! The booking and contact dialogs share one overlay. Opening either
//! shows it together with the overlay; every close trigger (close
//! button, overlay click, Escape) closes everything at once, so the
//! overlay can never be left orphaned behind a hidden dialog.

/// The dialogs the site knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Booking,
    Contact,
}

/// Visibility state for all dialogs plus the shared overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ModalRegistry {
    booking: bool,
    contact: bool,
}

impl ModalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, kind: ModalKind) {
        match kind {
            ModalKind::Booking => self.booking = true,
            ModalKind::Contact => self.contact = true,
        }
    }

    /// Close every dialog. Global regardless of which dialog triggered it.
    pub fn close_all(&mut self) {
        self.booking = false;
        self.contact = false;
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Booking => self.booking,
            ModalKind::Contact => self.contact,
        }
    }

    /// Whether any dialog, and therefore the overlay, is visible.
    pub fn any_open(&self) -> bool {
        self.booking || self.contact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_shows_modal_and_overlay() {
        let mut modals = ModalRegistry::new();
        modals.open(ModalKind::Booking);
        assert!(modals.is_open(ModalKind::Booking));
        assert!(!modals.is_open(ModalKind::Contact));
        assert!(modals.any_open());
    }

    #[test]
    fn close_is_global() {
        let mut modals = ModalRegistry::new();
        modals.open(ModalKind::Booking);
        modals.open(ModalKind::Contact);
        modals.close_all();
        assert!(!modals.is_open(ModalKind::Booking));
        assert!(!modals.is_open(ModalKind::Contact));
        assert!(!modals.any_open());
    }

    #[test]
    fn overlay_tracks_dialog_visibility() {
        let mut modals = ModalRegistry::new();
        assert!(!modals.any_open());
        modals.open(ModalKind::Contact);
        assert!(modals.any_open());
        modals.close_all();
        assert!(!modals.any_open());
    }
}
