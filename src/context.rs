//! Shared page state for the Palm Haven site.
//!
//! Provides the modal registry, the pending booking estimate, and the
//! review content to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In a component
//! let mut modals = use_modals();
//! modals.write().open(ModalKind::Booking);
//! ```

use dioxus::prelude::*;
use palmhaven_core::{BookingEstimate, ModalRegistry, Review};

/// Hook to access the modal registry from context.
///
/// Every open/close of the booking and contact dialogs goes through
/// this one signal so the overlay invariant holds globally.
pub fn use_modals() -> Signal<ModalRegistry> {
    use_context::<Signal<ModalRegistry>>()
}

/// Hook to access the pending booking estimate.
///
/// Set by the booking form on a valid submission, read by the booking
/// modal to populate its read-only fields. `None` until the first
/// successful submit.
pub fn use_estimate() -> Signal<Option<BookingEstimate>> {
    use_context::<Signal<Option<BookingEstimate>>>()
}

/// Hook to access the filtered, sorted review list for the slider.
pub fn use_reviews() -> Signal<Vec<Review>> {
    use_context::<Signal<Vec<Review>>>()
}
