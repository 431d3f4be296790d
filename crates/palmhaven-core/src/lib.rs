//! Palm Haven Core Library
//!
//! Widget state and booking logic for the Palm Haven resort site.
//!
//! ## Overview
//!
//! The desktop app renders a single marketing page: a sticky nav with a
//! scroll-tracked active link, sections that reveal on first visibility,
//! a tabbed room gallery, a horizontally-scrolling facilities strip, a
//! testimonial slider, and booking/contact modal dialogs with client-side
//! pricing. This crate holds all of that behavior as plain state types so
//! it can be exercised without a webview; the `palmhaven` binary wires
//! these types to DOM events and CSS classes.
//!
//! ## Quick Start
//!
//! ```
//! use palmhaven_core::{BookingRequest, SliderState};
//!
//! let mut slider = SliderState::new(3);
//! slider.next();
//! assert_eq!(slider.current(), 1);
//!
//! let request = BookingRequest {
//!     room: "deluxe-suite".into(),
//!     arrival: "2026-11-02".into(),
//!     nights: 3,
//! };
//! let estimate = request.validate().unwrap();
//! assert_eq!(estimate.total, 9_000);
//! ```

pub mod booking;
pub mod contact;
pub mod error;
pub mod modal;
pub mod reviews;
pub mod scroll;
pub mod slider;
pub mod strip;
pub mod tabs;
pub mod watch;

// Re-exports
pub use booking::{nightly_rate, BookingEstimate, BookingRequest, ROOM_CATEGORIES};
pub use contact::{ContactField, ContactMethod, ContactSelection};
pub use error::{SiteError, SiteResult};
pub use modal::{ModalKind, ModalRegistry};
pub use reviews::{top_reviews, Review};
pub use scroll::{HeroState, RevealTracker, SectionSpan, SectionTracker};
pub use slider::SliderState;
pub use strip::{StripGeometry, WheelAction};
pub use tabs::TabStrip;
pub use watch::{visible_ratio, Crossing, VisibilityWatcher};
