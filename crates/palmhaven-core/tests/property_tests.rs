//! Property-based tests for the widget state types
//!
//! Uses proptest to verify the slider, tab, modal, reveal, and pricing
//! invariants under arbitrary event sequences.

use proptest::prelude::*;

use palmhaven_core::{
    nightly_rate, BookingRequest, ContactMethod, ContactSelection, ModalKind, ModalRegistry,
    RevealTracker, SliderState, StripGeometry, TabStrip, WheelAction,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Operations that can be performed on the slider
#[derive(Debug, Clone)]
enum SliderOp {
    Next,
    Prev,
    Jump(usize),
}

fn slider_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<SliderOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => Just(SliderOp::Next),
            2 => Just(SliderOp::Prev),
            1 => (0..20usize).prop_map(SliderOp::Jump),
        ],
        0..max_ops,
    )
}

/// Operations on the modal registry
#[derive(Debug, Clone)]
enum ModalOp {
    OpenBooking,
    OpenContact,
    CloseAll,
}

fn modal_ops_strategy() -> impl Strategy<Value = Vec<ModalOp>> {
    prop::collection::vec(
        prop_oneof![
            Just(ModalOp::OpenBooking),
            Just(ModalOp::OpenContact),
            Just(ModalOp::CloseAll),
        ],
        0..30,
    )
}

fn room_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("standard".to_string()),
        Just("deluxe-suite".to_string()),
        Just("premium-view".to_string()),
        "[a-z-]{0,20}",
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The slide index stays in [0, count) under any event sequence
    #[test]
    fn slider_index_stays_in_range(count in 1..12usize, ops in slider_ops_strategy(40)) {
        let mut slider = SliderState::new(count);
        for op in ops {
            match op {
                SliderOp::Next => slider.next(),
                SliderOp::Prev => slider.prev(),
                SliderOp::Jump(i) => slider.jump(i),
            }
            prop_assert!(slider.current() < count);
        }
    }

    /// Advancing count times returns to the starting slide
    #[test]
    fn slider_next_cycles(count in 1..12usize, start in 0..12usize) {
        let mut slider = SliderState::new(count);
        slider.jump(start % count);
        let origin = slider.current();
        for _ in 0..count {
            slider.next();
        }
        prop_assert_eq!(slider.current(), origin);
    }

    /// prev is the inverse of next
    #[test]
    fn slider_prev_undoes_next(count in 1..12usize, start in 0..12usize) {
        let mut slider = SliderState::new(count);
        slider.jump(start % count);
        let origin = slider.current();
        slider.next();
        slider.prev();
        prop_assert_eq!(slider.current(), origin);
    }

    /// The total is always rate * nights, and the rate is from the table
    #[test]
    fn booking_total_is_rate_times_nights(room in room_strategy(), nights in 1..365u32) {
        let request = BookingRequest {
            room: room.clone(),
            arrival: "2026-11-02".to_string(),
            nights,
        };
        let estimate = request.validate().unwrap();
        prop_assert_eq!(estimate.rate, nightly_rate(&room));
        prop_assert_eq!(estimate.total, estimate.rate * u64::from(nights));
        prop_assert!([2_000, 3_000, 4_500].contains(&estimate.rate));
    }

    /// A "deluxe" substring always wins over "premium"
    #[test]
    fn booking_deluxe_takes_precedence(prefix in "[a-z]{0,5}", suffix in "[a-z]{0,5}") {
        let room = format!("{}deluxe{}premium{}", prefix, suffix, prefix);
        prop_assert_eq!(nightly_rate(&room), 3_000);
    }

    /// After any operation sequence the overlay is visible iff a modal is
    #[test]
    fn modal_overlay_matches_dialogs(ops in modal_ops_strategy()) {
        let mut modals = ModalRegistry::new();
        for op in ops {
            match op {
                ModalOp::OpenBooking => modals.open(ModalKind::Booking),
                ModalOp::OpenContact => modals.open(ModalKind::Contact),
                ModalOp::CloseAll => modals.close_all(),
            }
            let any = modals.is_open(ModalKind::Booking) || modals.is_open(ModalKind::Contact);
            prop_assert_eq!(modals.any_open(), any);
        }
        modals.close_all();
        prop_assert!(!modals.any_open());
    }

    /// A section reveals at most once under any ratio sequence
    #[test]
    fn reveal_is_one_shot(ratios in prop::collection::vec(0.0..1.0f64, 1..50)) {
        let mut reveal = RevealTracker::new();
        reveal.observe("spa");
        let mut reveals = 0;
        for ratio in &ratios {
            if reveal.sample("spa", *ratio) {
                reveals += 1;
            }
            // Once revealed, stays revealed.
            if reveals > 0 {
                prop_assert!(reveal.is_revealed("spa"));
            }
        }
        prop_assert!(reveals <= 1);
        let crossed = ratios.iter().any(|r| *r >= RevealTracker::THRESHOLD);
        prop_assert_eq!(reveals == 1, crossed);
    }

    /// Exactly one tab is active after any click sequence
    #[test]
    fn tabs_exactly_one_active(clicks in prop::collection::vec(0..5usize, 0..25)) {
        let names = ["standard", "deluxe-suite", "premium-view"];
        let mut tabs = TabStrip::new(names, "standard");
        for click in clicks {
            // Out-of-range clicks simulate stale identifiers.
            let id = names.get(click).copied().unwrap_or("unknown");
            tabs.activate(id);
            let active = names.iter().filter(|n| tabs.is_active(n)).count();
            prop_assert_eq!(active, 1);
        }
    }

    /// The strip never scrolls horizontally past an edge in the
    /// direction of travel
    #[test]
    fn strip_respects_edges(
        scroll_left in 0.0..1400.0f64,
        delta in -300.0..300.0f64,
    ) {
        let geo = StripGeometry {
            scroll_left,
            scroll_width: 2000.0,
            client_width: 600.0,
        };
        if let WheelAction::Horizontal(d) = geo.wheel_action(delta) {
            prop_assert_eq!(d, delta);
            if d > 0.0 {
                prop_assert!(!geo.at_end());
            } else {
                prop_assert!(!geo.at_start());
            }
        }
    }

    /// The rebuilt contact field list is always ordered email, phone,
    /// whatsapp regardless of toggle order
    #[test]
    fn contact_fields_keep_order(toggles in prop::collection::vec((0..3usize, any::<bool>()), 0..20)) {
        let mut selection = ContactSelection::new();
        for (method, checked) in toggles {
            selection.set(ContactMethod::ALL[method], checked);
            let fields = selection.rebuild();
            let positions: Vec<usize> = fields
                .iter()
                .map(|f| ContactMethod::ALL.iter().position(|m| *m == f.method).unwrap())
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            prop_assert_eq!(positions, sorted);
            prop_assert_eq!(
                fields.len(),
                ContactMethod::ALL.iter().filter(|m| selection.is_checked(**m)).count()
            );
        }
    }
}
