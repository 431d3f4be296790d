//! Tabbed room gallery.
//!
//! One tab per room category; clicking a tab swaps which content panel
//! carries the active class. All panels stay mounted so the swap is a
//! pure CSS display change, like the original markup.

use dioxus::prelude::*;
use palmhaven_core::{booking, nightly_rate, TabStrip, ROOM_CATEGORIES};

/// Per-room copy shown in the content panels.
const ROOM_DETAILS: [(&str, &str); 3] = [
    (
        "standard",
        "Garden-facing room with a queen bed, rain shower, and a private sit-out opening onto the coconut grove.",
    ),
    (
        "deluxe-suite",
        "Corner suite above the backwater jetty: separate living area, soaking tub, and floor-to-ceiling lagoon views.",
    ),
    (
        "premium-view",
        "Top-floor suite with a wraparound terrace over the Arabian Sea, plunge pool, and butler service.",
    ),
];

/// Room gallery with category tabs.
#[component]
pub fn RoomTabs() -> Element {
    let mut tabs = use_signal(|| {
        TabStrip::new(ROOM_CATEGORIES.map(|(value, _)| value), ROOM_CATEGORIES[0].0)
    });

    rsx! {
        div { class: "rooms",
            div { class: "tabs",
                for (value, label) in ROOM_CATEGORIES {
                    button {
                        key: "{value}",
                        r#type: "button",
                        class: if tabs.read().is_active(value) { "tab tab--active" } else { "tab" },
                        onclick: move |_| tabs.write().activate(value),
                        "{label}"
                    }
                }
            }

            for (value, detail) in ROOM_DETAILS {
                div {
                    key: "{value}",
                    class: if tabs.read().is_active(value) {
                        "rooms__content content--active"
                    } else {
                        "rooms__content"
                    },

                    p { class: "rooms__detail", "{detail}" }
                    p { class: "rooms__rate",
                        "{booking::format_rupees(nightly_rate(value))} / night"
                    }
                }
            }
        }
    }
}
