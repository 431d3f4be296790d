//! Horizontally-scrolling facilities strip.
//!
//! Wheel input over the strip scrolls it sideways instead of scrolling
//! the page, until the strip reaches the edge in the direction of
//! travel; there the event falls through so the page keeps moving. The
//! strip's scroll metrics are re-measured on every strip scroll, so the
//! edge decision always uses fresh geometry.

use dioxus::document;
use dioxus::html::geometry::WheelDelta;
use dioxus::prelude::*;
use palmhaven_core::{StripGeometry, WheelAction};
use serde::Deserialize;

const STRIP_ID: &str = "facilities-strip";

/// Pixels per wheel "line" / "page" when the webview reports
/// non-pixel deltas.
const LINE_PIXELS: f64 = 40.0;
const PAGE_PIXELS: f64 = 800.0;

const FACILITIES: [(&str, &str); 6] = [
    (
        "Infinity Pool",
        "Salt-water pool merging into the backwater horizon, open sunrise to sunset.",
    ),
    (
        "Ayurvedic Spa",
        "Traditional Kerala treatments with resident therapists and a steam garden.",
    ),
    (
        "Jetty Dining",
        "Seafood grilled to order at the end of our private jetty, best at dusk.",
    ),
    (
        "Cycling Trails",
        "Guided village and paddy-field rides every morning, cycles on the house.",
    ),
    (
        "Kids' Cove",
        "Shaded play lagoon with lifeguards, craft corner, and a treehouse.",
    ),
    (
        "Houseboat Cruises",
        "Half-day kettuvallam cruises through the canals, lunch on board.",
    ),
];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StripMetrics {
    scroll_left: f64,
    scroll_width: f64,
    client_width: f64,
}

/// Re-read the strip's scroll metrics from the DOM.
async fn measure(mut geometry: Signal<StripGeometry>) {
    let mut eval = document::eval(&format!(
        r#"
        const strip = document.getElementById('{STRIP_ID}');
        if (strip) {{
            dioxus.send({{
                scrollLeft: strip.scrollLeft,
                scrollWidth: strip.scrollWidth,
                clientWidth: strip.clientWidth,
            }});
        }}
        "#
    ));
    match eval.recv::<StripMetrics>().await {
        Ok(metrics) => geometry.set(StripGeometry {
            scroll_left: metrics.scroll_left,
            scroll_width: metrics.scroll_width,
            client_width: metrics.client_width,
        }),
        Err(e) => tracing::warn!("Failed to measure facilities strip: {:?}", e),
    }
}

/// Facilities cards in a wheel-driven horizontal strip.
#[component]
pub fn FacilitiesStrip() -> Element {
    let geometry = use_signal(|| StripGeometry {
        scroll_left: 0.0,
        scroll_width: 0.0,
        client_width: 0.0,
    });

    // Initial measurement once the strip is in the DOM.
    use_effect(move || {
        spawn(measure(geometry));
    });

    let on_wheel = move |e: WheelEvent| {
        let delta_y = match e.data().delta() {
            WheelDelta::Pixels(p) => p.y,
            WheelDelta::Lines(l) => l.y * LINE_PIXELS,
            WheelDelta::Pages(p) => p.y * PAGE_PIXELS,
        };

        match geometry().wheel_action(delta_y) {
            WheelAction::Horizontal(delta) => {
                e.prevent_default();
                document::eval(&format!(
                    "document.getElementById('{STRIP_ID}')?.scrollBy({{ left: {delta}, behavior: 'smooth' }});"
                ));
            }
            WheelAction::Vertical => {}
        }
    };

    rsx! {
        div {
            id: "{STRIP_ID}",
            class: "facilities__strip",
            onwheel: on_wheel,
            onscroll: move |_| {
                spawn(measure(geometry));
            },

            for (name, blurb) in FACILITIES {
                article { key: "{name}", class: "facility",
                    h3 { class: "facility__name", "{name}" }
                    p { class: "facility__blurb", "{blurb}" }
                }
            }
        }
    }
}
