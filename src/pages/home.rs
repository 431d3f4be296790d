//! The one page of the site.
//!
//! Assembles the sections and runs the scroll probe: a JS snippet that
//! reports scroll geometry on every scroll/resize, feeding the core
//! trackers (hero collapse, active nav link, section reveals). The
//! trackers live in the probe task; only their outputs are signals, so
//! a scroll event that changes nothing re-renders nothing.

use std::collections::HashSet;

use dioxus::document;
use dioxus::prelude::*;
use palmhaven_core::{
    visible_ratio, HeroState, ModalKind, RevealTracker, SectionSpan, SectionTracker,
};
use palmhaven_ui::{Button, ButtonVariant};
use serde::Deserialize;

use crate::components::{
    BookingForm, FacilitiesStrip, Hero, ModalLayer, NavBar, RevealSection, RoomTabs,
    TestimonialSlider,
};
use crate::context::use_modals;

/// Ids of the reveal-wrapped sections, in page order.
const REVEAL_SECTIONS: [&str; 4] = ["rooms", "facilities", "testimonials", "booking"];

/// Reports scroll geometry on every scroll and resize, plus once at
/// startup so the page state is right before the first scroll.
const PROBE_JS: &str = r#"
const sample = () => {
    const hero = document.getElementById('home');
    const spans = [...document.querySelectorAll('header[id], section[id], footer[id]')].map((el) => ({
        id: el.id,
        top: el.offsetTop,
        height: el.offsetHeight,
    }));
    dioxus.send({
        scrollY: window.scrollY,
        viewportH: window.innerHeight,
        pageH: document.documentElement.scrollHeight,
        heroTop: hero ? hero.offsetTop : 0,
        heroHeight: hero ? hero.offsetHeight : 0,
        spans,
    });
};
window.addEventListener('scroll', sample, { passive: true });
window.addEventListener('resize', sample);
sample();
"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScrollSample {
    scroll_y: f64,
    viewport_h: f64,
    page_h: f64,
    hero_top: f64,
    hero_height: f64,
    spans: Vec<SpanSample>,
}

#[derive(Debug, Deserialize)]
struct SpanSample {
    id: String,
    top: f64,
    height: f64,
}

/// Home page component.
#[component]
pub fn Home() -> Element {
    let mut modals = use_modals();
    let mut nav_scrolled = use_signal(|| false);
    let mut active_section = use_signal(|| Option::<String>::None);
    let mut revealed = use_signal(HashSet::<String>::new);

    use_effect(move || {
        spawn(async move {
            let mut hero = HeroState::new();
            let mut tracker = SectionTracker::new(Vec::new());
            let mut reveal = RevealTracker::new();
            for id in REVEAL_SECTIONS {
                reveal.observe(id);
            }

            let mut eval = document::eval(PROBE_JS);
            loop {
                let sample: ScrollSample = match eval.recv().await {
                    Ok(sample) => sample,
                    Err(e) => {
                        tracing::warn!("Scroll probe ended: {:?}", e);
                        break;
                    }
                };

                let hero_ratio = visible_ratio(
                    sample.hero_top,
                    sample.hero_height,
                    sample.scroll_y,
                    sample.viewport_h,
                );
                if let Some(scrolled) = hero.sample(hero_ratio) {
                    nav_scrolled.set(scrolled);
                }

                tracker.set_spans(
                    sample
                        .spans
                        .iter()
                        .map(|s| SectionSpan::new(s.id.clone(), s.top, s.height))
                        .collect(),
                );
                if let Some(id) = tracker.update(sample.scroll_y, sample.viewport_h, sample.page_h)
                {
                    if active_section.peek().as_deref() != Some(id) {
                        active_section.set(Some(id.to_string()));
                    }
                }

                for span in &sample.spans {
                    let ratio =
                        visible_ratio(span.top, span.height, sample.scroll_y, sample.viewport_h);
                    if reveal.sample(&span.id, ratio) {
                        revealed.write().insert(span.id.clone());
                    }
                }
            }
        });
    });

    rsx! {
        NavBar {
            scrolled: nav_scrolled(),
            active: active_section(),
        }

        Hero { scrolled: nav_scrolled() }

        RevealSection {
            id: "rooms".to_string(),
            title: "Rooms & Suites".to_string(),
            revealed: revealed.read().contains("rooms"),
            RoomTabs {}
        }

        RevealSection {
            id: "facilities".to_string(),
            title: "Facilities".to_string(),
            revealed: revealed.read().contains("facilities"),
            FacilitiesStrip {}
        }

        RevealSection {
            id: "testimonials".to_string(),
            title: "What Our Guests Say".to_string(),
            revealed: revealed.read().contains("testimonials"),
            TestimonialSlider {}
        }

        RevealSection {
            id: "booking".to_string(),
            title: "Plan Your Stay".to_string(),
            revealed: revealed.read().contains("booking"),
            BookingForm {}
        }

        footer { id: "contact", class: "footer",
            p { "Palm Haven, Vypin Island, Kochi" }
            Button {
                variant: ButtonVariant::Ghost,
                class: "btn--contact".to_string(),
                onclick: move |_| modals.write().open(ModalKind::Contact),
                "Contact Us"
            }
            p { class: "footer__note",
                "Estimates only - no reservation is made until our desk confirms."
            }
        }

        ModalLayer {}
    }
}
