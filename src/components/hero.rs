//! Hero banner.

use dioxus::prelude::*;
use palmhaven_core::ModalKind;

use crate::context::use_modals;

#[derive(Props, Clone, PartialEq)]
pub struct HeroProps {
    /// Mirrors the nav's scrolled state for the logo/title animation
    pub scrolled: bool,
}

/// Full-height hero banner with the booking call to action.
#[component]
pub fn Hero(props: HeroProps) -> Element {
    let mut modals = use_modals();

    rsx! {
        header {
            id: "home",
            class: if props.scrolled { "home scrolled" } else { "home" },

            h1 { class: "home__title", "Palm Haven" }
            p { class: "home__tagline",
                "Backwater calm and sea breeze, minutes from Kochi."
            }

            button {
                r#type: "button",
                class: "btn btn--cta btn--show-modal",
                onclick: move |_| modals.write().open(ModalKind::Booking),
                "Book Your Stay"
            }
        }
    }
}
