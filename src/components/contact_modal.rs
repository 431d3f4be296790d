//! Contact dialog.

use dioxus::prelude::*;
use palmhaven_ui::ModalShell;

use crate::context::use_modals;

/// Contact details dialog, opened from the footer.
#[component]
pub fn ContactModal() -> Element {
    let mut modals = use_modals();

    rsx! {
        ModalShell {
            title: "Contact Palm Haven".to_string(),
            class: "modal--contact".to_string(),
            on_close: move |_| modals.write().close_all(),

            p { "Our front desk answers around the clock." }
            ul { class: "contact-list",
                li { "Reservations: +91 484 246 8000" }
                li { "Email: stay@palmhaven.example" }
                li { "Vypin Island, Kochi, Kerala 682508" }
            }
        }
    }
}
