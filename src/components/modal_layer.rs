//! Modal layer: shared overlay, open dialogs, and global close triggers.
//!
//! Closing is always global. The overlay click and the Escape key both
//! call `close_all`, and Escape only acts while something is open, so a
//! stray keypress never touches the registry.

use dioxus::document;
use dioxus::prelude::*;
use palmhaven_core::ModalKind;

use crate::components::{BookingModal, ContactModal};
use crate::context::use_modals;

/// Overlay plus whichever dialogs are open.
#[component]
pub fn ModalLayer() -> Element {
    let mut modals = use_modals();

    // Escape closes everything, from anywhere on the page.
    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(
                "window.addEventListener('keydown', (e) => {
                    if (e.key === 'Escape') dioxus.send(true);
                });",
            );
            while eval.recv::<bool>().await.is_ok() {
                if modals.peek().any_open() {
                    modals.write().close_all();
                }
            }
        });
    });

    if !modals.read().any_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "overlay",
            onclick: move |_| modals.write().close_all(),

            if modals.read().is_open(ModalKind::Booking) {
                BookingModal {}
            }
            if modals.read().is_open(ModalKind::Contact) {
                ContactModal {}
            }
        }
    }
}
