//! Modal dialog shell.
//!
//! Panel rendered above the shared overlay. Clicks inside the panel are
//! stopped so the overlay's click-to-close cannot fire through it; the
//! close button delegates to the caller, which closes globally.

use dioxus::prelude::*;

use crate::components::CloseButton;

/// Properties for the modal shell
#[derive(Clone, PartialEq, Props)]
pub struct ModalShellProps {
    /// Dialog title
    pub title: String,
    /// Extra class on the panel, e.g. "modal--booking"
    #[props(default)]
    pub class: Option<String>,
    /// Dialog body
    pub children: Element,
    /// Called by the close button; the caller closes all modals
    pub on_close: EventHandler<()>,
}

/// Modal dialog panel
#[component]
pub fn ModalShell(props: ModalShellProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let panel_class = if extra_class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {}", extra_class)
    };

    rsx! {
        div {
            class: "{panel_class}",
            role: "dialog",
            "aria-label": "{props.title}",
            onclick: move |e| e.stop_propagation(),

            header { class: "modal__header",
                h3 { class: "modal__title", "{props.title}" }
                CloseButton { onclick: move |_| props.on_close.call(()) }
            }

            div { class: "modal__body",
                {props.children}
            }
        }
    }
}
