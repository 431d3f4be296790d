//! Booking confirmation dialog.
//!
//! Shows the priced estimate read-only, lets the guest pick how to be
//! contacted, and confirms. The contact fields are rebuilt from the
//! checkbox state on every change, always in the order email, phone,
//! WhatsApp, regardless of which box was toggled.

use dioxus::document;
use dioxus::prelude::*;
use palmhaven_core::{ContactMethod, ContactSelection};
use palmhaven_ui::{ContactFieldInput, Input, ModalShell};

use super::booking_form::alert;
use crate::context::{use_estimate, use_modals};

/// Booking estimate + confirmation dialog.
#[component]
pub fn BookingModal() -> Element {
    let mut modals = use_modals();
    let estimate = use_estimate();

    let mut selection = use_signal(ContactSelection::new);
    let mut email_value = use_signal(String::new);
    let mut phone_value = use_signal(String::new);
    let mut whatsapp_value = use_signal(String::new);

    let on_method_change = move |(method, checked): (ContactMethod, bool)| {
        selection.write().set(method, checked);
        // The rebuilt field list lands in the DOM on the next render;
        // bring the newest field into view once it is there.
        document::eval(
            "requestAnimationFrame(() => {
                const fields = document.querySelectorAll('.form__field--contact');
                fields[fields.length - 1]?.scrollIntoView({ behavior: 'smooth', block: 'end' });
            });",
        );
    };

    let on_confirm = move |_: FormEvent| {
        alert("Booking confirmed! \u{1F389}");
        modals.write().close_all();
    };

    let est = estimate();
    let room = est.as_ref().map(|e| e.room_display_name()).unwrap_or_default();
    let arrival = est.as_ref().map(|e| e.arrival.clone()).unwrap_or_default();
    let nights = est.as_ref().map(|e| e.nights.to_string()).unwrap_or_default();

    rsx! {
        ModalShell {
            title: "Your Stay at Palm Haven".to_string(),
            class: "modal--booking".to_string(),
            on_close: move |_| modals.write().close_all(),

            form { id: "modal-booking-form", onsubmit: on_confirm,
                Input {
                    value: room,
                    oninput: move |_| {},
                    label: "Room".to_string(),
                    id: "modal-room".to_string(),
                    readonly: true,
                }
                Input {
                    value: arrival,
                    oninput: move |_| {},
                    label: "Arrival".to_string(),
                    input_type: "date".to_string(),
                    id: "modal-arrival".to_string(),
                    readonly: true,
                }
                Input {
                    value: nights,
                    oninput: move |_| {},
                    label: "Nights".to_string(),
                    id: "modal-duration".to_string(),
                    readonly: true,
                }

                if let Some(est) = est.as_ref() {
                    p { class: "availability", "{est.availability_message()}" }
                    p { class: "price__description", "{est.price_description()}" }
                    p { class: "price__total", "{est.format_total()}" }
                }

                fieldset { class: "contact-methods",
                    legend { class: "form__label", "How should we confirm?" }
                    for method in ContactMethod::ALL {
                        label { key: "{method.label()}",
                            input {
                                r#type: "checkbox",
                                name: "contactMethod",
                                checked: selection.read().is_checked(method),
                                // Checkbox value arrives as "true"/"false".
                                onchange: move |e: FormEvent| {
                                    on_method_change((method, e.value() == "true"));
                                },
                            }
                            "{method.label()}"
                        }
                    }
                }

                div { id: "contact-fields",
                    for field in selection.read().rebuild() {
                        {
                            let method = field.method;
                            let name = field.name;
                            rsx! {
                                ContactFieldInput {
                                    key: "{name}",
                                    field: field,
                                    value: match method {
                                        ContactMethod::Email => email_value(),
                                        ContactMethod::Phone => phone_value(),
                                        ContactMethod::Whatsapp => whatsapp_value(),
                                    },
                                    oninput: move |v| match method {
                                        ContactMethod::Email => email_value.set(v),
                                        ContactMethod::Phone => phone_value.set(v),
                                        ContactMethod::Whatsapp => whatsapp_value.set(v),
                                    },
                                }
                            }
                        }
                    }
                }

                button {
                    r#type: "submit",
                    class: "btn btn--cta",
                    "Confirm Booking"
                }
            }
        }
    }
}
