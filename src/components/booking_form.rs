//! In-page booking form.
//!
//! Reads the room, arrival date, and night count; on a valid submit it
//! prices the stay and opens the confirmation dialog. Field presence is
//! enforced by the browser's native `required` validation before the
//! submit handler runs; the core validator re-checks anyway, matching
//! the shipped behavior.

use dioxus::document;
use dioxus::prelude::*;
use palmhaven_core::{BookingRequest, ModalKind, SiteError, ROOM_CATEGORIES};
use palmhaven_ui::{Input, SelectField, SelectOption};

use crate::context::{use_estimate, use_modals};

/// Show a blocking alert dialog, the site's only error surface beyond
/// native form validation.
pub(crate) fn alert(message: &str) {
    let quoted = serde_json::to_string(message).unwrap_or_default();
    document::eval(&format!("alert({quoted});"));
}

/// Booking form section body.
#[component]
pub fn BookingForm() -> Element {
    let mut modals = use_modals();
    let mut estimate = use_estimate();

    let mut room = use_signal(String::new);
    let mut arrival = use_signal(String::new);
    let mut nights = use_signal(String::new);

    let on_submit = move |_: FormEvent| {
        let request = BookingRequest {
            room: room(),
            arrival: arrival(),
            nights: nights().parse().unwrap_or(0),
        };

        match request.validate() {
            Ok(est) => {
                tracing::info!(
                    room = %est.room,
                    nights = est.nights,
                    total = est.total,
                    "Booking estimate prepared"
                );
                estimate.set(Some(est));
                modals.write().open(ModalKind::Booking);
            }
            Err(SiteError::IncompleteBooking(message)) => alert(&message),
            Err(e) => {
                tracing::warn!("Booking request rejected: {}", e);
                alert(&e.to_string());
            }
        }
    };

    rsx! {
        form { class: "booking__form", onsubmit: on_submit,
            SelectField {
                value: room(),
                onchange: move |v| room.set(v),
                label: "Room Category".to_string(),
                id: "room".to_string(),
                placeholder: "Select a room".to_string(),
                required: true,
                options: ROOM_CATEGORIES
                    .iter()
                    .map(|(value, label)| SelectOption::new(*value, *label))
                    .collect::<Vec<_>>(),
            }

            Input {
                value: arrival(),
                oninput: move |v| arrival.set(v),
                label: "Arrival Date".to_string(),
                input_type: "date".to_string(),
                id: "arrival".to_string(),
                required: true,
                min: Some(chrono::Local::now().date_naive().to_string()),
            }

            Input {
                value: nights(),
                oninput: move |v| nights.set(v),
                label: "Number of Nights".to_string(),
                input_type: "number".to_string(),
                id: "duration".to_string(),
                required: true,
                min: Some("1".to_string()),
            }

            button {
                r#type: "submit",
                class: "btn btn--cta",
                "Check Availability"
            }
        }
    }
}
