//! Form Field Components
//!
//! Labeled inputs and selects used by the booking and contact forms.
//! All of them surface the browser's native validation (required,
//! pattern) rather than custom error UI.

use dioxus::prelude::*;
use palmhaven_core::ContactField;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input label text
    pub label: String,
    /// Input type (text, date, number, email, tel)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// id, also used for label association
    pub id: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is read-only
    #[props(default = false)]
    pub readonly: bool,
    /// Minimum value (e.g. min date or min nights)
    #[props(default)]
    pub min: Option<String>,
}

/// Labeled input field
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "form__field",
            label { class: "form__label", r#for: "{props.id}", "{props.label}" }
            input {
                id: "{props.id}",
                class: "form__input",
                r#type: "{props.input_type}",
                value: "{props.value}",
                required: props.required,
                readonly: props.readonly,
                min: props.min,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// One option in a SelectField
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    /// Submitted value, e.g. "deluxe-suite"
    pub value: String,
    /// Visible label, e.g. "Deluxe Suite"
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Labeled select dropdown
#[component]
pub fn SelectField(
    value: String,
    onchange: EventHandler<String>,
    label: String,
    id: String,
    options: Vec<SelectOption>,
    #[props(default = "Select".to_string())] placeholder: String,
    #[props(default = false)] required: bool,
) -> Element {
    rsx! {
        div { class: "form__field",
            label { class: "form__label", r#for: "{id}", "{label}" }
            select {
                id: "{id}",
                class: "form__input",
                required: required,
                value: "{value}",
                onchange: move |e| onchange.call(e.value()),
                option { value: "", disabled: true, selected: value.is_empty(), "{placeholder}" }
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: value == opt.value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

/// A dynamically injected contact field, rendered from its core
/// descriptor so structure stays data-driven.
#[component]
pub fn ContactFieldInput(
    field: ContactField,
    value: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form__field form__field--contact",
            label { class: "form__label", "{field.label}" }
            input {
                class: "form__input",
                r#type: "{field.input_type}",
                name: "{field.name}",
                value: "{value}",
                required: true,
                pattern: field.pattern,
                placeholder: field.placeholder,
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_option_builder() {
        let opt = SelectOption::new("deluxe-suite", "Deluxe Suite");
        assert_eq!(opt.value, "deluxe-suite");
        assert_eq!(opt.label, "Deluxe Suite");
    }
}
