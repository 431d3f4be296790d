//! Contact-method selection for the booking confirmation form.
//!
//! Checking or unchecking any method rebuilds the whole dynamic field
//! list from the current selection, always in the fixed order email,
//! phone, WhatsApp. A rebuild is cheap at this size and keeps the field
//! order independent of click order.

/// HTML pattern enforcing a 10-digit number.
pub const NUMBER_PATTERN: &str = "[0-9]{10}";

/// The ways a guest can ask to be contacted, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactMethod {
    Email,
    Phone,
    Whatsapp,
}

impl ContactMethod {
    /// All methods in the order their fields are rendered.
    pub const ALL: [ContactMethod; 3] = [
        ContactMethod::Email,
        ContactMethod::Phone,
        ContactMethod::Whatsapp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactMethod::Email => "Email",
            ContactMethod::Phone => "Phone",
            ContactMethod::Whatsapp => "WhatsApp",
        }
    }
}

/// One dynamically injected input, described declaratively.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactField {
    pub method: ContactMethod,
    pub label: &'static str,
    pub input_type: &'static str,
    pub name: &'static str,
    pub pattern: Option<&'static str>,
    pub placeholder: Option<&'static str>,
}

/// Which contact methods are currently checked.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContactSelection {
    pub email: bool,
    pub phone: bool,
    pub whatsapp: bool,
}

impl ContactSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_checked(&self, method: ContactMethod) -> bool {
        match method {
            ContactMethod::Email => self.email,
            ContactMethod::Phone => self.phone,
            ContactMethod::Whatsapp => self.whatsapp,
        }
    }

    pub fn set(&mut self, method: ContactMethod, checked: bool) {
        match method {
            ContactMethod::Email => self.email = checked,
            ContactMethod::Phone => self.phone = checked,
            ContactMethod::Whatsapp => self.whatsapp = checked,
        }
    }

    /// Build the full field list for the current selection, in fixed
    /// order. Called on every checkbox change; never patched in place.
    pub fn rebuild(&self) -> Vec<ContactField> {
        let mut fields = Vec::new();
        if self.email {
            fields.push(ContactField {
                method: ContactMethod::Email,
                label: "Email Address",
                input_type: "email",
                name: "contactEmail",
                pattern: None,
                placeholder: None,
            });
        }
        if self.phone {
            fields.push(ContactField {
                method: ContactMethod::Phone,
                label: "Phone Number",
                input_type: "tel",
                name: "contactPhone",
                pattern: Some(NUMBER_PATTERN),
                placeholder: Some("10-digit number"),
            });
        }
        if self.whatsapp {
            fields.push(ContactField {
                method: ContactMethod::Whatsapp,
                label: "WhatsApp Number",
                input_type: "tel",
                name: "contactWhatsapp",
                pattern: Some(NUMBER_PATTERN),
                placeholder: Some("10-digit number"),
            });
        }
        fields
    }
}

/// Whether a phone/WhatsApp value satisfies the 10-digit pattern.
pub fn is_valid_number(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuild_keeps_fixed_order() {
        let mut selection = ContactSelection::new();
        // Checked out of order; fields still come back email, phone.
        selection.set(ContactMethod::Phone, true);
        selection.set(ContactMethod::Email, true);
        let fields = selection.rebuild();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].method, ContactMethod::Email);
        assert_eq!(fields[1].method, ContactMethod::Phone);
    }

    #[test]
    fn unchecking_removes_only_that_field() {
        let mut selection = ContactSelection::new();
        selection.set(ContactMethod::Email, true);
        selection.set(ContactMethod::Phone, true);
        selection.set(ContactMethod::Phone, false);
        let fields = selection.rebuild();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].method, ContactMethod::Email);
    }

    #[test]
    fn empty_selection_rebuilds_empty() {
        assert!(ContactSelection::new().rebuild().is_empty());
    }

    #[test]
    fn number_fields_carry_pattern() {
        let mut selection = ContactSelection::new();
        selection.set(ContactMethod::Whatsapp, true);
        let fields = selection.rebuild();
        assert_eq!(fields[0].pattern, Some(NUMBER_PATTERN));
        assert_eq!(fields[0].input_type, "tel");
    }

    #[test]
    fn number_validation() {
        assert!(is_valid_number("9876543210"));
        assert!(!is_valid_number("987654321"));
        assert!(!is_valid_number("98765432100"));
        assert!(!is_valid_number("98765o3210"));
        assert!(!is_valid_number(""));
    }
}
