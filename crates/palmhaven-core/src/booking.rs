//! Booking estimate calculation.
//!
//! Prices are a fixed nightly rate per room category; the site only ever
//! shows a client-side estimate, nothing is reserved or charged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// Room categories offered on the site: form value and display label.
pub const ROOM_CATEGORIES: [(&str, &str); 3] = [
    ("standard", "Standard Room"),
    ("deluxe-suite", "Deluxe Suite"),
    ("premium-view", "Premium View Suite"),
];

/// Base nightly rate, in rupees.
pub const BASE_RATE: u64 = 2_000;
/// Nightly rate for deluxe categories.
pub const DELUXE_RATE: u64 = 3_000;
/// Nightly rate for premium categories.
pub const PREMIUM_RATE: u64 = 4_500;

/// Nightly rate for a room category.
///
/// The match is a case-sensitive substring check against the category
/// value, deluxe before premium, base rate otherwise.
pub fn nightly_rate(room: &str) -> u64 {
    if room.contains("deluxe") {
        DELUXE_RATE
    } else if room.contains("premium") {
        PREMIUM_RATE
    } else {
        BASE_RATE
    }
}

/// Raw booking form input, as read from the form controls.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingRequest {
    /// Room category value, e.g. "deluxe-suite"
    pub room: String,
    /// Arrival date as entered, ISO "YYYY-MM-DD"
    pub arrival: String,
    /// Number of nights
    pub nights: u32,
}

/// A priced booking, ready to show in the confirmation dialog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingEstimate {
    pub room: String,
    pub arrival: String,
    pub nights: u32,
    /// Nightly rate in rupees
    pub rate: u64,
    /// `rate * nights`, in rupees
    pub total: u64,
}

impl BookingRequest {
    /// Price the request.
    ///
    /// The emptiness re-check duplicates what the form's required-field
    /// validation already guarantees; it is kept to match the shipped
    /// behavior (see DESIGN.md).
    pub fn validate(&self) -> SiteResult<BookingEstimate> {
        if self.room.is_empty() || self.arrival.is_empty() || self.nights == 0 {
            return Err(SiteError::IncompleteBooking(
                "Please fill in all fields.".to_string(),
            ));
        }
        NaiveDate::parse_from_str(&self.arrival, "%Y-%m-%d")?;

        let rate = nightly_rate(&self.room);
        Ok(BookingEstimate {
            room: self.room.clone(),
            arrival: self.arrival.clone(),
            nights: self.nights,
            rate,
            total: rate * u64::from(self.nights),
        })
    }
}

impl BookingEstimate {
    /// Category value with dashes turned back into spaces for display.
    pub fn room_display_name(&self) -> String {
        self.room.replace('-', " ")
    }

    /// Availability line shown in the confirmation dialog.
    pub fn availability_message(&self) -> String {
        format!(
            "Your selected {} is available for your chosen dates.",
            self.room_display_name()
        )
    }

    /// Label above the total.
    pub fn price_description(&self) -> String {
        format!("Estimated total for {} nights:", self.nights)
    }

    /// Rupee-prefixed total with digit grouping, e.g. "₹9,000".
    pub fn format_total(&self) -> String {
        format_rupees(self.total)
    }
}

/// Rupee-prefixed amount with digit grouping.
pub fn format_rupees(value: u64) -> String {
    format!("₹{}", group_digits(value))
}

/// Group digits in threes with commas.
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(room: &str, nights: u32) -> BookingRequest {
        BookingRequest {
            room: room.to_string(),
            arrival: "2026-11-02".to_string(),
            nights,
        }
    }

    #[test]
    fn rate_table() {
        assert_eq!(nightly_rate("deluxe-suite"), 3_000);
        assert_eq!(nightly_rate("premium-view"), 4_500);
        assert_eq!(nightly_rate("standard"), 2_000);
    }

    #[test]
    fn rate_match_is_case_sensitive() {
        assert_eq!(nightly_rate("Deluxe-Suite"), 2_000);
        assert_eq!(nightly_rate("PREMIUM-VIEW"), 2_000);
    }

    #[test]
    fn total_is_rate_times_nights() {
        let estimate = request("deluxe-suite", 3).validate().unwrap();
        assert_eq!(estimate.rate, 3_000);
        assert_eq!(estimate.total, 9_000);
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert!(request("", 2).validate().is_err());
        let mut r = request("standard", 2);
        r.arrival.clear();
        assert!(r.validate().is_err());
        assert!(request("standard", 0).validate().is_err());
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut r = request("standard", 2);
        r.arrival = "02/11/2026".to_string();
        assert!(matches!(r.validate(), Err(SiteError::InvalidDate(_))));
    }

    #[test]
    fn display_strings() {
        let estimate = request("deluxe-suite", 3).validate().unwrap();
        assert_eq!(estimate.room_display_name(), "deluxe suite");
        assert_eq!(
            estimate.availability_message(),
            "Your selected deluxe suite is available for your chosen dates."
        );
        assert_eq!(estimate.price_description(), "Estimated total for 3 nights:");
        assert_eq!(estimate.format_total(), "₹9,000");
    }

    #[test]
    fn digit_grouping() {
        assert_eq!(group_digits(450), "450");
        assert_eq!(group_digits(9_000), "9,000");
        assert_eq!(group_digits(13_500), "13,500");
        assert_eq!(group_digits(1_234_567), "1,234,567");
    }
}
