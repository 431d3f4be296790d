//! Guest review content for the testimonial slider.
//!
//! Reviews are shipped as embedded JSON and decoded at startup; the
//! slider only ever sees the filtered, sorted result of
//! [`top_reviews`]. Swapping the embedded blob for an API response is
//! the intended evolution path.

use serde::{Deserialize, Serialize};

use crate::error::SiteResult;

/// One guest review record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Star rating, 1-5
    pub rating: u8,
    /// Short headline shown above the quote
    pub header: String,
    /// Quote body
    pub text: String,
    /// Guest name
    pub name: String,
    /// Guest home town
    pub location: String,
    /// Path to the guest photo
    pub image: String,
}

/// Embedded review content (stand-in for a future content API).
pub const REVIEW_CONTENT: &str = r#"[
  {
    "rating": 5,
    "header": "Absolutely wonderful stay!",
    "text": "Loved the calm ambiance, the backwater view from the deluxe suite, and the staff who remembered our names from day one.",
    "name": "Neha Rajan",
    "location": "Kochi, India",
    "image": "img/user-1.jpg"
  },
  {
    "rating": 4,
    "header": "Great experience!",
    "text": "The facilities were top-notch. The infinity pool alone is worth the trip, though breakfast queues got long on the weekend.",
    "name": "Ammu Menon",
    "location": "Ernakulam",
    "image": "img/user-2.jpg"
  },
  {
    "rating": 5,
    "header": "Perfect anniversary getaway",
    "text": "The premium view room at sunset is something we will talk about for years. Dinner on the jetty was arranged without any fuss.",
    "name": "Arjun Nair",
    "location": "Bengaluru",
    "image": "img/user-3.jpg"
  },
  {
    "rating": 3,
    "header": "Good, with caveats",
    "text": "Lovely grounds, but our room's air conditioning struggled in the afternoon heat.",
    "name": "Priya Das",
    "location": "Chennai",
    "image": "img/user-4.jpg"
  },
  {
    "rating": 4,
    "header": "Came for a day, stayed for three",
    "text": "The facilities strip on the website undersells it. The ayurvedic spa and the cycling trails kept us extending our booking.",
    "name": "Thomas Kurien",
    "location": "Kottayam",
    "image": "img/user-5.jpg"
  }
]"#;

/// Decode the embedded review content.
pub fn load_reviews() -> SiteResult<Vec<Review>> {
    Ok(serde_json::from_str(REVIEW_CONTENT)?)
}

/// Filter to well-rated reviews (4 stars and up) and order them best
/// first. The sort is stable, so equally-rated reviews keep their
/// content order.
pub fn top_reviews(reviews: &[Review]) -> Vec<Review> {
    let mut top: Vec<Review> = reviews.iter().filter(|r| r.rating >= 4).cloned().collect();
    top.sort_by(|a, b| b.rating.cmp(&a.rating));
    top
}
