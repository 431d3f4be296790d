//! UI components for the Palm Haven site.

mod booking_form;
mod booking_modal;
mod contact_modal;
mod facilities_strip;
mod hero;
mod modal_layer;
mod nav_bar;
mod reveal_section;
mod room_tabs;
mod testimonial_slider;

pub use booking_form::BookingForm;
pub use booking_modal::BookingModal;
pub use contact_modal::ContactModal;
pub use facilities_strip::FacilitiesStrip;
pub use hero::Hero;
pub use modal_layer::ModalLayer;
pub use nav_bar::{NavBar, NAV_SECTIONS};
pub use reveal_section::RevealSection;
pub use room_tabs::RoomTabs;
pub use testimonial_slider::TestimonialSlider;
