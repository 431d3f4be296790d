//! Testimonial slider.
//!
//! Slides are rendered declaratively from the filtered review list;
//! navigation state lives in a core [`SliderState`] so the wrap-around
//! arithmetic stays out of the view.

use dioxus::prelude::*;
use palmhaven_ui::{Button, ButtonVariant, IndicatorDots};

use crate::context::use_reviews;

/// Guest testimonial carousel with arrows and indicator dots.
#[component]
pub fn TestimonialSlider() -> Element {
    let reviews = use_reviews();
    let mut slider = use_signal(|| palmhaven_core::SliderState::new(reviews.read().len()));

    let offset = slider.read().track_offset_pct();

    rsx! {
        div { class: "slider",
            div {
                class: "slider__track",
                style: "transform: translateX({offset}%);",

                for review in reviews.read().iter() {
                    div { key: "{review.name}", class: "slide",
                        div { class: "testimonial",
                            h5 { class: "testimonial__header", "{review.header}" }
                            blockquote { class: "testimonial__text", "{review.text}" }
                            address { class: "testimonial__author",
                                img {
                                    src: "{review.image}",
                                    alt: "{review.name}",
                                    class: "testimonial__photo",
                                }
                                div {
                                    h6 { class: "testimonial__name", "{review.name}" }
                                    p { class: "testimonial__location", "{review.location}" }
                                }
                            }
                        }
                    }
                }
            }

            Button {
                variant: ButtonVariant::SliderArrow,
                class: "slider__btn--left".to_string(),
                onclick: move |_| slider.write().prev(),
                "\u{2190}"
            }
            Button {
                variant: ButtonVariant::SliderArrow,
                class: "slider__btn--right".to_string(),
                onclick: move |_| slider.write().next(),
                "\u{2192}"
            }

            IndicatorDots {
                count: slider.read().count(),
                active: slider.read().current(),
                on_select: move |i| slider.write().jump(i),
            }
        }
    }
}
