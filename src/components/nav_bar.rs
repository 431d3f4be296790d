//! Sticky Navigation Bar
//!
//! Transparent over the hero; collapses to a solid bar with a shrunk
//! logo once the hero is mostly scrolled away. One link at a time
//! carries the active indicator, driven by the section tracker.

use dioxus::document;
use dioxus::prelude::*;

/// Section ids and their nav labels, in page order.
pub const NAV_SECTIONS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("rooms", "Rooms"),
    ("facilities", "Facilities"),
    ("testimonials", "Guests"),
    ("booking", "Book"),
    ("contact", "Contact"),
];

#[derive(Props, Clone, PartialEq)]
pub struct NavBarProps {
    /// Whether the hero has scrolled far enough to collapse the bar
    pub scrolled: bool,
    /// Id of the section whose link is active, if any
    pub active: Option<String>,
}

/// Sticky navigation bar
#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let scroll_to = move |id: &'static str| {
        // Same optional-chaining guard as a missing anchor target in the
        // markup: a bad id is a no-op, not a failure.
        document::eval(&format!(
            "document.getElementById('{id}')?.scrollIntoView({{ behavior: 'smooth' }});"
        ));
    };

    rsx! {
        nav { class: if props.scrolled { "nav scrolled" } else { "nav" },
            span { class: "nav__logo", "Palm Haven" }

            ul { class: "nav__links",
                for (id, label) in NAV_SECTIONS {
                    li { key: "{id}",
                        button {
                            r#type: "button",
                            class: if props.active.as_deref() == Some(id) {
                                "nav__link active"
                            } else {
                                "nav__link"
                            },
                            onclick: move |_| scroll_to(id),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
