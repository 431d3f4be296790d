//! Reveal-on-scroll section wrapper.
//!
//! Sections start hidden and slide up into view the first time the
//! scroll probe reports them sufficiently visible. The reveal is
//! one-way; once the hidden class is dropped it never comes back.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RevealSectionProps {
    /// Section id, also the nav anchor target
    pub id: String,
    /// Section heading
    pub title: String,
    /// Whether the reveal tracker has shown this section yet
    pub revealed: bool,
    pub children: Element,
}

/// Page section that fades in on first visibility.
#[component]
pub fn RevealSection(props: RevealSectionProps) -> Element {
    rsx! {
        section {
            id: "{props.id}",
            class: if props.revealed { "section" } else { "section section--hidden" },

            h2 { class: "section__header", "{props.title}" }
            {props.children}
        }
    }
}
