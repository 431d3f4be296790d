//! Slider indicator dots.

use dioxus::prelude::*;

/// Row of indicator dots, one per slide, with the active one highlighted.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     IndicatorDots {
///         count: slides.len(),
///         active: slider().current(),
///         on_select: move |i| slider.write().jump(i),
///     }
/// }
/// ```
#[component]
pub fn IndicatorDots(count: usize, active: usize, on_select: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "dots",
            for i in 0..count {
                button {
                    key: "{i}",
                    r#type: "button",
                    class: if i == active { "dots__dot active" } else { "dots__dot" },
                    "aria-label": "Go to slide {i + 1}",
                    onclick: move |_| on_select.call(i),
                }
            }
        }
    }
}
