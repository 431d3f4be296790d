use dioxus::prelude::*;
use palmhaven_core::{reviews, BookingEstimate, ModalRegistry, Review};

use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// The site is a single page; the router exists so deep links and
/// future pages slot in without rewiring.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, the modal registry, the pending booking
/// estimate, and the review content to the page tree.
#[component]
pub fn App() -> Element {
    let modals: Signal<ModalRegistry> = use_signal(ModalRegistry::new);
    let estimate: Signal<Option<BookingEstimate>> = use_signal(|| None);
    let review_list: Signal<Vec<Review>> = use_signal(|| match reviews::load_reviews() {
        Ok(all) => reviews::top_reviews(&all),
        Err(e) => {
            tracing::error!("Failed to decode review content: {}", e);
            Vec::new()
        }
    });

    use_context_provider(|| modals);
    use_context_provider(|| estimate);
    use_context_provider(|| review_list);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
