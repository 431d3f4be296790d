//! Palm Haven UI Components
//!
//! Reusable Dioxus components for the resort site: buttons, labeled
//! form controls, the modal dialog shell, and the slider indicator
//! dots. Styling comes from the class names in the app's global
//! stylesheet; components here only decide structure and state.

pub mod components;

pub use components::*;
