//! Color constants for the resort palette.

#![allow(dead_code)]

// === SAND (Backgrounds) ===
pub const SAND_LIGHT: &str = "#faf6ef";
pub const SAND: &str = "#f0e7d8";
pub const SAND_BORDER: &str = "#d9cbb3";

// === SEA (Primary accent, links, buttons) ===
pub const SEA: &str = "#0f6e74";
pub const SEA_DEEP: &str = "#0a4d52";
pub const SEA_GLOW: &str = "rgba(15, 110, 116, 0.25)";

// === PALM (Secondary accent) ===
pub const PALM: &str = "#4a7c3f";
pub const PALM_LIGHT: &str = "#7fb069";

// === SUNSET (Call to action) ===
pub const SUNSET: &str = "#e0742c";
pub const SUNSET_GLOW: &str = "rgba(224, 116, 44, 0.3)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#2b2620";
pub const TEXT_SECONDARY: &str = "rgba(43, 38, 32, 0.72)";
pub const TEXT_INVERSE: &str = "#faf6ef";

// === SEMANTIC ===
pub const DANGER: &str = "#c0392b";
