/// Inline SVG icons.
pub mod icon;
/// The header and its dropdowns.
pub mod menu;
