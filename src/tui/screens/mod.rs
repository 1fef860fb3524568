//! TUI screen implementations.

pub mod landing;
pub mod popup;

pub use landing::draw_landing;
pub use popup::{PopupView, Slot, draw_popup, slots};
