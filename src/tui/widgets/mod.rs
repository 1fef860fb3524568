//! Reusable TUI widgets.

pub mod form;
pub mod status_bar;

pub use form::{FieldKind, Focus, FormField, draw_form, visible_window};
pub use status_bar::{StatusBarContext, draw_status_bar};
