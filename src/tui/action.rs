//! Actions returned by screen key handlers.

use crate::popup::Command;

/// What a screen handler asks the [`App`](super::App) to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Forward a command to the popup controller.
    Popup(Command),
    /// Quit the application.
    Quit,
}
