//! The popup workflow: state machine, content selection, and a driver
//! that runs submissions against a [`SubmissionService`](crate::api::SubmissionService).

mod controller;
mod driver;
mod presentation;
mod state;

pub use controller::{
    Command, Effect, FEEDBACK_FAILED_MESSAGE, PopupController, REGISTRATION_FAILED_MESSAGE,
};
pub use driver::{Popup, execute};
pub use presentation::{
    ContentVariant, FEATURES, MenuEntry, ThankYouMessage, content_for, select_content,
};
pub use state::{
    OpenPopup, PopupMode, PopupState, Submission, SubmissionId, SubmissionKind, SubmissionState,
};
