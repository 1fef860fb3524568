use tracing::{debug, info, warn};

use crate::api::SubmitError;
use crate::model::{
    FeedbackBuffer, FeedbackField, RegistrationBuffer, RegistrationField, RegistrationRequest,
    UserType, ValidationError, validate_feedback,
};

use super::presentation::{ContentVariant, content_for};
use super::state::{
    OpenPopup, PopupMode, PopupState, Submission, SubmissionId, SubmissionKind, SubmissionState,
};

/// Shown when a registration request fails for any reason.
pub const REGISTRATION_FAILED_MESSAGE: &str = "Failed to submit registration. Please try again.";

/// Shown when a feedback request fails for any reason.
pub const FEEDBACK_FAILED_MESSAGE: &str = "Failed to submit feedback. Please try again.";

/// A user command addressed to the popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenRegistration(UserType),
    OpenNotInterested,
    OpenFeatures,
    OpenFeedback,
    OpenViewMore,
    UpdateRegistrationField(RegistrationField, String),
    UpdateFeedbackField(FeedbackField, String),
    SubmitRegistration,
    SubmitFeedback,
    Close,
}

/// Work the host must carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do.
    None,
    /// Send a registration and report back with [`PopupController::complete`].
    Register {
        id: SubmissionId,
        request: RegistrationRequest,
    },
    /// Send feedback and report back with [`PopupController::complete`].
    SubmitFeedback {
        id: SubmissionId,
        feedback: FeedbackBuffer,
    },
}

impl Effect {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// The popup workflow state machine.
///
/// Transitions are synchronous and perform no I/O. Submissions are handed
/// out as [`Effect`]s; at most one is in flight at a time.
#[derive(Debug, Clone, Default)]
pub struct PopupController {
    state: PopupState,
    registration: RegistrationBuffer,
    feedback: FeedbackBuffer,
    last_submission: u64,
}

impl PopupController {
    /// Creates a closed popup with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a command, returning any submission to perform.
    pub fn handle(&mut self, command: Command) -> Effect {
        match command {
            Command::OpenRegistration(user_type) => self.open_registration(user_type),
            Command::OpenNotInterested => self.open_not_interested(),
            Command::OpenFeatures => self.open_features(),
            Command::OpenFeedback => self.open_feedback(),
            Command::OpenViewMore => self.open_view_more(),
            Command::UpdateRegistrationField(field, value) => {
                self.update_registration_field(field, value)
            }
            Command::UpdateFeedbackField(field, value) => self.update_feedback_field(field, value),
            Command::SubmitRegistration => return self.submit_registration(),
            // The validation message is already stored in the state.
            Command::SubmitFeedback => return self.submit_feedback().unwrap_or(Effect::None),
            Command::Close => self.close(),
        }
        Effect::None
    }

    /// Opens the registration form for `user_type`.
    pub fn open_registration(&mut self, user_type: UserType) {
        self.state.enter(PopupMode::RegistrationForm);
        if let Some(open) = self.state.open_mut() {
            open.user_type = Some(user_type);
            open.not_interested = false;
            open.clear_error();
        }
    }

    /// Shows the "not interested" thank-you without contacting the backend.
    pub fn open_not_interested(&mut self) {
        self.state.enter(PopupMode::ThankYou);
        if let Some(open) = self.state.open_mut() {
            open.not_interested = true;
        }
    }

    pub fn open_features(&mut self) {
        self.state.enter(PopupMode::Features);
    }

    pub fn open_feedback(&mut self) {
        self.state.enter(PopupMode::Feedback);
    }

    pub fn open_view_more(&mut self) {
        self.state.enter(PopupMode::ViewMore);
    }

    /// Edits the registration buffer; ignored unless the form is showing.
    pub fn update_registration_field(&mut self, field: RegistrationField, value: String) {
        if self.mode() == Some(PopupMode::RegistrationForm) {
            self.registration.set(field, value);
        } else {
            debug!(field = field.key(), "registration edit ignored outside the form");
        }
    }

    /// Edits the feedback buffer; ignored unless the survey is showing.
    pub fn update_feedback_field(&mut self, field: FeedbackField, value: String) {
        if self.mode() == Some(PopupMode::Feedback) {
            self.feedback.set(field, value);
        } else {
            debug!(field = field.key(), "feedback edit ignored outside the survey");
        }
    }

    /// Starts a registration submission.
    ///
    /// Required fields are the form's responsibility and are not checked
    /// here. Returns [`Effect::None`] outside the form or while another
    /// submission is in flight.
    pub fn submit_registration(&mut self) -> Effect {
        if !self.can_submit(PopupMode::RegistrationForm) {
            return Effect::None;
        }
        let user_type = self
            .state
            .open()
            .and_then(OpenPopup::user_type)
            .unwrap_or_default();
        let id = self.begin(SubmissionKind::Registration);
        info!(?id, %user_type, "submitting registration");
        Effect::Register {
            id,
            request: RegistrationRequest::new(&self.registration, user_type),
        }
    }

    /// Validates the survey and starts a feedback submission.
    ///
    /// A rating below 3 without an explanation fails here, before any
    /// request exists, and leaves the message in [`error_message`](Self::error_message).
    pub fn submit_feedback(&mut self) -> Result<Effect, ValidationError> {
        if !self.can_submit(PopupMode::Feedback) {
            return Ok(Effect::None);
        }
        if let Err(e) = validate_feedback(&self.feedback) {
            info!(error = %e, "feedback blocked by validation");
            if let Some(open) = self.state.open_mut() {
                open.submission = SubmissionState::Failed(e.to_string());
            }
            return Err(e);
        }
        let id = self.begin(SubmissionKind::Feedback);
        info!(?id, "submitting feedback");
        Ok(Effect::SubmitFeedback {
            id,
            feedback: self.feedback.clone(),
        })
    }

    /// Applies the outcome of a submission.
    ///
    /// Outcomes for anything other than the current in-flight submission
    /// (for example one started before the popup was closed) are dropped.
    pub fn complete(&mut self, id: SubmissionId, result: Result<(), SubmitError>) {
        let Some(open) = self.state.open_mut() else {
            debug!(?id, "dropping outcome: popup closed");
            return;
        };
        let SubmissionState::InFlight(current) = &open.submission else {
            debug!(?id, "dropping outcome: nothing in flight");
            return;
        };
        let current = *current;
        if current.id != id {
            debug!(?id, current = ?current.id, "dropping stale outcome");
            return;
        }

        match (current.kind, result) {
            (SubmissionKind::Registration, Ok(())) => {
                info!(?id, "registration accepted");
                open.submission = SubmissionState::Idle;
                open.not_interested = false;
                open.mode = PopupMode::ThankYou;
            }
            (SubmissionKind::Registration, Err(e)) => {
                warn!(?id, error = %e, "registration failed");
                open.submission = SubmissionState::Failed(REGISTRATION_FAILED_MESSAGE.into());
            }
            (SubmissionKind::Feedback, Ok(())) => {
                info!(?id, "feedback accepted");
                open.submission = SubmissionState::Idle;
                open.feedback_submitted = true;
                open.mode = PopupMode::ThankYou;
            }
            (SubmissionKind::Feedback, Err(e)) => {
                warn!(?id, error = %e, "feedback failed");
                open.submission = SubmissionState::Failed(FEEDBACK_FAILED_MESSAGE.into());
            }
        }
    }

    /// Closes the popup and wipes both buffers and every flag.
    ///
    /// A request already sent keeps running; its outcome will be dropped.
    pub fn close(&mut self) {
        if self.is_submitting() {
            debug!("closing with a submission in flight");
        }
        self.state = PopupState::Closed;
        self.registration.reset();
        self.feedback.reset();
    }

    pub fn state(&self) -> &PopupState {
        &self.state
    }

    pub fn registration(&self) -> &RegistrationBuffer {
        &self.registration
    }

    pub fn feedback(&self) -> &FeedbackBuffer {
        &self.feedback
    }

    /// The open mode, or `None` when closed.
    pub fn mode(&self) -> Option<PopupMode> {
        self.state.open().map(OpenPopup::mode)
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.state.open().and_then(OpenPopup::user_type)
    }

    pub fn not_interested(&self) -> bool {
        self.state.open().is_some_and(OpenPopup::not_interested)
    }

    pub fn feedback_submitted(&self) -> bool {
        self.state.open().is_some_and(OpenPopup::feedback_submitted)
    }

    pub fn is_submitting(&self) -> bool {
        self.state.open().is_some_and(OpenPopup::is_submitting)
    }

    /// The message to display, or `""` when there is none.
    pub fn error_message(&self) -> &str {
        self.state.open().map_or("", OpenPopup::error_message)
    }

    /// What the popup should display, or `None` when closed.
    pub fn content(&self) -> Option<ContentVariant> {
        content_for(&self.state)
    }

    fn can_submit(&self, mode: PopupMode) -> bool {
        match self.state.open() {
            Some(open) if open.mode == mode && !open.is_submitting() => true,
            Some(open) if open.is_submitting() => {
                debug!(?mode, "submit ignored: already submitting");
                false
            }
            _ => {
                debug!(?mode, "submit ignored: form not showing");
                false
            }
        }
    }

    fn begin(&mut self, kind: SubmissionKind) -> SubmissionId {
        self.last_submission += 1;
        let id = SubmissionId(self.last_submission);
        if let Some(open) = self.state.open_mut() {
            open.submission = SubmissionState::InFlight(Submission { id, kind });
        }
        id
    }
}
