use crate::api::{SubmissionService, SubmitError};

use super::controller::{Command, Effect, PopupController};
use super::state::SubmissionId;

/// Carries out an [`Effect`] against `service`.
///
/// Returns the outcome to feed into [`PopupController::complete`], or
/// `None` if there was nothing to send.
pub async fn execute<S: SubmissionService>(
    service: &S,
    effect: Effect,
) -> Option<(SubmissionId, Result<(), SubmitError>)> {
    match effect {
        Effect::None => None,
        Effect::Register { id, request } => Some((id, service.register(&request).await)),
        Effect::SubmitFeedback { id, feedback } => {
            Some((id, service.submit_feedback(&feedback).await))
        }
    }
}

/// A controller paired with a service, running each command to completion.
///
/// Suited to hosts that do not interleave input with pending requests.
pub struct Popup<S> {
    controller: PopupController,
    service: S,
}

impl<S: SubmissionService> Popup<S> {
    pub fn new(service: S) -> Self {
        Self {
            controller: PopupController::new(),
            service,
        }
    }

    /// Applies `command` and awaits any submission it starts.
    pub async fn dispatch(&mut self, command: Command) {
        let effect = self.controller.handle(command);
        if let Some((id, result)) = execute(&self.service, effect).await {
            self.controller.complete(id, result);
        }
    }

    pub fn controller(&self) -> &PopupController {
        &self.controller
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}
