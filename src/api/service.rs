use std::future::Future;

use crate::model::{FeedbackBuffer, RegistrationRequest};

use super::error::SubmitError;

/// The two network operations the popup depends on.
///
/// Any 2xx answer is `Ok(())`; everything else is a [`SubmitError`].
/// Implementations must not retry and need not time out.
pub trait SubmissionService {
    /// Sends a waitlist registration.
    fn register(
        &self,
        request: &RegistrationRequest,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send;

    /// Sends a completed feedback survey.
    fn submit_feedback(
        &self,
        feedback: &FeedbackBuffer,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send;
}

impl<S: SubmissionService + Sync> SubmissionService for std::sync::Arc<S> {
    fn register(
        &self,
        request: &RegistrationRequest,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send {
        (**self).register(request)
    }

    fn submit_feedback(
        &self,
        feedback: &FeedbackBuffer,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send {
        (**self).submit_feedback(feedback)
    }
}
