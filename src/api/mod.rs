//! Backend submission: the [`SubmissionService`] seam and its HTTP client.
//!
//! The popup never talks to the network itself. It hands out request
//! descriptions and a service turns them into `POST` calls against
//! `/api/register` and `/api/feedback`.

mod error;
mod http;
mod service;

pub use error::SubmitError;
pub use http::HttpSubmissionService;
pub use service::SubmissionService;
