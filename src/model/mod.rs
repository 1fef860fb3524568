//! Form buffers and the pure rules that decide whether they can be sent.

mod feedback;
mod registration;
mod validation;

pub use feedback::{CONTACT_CHOICES, FeedbackBuffer, FeedbackField, RatingField};
pub use registration::{
    GENDER_OPTIONS, RegistrationBuffer, RegistrationField, RegistrationRequest, UserType,
};
pub use validation::{
    ValidationError, is_low_rating, is_submittable, parse_rating, required_issue_fields,
    validate_email, validate_feedback, validate_registration,
};
