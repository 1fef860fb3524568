use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::feedback::{FeedbackBuffer, RatingField};
use super::registration::{RegistrationBuffer, RegistrationField};

/// Validation errors for form buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A rating below 3 has no explanation.
    #[error("Please explain what you didn't like for ratings below 3.")]
    MissingIssue(RatingField),
    /// A required registration field is empty.
    #[error("{} is required", .0.label())]
    Required(RegistrationField),
    /// The email does not look like an address.
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid hardcoded regex"));

/// Parses the leading integer of a rating.
///
/// Leading whitespace and an optional sign are accepted and anything after
/// the digits is ignored, so `" 2 stars"` is 2. Returns `None` when there
/// are no leading digits. Out-of-range magnitudes saturate.
pub fn parse_rating(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].bytes().fold(0_i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Returns `true` if `raw` is a rating low enough to need an explanation.
///
/// Zero counts as unanswered.
pub fn is_low_rating(raw: &str) -> bool {
    matches!(parse_rating(raw), Some(v) if v != 0 && v < 3)
}

/// Ratings whose issue field is currently shown and required.
pub fn required_issue_fields(buffer: &FeedbackBuffer) -> Vec<RatingField> {
    RatingField::ALL
        .into_iter()
        .filter(|r| is_low_rating(buffer.rating(*r)))
        .collect()
}

/// Checks the conditional-requirement rule in survey order.
///
/// Stops at the first low rating with an empty issue field.
pub fn validate_feedback(buffer: &FeedbackBuffer) -> Result<(), ValidationError> {
    match RatingField::ALL
        .into_iter()
        .find(|r| is_low_rating(buffer.rating(*r)) && buffer.issue(*r).is_empty())
    {
        Some(rating) => Err(ValidationError::MissingIssue(rating)),
        None => Ok(()),
    }
}

/// Returns `true` if the feedback buffer may be sent.
pub fn is_submittable(buffer: &FeedbackBuffer) -> bool {
    validate_feedback(buffer).is_ok()
}

/// Validates an email address loosely: `local@domain.tld`, no whitespace.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Checks the registration form before it is handed to the popup.
///
/// Returns every failing field so the form can flag them all at once.
pub fn validate_registration(
    buffer: &RegistrationBuffer,
) -> Vec<(RegistrationField, ValidationError)> {
    let mut errors: Vec<_> = RegistrationField::ALL
        .into_iter()
        .filter(|f| f.is_required() && buffer.get(*f).trim().is_empty())
        .map(|f| (f, ValidationError::Required(f)))
        .collect();
    if !buffer.email.trim().is_empty()
        && let Err(e) = validate_email(buffer.email.trim())
    {
        errors.push((RegistrationField::Email, e));
    }
    errors
}
