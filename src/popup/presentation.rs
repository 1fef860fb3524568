//! Pure mapping from popup state to what should be on screen.

use crate::model::UserType;

use super::controller::Command;
use super::state::{PopupMode, PopupState};

/// Message body of the thank-you content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThankYouMessage {
    /// The visitor dismissed the waitlist.
    NotInterested,
    /// A survey was accepted.
    FeedbackReceived,
    /// A registration was accepted.
    Joined(UserType),
}

impl ThankYouMessage {
    pub fn text(self) -> String {
        match self {
            Self::NotInterested => {
                "No problem if you are not interested. Thank you for giving your time!".into()
            }
            Self::FeedbackReceived => "Thank you for your valuable feedback! Your input helps \
                us improve our platform to better serve your legal needs."
                .into(),
            Self::Joined(user_type) => format!(
                "Thank you for joining our waiting list as a {user_type}! We'll be in touch soon."
            ),
        }
    }
}

/// One entry of the "Explore More" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Feedback,
    Features,
}

impl MenuEntry {
    /// Entries in display order.
    pub const ALL: [Self; 2] = [Self::Feedback, Self::Features];

    pub fn label(self) -> &'static str {
        match self {
            Self::Feedback => "Suggestion & Feedback",
            Self::Features => "View Features",
        }
    }

    /// The command activating this entry issues.
    pub fn command(self) -> Command {
        match self {
            Self::Feedback => Command::OpenFeedback,
            Self::Features => Command::OpenFeatures,
        }
    }
}

/// Product features as `(title, description)` pairs.
pub const FEATURES: [(&str, &str); 4] = [
    (
        "Write Faster, Publish Smarter",
        "Create polished legal blogs in minutes with AI-powered tools.",
    ),
    (
        "Simplify Complex Law",
        "Turn dense legal topics into clear, authoritative articles effortlessly.",
    ),
    (
        "Listen on the Go",
        "Absorb expert insights and updates hands-free with audio summaries.",
    ),
    (
        "Monetize Your Expertise",
        "Build an audience and earn rewards by sharing your legal knowledge.",
    ),
];

/// Renderable popup content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentVariant {
    RegistrationForm(UserType),
    FeedbackSurvey,
    ThankYou(ThankYouMessage),
    FeatureList,
    ViewMoreMenu,
}

impl ContentVariant {
    /// Heading shown at the top of the popup.
    pub fn title(self) -> String {
        match self {
            Self::RegistrationForm(user_type) => format!("Join as {user_type}"),
            Self::FeedbackSurvey => "Help us improve your experience".into(),
            Self::ThankYou(_) => "Thank You!".into(),
            Self::FeatureList => "Our Features".into(),
            Self::ViewMoreMenu => "Explore More".into(),
        }
    }
}

/// Chooses the content for an open popup.
///
/// The thank-you text prefers the dismissal, then the survey, then the
/// registration.
pub fn select_content(
    mode: PopupMode,
    user_type: Option<UserType>,
    not_interested: bool,
    feedback_submitted: bool,
) -> ContentVariant {
    let user_type = user_type.unwrap_or_default();
    match mode {
        PopupMode::RegistrationForm => ContentVariant::RegistrationForm(user_type),
        PopupMode::Feedback => ContentVariant::FeedbackSurvey,
        PopupMode::Features => ContentVariant::FeatureList,
        PopupMode::ViewMore => ContentVariant::ViewMoreMenu,
        PopupMode::ThankYou if not_interested => {
            ContentVariant::ThankYou(ThankYouMessage::NotInterested)
        }
        PopupMode::ThankYou if feedback_submitted => {
            ContentVariant::ThankYou(ThankYouMessage::FeedbackReceived)
        }
        PopupMode::ThankYou => ContentVariant::ThankYou(ThankYouMessage::Joined(user_type)),
    }
}

/// Content for `state`, or `None` when the popup is closed.
pub fn content_for(state: &PopupState) -> Option<ContentVariant> {
    state.open().map(|open| {
        select_content(
            open.mode(),
            open.user_type(),
            open.not_interested(),
            open.feedback_submitted(),
        )
    })
}
