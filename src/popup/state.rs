use crate::model::UserType;

/// Content currently shown by an open popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopupMode {
    /// Waitlist registration form.
    RegistrationForm,
    /// Closing message after a registration, a survey, or a dismissal.
    ThankYou,
    /// Product feature list.
    Features,
    /// Satisfaction survey.
    Feedback,
    /// Menu linking to the survey and the feature list.
    ViewMore,
}

/// Which form a submission carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionKind {
    Registration,
    Feedback,
}

/// Identifies one submission so its outcome can be matched to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(pub(crate) u64);

/// A submission waiting for its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    pub kind: SubmissionKind,
}

/// Progress of the most recent submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight(Submission),
    /// The last attempt failed; the message is shown to the user.
    Failed(String),
}

/// Everything that exists only while the popup is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenPopup {
    pub(crate) mode: PopupMode,
    pub(crate) user_type: Option<UserType>,
    pub(crate) not_interested: bool,
    pub(crate) feedback_submitted: bool,
    pub(crate) submission: SubmissionState,
}

impl OpenPopup {
    pub(crate) fn new(mode: PopupMode) -> Self {
        Self {
            mode,
            user_type: None,
            not_interested: false,
            feedback_submitted: false,
            submission: SubmissionState::Idle,
        }
    }

    pub fn mode(&self) -> PopupMode {
        self.mode
    }

    /// The category chosen when registration was opened.
    pub fn user_type(&self) -> Option<UserType> {
        self.user_type
    }

    pub fn not_interested(&self) -> bool {
        self.not_interested
    }

    pub fn feedback_submitted(&self) -> bool {
        self.feedback_submitted
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Returns `true` while a request is awaiting its outcome.
    pub fn is_submitting(&self) -> bool {
        matches!(self.submission, SubmissionState::InFlight(_))
    }

    /// The message to display, or `""` when there is none.
    pub fn error_message(&self) -> &str {
        match &self.submission {
            SubmissionState::Failed(message) => message,
            _ => "",
        }
    }

    /// Drops a displayed error without disturbing an in-flight request.
    pub(crate) fn clear_error(&mut self) {
        if matches!(self.submission, SubmissionState::Failed(_)) {
            self.submission = SubmissionState::Idle;
        }
    }
}

/// Top-level popup state. A closed popup carries no flags at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    Closed,
    Open(OpenPopup),
}

impl PopupState {
    pub fn open(&self) -> Option<&OpenPopup> {
        match self {
            Self::Open(open) => Some(open),
            Self::Closed => None,
        }
    }

    pub(crate) fn open_mut(&mut self) -> Option<&mut OpenPopup> {
        match self {
            Self::Open(open) => Some(open),
            Self::Closed => None,
        }
    }

    /// Switches to `mode`, opening with fresh flags if currently closed.
    ///
    /// An already-open popup keeps its flags and any in-flight request.
    pub(crate) fn enter(&mut self, mode: PopupMode) {
        match self {
            Self::Open(open) => open.mode = mode,
            Self::Closed => *self = Self::Open(OpenPopup::new(mode)),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}
