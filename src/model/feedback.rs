use serde::Serialize;

/// One of the six 1–5 survey ratings, in survey order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingField {
    VisualDesign,
    EaseOfNavigation,
    MobileResponsiveness,
    OverallSatisfaction,
    EaseOfTasks,
    QualityOfServices,
}

impl RatingField {
    /// All ratings in the order they are asked and validated.
    pub const ALL: [Self; 6] = [
        Self::VisualDesign,
        Self::EaseOfNavigation,
        Self::MobileResponsiveness,
        Self::OverallSatisfaction,
        Self::EaseOfTasks,
        Self::QualityOfServices,
    ];

    /// Wire name of the rating.
    pub fn key(self) -> &'static str {
        match self {
            Self::VisualDesign => "visualDesign",
            Self::EaseOfNavigation => "easeOfNavigation",
            Self::MobileResponsiveness => "mobileResponsiveness",
            Self::OverallSatisfaction => "overallSatisfaction",
            Self::EaseOfTasks => "easeOfTasks",
            Self::QualityOfServices => "qualityOfServices",
        }
    }

    /// Wire name of the paired issue field (`key` + `Issue`).
    pub fn issue_key(self) -> &'static str {
        match self {
            Self::VisualDesign => "visualDesignIssue",
            Self::EaseOfNavigation => "easeOfNavigationIssue",
            Self::MobileResponsiveness => "mobileResponsivenessIssue",
            Self::OverallSatisfaction => "overallSatisfactionIssue",
            Self::EaseOfTasks => "easeOfTasksIssue",
            Self::QualityOfServices => "qualityOfServicesIssue",
        }
    }

    /// Survey question text.
    pub fn question(self) -> &'static str {
        match self {
            Self::VisualDesign => "Visual design and layout",
            Self::EaseOfNavigation => "Ease of navigation",
            Self::MobileResponsiveness => "Mobile responsiveness",
            Self::OverallSatisfaction => "Overall satisfaction with the website",
            Self::EaseOfTasks => {
                "Ease of completing tasks (e.g., finding information, using tools)"
            }
            Self::QualityOfServices => "Quality of services provided",
        }
    }

    /// Survey section the rating belongs to.
    pub fn section(self) -> &'static str {
        match self {
            Self::VisualDesign | Self::EaseOfNavigation | Self::MobileResponsiveness => {
                "User Interface"
            }
            Self::OverallSatisfaction | Self::EaseOfTasks | Self::QualityOfServices => {
                "User Experience"
            }
        }
    }
}

/// Addressable fields of a [`FeedbackBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackField {
    Rating(RatingField),
    Issue(RatingField),
    LikeMost,
    Improvements,
    Features,
    LegalChallenges,
    AdditionalComments,
    ContactWilling,
    ContactEmail,
}

impl FeedbackField {
    /// Free-text suggestion fields in survey order.
    pub const SUGGESTIONS: [Self; 4] = [
        Self::LikeMost,
        Self::Improvements,
        Self::Features,
        Self::LegalChallenges,
    ];

    /// Wire name of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::Rating(r) => r.key(),
            Self::Issue(r) => r.issue_key(),
            Self::LikeMost => "likeMost",
            Self::Improvements => "improvements",
            Self::Features => "features",
            Self::LegalChallenges => "legalChallenges",
            Self::AdditionalComments => "additionalComments",
            Self::ContactWilling => "contactWilling",
            Self::ContactEmail => "contactEmail",
        }
    }

    /// Question text for the non-rating fields.
    pub fn label(self) -> &'static str {
        match self {
            Self::Rating(r) => r.question(),
            Self::Issue(_) => "What didn't you like and why?",
            Self::LikeMost => "What do you like most about our website?",
            Self::Improvements => "What improvements would you suggest for our website?",
            Self::Features => "Are there any features you would like us to add?",
            Self::LegalChallenges => {
                "What legal challenges are you facing that our website could help address?"
            }
            Self::AdditionalComments => "Is there anything else you would like to share?",
            Self::ContactWilling => "Would you be willing to be contacted for further feedback?",
            Self::ContactEmail => "If yes, please provide your email address:",
        }
    }

    /// Looks a field up by its wire name.
    pub fn from_key(key: &str) -> Option<Self> {
        RatingField::ALL
            .into_iter()
            .flat_map(|r| [Self::Rating(r), Self::Issue(r)])
            .chain(Self::SUGGESTIONS)
            .chain([
                Self::AdditionalComments,
                Self::ContactWilling,
                Self::ContactEmail,
            ])
            .find(|f| f.key() == key)
    }
}

/// Values accepted by `contactWilling`; the empty string means unanswered.
pub const CONTACT_CHOICES: [&str; 3] = ["", "yes", "no"];

/// Values typed into the feedback survey.
///
/// Serializes to the body of `POST /api/feedback`: every field as a string
/// under its camelCase wire name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackBuffer {
    pub visual_design: String,
    pub ease_of_navigation: String,
    pub mobile_responsiveness: String,
    pub overall_satisfaction: String,
    pub ease_of_tasks: String,
    pub quality_of_services: String,
    pub like_most: String,
    pub improvements: String,
    pub features: String,
    pub legal_challenges: String,
    pub additional_comments: String,
    pub contact_willing: String,
    pub contact_email: String,
    pub visual_design_issue: String,
    pub ease_of_navigation_issue: String,
    pub mobile_responsiveness_issue: String,
    pub overall_satisfaction_issue: String,
    pub ease_of_tasks_issue: String,
    pub quality_of_services_issue: String,
}

impl FeedbackBuffer {
    /// Returns the current value of `field`.
    pub fn get(&self, field: FeedbackField) -> &str {
        match field {
            FeedbackField::Rating(r) => self.rating(r),
            FeedbackField::Issue(r) => self.issue(r),
            FeedbackField::LikeMost => &self.like_most,
            FeedbackField::Improvements => &self.improvements,
            FeedbackField::Features => &self.features,
            FeedbackField::LegalChallenges => &self.legal_challenges,
            FeedbackField::AdditionalComments => &self.additional_comments,
            FeedbackField::ContactWilling => &self.contact_willing,
            FeedbackField::ContactEmail => &self.contact_email,
        }
    }

    /// Replaces the value of `field`.
    ///
    /// Fields are independent: changing `contactWilling` leaves
    /// `contactEmail` untouched.
    pub fn set(&mut self, field: FeedbackField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Raw text of a rating.
    pub fn rating(&self, rating: RatingField) -> &str {
        match rating {
            RatingField::VisualDesign => &self.visual_design,
            RatingField::EaseOfNavigation => &self.ease_of_navigation,
            RatingField::MobileResponsiveness => &self.mobile_responsiveness,
            RatingField::OverallSatisfaction => &self.overall_satisfaction,
            RatingField::EaseOfTasks => &self.ease_of_tasks,
            RatingField::QualityOfServices => &self.quality_of_services,
        }
    }

    /// Issue text paired with a rating.
    pub fn issue(&self, rating: RatingField) -> &str {
        match rating {
            RatingField::VisualDesign => &self.visual_design_issue,
            RatingField::EaseOfNavigation => &self.ease_of_navigation_issue,
            RatingField::MobileResponsiveness => &self.mobile_responsiveness_issue,
            RatingField::OverallSatisfaction => &self.overall_satisfaction_issue,
            RatingField::EaseOfTasks => &self.ease_of_tasks_issue,
            RatingField::QualityOfServices => &self.quality_of_services_issue,
        }
    }

    /// Returns `true` when the respondent agreed to be contacted.
    pub fn wants_contact(&self) -> bool {
        self.contact_willing == "yes"
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if no field holds any text.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn slot_mut(&mut self, field: FeedbackField) -> &mut String {
        match field {
            FeedbackField::Rating(r) => match r {
                RatingField::VisualDesign => &mut self.visual_design,
                RatingField::EaseOfNavigation => &mut self.ease_of_navigation,
                RatingField::MobileResponsiveness => &mut self.mobile_responsiveness,
                RatingField::OverallSatisfaction => &mut self.overall_satisfaction,
                RatingField::EaseOfTasks => &mut self.ease_of_tasks,
                RatingField::QualityOfServices => &mut self.quality_of_services,
            },
            FeedbackField::Issue(r) => match r {
                RatingField::VisualDesign => &mut self.visual_design_issue,
                RatingField::EaseOfNavigation => &mut self.ease_of_navigation_issue,
                RatingField::MobileResponsiveness => &mut self.mobile_responsiveness_issue,
                RatingField::OverallSatisfaction => &mut self.overall_satisfaction_issue,
                RatingField::EaseOfTasks => &mut self.ease_of_tasks_issue,
                RatingField::QualityOfServices => &mut self.quality_of_services_issue,
            },
            FeedbackField::LikeMost => &mut self.like_most,
            FeedbackField::Improvements => &mut self.improvements,
            FeedbackField::Features => &mut self.features,
            FeedbackField::LegalChallenges => &mut self.legal_challenges,
            FeedbackField::AdditionalComments => &mut self.additional_comments,
            FeedbackField::ContactWilling => &mut self.contact_willing,
            FeedbackField::ContactEmail => &mut self.contact_email,
        }
    }
}
