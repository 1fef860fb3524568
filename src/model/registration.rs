use std::fmt;

use serde::{Deserialize, Serialize};

/// Waitlist category chosen on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserType {
    /// A reader of legal content.
    #[default]
    #[serde(rename = "USER")]
    User,
    /// An author publishing legal content.
    #[serde(rename = "Creator")]
    Creator,
}

impl UserType {
    /// The name the backend expects in the `userType` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Creator => "Creator",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Addressable fields of a [`RegistrationBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    Name,
    Email,
    Phone,
    Gender,
    Profession,
}

impl RegistrationField {
    /// All fields in form order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Gender,
        Self::Profession,
    ];

    /// Wire name of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Gender => "gender",
            Self::Profession => "profession",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::Gender => "Gender",
            Self::Profession => "Profession",
        }
    }

    /// Whether the form refuses to submit while this field is empty.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Phone)
    }

    /// Looks a field up by its wire name.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Gender choices offered by the form as `(value, label)` pairs.
///
/// The empty value is the unselected state.
pub const GENDER_OPTIONS: [(&str, &str); 5] = [
    ("", "Select Gender"),
    ("male", "Male"),
    ("female", "Female"),
    ("other", "Other"),
    ("prefer-not-to-say", "Prefer not to say"),
];

/// Values typed into the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationBuffer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub profession: String,
}

impl RegistrationBuffer {
    /// Returns the current value of `field`.
    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Name => &self.name,
            RegistrationField::Email => &self.email,
            RegistrationField::Phone => &self.phone,
            RegistrationField::Gender => &self.gender,
            RegistrationField::Profession => &self.profession,
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: RegistrationField, value: impl Into<String>) {
        let slot = match field {
            RegistrationField::Name => &mut self.name,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Phone => &mut self.phone,
            RegistrationField::Gender => &mut self.gender,
            RegistrationField::Profession => &mut self.profession,
        };
        *slot = value.into();
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if no field holds any text.
    pub fn is_empty(&self) -> bool {
        RegistrationField::ALL
            .into_iter()
            .all(|f| self.get(f).is_empty())
    }
}

/// Body of `POST /api/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub profession: String,
    pub user_type: UserType,
}

impl RegistrationRequest {
    /// Snapshots the buffer together with the selected user type.
    pub fn new(buffer: &RegistrationBuffer, user_type: UserType) -> Self {
        Self {
            name: buffer.name.clone(),
            email: buffer.email.clone(),
            phone: buffer.phone.clone(),
            gender: buffer.gender.clone(),
            profession: buffer.profession.clone(),
            user_type,
        }
    }
}
