//! Field checks run on raw form input before anything leaves the device.
//!
//! Checks short-circuit: the first failing rule is the one reported, so a
//! form with several problems shows them one at a time as the user fixes
//! each field.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Form fields, in the order registration checks them for emptiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Firstname,
    Lastname,
    Id,
    Email,
    Username,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Firstname => "first name",
            Field::Lastname => "last name",
            Field::Id => "ID",
            Field::Email => "email",
            Field::Username => "username",
            Field::Password => "password",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please enter your {0}")]
    Missing(Field),

    #[error("the ID must contain digits only")]
    NonNumericId,

    #[error("the email address format is incorrect")]
    InvalidEmail,

    #[error("the password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
}

impl ValidationError {
    /// The field the message refers to, for inline placement.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Missing(field) => *field,
            ValidationError::NonNumericId => Field::Id,
            ValidationError::InvalidEmail => Field::Email,
            ValidationError::PasswordTooShort { .. } => Field::Password,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub firstname: String,
    pub lastname: String,
    pub id: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl RegistrationForm {
    fn required(&self) -> [(Field, &str); 6] {
        [
            (Field::Firstname, self.firstname.as_str()),
            (Field::Lastname, self.lastname.as_str()),
            (Field::Id, self.id.as_str()),
            (Field::Email, self.email.as_str()),
            (Field::Username, self.username.as_str()),
            (Field::Password, self.password.as_str()),
        ]
    }
}

fn numeric_id() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+$").expect("static regex"))
}

fn email_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"))
}

pub fn validate_login(form: &LoginForm) -> Result<(), ValidationError> {
    if form.username.is_empty() {
        return Err(ValidationError::Missing(Field::Username));
    }
    if form.password.is_empty() {
        return Err(ValidationError::Missing(Field::Password));
    }
    Ok(())
}

pub fn validate_registration(form: &RegistrationForm) -> Result<(), ValidationError> {
    if let Some((field, _)) = form.required().into_iter().find(|(_, v)| v.is_empty()) {
        return Err(ValidationError::Missing(field));
    }

    // ASCII digits only.
    if !numeric_id().is_match(&form.id) {
        return Err(ValidationError::NonNumericId);
    }

    if !email_shape().is_match(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }

    // Length is in chars, not UTF-16 units or bytes.
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }

    Ok(())
}
