//! Transport-ready request bodies.
//!
//! A submission only exists for one outbound call. The plaintext password
//! never reaches it: constructors digest it immediately.

use std::fmt;

use crate::crypto::password_digest;
use crate::validation::{
    validate_login, validate_registration, LoginForm, RegistrationForm, ValidationError,
};

pub const PHOTO_FILE_NAME: &str = "image0ne";
pub const PHOTO_MIME: &str = "image/jpeg";

pub struct LoginSubmission {
    pub token: String,
    pub user: String,
    pub pass_digest: String,
}

impl LoginSubmission {
    pub fn new(form: &LoginForm, token: &str) -> Result<Self, ValidationError> {
        validate_login(form)?;
        Ok(Self {
            token: token.to_string(),
            user: form.username.clone(),
            pass_digest: password_digest(&form.password),
        })
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("token", self.token.clone()),
            ("user", self.user.clone()),
            ("pass", self.pass_digest.clone()),
        ]
    }
}

pub struct RegistrationSubmission {
    pub token: String,
    pub id: String,
    pub username: String,
    pub pass_digest: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
}

impl RegistrationSubmission {
    pub fn new(form: &RegistrationForm, token: &str) -> Result<Self, ValidationError> {
        validate_registration(form)?;
        Ok(Self {
            token: token.to_string(),
            id: form.id.clone(),
            username: form.username.clone(),
            pass_digest: password_digest(&form.password),
            email: form.email.clone(),
            firstname: form.firstname.clone(),
            lastname: form.lastname.clone(),
        })
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("token", self.token.clone()),
            ("id", self.id.clone()),
            ("username", self.username.clone()),
            ("pass", self.pass_digest.clone()),
            ("email", self.email.clone()),
            ("firstname", self.firstname.clone()),
            ("lastname", self.lastname.clone()),
        ]
    }
}

pub struct PhotoSubmission {
    pub token: String,
    pub user_id: u64,
    pub image: Vec<u8>,
}

impl PhotoSubmission {
    pub fn new(token: &str, user_id: u64, image: Vec<u8>) -> Self {
        Self {
            token: token.to_string(),
            user_id,
            image,
        }
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("token", self.token.clone()),
            ("id", self.user_id.to_string()),
        ]
    }
}

// The digest is replayable, so it stays out of logs.

impl fmt::Debug for LoginSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginSubmission")
            .field("user", &self.user)
            .field("pass_digest", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for RegistrationSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationSubmission")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("pass_digest", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for PhotoSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoSubmission")
            .field("user_id", &self.user_id)
            .field("image_bytes", &self.image.len())
            .finish_non_exhaustive()
    }
}
