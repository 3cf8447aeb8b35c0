use thiserror::Error;

use crate::validation::ValidationError;

/// Every failure a Fan ID operation can report back to a screen.
#[derive(Debug, Error)]
pub enum FanIdError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid username or password")]
    Authentication,

    /// Carries the backend's own error string, unmodified.
    #[error("{0}")]
    Registration(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("profile photo upload failed: {0}")]
    Upload(String),

    #[error("no active session")]
    NotAuthenticated,

    #[error("camera permission has not been granted")]
    CameraPermissionRequired,

    #[error("a submission is already in progress")]
    SubmissionInFlight,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("could not read image: {0}")]
    Io(#[from] std::io::Error),
}

impl FanIdError {
    /// True for errors shown inline on the screen. Transport and upload
    /// failures only reach the log.
    pub fn is_user_visible(&self) -> bool {
        match self {
            Self::Validation(_)
            | Self::Authentication
            | Self::Registration(_)
            | Self::NotAuthenticated
            | Self::CameraPermissionRequired
            | Self::SubmissionInFlight => true,
            Self::Transport(_) | Self::Upload(_) | Self::Config(_) | Self::Io(_) => false,
        }
    }
}

impl From<reqwest::Error> for FanIdError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for FanIdError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(format!("malformed reply: {err}"))
    }
}

pub type Result<T, E = FanIdError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Field;

    #[test]
    fn test_visibility_split() {
        assert!(FanIdError::Authentication.is_user_visible());
        assert!(FanIdError::Validation(ValidationError::Missing(Field::Email)).is_user_visible());
        assert!(!FanIdError::Transport("timeout".into()).is_user_visible());
        assert!(!FanIdError::Upload("500".into()).is_user_visible());
    }

    #[test]
    fn test_registration_error_is_verbatim() {
        let err = FanIdError::Registration("Usuario ya existe".into());
        assert_eq!(err.to_string(), "Usuario ya existe");
    }
}
