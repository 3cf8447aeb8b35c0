//! Screen-facing operations: validate, submit, and fold the reply into the
//! session.

use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::error::{FanIdError, Result};
use crate::models::UserProfile;
use crate::network::{
    classify_auth_reply, classify_photo_reply, AuthGateway, AuthReply, LoginSubmission,
    PhotoSubmission, RegistrationSubmission,
};
use crate::photo::{read_image, CameraPermission, PhotoSource};
use crate::state::{SessionStore, SubmissionGuard};
use crate::validation::{LoginForm, RegistrationForm};

const REGISTRATION_FAILED: &str = "registration failed";

#[derive(Clone)]
pub struct FanIdClient {
    gateway: Arc<dyn AuthGateway>,
    session: SessionStore,
    guard: SubmissionGuard,
    app_token: String,
}

impl FanIdClient {
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        session: SessionStore,
        app_token: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            session,
            guard: SubmissionGuard::new(),
            app_token: app_token.into(),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn is_submitting(&self) -> bool {
        self.guard.is_pending()
    }

    /// On success the returned profile is also the new session.
    pub async fn login(&self, form: &LoginForm) -> Result<UserProfile> {
        let submission = LoginSubmission::new(form, &self.app_token)?;
        let _ticket = self.guard.try_begin()?;

        let span = info_span!("login", request_id = %Uuid::new_v4(), user = %submission.user);
        async {
            let body = self.gateway.login(submission).await.inspect_err(|e| {
                warn!(error = %e, "login transport failure");
            })?;

            match classify_auth_reply(body)? {
                AuthReply::Accepted(profile) => {
                    info!(user_id = profile.id, "login accepted");
                    self.session.set(profile.clone());
                    Ok(profile)
                }
                AuthReply::Rejected(reason) => {
                    info!(reason = reason.as_deref().unwrap_or("missing id"), "login rejected");
                    Err(FanIdError::Authentication)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// On success the returned profile is also the new session. Backend
    /// rejections come back verbatim as `Registration`.
    pub async fn register(&self, form: &RegistrationForm) -> Result<UserProfile> {
        let submission = RegistrationSubmission::new(form, &self.app_token)?;
        let _ticket = self.guard.try_begin()?;

        let span = info_span!(
            "register",
            request_id = %Uuid::new_v4(),
            user = %submission.username
        );
        async {
            let body = self.gateway.register(submission).await.inspect_err(|e| {
                warn!(error = %e, "registration transport failure");
            })?;

            match classify_auth_reply(body)? {
                AuthReply::Accepted(profile) => {
                    info!(user_id = profile.id, "registration accepted");
                    self.session.set(profile.clone());
                    Ok(profile)
                }
                AuthReply::Rejected(reason) => {
                    info!(?reason, "registration rejected");
                    Err(FanIdError::Registration(
                        reason.unwrap_or_else(|| REGISTRATION_FAILED.to_string()),
                    ))
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Reads the picked or captured image and uploads it.
    pub async fn update_profile_photo(
        &self,
        source: &PhotoSource,
        camera: CameraPermission,
    ) -> Result<String> {
        source.check_permission(camera)?;
        if !self.session.is_active() {
            return Err(FanIdError::NotAuthenticated);
        }
        let image = read_image(source).await.inspect_err(|e| {
            warn!(uri = source.uri(), error = %e, "could not load picked image");
        })?;
        self.upload_profile_photo(image).await
    }

    /// Uploads a JPEG for the current user. Only `pfp_url` of the session
    /// changes, and only if the same user is still signed in when the reply
    /// arrives. Failures leave the session untouched.
    pub async fn upload_profile_photo(&self, image: Vec<u8>) -> Result<String> {
        let user_id = self
            .session
            .get()
            .map(|p| p.id)
            .ok_or(FanIdError::NotAuthenticated)?;
        let _ticket = self.guard.try_begin()?;

        let span = info_span!(
            "set_profile_photo",
            request_id = %Uuid::new_v4(),
            user_id,
            bytes = image.len()
        );
        async {
            let submission = PhotoSubmission::new(&self.app_token, user_id, image);
            let body = self
                .gateway
                .set_profile_photo(submission)
                .await
                .map_err(|e| match e {
                    FanIdError::Transport(msg) => FanIdError::Upload(msg),
                    other => other,
                })
                .inspect_err(|e| warn!(error = %e, "profile photo upload failed"))?;

            let url = classify_photo_reply(&body)
                .inspect_err(|e| warn!(error = %e, "profile photo rejected"))?;

            let applied = self.session.update(|profile| {
                if profile.id != user_id {
                    return false;
                }
                profile.pfp_url = url.clone();
                true
            });
            if !applied {
                warn!("session changed during upload, discarding new photo url");
                return Err(FanIdError::NotAuthenticated);
            }

            debug!(%url, "profile photo updated");
            Ok(url)
        }
        .instrument(span)
        .await
    }

    pub fn logout(&self) {
        self.session.clear();
        info!("logged out");
    }
}
