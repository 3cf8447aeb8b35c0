use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, warn};

use super::config::{Endpoint, GatewayConfig};
use super::submission::{
    LoginSubmission, PhotoSubmission, RegistrationSubmission, PHOTO_FILE_NAME, PHOTO_MIME,
};
use crate::error::{FanIdError, Result};

/// The remote login/register/photo backend. Implementations return the
/// decoded JSON body; deciding what it means is left to the caller.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, submission: LoginSubmission) -> Result<Value>;

    async fn register(&self, submission: RegistrationSubmission) -> Result<Value>;

    async fn set_profile_photo(&self, submission: PhotoSubmission) -> Result<Value>;
}

/// `AuthGateway` over HTTP, posting multipart forms.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| FanIdError::Config(format!("HTTP client error: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    async fn post_form(&self, endpoint: Endpoint, form: Form) -> Result<Value> {
        let url = self.config.endpoint(endpoint);
        debug!(%url, "posting form");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(%url, error = %e, "request failed");
                FanIdError::Transport(format!("request to {url} failed: {e}"))
            })?;

        // The backend reports failures in the JSON body, whatever the status.
        let status = response.status();
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(%url, %status, error = %e, "reply is not JSON");
            FanIdError::Transport(format!("malformed reply ({status}): {e}"))
        })
    }
}

fn text_form(fields: Vec<(&'static str, String)>) -> Form {
    fields
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value))
}

#[async_trait]
impl AuthGateway for HttpGateway {
    async fn login(&self, submission: LoginSubmission) -> Result<Value> {
        self.post_form(Endpoint::Login, text_form(submission.fields()))
            .await
    }

    async fn register(&self, submission: RegistrationSubmission) -> Result<Value> {
        self.post_form(Endpoint::Register, text_form(submission.fields()))
            .await
    }

    async fn set_profile_photo(&self, submission: PhotoSubmission) -> Result<Value> {
        let fields = submission.fields();
        let image = Part::bytes(submission.image)
            .file_name(PHOTO_FILE_NAME)
            .mime_str(PHOTO_MIME)?;
        let form = text_form(fields).part("image", image);
        self.post_form(Endpoint::SetProfilePhoto, form).await
    }
}
