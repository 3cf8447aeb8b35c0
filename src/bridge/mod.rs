//! Surface exposed to the Flutter screens through flutter_rust_bridge.
//!
//! The app root builds one `FanIdApp` and hands it to every screen. Errors
//! cross the bridge as `anyhow::Error`; their message is what the screen
//! shows inline.

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use flutter_rust_bridge::frb;

use crate::client::FanIdClient;
use crate::models::{self, ProfileCard};
use crate::network::{GatewayConfig, HttpGateway};
use crate::photo::{CameraPermission, PhotoSource};
use crate::state::SessionStore;
use crate::validation::{LoginForm, RegistrationForm};

pub struct FanIdApp {
    client: FanIdClient,
    camera: Mutex<CameraPermission>,
}

impl FanIdApp {
    /// Gateway settings come from `FANID_*` variables over built-in defaults.
    #[frb(sync)]
    pub fn new() -> Result<FanIdApp> {
        let config = GatewayConfig::from_env()?;
        Self::with_config(config)
    }

    #[frb(ignore)]
    pub fn with_config(config: GatewayConfig) -> Result<FanIdApp> {
        let token = config.app_token.clone();
        let gateway = Arc::new(HttpGateway::new(config)?);
        Ok(Self::from_client(FanIdClient::new(
            gateway,
            SessionStore::new(),
            token,
        )))
    }

    #[frb(ignore)]
    pub fn from_client(client: FanIdClient) -> FanIdApp {
        Self {
            client,
            camera: Mutex::new(CameraPermission::default()),
        }
    }

    pub async fn login(&self, username: String, password: String) -> Result<ProfileCard> {
        let form = LoginForm { username, password };
        let profile = self.client.login(&form).await?;
        Ok(ProfileCard::from(&profile))
    }

    pub async fn register(
        &self,
        firstname: String,
        lastname: String,
        id: String,
        email: String,
        username: String,
        password: String,
    ) -> Result<ProfileCard> {
        let form = RegistrationForm {
            firstname,
            lastname,
            id,
            email,
            username,
            password,
        };
        let profile = self.client.register(&form).await?;
        Ok(ProfileCard::from(&profile))
    }

    /// Reports the outcome of the platform camera permission prompt.
    #[frb(sync)]
    pub fn set_camera_permission(&self, granted: bool) -> Result<()> {
        let mut camera = self.camera.lock().map_err(|_| anyhow!("lock poisoned"))?;
        *camera = if granted {
            CameraPermission::Granted
        } else {
            CameraPermission::Denied
        };
        Ok(())
    }

    #[frb(sync)]
    pub fn camera_permission_granted(&self) -> bool {
        self.camera
            .lock()
            .map(|c| c.is_granted())
            .unwrap_or(false)
    }

    pub async fn update_photo_from_gallery(&self, uri: String) -> Result<String> {
        self.update_photo(PhotoSource::Gallery(uri)).await
    }

    pub async fn update_photo_from_camera(&self, uri: String) -> Result<String> {
        self.update_photo(PhotoSource::Camera(uri)).await
    }

    async fn update_photo(&self, source: PhotoSource) -> Result<String> {
        let camera = *self.camera.lock().map_err(|_| anyhow!("lock poisoned"))?;
        let url = self.client.update_profile_photo(&source, camera).await?;
        Ok(url)
    }

    #[frb(sync)]
    pub fn current_profile(&self) -> Option<ProfileCard> {
        self.client.session().get().as_ref().map(ProfileCard::from)
    }

    #[frb(sync)]
    pub fn is_submitting(&self) -> bool {
        self.client.is_submitting()
    }

    #[frb(sync)]
    pub fn logout(&self) {
        self.client.logout();
    }
}

#[frb(sync)]
pub fn credits() -> Vec<String> {
    models::credits()
        .iter()
        .map(|member| member.name.to_string())
        .collect()
}
