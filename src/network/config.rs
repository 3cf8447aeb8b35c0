use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FanIdError, Result};

/// Identifies this app to the backend. Every install ships the same value,
/// so treat it as a public client id, not a secret.
pub const DEFAULT_APP_TOKEN: &str = "code37";
pub const DEFAULT_BASE_URL: &str = "http://monsterballgo.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Register,
    SetProfilePhoto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub base_url: String,
    pub login_path: String,
    pub register_path: String,
    pub set_profile_photo_path: String,
    pub app_token: String,
    #[serde(with = "secs")]
    pub request_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login_path: "/api/login".to_string(),
            register_path: "/api/register".to_string(),
            set_profile_photo_path: "/api/set_pfp".to_string(),
            app_token: DEFAULT_APP_TOKEN.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GatewayConfig {
    /// Defaults overridden by any `FANID_*` variables that are set.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(v) = env::var("FANID_BASE_URL") {
            config.base_url = v;
        }
        if let Ok(v) = env::var("FANID_LOGIN_PATH") {
            config.login_path = v;
        }
        if let Ok(v) = env::var("FANID_REGISTER_PATH") {
            config.register_path = v;
        }
        if let Ok(v) = env::var("FANID_PHOTO_PATH") {
            config.set_profile_photo_path = v;
        }
        if let Ok(v) = env::var("FANID_APP_TOKEN") {
            config.app_token = v;
        }
        if let Ok(v) = env::var("FANID_TIMEOUT_SECS") {
            let secs: u64 = v.trim().parse().map_err(|_| {
                FanIdError::Config(format!("FANID_TIMEOUT_SECS is not a number: {v:?}"))
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(FanIdError::Config(format!(
                "base url must be http(s): {:?}",
                self.base_url
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(FanIdError::Config("request timeout must be non-zero".into()));
        }
        Ok(())
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> String {
        let path = match endpoint {
            Endpoint::Login => &self.login_path,
            Endpoint::Register => &self.register_path,
            Endpoint::SetProfilePhoto => &self.set_profile_photo_path,
        };
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

mod secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}
