#![allow(unexpected_cfgs)]
pub mod bridge;
pub mod client;
pub mod crypto;
pub mod error;
pub mod models;
pub mod network;
pub mod photo;
pub mod state;
pub mod validation;

pub use client::FanIdClient;
pub use error::FanIdError;
pub use models::UserProfile;
pub use network::{AuthGateway, GatewayConfig, HttpGateway};
pub use state::SessionStore;

use flutter_rust_bridge::frb;
use tracing_subscriber::EnvFilter;

#[frb(init)]
pub fn init_app() {
    flutter_rust_bridge::setup_default_user_utils();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fanid_core=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
