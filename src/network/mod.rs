pub mod config;
pub mod gateway;
pub mod reply;
pub mod submission;

pub use config::{Endpoint, GatewayConfig};
pub use gateway::{AuthGateway, HttpGateway};
pub use reply::{classify_auth_reply, classify_photo_reply, AuthReply};
pub use submission::{LoginSubmission, PhotoSubmission, RegistrationSubmission};
