use serde_json::Value;

use crate::error::{FanIdError, Result};
use crate::models::UserProfile;

/// Outcome of a login or registration call, once the body has been read.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthReply {
    Accepted(UserProfile),
    /// The backend said no. Carries its `error` string when it sent one.
    Rejected(Option<String>),
}

/// The gateway's replies use JavaScript truthiness: `""`, `0`, `false` and
/// `null` all count as absent.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn error_message(body: &Value) -> Option<String> {
    match body.get("error") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        other if truthy(other) => other.map(|v| v.to_string()),
        _ => None,
    }
}

/// Success means no `error` and a present `id`; anything else is a rejection.
/// A success body that does not parse as a profile is a transport failure.
pub fn classify_auth_reply(body: Value) -> Result<AuthReply> {
    if let Some(message) = error_message(&body) {
        return Ok(AuthReply::Rejected(Some(message)));
    }
    if !truthy(body.get("id")) {
        return Ok(AuthReply::Rejected(None));
    }
    let profile = serde_json::from_value::<UserProfile>(body)?;
    Ok(AuthReply::Accepted(profile))
}

/// Returns the new photo URL, or an `Upload` error.
pub fn classify_photo_reply(body: &Value) -> Result<String> {
    if let Some(message) = error_message(body) {
        return Err(FanIdError::Upload(message));
    }
    match body.get("pfp_url") {
        Some(Value::String(url)) if !url.is_empty() => Ok(url.clone()),
        _ => Err(FanIdError::Upload("reply has no pfp_url".into())),
    }
}
