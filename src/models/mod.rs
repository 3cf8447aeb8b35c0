pub mod credits;
pub mod profile_card;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub use credits::{credits, TeamMember};
pub use profile_card::ProfileCard;

pub const DEFAULT_PFP_URL: &str = "http://monsterballgo.com/media/usr/default.png";

/// The authenticated user as the backend returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(deserialize_with = "numeric_id")]
    pub id: u64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub firstname: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub lastname: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub email: String,
    #[serde(default = "default_pfp_url", deserialize_with = "pfp_url_or_default")]
    pub pfp_url: String,
    /// Anything else in the reply, kept but never interpreted.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }
}

fn default_pfp_url() -> String {
    DEFAULT_PFP_URL.to_string()
}

/// `null` reads as an empty string.
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// New accounts come back with `pfp_url: null` or `""` until a photo is set.
fn pfp_url_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|url| !url.is_empty())
        .unwrap_or_else(default_pfp_url))
}

/// Accepts `7` as well as `"7"`.
fn numeric_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(n),
        RawId::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("id is not numeric: {s:?}"))),
    }
}
