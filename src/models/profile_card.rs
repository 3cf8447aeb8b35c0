use serde::Serialize;

use super::UserProfile;

/// What the profile screen shows, grouped the way the screen's collapsible
/// sections are.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileCard {
    pub photo_url: String,
    pub personal: PersonalSection,
    pub account: AccountSection,
    pub contact: ContactSection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalSection {
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSection {
    pub username: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSection {
    pub email: String,
}

impl From<&UserProfile> for ProfileCard {
    fn from(profile: &UserProfile) -> Self {
        Self {
            photo_url: profile.pfp_url.clone(),
            personal: PersonalSection {
                full_name: profile.full_name(),
            },
            account: AccountSection {
                username: profile.username.clone(),
                id: profile.id.to_string(),
            },
            contact: ContactSection {
                email: profile.email.clone(),
            },
        }
    }
}
