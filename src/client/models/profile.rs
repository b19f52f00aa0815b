//! Profile models

use serde::{Deserialize, Serialize};

/// `GET /profile` response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub profile_details: RawProfile,
}

/// Profile exactly as the API sends it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProfile {
    pub name: String,
    pub profile_image_url: String,
    pub short_bio: String,
}

/// Normalized profile record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub profile_image_url: String,
    pub short_bio: String,
}

impl From<RawProfile> for Profile {
    fn from(raw: RawProfile) -> Self {
        Self {
            name: raw.name,
            profile_image_url: raw.profile_image_url,
            short_bio: raw.short_bio,
        }
    }
}

impl From<ProfileResponse> for Profile {
    fn from(response: ProfileResponse) -> Self {
        Profile::from(response.profile_details)
    }
}
