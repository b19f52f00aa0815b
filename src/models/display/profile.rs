//! Profile display model

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Profile;

/// Profile display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProfileDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "BIO")]
    pub short_bio: String,

    #[tabled(rename = "IMAGE")]
    pub image_url: String,
}

impl From<&Profile> for ProfileDisplay {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            short_bio: profile.short_bio.clone(),
            image_url: profile.profile_image_url.clone(),
        }
    }
}

/// Render the profile card shown above the job filters.
pub fn profile_card(profile: &Profile) -> String {
    format!(
        "{}\n{}\n{}",
        profile.name.bold(),
        profile.short_bio,
        profile.profile_image_url.dimmed()
    )
}
