use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use super::{format_date_input, optional_text, parse_date_input, text_or_empty, validate_date_input};
use crate::models::Profile;

pub const GENDER_OPTIONS: &[&str] = &["male", "female", "other"];

/// Editable state of the profile editor. Every field is the raw input text;
/// an empty string stands for a missing value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct ProfileForm {
    #[validate(custom(function = "validate_date_input"))]
    pub date_of_birth: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    pub athlete_status: String,

    pub profile_identity: String,
}

fn validate_gender(gender: &str) -> Result<(), validator::ValidationError> {
    super::validate_option(gender, GENDER_OPTIONS, "invalid_gender")
}

impl ProfileForm {
    /// Builds the upsert row for `user_id` after checking the input constraints.
    pub fn to_profile(&self, user_id: Uuid) -> Result<Profile, ValidationErrors> {
        self.validate()?;

        Ok(Profile {
            id: user_id,
            date_of_birth: parse_date_input(&self.date_of_birth),
            gender: optional_text(&self.gender),
            athlete_status: optional_text(&self.athlete_status),
            profile_identity: optional_text(&self.profile_identity),
        })
    }
}

impl From<Profile> for ProfileForm {
    fn from(profile: Profile) -> Self {
        Self {
            date_of_birth: format_date_input(profile.date_of_birth),
            gender: text_or_empty(profile.gender),
            athlete_status: text_or_empty(profile.athlete_status),
            profile_identity: text_or_empty(profile.profile_identity),
        }
    }
}
