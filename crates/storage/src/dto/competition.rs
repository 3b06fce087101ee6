use chrono::Datelike;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use super::{optional_text, parse_date_input, validate_date_input};
use crate::models::NewCompetition;

pub const LEVEL_OPTIONS: &[&str] = &["local", "regional", "national", "international"];

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Editable state of the competition creator.
///
/// There is no visibility or organizer field: both are decided when the
/// insert payload is built, never by the person filling in the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CompetitionForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(range(
        min = 1900,
        max = 2100,
        message = "Year must be between 1900 and 2100"
    ))]
    pub year: Option<i32>,

    #[validate(custom(function = "validate_date_input"))]
    pub start_date: String,

    #[validate(custom(function = "validate_date_input"))]
    pub end_date: String,

    pub sport: String,

    pub venue: String,

    pub city: String,

    pub country: String,

    #[validate(custom(function = "validate_level"))]
    pub level_of_competition: String,
}

fn validate_level(level: &str) -> Result<(), validator::ValidationError> {
    super::validate_option(level, LEVEL_OPTIONS, "invalid_level_of_competition")
}

impl Default for CompetitionForm {
    fn default() -> Self {
        Self::for_year(current_year())
    }
}

impl CompetitionForm {
    /// Blank form with the year pre-filled.
    pub fn for_year(year: i32) -> Self {
        Self {
            name: String::new(),
            year: Some(year),
            start_date: String::new(),
            end_date: String::new(),
            sport: String::new(),
            venue: String::new(),
            city: String::new(),
            country: String::new(),
            level_of_competition: String::new(),
        }
    }

    /// Builds the insert payload. The competition is always created hidden
    /// and owned by `organizer_id`. Start and end dates are not compared.
    pub fn to_new_competition(
        &self,
        organizer_id: Uuid,
    ) -> Result<NewCompetition, ValidationErrors> {
        self.validate()?;

        Ok(NewCompetition {
            name: self.name.clone(),
            organizer_id,
            is_public: false,
            year: self.year,
            start_date: parse_date_input(&self.start_date),
            end_date: parse_date_input(&self.end_date),
            sport: optional_text(&self.sport),
            venue: optional_text(&self.venue),
            city: optional_text(&self.city),
            country: optional_text(&self.country),
            level_of_competition: optional_text(&self.level_of_competition),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn organizer() -> Uuid {
        Uuid::parse_str("5f0a6c2e-1b7d-4e3f-8a9b-0c1d2e3f4a5b").unwrap()
    }

    fn filled_form() -> CompetitionForm {
        CompetitionForm {
            name: "Spring Open".to_string(),
            year: Some(2025),
            start_date: "2025-04-12".to_string(),
            end_date: "2025-04-10".to_string(),
            sport: "streetlifting".to_string(),
            venue: "Gym 42".to_string(),
            city: "Lyon".to_string(),
            country: "France".to_string(),
            level_of_competition: "national".to_string(),
        }
    }

    #[test]
    fn test_default_form_uses_current_year() {
        let form = CompetitionForm::default();
        assert_eq!(form.year, Some(current_year()));
        assert_eq!(form.name, "");
        assert_eq!(form, CompetitionForm::for_year(current_year()));
    }

    #[test]
    fn test_payload_is_hidden_and_owned_by_organizer() {
        let payload = filled_form().to_new_competition(organizer()).unwrap();

        assert!(!payload.is_public);
        assert_eq!(payload.organizer_id, organizer());
        assert_eq!(payload.name, "Spring Open");
        assert_eq!(payload.level_of_competition.as_deref(), Some("national"));
    }

    #[test]
    fn test_end_before_start_is_accepted() {
        let payload = filled_form().to_new_competition(organizer()).unwrap();
        assert_eq!(payload.start_date, NaiveDate::from_ymd_opt(2025, 4, 12));
        assert_eq!(payload.end_date, NaiveDate::from_ymd_opt(2025, 4, 10));
    }

    #[test]
    fn test_blank_optional_fields_are_null() {
        let form = CompetitionForm {
            name: "Club Meet".to_string(),
            ..CompetitionForm::for_year(2024)
        };

        let payload = form.to_new_competition(organizer()).unwrap();
        assert_eq!(payload.start_date, None);
        assert_eq!(payload.sport, None);
        assert_eq!(payload.level_of_competition, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["venue"].is_null());
        assert_eq!(json["is_public"], false);
    }

    #[test]
    fn test_name_is_required() {
        let form = CompetitionForm::for_year(2024);
        let errors = form.to_new_competition(organizer()).unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_year_out_of_range_is_rejected() {
        for year in [1899, 2101] {
            let form = CompetitionForm {
                year: Some(year),
                ..filled_form()
            };
            let errors = form.to_new_competition(organizer()).unwrap_err();
            assert!(errors.field_errors().contains_key("year"));
        }

        let form = CompetitionForm {
            year: None,
            ..filled_form()
        };
        assert!(form.to_new_competition(organizer()).is_ok());
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let form = CompetitionForm {
            level_of_competition: "galactic".to_string(),
            ..filled_form()
        };
        assert!(form.to_new_competition(organizer()).is_err());
    }
}
