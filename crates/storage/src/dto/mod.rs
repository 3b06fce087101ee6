pub mod competition;
pub mod profile;

use chrono::NaiveDate;
use validator::ValidationError;

/// Wire format of an HTML date input.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Empty input means "not set".
pub(crate) fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub(crate) fn text_or_empty(value: Option<String>) -> String {
    value.unwrap_or_default()
}

pub(crate) fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
}

pub(crate) fn format_date_input(value: Option<NaiveDate>) -> String {
    value
        .map(|date| date.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

fn validate_date_input(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || parse_date_input(value).is_some() {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_date");
        err.message = Some("Date must use the YYYY-MM-DD format".into());
        Err(err)
    }
}

/// Select inputs accept an empty value or one of their options.
fn validate_option(value: &str, options: &[&str], code: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || options.contains(&value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::new(code))
    }
}
