use reqwest::StatusCode;
use thiserror::Error;
use validator::ValidationErrors;

pub const NO_SESSION_MESSAGE: &str = "No active session found";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{}", NO_SESSION_MESSAGE)]
    NoSession,

    /// The backend answered with a non-success status. `message` is the
    /// text it reported, passed through untouched.
    #[error("{message}")]
    Backend { status: StatusCode, message: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to decode backend response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Coarse classification the presentation layer renders differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoSession,
    Invalid,
    Backend,
}

impl StorageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoSession => ErrorKind::NoSession,
            Self::Validation(_) => ErrorKind::Invalid,
            Self::Backend { .. } | Self::Request(_) | Self::Decode(_) | Self::Config(_) => {
                ErrorKind::Backend
            }
        }
    }

    /// Text shown next to the form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(errors) => describe_validation(errors),
            other => other.to_string(),
        }
    }
}

pub fn describe_validation(errors: &ValidationErrors) -> String {
    let mut field_errors: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                format!(
                    "{}: {}",
                    field,
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                )
            })
        })
        .collect();
    field_errors.sort();

    field_errors.join("; ")
}
