use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an officer creation request did not produce an officer.
///
/// Every variant is recoverable from the wizard's point of view: the form is
/// kept and the failure is shown as a dismissible banner.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SubmissionFailure {
    /// 400: the server rejected one or more values.
    #[error("validation rejected by server: {0}")]
    Validation(String),
    /// 409: duplicate officer (phone, email or document already registered).
    #[error("officer already exists: {0}")]
    Conflict(String),
    #[error("not authenticated")]
    Unauthorized,
    #[error("not permitted")]
    Forbidden,
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("request cancelled")]
    Cancelled,
    #[error("unexpected response status {status}")]
    Unexpected { status: u16 },
    /// The referenced profile photo could not be read from disk.
    #[error("profile photo unreadable: {0}")]
    PhotoUnreadable(String),
    /// The form could not be mapped to a request (missing required values).
    #[error("form incomplete: {0}")]
    InvalidForm(String),
}

impl SubmissionFailure {
    /// Maps a non-success HTTP status and its body message.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 | 422 => SubmissionFailure::Validation(message),
            401 => SubmissionFailure::Unauthorized,
            403 => SubmissionFailure::Forbidden,
            409 => SubmissionFailure::Conflict(message),
            408 | 504 => SubmissionFailure::Timeout,
            500..=599 => SubmissionFailure::Server { status, message },
            _ => SubmissionFailure::Unexpected { status },
        }
    }

    /// Text for the banner shown above the last step.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionFailure::Validation(msg) if !msg.is_empty() => {
                format!("Please correct the highlighted details: {msg}")
            }
            SubmissionFailure::Validation(_) => {
                "Some details were rejected. Please review the form.".to_string()
            }
            SubmissionFailure::Conflict(msg) if !msg.is_empty() => {
                format!("This officer is already registered: {msg}")
            }
            SubmissionFailure::Conflict(_) => "This officer is already registered.".to_string(),
            SubmissionFailure::Unauthorized => {
                "Your session has expired. Please sign in again.".to_string()
            }
            SubmissionFailure::Forbidden => {
                "You do not have permission to add officers.".to_string()
            }
            SubmissionFailure::Server { .. } => {
                "The server could not create the officer. Please try again later.".to_string()
            }
            SubmissionFailure::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            SubmissionFailure::Timeout => {
                "The server took too long to respond. Please try again.".to_string()
            }
            SubmissionFailure::Cancelled => "Submission was cancelled.".to_string(),
            SubmissionFailure::Unexpected { status } => {
                format!("Unexpected response from server ({status}).")
            }
            SubmissionFailure::PhotoUnreadable(_) => {
                "The profile photo could not be read. Please choose it again.".to_string()
            }
            SubmissionFailure::InvalidForm(msg) => format!("The form is incomplete: {msg}"),
        }
    }

    /// Whether retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SubmissionFailure::Server { .. }
                | SubmissionFailure::Network(_)
                | SubmissionFailure::Timeout
                | SubmissionFailure::Cancelled
        )
    }
}
