use thiserror::Error;
use wf_core::submission::SubmissionFailure;

use crate::http::dto::ErrorBody;

/// Longest error body excerpt carried into messages.
const MAX_MESSAGE_LEN: usize = 200;

#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("invalid HTTP client configuration: {0}")]
    Config(String),

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response (status {status}): {message}")]
    Decode { status: u16, message: String },
}

impl From<reqwest::Error> for HttpClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            HttpClientError::Timeout
        } else if let Some(status) = error.status() {
            HttpClientError::Status {
                status: status.as_u16(),
                message: error.to_string(),
            }
        } else if error.is_decode() {
            HttpClientError::Decode {
                status: 0,
                message: error.to_string(),
            }
        } else {
            HttpClientError::Network(error.to_string())
        }
    }
}

impl From<HttpClientError> for SubmissionFailure {
    fn from(error: HttpClientError) -> Self {
        match error {
            HttpClientError::Timeout => SubmissionFailure::Timeout,
            HttpClientError::Network(msg) | HttpClientError::Config(msg) => {
                SubmissionFailure::Network(msg)
            }
            HttpClientError::Status { status, message } => {
                SubmissionFailure::from_status(status, message)
            }
            HttpClientError::Decode { status, message } => SubmissionFailure::Server {
                status,
                message: format!("malformed response: {message}"),
            },
        }
    }
}

/// Human readable message from an error response body.
///
/// Prefers the backend's `message`/`error` field, then the raw text.
pub(crate) fn error_message(body: &str, fallback: &str) -> String {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| body.trim().to_string());
    if message.is_empty() {
        return fallback.to_string();
    }
    match message.char_indices().nth(MAX_MESSAGE_LEN) {
        Some((cut, _)) => format!("{}...", &message[..cut]),
        None => message,
    }
}
