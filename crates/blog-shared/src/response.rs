//! Standardized API response types.
//!
//! Errors carry a single `detail` member: a message for 404/500, or a list of
//! field errors for 422.

use serde::{Deserialize, Serialize};

/// Plain informational body, e.g. the service banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One rejected input location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path to the offending input, e.g. `["body", "title"]` or `["query", "skip"]`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub error_type: String,
}

impl FieldError {
    pub fn new<I, S>(loc: I, msg: impl Into<String>, error_type: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            loc: loc.into_iter().map(Into::into).collect(),
            msg: msg.into(),
            error_type: error_type.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

/// Error body: `{"detail": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: ErrorDetail,
}

impl ErrorResponse {
    pub fn message(detail: impl Into<String>) -> Self {
        Self {
            detail: ErrorDetail::Message(detail.into()),
        }
    }

    pub fn fields(errors: Vec<FieldError>) -> Self {
        Self {
            detail: ErrorDetail::Fields(errors),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::message(detail)
    }

    /// Generic body for unexpected failures; never carries internal detail.
    pub fn internal_error() -> Self {
        Self::message("An unexpected error occurred.")
    }
}
