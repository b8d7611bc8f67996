//! Error types for the todo API client.
//!
//! # Design
//! The client deliberately does not distinguish failure kinds beyond what
//! the UI needs: a network-level failure, a non-2xx response, or a list
//! body that would not deserialize. All three abandon the attempted action;
//! only the very first load renders the error text, so each variant's
//! `Display` output doubles as the user-facing description.

use std::fmt;

use crate::http::TransportError;

/// Errors produced while performing an API call.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response. Carries the transport's
    /// description of the failure.
    Transport(String),

    /// The server answered with a non-2xx status.
    Http { status: u16, body: String },

    /// The list response body could not be deserialized.
    Json(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(description) => write!(f, "{description}"),
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Json(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Transport(err.0)
    }
}
