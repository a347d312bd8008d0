//! Client error types.

use provas_core::AggregationError;
use thiserror::Error;

/// Text shown for any failure the backend did not explain.
pub const GENERIC_FAILURE: &str = "Error, try again in a few seconds!";

/// Errors that can occur when talking to the archive backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error: the request never got a usable response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend refused the request and explained why.
    #[error("rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code returned by the backend.
        status: u16,
        /// The backend's `message` field, verbatim.
        message: String,
    },

    /// Non-success status without a structured message.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A success response whose body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// An aggregate payload did not have the expected nesting.
    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    /// The configured base URL cannot be used.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ClientError {
    /// Whether the backend supplied its own explanation.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Text for the user: the backend's message when there is one, the generic
    /// retry text otherwise.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected { message, .. } => message,
            _ => GENERIC_FAILURE,
        }
    }
}
