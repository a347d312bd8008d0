//! Error types for the core crate.
//!
//! Transport errors live in `provas-client`; the binary converges everything
//! into `anyhow`.

use thiserror::Error;

/// Errors raised while validating an aggregate catalog payload.
#[derive(Debug, Error)]
pub enum AggregationError {
    /// The payload does not match the expected aggregate shape.
    #[error("malformed {view} payload: {source}")]
    Shape {
        view: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An entity carried the unset id `0`.
    #[error("{entity} at {path} has invalid id 0")]
    InvalidId { entity: &'static str, path: String },
}

/// Errors raised by the dependent selection controller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    /// At least one draft field is still unset.
    #[error("All fields are required!")]
    Incomplete,
}
