//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks so the request methods in `client` stay
//! focused on paths and envelopes.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. A failure body of the form
/// `{"message": "..."}` becomes [`ClientError::Rejected`]; any other failure
/// becomes [`ClientError::Api`] with the raw body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(classify_failure(status.as_u16(), body))
}

fn classify_failure(status: u16, body: String) -> ClientError {
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody { message }) if !message.trim().is_empty() => {
            ClientError::Rejected { status, message }
        }
        _ => ClientError::Api { status, body },
    }
}

/// Read a success body and decode it.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let body = resp.text().await?;
    parse_body(&body)
}

pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|error| ClientError::Parse(error.to_string()))
}
