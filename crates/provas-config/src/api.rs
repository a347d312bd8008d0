//! Backend API configuration.

use serde::{Deserialize, Deserializer, Serialize};

fn default_base_url() -> String {
    "http://localhost:5000/".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend base URL. Endpoint paths are joined onto it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent with every request. Empty means not signed in yet.
    #[serde(default, deserialize_with = "token_text")]
    pub token: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Env values are typed by figment, so an all-digit token arrives as a
/// number. Tokens are opaque text either way.
fn token_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawToken {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Flag(bool),
    }

    Ok(match RawToken::deserialize(deserializer)? {
        RawToken::Text(text) => text,
        RawToken::Unsigned(number) => number.to_string(),
        RawToken::Signed(number) => number.to_string(),
        RawToken::Float(number) => number.to_string(),
        RawToken::Flag(flag) => flag.to_string(),
    })
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Whether a non-blank token is configured.
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }
}
