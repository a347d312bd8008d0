//! `reqwest` implementation of [`ArchiveApi`].

use std::time::Duration;

use provas_config::ApiConfig;
use provas_core::entities::{Category, NewTest, OptionsToCreate};
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

use crate::api::ArchiveApi;
use crate::credential::Credential;
use crate::error::ClientError;
use crate::http::{check_response, decode};

const PATH_BY_TERMS: &str = "tests/by-disciplines";
const PATH_BY_TEACHERS: &str = "tests/by-teachers";
const PATH_OPTIONS: &str = "tests/create/options";
const PATH_CATEGORIES: &str = "categories";
const PATH_TESTS: &str = "tests";

// ── Envelopes ──────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TermsEnvelope {
    tests_by_terms: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeachersEnvelope {
    tests_by_teachers: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptionsEnvelope {
    data_to_create: OptionsToCreate,
}

#[derive(Deserialize)]
struct CategoriesEnvelope {
    categories: Vec<Category>,
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the archive backend.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ArchiveClient {
    /// Build a client for `base_url` with a per-request timeout.
    ///
    /// A base URL without a trailing slash is treated as a directory, so
    /// `http://host/api` and `http://host/api/` behave the same.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the URL does not parse or
    /// cannot carry paths, and [`ClientError::Http`] if the `reqwest` client
    /// fails to build.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        let base_url = Url::parse(&normalized).map_err(|error| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: error.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "cannot be used as a base".into(),
            });
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("provas/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// See [`ArchiveClient::new`].
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|error| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: error.to_string(),
            })
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        credential: &Credential,
    ) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");
        let resp = self
            .http
            .get(url)
            .header(reqwest::header::AUTHORIZATION, credential.bearer())
            .send()
            .await?;
        decode(check_response(resp).await?).await
    }
}

impl ArchiveApi for ArchiveClient {
    async fn tests_by_terms(&self, credential: &Credential) -> Result<Value, ClientError> {
        let envelope: TermsEnvelope = self.get(PATH_BY_TERMS, credential).await?;
        Ok(envelope.tests_by_terms)
    }

    async fn tests_by_teachers(&self, credential: &Credential) -> Result<Value, ClientError> {
        let envelope: TeachersEnvelope = self.get(PATH_BY_TEACHERS, credential).await?;
        Ok(envelope.tests_by_teachers)
    }

    async fn options_to_create(
        &self,
        credential: &Credential,
    ) -> Result<OptionsToCreate, ClientError> {
        let envelope: OptionsEnvelope = self.get(PATH_OPTIONS, credential).await?;
        Ok(envelope.data_to_create)
    }

    async fn categories(&self, credential: &Credential) -> Result<Vec<Category>, ClientError> {
        let envelope: CategoriesEnvelope = self.get(PATH_CATEGORIES, credential).await?;
        Ok(envelope.categories)
    }

    async fn create_test(&self, credential: &Credential, test: &NewTest) -> Result<(), ClientError> {
        let url = self.endpoint(PATH_TESTS)?;
        tracing::debug!(%url, name = %test.name, "POST");
        let resp = self
            .http
            .post(url)
            .header(reqwest::header::AUTHORIZATION, credential.bearer())
            .json(test)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}
