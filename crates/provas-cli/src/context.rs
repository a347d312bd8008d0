use anyhow::Context;
use provas_client::{ArchiveClient, Credential};
use provas_config::ProvasConfig;

/// Message for commands that need a signed-in client.
pub const NOT_SIGNED_IN: &str =
    "not signed in: pass --token or set PROVAS_API__TOKEN to reach the archive";

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: ProvasConfig,
    pub client: ArchiveClient,
    pub credential: Option<Credential>,
}

impl AppContext {
    pub fn init(config: ProvasConfig) -> anyhow::Result<Self> {
        let client =
            ArchiveClient::from_config(&config.api).context("failed to build archive client")?;
        let credential = Credential::new(config.api.token.clone());

        tracing::debug!(
            base_url = %client.base_url(),
            signed_in = credential.is_some(),
            "application context ready"
        );

        Ok(Self {
            config,
            client,
            credential,
        })
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }
}
