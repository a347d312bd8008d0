use anyhow::Context;
use provas_config::ProvasConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ProvasConfig> {
    let mut config =
        ProvasConfig::load_with_dotenv().context("failed to load provas configuration")?;

    apply_overrides(&mut config, flags);
    config
        .validate()
        .context("invalid command-line override")?;

    if !config.api.has_token() {
        tracing::debug!("no API token configured; requests will be suppressed");
    }

    Ok(config)
}

fn apply_overrides(config: &mut ProvasConfig, flags: &GlobalFlags) {
    if let Some(token) = &flags.token {
        config.api.token.clone_from(token);
    }
    if let Some(api_url) = &flags.api_url {
        config.api.base_url.clone_from(api_url);
    }
}
