use provas_client::ArchiveApi;

use crate::cli::GlobalFlags;
use crate::context::{AppContext, NOT_SIGNED_IN};
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `provas categories`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(credential) = ctx.credential() else {
        anyhow::bail!(NOT_SIGNED_IN);
    };

    let categories = with_spinner("Loading categories", ctx.client.categories(credential))
        .await
        .map_err(|error| super::load_failed(error, flags))?;

    output(&categories, flags.format)
}
