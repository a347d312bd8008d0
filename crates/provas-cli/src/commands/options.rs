use provas_client::OptionLoader;
use provas_core::selection::eligible_teachers;

use crate::cli::root_commands::OptionsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `provas options`.
pub async fn handle(args: &OptionsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut loader = OptionLoader::new();
    let outcome = with_spinner(
        "Loading form options",
        loader.load(&ctx.client, ctx.credential()),
    )
    .await
    .map_err(|error| super::load_failed(error, flags))?;
    super::require_applied(outcome)?;

    let options = loader.options_or_empty();

    if let Some(discipline_id) = args.discipline {
        if options.discipline(discipline_id).is_none() {
            tracing::warn!(discipline_id, "unknown discipline; no teacher is eligible");
        }
        return output(&eligible_teachers(options, discipline_id), flags.format);
    }

    match flags.format {
        OutputFormat::Table => {
            output(&options.disciplines, flags.format)?;
            println!();
            output(&options.categories, flags.format)
        }
        OutputFormat::Json | OutputFormat::Raw => output(options, flags.format),
    }
}
