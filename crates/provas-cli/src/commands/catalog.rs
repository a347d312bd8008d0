use provas_client::{CatalogScreen, CatalogView};

use crate::cli::root_commands::CatalogArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, tree::render_tree};
use crate::progress::with_spinner;
use crate::ui;

/// Handle `provas terms` and `provas teachers`.
pub async fn handle(
    view: CatalogView,
    args: &CatalogArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut screen = CatalogScreen::new(view);
    let outcome = with_spinner(
        &format!("Loading {}", view.title().to_lowercase()),
        screen.refresh(&ctx.client, ctx.credential()),
    )
    .await
    .map_err(|error| super::load_failed(error, flags))?;
    super::require_applied(outcome)?;

    let Some(tree) = screen.tree() else {
        anyhow::bail!("no catalog was loaded");
    };

    match flags.format {
        OutputFormat::Table => {
            let depth = args
                .depth
                .map(usize::from)
                .or(ctx.config.general.default_depth)
                .map(|depth| depth.max(1));
            println!("{}", render_tree(view.title(), tree, depth, ui::prefs().color));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(tree, flags.format),
    }
}
