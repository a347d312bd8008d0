use provas_client::CatalogView;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Terms(args) => {
            commands::catalog::handle(CatalogView::ByTerm, &args, ctx, flags).await
        }
        Commands::Teachers(args) => {
            commands::catalog::handle(CatalogView::ByTeacher, &args, ctx, flags).await
        }
        Commands::Options(args) => commands::options::handle(&args, ctx, flags).await,
        Commands::Categories => commands::categories::handle(ctx, flags).await,
        Commands::Add(args) => commands::add::handle(&args, ctx, flags).await,
    }
}
