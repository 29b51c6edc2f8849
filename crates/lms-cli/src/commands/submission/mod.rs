mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SubmissionCommands;
use crate::context::AppContext;

/// Handle `lmsadm submission <subcommand>`.
pub async fn handle(
    action: &SubmissionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_session()?;
    match action {
        SubmissionCommands::List {
            search,
            outcome,
            limit,
        } => list::run(search.as_deref(), outcome.as_deref(), *limit, ctx, flags).await,
        SubmissionCommands::Get { id } => get::run(*id, ctx, flags).await,
    }
}
