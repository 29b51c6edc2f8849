mod create;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CourseCommands;
use crate::context::AppContext;

/// Handle `lmsadm course <subcommand>`.
pub async fn handle(
    action: &CourseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CourseCommands::List {
            status,
            search,
            limit,
        } => list::run(status.as_deref(), search.as_deref(), *limit, ctx, flags).await,
        CourseCommands::Create(args) => create::run(args, ctx, flags).await,
        CourseCommands::Update(args) => update::run(args, ctx, flags).await,
    }
}
