mod complete;
mod enroll;
mod list;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudentCommands;
use crate::context::AppContext;

/// Handle `lmsadm student <subcommand>`.
pub async fn handle(
    action: &StudentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_session()?;
    match action {
        StudentCommands::List {
            search,
            status,
            limit,
        } => list::run(search.as_deref(), status.as_deref(), *limit, ctx, flags).await,
        StudentCommands::Status { id, status } => status::run(*id, status, ctx, flags).await,
        StudentCommands::Enroll { student, course } => {
            enroll::run(*student, *course, ctx, flags).await
        }
        StudentCommands::Complete { student, course } => {
            complete::run(*student, *course, ctx, flags).await
        }
    }
}
