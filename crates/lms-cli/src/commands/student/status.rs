use lms_core::enums::StudentStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: i64,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_enum::<StudentStatus>(status, "status")?;
    let response = ctx.client.update_student_status(id, status).await?;
    tracing::info!(id, %status, "student status updated");
    output(&response, flags.format)
}
