use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    student_id: i64,
    course_id: i64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = ctx.client.complete_course(student_id, course_id).await?;
    tracing::info!(student_id, course_id, "course marked complete");
    output(&response, flags.format)
}
