use lms_core::enums::CourseStatus;
use lms_core::errors::CoreError;
use lms_core::requests::UpdateCourseRequest;
use lms_core::validation::FieldViolation;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::course::CourseUpdateArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &CourseUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = request_from_args(args)?;
    ctx.require_session()?;
    let course = ctx.client.update_course(args.id, &request).await?;
    output(&course, flags.format)
}

/// Only the fields that were passed are sent, each checked like its
/// create-time counterpart.
fn request_from_args(args: &CourseUpdateArgs) -> anyhow::Result<UpdateCourseRequest> {
    let request = UpdateCourseRequest {
        status: args
            .status
            .as_deref()
            .map(|raw| parse_enum::<CourseStatus>(raw, "status"))
            .transpose()?,
        course_id: args.course_id.clone(),
        title: args.title.clone(),
        description: args.description.clone(),
        cost: args.cost,
        duration: args.duration,
    };
    if request.is_empty() {
        anyhow::bail!(
            "At least one of --course-id, --title, --description, --status, --cost, or --duration must be provided"
        );
    }

    let mut violations = Vec::new();
    for (field, value) in [
        ("course_id", &request.course_id),
        ("title", &request.title),
        ("description", &request.description),
    ] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            violations.push(FieldViolation::Required { field });
        }
    }
    for (field, value) in [("cost", request.cost), ("duration", request.duration)] {
        if value.is_some_and(|v| v <= 0.0) {
            violations.push(FieldViolation::NotPositive { field });
        }
    }
    if !violations.is_empty() {
        return Err(CoreError::Validation(violations).into());
    }
    Ok(request)
}
