use lms_core::drafts::CourseDraft;
use lms_core::enums::CourseStatus;
use lms_core::errors::CoreError;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::course::CourseCreateArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &CourseCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_session()?;
    let draft = draft_from_args(args)?;
    let course = ctx.client.create_course(&draft.to_request()).await?;
    tracing::info!(id = course.id, course_id = %course.course_id, "course created");
    output(&course, flags.format)
}

fn draft_from_args(args: &CourseCreateArgs) -> anyhow::Result<CourseDraft> {
    let draft = CourseDraft {
        course_id: args.course_id.clone(),
        title: args.title.clone(),
        description: args.description.clone(),
        status: parse_enum::<CourseStatus>(&args.status, "status")?,
        cost: args.cost,
        duration: args.duration,
    };
    let violations = draft.violations();
    if !violations.is_empty() {
        return Err(CoreError::Validation(violations).into());
    }
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::draft_from_args;
    use crate::cli::subcommands::course::CourseCreateArgs;

    fn args() -> CourseCreateArgs {
        CourseCreateArgs {
            course_id: "JS001".into(),
            title: "Intro".into(),
            description: "Basics".into(),
            status: "active".into(),
            cost: 10.0,
            duration: 3.0,
        }
    }

    #[test]
    fn valid_args_build_a_draft() {
        let draft = draft_from_args(&args()).expect("valid draft");
        assert_eq!(draft.course_id, "JS001");
    }

    #[test]
    fn violations_are_reported_together() {
        let mut args = args();
        args.title = " ".into();
        args.cost = 0.0;
        let err = draft_from_args(&args).expect_err("invalid draft");
        let message = err.to_string();
        assert!(message.contains("title is required"));
        assert!(message.contains("cost must be greater than 0"));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let mut args = args();
        args.status = "archived".into();
        assert!(draft_from_args(&args).is_err());
    }
}
