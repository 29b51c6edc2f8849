use lms_core::entities::Submission;
use lms_core::enums::Outcome;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SubmissionRow {
    id: i64,
    student: String,
    exam: String,
    course: String,
    score: Option<f64>,
    pass_mark: i64,
    outcome: Outcome,
    taken_at: String,
}

impl From<&Submission> for SubmissionRow {
    fn from(submission: &Submission) -> Self {
        Self {
            id: submission.id,
            student: format!(
                "{} {}",
                submission.student.first_name, submission.student.last_name
            ),
            exam: submission.exam.name.clone(),
            course: submission.exam.course.title.clone(),
            score: submission.score,
            pass_mark: submission.exam.pass_mark,
            outcome: submission.outcome(),
            taken_at: submission.taken_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

pub async fn run(
    search: Option<&str>,
    outcome: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let outcome = outcome
        .map(|raw| parse_enum::<Outcome>(raw, "outcome"))
        .transpose()?;

    let mut submissions = ctx.client.list_submissions().await?;
    if let Some(outcome) = outcome {
        submissions.retain(|submission| submission.outcome() == outcome);
    }
    if let Some(needle) = search.map(str::trim).filter(|n| !n.is_empty()) {
        submissions.retain(|submission| submission.matches(needle));
    }
    // Newest first.
    submissions.sort_by(|a, b| b.taken_at.cmp(&a.taken_at));
    truncate(&mut submissions, limit);

    let rows = submissions.iter().map(SubmissionRow::from).collect::<Vec<_>>();
    output(&rows, flags.format)
}
