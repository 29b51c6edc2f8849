use lms_core::entities::{IssuedCertificate, SubmissionDetails};
use lms_core::enums::Outcome;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// A scored view of one submission.
#[derive(Debug, Serialize)]
struct SubmissionSummary {
    id: i64,
    student: String,
    exam: String,
    score: Option<f64>,
    pass_mark: i64,
    outcome: Outcome,
    answered: usize,
    correct_answers: usize,
    earned_marks: i64,
    total_marks: i64,
    taken_at: String,
    certificate: Option<IssuedCertificate>,
}

impl From<SubmissionDetails> for SubmissionSummary {
    fn from(details: SubmissionDetails) -> Self {
        Self {
            id: details.id,
            student: format!(
                "{} {}",
                details.student.first_name, details.student.last_name
            ),
            score: details.score,
            pass_mark: details.exam.pass_mark,
            outcome: details.outcome(),
            answered: details.student_exam_answers.len(),
            correct_answers: details.correct_answers(),
            earned_marks: details.earned_marks(),
            total_marks: details.exam.total_marks(),
            taken_at: details.taken_at.to_rfc3339(),
            exam: details.exam.name,
            certificate: details.certificate,
        }
    }
}

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let details = ctx.client.submission_details(id).await?;
    output(&SubmissionSummary::from(details), flags.format)
}
