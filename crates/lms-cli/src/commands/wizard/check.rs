use std::path::Path;

use lms_wizard::ExamReport;
use serde::Serialize;

use super::{ensure_publishable, replay_plan};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// One line per plan exam.
#[derive(Debug, Serialize)]
struct ExamCheckRow {
    exam: String,
    saved: bool,
    questions: usize,
    total_marks: i64,
    problems: String,
}

impl From<&ExamReport> for ExamCheckRow {
    fn from(report: &ExamReport) -> Self {
        Self {
            exam: report.name.clone(),
            saved: report.is_saved(),
            questions: report.questions.len(),
            total_marks: report.total_marks,
            problems: report
                .violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Replay the plan offline. No request is sent.
pub fn run(plan: &Path, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let replay = replay_plan(plan, ctx)?;
    match flags.format {
        OutputFormat::Table => {
            let rows = replay
                .report
                .exams
                .iter()
                .map(ExamCheckRow::from)
                .collect::<Vec<_>>();
            output(&rows, flags.format)?;
        }
        _ => output(&replay.report, flags.format)?,
    }
    ensure_publishable(&replay.report)
}
