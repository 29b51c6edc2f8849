mod check;
mod publish;

use std::path::Path;

use anyhow::Context;
use lms_wizard::{CoursePlan, Replay, ReplayReport};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WizardCommands;
use crate::context::AppContext;

/// Handle `lmsadm wizard <subcommand>`.
pub async fn handle(
    action: &WizardCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        WizardCommands::Check { plan } => check::run(plan, ctx, flags),
        WizardCommands::Publish { plan, created_by } => {
            publish::run(plan, *created_by, ctx, flags).await
        }
    }
}

/// Load a plan file and drive it through the wizard.
fn replay_plan(path: &Path, ctx: &AppContext) -> anyhow::Result<Replay> {
    let plan = CoursePlan::from_path(path)?;
    plan.replay(ctx.config.general.keep_one_draft)
        .with_context(|| format!("plan {} was rejected", path.display()))
}

/// A plan is publishable when every exam saved and there is at least one.
fn ensure_publishable(report: &ReplayReport) -> anyhow::Result<()> {
    if report.exams.is_empty() {
        anyhow::bail!("plan has no exams; at least one saved exam is required");
    }
    if !report.all_saved() {
        let unsaved = report
            .exams
            .iter()
            .filter(|exam| !exam.is_saved())
            .map(|exam| exam.name.as_str())
            .collect::<Vec<_>>();
        anyhow::bail!(
            "{} of {} exams could not be saved: {}",
            unsaved.len(),
            report.exams.len(),
            unsaved.join(", ")
        );
    }
    Ok(())
}
