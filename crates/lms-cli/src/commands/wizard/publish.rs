use std::path::Path;

use lms_wizard::{PublishFailure, WizardError};
use serde::Serialize;

use super::{ensure_publishable, replay_plan};
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Reported when publishing stops part way.
#[derive(Debug, Serialize)]
struct PublishFailureReport {
    published: bool,
    stage: String,
    error: String,
    /// Entities already created on the backend; nothing is rolled back.
    orphaned: Vec<String>,
}

impl PublishFailureReport {
    fn new(failure: &PublishFailure) -> Self {
        Self {
            published: false,
            stage: failure.stage.to_string(),
            error: failure.error.user_message(),
            orphaned: failure.partial.describe(),
        }
    }
}

pub async fn run(
    plan: &Path,
    created_by: Option<i64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut replay = replay_plan(plan, ctx)?;
    ensure_publishable(&replay.report)?;
    ctx.require_session()?;
    let created_by = ctx.admin_id(created_by)?;

    let progress = Progress::spinner(&format!(
        "publishing {} with {} exam(s)",
        replay.wizard.course().course_id,
        replay.report.saved_count()
    ));
    match replay.wizard.submit(&ctx.client, created_by).await {
        Ok(receipt) => {
            progress.finish_ok("published");
            output(&receipt, flags.format)
        }
        Err(WizardError::Publish(failure)) => {
            progress.finish_err("publish failed");
            output(&PublishFailureReport::new(&failure), flags.format)?;
            Err(failure.into())
        }
        Err(other) => {
            progress.finish_err("publish refused");
            Err(other.into())
        }
    }
}
