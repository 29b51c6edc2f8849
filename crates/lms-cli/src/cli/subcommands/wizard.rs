use std::path::PathBuf;

use clap::Subcommand;

/// Course wizard commands.
#[derive(Clone, Debug, Subcommand)]
pub enum WizardCommands {
    /// Replay a plan offline and report what would be saved.
    Check { plan: PathBuf },
    /// Replay a plan and create everything on the backend.
    Publish {
        plan: PathBuf,
        /// Author admin id (defaults to `auth.admin_id`).
        #[arg(long)]
        created_by: Option<i64>,
    },
}
