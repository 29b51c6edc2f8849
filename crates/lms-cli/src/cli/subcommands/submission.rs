use clap::Subcommand;

/// Exam submission commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SubmissionCommands {
    /// List submissions with pass/fail outcome.
    List {
        #[arg(long)]
        search: Option<String>,
        /// pass, fail or pending.
        #[arg(long)]
        outcome: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one submission with its answers scored.
    Get { id: i64 },
}
