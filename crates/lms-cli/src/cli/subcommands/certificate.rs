use clap::{Args, Subcommand};

/// Certificate commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CertificateCommands {
    /// Grant a certificate to a student.
    Grant(GrantArgs),
}

#[derive(Clone, Debug, Args)]
pub struct GrantArgs {
    /// Backend id of the student.
    #[arg(long)]
    pub student: i64,
    #[arg(long)]
    pub cert_id: String,
    /// Exam score to record on the certificate.
    #[arg(long)]
    pub score: f64,
    /// Issuing admin id (defaults to `auth.admin_id`).
    #[arg(long)]
    pub issued_by: Option<i64>,
}
