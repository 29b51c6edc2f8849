use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AuthCommands, CertificateCommands, CourseCommands, StudentCommands, SubmissionCommands,
    WizardCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in and inspect credentials.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Student, course and completion totals.
    Dashboard,
    /// Courses.
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },
    /// Students and enrollments.
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// Exam submissions.
    Submission {
        #[command(subcommand)]
        action: SubmissionCommands,
    },
    /// Certificates.
    Certificate {
        #[command(subcommand)]
        action: CertificateCommands,
    },
    /// Build a course, certificate and exams from a plan file.
    Wizard {
        #[command(subcommand)]
        action: WizardCommands,
    },
    /// Dump JSON schema for a file or record type.
    Schema(SchemaArgs),
}

/// Arguments for `lmsadm schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// One of: plan, course, certificate, exam.
    pub type_name: String,
}
