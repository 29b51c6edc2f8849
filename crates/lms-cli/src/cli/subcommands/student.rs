use clap::Subcommand;

/// Student commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// List students.
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Activate or deactivate a student.
    Status { id: i64, status: String },
    /// Enroll a student in an active course.
    Enroll { student: i64, course: i64 },
    /// Mark a student's course as completed.
    Complete { student: i64, course: i64 },
}
