use clap::{Args, Subcommand};

/// Course commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CourseCommands {
    /// List courses.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Create a course.
    Create(CourseCreateArgs),
    /// Update selected fields of a course.
    Update(CourseUpdateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CourseCreateArgs {
    #[arg(long)]
    pub course_id: String,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    /// active or inactive.
    #[arg(long, default_value = "active")]
    pub status: String,
    #[arg(long)]
    pub cost: f64,
    /// Length in hours.
    #[arg(long)]
    pub duration: f64,
}

#[derive(Clone, Debug, Args)]
pub struct CourseUpdateArgs {
    /// Backend id of the course.
    pub id: i64,
    #[arg(long)]
    pub course_id: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub cost: Option<f64>,
    #[arg(long)]
    pub duration: Option<f64>,
}
