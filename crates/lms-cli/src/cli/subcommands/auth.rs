use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in and print a bearer token.
    Login(AuthLoginArgs),
    /// Show whether the configured token is accepted.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Admin email (defaults to `auth.email` from config).
    #[arg(long)]
    pub email: Option<String>,
    /// Admin password.
    #[arg(long, env = "LMS_PASSWORD", hide_env_values = true)]
    pub password: String,
}
