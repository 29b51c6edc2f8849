use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `lmsadm` binary.
#[derive(Debug, Parser)]
#[command(name = "lmsadm", version, about = "LMS admin console")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max rows for list commands
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{CourseCommands, StudentCommands, WizardCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "lmsadm",
            "--format",
            "json",
            "--limit",
            "10",
            "--verbose",
            "dashboard",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["lmsadm", "course", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Course {
                action: CourseCommands::List { .. }
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["lmsadm", "--format", "xml", "dashboard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let parsed = Cli::try_parse_from(["lmsadm", "-q", "-v", "dashboard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn student_status_takes_positional_arguments() {
        let cli = Cli::try_parse_from(["lmsadm", "student", "status", "4", "inactive"])
            .expect("cli should parse");
        let Commands::Student {
            action: StudentCommands::Status { id, status },
        } = cli.command
        else {
            panic!("expected student status");
        };
        assert_eq!(id, 4);
        assert_eq!(status, "inactive");
    }

    #[test]
    fn wizard_publish_accepts_created_by() {
        let cli = Cli::try_parse_from([
            "lmsadm",
            "wizard",
            "publish",
            "course.toml",
            "--created-by",
            "3",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Wizard {
                action: WizardCommands::Publish {
                    created_by: Some(3),
                    ..
                }
            }
        ));
    }
}
