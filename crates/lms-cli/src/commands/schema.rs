use lms_core::drafts::{CertificateDraft, CourseDraft, ExamDraft};
use lms_wizard::CoursePlan;

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `lmsadm schema`. Needs neither config nor network.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_for(&args.type_name)?;
    // A schema is unreadable as a key/value table.
    let format = match flags.format {
        OutputFormat::Table => OutputFormat::Json,
        other => other,
    };
    output(&schema, format)
}

fn schema_for(type_name: &str) -> anyhow::Result<schemars::Schema> {
    let schema = match type_name.trim().to_ascii_lowercase().as_str() {
        "plan" => CoursePlan::json_schema(),
        "course" => schemars::schema_for!(CourseDraft),
        "certificate" => schemars::schema_for!(CertificateDraft),
        "exam" => schemars::schema_for!(ExamDraft),
        other => anyhow::bail!(
            "unknown schema type '{other}' (expected plan, course, certificate, or exam)"
        ),
    };
    Ok(schema)
}
