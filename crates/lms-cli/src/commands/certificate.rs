use lms_core::requests::GrantCertificateRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CertificateCommands;
use crate::cli::subcommands::certificate::GrantArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lmsadm certificate <subcommand>`.
pub async fn handle(
    action: &CertificateCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CertificateCommands::Grant(args) => grant(args, ctx, flags).await,
    }
}

async fn grant(args: &GrantArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_session()?;
    let cert_id = args.cert_id.trim();
    if cert_id.is_empty() {
        anyhow::bail!("certificate grant: --cert-id must not be blank");
    }
    if !(0.0..=100.0).contains(&args.score) {
        anyhow::bail!("certificate grant: --score must be between 0 and 100");
    }

    let request = GrantCertificateRequest {
        student_id: args.student,
        cert_id: cert_id.to_string(),
        issued_by: ctx.admin_id(args.issued_by)?,
        score: args.score,
    };
    let response = ctx.client.grant_certificate(&request).await?;
    tracing::info!(student = args.student, cert_id, "certificate granted");
    output(&response, flags.format)
}
