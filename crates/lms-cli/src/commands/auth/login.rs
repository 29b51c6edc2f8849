use lms_core::entities::AdminUser;
use lms_core::errors::CoreError;
use lms_core::validation::validate_sign_in;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    token: String,
    admin: Option<AdminUser>,
    note: String,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let email = resolve_email(args.email.as_deref(), &ctx.config.auth.email)?;
    check_credentials(&email, &args.password)?;

    let session = ctx.client.sign_in(&email, &args.password).await?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            token: session.token().to_string(),
            admin: session.admin().cloned(),
            note: format!(
                "export LMS_AUTH__TOKEN=<token>{}",
                session
                    .admin_id()
                    .map(|id| format!(" LMS_AUTH__ADMIN_ID={id}"))
                    .unwrap_or_default()
            ),
        },
        flags.format,
    )
}

/// `--email` wins over `auth.email`; both blank is an error.
fn resolve_email(flag: Option<&str>, configured: &str) -> anyhow::Result<String> {
    let email = flag.unwrap_or(configured).trim();
    if email.is_empty() {
        anyhow::bail!("auth login: pass --email or set LMS_AUTH__EMAIL");
    }
    Ok(email.to_string())
}

/// Reject malformed credentials before any request is made.
fn check_credentials(email: &str, password: &str) -> Result<(), CoreError> {
    let violations = validate_sign_in(email, password);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::{check_credentials, resolve_email};

    #[test]
    fn flag_overrides_config() {
        let email = resolve_email(Some("a@example.com"), "b@example.com").expect("email");
        assert_eq!(email, "a@example.com");
    }

    #[test]
    fn falls_back_to_config() {
        let email = resolve_email(None, " b@example.com ").expect("email");
        assert_eq!(email, "b@example.com");
    }

    #[test]
    fn blank_email_is_rejected() {
        assert!(resolve_email(Some("  "), "").is_err());
    }

    #[test]
    fn malformed_credentials_fail_before_sign_in() {
        let error = check_credentials("not-an-email", "123").expect_err("rejected");
        assert_eq!(
            error.to_string(),
            "Validation error: email must be a valid email address; \
             password must be at least 6 characters"
        );
        assert!(check_credentials("admin@example.com", "secret1").is_ok());
    }
}
