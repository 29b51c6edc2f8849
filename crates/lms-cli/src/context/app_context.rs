use anyhow::Context;
use lms_client::{LmsClient, Session};
use lms_config::LmsConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: LmsConfig,
    pub client: LmsClient,
}

impl AppContext {
    /// Build the HTTP client and attach the configured token, if any.
    pub fn init(config: LmsConfig) -> anyhow::Result<Self> {
        let mut client = LmsClient::new(&config.api).context("failed to build LMS client")?;
        if config.auth.is_configured() {
            client.set_session(Some(Session::new(config.auth.token.trim())));
        } else {
            tracing::debug!("no auth token configured; only sign-in will work");
        }
        Ok(Self { config, client })
    }

    /// Fail early for commands that need a signed-in admin.
    pub fn require_session(&self) -> anyhow::Result<&Session> {
        self.client.session().context(
            "not signed in: run `lmsadm auth login` and export the printed LMS_AUTH__TOKEN",
        )
    }

    /// Admin id for `createdBy` / `issuedBy`: explicit flag, then the
    /// session's profile, then `auth.admin_id`.
    pub fn admin_id(&self, explicit: Option<i64>) -> anyhow::Result<i64> {
        explicit
            .or_else(|| self.client.session().and_then(Session::admin_id))
            .or(self.config.auth.admin_id)
            .context("admin id unknown: pass it explicitly or set LMS_AUTH__ADMIN_ID")
    }
}

#[cfg(test)]
mod tests {
    use lms_config::{AuthConfig, LmsConfig};

    use super::AppContext;

    fn config_with(token: &str, admin_id: Option<i64>) -> LmsConfig {
        LmsConfig {
            auth: AuthConfig {
                token: token.to_string(),
                admin_id,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn configured_token_becomes_session() {
        let ctx = AppContext::init(config_with(" tok ", None)).expect("context");
        assert_eq!(ctx.require_session().expect("session").token(), "tok");
    }

    #[test]
    fn missing_token_requires_login() {
        let ctx = AppContext::init(config_with("", None)).expect("context");
        let err = ctx.require_session().expect_err("no session");
        assert!(err.to_string().contains("auth login"));
    }

    #[test]
    fn admin_id_prefers_explicit_value() {
        let ctx = AppContext::init(config_with("tok", Some(2))).expect("context");
        assert_eq!(ctx.admin_id(Some(9)).expect("id"), 9);
        assert_eq!(ctx.admin_id(None).expect("id"), 2);
    }

    #[test]
    fn admin_id_errors_when_unknown() {
        let ctx = AppContext::init(config_with("tok", None)).expect("context");
        assert!(ctx.admin_id(None).is_err());
    }
}
