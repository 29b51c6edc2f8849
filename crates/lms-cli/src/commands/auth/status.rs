use lms_client::ClientError;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    base_url: String,
    admin_id: Option<i64>,
    note: Option<String>,
}

/// Check the configured token against the dashboard endpoint.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let base_url = ctx.client.base_url().to_string();
    let admin_id = ctx.config.auth.admin_id;

    let status = if ctx.client.session().is_none() {
        AuthStatusResponse {
            authenticated: false,
            base_url,
            admin_id,
            note: Some("LMS_AUTH__TOKEN not configured".into()),
        }
    } else {
        match ctx.client.dashboard_stats().await {
            Ok(_) => AuthStatusResponse {
                authenticated: true,
                base_url,
                admin_id,
                note: None,
            },
            Err(ClientError::Api { status, message }) if status == 401 || status == 403 => {
                AuthStatusResponse {
                    authenticated: false,
                    base_url,
                    admin_id,
                    note: Some(format!("token rejected: {message}")),
                }
            }
            Err(error) => return Err(error.into()),
        }
    };

    output(&status, flags.format)
}
