//! Admin credentials.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Bearer token from `lmsadm auth login`.
    #[serde(default)]
    pub token: String,

    /// Backend id of the admin, recorded as `createdBy` / `issuedBy`.
    #[serde(default)]
    pub admin_id: Option<i64>,

    /// Email used by `lmsadm auth login` when `--email` is omitted.
    #[serde(default)]
    pub email: String,
}

impl AuthConfig {
    pub fn is_configured(&self) -> bool {
        !self.token.trim().is_empty()
    }
}
