//! Admin sign-in and dashboard endpoints.

use lms_core::entities::DashboardStats;
use lms_core::requests::{SignInRequest, SignInResponse};
use reqwest::Method;

use crate::{ClientError, LmsClient, Session};

impl LmsClient {
    /// `POST /admins/signin`. Returns the new [`Session`]; the client itself
    /// is left unchanged so the caller decides where the session goes.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or rejected credentials.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        let body = SignInRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let response: SignInResponse = self
            .send_json(self.request(Method::POST, "/admins/signin").json(&body))
            .await?;
        tracing::info!(admin_id = response.user.id, "signed in");
        Ok(Session::from(response))
    }

    /// `GET /admins/dashboard`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or is rejected.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        self.send_json(self.request(Method::GET, "/admins/dashboard"))
            .await
    }
}
