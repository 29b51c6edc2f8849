//! Certificate endpoints.

use lms_core::entities::{Certificate, Created};
use lms_core::requests::{CreateCertificateRequest, GrantCertificateRequest};
use reqwest::Method;

use crate::{ClientError, LmsClient};

impl LmsClient {
    /// `POST /certificates`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the backend rejects
    /// the certificate (e.g. duplicate certificate id).
    pub async fn create_certificate(
        &self,
        body: &CreateCertificateRequest,
    ) -> Result<Certificate, ClientError> {
        let created: Created = self
            .send_json(self.request(Method::POST, "/certificates").json(body))
            .await?;
        Ok(created.into_certificate(body))
    }

    /// `POST /certificates/grant`. The backend's response shape is not
    /// fixed, so it is returned as raw JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or is rejected.
    pub async fn grant_certificate(
        &self,
        body: &GrantCertificateRequest,
    ) -> Result<serde_json::Value, ClientError> {
        self.send_json(
            self.request(Method::POST, "/certificates/grant")
                .json(body),
        )
        .await
    }
}
