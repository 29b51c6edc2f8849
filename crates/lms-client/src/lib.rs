//! # lms-client
//!
//! Async REST client for the LMS backend.
//!
//! Every request carries `Authorization: Bearer <token>` when a [`Session`]
//! is attached. Resource endpoints are grouped by module:
//! - `admins`: sign-in and dashboard statistics
//! - `courses`: list, create, partial update
//! - `certificates`: create and grant
//! - `exams`: create, submissions list and details
//! - `students`: list, status, enrollment, completion

pub mod admins;
pub mod certificates;
pub mod courses;
pub mod exams;
pub mod students;

mod error;
mod http;
mod session;

pub use error::ClientError;
pub use session::Session;

use std::time::Duration;

use lms_config::ApiConfig;
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::http::check_response;

/// HTTP client for the LMS backend.
#[derive(Debug, Clone)]
pub struct LmsClient {
    http: reqwest::Client,
    base_url: String,
    session: Option<Session>,
}

impl LmsClient {
    /// Build a client from validated API settings, without a session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for an unusable base URL or timeout,
    /// or [`ClientError::Http`] if the underlying `reqwest::Client` fails to
    /// build.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
            session: None,
        })
    }

    /// Attach a session; subsequent requests send its bearer token.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn set_session(&mut self, session: Option<Session>) {
        self.session = session;
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.session {
            Some(session) => builder.bearer_auth(session.token()),
            None => builder,
        }
    }

    /// Send a request and decode the JSON body of a success response.
    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let request = builder.build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "lms request");
        let resp = check_response(self.http.execute(request).await?).await?;
        Ok(resp.json().await?)
    }
}
