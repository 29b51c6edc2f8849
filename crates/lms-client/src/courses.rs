//! Course endpoints.

use lms_core::entities::{Course, Created};
use lms_core::requests::{CreateCourseRequest, UpdateCourseRequest};
use reqwest::Method;

use crate::{ClientError, LmsClient};

impl LmsClient {
    /// `GET /courses`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or is rejected.
    pub async fn list_courses(&self) -> Result<Vec<Course>, ClientError> {
        self.send_json(self.request(Method::GET, "/courses")).await
    }

    /// `POST /courses`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the backend rejects
    /// the course (e.g. duplicate course id).
    pub async fn create_course(&self, body: &CreateCourseRequest) -> Result<Course, ClientError> {
        let created: Created = self
            .send_json(self.request(Method::POST, "/courses").json(body))
            .await?;
        Ok(created.into_course(body))
    }

    /// `PATCH /courses/{id}` with only the fields set in `body`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or is rejected.
    pub async fn update_course(
        &self,
        id: i64,
        body: &UpdateCourseRequest,
    ) -> Result<Course, ClientError> {
        self.send_json(
            self.request(Method::PATCH, &format!("/courses/{id}"))
                .json(body),
        )
        .await
    }
}
