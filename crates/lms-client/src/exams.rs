//! Exam and submission endpoints.

use lms_core::entities::{Created, Exam, Submission, SubmissionDetails};
use lms_core::requests::CreateExamRequest;
use reqwest::Method;

use crate::{ClientError, LmsClient};

impl LmsClient {
    /// `POST /exams` with nested questions and options.
    ///
    /// Only the new id is read from the response; the returned exam is
    /// rebuilt from `body` and carries no question records.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or is rejected.
    pub async fn create_exam(&self, body: &CreateExamRequest) -> Result<Exam, ClientError> {
        let created: Created = self
            .send_json(self.request(Method::POST, "/exams").json(body))
            .await?;
        Ok(created.into_exam(body))
    }

    /// `GET /exams/submissions/all`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or is rejected.
    pub async fn list_submissions(&self) -> Result<Vec<Submission>, ClientError> {
        self.send_json(self.request(Method::GET, "/exams/submissions/all"))
            .await
    }

    /// `GET /exams/submissions/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, or `Api { status: 404 }`
    /// for an unknown submission.
    pub async fn submission_details(&self, id: i64) -> Result<SubmissionDetails, ClientError> {
        self.send_json(self.request(Method::GET, &format!("/exams/submissions/{id}")))
            .await
    }
}
