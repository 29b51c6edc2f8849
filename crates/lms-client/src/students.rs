//! Student and enrollment endpoints.

use lms_core::entities::Student;
use lms_core::enums::StudentStatus;
use lms_core::requests::{EnrollRequest, StudentStatusRequest};
use reqwest::Method;

use crate::{ClientError, LmsClient};

impl LmsClient {
    /// `GET /students`, including each student's enrollments.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or is rejected.
    pub async fn list_students(&self) -> Result<Vec<Student>, ClientError> {
        self.send_json(self.request(Method::GET, "/students")).await
    }

    /// `PATCH /students/{id}/status`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or is rejected.
    pub async fn update_student_status(
        &self,
        id: i64,
        status: StudentStatus,
    ) -> Result<serde_json::Value, ClientError> {
        self.send_json(
            self.request(Method::PATCH, &format!("/students/{id}/status"))
                .json(&StudentStatusRequest { status }),
        )
        .await
    }

    /// `POST /student-course/enroll`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or is rejected.
    pub async fn enroll_student(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<serde_json::Value, ClientError> {
        let body = EnrollRequest {
            student_id,
            course_id,
        };
        self.send_json(
            self.request(Method::POST, "/student-course/enroll")
                .json(&body),
        )
        .await
    }

    /// `PATCH /student-course/{student_id}/{course_id}/complete`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or is rejected.
    pub async fn complete_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<serde_json::Value, ClientError> {
        self.send_json(self.request(
            Method::PATCH,
            &format!("/student-course/{student_id}/{course_id}/complete"),
        ))
        .await
    }
}
