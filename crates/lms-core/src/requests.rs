//! Wire request shapes sent to the LMS backend.
//!
//! The backend speaks camelCase JSON; these structs only exist to be
//! serialized, so they stay close to the HTTP contract rather than the
//! wizard's draft types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::AdminUser;
use crate::enums::{CourseStatus, StudentStatus};

/// Body of `POST /admins/signin`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /admins/signin`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SignInResponse {
    pub access_token: String,
    pub user: AdminUser,
}

/// Body of `POST /courses`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub course_id: String,
    pub title: String,
    pub description: String,
    pub status: CourseStatus,
    pub cost: f64,
    pub duration: f64,
}

/// Body of `PATCH /courses/{id}`. Unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CourseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl UpdateCourseRequest {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.course_id.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.cost.is_none()
            && self.duration.is_none()
    }
}

/// Body of `POST /certificates`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCertificateRequest {
    pub cert_id: String,
    pub cert_name: String,
    /// Backend identifier of the owning course.
    pub course_id: i64,
}

/// Body of `POST /exams`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateExamRequest {
    pub name: String,
    pub course_id: i64,
    pub pass_mark: i64,
    pub created_by: i64,
    pub duration: i64,
    pub questions: Vec<ExamQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExamQuestion {
    pub question_text: String,
    pub marks: i64,
    pub options: Vec<ExamOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExamOption {
    pub option_text: String,
    pub is_correct: bool,
}

/// Body of `POST /certificates/grant`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrantCertificateRequest {
    pub student_id: i64,
    pub cert_id: String,
    pub issued_by: i64,
    pub score: f64,
}

/// Body of `POST /student-course/enroll`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub student_id: i64,
    pub course_id: i64,
}

/// Body of `PATCH /students/{id}/status`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudentStatusRequest {
    pub status: StudentStatus,
}
