use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A certificate definition attached to a course.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: i64,
    pub cert_id: String,
    pub cert_name: String,
    pub course_id: i64,
}

/// A certificate granted to a student for a graded submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssuedCertificate {
    pub id: i64,
    pub cert_id: String,
    pub cert_name: String,
    pub course_id: i64,
    #[serde(default)]
    pub issued_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub issued_by: Option<i64>,
    #[serde(default)]
    pub score: Option<f64>,
}
