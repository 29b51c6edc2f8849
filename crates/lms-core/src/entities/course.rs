use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Certificate;
use crate::enums::CourseStatus;

/// A persisted course.
///
/// `id` is the backend's numeric key; `course_id` is the human-facing code
/// (e.g. `JS001`) entered in the wizard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub course_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: CourseStatus,
    pub cost: f64,
    pub duration: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certificates: Vec<Certificate>,
}

impl Course {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == CourseStatus::Active
    }
}
