use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Course;
use crate::enums::StudentStatus;

/// A student account. Credentials the backend may echo are never
/// deserialized.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub status: StudentStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub student_courses: Vec<Enrollment>,
}

impl Student {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the student already holds an enrollment for the course with
    /// backend id `course_id`.
    #[must_use]
    pub fn is_enrolled_in(&self, course_id: i64) -> bool {
        self.student_courses.iter().any(|e| e.course_key() == Some(course_id))
    }

    /// Case-insensitive match on name or email.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.full_name().to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
    }
}

/// One student-course link.
///
/// The backend sends either a flat `courseId` or a nested `course` object
/// depending on the endpoint; both are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(default)]
    pub course_id: Option<i64>,
    #[serde(default)]
    pub course: Option<Course>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl Enrollment {
    #[must_use]
    pub fn course_key(&self) -> Option<i64> {
        self.course_id.or_else(|| self.course.as_ref().map(|c| c.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "id": 4,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "phone": "555-0100",
        "password": "$2b$10$hash",
        "status": "active",
        "createdAt": "2024-05-01T10:00:00Z",
        "updatedAt": null,
        "studentCourses": [
            { "courseId": 7 },
            { "course": { "id": 9, "courseId": "PY101", "title": "Python", "status": "active", "cost": 10, "duration": 5 } }
        ],
        "studentCertificates": []
    }"#;

    #[test]
    fn parses_both_enrollment_shapes() {
        let student: Student = serde_json::from_str(FIXTURE).unwrap();
        assert!(student.is_enrolled_in(7));
        assert!(student.is_enrolled_in(9));
        assert!(!student.is_enrolled_in(8));
        assert!(student.updated_at.is_none());
    }

    #[test]
    fn search_matches_name_and_email() {
        let student: Student = serde_json::from_str(FIXTURE).unwrap();
        assert!(student.matches("lovelace"));
        assert!(student.matches("ADA@"));
        assert!(!student.matches("babbage"));
    }
}
