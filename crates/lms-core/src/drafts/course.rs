use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CourseStatus;
use crate::requests::CreateCourseRequest;
use crate::validation::{self, FieldViolation};

/// Course fields collected on step 1 of the wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CourseDraft {
    pub course_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub status: CourseStatus,
    /// Price in the backend's currency unit.
    pub cost: f64,
    /// Length in hours.
    pub duration: f64,
}

impl CourseDraft {
    /// Field constraints this draft currently violates.
    #[must_use]
    pub fn violations(&self) -> Vec<FieldViolation> {
        validation::validate_course(self)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    /// Wire shape for `POST /courses`.
    #[must_use]
    pub fn to_request(&self) -> CreateCourseRequest {
        CreateCourseRequest {
            course_id: self.course_id.trim().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            status: self.status,
            cost: self.cost,
            duration: self.duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_is_active_and_invalid() {
        let draft = CourseDraft::default();
        assert_eq!(draft.status, CourseStatus::Active);
        assert!(!draft.is_valid());
    }

    #[test]
    fn request_trims_text_fields() {
        let draft = CourseDraft {
            course_id: " JS001 ".into(),
            title: "Intro to JavaScript ".into(),
            description: " Basics".into(),
            status: CourseStatus::Inactive,
            cost: 49.5,
            duration: 12.0,
        };
        let request = draft.to_request();
        assert_eq!(request.course_id, "JS001");
        assert_eq!(request.title, "Intro to JavaScript");
        assert_eq!(request.description, "Basics");
        assert_eq!(request.status, CourseStatus::Inactive);
    }
}
