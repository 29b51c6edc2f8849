//! Responses of the create endpoints.
//!
//! The backend echoes a created record in shapes that vary by endpoint and
//! version. Only `id` is relied on; the rest of the record is rebuilt from
//! the request that was sent.

use serde::Deserialize;

use crate::entities::{Certificate, Course, Exam};
use crate::requests::{CreateCertificateRequest, CreateCourseRequest, CreateExamRequest};

/// Backend key of a freshly created record. Other echoed fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Created {
    pub id: i64,
}

impl Created {
    #[must_use]
    pub fn into_course(self, request: &CreateCourseRequest) -> Course {
        Course {
            id: self.id,
            course_id: request.course_id.clone(),
            title: request.title.clone(),
            description: request.description.clone(),
            status: request.status,
            cost: request.cost,
            duration: request.duration,
            created_at: None,
            certificates: Vec::new(),
        }
    }

    #[must_use]
    pub fn into_certificate(self, request: &CreateCertificateRequest) -> Certificate {
        Certificate {
            id: self.id,
            cert_id: request.cert_id.clone(),
            cert_name: request.cert_name.clone(),
            course_id: request.course_id,
        }
    }

    /// Question and option ids are not known from the request, so the
    /// returned exam carries no question records.
    #[must_use]
    pub fn into_exam(self, request: &CreateExamRequest) -> Exam {
        Exam {
            id: self.id,
            name: request.name.clone(),
            course_id: request.course_id,
            pass_mark: request.pass_mark,
            created_by: request.created_by,
            duration: request.duration,
            date_created: None,
            course: None,
            questions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::CourseStatus;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_id_is_required() {
        let created: Created = serde_json::from_str(r#"{"id": 9, "name": "Midterm"}"#).unwrap();
        assert_eq!(created, Created { id: 9 });
        assert!(serde_json::from_str::<Created>(r#"{"name": "Midterm"}"#).is_err());
    }

    #[test]
    fn course_is_rebuilt_from_request() {
        let request = CreateCourseRequest {
            course_id: "JS001".into(),
            title: "Intro".into(),
            description: "Basics".into(),
            status: CourseStatus::Inactive,
            cost: 49.99,
            duration: 12.0,
        };
        let course = Created { id: 101 }.into_course(&request);
        assert_eq!(course.id, 101);
        assert_eq!(course.course_id, "JS001");
        assert_eq!(course.status, CourseStatus::Inactive);
    }

    #[test]
    fn exam_keeps_request_settings() {
        let request = CreateExamRequest {
            name: "Final".into(),
            course_id: 7,
            pass_mark: 80,
            created_by: 1,
            duration: 90,
            questions: Vec::new(),
        };
        let exam = Created { id: 301 }.into_exam(&request);
        assert_eq!(
            (exam.id, exam.course_id, exam.pass_mark, exam.duration),
            (301, 7, 80, 90)
        );
    }
}
