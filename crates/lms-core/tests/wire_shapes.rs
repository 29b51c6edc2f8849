//! Serde roundtrip and JsonSchema validation tests for backend records and
//! request bodies.

use chrono::{TimeZone, Utc};
use lms_core::drafts::*;
use lms_core::entities::*;
use lms_core::enums::*;
use lms_core::requests::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    course_roundtrip,
    Course,
    Course {
        id: 7,
        course_id: "JS001".into(),
        title: "Intro to JavaScript".into(),
        description: "Variables, functions, and the DOM.".into(),
        status: CourseStatus::Active,
        cost: 99.99,
        duration: 12.5,
        created_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()),
        certificates: vec![],
    }
);

roundtrip_and_validate!(
    certificate_roundtrip,
    Certificate,
    Certificate {
        id: 3,
        cert_id: "ORN-WDF-2024-001".into(),
        cert_name: "Web Development Fundamentals".into(),
        course_id: 7,
    }
);

roundtrip_and_validate!(
    exam_roundtrip,
    Exam,
    Exam {
        id: 2,
        name: "Midterm".into(),
        course_id: 7,
        pass_mark: 70,
        created_by: 1,
        duration: 60,
        date_created: None,
        course: None,
        questions: vec![QuestionRecord {
            id: 1,
            exam_id: 2,
            question_text: "What does DOM stand for?".into(),
            marks: 2,
            options: vec![OptionRecord {
                id: 10,
                question_id: 1,
                option_text: "Document Object Model".into(),
                is_correct: true,
            }],
        }],
    }
);

roundtrip_and_validate!(
    dashboard_stats_roundtrip,
    DashboardStats,
    DashboardStats {
        total_students: 120,
        active_courses: 8,
        completion_rate: 64.5,
    }
);

roundtrip_and_validate!(
    admin_user_roundtrip,
    AdminUser,
    AdminUser {
        id: 1,
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        email: "grace@example.com".into(),
        role: "admin".into(),
        kind: "super".into(),
    }
);

roundtrip_and_validate!(
    create_exam_request_roundtrip,
    CreateExamRequest,
    ExamDraft {
        name: "Final".into(),
        pass_mark: 75,
        duration: 90,
        questions: vec![QuestionDraft {
            question_text: "Pick one".into(),
            marks: 1,
            options: vec![
                OptionDraft {
                    option_text: "A".into(),
                    is_correct: true,
                },
                OptionDraft {
                    option_text: "B".into(),
                    is_correct: false,
                },
            ],
        }],
    }
    .to_request(7, 1)
);

roundtrip_and_validate!(
    create_course_request_roundtrip,
    CreateCourseRequest,
    CourseDraft {
        course_id: "PY101".into(),
        title: "Python".into(),
        description: "Intro".into(),
        status: CourseStatus::Inactive,
        cost: 20.0,
        duration: 6.0,
    }
    .to_request()
);

roundtrip_and_validate!(
    grant_certificate_request_roundtrip,
    GrantCertificateRequest,
    GrantCertificateRequest {
        student_id: 4,
        cert_id: "ORN-WDF-2024-001".into(),
        issued_by: 1,
        score: 88.0,
    }
);

#[test]
fn sign_in_response_reads_snake_case_token() {
    let json = r#"{
        "access_token": "eyJhbGciOi.payload.sig",
        "user": {
            "id": 1, "firstName": "Grace", "lastName": "Hopper",
            "email": "grace@example.com", "role": "admin", "type": "super"
        }
    }"#;
    let response: SignInResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.access_token, "eyJhbGciOi.payload.sig");
    assert_eq!(response.user.kind, "super");
    assert_eq!(response.user.full_name(), "Grace Hopper");
}

#[test]
fn submission_row_parses_nested_summary() {
    let json = r#"{
        "id": 11,
        "score": 85,
        "takenAt": "2024-06-01T09:30:00Z",
        "student": { "firstName": "Ada", "lastName": "Lovelace" },
        "exam": { "name": "Final", "passMark": 70, "course": { "title": "Python" } }
    }"#;
    let submission: Submission = serde_json::from_str(json).unwrap();
    assert_eq!(submission.outcome(), Outcome::Pass);
    assert!(submission.matches("python"));
    assert!(submission.matches("ada love"));
}
