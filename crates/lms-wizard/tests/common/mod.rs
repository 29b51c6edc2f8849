//! Shared fixtures: a recording in-memory backend and wizard builders.

#![allow(dead_code)]

use std::sync::Mutex;

use lms_client::ClientError;
use lms_core::drafts::{CertificateDraft, CourseDraft};
use lms_core::entities::{Certificate, Course, Exam};
use lms_core::enums::CourseStatus;
use lms_core::requests::{CreateCertificateRequest, CreateCourseRequest, CreateExamRequest};
use lms_wizard::{CourseBackend, CourseWizard};

/// One request seen by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Course(CreateCourseRequest),
    Certificate(CreateCertificateRequest),
    Exam(CreateExamRequest),
}

/// Which request should be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Course,
    Certificate,
    /// Zero-based exam creation call.
    Exam(usize),
}

/// Backend double that records every call and assigns sequential ids.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<Call>>,
    fail_at: Option<FailAt>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(fail_at: FailAt) -> Self {
        Self {
            calls: Mutex::default(),
            fail_at: Some(fail_at),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> usize {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        calls.len()
    }

    fn exam_calls(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, Call::Exam(_)))
            .count()
    }

    fn reject(message: &str) -> ClientError {
        ClientError::Api {
            status: 409,
            message: message.into(),
        }
    }
}

impl CourseBackend for RecordingBackend {
    async fn create_course(&self, request: &CreateCourseRequest) -> Result<Course, ClientError> {
        self.record(Call::Course(request.clone()));
        if self.fail_at == Some(FailAt::Course) {
            return Err(Self::reject("Course ID already exists"));
        }
        Ok(Course {
            id: 101,
            course_id: request.course_id.clone(),
            title: request.title.clone(),
            description: request.description.clone(),
            status: request.status,
            cost: request.cost,
            duration: request.duration,
            created_at: None,
            certificates: Vec::new(),
        })
    }

    async fn create_certificate(
        &self,
        request: &CreateCertificateRequest,
    ) -> Result<Certificate, ClientError> {
        self.record(Call::Certificate(request.clone()));
        if self.fail_at == Some(FailAt::Certificate) {
            return Err(Self::reject("Certificate ID already exists"));
        }
        Ok(Certificate {
            id: 201,
            cert_id: request.cert_id.clone(),
            cert_name: request.cert_name.clone(),
            course_id: request.course_id,
        })
    }

    async fn create_exam(&self, request: &CreateExamRequest) -> Result<Exam, ClientError> {
        let ordinal = self.exam_calls();
        self.record(Call::Exam(request.clone()));
        if self.fail_at == Some(FailAt::Exam(ordinal)) {
            return Err(Self::reject("Exam rejected"));
        }
        Ok(Exam {
            id: 301 + i64::try_from(ordinal).unwrap(),
            name: request.name.clone(),
            course_id: request.course_id,
            pass_mark: request.pass_mark,
            created_by: request.created_by,
            duration: request.duration,
            date_created: None,
            course: None,
            questions: Vec::new(),
        })
    }
}

pub fn filled_course() -> CourseDraft {
    CourseDraft {
        course_id: "JS001".into(),
        title: "Intro to JavaScript".into(),
        description: "Variables, functions, and the DOM".into(),
        status: CourseStatus::Active,
        cost: 49.99,
        duration: 12.0,
    }
}

pub fn filled_certificate() -> CertificateDraft {
    CertificateDraft {
        cert_id: "ORN-JS-001".into(),
        cert_name: "JavaScript Fundamentals".into(),
        pass_mark: 75,
        time_limit: 45,
    }
}

/// Wizard on the exam step with valid course and certificate drafts.
pub fn wizard_at_exams() -> CourseWizard {
    let mut wizard = CourseWizard::new();
    *wizard.course_mut() = filled_course();
    wizard.advance().unwrap();
    *wizard.certificate_mut() = filled_certificate();
    wizard.advance().unwrap();
    wizard
}

/// Build and save a valid exam with one two-option question through the
/// editor. Returns its saved index.
pub fn save_simple_exam(wizard: &mut CourseWizard, name: &str) -> usize {
    let exam = wizard.add_draft_exam();
    let staging = wizard.staging_mut();
    staging.set_exam_name(exam, name).unwrap();
    let question = staging.add_question(exam).unwrap();
    staging
        .set_question_text(exam, question, "What does DOM stand for?")
        .unwrap();
    staging
        .set_option_text(exam, question, 0, "Document Object Model")
        .unwrap();
    let second = staging.add_option(exam, question).unwrap();
    staging
        .set_option_text(exam, question, second, "Data Object Map")
        .unwrap();
    staging.set_correct_option(exam, question, 0).unwrap();
    staging.save_exam(exam).unwrap()
}
