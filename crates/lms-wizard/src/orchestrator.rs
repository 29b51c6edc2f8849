//! Sequential publishing of a finished wizard to the backend.
//!
//! Course, certificate and exams are created in that order, one request at
//! a time. The first failure stops the run. Nothing already created is
//! rolled back; [`PartialProgress`] reports what exists on the backend.

use std::fmt;
use std::future::Future;

use lms_client::{ClientError, LmsClient};
use lms_core::drafts::{CertificateDraft, CourseDraft, ExamDraft};
use lms_core::entities::{Certificate, Course, Exam};
use lms_core::requests::{CreateCertificateRequest, CreateCourseRequest, CreateExamRequest};
use serde::Serialize;
use thiserror::Error;

/// The three create calls publishing needs.
pub trait CourseBackend {
    fn create_course(
        &self,
        request: &CreateCourseRequest,
    ) -> impl Future<Output = Result<Course, ClientError>> + Send;

    fn create_certificate(
        &self,
        request: &CreateCertificateRequest,
    ) -> impl Future<Output = Result<Certificate, ClientError>> + Send;

    fn create_exam(
        &self,
        request: &CreateExamRequest,
    ) -> impl Future<Output = Result<Exam, ClientError>> + Send;
}

impl CourseBackend for LmsClient {
    async fn create_course(&self, request: &CreateCourseRequest) -> Result<Course, ClientError> {
        Self::create_course(self, request).await
    }

    async fn create_certificate(
        &self,
        request: &CreateCertificateRequest,
    ) -> Result<Certificate, ClientError> {
        Self::create_certificate(self, request).await
    }

    async fn create_exam(&self, request: &CreateExamRequest) -> Result<Exam, ClientError> {
        Self::create_exam(self, request).await
    }
}

/// Everything one publish run sends, borrowed from the wizard.
#[derive(Debug, Clone)]
pub struct SubmissionPlan<'a> {
    pub course: &'a CourseDraft,
    pub certificate: &'a CertificateDraft,
    /// Saved exams in the order they are created.
    pub exams: Vec<&'a ExamDraft>,
    /// Admin id recorded as each exam's author.
    pub created_by: i64,
}

/// The request that failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum PublishStage {
    Course,
    Certificate,
    Exam { index: usize, name: String },
}

impl fmt::Display for PublishStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Course => f.write_str("course creation"),
            Self::Certificate => f.write_str("certificate creation"),
            Self::Exam { index, name } => {
                write!(f, "creation of exam {} ({name})", index + 1)
            }
        }
    }
}

/// Entities created before a failure. They stay on the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PartialProgress {
    pub course: Option<Course>,
    pub certificate: Option<Certificate>,
    pub exams: Vec<Exam>,
}

impl PartialProgress {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.course.is_none() && self.certificate.is_none() && self.exams.is_empty()
    }

    /// One line per orphaned entity, for reporting.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(course) = &self.course {
            lines.push(format!("course {} (id {})", course.course_id, course.id));
        }
        if let Some(certificate) = &self.certificate {
            lines.push(format!(
                "certificate {} (id {})",
                certificate.cert_id, certificate.id
            ));
        }
        for exam in &self.exams {
            lines.push(format!("exam {} (id {})", exam.name, exam.id));
        }
        lines
    }
}

/// A publish run that stopped part way.
#[derive(Debug, Error)]
#[error("publish failed at {stage}: {error}")]
pub struct PublishFailure {
    pub stage: PublishStage,
    #[source]
    pub error: ClientError,
    pub partial: PartialProgress,
}

/// Everything created by a successful run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishReceipt {
    pub course: Course,
    pub certificate: Certificate,
    pub exams: Vec<Exam>,
}

/// Create the course, its certificate, then every exam in order.
///
/// Requests are awaited one after another. The certificate and exams are
/// bound to the backend id of the course created in the first request.
///
/// # Errors
///
/// Returns [`PublishFailure`] naming the failed stage, the backend error
/// and what was created before it.
pub async fn publish<B: CourseBackend>(
    backend: &B,
    plan: &SubmissionPlan<'_>,
) -> Result<PublishReceipt, PublishFailure> {
    tracing::info!(course_id = %plan.course.course_id, "creating course");
    let course = match backend.create_course(&plan.course.to_request()).await {
        Ok(course) => course,
        Err(error) => {
            return Err(failure(PublishStage::Course, error, PartialProgress::default()));
        }
    };
    tracing::info!(id = course.id, "course created");

    let certificate = match backend
        .create_certificate(&plan.certificate.to_request(course.id))
        .await
    {
        Ok(certificate) => certificate,
        Err(error) => {
            let partial = PartialProgress {
                course: Some(course),
                ..PartialProgress::default()
            };
            return Err(failure(PublishStage::Certificate, error, partial));
        }
    };
    tracing::info!(id = certificate.id, cert_id = %certificate.cert_id, "certificate created");

    let mut exams = Vec::with_capacity(plan.exams.len());
    for (index, exam) in plan.exams.iter().enumerate() {
        let request = exam.to_request(course.id, plan.created_by);
        match backend.create_exam(&request).await {
            Ok(created) => {
                tracing::info!(id = created.id, name = %created.name, "exam created");
                exams.push(created);
            }
            Err(error) => {
                let stage = PublishStage::Exam {
                    index,
                    name: exam.name.clone(),
                };
                let partial = PartialProgress {
                    course: Some(course),
                    certificate: Some(certificate),
                    exams,
                };
                return Err(failure(stage, error, partial));
            }
        }
    }

    Ok(PublishReceipt {
        course,
        certificate,
        exams,
    })
}

fn failure(stage: PublishStage, error: ClientError, partial: PartialProgress) -> PublishFailure {
    tracing::warn!(%stage, %error, orphaned = partial.describe().len(), "publish aborted");
    PublishFailure {
        stage,
        error,
        partial,
    }
}
