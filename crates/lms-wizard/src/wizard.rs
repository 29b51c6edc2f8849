use lms_core::drafts::{CertificateDraft, CourseDraft};
use lms_core::enums::WizardStep;
use lms_core::validation::FieldViolation;

use crate::error::WizardError;
use crate::orchestrator::{self, CourseBackend, PublishReceipt, SubmissionPlan};
use crate::staging::ExamStaging;

/// Three-step course creation: course details, certificate details, exams.
///
/// Steps only move forward when the current step validates. Drafts are
/// kept in memory for the lifetime of the wizard, including after a failed
/// submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseWizard {
    step: WizardStep,
    course: CourseDraft,
    certificate: CertificateDraft,
    staging: ExamStaging,
}

impl CourseWizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-configured staging area (e.g. a different
    /// keep-one-draft rule).
    #[must_use]
    pub fn with_staging(staging: ExamStaging) -> Self {
        Self {
            staging,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub const fn course(&self) -> &CourseDraft {
        &self.course
    }

    pub const fn course_mut(&mut self) -> &mut CourseDraft {
        &mut self.course
    }

    #[must_use]
    pub const fn certificate(&self) -> &CertificateDraft {
        &self.certificate
    }

    pub const fn certificate_mut(&mut self) -> &mut CertificateDraft {
        &mut self.certificate
    }

    #[must_use]
    pub const fn staging(&self) -> &ExamStaging {
        &self.staging
    }

    pub const fn staging_mut(&mut self) -> &mut ExamStaging {
        &mut self.staging
    }

    /// Add an in-progress exam seeded from the current certificate draft.
    pub fn add_draft_exam(&mut self) -> usize {
        self.staging.add_draft_exam(&self.certificate)
    }

    /// Constraints the given step currently violates.
    #[must_use]
    pub fn step_violations(&self, step: WizardStep) -> Vec<FieldViolation> {
        match step {
            WizardStep::CourseDetails => self.course.violations(),
            WizardStep::CertificateDetails => self.certificate.violations(),
            WizardStep::ExamDetails => {
                if self.staging.saved_count() == 0 {
                    vec![FieldViolation::Required {
                        field: "saved exam",
                    }]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Move to the next step if the current one validates.
    ///
    /// # Errors
    ///
    /// [`WizardError::StepRejected`] listing every violation, or
    /// [`WizardError::AtLastStep`] from the exam step. The step is unchanged
    /// on error.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let next = self.step.next().ok_or(WizardError::AtLastStep)?;
        let violations = self.step_violations(self.step);
        if !violations.is_empty() {
            return Err(WizardError::StepRejected {
                step: self.step,
                violations,
            });
        }
        tracing::debug!(from = %self.step, to = %next, "wizard advanced");
        self.step = next;
        Ok(next)
    }

    /// Move to the previous step. Never validates.
    ///
    /// # Errors
    ///
    /// [`WizardError::AtFirstStep`] on step 1.
    pub fn retreat(&mut self) -> Result<WizardStep, WizardError> {
        self.step = self.step.previous().ok_or(WizardError::AtFirstStep)?;
        Ok(self.step)
    }

    /// Borrow the drafts and saved exams as one publish run.
    #[must_use]
    pub fn submission_plan(&self, created_by: i64) -> SubmissionPlan<'_> {
        SubmissionPlan {
            course: &self.course,
            certificate: &self.certificate,
            exams: self.staging.saved().collect(),
            created_by,
        }
    }

    /// Re-check every step and publish course, certificate and saved exams.
    ///
    /// Only in-progress exams are left out. The wizard keeps all of its
    /// state whatever the outcome.
    ///
    /// # Errors
    ///
    /// [`WizardError::NotAtFinalStep`] before step 3,
    /// [`WizardError::StepRejected`] for the first step that no longer
    /// validates, or [`WizardError::Publish`] naming the failed request.
    pub async fn submit<B: CourseBackend>(
        &mut self,
        backend: &B,
        created_by: i64,
    ) -> Result<PublishReceipt, WizardError> {
        if self.step != WizardStep::ExamDetails {
            return Err(WizardError::NotAtFinalStep { current: self.step });
        }
        for step in [
            WizardStep::CourseDetails,
            WizardStep::CertificateDetails,
            WizardStep::ExamDetails,
        ] {
            let violations = self.step_violations(step);
            if !violations.is_empty() {
                return Err(WizardError::StepRejected { step, violations });
            }
        }
        let plan = self.submission_plan(created_by);
        Ok(orchestrator::publish(backend, &plan).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_core::enums::CourseStatus;
    use pretty_assertions::assert_eq;

    fn filled_course() -> CourseDraft {
        CourseDraft {
            course_id: "JS001".into(),
            title: "JavaScript".into(),
            description: "Basics".into(),
            status: CourseStatus::Active,
            cost: 10.0,
            duration: 4.0,
        }
    }

    #[test]
    fn starts_on_course_details() {
        let wizard = CourseWizard::new();
        assert_eq!(wizard.step(), WizardStep::CourseDetails);
        assert_eq!(wizard.certificate().pass_mark, 70);
    }

    #[test]
    fn rejected_advance_lists_every_violation() {
        let mut wizard = CourseWizard::new();
        wizard.course_mut().title = "Only a title".into();
        wizard.course_mut().cost = -1.0;

        let err = wizard.advance().unwrap_err();
        let WizardError::StepRejected { step, violations } = err else {
            panic!("expected step rejection, got {err:?}");
        };
        assert_eq!(step, WizardStep::CourseDetails);
        assert_eq!(
            violations,
            vec![
                FieldViolation::Required { field: "course_id" },
                FieldViolation::Required {
                    field: "description"
                },
                FieldViolation::NotPositive { field: "cost" },
                FieldViolation::NotPositive { field: "duration" },
            ]
        );
        assert_eq!(wizard.step(), WizardStep::CourseDetails);
    }

    #[test]
    fn advance_and_retreat_walk_the_steps() {
        let mut wizard = CourseWizard::new();
        *wizard.course_mut() = filled_course();
        wizard.certificate_mut().cert_id = "C-1".into();
        wizard.certificate_mut().cert_name = "Cert".into();

        assert_eq!(wizard.advance().unwrap(), WizardStep::CertificateDetails);
        assert_eq!(wizard.advance().unwrap(), WizardStep::ExamDetails);
        assert!(matches!(wizard.advance(), Err(WizardError::AtLastStep)));
        assert_eq!(wizard.retreat().unwrap(), WizardStep::CertificateDetails);
        assert_eq!(wizard.retreat().unwrap(), WizardStep::CourseDetails);
        assert!(matches!(wizard.retreat(), Err(WizardError::AtFirstStep)));
    }

    #[test]
    fn retreat_never_validates() {
        let mut wizard = CourseWizard::new();
        *wizard.course_mut() = filled_course();
        wizard.advance().unwrap();
        wizard.course_mut().title.clear();
        assert_eq!(wizard.retreat().unwrap(), WizardStep::CourseDetails);
    }

    #[test]
    fn exam_step_needs_a_saved_exam() {
        let mut wizard = CourseWizard::new();
        wizard.add_draft_exam();
        assert_eq!(
            wizard.step_violations(WizardStep::ExamDetails),
            vec![FieldViolation::Required {
                field: "saved exam"
            }]
        );
    }

    #[test]
    fn draft_exam_is_seeded_from_certificate() {
        let mut wizard = CourseWizard::new();
        wizard.certificate_mut().pass_mark = 55;
        let index = wizard.add_draft_exam();
        wizard.certificate_mut().pass_mark = 90;
        let exam = wizard.staging().in_progress_exam(index).unwrap();
        assert_eq!(exam.draft().pass_mark, 55);
    }
}
