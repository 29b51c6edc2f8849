//! Declarative course plans.
//!
//! A plan mirrors what an admin types into the wizard:
//!
//! ```toml
//! [course]
//! course_id = "JS001"
//! title = "Intro to JavaScript"
//! description = "Variables, functions, and the DOM"
//! cost = 49.99
//! duration = 12
//!
//! [certificate]
//! cert_id = "ORN-JS-001"
//! cert_name = "JavaScript Fundamentals"
//! pass_mark = 70
//! time_limit = 60
//!
//! [[exams]]
//! name = "Midterm"
//!
//! [[exams.questions]]
//! text = "What does DOM stand for?"
//! marks = 2
//! options = [
//!     { text = "Document Object Model", correct = true },
//!     { text = "Data Object Map" },
//! ]
//! ```
//!
//! [`CoursePlan::replay`] feeds the plan through the public wizard
//! operations, so every gate applies exactly as it would interactively.

use std::path::Path;

use lms_core::drafts::{CertificateDraft, CourseDraft};
use lms_core::enums::WizardStep;
use lms_core::validation::{ExamViolation, QuestionValidity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, ReplayError, StagingError};
use crate::staging::ExamStaging;
use crate::wizard::CourseWizard;

const fn default_marks() -> i64 {
    1
}

/// A whole course: details, certificate and exams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CoursePlan {
    pub course: CourseDraft,
    pub certificate: CertificateDraft,
    #[serde(default)]
    pub exams: Vec<PlanExam>,
}

/// An exam. `pass_mark` and `duration` default to the certificate's pass
/// mark and time limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PlanExam {
    pub name: String,
    #[serde(default)]
    pub pass_mark: Option<i64>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub questions: Vec<PlanQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PlanQuestion {
    pub text: String,
    #[serde(default = "default_marks")]
    pub marks: i64,
    #[serde(default)]
    pub options: Vec<PlanOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PlanOption {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

/// Outcome of replaying one plan exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExamReport {
    pub name: String,
    pub total_marks: i64,
    /// Live validity of each question, in plan order.
    pub questions: Vec<QuestionValidity>,
    /// Why the exam could not be saved; empty when it was.
    pub violations: Vec<ExamViolation>,
}

impl ExamReport {
    #[must_use]
    pub fn is_saved(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub exams: Vec<ExamReport>,
}

impl ReplayReport {
    /// Whether every plan exam reached the saved state.
    #[must_use]
    pub fn all_saved(&self) -> bool {
        self.exams.iter().all(ExamReport::is_saved)
    }

    #[must_use]
    pub fn saved_count(&self) -> usize {
        self.exams.iter().filter(|e| e.is_saved()).count()
    }
}

/// A wizard positioned on the exam step, plus what happened to each exam.
#[derive(Debug, Clone)]
pub struct Replay {
    pub wizard: CourseWizard,
    pub report: ReplayReport,
}

impl CoursePlan {
    /// Load a plan, choosing JSON for `.json` files and TOML otherwise.
    ///
    /// # Errors
    ///
    /// [`PlanError`] if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, PlanError> {
        let text = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }

    /// # Errors
    ///
    /// [`PlanError::Toml`] on malformed input.
    pub fn from_toml_str(text: &str) -> Result<Self, PlanError> {
        Ok(toml::from_str(text)?)
    }

    /// # Errors
    ///
    /// [`PlanError::Json`] on malformed input.
    pub fn from_json_str(text: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(text)?)
    }

    /// JSON Schema describing plan files.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Self)
    }

    /// Drive a fresh wizard through the plan.
    ///
    /// Steps 1 and 2 must validate. Each exam is then built with the editor
    /// and saved; exams that fail validation stay in progress and their
    /// violations are recorded in the report.
    ///
    /// # Errors
    ///
    /// [`ReplayError::Wizard`] when the course or certificate step is
    /// rejected.
    pub fn replay(&self, keep_one_draft: bool) -> Result<Replay, ReplayError> {
        let staging = ExamStaging::new().with_keep_one_draft(keep_one_draft);
        let mut wizard = CourseWizard::with_staging(staging);

        *wizard.course_mut() = self.course.clone();
        wizard.advance()?;
        *wizard.certificate_mut() = self.certificate.clone();
        wizard.advance()?;
        debug_assert_eq!(wizard.step(), WizardStep::ExamDetails);

        let mut report = ReplayReport::default();
        for exam in &self.exams {
            report.exams.push(replay_exam(&mut wizard, exam)?);
        }
        tracing::debug!(
            exams = report.exams.len(),
            saved = report.saved_count(),
            "plan replayed"
        );
        Ok(Replay { wizard, report })
    }
}

fn replay_exam(wizard: &mut CourseWizard, exam: &PlanExam) -> Result<ExamReport, ReplayError> {
    let index = wizard.add_draft_exam();
    let staging = wizard.staging_mut();
    staging.set_exam_name(index, exam.name.as_str())?;
    if let Some(pass_mark) = exam.pass_mark {
        staging.set_exam_pass_mark(index, pass_mark)?;
    }
    if let Some(duration) = exam.duration {
        staging.set_exam_duration(index, duration)?;
    }

    let mut questions = Vec::with_capacity(exam.questions.len());
    for plan_question in &exam.questions {
        let question = staging.add_question(index)?;
        staging.set_question_text(index, question, plan_question.text.as_str())?;
        staging.set_question_marks(index, question, plan_question.marks)?;
        replay_options(staging, index, question, &plan_question.options)?;
        questions.push(staging.validate_question(index, question)?);
    }
    let total_marks = staging.total_marks(index)?;

    let violations = match staging.save_exam(index) {
        Ok(_) => Vec::new(),
        Err(StagingError::InvalidExam(violations)) => violations,
        Err(other) => return Err(other.into()),
    };
    Ok(ExamReport {
        name: exam.name.clone(),
        total_marks,
        questions,
        violations,
    })
}

fn replay_options(
    staging: &mut ExamStaging,
    exam: usize,
    question: usize,
    options: &[PlanOption],
) -> Result<(), ReplayError> {
    if options.iter().filter(|o| o.correct).count() > 1 {
        tracing::warn!(exam, question, "several options marked correct; the last one wins");
    }
    for (position, option) in options.iter().enumerate() {
        // A new question already carries one empty option.
        let slot = if position == 0 {
            0
        } else {
            staging.add_option(exam, question)?
        };
        staging.set_option_text(exam, question, slot, option.text.as_str())?;
        if option.correct {
            staging.set_correct_option(exam, question, slot)?;
        }
    }
    Ok(())
}
