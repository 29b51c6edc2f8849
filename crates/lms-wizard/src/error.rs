use std::path::PathBuf;

use lms_core::enums::WizardStep;
use lms_core::validation::{ExamViolation, FieldViolation};
use thiserror::Error;

use crate::orchestrator::PublishFailure;
use crate::staging::ExamState;

/// Errors from moving exams between the in-progress and saved views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StagingError {
    #[error("exam cannot be saved: {}", join_exam_violations(.0))]
    InvalidExam(Vec<ExamViolation>),

    #[error("the last in-progress exam cannot be removed")]
    LastDraftSlot,

    #[error("no {state} exam at index {index}")]
    NoSuchExam { state: ExamState, index: usize },

    #[error("no delete is pending")]
    NoPendingDelete,
}

/// Errors from the question and option editor. State is never modified when
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("no in-progress exam at index {exam}")]
    NoSuchExam { exam: usize },

    #[error("exam {exam} has no question at index {question}")]
    NoSuchQuestion { exam: usize, question: usize },

    #[error("question {question} has no option at index {option}")]
    NoSuchOption { question: usize, option: usize },

    #[error("question {question} must keep more than {count} options before one can be removed")]
    TooFewOptions { question: usize, count: usize },
}

/// Errors from the wizard controller.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("{step} rejected: {}", FieldViolation::join(.violations))]
    StepRejected {
        step: WizardStep,
        violations: Vec<FieldViolation>,
    },

    #[error("already at the last step")]
    AtLastStep,

    #[error("already at the first step")]
    AtFirstStep,

    #[error("submission is only possible from {}, currently at {current}", WizardStep::ExamDetails)]
    NotAtFinalStep { current: WizardStep },

    #[error(transparent)]
    Publish(#[from] PublishFailure),
}

/// Errors loading a course plan file.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read plan {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML plan: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON plan: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors replaying a plan through the wizard. Exams that fail to save are
/// reported, not raised; only a rejected course or certificate step stops a
/// replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Staging(#[from] StagingError),
}

fn join_exam_violations(violations: &[ExamViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
