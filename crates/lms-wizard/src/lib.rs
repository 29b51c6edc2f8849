//! # lms-wizard
//!
//! The three-step course creation workflow as a library.
//!
//! - [`CourseWizard`] owns the course and certificate drafts, the active
//!   step, and the [`ExamStaging`] area.
//! - [`ExamStaging`] holds every exam as a [`StagedExam`]: in progress
//!   (editable, possibly invalid) or saved (validated). The question and
//!   option editor lives in [`editor`] as methods on `ExamStaging`.
//! - [`orchestrator::publish`] writes course, certificate and exams to a
//!   [`CourseBackend`] one request at a time.
//! - [`plan::CoursePlan`] replays a declarative plan file through the same
//!   public operations.

pub mod editor;
pub mod orchestrator;
pub mod plan;
pub mod staging;

mod error;
mod wizard;

pub use error::{EditorError, PlanError, ReplayError, StagingError, WizardError};
pub use orchestrator::{
    CourseBackend, PartialProgress, PublishFailure, PublishReceipt, PublishStage, SubmissionPlan,
};
pub use plan::{CoursePlan, ExamReport, Replay, ReplayReport};
pub use staging::{EditableExam, ExamState, ExamStaging, PendingDelete, StagedExam};
pub use wizard::CourseWizard;
