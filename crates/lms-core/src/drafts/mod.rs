//! Draft structs edited by the course-creation wizard.
//!
//! Drafts are plain data: every field is public so editors (and tests) can
//! mutate them directly. Invariants such as single-select correct options are
//! enforced by the wizard's editor operations, not by these types, and are
//! checked by [`crate::validation`].

mod certificate;
mod course;
mod exam;

pub use certificate::CertificateDraft;
pub use course::CourseDraft;
pub use exam::{ExamDraft, OptionDraft, QuestionDraft};
