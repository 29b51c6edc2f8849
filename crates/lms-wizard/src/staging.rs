//! Exam staging area.
//!
//! Every exam of the wizard lives in one list as a [`StagedExam`]. The list
//! is read through two views, in-progress and saved, each indexed from zero
//! in list order. Moving an exam between states appends it to the end of
//! the other view.

use std::fmt;

use lms_core::drafts::{CertificateDraft, ExamDraft};
use serde::Serialize;

use crate::error::StagingError;

/// Which view an exam index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamState {
    InProgress,
    Saved,
}

impl fmt::Display for ExamState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in-progress",
            Self::Saved => "saved",
        })
    }
}

/// An exam open for editing, with the question the editor is focused on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableExam {
    pub(crate) draft: ExamDraft,
    pub(crate) cursor: usize,
}

impl EditableExam {
    pub(crate) const fn new(draft: ExamDraft) -> Self {
        Self { draft, cursor: 0 }
    }

    #[must_use]
    pub const fn draft(&self) -> &ExamDraft {
        &self.draft
    }

    /// Index of the focused question. Always `0` when there are no
    /// questions, otherwise a valid question index.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Lifecycle of a single exam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedExam {
    InProgress(EditableExam),
    Saved(ExamDraft),
}

impl StagedExam {
    #[must_use]
    pub const fn state(&self) -> ExamState {
        match self {
            Self::InProgress(_) => ExamState::InProgress,
            Self::Saved(_) => ExamState::Saved,
        }
    }

    #[must_use]
    pub const fn draft(&self) -> &ExamDraft {
        match self {
            Self::InProgress(exam) => &exam.draft,
            Self::Saved(draft) => draft,
        }
    }

    fn into_draft(self) -> ExamDraft {
        match self {
            Self::InProgress(exam) => exam.draft,
            Self::Saved(draft) => draft,
        }
    }
}

/// A saved exam awaiting delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingDelete {
    /// Index in the saved view.
    pub index: usize,
    pub name: String,
}

/// In-progress and saved exams of one wizard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamStaging {
    exams: Vec<StagedExam>,
    pending_delete: Option<PendingDelete>,
    keep_one_draft: bool,
}

impl Default for ExamStaging {
    fn default() -> Self {
        Self::new()
    }
}

impl ExamStaging {
    /// Empty staging area that refuses to remove its last draft.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exams: Vec::new(),
            pending_delete: None,
            keep_one_draft: true,
        }
    }

    /// Toggle the rule that the sole remaining in-progress exam cannot be
    /// removed.
    #[must_use]
    pub const fn with_keep_one_draft(mut self, keep_one_draft: bool) -> Self {
        self.keep_one_draft = keep_one_draft;
        self
    }

    // -- views --------------------------------------------------------------

    /// All exams in list order, whatever their state.
    #[must_use]
    pub fn exams(&self) -> &[StagedExam] {
        &self.exams
    }

    pub fn in_progress(&self) -> impl Iterator<Item = &EditableExam> {
        self.exams.iter().filter_map(|exam| match exam {
            StagedExam::InProgress(editable) => Some(editable),
            StagedExam::Saved(_) => None,
        })
    }

    pub fn saved(&self) -> impl Iterator<Item = &ExamDraft> {
        self.exams.iter().filter_map(|exam| match exam {
            StagedExam::Saved(draft) => Some(draft),
            StagedExam::InProgress(_) => None,
        })
    }

    #[must_use]
    pub fn in_progress_count(&self) -> usize {
        self.in_progress().count()
    }

    #[must_use]
    pub fn saved_count(&self) -> usize {
        self.saved().count()
    }

    #[must_use]
    pub fn in_progress_exam(&self, index: usize) -> Option<&EditableExam> {
        self.in_progress().nth(index)
    }

    #[must_use]
    pub fn saved_exam(&self, index: usize) -> Option<&ExamDraft> {
        self.saved().nth(index)
    }

    #[must_use]
    pub const fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    /// Position in `exams` of the `index`-th exam in `state`.
    fn position(&self, state: ExamState, index: usize) -> Result<usize, StagingError> {
        self.exams
            .iter()
            .enumerate()
            .filter(|(_, exam)| exam.state() == state)
            .nth(index)
            .map(|(position, _)| position)
            .ok_or(StagingError::NoSuchExam { state, index })
    }

    pub(crate) fn editable_mut(&mut self, index: usize) -> Option<&mut EditableExam> {
        self.exams
            .iter_mut()
            .filter_map(|exam| match exam {
                StagedExam::InProgress(editable) => Some(editable),
                StagedExam::Saved(_) => None,
            })
            .nth(index)
    }

    // -- transitions --------------------------------------------------------

    /// Append a new in-progress exam seeded with the certificate's current
    /// pass mark and time limit. Returns its in-progress index.
    pub fn add_draft_exam(&mut self, certificate: &CertificateDraft) -> usize {
        self.exams
            .push(StagedExam::InProgress(EditableExam::new(ExamDraft::seeded(
                certificate,
            ))));
        self.in_progress_count() - 1
    }

    /// Validate the in-progress exam at `index` and move it to the saved
    /// view. Returns its saved index.
    ///
    /// # Errors
    ///
    /// [`StagingError::InvalidExam`] with every violated constraint, leaving
    /// both views unchanged, or [`StagingError::NoSuchExam`].
    pub fn save_exam(&mut self, index: usize) -> Result<usize, StagingError> {
        let position = self.position(ExamState::InProgress, index)?;
        let violations = self.exams[position].draft().violations();
        if !violations.is_empty() {
            return Err(StagingError::InvalidExam(violations));
        }
        let draft = self.exams.remove(position).into_draft();
        tracing::debug!(exam = %draft.name, "exam saved");
        self.exams.push(StagedExam::Saved(draft));
        self.pending_delete = None;
        Ok(self.saved_count() - 1)
    }

    /// Move the saved exam at `index` back to in-progress with the cursor on
    /// its first question. No validation. Returns its in-progress index.
    ///
    /// # Errors
    ///
    /// [`StagingError::NoSuchExam`] if `index` is out of range.
    pub fn edit_saved_exam(&mut self, index: usize) -> Result<usize, StagingError> {
        let position = self.position(ExamState::Saved, index)?;
        let draft = self.exams.remove(position).into_draft();
        self.exams
            .push(StagedExam::InProgress(EditableExam::new(draft)));
        self.pending_delete = None;
        Ok(self.in_progress_count() - 1)
    }

    /// Ask to delete the saved exam at `index`. Nothing is removed until
    /// [`confirm_delete`](Self::confirm_delete).
    ///
    /// # Errors
    ///
    /// [`StagingError::NoSuchExam`] if `index` is out of range.
    pub fn request_delete_saved(&mut self, index: usize) -> Result<PendingDelete, StagingError> {
        let name = self
            .saved_exam(index)
            .map(|draft| draft.name.clone())
            .ok_or(StagingError::NoSuchExam {
                state: ExamState::Saved,
                index,
            })?;
        let pending = PendingDelete { index, name };
        self.pending_delete = Some(pending.clone());
        Ok(pending)
    }

    /// Remove the exam named by the pending delete request.
    ///
    /// # Errors
    ///
    /// [`StagingError::NoPendingDelete`] when nothing was requested.
    pub fn confirm_delete(&mut self) -> Result<ExamDraft, StagingError> {
        let pending = self
            .pending_delete
            .take()
            .ok_or(StagingError::NoPendingDelete)?;
        let position = self.position(ExamState::Saved, pending.index)?;
        let draft = self.exams.remove(position).into_draft();
        tracing::debug!(exam = %draft.name, "saved exam deleted");
        Ok(draft)
    }

    /// Drop the pending delete request, if any.
    pub const fn cancel_delete(&mut self) -> Option<PendingDelete> {
        self.pending_delete.take()
    }

    /// Remove the in-progress exam at `index` without confirmation.
    ///
    /// # Errors
    ///
    /// [`StagingError::LastDraftSlot`] when it is the only in-progress exam
    /// and the keep-one-draft rule is on, or [`StagingError::NoSuchExam`].
    pub fn remove_draft_exam(&mut self, index: usize) -> Result<ExamDraft, StagingError> {
        let position = self.position(ExamState::InProgress, index)?;
        if self.keep_one_draft && self.in_progress_count() == 1 {
            return Err(StagingError::LastDraftSlot);
        }
        Ok(self.exams.remove(position).into_draft())
    }
}
