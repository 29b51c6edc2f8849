//! Question and option editor for in-progress exams.
//!
//! Editing never validates: an exam may hold empty text, zero marks or no
//! correct option until [`ExamStaging::save_exam`] gates it. The only
//! structural rules enforced here are that a question keeps at least two
//! options and at most one option is marked correct.

use lms_core::drafts::{OptionDraft, QuestionDraft};
use lms_core::validation::{self, MIN_OPTIONS, QuestionValidity};

use crate::error::EditorError;
use crate::staging::{EditableExam, ExamStaging};

impl EditableExam {
    fn question_mut(
        &mut self,
        exam: usize,
        question: usize,
    ) -> Result<&mut QuestionDraft, EditorError> {
        self.draft
            .questions
            .get_mut(question)
            .ok_or(EditorError::NoSuchQuestion { exam, question })
    }

    fn check_question(&self, exam: usize, question: usize) -> Result<(), EditorError> {
        if question < self.draft.questions.len() {
            Ok(())
        } else {
            Err(EditorError::NoSuchQuestion { exam, question })
        }
    }
}

impl ExamStaging {
    fn exam_mut(&mut self, exam: usize) -> Result<&mut EditableExam, EditorError> {
        self.editable_mut(exam).ok_or(EditorError::NoSuchExam { exam })
    }

    fn exam_ref(&self, exam: usize) -> Result<&EditableExam, EditorError> {
        self.in_progress_exam(exam)
            .ok_or(EditorError::NoSuchExam { exam })
    }

    // -- exam fields --------------------------------------------------------

    /// # Errors
    ///
    /// [`EditorError::NoSuchExam`] if `exam` is not an in-progress index.
    pub fn set_exam_name(
        &mut self,
        exam: usize,
        name: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.exam_mut(exam)?.draft.name = name.into();
        Ok(())
    }

    /// # Errors
    ///
    /// [`EditorError::NoSuchExam`] if `exam` is not an in-progress index.
    pub fn set_exam_pass_mark(&mut self, exam: usize, pass_mark: i64) -> Result<(), EditorError> {
        self.exam_mut(exam)?.draft.pass_mark = pass_mark;
        Ok(())
    }

    /// # Errors
    ///
    /// [`EditorError::NoSuchExam`] if `exam` is not an in-progress index.
    pub fn set_exam_duration(&mut self, exam: usize, duration: i64) -> Result<(), EditorError> {
        self.exam_mut(exam)?.draft.duration = duration;
        Ok(())
    }

    /// Sum of question marks of an in-progress exam.
    ///
    /// # Errors
    ///
    /// [`EditorError::NoSuchExam`] if `exam` is not an in-progress index.
    pub fn total_marks(&self, exam: usize) -> Result<i64, EditorError> {
        Ok(self.exam_ref(exam)?.draft.total_marks())
    }

    // -- questions ----------------------------------------------------------

    /// Append a blank question (one mark, one empty option) and focus it.
    /// Returns the new question's index.
    ///
    /// # Errors
    ///
    /// [`EditorError::NoSuchExam`] if `exam` is not an in-progress index.
    pub fn add_question(&mut self, exam: usize) -> Result<usize, EditorError> {
        let editable = self.exam_mut(exam)?;
        editable.draft.questions.push(QuestionDraft::default());
        editable.cursor = editable.draft.questions.len() - 1;
        Ok(editable.cursor)
    }

    /// Remove a question and keep the cursor on a valid index.
    ///
    /// If the removed question was at or before the cursor the cursor steps
    /// back by one (unless already at zero), then it is clamped to the last
    /// remaining question, or `0` when none remain.
    ///
    /// # Errors
    ///
    /// [`EditorError::NoSuchExam`] or [`EditorError::NoSuchQuestion`].
    pub fn remove_question(
        &mut self,
        exam: usize,
        question: usize,
    ) -> Result<QuestionDraft, EditorError> {
        let editable = self.exam_mut(exam)?;
        editable.check_question(exam, question)?;
        let removed = editable.draft.questions.remove(question);
        if question <= editable.cursor && editable.cursor > 0 {
            editable.cursor -= 1;
        }
        editable.cursor = editable
            .cursor
            .min(editable.draft.questions.len().saturating_sub(1));
        Ok(removed)
    }

    /// # Errors
    ///
    /// [`EditorError::NoSuchExam`] or [`EditorError::NoSuchQuestion`].
    pub fn set_question_text(
        &mut self,
        exam: usize,
        question: usize,
        text: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.exam_mut(exam)?.question_mut(exam, question)?.question_text = text.into();
        Ok(())
    }

    /// # Errors
    ///
    /// [`EditorError::NoSuchExam`] or [`EditorError::NoSuchQuestion`].
    pub fn set_question_marks(
        &mut self,
        exam: usize,
        question: usize,
        marks: i64,
    ) -> Result<(), EditorError> {
        self.exam_mut(exam)?.question_mut(exam, question)?.marks = marks;
        Ok(())
    }

    /// Live feedback for one question; never blocks editing.
    ///
    /// # Errors
    ///
    /// [`EditorError::NoSuchExam`] or [`EditorError::NoSuchQuestion`].
    pub fn validate_question(
        &self,
        exam: usize,
        question: usize,
    ) -> Result<QuestionValidity, EditorError> {
        self.exam_ref(exam)?
            .draft
            .questions
            .get(question)
            .map(validation::validate_question)
            .ok_or(EditorError::NoSuchQuestion { exam, question })
    }

    // -- navigation ---------------------------------------------------------

    /// # Errors
    ///
    /// [`EditorError::NoSuchExam`] if `exam` is not an in-progress index.
    pub fn cursor(&self, exam: usize) -> Result<usize, EditorError> {
        Ok(self.exam_ref(exam)?.cursor)
    }

    /// Focus a specific question.
    ///
    /// # Errors
    ///
    /// [`EditorError::NoSuchExam`] or [`EditorError::NoSuchQuestion`].
    pub fn select_question(&mut self, exam: usize, question: usize) -> Result<(), EditorError> {
        let editable = self.exam_mut(exam)?;
        editable.check_question(exam, question)?;
        editable.cursor = question;
        Ok(())
    }

    /// Move the cursor forward; stays put on the last question.
    ///
    /// # Errors
    ///
    /// [`EditorError::NoSuchExam`] if `exam` is not an in-progress index.
    pub fn next_question(&mut self, exam: usize) -> Result<usize, EditorError> {
        let editable = self.exam_mut(exam)?;
        if editable.cursor + 1 < editable.draft.questions.len() {
            editable.cursor += 1;
        }
        Ok(editable.cursor)
    }

    /// Move the cursor back; stays put on the first question.
    ///
    /// # Errors
    ///
    /// [`EditorError::NoSuchExam`] if `exam` is not an in-progress index.
    pub fn previous_question(&mut self, exam: usize) -> Result<usize, EditorError> {
        let editable = self.exam_mut(exam)?;
        editable.cursor = editable.cursor.saturating_sub(1);
        Ok(editable.cursor)
    }

    // -- options ------------------------------------------------------------

    /// Append an empty, incorrect option. Returns its index.
    ///
    /// # Errors
    ///
    /// [`EditorError::NoSuchExam`] or [`EditorError::NoSuchQuestion`].
    pub fn add_option(&mut self, exam: usize, question: usize) -> Result<usize, EditorError> {
        let target = self.exam_mut(exam)?.question_mut(exam, question)?;
        target.options.push(OptionDraft::default());
        Ok(target.options.len() - 1)
    }

    /// Remove an option. Questions with two or fewer options are left
    /// untouched.
    ///
    /// # Errors
    ///
    /// [`EditorError::TooFewOptions`] when the question has at most two
    /// options, or a lookup error for a bad index.
    pub fn remove_option(
        &mut self,
        exam: usize,
        question: usize,
        option: usize,
    ) -> Result<OptionDraft, EditorError> {
        let target = self.exam_mut(exam)?.question_mut(exam, question)?;
        let count = target.options.len();
        if option >= count {
            return Err(EditorError::NoSuchOption { question, option });
        }
        if count <= MIN_OPTIONS {
            return Err(EditorError::TooFewOptions { question, count });
        }
        Ok(target.options.remove(option))
    }

    /// # Errors
    ///
    /// A lookup error for a bad exam, question or option index.
    pub fn set_option_text(
        &mut self,
        exam: usize,
        question: usize,
        option: usize,
        text: impl Into<String>,
    ) -> Result<(), EditorError> {
        let target = self.exam_mut(exam)?.question_mut(exam, question)?;
        let slot = target
            .options
            .get_mut(option)
            .ok_or(EditorError::NoSuchOption { question, option })?;
        slot.option_text = text.into();
        Ok(())
    }

    /// Mark one option correct and every sibling incorrect. Idempotent.
    ///
    /// # Errors
    ///
    /// A lookup error for a bad exam, question or option index.
    pub fn set_correct_option(
        &mut self,
        exam: usize,
        question: usize,
        option: usize,
    ) -> Result<(), EditorError> {
        let target = self.exam_mut(exam)?.question_mut(exam, question)?;
        if option >= target.options.len() {
            return Err(EditorError::NoSuchOption { question, option });
        }
        for (index, slot) in target.options.iter_mut().enumerate() {
            slot.is_correct = index == option;
        }
        Ok(())
    }
}
