use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::drafts::CertificateDraft;
use crate::requests::{CreateExamRequest, ExamOption, ExamQuestion};
use crate::validation::{self, ExamViolation, QuestionValidity};

/// One answer choice of a question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OptionDraft {
    pub option_text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// A single multiple-choice question.
///
/// May be transiently invalid (no correct option, empty text) while being
/// edited. Use [`QuestionDraft::validity`] for live feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuestionDraft {
    pub question_text: String,
    pub marks: i64,
    pub options: Vec<OptionDraft>,
}

impl Default for QuestionDraft {
    /// A blank question worth one mark with a single empty option.
    fn default() -> Self {
        Self {
            question_text: String::new(),
            marks: 1,
            options: vec![OptionDraft::default()],
        }
    }
}

impl QuestionDraft {
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|o| o.is_correct).count()
    }

    #[must_use]
    pub fn validity(&self) -> QuestionValidity {
        validation::validate_question(self)
    }

    fn to_wire(&self) -> ExamQuestion {
        ExamQuestion {
            question_text: self.question_text.trim().to_string(),
            marks: self.marks,
            options: self
                .options
                .iter()
                .map(|o| ExamOption {
                    option_text: o.option_text.trim().to_string(),
                    is_correct: o.is_correct,
                })
                .collect(),
        }
    }
}

/// An exam being authored inside the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExamDraft {
    pub name: String,
    pub pass_mark: i64,
    /// Duration in minutes.
    pub duration: i64,
    #[serde(default)]
    pub questions: Vec<QuestionDraft>,
}

impl ExamDraft {
    /// New exam with the certificate's current pass mark and time limit
    /// copied in. Later certificate edits do not propagate.
    #[must_use]
    pub fn seeded(certificate: &CertificateDraft) -> Self {
        Self {
            name: String::new(),
            pass_mark: certificate.pass_mark,
            duration: certificate.time_limit,
            questions: Vec::new(),
        }
    }

    #[must_use]
    pub fn total_marks(&self) -> i64 {
        self.questions.iter().map(|q| q.marks).sum()
    }

    #[must_use]
    pub fn violations(&self) -> Vec<ExamViolation> {
        validation::validate_exam(self)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    /// Wire shape for `POST /exams`. Options carry `is_correct` verbatim.
    #[must_use]
    pub fn to_request(&self, course_id: i64, created_by: i64) -> CreateExamRequest {
        CreateExamRequest {
            name: self.name.trim().to_string(),
            course_id,
            pass_mark: self.pass_mark,
            created_by,
            duration: self.duration,
            questions: self.questions.iter().map(QuestionDraft::to_wire).collect(),
        }
    }
}
