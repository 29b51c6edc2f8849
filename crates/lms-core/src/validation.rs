//! Validators for wizard drafts.
//!
//! Two tiers exist: [`validate_question`] gives live per-question feedback
//! and never blocks editing; [`validate_exam`], [`validate_course`] and
//! [`validate_certificate`] gate step transitions and saves.
//! [`validate_sign_in`] checks credentials before they are sent.

use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

use crate::drafts::{CertificateDraft, CourseDraft, ExamDraft, QuestionDraft};

/// Minimum number of options a question must keep.
pub const MIN_OPTIONS: usize = 2;

/// Inclusive pass mark bounds (percent).
pub const PASS_MARK_RANGE: (i64, i64) = (1, 100);

/// Shortest accepted sign-in password.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// ---------------------------------------------------------------------------
// Field violations (course / certificate steps)
// ---------------------------------------------------------------------------

/// A single violated field constraint on a draft or sign-in form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldViolation {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be greater than 0")]
    NotPositive { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("{field} must be a valid email address")]
    InvalidEmail { field: &'static str },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
}

impl FieldViolation {
    /// Render a list of violations as one `; `-separated message.
    #[must_use]
    pub fn join(violations: &[Self]) -> String {
        violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn require_text(violations: &mut Vec<FieldViolation>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        violations.push(FieldViolation::Required { field });
    }
}

/// Step 1 gate.
#[must_use]
pub fn validate_course(draft: &CourseDraft) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    require_text(&mut violations, "course_id", &draft.course_id);
    require_text(&mut violations, "title", &draft.title);
    require_text(&mut violations, "description", &draft.description);
    // NaN fails both comparisons and is rejected.
    if draft.cost.partial_cmp(&0.0) != Some(Ordering::Greater) {
        violations.push(FieldViolation::NotPositive { field: "cost" });
    }
    if draft.duration.partial_cmp(&0.0) != Some(Ordering::Greater) {
        violations.push(FieldViolation::NotPositive { field: "duration" });
    }
    violations
}

/// Step 2 gate.
#[must_use]
pub fn validate_certificate(draft: &CertificateDraft) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    require_text(&mut violations, "cert_id", &draft.cert_id);
    require_text(&mut violations, "cert_name", &draft.cert_name);
    let (min, max) = PASS_MARK_RANGE;
    if !(min..=max).contains(&draft.pass_mark) {
        violations.push(FieldViolation::OutOfRange {
            field: "pass_mark",
            min,
            max,
        });
    }
    if draft.time_limit < 1 {
        violations.push(FieldViolation::NotPositive {
            field: "time_limit",
        });
    }
    violations
}

/// Sign-in form check. The password is counted in characters, not bytes.
#[must_use]
pub fn validate_sign_in(email: &str, password: &str) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    if email.trim().is_empty() {
        violations.push(FieldViolation::Required { field: "email" });
    } else if !EMAIL_RE.is_match(email) {
        violations.push(FieldViolation::InvalidEmail { field: "email" });
    }
    if password.is_empty() {
        violations.push(FieldViolation::Required { field: "password" });
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        violations.push(FieldViolation::TooShort {
            field: "password",
            min: MIN_PASSWORD_LEN,
        });
    }
    violations
}

// ---------------------------------------------------------------------------
// Question validity (live feedback)
// ---------------------------------------------------------------------------

/// Named sub-checks of a question. `is_valid` is the AND of the other five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionValidity {
    pub has_text: bool,
    pub has_marks: bool,
    pub has_enough_options: bool,
    pub has_one_correct: bool,
    pub has_no_empty_options: bool,
    pub is_valid: bool,
}

impl QuestionValidity {
    /// Human-readable messages for every failed sub-check.
    #[must_use]
    pub fn problems(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();
        if !self.has_text {
            problems.push("question text is required");
        }
        if !self.has_marks {
            problems.push("marks must be greater than 0");
        }
        if !self.has_enough_options {
            problems.push("at least 2 options required");
        }
        if !self.has_one_correct {
            problems.push("exactly one correct answer required");
        }
        if !self.has_no_empty_options {
            problems.push("all options must have text");
        }
        problems
    }
}

#[must_use]
pub fn validate_question(question: &QuestionDraft) -> QuestionValidity {
    let has_text = !question.question_text.trim().is_empty();
    let has_marks = question.marks > 0;
    let has_enough_options = question.options.len() >= MIN_OPTIONS;
    let has_one_correct = question.correct_count() == 1;
    let has_no_empty_options = question
        .options
        .iter()
        .all(|o| !o.option_text.trim().is_empty());

    QuestionValidity {
        has_text,
        has_marks,
        has_enough_options,
        has_one_correct,
        has_no_empty_options,
        is_valid: has_text
            && has_marks
            && has_enough_options
            && has_one_correct
            && has_no_empty_options,
    }
}

// ---------------------------------------------------------------------------
// Exam violations (save gate)
// ---------------------------------------------------------------------------

/// A constraint that prevents an exam from being saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExamViolation {
    MissingName,
    NoQuestions,
    InvalidQuestion {
        /// Zero-based question index.
        index: usize,
        validity: QuestionValidity,
    },
}

impl fmt::Display for ExamViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => f.write_str("exam name is required"),
            Self::NoQuestions => f.write_str("exam needs at least one question"),
            Self::InvalidQuestion { index, validity } => write!(
                f,
                "question {}: {}",
                index + 1,
                validity.problems().join(", ")
            ),
        }
    }
}

/// Save gate: name, at least one question, every question valid.
#[must_use]
pub fn validate_exam(exam: &ExamDraft) -> Vec<ExamViolation> {
    let mut violations = Vec::new();
    if exam.name.trim().is_empty() {
        violations.push(ExamViolation::MissingName);
    }
    if exam.questions.is_empty() {
        violations.push(ExamViolation::NoQuestions);
    }
    for (index, question) in exam.questions.iter().enumerate() {
        let validity = validate_question(question);
        if !validity.is_valid {
            violations.push(ExamViolation::InvalidQuestion { index, validity });
        }
    }
    violations
}
