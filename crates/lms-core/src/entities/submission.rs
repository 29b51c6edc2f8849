use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Exam, IssuedCertificate, OptionRecord};
use crate::enums::Outcome;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentName {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseTitle {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExamSummary {
    pub name: String,
    pub pass_mark: i64,
    pub course: CourseTitle,
}

/// A row of `GET /exams/submissions/all`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub score: Option<f64>,
    pub taken_at: DateTime<Utc>,
    pub student: StudentName,
    pub exam: ExamSummary,
}

impl Submission {
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        outcome_for(self.score, self.exam.pass_mark)
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcome() == Outcome::Pass
    }

    /// Case-insensitive match on student name, exam name or course title.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [
            format!("{} {}", self.student.first_name, self.student.last_name),
            self.exam.name.clone(),
            self.exam.course.title.clone(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// One answer picked by the student.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub id: i64,
    pub question_id: i64,
    pub option_id: i64,
    pub option: OptionRecord,
}

/// Response of `GET /exams/submissions/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDetails {
    pub id: i64,
    pub student_id: i64,
    pub exam_id: i64,
    pub score: Option<f64>,
    pub taken_at: DateTime<Utc>,
    pub student: StudentName,
    pub exam: Exam,
    #[serde(default)]
    pub student_exam_answers: Vec<AnswerRecord>,
    #[serde(default)]
    pub certificate: Option<IssuedCertificate>,
}

impl SubmissionDetails {
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        outcome_for(self.score, self.exam.pass_mark)
    }

    #[must_use]
    pub fn correct_answers(&self) -> usize {
        self.student_exam_answers
            .iter()
            .filter(|a| a.option.is_correct)
            .count()
    }

    /// Marks earned from correct answers, using the exam's question weights.
    #[must_use]
    pub fn earned_marks(&self) -> i64 {
        self.student_exam_answers
            .iter()
            .filter(|a| a.option.is_correct)
            .filter_map(|a| self.exam.questions.iter().find(|q| q.id == a.question_id))
            .map(|q| q.marks)
            .sum()
    }

    #[must_use]
    pub const fn is_certified(&self) -> bool {
        self.certificate.is_some()
    }
}

#[allow(clippy::cast_precision_loss)]
fn outcome_for(score: Option<f64>, pass_mark: i64) -> Outcome {
    match score {
        None => Outcome::Pending,
        Some(score) if score >= pass_mark as f64 => Outcome::Pass,
        Some(_) => Outcome::Fail,
    }
}
