//! Records returned by the LMS backend.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Keys are
//! camelCase on the wire; unknown fields are ignored so backend additions do
//! not break deserialization.

mod admin;
mod certificate;
mod course;
mod created;
mod exam;
mod student;
mod submission;

pub use admin::{AdminUser, DashboardStats};
pub use certificate::{Certificate, IssuedCertificate};
pub use course::Course;
pub use created::Created;
pub use exam::{Exam, OptionRecord, QuestionRecord};
pub use student::{Enrollment, Student};
pub use submission::{
    AnswerRecord, CourseTitle, ExamSummary, StudentName, Submission, SubmissionDetails,
};
