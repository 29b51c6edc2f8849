pub mod auth;
pub mod certificate;
pub mod course;
pub mod student;
pub mod submission;
pub mod wizard;

pub use auth::AuthCommands;
pub use certificate::CertificateCommands;
pub use course::CourseCommands;
pub use student::StudentCommands;
pub use submission::SubmissionCommands;
pub use wizard::WizardCommands;
